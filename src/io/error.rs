use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("coordinate {column} of particle {row} is not a finite number")]
    NonFiniteCoordinate { row: usize, column: usize },
}
