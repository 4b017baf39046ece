//! Writers for the two files the simulation engine reads.
//!
//! - [`gmad`] — the `beam` statement of a [`Beam`](crate::Beam)
//! - [`userfile`] — per-particle coordinates for the `userfile` distribution,
//!   optionally gzip-compressed

use std::fmt;
use std::path::Path;

pub mod error;
pub mod gmad;
pub mod userfile;

pub use error::Error;

/// Byte encoding of an output file, chosen from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Codec {
    #[default]
    Plain,
    Gzip,
}

impl Codec {
    /// `Gzip` for paths ending in `.gz`, `Plain` otherwise.
    pub fn from_path(path: &Path) -> Self {
        if path.to_string_lossy().ends_with(".gz") {
            Codec::Gzip
        } else {
            Codec::Plain
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codec::Plain => write!(f, "plain text"),
            Codec::Gzip => write!(f, "gzip"),
        }
    }
}
