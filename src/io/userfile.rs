use crate::io::Codec;
use crate::io::error::Error;
use crate::model::quantity::format_number;
use flate2::write::GzEncoder;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one particle per line, coordinates separated by tabs.
///
/// Lines are joined by `\n` with no newline after the last one. Rows without
/// coordinates produce no line. A non-finite coordinate stops the write with
/// [`Error::NonFiniteCoordinate`]; earlier rows may already be written.
pub fn write<W, R>(mut writer: W, coordinates: &[R]) -> Result<(), Error>
where
    W: Write,
    R: AsRef<[f64]>,
{
    let mut first_line = true;
    for (row, coords) in coordinates.iter().enumerate() {
        let coords = coords.as_ref();
        if coords.is_empty() {
            continue;
        }
        if let Some(column) = coords.iter().position(|c| !c.is_finite()) {
            return Err(Error::NonFiniteCoordinate { row, column });
        }

        if !first_line {
            writer.write_all(b"\n")?;
        }
        first_line = false;

        for (column, &c) in coords.iter().enumerate() {
            if column > 0 {
                writer.write_all(b"\t")?;
            }
            writer.write_all(format_number(c).as_bytes())?;
        }
    }
    Ok(())
}

/// Writes a coordinate file for the `userfile` distribution.
///
/// Paths ending in `.gz` are gzip-compressed; anything else is plain text.
/// An existing file is replaced.
pub fn write_file<P, R>(path: P, coordinates: &[R]) -> Result<(), Error>
where
    P: AsRef<Path>,
    R: AsRef<[f64]>,
{
    let path = path.as_ref();
    let codec = Codec::from_path(path);
    let file = BufWriter::new(File::create(path)?);

    match codec {
        Codec::Plain => {
            let mut writer = file;
            write(&mut writer, coordinates)?;
            writer.flush()?;
        }
        Codec::Gzip => {
            let mut encoder = GzEncoder::new(file, flate2::Compression::default());
            write(&mut encoder, coordinates)?;
            encoder.finish()?.flush()?;
        }
    }

    debug!(
        "wrote {} coordinate rows to {} ({})",
        coordinates.len(),
        path.display(),
        codec
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn render<R: AsRef<[f64]>>(coordinates: &[R]) -> String {
        let mut buf = Vec::new();
        write(&mut buf, coordinates).expect("write userfile");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn tab_and_newline_separated_without_trailers() {
        assert_eq!(render(&[[1.0, 2.0], [3.0, 4.0]]), "1.0\t2.0\n3.0\t4.0");
    }

    #[test]
    fn ragged_rows_and_single_values() {
        let rows = vec![vec![0.5], vec![1e-7, -2.0, 3.25]];
        assert_eq!(render(&rows), "0.5\n1e-7\t-2.0\t3.25");
    }

    #[test]
    fn empty_rows_produce_no_lines() {
        let rows: Vec<Vec<f64>> = vec![vec![], vec![1.0], vec![], vec![2.0], vec![]];
        assert_eq!(render(&rows), "1.0\n2.0");

        let none: Vec<Vec<f64>> = Vec::new();
        assert_eq!(render(&none), "");
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, f64::NAN]];
        let err = write(Vec::new(), &rows).unwrap_err();
        assert!(matches!(err, Error::NonFiniteCoordinate { row: 1, column: 1 }));
        assert_eq!(
            err.to_string(),
            "coordinate 1 of particle 1 is not a finite number"
        );
    }

    #[test]
    fn plain_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beam.dat");
        write_file(&path, &[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1.0\t2.0\n3.0\t4.0");
    }

    #[test]
    fn gzip_file_decompresses_to_plain_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beam.dat.gz");
        write_file(&path, &[[1.0, 2.0], [3.0, 4.0]]).unwrap();

        let raw = std::fs::read(&path).unwrap();
        assert_eq!(&raw[..2], &[0x1f, 0x8b]);

        let mut text = String::new();
        GzDecoder::new(raw.as_slice())
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "1.0\t2.0\n3.0\t4.0");
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("beam.dat");
        let err = write_file(&path, &[[1.0]]).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
