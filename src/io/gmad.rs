use crate::io::error::Error;
use crate::model::beam::Beam;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const STATEMENT_OPEN: &str = "beam,\t";
const ENTRY_SEPARATOR: &str = ",\n\t";
const STATEMENT_CLOSE: char = ';';

/// Formats `beam` as a single `beam` statement with its entries sorted by key.
///
/// The first entry shares the line with `beam,`; every further entry starts
/// a new tab-indented line. There is no trailing newline.
pub fn format(beam: &Beam) -> String {
    let mut out = String::from(STATEMENT_OPEN);
    for (i, (key, value)) in beam.sorted_entries().into_iter().enumerate() {
        if i > 0 {
            out.push_str(ENTRY_SEPARATOR);
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out.push(STATEMENT_CLOSE);
    out
}

pub fn write<W: Write>(mut writer: W, beam: &Beam) -> Result<(), Error> {
    writer.write_all(format(beam).as_bytes())?;
    Ok(())
}

/// Writes `beam` to `path`, creating or truncating the file.
pub fn write_file(path: impl AsRef<Path>, beam: &Beam) -> Result<(), Error> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer, beam)?;
    writer.flush()?;
    debug!(
        "wrote beam definition with {} entries to {}",
        beam.len(),
        path.display()
    );
    Ok(())
}
