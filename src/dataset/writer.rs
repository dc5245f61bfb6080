//! Write the merged projection result (pipe-delimited)

use super::InstallmentRow;
use crate::error::DatasetError;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Write all installments to a pipe-delimited CSV file, creating the
/// parent directory if it does not exist.
pub fn write_installments<P: AsRef<Path>>(
    path: P,
    rows: &[InstallmentRow],
) -> Result<(), DatasetError> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    write_installments_to_writer(file, rows)
}

/// Write installments to any writer (e.g., an in-memory buffer)
pub fn write_installments_to_writer<W: Write>(
    writer: W,
    rows: &[InstallmentRow],
) -> Result<(), DatasetError> {
    let mut csv_writer = WriterBuilder::new().delimiter(b'|').from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
