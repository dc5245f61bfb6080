//! Fatal boundary errors for loading and writing the tabular datasets

use thiserror::Error;

/// Errors raised at the dataset boundary, always before any output exists.
///
/// The projection itself never fails; a missing index rate degrades to the
/// no-adjustment fallback instead of surfacing here.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A column the projection cannot run without is absent from the input
    #[error("required column '{0}' is missing from the historical dataset")]
    MissingColumn(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}
