//! Installment data structures and trusted dataset I/O

mod data;
pub mod loader;
pub mod writer;

pub use data::{round2, DurationStatus, InstallmentRow, RowSource};
pub use loader::{load_installments, load_installments_from_reader, REQUIRED_COLUMNS};
pub use writer::{write_installments, write_installments_to_writer};
