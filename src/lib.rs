//! Rent Projection - forward projection of rent installments for rental contract portfolios
//!
//! This library provides:
//! - Per-contract projection of future installments with annual-cycle readjustment
//! - Readjustment index lookup with a no-adjustment fallback on missing forecasts
//! - Portfolio-level aggregation, merge with history, and final ordering
//! - Pipe-delimited trusted dataset loading and result writing

pub mod dataset;
pub mod error;
pub mod index_table;
pub mod portfolio;
pub mod projection;

// Re-export commonly used types
pub use dataset::{DurationStatus, InstallmentRow, RowSource};
pub use error::DatasetError;
pub use index_table::IndexTable;
pub use portfolio::{PortfolioAggregator, RunSummary};
pub use projection::{ContractProjector, CycleAnchor};
