//! Per-contract forward projection of future installments

mod cycle;
mod projector;
mod state;

pub use cycle::{next_month, parcel_cycle, CycleAnchor};
pub use projector::{ContractProjection, ContractProjector};
pub use state::GenerationState;
