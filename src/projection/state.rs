//! Generation loop state for a single contract

use chrono::NaiveDate;

/// Mutable accumulator threaded through one contract's generation loop
#[derive(Debug, Clone)]
pub struct GenerationState {
    /// Due date of the most recently emitted installment (starts at the
    /// historical tail's due date)
    pub last_due_date: NaiveDate,

    /// Readjustment baseline carried between emissions; kept unrounded,
    /// rounding happens at emission
    pub running_median: f64,

    /// Cycle number of the last installment; a boundary is crossed when
    /// the next due date's cycle exceeds it
    pub previous_cycle: i32,

    /// Index lookups that found no rate and fell back to no adjustment
    pub lookup_misses: u32,
}

impl GenerationState {
    /// Initialize from the contract's trailing historical installment
    pub fn new(last_due_date: NaiveDate, running_median: f64, previous_cycle: i32) -> Self {
        Self {
            last_due_date,
            running_median,
            previous_cycle,
            lookup_misses: 0,
        }
    }
}
