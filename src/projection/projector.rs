//! Forward projection of a single contract's future installments

use super::cycle::{next_month, parcel_cycle, CycleAnchor};
use super::state::GenerationState;
use crate::dataset::{round2, DurationStatus, InstallmentRow, RowSource};
use crate::index_table::IndexTable;
use chrono::{Datelike, NaiveDate};
use log::debug;

/// Generated rows and bookkeeping for one contract
#[derive(Debug, Clone)]
pub struct ContractProjection {
    /// Future installments, ordered by due date
    pub rows: Vec<InstallmentRow>,
    pub status: DurationStatus,
    /// An in_term contract already at or past its declared duration;
    /// yields zero rows, which is a valid terminal state
    pub exhausted: bool,
    /// Index lookups that fell back to carrying the value forward
    pub lookup_misses: u32,
}

/// Projects one contract's future installments from its historical tail.
///
/// Infallible by design: every missing-data condition degrades to the
/// no-adjustment fallback so a projection run always completes.
pub struct ContractProjector<'a> {
    index_table: &'a IndexTable,
    anchor: CycleAnchor,
}

impl<'a> ContractProjector<'a> {
    pub fn new(index_table: &'a IndexTable, anchor: CycleAnchor) -> Self {
        Self {
            index_table,
            anchor,
        }
    }

    /// Produce the ordered future installments for one contract's history.
    /// Returns `None` only for an empty history.
    pub fn project(&self, history: &[InstallmentRow]) -> Option<ContractProjection> {
        let tail = history.iter().max_by_key(|row| row.transfer_due_date)?;
        let anchor_date = match self.anchor {
            CycleAnchor::ContractStart => tail.contract_start_date,
            CycleAnchor::FirstDueDate => {
                history.iter().map(|row| row.transfer_due_date).min()?
            }
        };

        let projection = match tail.contract_duration_status {
            DurationStatus::Holdover => self.project_holdover(tail, anchor_date, history.len()),
            DurationStatus::InTerm => self.project_in_term(tail, anchor_date),
        };
        debug!(
            "contract {}: {} generated rows, {} lookup misses",
            tail.contract_id,
            projection.rows.len(),
            projection.lookup_misses
        );
        Some(projection)
    }

    /// A holdover contract renews indefinitely; speculate exactly one
    /// installment per run, readjusted if a rate exists for its month.
    fn project_holdover(
        &self,
        tail: &InstallmentRow,
        anchor_date: NaiveDate,
        history_len: usize,
    ) -> ContractProjection {
        let next_due = next_month(tail.transfer_due_date);
        let mut lookup_misses = 0;
        let adjusted = match self.find_rate(tail, next_due) {
            Some(rate) => tail.median_rental_value * (1.0 + rate),
            None => {
                lookup_misses += 1;
                tail.median_rental_value
            }
        };

        let row = derive_installment(
            tail,
            next_due,
            adjusted,
            adjusted,
            parcel_cycle(anchor_date, next_due),
            history_len as u32 + 1,
        );

        ContractProjection {
            rows: vec![row],
            status: DurationStatus::Holdover,
            exhausted: false,
            lookup_misses,
        }
    }

    /// An in_term contract generates one installment per month until its
    /// declared duration is exhausted, processed in 12-month windows. The
    /// running median is readjusted whenever a cycle boundary is crossed;
    /// on a lookup miss the median is left unchanged but the cycle
    /// counter still advances.
    fn project_in_term(&self, tail: &InstallmentRow, anchor_date: NaiveDate) -> ContractProjection {
        let original_duration = tail.contract_original_duration;
        let mut current_duration = tail.contract_current_duration;
        let exhausted = current_duration >= original_duration;

        let mut state = GenerationState::new(
            tail.transfer_due_date,
            tail.median_rental_value,
            parcel_cycle(anchor_date, tail.transfer_due_date),
        );
        let mut rows = Vec::with_capacity(original_duration.saturating_sub(current_duration) as usize);

        while current_duration < original_duration {
            let window_start = current_duration + 1;
            let window_end = (window_start + 11).min(original_duration);

            for seq in window_start..=window_end {
                let next_due = next_month(state.last_due_date);
                let current_cycle = parcel_cycle(anchor_date, next_due);

                if current_cycle > state.previous_cycle {
                    match self.find_rate(tail, next_due) {
                        Some(rate) => state.running_median *= 1.0 + rate,
                        None => {
                            debug!(
                                "contract {}: no {} rate for {}, carrying value forward",
                                tail.contract_id, tail.contract_readjustment_index, next_due
                            );
                            state.lookup_misses += 1;
                        }
                    }
                    state.previous_cycle = current_cycle;
                }

                rows.push(derive_installment(
                    tail,
                    next_due,
                    state.running_median,
                    state.running_median,
                    current_cycle,
                    seq,
                ));
                state.last_due_date = next_due;
            }

            current_duration = window_end;
        }

        ContractProjection {
            rows,
            status: DurationStatus::InTerm,
            exhausted,
            lookup_misses: state.lookup_misses,
        }
    }

    fn find_rate(&self, tail: &InstallmentRow, due_date: NaiveDate) -> Option<f64> {
        self.index_table.find(
            &tail.contract_readjustment_index,
            due_date.month(),
            due_date.year(),
        )
    }
}

/// Copy the contract tail and override the per-installment fields.
/// The monetary side fields are zeroed: no real billing event exists yet.
fn derive_installment(
    tail: &InstallmentRow,
    due_date: NaiveDate,
    real_value: f64,
    median_value: f64,
    cycle: i32,
    sequence: u32,
) -> InstallmentRow {
    let real = round2(real_value);
    InstallmentRow {
        transfer_due_date: due_date,
        transfer_real_rental_value: real,
        median_rental_value: round2(median_value),
        transfer_parcel_cycle: cycle,
        transfer_id: format!("{}-{:03}", tail.contract_id, sequence),
        source: RowSource::Generated,
        transfer_total_value: 0.0,
        rental_value: 0.0,
        damage_value: 0.0,
        early_termination_value: 0.0,
        rent_fee_value: tail.rent_fee.map(|fee| round2(fee / 100.0 * real)),
        ..tail.clone()
    }
}
