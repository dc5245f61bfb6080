//! Portfolio-level aggregation
//!
//! Projects every contract in the historical dataset, merges the generated
//! rows back into the history, and produces the final ordered table.
//! Contracts are independent, so projection runs in parallel; the merge,
//! rounding pass, and final sort happen once after all contracts complete.

use crate::dataset::InstallmentRow;
use crate::index_table::IndexTable;
use crate::projection::{ContractProjection, ContractProjector, CycleAnchor};
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Counts reported after a run; diagnostic only, never feeds back into
/// the projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub contracts: usize,
    pub holdover_contracts: usize,
    /// Includes the exhausted ones
    pub in_term_contracts: usize,
    /// In_term contracts already at or past their declared duration
    pub exhausted_contracts: usize,
    pub historical_rows: usize,
    pub generated_rows: usize,
    /// Cycle boundaries where no index rate existed and the value was
    /// carried forward unchanged
    pub lookup_misses: u64,
}

/// Runs the projector over every contract and assembles the final dataset
pub struct PortfolioAggregator {
    index_table: IndexTable,
    anchor: CycleAnchor,
}

impl PortfolioAggregator {
    pub fn new(index_table: IndexTable, anchor: CycleAnchor) -> Self {
        Self {
            index_table,
            anchor,
        }
    }

    /// Project every contract and return the merged dataset sorted by
    /// `(contract_id, parcel_cycle, due_date)`, with all monetary fields
    /// rounded to 2 decimal places. Deterministic for a given input.
    pub fn run(&self, historical: Vec<InstallmentRow>) -> (Vec<InstallmentRow>, RunSummary) {
        let historical_rows = historical.len();

        // Explicit ordered partition: contract key -> its installments
        let mut groups: BTreeMap<String, Vec<InstallmentRow>> = BTreeMap::new();
        for row in historical {
            groups.entry(row.contract_id.clone()).or_default().push(row);
        }
        for rows in groups.values_mut() {
            rows.sort_by_key(|row| row.transfer_due_date);
        }
        info!("projecting {} contracts", groups.len());

        let projector = ContractProjector::new(&self.index_table, self.anchor);
        let projections: Vec<ContractProjection> = groups
            .par_iter()
            .filter_map(|(_, rows)| projector.project(rows))
            .collect();

        let mut summary = RunSummary {
            contracts: groups.len(),
            historical_rows,
            ..Default::default()
        };
        for projection in &projections {
            if projection.status.is_holdover() {
                summary.holdover_contracts += 1;
            } else {
                summary.in_term_contracts += 1;
                if projection.exhausted {
                    summary.exhausted_contracts += 1;
                }
            }
            summary.generated_rows += projection.rows.len();
            summary.lookup_misses += u64::from(projection.lookup_misses);
        }

        let mut merged: Vec<InstallmentRow> = groups.into_values().flatten().collect();
        for projection in projections {
            merged.extend(projection.rows);
        }
        for row in &mut merged {
            row.round_monetary();
        }
        merged.sort_by(|a, b| {
            (&a.contract_id, a.transfer_parcel_cycle, a.transfer_due_date).cmp(&(
                &b.contract_id,
                b.transfer_parcel_cycle,
                b.transfer_due_date,
            ))
        });

        info!(
            "generated {} rows across {} contracts ({} holdover, {} in_term, {} exhausted, {} lookup misses)",
            summary.generated_rows,
            summary.contracts,
            summary.holdover_contracts,
            summary.in_term_contracts,
            summary.exhausted_contracts,
            summary.lookup_misses
        );

        (merged, summary)
    }
}
