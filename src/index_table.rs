//! Monetary-readjustment index table lookup
//!
//! Read-only `(index_name, month, year) -> rate` table built once per run
//! from the comma-delimited file produced by the upstream index builder.
//! Lookups are exact-match only: a miss means the caller carries the
//! previous rental value forward unchanged.

use crate::error::DatasetError;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Raw CSV row of the index table; extra columns (the builder emits a
/// `source` column) are ignored
#[derive(Debug, Deserialize)]
struct IndexRow {
    index_name: String,
    month: u32,
    year: i32,
    /// Decimal fraction, e.g. 0.0654 = 6.54%
    value: f64,
}

/// Immutable readjustment rate table, freely shareable across workers
#[derive(Debug, Clone, Default)]
pub struct IndexTable {
    rates: HashMap<String, HashMap<(u32, i32), f64>>,
    len: usize,
}

impl IndexTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the index table from a comma-delimited CSV file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load the index table from any reader.
    /// When the same `(index_name, month, year)` key appears more than
    /// once, the first occurrence wins.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = ReaderBuilder::new().from_reader(reader);
        let mut table = Self::new();
        for result in csv_reader.deserialize() {
            let row: IndexRow = result?;
            table.insert(row.index_name, row.month, row.year, row.value);
        }
        Ok(table)
    }

    /// Register a rate; keeps the existing entry if the key is already present
    pub fn insert(&mut self, index_name: String, month: u32, year: i32, rate: f64) {
        let slot = self
            .rates
            .entry(index_name)
            .or_default()
            .entry((month, year));
        if let std::collections::hash_map::Entry::Vacant(entry) = slot {
            entry.insert(rate);
            self.len += 1;
        }
    }

    /// Exact-match lookup; `None` means no forecast exists for that month
    pub fn find(&self, index_name: &str, month: u32, year: i32) -> Option<f64> {
        self.rates
            .get(index_name)
            .and_then(|by_month| by_month.get(&(month, year)))
            .copied()
    }

    /// Number of distinct `(index_name, month, year)` entries
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
