//! Installment row structures matching the trusted dataset format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Duration classification of a contract as of the cutoff date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationStatus {
    /// Still within the originally agreed duration
    InTerm,
    /// Term already ended, contract renews indefinitely
    Holdover,
}

impl DurationStatus {
    pub fn is_holdover(&self) -> bool {
        matches!(self, DurationStatus::Holdover)
    }
}

/// Origin of an installment row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowSource {
    /// Produced by the upstream ETL from real billing records
    Historical,
    /// Synthesized by the projection engine
    Generated,
}

/// One installment of one rental contract.
///
/// The trusted dataset is denormalized: contract-level columns are repeated
/// on every installment row, so a generated row inherits them from the
/// contract's trailing historical installment. Field names match the wire
/// column names of the pipe-delimited tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentRow {
    pub contract_id: String,
    pub contract_start_date: NaiveDate,
    pub contract_end_date: Option<NaiveDate>,
    pub contract_status: String,
    pub contract_original_duration: u32,
    pub contract_current_duration: u32,
    pub contract_duration_status: DurationStatus,
    pub contract_readjustment_index: String,
    pub transfer_parcel_cycle: i32,
    pub transfer_id: String,
    /// Always the first day of a calendar month
    pub transfer_due_date: NaiveDate,
    pub transfer_real_rental_value: f64,
    /// Readjustment baseline carried into the next cycle
    pub median_rental_value: f64,
    pub source: RowSource,
    pub transfer_total_value: f64,
    pub rental_value: f64,
    pub damage_value: f64,
    pub early_termination_value: f64,
    /// Management fee percentage (e.g. 8.0 = 8%); blank for some contracts
    pub rent_fee: Option<f64>,
    pub damage_fee: Option<f64>,
    /// `rent_fee / 100 * transfer_real_rental_value`; only generated rows
    /// carry it, historical rows leave it blank
    #[serde(default)]
    pub rent_fee_value: Option<f64>,
}

impl InstallmentRow {
    /// Round every monetary field to 2 decimal places.
    pub fn round_monetary(&mut self) {
        self.transfer_real_rental_value = round2(self.transfer_real_rental_value);
        self.median_rental_value = round2(self.median_rental_value);
        self.transfer_total_value = round2(self.transfer_total_value);
        self.rental_value = round2(self.rental_value);
        self.damage_value = round2(self.damage_value);
        self.early_termination_value = round2(self.early_termination_value);
        self.rent_fee_value = self.rent_fee_value.map(round2);
    }

    /// Months left before the contract's declared duration is exhausted.
    pub fn remaining_months(&self) -> i64 {
        self.contract_original_duration as i64 - self.contract_current_duration as i64
    }
}

/// Half-away-from-zero rounding to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_away_from_zero() {
        // 0.125 is exactly representable, so the half really is a half
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(824.0000000001), 824.0);
    }

    #[test]
    fn test_round_monetary_covers_fee_value() {
        let mut row = test_row();
        row.transfer_real_rental_value = 1020.0049;
        row.rent_fee_value = Some(81.6004);
        row.round_monetary();
        assert_eq!(row.transfer_real_rental_value, 1020.0);
        assert_eq!(row.rent_fee_value, Some(81.6));
    }

    #[test]
    fn test_remaining_months_can_be_negative() {
        let mut row = test_row();
        row.contract_original_duration = 12;
        row.contract_current_duration = 14;
        assert_eq!(row.remaining_months(), -2);
    }

    fn test_row() -> InstallmentRow {
        InstallmentRow {
            contract_id: "C1".to_string(),
            contract_start_date: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
            contract_end_date: None,
            contract_status: "active".to_string(),
            contract_original_duration: 30,
            contract_current_duration: 10,
            contract_duration_status: DurationStatus::InTerm,
            contract_readjustment_index: "igpm".to_string(),
            transfer_parcel_cycle: 1,
            transfer_id: "C1-010".to_string(),
            transfer_due_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            transfer_real_rental_value: 1000.0,
            median_rental_value: 1000.0,
            source: RowSource::Historical,
            transfer_total_value: 1000.0,
            rental_value: 1000.0,
            damage_value: 0.0,
            early_termination_value: 0.0,
            rent_fee: Some(8.0),
            damage_fee: None,
            rent_fee_value: None,
        }
    }
}
