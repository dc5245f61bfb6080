//! Load the trusted installment dataset (pipe-delimited)

use super::InstallmentRow;
use crate::error::DatasetError;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

/// Columns the projection cannot run without; validated against the header
/// before any row is parsed.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "contract_id",
    "transfer_due_date",
    "contract_duration_status",
    "median_rental_value",
    "contract_readjustment_index",
    "contract_start_date",
    "contract_current_duration",
    "contract_original_duration",
];

/// Load all installments from a pipe-delimited CSV file
pub fn load_installments<P: AsRef<Path>>(path: P) -> Result<Vec<InstallmentRow>, DatasetError> {
    let file = std::fs::File::open(path)?;
    load_installments_from_reader(file)
}

/// Load installments from any reader (e.g., string buffer)
pub fn load_installments_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<InstallmentRow>, DatasetError> {
    let mut csv_reader = ReaderBuilder::new().delimiter(b'|').from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DatasetError::MissingColumn(column.to_string()));
        }
    }

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: InstallmentRow = result?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DurationStatus, RowSource};
    use chrono::NaiveDate;

    const HEADER: &str = "contract_id|contract_start_date|contract_end_date|contract_status|\
contract_original_duration|contract_current_duration|contract_duration_status|\
contract_readjustment_index|transfer_parcel_cycle|transfer_id|transfer_due_date|\
transfer_real_rental_value|median_rental_value|source|transfer_total_value|\
rental_value|damage_value|early_termination_value|rent_fee|damage_fee";

    #[test]
    fn test_load_installments_from_reader() {
        let data = format!(
            "{HEADER}\n\
C1|2023-12-01|2026-11-30|active|36|10|in_term|igpm|1|C1-010|2024-10-01|1000.0|1000.0|historical|1050.0|1000.0|50.0|0.0|8.0|2.0\n\
C2|2020-01-01||active|24|60|holdover|ipca|5|C2-060|2024-12-01|800.0|800.0|historical|800.0|800.0|0.0|0.0||\n"
        );

        let rows = load_installments_from_reader(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.contract_id, "C1");
        assert_eq!(first.contract_duration_status, DurationStatus::InTerm);
        assert_eq!(first.source, RowSource::Historical);
        assert_eq!(
            first.transfer_due_date,
            NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
        );
        assert_eq!(first.rent_fee, Some(8.0));
        assert_eq!(first.rent_fee_value, None);

        let second = &rows[1];
        assert_eq!(second.contract_duration_status, DurationStatus::Holdover);
        assert_eq!(second.contract_end_date, None);
        assert_eq!(second.rent_fee, None);
    }

    #[test]
    fn test_missing_status_column_is_fatal() {
        // Header without contract_duration_status
        let data = "contract_id|transfer_due_date|median_rental_value|\
contract_readjustment_index|contract_start_date|contract_current_duration|\
contract_original_duration\n\
C1|2024-10-01|1000.0|igpm|2023-12-01|10|36\n";

        let err = load_installments_from_reader(data.as_bytes()).unwrap_err();
        match err {
            DatasetError::MissingColumn(column) => {
                assert_eq!(column, "contract_duration_status")
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }
}
