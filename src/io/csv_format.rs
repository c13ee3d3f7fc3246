//! CSV format handling for journal records and holdings output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Holdings output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{
    Amount, Denomination, DispenseError, InventorySnapshot, NoteCount, OperationRecord,
    OperationType,
};
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the journal format with columns: type, denomination, count, amount.
/// Numeric fields are kept as strings so that blanks and bad values can be
/// reported per row instead of failing the whole file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub op_type: String,
    #[serde(default)]
    pub denomination: Option<String>,
    #[serde(default)]
    pub count: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

/// Parse an optional numeric field, treating blanks as absent
fn parse_field<T: FromStr>(
    value: Option<String>,
    field: &str,
) -> Result<Option<T>, DispenseError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| DispenseError::ParseError {
                line: None,
                message: format!("invalid {} '{}'", field, raw.trim()),
            }),
        _ => Ok(None),
    }
}

/// Convert a CsvRecord to an OperationRecord
///
/// This function:
/// - Parses the type string (case-insensitive) into an OperationType
/// - Parses denomination, count and amount when present
/// - Validates that the fields required by the operation type are present
///
/// Fields an operation does not use are ignored.
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// * `Ok(OperationRecord)` - Successfully converted record
/// * `Err(DispenseError)` - `InvalidOperationType`, `ParseError` or `MissingField`
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, DispenseError> {
    let op_type = match csv_record.op_type.trim().to_lowercase().as_str() {
        "replenish" => OperationType::Replenish,
        "withdraw" => OperationType::Withdraw,
        "snapshot" => OperationType::Snapshot,
        _ => return Err(DispenseError::invalid_operation_type(&csv_record.op_type)),
    };

    let denomination = parse_field::<Denomination>(csv_record.denomination, "denomination")?;
    let count = parse_field::<NoteCount>(csv_record.count, "count")?;
    let amount = parse_field::<Amount>(csv_record.amount, "amount")?;

    match op_type {
        OperationType::Replenish => {
            if denomination.is_none() {
                return Err(DispenseError::missing_field(
                    op_type.as_str(),
                    "denomination",
                ));
            }
            if count.is_none() {
                return Err(DispenseError::missing_field(op_type.as_str(), "count"));
            }
        }
        OperationType::Withdraw => {
            if amount.is_none() {
                return Err(DispenseError::missing_field(op_type.as_str(), "amount"));
            }
        }
        OperationType::Snapshot => {}
    }

    Ok(OperationRecord {
        op_type,
        denomination,
        count,
        amount,
    })
}

/// Write holdings to CSV format
///
/// Writes columns: denomination, count, value. One row per denomination in
/// snapshot order (largest first), then a `total` row carrying the note count
/// and total value.
///
/// # Arguments
///
/// * `snapshot` - Holdings to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_inventory_csv(
    snapshot: &InventorySnapshot,
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["denomination", "count", "value"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for &(denomination, count) in &snapshot.holdings {
        let value = u128::from(denomination) * u128::from(count);
        writer
            .write_record(&[
                denomination.to_string(),
                count.to_string(),
                value.to_string(),
            ])
            .map_err(|e| format!("Failed to write holding record: {}", e))?;
    }

    writer
        .write_record(&[
            "total".to_string(),
            snapshot.note_count().to_string(),
            snapshot.total_value.to_string(),
        ])
        .map_err(|e| format!("Failed to write total record: {}", e))?;

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn csv_record(op_type: &str, denomination: &str, count: &str, amount: &str) -> CsvRecord {
        let field = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        CsvRecord {
            op_type: op_type.to_string(),
            denomination: field(denomination),
            count: field(count),
            amount: field(amount),
        }
    }

    #[rstest]
    #[case::replenish("replenish", "2000", "10", "", OperationRecord::replenish(2000, 10))]
    #[case::replenish_uppercase("REPLENISH", "500", "1", "", OperationRecord::replenish(500, 1))]
    #[case::withdraw("withdraw", "", "", "2700", OperationRecord::withdraw(2700))]
    #[case::withdraw_negative("Withdraw", "", "", "-50", OperationRecord::withdraw(-50))]
    #[case::snapshot("snapshot", "", "", "", OperationRecord::snapshot())]
    fn test_convert_csv_record_valid(
        #[case] op_type: &str,
        #[case] denomination: &str,
        #[case] count: &str,
        #[case] amount: &str,
        #[case] expected: OperationRecord,
    ) {
        let result = convert_csv_record(csv_record(op_type, denomination, count, amount));
        assert_eq!(result, Ok(expected));
    }

    #[test]
    fn test_convert_csv_record_ignores_unused_fields() {
        let record = convert_csv_record(csv_record("withdraw", "100", "", "300")).unwrap();
        assert_eq!(record.op_type, OperationType::Withdraw);
        assert_eq!(record.amount, Some(300));
    }

    #[test]
    fn test_convert_csv_record_invalid_type() {
        let result = convert_csv_record(csv_record("transfer", "", "", "100"));
        assert_eq!(
            result,
            Err(DispenseError::invalid_operation_type("transfer"))
        );
    }

    #[rstest]
    #[case::replenish_no_denomination("replenish", "", "5", "", "denomination")]
    #[case::replenish_no_count("replenish", "500", "", "", "count")]
    #[case::withdraw_no_amount("withdraw", "", "", "", "amount")]
    #[case::withdraw_blank_amount("withdraw", "", "", "   ", "amount")]
    fn test_convert_csv_record_missing_field(
        #[case] op_type: &str,
        #[case] denomination: &str,
        #[case] count: &str,
        #[case] amount: &str,
        #[case] field: &str,
    ) {
        let result = convert_csv_record(csv_record(op_type, denomination, count, amount));
        assert_eq!(result, Err(DispenseError::missing_field(op_type, field)));
    }

    #[rstest]
    #[case::bad_amount("withdraw", "", "", "abc")]
    #[case::fractional_amount("withdraw", "", "", "100.5")]
    #[case::negative_count("replenish", "100", "-3", "")]
    #[case::bad_denomination("replenish", "fifty", "3", "")]
    fn test_convert_csv_record_parse_errors(
        #[case] op_type: &str,
        #[case] denomination: &str,
        #[case] count: &str,
        #[case] amount: &str,
    ) {
        let result = convert_csv_record(csv_record(op_type, denomination, count, amount));
        assert!(matches!(result, Err(DispenseError::ParseError { .. })));
    }

    #[test]
    fn test_write_inventory_csv() {
        let snapshot =
            InventorySnapshot::from_holdings(vec![(2000, 9), (500, 9), (200, 9), (100, 20)]);
        let mut output = Vec::new();

        write_inventory_csv(&snapshot, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "denomination,count,value\n\
             2000,9,18000\n\
             500,9,4500\n\
             200,9,1800\n\
             100,20,2000\n\
             total,47,26300\n"
        );
    }

    #[test]
    fn test_write_inventory_csv_empty_holdings() {
        let snapshot = InventorySnapshot::from_holdings(vec![(100, 0)]);
        let mut output = Vec::new();

        write_inventory_csv(&snapshot, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "denomination,count,value\n100,0,0\ntotal,0,0\n");
    }
}
