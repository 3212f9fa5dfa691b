//! CSV format handling for payment requests and ledger output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to payment requests
//! - Ledger output serialization
//!
//! All functions are pure (no I/O beyond the writer they are handed) for easy testing.

use crate::core::Ledger;
use crate::types::{PaymentError, PaymentRequest};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: method, amount
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub method: String,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to a PaymentRequest
///
/// The method tag is kept verbatim (after trimming); tags are case-sensitive
/// and unknown tags are valid requests that the chain will leave unmatched.
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
/// * `line` - 1-based line number of the record, for error context
///
/// # Errors
///
/// - `MissingMethod` if the method column is blank
/// - `InvalidAmount` if the amount is missing or not a decimal number
/// - `NegativeAmount` if the amount is below zero
pub fn convert_csv_record(
    csv_record: CsvRecord,
    line: Option<u64>,
) -> Result<PaymentRequest, PaymentError> {
    let method = csv_record.method.trim();
    if method.is_empty() {
        return Err(PaymentError::missing_method(line));
    }

    let amount_str = csv_record.amount.unwrap_or_default();
    let amount = Decimal::from_str(amount_str.trim())
        .map_err(|_| PaymentError::invalid_amount(amount_str.trim(), method))?;

    PaymentRequest::new(method, amount)
}

/// Write ledger entries to CSV format
///
/// Writes entries with columns: method, amount. Entries are sorted by method
/// tag for deterministic output and amounts are normalized (no trailing zeros).
///
/// # Errors
///
/// Returns `PaymentError::IoError` if writing fails.
pub fn write_ledger_csv(ledger: &Ledger, output: &mut dyn Write) -> Result<(), PaymentError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record(["method", "amount"])
        .map_err(|e| write_error("header", e))?;

    for (method, amount) in ledger.entries() {
        let amount = amount.normalize().to_string();
        writer
            .write_record([method.as_str(), amount.as_str()])
            .map_err(|e| write_error("ledger record", e))?;
    }

    writer.flush()?;
    Ok(())
}

fn write_error(what: &str, error: csv::Error) -> PaymentError {
    PaymentError::IoError {
        message: format!("Failed to write CSV {}: {}", what, error),
    }
}
