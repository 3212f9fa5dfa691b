//! Streaming CSV reader for payment requests
//!
//! Provides an iterator over payment requests from a CSV file with a
//! `method,amount` header. Format conversion is delegated to `csv_format`.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `open()`
//! - Individual record errors are yielded as `Err` items; iteration continues
//! - Errors carry the 1-based line number of the offending record
//!
//! ```no_run
//! use payment_router::io::RequestReader;
//! use std::path::Path;
//!
//! let reader = RequestReader::open(Path::new("payments.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(request) => println!("{} {}", request.method(), request.amount()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{PaymentError, PaymentRequest};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Streaming payment request reader
///
/// Reads one record at a time; memory use does not grow with the file.
#[derive(Debug)]
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl RequestReader<File> {
    /// Open a CSV file for streaming
    ///
    /// # Errors
    ///
    /// - `PaymentError::FileNotFound` if the path does not exist
    /// - `PaymentError::IoError` for any other open failure
    pub fn open(path: &Path) -> Result<Self, PaymentError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PaymentError::file_not_found(&path.display().to_string()),
            _ => PaymentError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::new(file))
    }
}

impl<R: Read> RequestReader<R> {
    /// Wrap any reader (file, stdin, in-memory bytes)
    ///
    /// The CSV reader trims whitespace from all fields and tolerates a
    /// missing trailing amount column.
    pub fn new(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        RequestReader {
            reader,
            record: StringRecord::new(),
        }
    }
}

impl<R: Read> Iterator for RequestReader<R> {
    type Item = Result<PaymentRequest, PaymentError>;

    fn next(&mut self) -> Option<Self::Item> {
        let read = self.reader.read_record(&mut self.record);
        // Line where the record starts; a quoted field may span several lines
        let line = self.record.position().map(|pos| pos.line());

        match read {
            Ok(false) => None,
            Ok(true) => Some(self.convert_current(line)),
            Err(e) => {
                let line = e.position().map(|pos| pos.line()).or(line);
                Some(Err(PaymentError::parse_error(line, &e.to_string())))
            }
        }
    }
}

impl<R: Read> RequestReader<R> {
    fn convert_current(&mut self, line: Option<u64>) -> Result<PaymentRequest, PaymentError> {
        let headers = self.reader.headers()?;
        let csv_record: CsvRecord = self
            .record
            .deserialize(Some(headers))
            .map_err(|e| PaymentError::parse_error(line, &e.to_string()))?;

        convert_csv_record(csv_record, line).map_err(|e| match e {
            PaymentError::MissingMethod { .. } | PaymentError::ParseError { .. } => e,
            other => PaymentError::parse_error(line, &other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_open_reads_file() {
        let file = create_temp_csv("method,amount\ncash,5000\n");

        let requests: Vec<_> = RequestReader::open(file.path()).unwrap().collect();

        assert_eq!(requests.len(), 1);
        let request = requests[0].as_ref().unwrap();
        assert_eq!(request.method().as_str(), "cash");
        assert_eq!(request.amount(), dec!(5000));
    }

    #[test]
    fn test_open_fails_on_missing_file() {
        let result = RequestReader::open(Path::new("nonexistent.csv"));
        assert_eq!(
            result.unwrap_err(),
            PaymentError::file_not_found("nonexistent.csv")
        );
    }

    #[test]
    fn test_reads_multiple_records_in_order() {
        let data = "method,amount\ncreditCard,10000\ncash,5000\nGifticon,2000\n";

        let tags: Vec<String> = RequestReader::new(data.as_bytes())
            .filter_map(Result::ok)
            .map(|r| r.method().to_string())
            .collect();

        assert_eq!(tags, vec!["creditCard", "cash", "Gifticon"]);
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let data = "method,amount\ncash,1\ncash,invalid\ncash,-3\ncash,2\n";

        let results: Vec<_> = RequestReader::new(data.as_bytes()).collect();

        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(results[3].is_ok());

        let invalid = results[1].as_ref().unwrap_err();
        assert!(matches!(invalid, PaymentError::ParseError { line: Some(3), .. }));
        assert!(invalid.to_string().contains("Invalid amount 'invalid'"));

        let negative = results[2].as_ref().unwrap_err();
        assert!(matches!(negative, PaymentError::ParseError { line: Some(4), .. }));
        assert!(negative.to_string().contains("Negative amount"));
    }

    #[test]
    fn test_line_numbers_follow_multiline_fields() {
        let data = "method,amount\n\"gift\ncard\",10\ncash,bad\n";

        let results: Vec<_> = RequestReader::new(data.as_bytes()).collect();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().method().as_str(), "gift\ncard");
        assert!(matches!(
            results[1].as_ref().unwrap_err(),
            PaymentError::ParseError { line: Some(4), .. }
        ));
    }

    #[test]
    fn test_blank_method_reports_missing_method() {
        let data = "method,amount\n ,100\n";

        let results: Vec<_> = RequestReader::new(data.as_bytes()).collect();

        assert_eq!(
            results[0].as_ref().unwrap_err(),
            &PaymentError::missing_method(Some(2))
        );
    }

    #[test]
    fn test_handles_whitespace() {
        let data = "method,amount\n  debitCard  ,  12.50  \n";

        let request = RequestReader::new(data.as_bytes())
            .next()
            .unwrap()
            .unwrap();

        assert_eq!(request.method().as_str(), "debitCard");
        assert_eq!(request.amount(), dec!(12.50));
    }

    #[test]
    fn test_empty_file_after_header() {
        let requests: Vec<_> = RequestReader::new("method,amount\n".as_bytes()).collect();
        assert!(requests.is_empty());
    }
}
