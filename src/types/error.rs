//! Error types for the payment router
//!
//! This module defines all error types that can occur while routing payments.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV, missing method, invalid amounts
//! - **Request Errors**: Negative amounts
//! - **Configuration Errors**: Empty or duplicated handler chains
//! - **Observer Errors**: A subscriber failed while being notified
//! - **Arithmetic Errors**: Overflow in ledger or aggregate totals
//!
//! An unmatched payment method is deliberately absent from this list: it is a
//! normal outcome reported through [`crate::types::DispatchOutcome`].

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the payment router
///
/// Each variant includes relevant context to help diagnose the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed record is skipped
    /// and processing continues with the next record.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The method column of a request was blank
    #[error("Payment request{} has no method", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MissingMethod {
        /// Line number of the offending record (if available)
        line: Option<u64>,
    },

    /// Amount could not be parsed as a decimal number
    #[error("Invalid amount '{amount}' for method '{method}'")]
    InvalidAmount {
        /// The raw amount text
        amount: String,
        /// Method tag of the offending request
        method: String,
    },

    /// Amount is below zero
    ///
    /// Requests are validated at construction, so a negative amount never
    /// reaches the chain, the ledger or any observer.
    #[error("Negative amount {amount} for method '{method}'")]
    NegativeAmount {
        /// Method tag of the offending request
        method: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The running total is left untouched.
    #[error("Arithmetic overflow while adding {amount} to {target}")]
    ArithmeticOverflow {
        /// What was being updated (a ledger entry or the aggregate total)
        target: String,
        /// The amount that could not be added
        amount: Decimal,
    },

    /// The router configuration cannot build a usable chain
    #[error("Invalid router configuration: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },

    /// Two handlers in one chain claim the same method
    #[error("Duplicate handler for method '{method}'")]
    DuplicateHandler {
        /// The duplicated method tag
        method: String,
    },

    /// An observer failed while handling a notification
    ///
    /// Observers are not isolated from one another: observers registered
    /// after the failing one are not notified for that payment.
    #[error("Observer '{observer}' failed: {message}")]
    ObserverFailed {
        /// Name of the failing observer
        observer: String,
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for PaymentError {
    fn from(error: std::io::Error) -> Self {
        PaymentError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for PaymentError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        PaymentError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl PaymentError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        PaymentError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: &str) -> Self {
        PaymentError::ParseError {
            line,
            message: message.to_string(),
        }
    }

    /// Create a MissingMethod error
    pub fn missing_method(line: Option<u64>) -> Self {
        PaymentError::MissingMethod { line }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, method: &str) -> Self {
        PaymentError::InvalidAmount {
            amount: amount.to_string(),
            method: method.to_string(),
        }
    }

    /// Create a NegativeAmount error
    pub fn negative_amount(method: &str, amount: Decimal) -> Self {
        PaymentError::NegativeAmount {
            method: method.to_string(),
            amount,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(target: &str, amount: Decimal) -> Self {
        PaymentError::ArithmeticOverflow {
            target: target.to_string(),
            amount,
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(message: &str) -> Self {
        PaymentError::InvalidConfig {
            message: message.to_string(),
        }
    }

    /// Create a DuplicateHandler error
    pub fn duplicate_handler(method: &str) -> Self {
        PaymentError::DuplicateHandler {
            method: method.to_string(),
        }
    }

    /// Create an ObserverFailed error
    pub fn observer_failed(observer: &str, message: &str) -> Self {
        PaymentError::ObserverFailed {
            observer: observer.to_string(),
            message: message.to_string(),
        }
    }

    /// Whether this error concerns a single record and processing may continue
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaymentError::ParseError { .. }
                | PaymentError::MissingMethod { .. }
                | PaymentError::InvalidAmount { .. }
                | PaymentError::NegativeAmount { .. }
                | PaymentError::ArithmeticOverflow { .. }
        )
    }
}
