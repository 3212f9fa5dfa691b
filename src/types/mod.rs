//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `payment`: Payment method tags and requests
//! - `outcome`: Routing results and payment receipts
//! - `error`: Error types for the payment router

pub mod error;
pub mod outcome;
pub mod payment;

pub use error::PaymentError;
pub use outcome::{DispatchOutcome, PaymentReceipt};
pub use payment::{PaymentMethod, PaymentRequest};
