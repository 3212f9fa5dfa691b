//! Results of routing a payment

use super::payment::PaymentMethod;

/// What the handler chain did with a request
///
/// `Unmatched` is an expected result, not an error: the request named a
/// method that no handler in the chain claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler claimed the request and the ledger was updated
    Recorded {
        /// The method that was recorded
        method: PaymentMethod,
        /// Zero-based index of the claiming handler in the chain
        position: usize,
    },

    /// No handler in the chain matched the request's method
    Unmatched {
        /// The unrecognized method
        method: PaymentMethod,
    },
}

impl DispatchOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, DispatchOutcome::Recorded { .. })
    }
}

/// Summary of one `make_payment` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Result of routing the request through the chain
    pub outcome: DispatchOutcome,
    /// Number of observers that received the notification
    pub observers_notified: usize,
}
