//! Core traits for payment dispatch and observation
//!
//! This module defines the trait abstractions the session depends on, so the
//! dispatcher and the observers can be swapped for other implementations.

use crate::types::{DispatchOutcome, PaymentError, PaymentRequest};
use rust_decimal::Decimal;

/// Trait for routing a payment request to a handler
///
/// Implemented by [`crate::core::PaymentDispatcher`]; test doubles can
/// implement it to exercise a session without a real chain.
pub trait PaymentDispatch {
    /// Route a request through the handler chain, recording it if claimed
    fn handle_payment(&mut self, request: &PaymentRequest)
        -> Result<DispatchOutcome, PaymentError>;
}

/// Capability to receive completed-payment notifications
///
/// Observers take `&self` so one instance can be shared and registered more
/// than once; implementations that keep state use interior mutability.
pub trait PaymentObserver: Send + Sync {
    /// Name used in logs and in `PaymentError::ObserverFailed`
    fn name(&self) -> &str {
        "observer"
    }

    /// Receive the amount of a payment
    fn update(&self, amount: Decimal) -> Result<(), PaymentError>;
}
