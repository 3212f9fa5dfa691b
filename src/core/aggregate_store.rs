//! Aggregate store
//!
//! A single running total across all payment methods. The store is created
//! explicitly (usually once at startup) and shared by cloning the handle:
//! every clone refers to the same total. `update` takes the lock, so the store
//! stays consistent if handles end up on different threads.

use crate::types::PaymentError;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to the process-wide running total
#[derive(Debug, Clone, Default)]
pub struct AggregateStore {
    total: Arc<Mutex<Decimal>>,
}

impl AggregateStore {
    /// Create a fresh store with a zero total
    pub fn new() -> Self {
        AggregateStore {
            total: Arc::new(Mutex::new(Decimal::ZERO)),
        }
    }

    /// Add an amount to the running total
    ///
    /// Emits an informational event with the new total.
    ///
    /// # Returns
    ///
    /// The new total.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::ArithmeticOverflow` if the total would overflow;
    /// the total is left unchanged.
    pub fn update(&self, amount: Decimal) -> Result<Decimal, PaymentError> {
        let mut total = self.lock();

        let new_total = total
            .checked_add(amount)
            .ok_or_else(|| PaymentError::arithmetic_overflow("aggregate total", amount))?;
        *total = new_total;

        tracing::info!(total = %new_total, "Updated financial statement");
        Ok(new_total)
    }

    /// Current running total
    pub fn total(&self) -> Decimal {
        *self.lock()
    }

    /// Whether two handles refer to the same store
    pub fn same_store(&self, other: &AggregateStore) -> bool {
        Arc::ptr_eq(&self.total, &other.total)
    }

    // The total is replaced in a single assignment; a poisoned lock still
    // holds a valid value.
    fn lock(&self) -> MutexGuard<'_, Decimal> {
        self.total.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
