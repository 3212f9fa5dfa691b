//! Payment observers
//!
//! - `FinancialStatementObserver` - forwards every notified amount to an
//!   [`AggregateStore`]
//! - `ObserverRegistry` - ordered list of observers; insertion order is
//!   notification order

use crate::core::aggregate_store::AggregateStore;
use crate::core::traits::PaymentObserver;
use crate::types::PaymentError;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Observer that keeps the aggregate total in step with payments
#[derive(Debug, Clone)]
pub struct FinancialStatementObserver {
    store: AggregateStore,
}

impl FinancialStatementObserver {
    pub fn new(store: AggregateStore) -> Self {
        FinancialStatementObserver { store }
    }

    pub fn store(&self) -> &AggregateStore {
        &self.store
    }
}

impl PaymentObserver for FinancialStatementObserver {
    fn name(&self) -> &str {
        "financial-statement"
    }

    fn update(&self, amount: Decimal) -> Result<(), PaymentError> {
        self.store.update(amount).map(|_| ())
    }
}

/// Ordered collection of observers
///
/// Duplicates are allowed: registering the same observer twice notifies it
/// twice per payment.
#[derive(Default, Clone)]
pub struct ObserverRegistry {
    observers: Vec<Arc<dyn PaymentObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        ObserverRegistry {
            observers: Vec::new(),
        }
    }

    /// Append an observer to the end of the notification order
    pub fn add_observer(&mut self, observer: Arc<dyn PaymentObserver>) {
        self.observers.push(observer);
    }

    /// Notify every observer in registration order
    ///
    /// Notification is synchronous. The first failing observer stops the loop:
    /// observers after it are not called for this amount.
    ///
    /// # Returns
    ///
    /// The number of observers notified.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::ObserverFailed` naming the failing observer. This
    /// includes an observer's own arithmetic overflow: by the time observers
    /// run the payment is already in the ledger, so the failure is not a
    /// per-record rejection.
    pub fn notify_observers(&self, amount: Decimal) -> Result<usize, PaymentError> {
        for observer in &self.observers {
            observer.update(amount).map_err(|e| match e {
                PaymentError::ObserverFailed { .. } => e,
                other => PaymentError::observer_failed(observer.name(), &other.to_string()),
            })?;
        }

        Ok(self.observers.len())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.observers.iter().map(|o| o.name()))
            .finish()
    }
}
