//! Payment ledger module
//!
//! This module provides the `Ledger` struct which accumulates the total amount
//! received per payment method.
//!
//! The Ledger is responsible for:
//! - Creating an entry on the first payment for a method
//! - Accumulating later payments into the existing entry
//! - Providing sorted entry listings for output
//!
//! There is no removal or reset: entries only ever grow.

use crate::types::{PaymentError, PaymentMethod};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Per-method cumulative totals
///
/// Owned exclusively by a [`crate::core::PaymentDispatcher`]; external callers
/// get read-only access through `PaymentDispatcher::ledger`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    /// Map of method tag to cumulative amount
    totals: HashMap<PaymentMethod, Decimal>,
}

impl Ledger {
    /// Create a new, empty Ledger
    pub fn new() -> Self {
        Ledger {
            totals: HashMap::new(),
        }
    }

    /// Record a payment against a method
    ///
    /// If `method` already has an entry it is incremented by `amount`,
    /// otherwise it is inserted with value `amount`. Uses checked arithmetic
    /// so an overflowing payment leaves the entry unchanged.
    ///
    /// # Arguments
    ///
    /// * `method` - The method to credit
    /// * `amount` - The amount to add (non-negative, enforced by `PaymentRequest`)
    ///
    /// # Returns
    ///
    /// The new cumulative total for `method`.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::ArithmeticOverflow` if the addition would overflow.
    pub fn add_payment(
        &mut self,
        method: &PaymentMethod,
        amount: Decimal,
    ) -> Result<Decimal, PaymentError> {
        let entry = self.totals.entry(method.clone()).or_insert(Decimal::ZERO);

        let new_total = entry.checked_add(amount).ok_or_else(|| {
            PaymentError::arithmetic_overflow(&format!("ledger entry '{}'", method), amount)
        })?;

        *entry = new_total;
        Ok(new_total)
    }

    /// Cumulative total for a method, if any payment was recorded for it
    pub fn get(&self, method: &PaymentMethod) -> Option<Decimal> {
        self.totals.get(method).copied()
    }

    /// All entries sorted by method tag
    ///
    /// Sorting gives deterministic output for CSV generation.
    pub fn entries(&self) -> Vec<(&PaymentMethod, Decimal)> {
        let mut entries: Vec<(&PaymentMethod, Decimal)> =
            self.totals.iter().map(|(m, a)| (m, *a)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Sum over every entry
    pub fn sum(&self) -> Decimal {
        self.totals.values().copied().sum()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
