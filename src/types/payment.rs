//! Payment request types for the payment router
//!
//! This module defines the method tag and the immutable request record that
//! flows through the handler chain and the observer notification step.

use super::error::PaymentError;
use rust_decimal::Decimal;
use std::fmt;

/// Payment method tag
///
/// A case-sensitive string tag such as `cash` or `creditCard`. Handlers match
/// on exact equality, so `Cash` and `cash` are different methods. Tags outside
/// the configured chain are valid values; they simply never match a handler.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaymentMethod(String);

impl PaymentMethod {
    pub const CASH: &'static str = "cash";
    pub const CREDIT_CARD: &'static str = "creditCard";
    pub const DEBIT_CARD: &'static str = "debitCard";
    pub const GIFTICON: &'static str = "Gifticon";

    /// Create a method tag from any string
    pub fn new(tag: impl Into<String>) -> Self {
        PaymentMethod(tag.into())
    }

    /// The default chain order: cash, credit card, debit card, gift certificate
    pub fn defaults() -> Vec<PaymentMethod> {
        [
            Self::CASH,
            Self::CREDIT_CARD,
            Self::DEBIT_CARD,
            Self::GIFTICON,
        ]
        .into_iter()
        .map(PaymentMethod::new)
        .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PaymentMethod {
    fn from(tag: &str) -> Self {
        PaymentMethod::new(tag)
    }
}

impl From<String> for PaymentMethod {
    fn from(tag: String) -> Self {
        PaymentMethod(tag)
    }
}

/// A single payment request
///
/// Carries the declared method and a non-negative amount. Fields are private so
/// a request can only be built through [`PaymentRequest::new`], which enforces
/// the amount policy, and is never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    method: PaymentMethod,
    amount: Decimal,
}

impl PaymentRequest {
    /// Create a new payment request
    ///
    /// # Arguments
    ///
    /// * `method` - The declared payment method
    /// * `amount` - The amount paid; zero is accepted
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::NegativeAmount` if `amount` is below zero.
    pub fn new(method: impl Into<PaymentMethod>, amount: Decimal) -> Result<Self, PaymentError> {
        let method = method.into();
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PaymentError::negative_amount(method.as_str(), amount));
        }

        Ok(PaymentRequest { method, amount })
    }

    pub fn method(&self) -> &PaymentMethod {
        &self.method
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}
