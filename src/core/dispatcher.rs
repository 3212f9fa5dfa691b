//! Payment dispatcher
//!
//! This module provides the PaymentDispatcher that owns the handler chain and
//! the ledger it records into.
//!
//! The chain is wired once at construction from an ordered list of methods.
//! After that the dispatcher only routes requests and exposes the ledger for
//! read-only inspection.

use crate::core::chain::HandlerChain;
use crate::core::config::RouterConfig;
use crate::core::ledger::Ledger;
use crate::core::traits::PaymentDispatch;
use crate::types::{DispatchOutcome, PaymentError, PaymentMethod, PaymentRequest};
use rust_decimal::Decimal;

/// Owns a handler chain and the ledger its handlers record into
pub struct PaymentDispatcher {
    chain: HandlerChain,
    ledger: Ledger,
}

impl PaymentDispatcher {
    /// Create a dispatcher with the default chain
    ///
    /// The chain order is cash → creditCard → debitCard → Gifticon.
    pub fn new() -> Self {
        PaymentDispatcher {
            chain: HandlerChain::default(),
            ledger: Ledger::new(),
        }
    }

    /// Create a dispatcher with a custom ordered chain
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::DuplicateHandler` if a method is listed twice.
    pub fn with_methods<I>(methods: I) -> Result<Self, PaymentError>
    where
        I: IntoIterator<Item = PaymentMethod>,
    {
        Ok(PaymentDispatcher {
            chain: HandlerChain::new(methods)?,
            ledger: Ledger::new(),
        })
    }

    /// Create a dispatcher from a validated router configuration
    pub fn from_config(config: &RouterConfig) -> Result<Self, PaymentError> {
        config.validate()?;
        Self::with_methods(config.methods.iter().cloned())
    }

    /// Record a payment directly in the ledger
    ///
    /// Same accumulation rule the handlers apply, but without routing: a
    /// method outside the chain can be credited too.
    pub fn add_payment(
        &mut self,
        method: &PaymentMethod,
        amount: Decimal,
    ) -> Result<Decimal, PaymentError> {
        self.ledger.add_payment(method, amount)
    }

    /// Read-only view of the per-method totals
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Methods recognized by the chain, in match order
    pub fn methods(&self) -> Vec<&PaymentMethod> {
        self.chain.handlers().iter().map(|h| h.method()).collect()
    }
}

impl Default for PaymentDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentDispatch for PaymentDispatcher {
    fn handle_payment(
        &mut self,
        request: &PaymentRequest,
    ) -> Result<DispatchOutcome, PaymentError> {
        self.chain.handle(request, &mut self.ledger)
    }
}
