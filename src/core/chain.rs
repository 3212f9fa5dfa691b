//! Handler chain
//!
//! An ordered sequence of method handlers walked by a single dispatch routine.
//! Each handler is configured with exactly one method tag; the first handler
//! whose tag equals the request's method claims it. Match order is exactly
//! configuration order, with no backtracking or re-ordering.

use crate::core::ledger::Ledger;
use crate::types::{DispatchOutcome, PaymentError, PaymentMethod, PaymentRequest};
use std::collections::HashSet;

/// A single link in the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodHandler {
    method: PaymentMethod,
}

impl MethodHandler {
    pub fn new(method: PaymentMethod) -> Self {
        MethodHandler { method }
    }

    pub fn method(&self) -> &PaymentMethod {
        &self.method
    }

    /// Whether this handler claims the request
    pub fn matches(&self, request: &PaymentRequest) -> bool {
        &self.method == request.method()
    }
}

/// Ordered chain of method handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerChain {
    handlers: Vec<MethodHandler>,
}

impl HandlerChain {
    /// Build a chain from an ordered list of method tags
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::DuplicateHandler` if a tag appears twice. A second
    /// handler for the same tag could never be reached.
    pub fn new<I>(methods: I) -> Result<Self, PaymentError>
    where
        I: IntoIterator<Item = PaymentMethod>,
    {
        let mut seen = HashSet::new();
        let mut handlers = Vec::new();

        for method in methods {
            if !seen.insert(method.clone()) {
                return Err(PaymentError::duplicate_handler(method.as_str()));
            }
            handlers.push(MethodHandler::new(method));
        }

        Ok(HandlerChain { handlers })
    }

    /// Find the handler that claims a request, with its position
    pub fn route(&self, request: &PaymentRequest) -> Option<(usize, &MethodHandler)> {
        self.handlers
            .iter()
            .enumerate()
            .find(|(_, handler)| handler.matches(request))
    }

    /// Walk the chain and record the request in the ledger if a handler claims it
    ///
    /// An unrecognized method yields `DispatchOutcome::Unmatched` and leaves the
    /// ledger untouched.
    ///
    /// # Errors
    ///
    /// Only ledger arithmetic overflow is reported as an error.
    pub fn handle(
        &self,
        request: &PaymentRequest,
        ledger: &mut Ledger,
    ) -> Result<DispatchOutcome, PaymentError> {
        match self.route(request) {
            Some((position, handler)) => {
                let total = ledger.add_payment(handler.method(), request.amount())?;
                tracing::debug!(
                    method = %handler.method(),
                    position,
                    amount = %request.amount(),
                    %total,
                    "payment recorded"
                );
                Ok(DispatchOutcome::Recorded {
                    method: handler.method().clone(),
                    position,
                })
            }
            None => {
                tracing::warn!(method = %request.method(), "All handlers failed");
                Ok(DispatchOutcome::Unmatched {
                    method: request.method().clone(),
                })
            }
        }
    }

    pub fn handlers(&self) -> &[MethodHandler] {
        &self.handlers
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for HandlerChain {
    /// cash → creditCard → debitCard → Gifticon
    fn default() -> Self {
        HandlerChain {
            handlers: PaymentMethod::defaults()
                .into_iter()
                .map(MethodHandler::new)
                .collect(),
        }
    }
}
