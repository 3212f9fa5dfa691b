//! Router configuration
//!
//! Holds the configuration-time decisions: which methods the chain recognizes,
//! in what order, and when observers are notified.

use crate::types::{PaymentError, PaymentMethod};
use std::collections::HashSet;

/// When a session notifies its observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyPolicy {
    /// Notify after every routed request, matched or not
    ///
    /// An unmatched request then raises the aggregate total while leaving the
    /// ledger untouched.
    #[default]
    Always,

    /// Notify only when a handler recorded the payment
    OnMatchOnly,
}

impl NotifyPolicy {
    pub fn should_notify(&self, recorded: bool) -> bool {
        match self {
            NotifyPolicy::Always => true,
            NotifyPolicy::OnMatchOnly => recorded,
        }
    }
}

/// Configuration for the dispatcher and session
#[derive(Debug, Clone, PartialEq)]
pub struct RouterConfig {
    /// Ordered handler chain
    pub methods: Vec<PaymentMethod>,
    /// Observer notification policy
    pub notify_policy: NotifyPolicy,
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            methods: PaymentMethod::defaults(),
            notify_policy: NotifyPolicy::default(),
        }
    }
}

impl RouterConfig {
    pub fn new(methods: Vec<PaymentMethod>, notify_policy: NotifyPolicy) -> Self {
        RouterConfig {
            methods,
            notify_policy,
        }
    }

    /// Check that the configuration builds a usable chain
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::InvalidConfig` if no methods are configured, a tag
    /// is blank, or a tag is listed twice.
    pub fn validate(&self) -> Result<(), PaymentError> {
        if self.methods.is_empty() {
            return Err(PaymentError::invalid_config(
                "at least one payment method is required",
            ));
        }

        let mut seen = HashSet::new();
        for method in &self.methods {
            if method.as_str().trim().is_empty() {
                return Err(PaymentError::invalid_config("payment method tags cannot be blank"));
            }
            if !seen.insert(method) {
                return Err(PaymentError::invalid_config(&format!(
                    "payment method '{}' is listed more than once",
                    method
                )));
            }
        }

        Ok(())
    }
}
