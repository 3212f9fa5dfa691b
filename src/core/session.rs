//! Payment session
//!
//! Orchestrates one payment at a time: route the request through a
//! dispatcher, then notify the registered observers with the amount.

use crate::core::config::NotifyPolicy;
use crate::core::observer::ObserverRegistry;
use crate::core::traits::{PaymentDispatch, PaymentObserver};
use crate::types::{PaymentError, PaymentReceipt, PaymentRequest};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Owns the observer registry and the notification policy
#[derive(Debug, Default)]
pub struct PaymentSession {
    observers: ObserverRegistry,
    notify_policy: NotifyPolicy,
}

impl PaymentSession {
    /// Create a session that notifies after every payment attempt
    pub fn new() -> Self {
        Self::with_policy(NotifyPolicy::Always)
    }

    pub fn with_policy(notify_policy: NotifyPolicy) -> Self {
        PaymentSession {
            observers: ObserverRegistry::new(),
            notify_policy,
        }
    }

    /// Register an observer; duplicates are allowed
    pub fn add_observer(&mut self, observer: Arc<dyn PaymentObserver>) {
        self.observers.add_observer(observer);
    }

    /// Notify all observers in registration order
    pub fn notify_observers(&self, amount: Decimal) -> Result<usize, PaymentError> {
        self.observers.notify_observers(amount)
    }

    /// Route one payment and notify observers
    ///
    /// Under `NotifyPolicy::Always` observers are notified even when no
    /// handler matched; under `NotifyPolicy::OnMatchOnly` only recorded
    /// payments are broadcast.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger overflows (observers are then not
    /// notified) or if an observer fails. In the latter case the ledger has
    /// already been updated.
    pub fn make_payment<D>(
        &self,
        request: &PaymentRequest,
        dispatcher: &mut D,
    ) -> Result<PaymentReceipt, PaymentError>
    where
        D: PaymentDispatch + ?Sized,
    {
        let outcome = dispatcher.handle_payment(request)?;

        let observers_notified = if self.notify_policy.should_notify(outcome.is_recorded()) {
            self.notify_observers(request.amount())?
        } else {
            tracing::debug!(method = %request.method(), "unmatched payment not broadcast");
            0
        };

        Ok(PaymentReceipt {
            outcome,
            observers_notified,
        })
    }

    pub fn notify_policy(&self) -> NotifyPolicy {
        self.notify_policy
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate_store::AggregateStore;
    use crate::core::dispatcher::PaymentDispatcher;
    use crate::core::observer::FinancialStatementObserver;
    use crate::types::{DispatchOutcome, PaymentMethod};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn session_with_store(policy: NotifyPolicy) -> (PaymentSession, AggregateStore) {
        let store = AggregateStore::new();
        let mut session = PaymentSession::with_policy(policy);
        session.add_observer(Arc::new(FinancialStatementObserver::new(store.clone())));
        (session, store)
    }

    /// Dispatcher double that claims nothing and counts calls
    #[derive(Default)]
    struct CountingDispatcher {
        calls: usize,
    }

    impl PaymentDispatch for CountingDispatcher {
        fn handle_payment(
            &mut self,
            request: &PaymentRequest,
        ) -> Result<DispatchOutcome, PaymentError> {
            self.calls += 1;
            Ok(DispatchOutcome::Unmatched {
                method: request.method().clone(),
            })
        }
    }

    #[test]
    fn test_make_payment_routes_then_notifies() {
        let (session, store) = session_with_store(NotifyPolicy::Always);
        let mut dispatcher = PaymentDispatcher::new();
        let request = PaymentRequest::new("cash", dec!(5000)).unwrap();

        let receipt = session.make_payment(&request, &mut dispatcher).unwrap();

        assert_eq!(
            receipt,
            PaymentReceipt {
                outcome: DispatchOutcome::Recorded {
                    method: PaymentMethod::from("cash"),
                    position: 0,
                },
                observers_notified: 1,
            }
        );
        assert_eq!(store.total(), dec!(5000));
    }

    #[rstest]
    #[case::always(NotifyPolicy::Always, dec!(100), 1)]
    #[case::on_match_only(NotifyPolicy::OnMatchOnly, dec!(0), 0)]
    fn test_unmatched_payment_notification(
        #[case] policy: NotifyPolicy,
        #[case] expected_total: Decimal,
        #[case] expected_notified: usize,
    ) {
        let (session, store) = session_with_store(policy);
        let mut dispatcher = PaymentDispatcher::new();
        let request = PaymentRequest::new("unknownMethod", dec!(100)).unwrap();

        let receipt = session.make_payment(&request, &mut dispatcher).unwrap();

        assert!(!receipt.outcome.is_recorded());
        assert_eq!(receipt.observers_notified, expected_notified);
        assert_eq!(store.total(), expected_total);
        assert!(dispatcher.ledger().is_empty());
    }

    #[test]
    fn test_make_payment_accepts_any_dispatcher() {
        let (session, store) = session_with_store(NotifyPolicy::Always);
        let mut dispatcher = CountingDispatcher::default();
        let request = PaymentRequest::new("cash", dec!(3)).unwrap();

        session.make_payment(&request, &mut dispatcher).unwrap();
        session.make_payment(&request, &mut dispatcher).unwrap();

        assert_eq!(dispatcher.calls, 2);
        assert_eq!(store.total(), dec!(6));
    }

    #[test]
    fn test_session_without_observers() {
        let session = PaymentSession::new();
        let mut dispatcher = PaymentDispatcher::new();
        let request = PaymentRequest::new("debitCard", dec!(1)).unwrap();

        let receipt = session.make_payment(&request, &mut dispatcher).unwrap();

        assert_eq!(session.observer_count(), 0);
        assert_eq!(session.notify_policy(), NotifyPolicy::Always);
        assert_eq!(receipt.observers_notified, 0);
        assert!(receipt.outcome.is_recorded());
    }

    #[test]
    fn test_ledger_overflow_skips_notification() {
        let (session, store) = session_with_store(NotifyPolicy::Always);
        let mut dispatcher = PaymentDispatcher::new();
        dispatcher
            .add_payment(&PaymentMethod::from("cash"), Decimal::MAX)
            .unwrap();
        let request = PaymentRequest::new("cash", dec!(1)).unwrap();

        let result = session.make_payment(&request, &mut dispatcher);

        assert!(matches!(
            result,
            Err(PaymentError::ArithmeticOverflow { .. })
        ));
        assert_eq!(store.total(), Decimal::ZERO);
    }
}
