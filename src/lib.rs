//! Payment Router Library
//! # Overview
//!
//! Routes payment requests through a chain of method-specific handlers and
//! broadcasts each payment to observers for bookkeeping.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (PaymentRequest, DispatchOutcome, errors)
//! - [`core`] - Business logic components:
//!   - [`core::chain`] - Ordered method handlers, first match wins
//!   - [`core::ledger`] - Per-method cumulative totals
//!   - [`core::dispatcher`] - Owns the chain and its ledger
//!   - [`core::aggregate_store`] - Shared running total across methods
//!   - [`core::observer`] - Observers and the ordered registry
//!   - [`core::session`] - Route, then notify
//! - [`io`] - CSV request input and ledger output
//! - [`pipeline`] - Wires everything together for one input file
//! - [`cli`] - CLI arguments parsing
//!
//! # Example
//!
//! ```
//! use payment_router::{
//!     AggregateStore, FinancialStatementObserver, PaymentDispatcher, PaymentRequest,
//!     PaymentSession,
//! };
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let store = AggregateStore::new();
//! let mut dispatcher = PaymentDispatcher::new();
//! let mut session = PaymentSession::new();
//! session.add_observer(Arc::new(FinancialStatementObserver::new(store.clone())));
//!
//! let request = PaymentRequest::new("cash", Decimal::new(5000, 0)).unwrap();
//! let receipt = session.make_payment(&request, &mut dispatcher).unwrap();
//!
//! assert!(receipt.outcome.is_recorded());
//! assert_eq!(store.total(), Decimal::new(5000, 0));
//! ```
//!
//! # Notification Policy
//!
//! By default observers are notified after every routed request, including
//! requests no handler matched. `NotifyPolicy::OnMatchOnly` restricts
//! notification to recorded payments, keeping the aggregate total equal to the
//! ledger sum.

pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use core::{
    AggregateStore, FinancialStatementObserver, HandlerChain, Ledger, NotifyPolicy,
    ObserverRegistry, PaymentDispatch, PaymentDispatcher, PaymentObserver, PaymentSession,
    RouterConfig,
};
pub use io::write_ledger_csv;
pub use pipeline::{PaymentPipeline, PipelineSummary};
pub use types::{DispatchOutcome, PaymentError, PaymentMethod, PaymentReceipt, PaymentRequest};
