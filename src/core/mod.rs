//! Core business logic module
//!
//! This module contains the payment routing components:
//! - `traits` - Trait seams for dispatchers and observers
//! - `config` - Chain order and notification policy
//! - `ledger` - Per-method cumulative totals
//! - `chain` - Ordered method handlers and the dispatch routine
//! - `dispatcher` - Owns the chain and its ledger
//! - `aggregate_store` - Shared running total across all methods
//! - `observer` - Observer implementations and the ordered registry
//! - `session` - Routes a payment, then notifies observers

pub mod aggregate_store;
pub mod chain;
pub mod config;
pub mod dispatcher;
pub mod ledger;
pub mod observer;
pub mod session;
pub mod traits;

pub use aggregate_store::AggregateStore;
pub use chain::{HandlerChain, MethodHandler};
pub use config::{NotifyPolicy, RouterConfig};
pub use dispatcher::PaymentDispatcher;
pub use ledger::Ledger;
pub use observer::{FinancialStatementObserver, ObserverRegistry};
pub use session::PaymentSession;
pub use traits::{PaymentDispatch, PaymentObserver};
