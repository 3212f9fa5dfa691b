//! Payment processing pipeline
//!
//! Wires the pieces together for one input file:
//! config → dispatcher → session → financial statement observer → aggregate store.
//!
//! The pipeline focuses on orchestration, delegating:
//! - CSV parsing to `RequestReader` (iterator interface)
//! - Routing to `PaymentDispatcher` through `PaymentSession`
//! - CSV output to `csv_format::write_ledger_csv`
//!
//! Record-level failures are logged and skipped; processing continues with the
//! next record. Only failures that make the run meaningless (missing input,
//! invalid configuration, output write errors, observer failures) abort it.

use crate::core::{
    AggregateStore, FinancialStatementObserver, PaymentDispatcher, PaymentSession, RouterConfig,
};
use crate::io::{write_ledger_csv, RequestReader};
use crate::types::{PaymentError, PaymentRequest};
use rust_decimal::Decimal;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

/// Counts and totals from one pipeline run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineSummary {
    /// Requests routed through the chain
    pub processed: usize,
    /// Requests a handler recorded in the ledger
    pub recorded: usize,
    /// Requests no handler matched
    pub unmatched: usize,
    /// Records skipped before routing (parse errors, negative amounts) or
    /// rejected by arithmetic overflow
    pub rejected: usize,
    /// Final aggregate total
    pub aggregate_total: Decimal,
}

/// Runs a file of payment requests through a freshly wired router
pub struct PaymentPipeline {
    config: RouterConfig,
}

impl PaymentPipeline {
    pub fn new(config: RouterConfig) -> Self {
        PaymentPipeline { config }
    }

    /// Process a CSV file and write the final ledger to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, the configuration is
    /// invalid, an observer fails, or the report cannot be written.
    pub fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<PipelineSummary, PaymentError> {
        let reader = RequestReader::open(input_path)?;
        self.process_reader(reader, output)
    }

    /// Process requests from any CSV source
    pub fn process_reader<R: Read>(
        &self,
        reader: RequestReader<R>,
        output: &mut dyn Write,
    ) -> Result<PipelineSummary, PaymentError> {
        let store = AggregateStore::new();
        let mut dispatcher = PaymentDispatcher::from_config(&self.config)?;
        let session = self.build_session(&store);

        let mut summary = PipelineSummary::default();

        for result in reader {
            match result {
                Ok(request) => Self::route(&session, &mut dispatcher, &request, &mut summary)?,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed payment record");
                    summary.rejected += 1;
                }
            }
        }

        summary.aggregate_total = store.total();

        write_ledger_csv(dispatcher.ledger(), output)?;

        tracing::info!(
            processed = summary.processed,
            recorded = summary.recorded,
            unmatched = summary.unmatched,
            rejected = summary.rejected,
            total = %summary.aggregate_total,
            "payment run complete"
        );

        Ok(summary)
    }

    fn build_session(&self, store: &AggregateStore) -> PaymentSession {
        let mut session = PaymentSession::with_policy(self.config.notify_policy);
        session.add_observer(Arc::new(FinancialStatementObserver::new(store.clone())));
        session
    }

    fn route(
        session: &PaymentSession,
        dispatcher: &mut PaymentDispatcher,
        request: &PaymentRequest,
        summary: &mut PipelineSummary,
    ) -> Result<(), PaymentError> {
        match session.make_payment(request, dispatcher) {
            Ok(receipt) => {
                summary.processed += 1;
                if receipt.outcome.is_recorded() {
                    summary.recorded += 1;
                } else {
                    summary.unmatched += 1;
                }
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!(error = %e, method = %request.method(), "payment rejected");
                summary.rejected += 1;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
