//! Benchmark suite for payment routing
//!
//! Measures chain lookup on its own, a full route-then-notify session, and the
//! CSV pipeline end to end, using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Inputs are generated in memory: requests cycle through the four default
//! methods plus one tag no handler recognizes, so every position in the chain
//! and the fall-through path are all exercised.

use payment_router::io::RequestReader;
use payment_router::{
    AggregateStore, FinancialStatementObserver, HandlerChain, PaymentDispatcher, PaymentPipeline,
    PaymentRequest, PaymentSession, RouterConfig,
};
use rust_decimal::Decimal;
use std::fmt::Write as _;
use std::sync::Arc;

const TAGS: [&str; 5] = ["cash", "creditCard", "debitCard", "Gifticon", "unknownMethod"];

fn main() {
    divan::main();
}

fn requests(count: usize) -> Vec<PaymentRequest> {
    (0..count)
        .map(|i| {
            PaymentRequest::new(TAGS[i % TAGS.len()], Decimal::new(i as i64 + 1, 2))
                .expect("generated amounts are non-negative")
        })
        .collect()
}

fn csv_input(count: usize) -> String {
    let mut input = String::from("method,amount\n");
    for i in 0..count {
        writeln!(input, "{},{}.{:02}", TAGS[i % TAGS.len()], i / 100, i % 100)
            .expect("writing to a String cannot fail");
    }
    input
}

/// Chain lookup only, no ledger mutation
#[divan::bench(args = [100, 10_000])]
fn chain_route(bencher: divan::Bencher, count: usize) {
    let chain = HandlerChain::default();
    let requests = requests(count);

    bencher.bench_local(|| {
        requests
            .iter()
            .filter(|request| chain.route(divan::black_box(request)).is_some())
            .count()
    });
}

/// Route and notify one financial-statement observer per request
#[divan::bench(args = [100, 10_000])]
fn session_make_payment(bencher: divan::Bencher, count: usize) {
    let requests = requests(count);

    bencher.bench_local(|| {
        let store = AggregateStore::new();
        let mut dispatcher = PaymentDispatcher::new();
        let mut session = PaymentSession::new();
        session.add_observer(Arc::new(FinancialStatementObserver::new(store.clone())));

        for request in &requests {
            session
                .make_payment(request, &mut dispatcher)
                .expect("Routing failed");
        }
        store.total()
    });
}

/// Parse, route, and write the ledger for an in-memory CSV
#[divan::bench(args = [1_000, 100_000])]
fn pipeline_in_memory(bencher: divan::Bencher, count: usize) {
    let input = csv_input(count);
    let pipeline = PaymentPipeline::new(RouterConfig::default());

    bencher.bench_local(|| {
        let reader = RequestReader::new(input.as_bytes());
        let mut output = Vec::<u8>::new();
        pipeline
            .process_reader(reader, &mut output)
            .expect("Processing failed")
    });
}
