//! Payment Router CLI
//!
//! Routes payment requests from a CSV file through a chain of method handlers
//! and prints the per-method ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- payments.csv > ledger.csv
//! cargo run -- --methods cash,creditCard payments.csv
//! cargo run -- --notify on-match-only payments.csv
//! RUST_LOG=debug cargo run -- payments.csv
//! ```
//!
//! The ledger CSV goes to stdout. Logs, including every aggregate total
//! update and the final summary, go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, invalid configuration, output failure, etc.)

use payment_router::cli;
use payment_router::pipeline::PaymentPipeline;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let pipeline = PaymentPipeline::new(args.to_router_config());

    let mut output = std::io::stdout();
    match pipeline.process(&args.input_file, &mut output) {
        Ok(summary) => {
            tracing::info!(total = %summary.aggregate_total, "aggregate total");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
