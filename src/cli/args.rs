use crate::core::{NotifyPolicy, RouterConfig};
use crate::types::PaymentMethod;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Route payments through a chain of method handlers and report per-method totals
#[derive(Parser, Debug)]
#[command(name = "payment-router", version)]
#[command(about = "Route payments through a chain of method handlers", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing payment requests
    #[arg(value_name = "INPUT", help = "Path to the input CSV file (columns: method,amount)")]
    pub input_file: PathBuf,

    /// Ordered handler chain
    #[arg(
        long = "methods",
        value_name = "METHODS",
        value_delimiter = ',',
        help = "Comma-separated handler chain in match order (default: cash,creditCard,debitCard,Gifticon)"
    )]
    pub methods: Vec<String>,

    /// When observers are notified
    #[arg(
        long = "notify",
        value_name = "MODE",
        default_value = "always",
        help = "Notify observers 'always' or only for recorded payments ('on-match-only')"
    )]
    pub notify: NotifyMode,

    /// Log filter used when RUST_LOG is not set
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Observer notification mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NotifyMode {
    Always,
    OnMatchOnly,
}

impl From<NotifyMode> for NotifyPolicy {
    fn from(mode: NotifyMode) -> Self {
        match mode {
            NotifyMode::Always => NotifyPolicy::Always,
            NotifyMode::OnMatchOnly => NotifyPolicy::OnMatchOnly,
        }
    }
}

impl CliArgs {
    /// Create a RouterConfig from CLI arguments
    ///
    /// Falls back to the default chain when `--methods` is not given. The
    /// result is not validated here; `PaymentDispatcher::from_config` does that.
    pub fn to_router_config(&self) -> RouterConfig {
        let methods = if self.methods.is_empty() {
            PaymentMethod::defaults()
        } else {
            self.methods
                .iter()
                .map(|tag| PaymentMethod::new(tag.trim()))
                .collect()
        };

        RouterConfig::new(methods, self.notify.into())
    }
}
