//! # Structured Logging
//!
//! Environment-aware console logging for embedding applications that do
//! not install their own `tracing` subscriber. Applications that already
//! configured one can skip this entirely; resolution code only emits
//! events, it never assumes a subscriber exists.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize console logging once; safe to call from multiple entry
/// points.
///
/// Respects `RUST_LOG` when set, otherwise derives a default level from
/// the detected environment. Does nothing if a global subscriber is
/// already installed.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = detect_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_log_level(&environment)));

        let initialized = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_level(true)
            .try_init();

        if initialized.is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }
        tracing::debug!(environment = %environment, "logging initialized");
    });
}

/// Current environment from environment variables.
fn detect_environment() -> String {
    std::env::var("HERALD_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Default log level for an environment when `RUST_LOG` is unset.
fn default_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        "test" | "development" => "debug".to_string(),
        _ => "debug".to_string(),
    }
}
