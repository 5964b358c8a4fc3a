//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence; the configured level is the fallback
//! directive when it is unset.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `format` is `json` for one JSON object per line; anything else selects
/// the human-readable text formatter.
pub fn init(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
