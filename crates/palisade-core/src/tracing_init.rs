//! Fallback tracing setup.
//!
//! Palisade is loaded into a host process that normally installs its own
//! global subscriber before any plugin code runs; everything here logs
//! through the `tracing` macros against whatever that subscriber is. For
//! standalone harnesses and tests there is a best-effort fallback below.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a fallback tracing subscriber, unless one is already set.
///
/// * `default_filter` -- default `RUST_LOG` value when the env-var is not set
///   (e.g. `"palisade=info"`).
/// * `log_json` -- when `true`, emit structured JSON log lines instead of the
///   human-readable format.
///
/// Returns `false` when a global subscriber was already installed and the
/// call changed nothing.
pub fn try_init_tracing(default_filter: &str, log_json: bool) -> bool {
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );
    if log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .is_ok()
    }
}
