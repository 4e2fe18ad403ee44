//! Tracing subscriber setup for the host process

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "crown_blade=info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install JSON logging as the global subscriber
///
/// Events carry the fields of their innermost span, so LLM call logs show
/// the chat session they belong to. Fails if another subscriber is already
/// installed.
pub fn try_init() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false),
        )
        .try_init()
}

/// Like [`try_init`], but a second call is a no-op
pub fn init() {
    if try_init().is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
