//! LLM provider abstraction
//!
//! Provides a common interface for the generative-text endpoint the
//! admissions assistant talks to.

mod error;
mod gemini;
mod types;

#[cfg(test)]
mod proptests;

pub use error::{LlmError, LlmErrorKind};
pub use gemini::{build_http_client, GeminiService, DEFAULT_BASE_URL};
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for LLM providers
#[async_trait]
pub trait LlmService: Send + Sync {
    /// Make a completion request
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError>;

    /// Get the model ID
    fn model_id(&self) -> &str;
}

/// Logs one line per LLM call
///
/// Calls made from a chat widget run inside its `chat_reply` span, so the
/// session id rides along with these events.
pub struct LoggingService {
    inner: Arc<dyn LlmService>,
    model_id: String,
}

impl LoggingService {
    pub fn new(inner: Arc<dyn LlmService>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl LlmService for LoggingService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let started = std::time::Instant::now();
        let result = self.inner.complete(request).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(response) => tracing::info!(
                model = %self.model_id,
                elapsed_ms,
                turns = request.messages.len(),
                temperature = ?request.temperature,
                finish_reason = response.finish_reason.as_deref().unwrap_or("none"),
                input_tokens = response.usage.input_tokens,
                output_tokens = response.usage.output_tokens,
                blank = response.trimmed_text().is_none(),
                "Gemini call completed"
            ),
            Err(e) => tracing::error!(
                model = %self.model_id,
                elapsed_ms,
                turns = request.messages.len(),
                kind = e.kind.as_str(),
                error = %e.message,
                "Gemini call failed"
            ),
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
