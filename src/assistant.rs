//! Admissions assistant: one visitor message in, one displayable reply out
//!
//! Every failure is absorbed here. Callers always receive a string, which is
//! the model's text or one of the fixed fallbacks below, and append it to the
//! transcript themselves.

use crate::config::{AssistantConfig, CredentialSource};
use crate::conversation::ChatTurn;
use crate::llm::{
    build_http_client, GeminiService, LlmError, LlmRequest, LlmService, LoggingService,
    SystemContent,
};
use crate::profile::BusinessProfile;
use crate::prompt;
use async_trait::async_trait;
use std::sync::Arc;

/// Reply when no API key is configured
pub const OFFLINE_REPLY: &str = "I'm currently offline. Please contact us directly.";

/// Reply when the model answered with no text
pub const EMPTY_REPLY: &str = "I didn't catch that. Could you rephrase?";

/// Reply when the call failed for any reason
pub const CONNECTION_TROUBLE_REPLY: &str =
    "I'm having trouble connecting to my brain right now. Please try again later.";

/// Creates the LLM service for a resolved API key
pub type ServiceFactory =
    Arc<dyn Fn(&str) -> Result<Arc<dyn LlmService>, LlmError> + Send + Sync>;

/// Anything that can answer a visitor
///
/// `history` is the transcript before `message` was appended.
#[async_trait]
pub trait ReplySource: Send + Sync {
    async fn reply(&self, history: &[ChatTurn], message: &str) -> String;
}

/// Gemini-backed admissions assistant
pub struct AdmissionsAssistant {
    profile: Arc<BusinessProfile>,
    model: String,
    temperature: f32,
    credentials: CredentialSource,
    factory: ServiceFactory,
}

impl AdmissionsAssistant {
    /// Assistant talking to the Gemini endpoint named in `config`
    pub fn gemini(profile: Arc<BusinessProfile>, config: &AssistantConfig) -> Result<Self, LlmError> {
        let client = build_http_client(config.request_timeout)?;
        let model = config.model.clone();
        let base_url = config.base_url.clone();

        let factory: ServiceFactory =
            Arc::new(move |api_key: &str| -> Result<Arc<dyn LlmService>, LlmError> {
                Ok(Arc::new(GeminiService::new(client.clone(), api_key, &model, &base_url)))
            });

        Ok(Self::with_factory(profile, config, factory))
    }

    /// Assistant over any LLM service
    pub fn with_factory(
        profile: Arc<BusinessProfile>,
        config: &AssistantConfig,
        factory: ServiceFactory,
    ) -> Self {
        Self {
            profile,
            model: config.model.clone(),
            temperature: config.temperature,
            credentials: config.credentials.clone(),
            factory,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, history: &[ChatTurn], message: &str) -> LlmRequest {
        LlmRequest {
            system: vec![SystemContent::new(prompt::SYSTEM_INSTRUCTION)],
            messages: prompt::assemble(&self.profile, history, message),
            temperature: Some(self.temperature),
        }
    }

    /// Answer one visitor message
    ///
    /// Makes at most one request; never retries.
    pub async fn answer(&self, history: &[ChatTurn], message: &str) -> String {
        let Some(api_key) = self.credentials.resolve() else {
            tracing::error!("API key is missing, admissions assistant is offline");
            return OFFLINE_REPLY.to_string();
        };

        let service = match (self.factory)(&api_key) {
            Ok(service) => LoggingService::new(service),
            Err(e) => {
                tracing::error!(error = %e, kind = e.kind.as_str(), "Failed to create LLM service");
                return CONNECTION_TROUBLE_REPLY.to_string();
            }
        };

        let request = self.build_request(history, message);
        match service.complete(&request).await {
            Ok(response) => {
                if let Some(text) = response.trimmed_text() {
                    text.to_string()
                } else {
                    tracing::warn!(
                        model = %self.model,
                        finish_reason = ?response.finish_reason,
                        "LLM reply had no text"
                    );
                    EMPTY_REPLY.to_string()
                }
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model,
                    error = %e,
                    kind = e.kind.as_str(),
                    "Admissions assistant request failed"
                );
                CONNECTION_TROUBLE_REPLY.to_string()
            }
        }
    }
}

#[async_trait]
impl ReplySource for AdmissionsAssistant {
    async fn reply(&self, history: &[ChatTurn], message: &str) -> String {
        self.answer(history, message).await
    }
}
