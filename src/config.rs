//! Assistant configuration
//!
//! Model selection and sampling come from the environment once, at startup.
//! The API key does not: it is looked up on every call through a
//! [`CredentialSource`], so a key added or removed while the site runs takes
//! effect on the next message.

use crate::llm::DEFAULT_BASE_URL;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variables consulted for the API key, in order
pub const API_KEY_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];

/// Where the API key comes from
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// First non-blank value among the named environment variables
    Env(Vec<String>),
    /// A fixed value, `None` meaning "not configured"
    Static(Option<String>),
}

impl Default for CredentialSource {
    fn default() -> Self {
        Self::Env(API_KEY_VARS.iter().map(ToString::to_string).collect())
    }
}

impl CredentialSource {
    /// Resolve the key now; blank values count as missing
    pub fn resolve(&self) -> Option<String> {
        let non_blank = |key: String| {
            let trimmed = key.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        match self {
            Self::Env(vars) => vars
                .iter()
                .find_map(|var| std::env::var(var).ok().and_then(non_blank)),
            Self::Static(key) => key.clone().and_then(non_blank),
        }
    }
}

/// Settings for the admissions assistant
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
    pub request_timeout: Duration,
    pub credentials: CredentialSource,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            credentials: CredentialSource::default(),
        }
    }
}

impl AssistantConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let temperature = match lookup("GEMINI_TEMPERATURE") {
            Some(raw) => match raw.trim().parse::<f32>() {
                Ok(t) if (0.0..=2.0).contains(&t) => t,
                _ => {
                    tracing::warn!(value = %raw, "Ignoring invalid GEMINI_TEMPERATURE");
                    defaults.temperature
                }
            },
            None => defaults.temperature,
        };

        let request_timeout = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "Ignoring invalid GEMINI_TIMEOUT_SECS");
                    defaults.request_timeout
                }
            },
            None => defaults.request_timeout,
        };

        Self {
            model: lookup("GEMINI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(defaults.model),
            temperature,
            base_url: lookup("GEMINI_BASE_URL")
                .filter(|u| !u.trim().is_empty())
                .unwrap_or(defaults.base_url),
            request_timeout,
            credentials: defaults.credentials,
        }
    }

    /// Use a fixed API key instead of the environment
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.credentials = CredentialSource::Static(key);
        self
    }
}
