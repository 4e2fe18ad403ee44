//! Mock implementations for testing
//!
//! These mocks let the assistant and the chat widget run without network I/O.

use crate::assistant::{AdmissionsAssistant, ReplySource, ServiceFactory};
use crate::config::AssistantConfig;
use crate::conversation::ChatTurn;
use crate::llm::{LlmError, LlmRequest, LlmResponse, LlmService};
use crate::profile::BusinessProfile;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock LLM Service
// ============================================================================

/// Mock LLM service that returns queued responses
pub struct MockLlmService {
    responses: Mutex<VecDeque<Result<LlmResponse, LlmError>>>,
    /// Record of all requests made
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlmService {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful response
    pub fn queue_response(&self, response: LlmResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queue a successful text response
    pub fn queue_text(&self, text: &str) {
        self.queue_response(LlmResponse::from_text(text));
    }

    /// Queue an error response
    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmService for MockLlmService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::network("No mock response queued")))
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}

// ============================================================================
// Factory wiring
// ============================================================================

/// Counts how many services the assistant asked for, and with which keys
#[derive(Default)]
pub struct FactoryProbe {
    pub calls: AtomicUsize,
    pub keys: Mutex<Vec<String>>,
}

impl FactoryProbe {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// A factory handing out `service` and recording each call in `probe`
pub fn mock_factory(service: Arc<MockLlmService>, probe: Arc<FactoryProbe>) -> ServiceFactory {
    Arc::new(move |key: &str| -> Result<Arc<dyn LlmService>, LlmError> {
        probe.calls.fetch_add(1, Ordering::SeqCst);
        probe.keys.lock().unwrap().push(key.to_string());
        Ok(service.clone())
    })
}

/// Assistant over a mock service with the given API key
pub fn mock_assistant(
    api_key: Option<&str>,
) -> (AdmissionsAssistant, Arc<MockLlmService>, Arc<FactoryProbe>) {
    let service = Arc::new(MockLlmService::new());
    let probe = Arc::new(FactoryProbe::default());
    let config = AssistantConfig::default().with_api_key(api_key.map(ToString::to_string));
    let assistant = AdmissionsAssistant::with_factory(
        Arc::new(BusinessProfile::crown_and_blade()),
        &config,
        mock_factory(service.clone(), probe.clone()),
    );
    (assistant, service, probe)
}

// ============================================================================
// Scripted reply source
// ============================================================================

/// Reply source answering from a fixed script, recording what it was asked
pub struct ScriptedReplies {
    replies: Mutex<VecDeque<String>>,
    pub asked: Mutex<Vec<(Vec<ChatTurn>, String)>>,
}

impl ScriptedReplies {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(ToString::to_string).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ReplySource for ScriptedReplies {
    async fn reply(&self, history: &[ChatTurn], message: &str) -> String {
        self.asked
            .lock()
            .unwrap()
            .push((history.to_vec(), message.to_string()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "no more replies".to_string())
    }
}

/// Reply source whose first request never resolves; later ones answer
pub struct StallingReplies {
    stalled: AtomicBool,
    reply: String,
}

impl StallingReplies {
    pub fn new(reply: &str) -> Self {
        Self {
            stalled: AtomicBool::new(false),
            reply: reply.to_string(),
        }
    }
}

#[async_trait]
impl ReplySource for StallingReplies {
    async fn reply(&self, _history: &[ChatTurn], _message: &str) -> String {
        if !self.stalled.swap(true, Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        self.reply.clone()
    }
}
