//! Property-based tests for the Gemini translation layer
//!
//! - Message translation keeps count, order, and text
//! - Roles map onto the Gemini vocabulary (`user` / `model`)
//! - Response text is the concatenation of non-thought parts

use super::gemini::GeminiService;
use super::types::{LlmMessage, LlmRequest, MessageRole, SystemContent};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_message() -> impl Strategy<Value = LlmMessage> {
    (any::<bool>(), "[a-zA-Z0-9 _.!?,$]{0,80}").prop_map(|(is_user, text)| {
        if is_user {
            LlmMessage::user(text)
        } else {
            LlmMessage::assistant(text)
        }
    })
}

fn arb_request() -> impl Strategy<Value = LlmRequest> {
    (
        proptest::collection::vec(arb_message(), 0..12),
        proptest::option::of("[a-zA-Z ]{1,40}"),
    )
        .prop_map(|(messages, system)| LlmRequest {
            system: system.into_iter().map(SystemContent::new).collect(),
            messages,
            temperature: Some(0.25),
        })
}

proptest! {
    #[test]
    fn translation_preserves_messages(request in arb_request()) {
        let wire = serde_json::to_value(GeminiService::translate_request(&request)).unwrap();
        let contents = wire["contents"].as_array().cloned().unwrap_or_default();

        prop_assert_eq!(contents.len(), request.messages.len());
        for (content, msg) in contents.iter().zip(&request.messages) {
            let expected_role = match msg.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "model",
            };
            prop_assert_eq!(&content["role"], &Value::from(expected_role));
            prop_assert_eq!(&content["parts"][0]["text"], &Value::from(msg.text.as_str()));
        }
    }

    #[test]
    fn system_instruction_present_iff_system_given(request in arb_request()) {
        let wire = serde_json::to_value(GeminiService::translate_request(&request)).unwrap();
        prop_assert_eq!(wire.get("systemInstruction").is_some(), !request.system.is_empty());
    }

    #[test]
    fn response_text_concatenates_visible_parts(
        parts in proptest::collection::vec(("[a-zA-Z ]{0,20}", any::<bool>()), 0..6)
    ) {
        let wire_parts: Vec<Value> = parts
            .iter()
            .map(|(text, thought)| json!({ "text": text, "thought": thought }))
            .collect();
        let body = json!({
            "candidates": [{ "content": { "role": "model", "parts": wire_parts } }]
        })
        .to_string();

        let response = GeminiService::parse_response(&body).unwrap();
        let visible: Vec<&str> = parts
            .iter()
            .filter(|(_, thought)| !thought)
            .map(|(text, _)| text.as_str())
            .collect();

        if visible.is_empty() {
            prop_assert!(response.text.is_none());
        } else {
            prop_assert_eq!(response.text, Some(visible.concat()));
        }
    }
}
