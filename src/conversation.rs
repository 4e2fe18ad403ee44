//! Chat transcript for one widget session

use crate::profile::BusinessProfile;
use serde::{Deserialize, Serialize};

/// Who said a turn
///
/// Serialized with the wire vocabulary of the generative-text service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    #[serde(rename = "user")]
    Visitor,
    #[serde(rename = "model")]
    Assistant,
}

/// One message in the assistant conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    #[serde(rename = "role")]
    pub speaker: Speaker,
    pub text: String,
}

impl ChatTurn {
    pub fn visitor(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Visitor,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// Greeting the assistant opens every session with
pub fn greeting(profile: &BusinessProfile) -> String {
    format!(
        "Yo! Welcome to {}. Thinking about becoming a barber? Ask me about our courses, tuition, or next start dates.",
        profile.name
    )
}

/// Ordered, append-only transcript
///
/// Turns are never edited or removed and there is no size cap; a widget
/// session is short-lived and discarded with the page.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<ChatTurn>,
}

impl Conversation {
    /// Start a session with the assistant's greeting
    pub fn seeded(profile: &BusinessProfile) -> Self {
        Self {
            turns: vec![ChatTurn::assistant(greeting(profile))],
        }
    }

    pub fn append(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn snapshot(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }
}
