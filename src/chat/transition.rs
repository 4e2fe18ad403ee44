//! Pure state transition function for the chat widget

use super::{ChatState, Effect, Event};
use crate::conversation::ChatTurn;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_state: ChatState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ChatState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Assistant is still replying, wait before sending another message")]
    Busy,
    #[error("No reply was requested")]
    NoPendingReply,
}

/// Pure transition function
///
/// `transcript` is the conversation as it stands before the event.
pub fn transition(
    state: ChatState,
    transcript: &[ChatTurn],
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // Blank input is a no-op whatever the state
        (state, Event::VisitorSubmitted { text }) if text.trim().is_empty() => {
            Ok(TransitionResult::new(state))
        }

        (ChatState::Idle, Event::VisitorSubmitted { text }) => {
            Ok(TransitionResult::new(ChatState::AwaitingReply)
                .with_effect(Effect::AppendTurn(ChatTurn::visitor(text.clone())))
                .with_effect(Effect::RequestReply {
                    history: transcript.to_vec(),
                    message: text,
                }))
        }

        (ChatState::AwaitingReply, Event::VisitorSubmitted { .. }) => Err(TransitionError::Busy),

        (ChatState::AwaitingReply, Event::ReplyArrived { text }) => Ok(TransitionResult::new(ChatState::Idle)
            .with_effect(Effect::AppendTurn(ChatTurn::assistant(text)))),

        // Hide the typing indicator and leave the transcript alone
        (ChatState::AwaitingReply, Event::ReplyAbandoned) => Ok(TransitionResult::new(ChatState::Idle)),

        (ChatState::Idle, Event::ReplyArrived { .. } | Event::ReplyAbandoned) => {
            Err(TransitionError::NoPendingReply)
        }
    }
}
