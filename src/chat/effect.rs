//! Effects produced by chat transitions

use crate::conversation::ChatTurn;

/// Effects to be applied after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a turn to the transcript
    AppendTurn(ChatTurn),
    /// Ask the assistant for a reply
    ///
    /// `history` is the transcript before the visitor's message.
    RequestReply {
        history: Vec<ChatTurn>,
        message: String,
    },
}
