//! Chat widget driver
//!
//! Feeds events through the pure transition function and applies the
//! resulting effects to the transcript. The reply request is handed back to
//! the caller as a [`PendingReply`] so a shell can await it inline or spawn
//! it, then [`ChatWidget::deliver`] the result. A request that never
//! resolves (dropped, cancelled, or a panicked task) is released with
//! [`ChatWidget::abandon_reply`].

use super::{transition, ChatState, Effect, Event, TransitionError};
use crate::assistant::ReplySource;
use crate::conversation::{ChatTurn, Conversation};
use crate::profile::BusinessProfile;
use std::fmt;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// What the presentation shell renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatView<'a> {
    pub turns: &'a [ChatTurn],
    pub is_typing: bool,
}

/// An outstanding request for the assistant's reply
pub struct PendingReply {
    session_id: Uuid,
    history: Vec<ChatTurn>,
    message: String,
    replies: Arc<dyn ReplySource>,
}

impl PendingReply {
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Ask the reply source; always yields a displayable string
    ///
    /// Runs inside a `chat_reply` span carrying the session id, so the LLM
    /// call logs can be tied back to the widget.
    pub async fn resolve(self) -> String {
        let span = tracing::info_span!("chat_reply", session = %self.session_id);
        async move {
            tracing::debug!(history = self.history.len(), "Requesting assistant reply");
            self.replies.reply(&self.history, &self.message).await
        }
        .instrument(span)
        .await
    }
}

impl fmt::Debug for PendingReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingReply")
            .field("session_id", &self.session_id)
            .field("history", &self.history.len())
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Releases the widget if a [`ChatWidget::send`] future is dropped before
/// its reply is delivered
struct InFlight<'a> {
    widget: &'a mut ChatWidget,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let _ = self.widget.abandon_reply();
        }
    }
}

/// One chat widget session
pub struct ChatWidget {
    session_id: Uuid,
    state: ChatState,
    conversation: Conversation,
    replies: Arc<dyn ReplySource>,
    open: bool,
}

impl ChatWidget {
    /// Open a new session, seeded with the greeting
    pub fn new(profile: &BusinessProfile, replies: Arc<dyn ReplySource>) -> Self {
        let session_id = Uuid::new_v4();
        tracing::info!(session = %session_id, "Chat session started");
        Self {
            session_id,
            state: ChatState::Idle,
            conversation: Conversation::seeded(profile),
            replies,
            open: true,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        self.conversation.snapshot()
    }

    pub fn view(&self) -> ChatView<'_> {
        ChatView {
            turns: self.conversation.snapshot(),
            is_typing: self.state.is_typing(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the widget again; the transcript is kept
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the widget; a pending reply still lands when delivered
    pub fn close(&mut self) {
        self.open = false;
    }

    fn handle(&mut self, event: Event) -> Result<Option<PendingReply>, TransitionError> {
        let result = transition(self.state, self.conversation.snapshot(), event)?;
        self.state = result.new_state;

        let mut pending = None;
        for effect in result.effects {
            match effect {
                Effect::AppendTurn(turn) => self.conversation.append(turn),
                Effect::RequestReply { history, message } => {
                    pending = Some(PendingReply {
                        session_id: self.session_id,
                        history,
                        message,
                        replies: self.replies.clone(),
                    });
                }
            }
        }
        Ok(pending)
    }

    /// Submit the visitor's input
    ///
    /// Returns `Ok(None)` for blank input, which changes nothing.
    pub fn submit(&mut self, input: &str) -> Result<Option<PendingReply>, TransitionError> {
        let pending = self.handle(Event::VisitorSubmitted {
            text: input.to_string(),
        });
        if let Err(e) = &pending {
            tracing::warn!(session = %self.session_id, error = %e, "Chat submission rejected");
        }
        pending
    }

    /// Append the assistant's reply for the outstanding request
    pub fn deliver(&mut self, reply: String) -> Result<(), TransitionError> {
        match self.handle(Event::ReplyArrived { text: reply }) {
            Ok(_) => {
                tracing::debug!(session = %self.session_id, turns = self.conversation.len(), "Reply delivered");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(session = %self.session_id, error = %e, "Ignoring reply");
                Err(e)
            }
        }
    }

    /// Give up on the outstanding reply
    ///
    /// The typing indicator goes away and the transcript is untouched. A
    /// result that still arrives afterwards is rejected by [`Self::deliver`].
    pub fn abandon_reply(&mut self) -> Result<(), TransitionError> {
        self.handle(Event::ReplyAbandoned)?;
        tracing::info!(session = %self.session_id, "Assistant reply abandoned");
        Ok(())
    }

    /// Submit, wait for the reply, and append it
    ///
    /// Returns the reply text, or `None` when the input was blank. Dropping
    /// the future before it completes abandons the reply.
    pub async fn send(&mut self, input: &str) -> Result<Option<String>, TransitionError> {
        let Some(pending) = self.submit(input)? else {
            return Ok(None);
        };
        let mut in_flight = InFlight {
            widget: self,
            settled: false,
        };
        let reply = pending.resolve().await;
        in_flight.settled = true;
        in_flight.widget.deliver(reply.clone())?;
        Ok(Some(reply))
    }
}
