//! Chat widget state machine
//!
//! Pure transitions over [`ChatState`] produce [`Effect`]s; the
//! [`ChatWidget`] applies them to the transcript and hands out the reply
//! request.

mod effect;
mod event;
mod state;
mod transition;
mod widget;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::ChatState;
pub use transition::{transition, TransitionError, TransitionResult};
pub use widget::{ChatView, ChatWidget, PendingReply};
