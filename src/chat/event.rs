//! Events that drive the chat widget

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The visitor pressed send (or Enter) with the current input
    VisitorSubmitted { text: String },
    /// The assistant's reply came back, fallback strings included
    ReplyArrived { text: String },
    /// The reply request was dropped or cancelled before it resolved
    ReplyAbandoned,
}
