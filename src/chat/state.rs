//! Chat widget state

/// Whether the widget is waiting on the assistant
///
/// At most one reply is outstanding per widget, so replies are appended in
/// the order their requests were issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChatState {
    #[default]
    Idle,
    /// A reply has been requested and not yet delivered; the shell shows the
    /// typing indicator and disables the send control
    AwaitingReply,
}

impl ChatState {
    pub fn is_typing(self) -> bool {
        matches!(self, Self::AwaitingReply)
    }
}
