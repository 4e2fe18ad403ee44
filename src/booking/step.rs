//! Wizard steps and the transition table between them

use std::fmt;

/// Where the applicant is in the booking flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BookingStep {
    #[default]
    Details,
    DateTime,
    Review,
    Success,
}

/// What the applicant asked the wizard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardAction {
    Next,
    Back,
    Submit,
    StartOver,
}

impl BookingStep {
    pub const ALL: [BookingStep; 4] = [Self::Details, Self::DateTime, Self::Review, Self::Success];

    /// Label in the progress indicator; the success screen has none
    pub fn progress_label(self) -> Option<&'static str> {
        match self {
            Self::Details => Some("Details"),
            Self::DateTime => Some("Date & Time"),
            Self::Review => Some("Confirm"),
            Self::Success => None,
        }
    }

    /// Position in the flow, starting at 0
    pub fn index(self) -> usize {
        match self {
            Self::Details => 0,
            Self::DateTime => 1,
            Self::Review => 2,
            Self::Success => 3,
        }
    }

    /// Whether the sidebar marks `milestone` as reached
    pub fn has_reached(self, milestone: BookingStep) -> bool {
        self.index() >= milestone.index()
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Details => "details",
            Self::DateTime => "date & time",
            Self::Review => "review",
            Self::Success => "success",
        })
    }
}

impl fmt::Display for WizardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Next => "continue",
            Self::Back => "go back",
            Self::Submit => "submit",
            Self::StartOver => "start over",
        })
    }
}

/// The transition table. `None` means the edge does not exist.
pub fn next_step(step: BookingStep, action: WizardAction) -> Option<BookingStep> {
    use BookingStep::{DateTime, Details, Review, Success};
    use WizardAction::{Back, Next, StartOver, Submit};

    match (step, action) {
        (Details, Next) => Some(DateTime),
        (DateTime, Next) => Some(Review),
        (DateTime, Back) => Some(Details),
        (Review, Back) => Some(DateTime),
        (Review, Submit) => Some(Success),
        (Success, StartOver) => Some(Details),
        _ => None,
    }
}
