//! Enrollment booking wizard
//!
//! A linear flow `details → date & time → review → success` with back
//! navigation. Submission is simulated: nothing leaves the process and no
//! record is kept.

mod details;
mod error;
mod schedule;
mod step;
mod wizard;

#[cfg(test)]
mod proptests;

pub use details::{ApplicantDetails, DetailField};
pub use error::BookingError;
pub use schedule::{format_interview_date, interview_dates, TimeSlot, WINDOW_DAYS};
pub use step::{next_step, BookingStep, WizardAction};
pub use wizard::{BookingConfirmation, BookingWizard, SUBMIT_DELAY};
