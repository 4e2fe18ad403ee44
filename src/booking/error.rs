//! Booking wizard errors

use super::{BookingStep, DetailField, WizardAction};
use chrono::NaiveDate;
use thiserror::Error;

fn field_list(fields: &[DetailField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reasons the wizard refused a request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Cannot {action} from the {step} step")]
    InvalidTransition {
        step: BookingStep,
        action: WizardAction,
    },
    #[error("Please complete: {}", field_list(.0))]
    IncompleteDetails(Vec<DetailField>),
    #[error("Select both an interview date and a time")]
    ScheduleIncomplete,
    #[error("Dates and times are chosen on the date & time step, not the {0} step")]
    NotScheduling(BookingStep),
    #[error("{0} is outside the booking window")]
    DateOutsideWindow(NaiveDate),
    #[error("Select a date before choosing a time")]
    NoDateSelected,
    #[error("Unknown course: {0}")]
    UnknownCourse(String),
}
