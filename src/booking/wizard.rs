//! Booking wizard state and operations

use super::schedule::{format_interview_date, interview_dates, TimeSlot};
use super::step::{next_step, BookingStep, WizardAction};
use super::{ApplicantDetails, BookingError};
use crate::profile::{BusinessProfile, Offering};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

/// How long the simulated submission takes
pub const SUBMIT_DELAY: Duration = Duration::from_secs(1);

/// Program title shown when the course cannot be resolved
const FALLBACK_PROGRAM: &str = "Barber Program";

/// Summary shown on the success screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub applicant_name: String,
    pub program_title: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
}

impl BookingConfirmation {
    pub fn interview_line(&self) -> String {
        format!(
            "Interview Requested: {} at {}",
            format_interview_date(self.date),
            self.time
        )
    }
}

/// Enrollment wizard for one visitor
#[derive(Debug, Clone)]
pub struct BookingWizard {
    profile: Arc<BusinessProfile>,
    step: BookingStep,
    details: ApplicantDetails,
    dates: Vec<NaiveDate>,
    selected_date: Option<NaiveDate>,
    selected_time: Option<TimeSlot>,
}

impl BookingWizard {
    /// Wizard offering the two weeks after `today`
    pub fn new(profile: Arc<BusinessProfile>, today: NaiveDate) -> Self {
        Self {
            profile,
            step: BookingStep::Details,
            details: ApplicantDetails::default(),
            dates: interview_dates(today),
            selected_date: None,
            selected_time: None,
        }
    }

    /// Wizard anchored on the local calendar date
    pub fn starting_today(profile: Arc<BusinessProfile>) -> Self {
        Self::new(profile, chrono::Local::now().date_naive())
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn details(&self) -> &ApplicantDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut ApplicantDetails {
        &mut self.details
    }

    pub fn available_dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn time_slots(&self) -> Vec<TimeSlot> {
        TimeSlot::all()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<TimeSlot> {
        self.selected_time
    }

    pub fn selected_offering(&self) -> Option<&Offering> {
        self.profile.offering(&self.details.course_id)
    }

    /// Prefill the course picker, e.g. from a course card's "Apply" button
    pub fn preselect_course(&mut self, course_id: &str) -> Result<(), BookingError> {
        if self.profile.offering(course_id).is_none() {
            return Err(BookingError::UnknownCourse(course_id.to_string()));
        }
        self.details.course_id = course_id.to_string();
        Ok(())
    }

    fn require_scheduling(&self) -> Result<(), BookingError> {
        if self.step == BookingStep::DateTime {
            Ok(())
        } else {
            Err(BookingError::NotScheduling(self.step))
        }
    }

    /// Pick an interview date; any previously chosen time is cleared
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), BookingError> {
        self.require_scheduling()?;
        if !self.dates.contains(&date) {
            return Err(BookingError::DateOutsideWindow(date));
        }
        self.selected_date = Some(date);
        self.selected_time = None;
        Ok(())
    }

    /// Pick a slot on the selected date
    pub fn select_time(&mut self, slot: TimeSlot) -> Result<(), BookingError> {
        self.require_scheduling()?;
        if self.selected_date.is_none() {
            return Err(BookingError::NoDateSelected);
        }
        self.selected_time = Some(slot);
        Ok(())
    }

    fn guard(&self) -> Result<(), BookingError> {
        match self.step {
            BookingStep::Details => {
                let problems = self.details.problems(&self.profile);
                if problems.is_empty() {
                    Ok(())
                } else {
                    Err(BookingError::IncompleteDetails(problems))
                }
            }
            BookingStep::DateTime => {
                if self.selected_date.is_some() && self.selected_time.is_some() {
                    Ok(())
                } else {
                    Err(BookingError::ScheduleIncomplete)
                }
            }
            BookingStep::Review | BookingStep::Success => Ok(()),
        }
    }

    /// Whether the "next" control is enabled on the current step
    pub fn can_advance(&self) -> bool {
        next_step(self.step, WizardAction::Next).is_some() && self.guard().is_ok()
    }

    fn apply(&mut self, action: WizardAction) -> Result<BookingStep, BookingError> {
        let to = next_step(self.step, action).ok_or(BookingError::InvalidTransition {
            step: self.step,
            action,
        })?;
        tracing::debug!(from = %self.step, to = %to, "Booking step changed");
        self.step = to;
        Ok(to)
    }

    pub fn next(&mut self) -> Result<BookingStep, BookingError> {
        if next_step(self.step, WizardAction::Next).is_some() {
            self.guard()?;
        }
        self.apply(WizardAction::Next)
    }

    /// Step back; everything entered so far is kept
    pub fn back(&mut self) -> Result<BookingStep, BookingError> {
        self.apply(WizardAction::Back)
    }

    /// Simulated submission: waits [`SUBMIT_DELAY`], then shows success
    pub async fn submit(&mut self) -> Result<BookingConfirmation, BookingError> {
        if next_step(self.step, WizardAction::Submit).is_none() {
            return Err(BookingError::InvalidTransition {
                step: self.step,
                action: WizardAction::Submit,
            });
        }
        let (Some(date), Some(time)) = (self.selected_date, self.selected_time) else {
            return Err(BookingError::ScheduleIncomplete);
        };

        tokio::time::sleep(SUBMIT_DELAY).await;
        self.apply(WizardAction::Submit)?;

        let confirmation = BookingConfirmation {
            applicant_name: self.details.name.trim().to_string(),
            program_title: self
                .selected_offering()
                .map_or_else(|| FALLBACK_PROGRAM.to_string(), |o| o.title.clone()),
            date,
            time,
        };
        tracing::info!(
            course = %confirmation.program_title,
            date = %confirmation.date,
            time = %confirmation.time,
            "Application submitted"
        );
        Ok(confirmation)
    }

    /// Begin another application; contact details and notes are kept
    pub fn start_over(&mut self) -> Result<BookingStep, BookingError> {
        let step = self.apply(WizardAction::StartOver)?;
        self.details.course_id.clear();
        self.selected_date = None;
        self.selected_time = None;
        Ok(step)
    }
}
