//! Interview calendar: a rolling two-week window and fixed daily slots

use chrono::{Days, NaiveDate, NaiveTime};
use std::fmt;

/// Number of days offered, starting tomorrow
pub const WINDOW_DAYS: u64 = 14;

/// Start hours of the daily interview slots
const SLOT_HOURS: [u32; 8] = [9, 10, 11, 13, 14, 15, 16, 17];

/// The days after `today` that can be booked
pub fn interview_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (1..=WINDOW_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .collect()
}

/// Long form used on the confirmation, e.g. `Monday, March 3`
pub fn format_interview_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// One of the fixed interview slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// All slots of a day, in order
    pub fn all() -> Vec<TimeSlot> {
        SLOT_HOURS
            .iter()
            .filter_map(|&hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .map(TimeSlot)
            .collect()
    }

    /// Look a slot up by its label, e.g. `01:00 PM`
    pub fn parse(label: &str) -> Option<TimeSlot> {
        Self::all().into_iter().find(|slot| slot.label() == label.trim())
    }

    pub fn time(self) -> NaiveTime {
        self.0
    }

    pub fn label(self) -> String {
        self.0.format("%I:%M %p").to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
