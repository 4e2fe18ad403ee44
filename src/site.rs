//! Site controller: which page is showing, the booking wizard, and the chat
//! widget once a visitor opens it.

use crate::assistant::ReplySource;
use crate::booking::{BookingError, BookingWizard};
use crate::chat::ChatWidget;
use crate::profile::BusinessProfile;
use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Anchor of the booking section on the home page
pub const BOOKING_ANCHOR: &str = "book";

/// Top-level pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Courses,
    Work,
    Academy,
}

impl View {
    pub const ALL: [View; 4] = [Self::Home, Self::Courses, Self::Work, Self::Academy];

    /// Label in the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Courses => "Courses",
            Self::Work => "Student Work",
            Self::Academy => "Academy",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the shell should do after a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub view: View,
    /// Section to scroll to; `None` means the top of the page
    pub anchor: Option<&'static str>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("No offering with id {0:?}")]
    UnknownOffering(String),
    #[error(transparent)]
    Booking(#[from] BookingError),
}

pub struct Site {
    profile: Arc<BusinessProfile>,
    view: View,
    booking: BookingWizard,
    chat: Option<ChatWidget>,
    replies: Arc<dyn ReplySource>,
}

impl Site {
    /// Site on the home page with bookings offered from tomorrow
    pub fn new(profile: Arc<BusinessProfile>, replies: Arc<dyn ReplySource>) -> Self {
        let booking = BookingWizard::starting_today(profile.clone());
        Self::with_booking(profile, replies, booking)
    }

    /// Site whose booking calendar starts the day after `today`
    pub fn with_today(
        profile: Arc<BusinessProfile>,
        replies: Arc<dyn ReplySource>,
        today: NaiveDate,
    ) -> Self {
        let booking = BookingWizard::new(profile.clone(), today);
        Self::with_booking(profile, replies, booking)
    }

    fn with_booking(
        profile: Arc<BusinessProfile>,
        replies: Arc<dyn ReplySource>,
        booking: BookingWizard,
    ) -> Self {
        Self {
            profile,
            view: View::Home,
            booking,
            chat: None,
            replies,
        }
    }

    pub fn profile(&self) -> &BusinessProfile {
        &self.profile
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn navigate(&mut self, view: View) -> Navigation {
        self.go(view, None)
    }

    pub fn navigate_to_section(&mut self, view: View, anchor: &'static str) -> Navigation {
        self.go(view, Some(anchor))
    }

    fn go(&mut self, view: View, anchor: Option<&'static str>) -> Navigation {
        if view != self.view {
            tracing::debug!(from = %self.view, to = %view, "Navigating");
        }
        self.view = view;
        Navigation { view, anchor }
    }

    /// The "Apply Now" call to action
    pub fn apply_now(&mut self) -> Navigation {
        self.navigate_to_section(View::Home, BOOKING_ANCHOR)
    }

    /// Apply for a specific course from its card
    pub fn select_offering(&mut self, id: &str) -> Result<Navigation, SiteError> {
        if self.profile.offering(id).is_none() {
            tracing::warn!(offering = id, "Unknown offering selected");
            return Err(SiteError::UnknownOffering(id.to_string()));
        }
        self.booking.preselect_course(id)?;
        Ok(self.apply_now())
    }

    pub fn booking(&self) -> &BookingWizard {
        &self.booking
    }

    pub fn booking_mut(&mut self) -> &mut BookingWizard {
        &mut self.booking
    }

    /// Show the chat widget, starting a session on first open
    pub fn open_chat(&mut self) -> &mut ChatWidget {
        let chat = self
            .chat
            .get_or_insert_with(|| ChatWidget::new(&self.profile, self.replies.clone()));
        chat.open();
        chat
    }

    /// Hide the chat widget; its transcript is kept for the next open
    pub fn close_chat(&mut self) {
        if let Some(chat) = &mut self.chat {
            chat.close();
        }
    }

    pub fn is_chat_open(&self) -> bool {
        self.chat.as_ref().is_some_and(ChatWidget::is_open)
    }

    /// The chat session, if one was ever opened
    pub fn chat(&self) -> Option<&ChatWidget> {
        self.chat.as_ref()
    }

    pub fn chat_mut(&mut self) -> Option<&mut ChatWidget> {
        self.chat.as_mut()
    }
}
