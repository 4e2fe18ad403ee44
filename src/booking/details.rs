//! Applicant contact details collected on the first step

use crate::profile::BusinessProfile;
use std::fmt;

/// Contact details and course choice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Offering id; empty until a course is picked
    pub course_id: String,
    pub notes: String,
}

/// A required field that is missing or malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailField {
    Name,
    Email,
    Phone,
    Course,
}

impl fmt::Display for DetailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "full name",
            Self::Email => "email address",
            Self::Phone => "phone number",
            Self::Course => "course of interest",
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.trim().contains(char::is_whitespace)
        }
        None => false,
    }
}

impl ApplicantDetails {
    /// Required fields that would block the applicant from continuing
    pub fn problems(&self, profile: &BusinessProfile) -> Vec<DetailField> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push(DetailField::Name);
        }
        if !looks_like_email(&self.email) {
            problems.push(DetailField::Email);
        }
        if self.phone.trim().is_empty() {
            problems.push(DetailField::Phone);
        }
        if profile.offering(&self.course_id).is_none() {
            problems.push(DetailField::Course);
        }
        problems
    }

    pub fn is_complete(&self, profile: &BusinessProfile) -> bool {
        self.problems(profile).is_empty()
    }
}
