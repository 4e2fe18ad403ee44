//! Business profile: the static description of the academy and its courses
//!
//! Loaded once when the site starts and shared read-only afterwards. It is
//! used to ground the admissions assistant and to populate the booking
//! form's course picker.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A purchasable course or program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display string, e.g. `$2,500`
    pub price: String,
    /// Display string, e.g. `4 Weeks`
    pub duration: String,
    /// Image URL
    pub image: String,
}

/// Static descriptive data about the business
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub industry: String,
    pub about: String,
    #[serde(alias = "services")]
    pub offerings: Vec<Offering>,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid business profile: {0}")]
    Parse(#[from] serde_json::Error),
}

impl BusinessProfile {
    /// Parse a profile from JSON
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find an offering by id
    pub fn offering(&self, id: &str) -> Option<&Offering> {
        self.offerings.iter().find(|o| o.id == id)
    }

    /// The Crown & Blade Academy profile the site ships with
    pub fn crown_and_blade() -> Self {
        Self {
            name: "Crown & Blade Academy".to_string(),
            industry: "Barber Academy".to_string(),
            about: "Crown & Blade Academy is the premier institution for barbering excellence. \
                    We combine old-school tradition with modern techniques to train the next \
                    generation of top-tier barbers."
                .to_string(),
            offerings: vec![
                Offering {
                    id: "1".to_string(),
                    title: "Barbering 101".to_string(),
                    description: "The foundation. Learn hygiene, tool handling, and basic cuts. \
                                  Perfect for beginners with zero experience."
                        .to_string(),
                    price: "$2,500".to_string(),
                    duration: "4 Weeks".to_string(),
                    image: "https://images.unsplash.com/photo-1585747860715-2ba37e788b70?w=800&auto=format&fit=crop&q=60".to_string(),
                },
                Offering {
                    id: "2".to_string(),
                    title: "Master Barber Certification".to_string(),
                    description: "Our comprehensive 6-month program covering fading, shaving, \
                                  business management, and state board prep."
                        .to_string(),
                    price: "$12,000".to_string(),
                    duration: "6 Months".to_string(),
                    image: "https://images.unsplash.com/photo-1621605815971-fbc98d665033?w=800&auto=format&fit=crop&q=60".to_string(),
                },
                Offering {
                    id: "3".to_string(),
                    title: "Advanced Fades & Designs".to_string(),
                    description: "A weekend intensive for licensed barbers looking to upskill \
                                  their fading techniques and portrait work."
                        .to_string(),
                    price: "$850".to_string(),
                    duration: "2 Days".to_string(),
                    image: "https://images.unsplash.com/photo-1593702295094-aea22597af65?w=800&auto=format&fit=crop&q=60".to_string(),
                },
            ],
        }
    }
}
