//! Add-doctor form parsing and validation.
//!
//! Validation runs before any backend call; a form with field errors never
//! leaves this process.

use serde::{Deserialize, Serialize};

use crate::client::DoctorSubmission;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const SPECIALTY_REQUIRED: &str = "Specialty is required.";
pub const LOCATION_REQUIRED: &str = "Location is required.";
pub const EXPERIENCE_INVALID: &str = "Must be a valid number.";
pub const RATING_OUT_OF_RANGE: &str = "Rating must be between 1 and 5.";

/// Raw form fields as submitted by the browser.
///
/// Missing fields deserialize as empty strings so validation can report them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorForm {
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub experience: String,
    pub rating: String,
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub specialty: Option<&'static str>,
    pub location: Option<&'static str>,
    pub experience: Option<&'static str>,
    pub rating: Option<&'static str>,
}

impl FieldErrors {
    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

fn number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}

impl DoctorForm {
    /// Validate the form and convert it into a backend submission.
    ///
    /// Text fields must be non-blank and are forwarded as typed. Experience
    /// must be numeric; rating must be numeric and within one to five.
    ///
    /// # Errors
    ///
    /// Returns the collected [`FieldErrors`] when any field is invalid.
    pub fn validate(&self) -> Result<DoctorSubmission, FieldErrors> {
        let experience = number(&self.experience);
        let rating = number(&self.rating).filter(|value| (1.0..=5.0).contains(value));
        let errors = FieldErrors {
            name: required(&self.name, NAME_REQUIRED),
            specialty: required(&self.specialty, SPECIALTY_REQUIRED),
            location: required(&self.location, LOCATION_REQUIRED),
            experience: experience.is_none().then_some(EXPERIENCE_INVALID),
            rating: rating.is_none().then_some(RATING_OUT_OF_RANGE),
        };

        match (experience, rating) {
            (Some(experience), Some(rating)) if errors.is_empty() => Ok(DoctorSubmission {
                name: self.name.clone(),
                specialty: self.specialty.clone(),
                location: self.location.clone(),
                experience,
                rating,
            }),
            _ => Err(errors),
        }
    }
}
