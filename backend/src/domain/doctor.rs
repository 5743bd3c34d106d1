//! Doctor records and listing filters.
//!
//! A doctor is created once and never changed afterwards. The record store
//! assigns the [`DoctorId`]; callers only ever supply a [`NewDoctor`].
//! Field contents are accepted as submitted: the add-doctor form checks for
//! blank names and out-of-range ratings, the server does not.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned identifier of a doctor record.
///
/// Serialised as a plain UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorId(Uuid);

impl DoctorId {
    /// Wrap an identifier read back from the store.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for DoctorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DoctorId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Fields submitted when registering a doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDoctor {
    /// Full name.
    pub name: String,
    /// Medical specialty, matched exactly by listing filters.
    pub specialty: String,
    /// Practice location, matched exactly by listing filters.
    pub location: String,
    /// Years of experience.
    pub experience: f64,
    /// Rating, expected on a 1–5 scale.
    pub rating: f64,
}

/// A persisted doctor record.
///
/// # Examples
/// ```
/// use doctor_directory::domain::{Doctor, DoctorId, NewDoctor};
///
/// let doctor = Doctor::new(
///     DoctorId::random(),
///     NewDoctor {
///         name: "A".to_owned(),
///         specialty: "Cardiology".to_owned(),
///         location: "NY".to_owned(),
///         experience: 5.0,
///         rating: 4.0,
///     },
/// );
/// assert_eq!(doctor.specialty(), "Cardiology");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    id: DoctorId,
    #[serde(flatten)]
    fields: NewDoctor,
}

impl Doctor {
    /// Pair submitted fields with the identifier the store assigned.
    #[must_use]
    pub fn new(id: DoctorId, fields: NewDoctor) -> Self {
        Self { id, fields }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> DoctorId {
        self.id
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields.name
    }

    /// Medical specialty.
    #[must_use]
    pub fn specialty(&self) -> &str {
        &self.fields.specialty
    }

    /// Practice location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.fields.location
    }

    /// Years of experience.
    #[must_use]
    pub fn experience(&self) -> f64 {
        self.fields.experience
    }

    /// Rating as submitted.
    #[must_use]
    pub fn rating(&self) -> f64 {
        self.fields.rating
    }

    /// Submitted fields without the identifier.
    #[must_use]
    pub fn fields(&self) -> &NewDoctor {
        &self.fields
    }
}

/// Exact-match constraints applied when listing doctors.
///
/// Empty values are treated as absent, so `?specialty=` lists every
/// specialty. Whitespace is a real value and must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorFilter {
    specialty: Option<String>,
    location: Option<String>,
}

impl DoctorFilter {
    /// Build a filter, discarding empty constraints.
    ///
    /// Other values are kept verbatim; matching is exact and
    /// case-sensitive.
    ///
    /// # Examples
    /// ```
    /// use doctor_directory::domain::DoctorFilter;
    ///
    /// let filter = DoctorFilter::new(Some("Cardiology".to_owned()), Some(String::new()));
    /// assert_eq!(filter.specialty(), Some("Cardiology"));
    /// assert_eq!(filter.location(), None);
    /// ```
    #[must_use]
    pub fn new(specialty: Option<String>, location: Option<String>) -> Self {
        Self {
            specialty: specialty.filter(|value| !value.is_empty()),
            location: location.filter(|value| !value.is_empty()),
        }
    }

    /// Required specialty, if constrained.
    #[must_use]
    pub fn specialty(&self) -> Option<&str> {
        self.specialty.as_deref()
    }

    /// Required location, if constrained.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Whether the doctor satisfies every supplied constraint.
    #[must_use]
    pub fn matches(&self, doctor: &Doctor) -> bool {
        self.specialty()
            .is_none_or(|specialty| doctor.specialty() == specialty)
            && self
                .location()
                .is_none_or(|location| doctor.location() == location)
    }
}
