//! Search page state: filters, the backend window and client-side rating
//! filtering.
//!
//! Rating is never sent to the backend. The backend pages over specialty and
//! location only, and the page then drops doctors below the minimum rating,
//! so a page can show fewer than [`PAGE_LIMIT`] doctors while `total` still
//! counts every specialty/location match.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::client::{DoctorListing, DoctorRecord, ListQuery};

/// Doctors requested per page.
pub const PAGE_LIMIT: u32 = 10;

/// Query string accepted by `GET /doctor`.
///
/// Values arrive as text; anything unparsable falls back to "no filter" or
/// the first page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub specialty: Option<String>,
    pub location: Option<String>,
    pub rating: Option<String>,
    pub page: Option<String>,
}

/// Normalised search filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFilters {
    pub specialty: String,
    pub location: String,
    /// Raw minimum-rating selection, kept for re-rendering the dropdown.
    pub rating: String,
    #[serde(skip)]
    min_rating: Option<f64>,
    pub page: u32,
}

fn trimmed(value: Option<String>) -> String {
    value
        .map(|raw| raw.trim().to_owned())
        .unwrap_or_default()
}

impl From<SearchParams> for SearchFilters {
    fn from(params: SearchParams) -> Self {
        let rating = trimmed(params.rating);
        let min_rating = rating
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite());
        let page = params
            .page
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);
        Self {
            specialty: trimmed(params.specialty),
            location: trimmed(params.location),
            rating: if min_rating.is_some() {
                rating
            } else {
                String::new()
            },
            min_rating,
            page,
        }
    }
}

impl SearchFilters {
    /// Minimum rating selected, if any.
    pub fn min_rating(&self) -> Option<f64> {
        self.min_rating
    }

    /// Backend query for the current filters and page.
    pub fn list_query(&self) -> ListQuery {
        let filter = |value: &str| (!value.is_empty()).then(|| value.to_owned());
        ListQuery {
            specialty: filter(&self.specialty),
            location: filter(&self.location),
            page: self.page,
            limit: PAGE_LIMIT,
        }
    }

    /// Keep doctors rated at or above the minimum.
    pub fn apply_rating(&self, doctors: Vec<DoctorRecord>) -> Vec<DoctorRecord> {
        match self.min_rating {
            Some(min) => doctors
                .into_iter()
                .filter(|doctor| doctor.rating >= min)
                .collect(),
            None => doctors,
        }
    }

    /// Link to `page` with the current filters preserved.
    pub fn page_href(&self, page: u32) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in [
            ("specialty", self.specialty.as_str()),
            ("location", self.location.as_str()),
            ("rating", self.rating.as_str()),
        ] {
            if !value.is_empty() {
                query.append_pair(key, value);
            }
        }
        query.append_pair("page", &page.to_string());
        format!("/doctor?{}", query.finish())
    }
}

/// What the search page shows after a successful backend call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub doctors: Vec<DoctorRecord>,
    /// Backend total for specialty/location, unaffected by rating.
    pub total: u64,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
}

impl SearchResults {
    /// Apply the rating filter to a backend page and derive pagination links.
    ///
    /// Previous is available past page one; Next only when a full page of
    /// doctors is shown.
    pub fn from_listing(filters: &SearchFilters, listing: DoctorListing) -> Self {
        let doctors = filters.apply_rating(listing.doctors);
        let full_page = u32::try_from(doctors.len()).map_or(true, |shown| shown >= PAGE_LIMIT);
        Self {
            previous_href: (filters.page > 1).then(|| filters.page_href(filters.page - 1)),
            next_href: full_page.then(|| filters.page_href(filters.page.saturating_add(1))),
            doctors,
            total: listing.total,
        }
    }
}
