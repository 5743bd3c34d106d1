//! Driving port for listing doctors with filters and pagination.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Doctor, DoctorFilter, Error};

/// Request for one page of doctors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDoctorsRequest {
    /// Exact-match constraints; empty means every doctor.
    pub filter: DoctorFilter,
    /// Page window; defaults to the first ten records.
    pub page: PageRequest,
}

/// One page of doctors plus the number of records matching the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ListDoctorsResponse {
    /// Matching doctors in this window together with the filtered total.
    pub page: Page<Doctor>,
}

/// Use-case port for listing doctors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorQuery: Send + Sync {
    /// List doctors matching the request filter within its page window.
    async fn list_doctors(&self, request: ListDoctorsRequest) -> Result<ListDoctorsResponse, Error>;
}
