//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DoctorCommand, DoctorQuery, DoctorRepository};
use crate::domain::{DoctorCommandService, DoctorQueryService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Write side: registers doctors.
    pub doctors: Arc<dyn DoctorCommand>,
    /// Read side: lists doctors.
    pub doctors_query: Arc<dyn DoctorQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(doctors: Arc<dyn DoctorCommand>, doctors_query: Arc<dyn DoctorQuery>) -> Self {
        Self {
            doctors,
            doctors_query,
        }
    }

    /// Wire both services over one shared repository.
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: DoctorRepository + 'static,
    {
        Self::new(
            Arc::new(DoctorCommandService::new(Arc::clone(&repository))),
            Arc::new(DoctorQueryService::new(repository)),
        )
    }
}
