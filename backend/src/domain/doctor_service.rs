//! Doctor directory services.
//!
//! [`DoctorCommandService`] is the write side and [`DoctorQueryService`] the
//! read side; both sit on a [`DoctorRepository`]. Store failures are logged
//! with their cause and surfaced to callers as generic internal errors. There
//! is no retry.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;
use tracing::{debug, error};

use crate::domain::Error;
use crate::domain::ports::{
    AddDoctorRequest, AddDoctorResponse, DoctorCommand, DoctorQuery, DoctorRepository,
    DoctorRepositoryError, ListDoctorsRequest, ListDoctorsResponse,
};

/// Message returned when a doctor cannot be stored.
pub const ADD_DOCTOR_FAILED: &str = "Server error while adding doctor";
/// Message returned when doctors cannot be listed.
pub const LIST_DOCTORS_FAILED: &str = "Server error while listing doctors";

fn map_repository_error(error: DoctorRepositoryError, public_message: &'static str) -> Error {
    error!(%error, "doctor repository operation failed");
    Error::internal(public_message)
}

/// Write service persisting new doctors.
#[derive(Clone)]
pub struct DoctorCommandService<R> {
    doctor_repo: Arc<R>,
}

impl<R> DoctorCommandService<R> {
    /// Create a new command service over the doctor repository.
    pub fn new(doctor_repo: Arc<R>) -> Self {
        Self { doctor_repo }
    }
}

#[async_trait]
impl<R> DoctorCommand for DoctorCommandService<R>
where
    R: DoctorRepository,
{
    async fn add_doctor(&self, request: AddDoctorRequest) -> Result<AddDoctorResponse, Error> {
        let doctor = self
            .doctor_repo
            .insert(&request.doctor)
            .await
            .map_err(|err| map_repository_error(err, ADD_DOCTOR_FAILED))?;

        debug!(doctor_id = %doctor.id(), "doctor added");
        Ok(AddDoctorResponse { doctor })
    }
}

/// Query service translating filter and page parameters into store reads.
#[derive(Clone)]
pub struct DoctorQueryService<R> {
    doctor_repo: Arc<R>,
}

impl<R> DoctorQueryService<R> {
    /// Create a new query service over the doctor repository.
    pub fn new(doctor_repo: Arc<R>) -> Self {
        Self { doctor_repo }
    }
}

#[async_trait]
impl<R> DoctorQuery for DoctorQueryService<R>
where
    R: DoctorRepository,
{
    async fn list_doctors(&self, request: ListDoctorsRequest) -> Result<ListDoctorsResponse, Error> {
        let ListDoctorsRequest { filter, page } = request;

        let doctors = self
            .doctor_repo
            .find(&filter, page)
            .await
            .map_err(|err| map_repository_error(err, LIST_DOCTORS_FAILED))?;
        let total = self
            .doctor_repo
            .count(&filter)
            .await
            .map_err(|err| map_repository_error(err, LIST_DOCTORS_FAILED))?;

        debug!(
            page = page.page(),
            limit = page.limit(),
            returned = doctors.len(),
            total,
            "doctors listed"
        );
        Ok(ListDoctorsResponse {
            page: Page::new(doctors, total),
        })
    }
}

#[cfg(test)]
#[path = "doctor_service_tests.rs"]
mod tests;
