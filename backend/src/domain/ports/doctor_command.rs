//! Driving port for registering doctors.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Doctor, Error, NewDoctor};

/// Request to register a doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddDoctorRequest {
    /// Fields exactly as submitted.
    pub doctor: NewDoctor,
}

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddDoctorResponse {
    /// The stored record, including its assigned identifier.
    pub doctor: Doctor,
}

/// Use-case port for creating doctor records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorCommand: Send + Sync {
    /// Persist a new doctor.
    ///
    /// Store failures surface as [`crate::domain::ErrorCode::InternalError`]
    /// with a generic message.
    async fn add_doctor(&self, request: AddDoctorRequest) -> Result<AddDoctorResponse, Error>;
}
