//! Domain primitives, ports and services for the doctor directory.
//!
//! Public surface:
//! - Doctor, NewDoctor, DoctorId, DoctorFilter: the directory record and its
//!   query constraints.
//! - Error, ErrorCode: API error payload and stable identifiers.
//! - TraceId: per-request correlation identifier.
//! - DoctorCommandService, DoctorQueryService: use cases over a repository.

pub mod doctor;
pub mod doctor_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::doctor::{Doctor, DoctorFilter, DoctorId, NewDoctor};
pub use self::doctor_service::{
    ADD_DOCTOR_FAILED, DoctorCommandService, DoctorQueryService, LIST_DOCTORS_FAILED,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use doctor_directory::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such route"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
