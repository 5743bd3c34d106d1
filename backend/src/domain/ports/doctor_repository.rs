//! Port for the doctor record store.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Doctor, DoctorFilter, NewDoctor};

/// Errors raised by doctor repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DoctorRepositoryError {
    /// No connection could be checked out or established.
    #[error("doctor repository connection failed: {message}")]
    Connection { message: String },
    /// An insert, select or count failed while executing.
    #[error("doctor repository query failed: {message}")]
    Query { message: String },
}

impl DoctorRepositoryError {
    /// Connection failure with a diagnostic message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Statement failure with a diagnostic message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for persisting doctors and reading filtered windows of them.
///
/// Adapters own identifier assignment and ordering. Listing order is
/// adapter-defined and callers must not rely on it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// Persist a new record and return it with its assigned identifier.
    async fn insert(&self, doctor: &NewDoctor) -> Result<Doctor, DoctorRepositoryError>;

    /// Return the records matching `filter` inside the `window`.
    async fn find(
        &self,
        filter: &DoctorFilter,
        window: PageRequest,
    ) -> Result<Vec<Doctor>, DoctorRepositoryError>;

    /// Count every record matching `filter`, ignoring pagination.
    async fn count(&self, filter: &DoctorFilter) -> Result<u64, DoctorRepositoryError>;
}
