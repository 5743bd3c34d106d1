//! Diesel and pool error mapping for the doctor repository.

use tracing::debug;

use crate::domain::ports::DoctorRepositoryError;

use super::pool::PoolError;

/// Map pool failures onto the repository connection variant.
pub(super) fn map_pool_error(error: PoolError) -> DoctorRepositoryError {
    match error {
        PoolError::Build(message) | PoolError::Checkout(message) => {
            DoctorRepositoryError::connection(message)
        }
    }
}

/// Map Diesel failures onto repository variants.
///
/// Closed connections become connection errors; everything else is a query
/// error. Database detail is logged at debug level only.
pub(super) fn map_diesel_error(error: diesel::result::Error) -> DoctorRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => DoctorRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => DoctorRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DoctorRepositoryError::connection("database connection error")
        }
        _ => DoctorRepositoryError::query("database error"),
    }
}
