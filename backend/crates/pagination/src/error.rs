//! Validation failures raised while building a [`crate::PageRequest`].

use thiserror::Error;

/// Errors returned when pagination parameters are malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// `page` is not a positive integer.
    #[error("page must be a positive integer, got `{value}`")]
    InvalidPage {
        /// Raw value supplied by the caller.
        value: String,
    },
    /// `limit` is not a positive integer.
    #[error("limit must be a positive integer, got `{value}`")]
    InvalidLimit {
        /// Raw value supplied by the caller.
        value: String,
    },
}

impl PaginationError {
    /// Name of the offending parameter, as it appears in query strings.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidPage { .. } => "page",
            Self::InvalidLimit { .. } => "limit",
        }
    }

    /// Stable machine-readable code for adapters that expose error details.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidPage { .. } => "invalid_page",
            Self::InvalidLimit { .. } => "invalid_limit",
        }
    }
}
