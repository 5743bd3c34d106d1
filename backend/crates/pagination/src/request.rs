//! Validated page/limit window.

use serde::{Deserialize, Serialize};

use crate::PaginationError;

/// Page served when the caller does not ask for one.
pub const DEFAULT_PAGE: u32 = 1;
/// Window size used when the caller does not supply a limit.
pub const DEFAULT_LIMIT: u32 = 10;

/// One-based page number plus window size.
///
/// ## Invariants
/// - `page >= 1`
/// - `limit >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest", into = "RawPageRequest")]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build a request from already-numeric parameters.
    ///
    /// # Errors
    /// Returns [`PaginationError`] when `page` or `limit` is zero.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let request = PageRequest::new(3, 20).expect("valid window");
    /// assert_eq!(request.offset(), 40);
    /// ```
    pub fn new(page: u32, limit: u32) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::InvalidPage {
                value: page.to_string(),
            });
        }
        if limit == 0 {
            return Err(PaginationError::InvalidLimit {
                value: limit.to_string(),
            });
        }
        Ok(Self { page, limit })
    }

    /// Build a request from raw query-string values.
    ///
    /// Missing or blank values fall back to [`DEFAULT_PAGE`] and
    /// [`DEFAULT_LIMIT`]. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`PaginationError`] when a value is not a positive integer.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, PaginationError};
    ///
    /// let defaults = PageRequest::parse(None, Some("")).expect("defaults apply");
    /// assert_eq!((defaults.page(), defaults.limit()), (1, 10));
    ///
    /// let err = PageRequest::parse(Some("zero"), None).expect_err("not numeric");
    /// assert!(matches!(err, PaginationError::InvalidPage { .. }));
    /// ```
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, PaginationError> {
        let page = parse_component(page, DEFAULT_PAGE, |value| PaginationError::InvalidPage {
            value,
        })?;
        let limit = parse_component(limit, DEFAULT_LIMIT, |value| {
            PaginationError::InvalidLimit { value }
        })?;
        Self::new(page, limit)
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of records in the window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of records skipped before the window starts.
    ///
    /// Computed in 64 bits so the largest page numbers cannot overflow.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

fn parse_component(
    raw: Option<&str>,
    default: u32,
    invalid: impl FnOnce(String) -> PaginationError,
) -> Result<u32, PaginationError> {
    let Some(trimmed) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(default);
    };
    trimmed
        .parse::<u32>()
        .map_err(|_| invalid(trimmed.to_owned()))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPageRequest {
    page: u32,
    limit: u32,
}

impl From<PageRequest> for RawPageRequest {
    fn from(value: PageRequest) -> Self {
        Self {
            page: value.page,
            limit: value.limit,
        }
    }
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = PaginationError;

    fn try_from(value: RawPageRequest) -> Result<Self, Self::Error> {
        Self::new(value.page, value.limit)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for page/limit parsing and offsets.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_is_first_page_of_ten() {
        let request = PageRequest::default();
        assert_eq!(request.page(), DEFAULT_PAGE);
        assert_eq!(request.limit(), DEFAULT_LIMIT);
        assert_eq!(request.offset(), 0);
    }

    #[rstest]
    #[case(None, None, 1, 10)]
    #[case(Some("2"), None, 2, 10)]
    #[case(None, Some("25"), 1, 25)]
    #[case(None, Some("150"), 1, 150)]
    #[case(None, Some("4294967295"), 1, u32::MAX)]
    #[case(Some(" 3 "), Some("5"), 3, 5)]
    #[case(Some(""), Some("   "), 1, 10)]
    fn parse_applies_defaults_and_trims(
        #[case] page: Option<&str>,
        #[case] limit: Option<&str>,
        #[case] expected_page: u32,
        #[case] expected_limit: u32,
    ) {
        let request = PageRequest::parse(page, limit).expect("valid parameters");
        assert_eq!(request.page(), expected_page);
        assert_eq!(request.limit(), expected_limit);
    }

    #[rstest]
    #[case(Some("0"), None, "invalid_page")]
    #[case(Some("-1"), None, "invalid_page")]
    #[case(Some("1.5"), None, "invalid_page")]
    #[case(None, Some("0"), "invalid_limit")]
    #[case(None, Some("ten"), "invalid_limit")]
    fn parse_rejects_malformed_values(
        #[case] page: Option<&str>,
        #[case] limit: Option<&str>,
        #[case] code: &str,
    ) {
        let error = PageRequest::parse(page, limit).expect_err("invalid parameters");
        assert_eq!(error.code(), code);
    }

    #[rstest]
    #[case(1, 10, 0)]
    #[case(2, 10, 10)]
    #[case(5, 3, 12)]
    #[case(u32::MAX, u32::MAX, (u64::from(u32::MAX) - 1) * u64::from(u32::MAX))]
    fn offset_skips_previous_pages(#[case] page: u32, #[case] limit: u32, #[case] offset: u64) {
        let request = PageRequest::new(page, limit).expect("valid window");
        assert_eq!(request.offset(), offset);
    }

    #[rstest]
    fn deserialisation_enforces_invariants() {
        let ok: PageRequest =
            serde_json::from_str(r#"{"page":2,"limit":10}"#).expect("valid request");
        assert_eq!(ok.offset(), 10);

        let err = serde_json::from_str::<PageRequest>(r#"{"page":0,"limit":10}"#);
        assert!(err.is_err());
    }
}
