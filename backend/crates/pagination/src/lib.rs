//! Page-number pagination primitives shared by doctor directory endpoints.
//!
//! Listing endpoints accept a one-based `page` and a `limit`, skip
//! `(page - 1) * limit` records, and return at most `limit` records together
//! with the total number of matches. This crate keeps that arithmetic and the
//! parameter validation in one place so adapters only translate between
//! transport shapes and [`PageRequest`] / [`Page`].
//!
//! # Examples
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::parse(Some("2"), Some("10")).expect("valid parameters");
//! assert_eq!(request.offset(), 10);
//!
//! let page = Page::new(vec!["eleventh"], 11);
//! assert_eq!(page.total(), 11);
//! ```

mod error;
mod page;
mod request;

pub use error::PaginationError;
pub use page::Page;
pub use request::{DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest};
