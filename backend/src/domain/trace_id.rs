//! Per-request correlation identifier.
//!
//! The [`Trace`](crate::middleware::Trace) middleware puts a [`TraceId`] in
//! Tokio task-local storage for the lifetime of each request. Error
//! constructors and log statements read it from there. Task-locals do not
//! follow `tokio::spawn` or `spawn_blocking`; wrap such work in
//! [`TraceId::scope`] to carry the identifier along.

use std::fmt;
use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

/// Header carrying the trace identifier on requests and responses.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// UUID identifying one request across services and logs.
///
/// # Examples
/// ```
/// use doctor_directory::domain::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let upstream = TraceId::from_header_value("6f1c2a4e-8d8b-4e0a-9a3b-2f0f6b0f9c11")
///     .expect("UUID header");
/// let seen = TraceId::scope(upstream, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(upstream));
/// assert_eq!(TraceId::current(), None);
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Adopt an identifier sent by an upstream caller.
    ///
    /// Only UUIDs are accepted so arbitrary header text never reaches logs
    /// or response headers.
    #[must_use]
    pub fn from_header_value(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }

    /// Identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current identifier.
    pub async fn scope<F: Future>(trace_id: Self, fut: F) -> F::Output {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}
