//! Client for the doctor directory API.
//!
//! Pages depend on [`DirectoryClient`] so they can be exercised without a
//! running backend; [`HttpDirectoryClient`] is the reqwest adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

/// Header carrying the request correlation identifier to the backend.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Payload for `POST /add-doctor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorSubmission {
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub experience: f64,
    pub rating: f64,
}

/// Doctor record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub experience: f64,
    pub rating: f64,
}

/// Body of `GET /list-doctor-with-filter`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorListing {
    pub doctors: Vec<DoctorRecord>,
    /// Records matching specialty and location across all pages.
    pub total: u64,
}

/// Filter and window sent to the list endpoint. Empty filters are omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub specialty: Option<String>,
    pub location: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl ListQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(specialty) = &self.specialty {
            pairs.push(("specialty", specialty.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

/// Failures talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The endpoint URL could not be derived from the base URL.
    #[error("invalid backend endpoint `{path}`: {source}")]
    Endpoint {
        path: &'static str,
        source: url::ParseError,
    },
    /// Connection, DNS or TLS failure.
    #[error("backend transport failed: {0}")]
    Transport(String),
    /// The request did not finish within the client timeout.
    #[error("backend request timed out: {0}")]
    Timeout(String),
    /// The backend answered with a non-success status.
    #[error("backend returned status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body was not the expected JSON shape.
    #[error("backend response could not be decoded: {0}")]
    Decode(String),
}

/// Port the pages use to reach the doctor directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Register a doctor and return the stored record.
    async fn add_doctor(&self, doctor: &DoctorSubmission) -> Result<DoctorRecord, BackendError>;

    /// Fetch one page of doctors matching the query.
    async fn list_doctors(&self, query: &ListQuery) -> Result<DoctorListing, BackendError>;
}

/// Reqwest-backed [`DirectoryClient`].
pub struct HttpDirectoryClient {
    client: Client,
    base: Url,
}

impl HttpDirectoryClient {
    /// Build a client for `base` with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: with_trailing_slash(base),
        })
    }

    fn endpoint(&self, path: &'static str) -> Result<Url, BackendError> {
        self.base
            .join(path)
            .map_err(|source| BackendError::Endpoint { path, source })
    }
}

/// `Url::join` replaces the last segment unless the base ends with `/`.
fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn add_doctor(&self, doctor: &DoctorSubmission) -> Result<DoctorRecord, BackendError> {
        let trace_id = Uuid::new_v4();
        debug!(%trace_id, "registering doctor with backend");
        let response = self
            .client
            .post(self.endpoint("add-doctor")?)
            .header(TRACE_ID_HEADER, trace_id.to_string())
            .json(doctor)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(response, trace_id).await
    }

    async fn list_doctors(&self, query: &ListQuery) -> Result<DoctorListing, BackendError> {
        let trace_id = Uuid::new_v4();
        debug!(%trace_id, page = query.page, "listing doctors from backend");
        let response = self
            .client
            .get(self.endpoint("list-doctor-with-filter")?)
            .header(TRACE_ID_HEADER, trace_id.to_string())
            .query(&query.pairs())
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(response, trace_id).await
    }
}

async fn decode<T>(response: reqwest::Response, trace_id: Uuid) -> Result<T, BackendError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        let error = map_status_error(status, body.as_ref());
        warn!(%trace_id, %error, "backend call failed");
        return Err(error);
    }
    serde_json::from_slice(body.as_ref()).map_err(|error| BackendError::Decode(error.to_string()))
}

fn map_transport_error(error: reqwest::Error) -> BackendError {
    if error.is_timeout() {
        BackendError::Timeout(error.to_string())
    } else {
        BackendError::Transport(error.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn map_status_error(status: StatusCode, body: &[u8]) -> BackendError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .map(|parsed| parsed.error)
        .unwrap_or_else(|_| String::from_utf8_lossy(body).trim().to_owned());
    BackendError::Status {
        status: status.as_u16(),
        message,
    }
}
