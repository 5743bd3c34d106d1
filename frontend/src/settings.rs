//! Frontend configuration loaded via OrthoConfig.
//!
//! Values come from `FRONTEND_*` environment variables or the matching
//! command-line flags.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
const DEFAULT_PORT: u16 = 3000;

/// Errors raised while interpreting frontend settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `FRONTEND_BACKEND_URL` does not parse as an absolute URL.
    #[error("invalid backend URL `{url}`: {source}")]
    InvalidBackendUrl {
        /// Offending value.
        url: String,
        /// Parser failure.
        source: url::ParseError,
    },
}

/// Runtime settings for the `doctors-listing` web process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FRONTEND")]
pub struct FrontendSettings {
    /// Base URL of the doctor directory API.
    pub backend_url: Option<String>,
    /// Port the pages are served on.
    pub port: Option<u16>,
}

impl FrontendSettings {
    /// Return the listening port, falling back to 3000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Parse the backend base URL, falling back to `http://localhost:5000`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBackendUrl`] when the configured value
    /// is not an absolute URL.
    pub fn backend_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .backend_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL);
        Url::parse(raw).map_err(|source| SettingsError::InvalidBackendUrl {
            url: raw.to_owned(),
            source,
        })
    }
}
