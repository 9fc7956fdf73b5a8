//! HTTP client for the icon web service.
//!
//! The service renders a glyph from a named font in a given colour:
//! `GET <base>/icon/<font>/<colour>/<name>` returns a PNG. Calls are
//! synchronous and blocking; the one retry-free request either yields image
//! bytes or a typed error the caller can degrade on.

use std::time::Duration;

use bundlekit_core::colour::Colour;
use thiserror::Error;
use ureq::Agent;

/// Default public icon server.
pub const DEFAULT_SERVER: &str = "http://icons.deanishe.net";

/// Environment variable overriding the icon server base URL (used by tests).
pub const SERVER_ENV: &str = "BUNDLEKIT_ICON_SERVER";

/// Request timeout for icon fetches.
const TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from fetching an icon.
#[derive(Debug, Error)]
pub enum IconError {
    /// The service answered with a non-success status (unknown glyph, etc.).
    #[error("icon service returned HTTP {status} for `{name}`")]
    Status {
        status: u16,
        /// The requested glyph name.
        name: String,
    },

    /// The service could not be reached or the body could not be read.
    #[error("failed to fetch icon from service: {0}")]
    Transport(#[from] ureq::Error),

    /// The cached icon file could not be written or inspected.
    #[error("icon cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for icon operations.
pub type Result<T> = std::result::Result<T, IconError>;

/// Blocking client for the icon service.
#[derive(Clone)]
pub struct IconClient {
    agent: Agent,
    base_url: String,
}

impl IconClient {
    /// Create a client for the given base URL (no trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(TIMEOUT))
            .build();
        Self {
            agent: config.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client for the server named in `BUNDLEKIT_ICON_SERVER`,
    /// falling back to the public default.
    pub fn from_env() -> Self {
        let base = std::env::var(SERVER_ENV).unwrap_or_else(|_| DEFAULT_SERVER.to_string());
        Self::new(base)
    }

    /// The URL a glyph would be fetched from.
    pub fn icon_url(&self, font: &str, name: &str, colour: &Colour) -> String {
        format!("{}/icon/{}/{}/{}", self.base_url, font, colour, name)
    }

    /// Fetch one glyph as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::Status`] for non-success responses and
    /// [`IconError::Transport`] for network failures.
    pub fn fetch(&self, font: &str, name: &str, colour: &Colour) -> Result<Vec<u8>> {
        let url = self.icon_url(font, name, colour);
        tracing::debug!(%url, "fetching icon");

        let mut response = self.agent.get(&url).call().map_err(|e| match e {
            ureq::Error::StatusCode(status) => IconError::Status {
                status,
                name: name.to_string(),
            },
            other => IconError::Transport(other),
        })?;

        let bytes = response.body_mut().read_to_vec()?;
        Ok(bytes)
    }
}

impl Default for IconClient {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER)
    }
}
