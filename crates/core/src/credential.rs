//! API key loading.
//!
//! The key lives in a plain text file next to the user's media tooling. It is
//! read once at startup and handed to the API client explicitly.

use std::fmt;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Errors raised while loading the API key.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Failed to read API key file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("API key file {0} is empty")]
    Empty(String),
}

/// An OpenSubtitles API key.
///
/// `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Build a key from raw text, trimming surrounding whitespace.
    /// Returns `None` when nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The key as sent on the wire.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Read and trim the API key stored at `path`.
pub fn load_api_key(path: &Path) -> Result<ApiKey, CredentialError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CredentialError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;

    let key = ApiKey::new(&raw).ok_or_else(|| CredentialError::Empty(path.display().to_string()))?;
    debug!(path = %path.display(), "Loaded API key");

    Ok(key)
}
