//! OpenSubtitles REST API integration.
//!
//! Three endpoints are used: `utilities/guessit` to describe a video file from
//! its name, `subtitles` to search, and `download` to resolve a download link.

mod client;
mod types;

pub use client::OpenSubtitlesClient;
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the subtitle API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection or transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API key was rejected (401).
    #[error("API key rejected by the server (401 Unauthorized)")]
    Unauthorized,

    /// Any other non-2xx response.
    #[error("Request failed with status code {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Client could not be built from the given settings.
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for subtitle API backends.
#[async_trait]
pub trait SubtitleProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Infer title, episode numbers, source and resolution from a file name.
    async fn guess_file(&self, filename: &str) -> Result<FileDescription, ApiError>;

    /// Search subtitles. Only the first result page is fetched.
    async fn search_subtitles(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError>;

    /// Resolve a download link for a subtitle file.
    async fn request_download(&self, file_id: u64) -> Result<DownloadLink, ApiError>;
}
