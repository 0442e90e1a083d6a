//! Mock subtitle provider for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::opensubtitles::{
    ApiError, DownloadLink, FileDescription, SearchQuery, SearchResponse, SubtitleProvider,
};

/// API endpoint, used to target injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Guess,
    Search,
    Download,
}

/// A recorded call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Guess(String),
    Search(SearchQuery),
    Download(u64),
}

/// Mock implementation of the SubtitleProvider trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable responses per endpoint
/// - Track calls, in order, for assertions
/// - Fail the next call to an endpoint
///
/// Endpoints without a configured response answer with a 404 status error.
#[derive(Default)]
pub struct MockSubtitleProvider {
    file_description: Arc<RwLock<Option<FileDescription>>>,
    search_response: Arc<RwLock<Option<SearchResponse>>>,
    download_link: Arc<RwLock<Option<DownloadLink>>>,
    next_errors: Arc<RwLock<HashMap<Endpoint, ApiError>>>,
    calls: Arc<RwLock<Vec<RecordedCall>>>,
}

impl std::fmt::Debug for MockSubtitleProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSubtitleProvider")
            .field("file_description", &"<file_description>")
            .field("search_response", &"<search_response>")
            .field("download_link", &"<download_link>")
            .field("next_errors", &"<next_errors>")
            .field("calls", &"<calls>")
            .finish()
    }
}

impl MockSubtitleProvider {
    /// Create a new mock with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_file_description(&self, file: FileDescription) {
        *self.file_description.write().await = Some(file);
    }

    pub async fn set_search_response(&self, response: SearchResponse) {
        *self.search_response.write().await = Some(response);
    }

    pub async fn set_download_link(&self, link: DownloadLink) {
        *self.download_link.write().await = Some(link);
    }

    /// Make the next call to `endpoint` fail with `error`.
    pub async fn fail_next(&self, endpoint: Endpoint, error: ApiError) {
        self.next_errors.write().await.insert(endpoint, error);
    }

    /// All calls made so far, in order.
    pub async fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: RecordedCall) {
        self.calls.write().await.push(call);
    }

    async fn take_error(&self, endpoint: Endpoint) -> Option<ApiError> {
        self.next_errors.write().await.remove(&endpoint)
    }

    fn not_configured(endpoint: Endpoint) -> ApiError {
        ApiError::Status {
            status: 404,
            message: format!("no mock response configured for {:?}", endpoint),
        }
    }
}

#[async_trait]
impl SubtitleProvider for MockSubtitleProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn guess_file(&self, filename: &str) -> Result<FileDescription, ApiError> {
        self.record(RecordedCall::Guess(filename.to_string())).await;
        if let Some(error) = self.take_error(Endpoint::Guess).await {
            return Err(error);
        }
        self.file_description
            .read()
            .await
            .clone()
            .ok_or_else(|| Self::not_configured(Endpoint::Guess))
    }

    async fn search_subtitles(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
        self.record(RecordedCall::Search(query.clone())).await;
        if let Some(error) = self.take_error(Endpoint::Search).await {
            return Err(error);
        }
        self.search_response
            .read()
            .await
            .clone()
            .ok_or_else(|| Self::not_configured(Endpoint::Search))
    }

    async fn request_download(&self, file_id: u64) -> Result<DownloadLink, ApiError> {
        self.record(RecordedCall::Download(file_id)).await;
        if let Some(error) = self.take_error(Endpoint::Download).await {
            return Err(error);
        }
        self.download_link
            .read()
            .await
            .clone()
            .ok_or_else(|| Self::not_configured(Endpoint::Download))
    }
}
