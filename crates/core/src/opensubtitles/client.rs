//! OpenSubtitles API client.
//!
//! Every request carries the API key in the `Api-Key` header and, unless
//! disabled, as a bearer token too. Requests are issued one at a time and
//! never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::credential::ApiKey;

use super::types::{DownloadLink, DownloadRequest, FileDescription, SearchQuery, SearchResponse};
use super::{ApiError, SubtitleProvider};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("api-key");

/// Longest error body kept in an `ApiError::Status` message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// OpenSubtitles API client.
pub struct OpenSubtitlesClient {
    client: Client,
    base_url: String,
}

impl OpenSubtitlesClient {
    /// Create a new client.
    pub fn new(config: &ApiConfig, api_key: &ApiKey) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();

        let mut key_value = HeaderValue::from_str(api_key.expose()).map_err(|_| {
            ApiError::NotConfigured("API key contains characters not allowed in a header".to_string())
        })?;
        key_value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key_value);

        if config.bearer_auth {
            let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.expose()))
                .map_err(|_| {
                    ApiError::NotConfigured(
                        "API key contains characters not allowed in a header".to_string(),
                    )
                })?;
            bearer.set_sensitive(true);
            headers.insert(AUTHORIZATION, bearer);
        }

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers);

        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Check the status and decode a JSON body.
    async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, ApiError> {
        let status = response.status();
        if status == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            ApiError::Parse(format!("Failed to parse {} response: {}", what, e))
        })
    }
}

#[async_trait]
impl SubtitleProvider for OpenSubtitlesClient {
    fn name(&self) -> &str {
        "opensubtitles"
    }

    async fn guess_file(&self, filename: &str) -> Result<FileDescription, ApiError> {
        let url = self.endpoint("utilities/guessit");

        debug!("OpenSubtitles guessit: filename='{}'", filename);

        let response = self
            .client
            .get(&url)
            .query(&[("filename", filename)])
            .send()
            .await?;

        Self::read_json(response, "guessit").await
    }

    async fn search_subtitles(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
        let url = self.endpoint("subtitles");
        let params = query.to_params();

        debug!(
            "OpenSubtitles search: type={}, params={:?}",
            query.content_type().as_str(),
            params
        );

        let response = self.client.get(&url).query(&params).send().await?;

        let result: SearchResponse = Self::read_json(response, "subtitle search").await?;

        debug!(
            total_count = result.total_count,
            returned = result.data.len(),
            "OpenSubtitles search complete"
        );

        Ok(result)
    }

    async fn request_download(&self, file_id: u64) -> Result<DownloadLink, ApiError> {
        let url = self.endpoint("download");

        debug!("OpenSubtitles download: file_id={}", file_id);

        let response = self
            .client
            .post(&url)
            .json(&DownloadRequest { file_id })
            .send()
            .await?;

        Self::read_json(response, "download").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("test-key").unwrap()
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:9000/api/v1/".to_string(),
            ..Default::default()
        };
        let client = OpenSubtitlesClient::new(&config, &key()).unwrap();
        assert_eq!(
            client.endpoint("subtitles"),
            "http://localhost:9000/api/v1/subtitles"
        );
    }

    #[test]
    fn test_key_with_newline_inside_is_rejected() {
        // ApiKey trims the ends but keeps interior characters
        let key = ApiKey::new("abc\ndef").unwrap();
        let result = OpenSubtitlesClient::new(&ApiConfig::default(), &key);
        assert!(matches!(result, Err(ApiError::NotConfigured(_))));
    }

    #[test]
    fn test_client_name() {
        let client = OpenSubtitlesClient::new(&ApiConfig::default(), &key()).unwrap();
        assert_eq!(client.name(), "opensubtitles");
    }
}
