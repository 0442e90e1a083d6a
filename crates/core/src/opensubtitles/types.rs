//! Types for OpenSubtitles API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// File identification (utilities/guessit)
// ============================================================================

/// What the API inferred about a video file from its name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileDescription {
    /// Show or movie title.
    #[serde(default)]
    pub title: String,
    /// Season number (episodes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    /// Episode number (episodes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
    /// Raw content type, `movie` or `episode` when recognised.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Release source label, e.g. `Blu-Ray` or `WEB-DL`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Resolution label, e.g. `1080p`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(rename = "mimetype", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl FileDescription {
    /// Parsed content type, `None` for anything unrecognised.
    pub fn content_type(&self) -> Option<ContentType> {
        ContentType::parse(&self.kind)
    }

    /// Parsed release source.
    pub fn source_type(&self) -> SourceType {
        self.source
            .as_deref()
            .map(SourceType::from_label)
            .unwrap_or(SourceType::Unknown)
    }
}

/// Kind of video content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Movie,
    Episode,
}

impl ContentType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "movie" => Some(Self::Movie),
            "episode" => Some(Self::Episode),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Episode => "episode",
        }
    }
}

/// Release source of a video, as labelled by the identification endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    BluRay,
    WebDl,
    WebRip,
    Hdtv,
    Unknown,
}

impl SourceType {
    /// Map an API label. Anything outside the known vocabulary is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Blu-Ray" => Self::BluRay,
            "WEB-DL" => Self::WebDl,
            "WEBRip" => Self::WebRip,
            "HDTV" => Self::Hdtv,
            _ => Self::Unknown,
        }
    }

    /// Lowercase, dot-delimited tags a subtitle file name must carry to match
    /// this source. Empty for `Unknown`.
    pub fn release_tags(&self) -> &'static [&'static str] {
        match self {
            Self::BluRay => &[".bluray.", ".blu-ray."],
            Self::WebDl => &[".web-dl.", ".webdl."],
            Self::WebRip => &[".webrip.", ".web-rip."],
            Self::Hdtv => &[".hdtv."],
            Self::Unknown => &[],
        }
    }
}

// ============================================================================
// Subtitle search (subtitles)
// ============================================================================

/// Query for the subtitle search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Movie {
        query: String,
        languages: String,
    },
    Episode {
        query: String,
        season: u32,
        episode: u32,
        languages: String,
    },
}

impl SearchQuery {
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Movie { .. } => ContentType::Movie,
            Self::Episode { .. } => ContentType::Episode,
        }
    }

    /// Query string parameters, in the order they are sent.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Movie { query, languages } => vec![
                ("type", ContentType::Movie.as_str().to_string()),
                ("query", query.clone()),
                ("languages", languages.clone()),
                ("trusted_sources", "only".to_string()),
            ],
            Self::Episode {
                query,
                season,
                episode,
                languages,
            } => vec![
                ("type", ContentType::Episode.as_str().to_string()),
                ("query", query.clone()),
                ("season_number", season.to_string()),
                ("episode_number", episode.to_string()),
                ("languages", languages.clone()),
                ("foreign_parts_only", "exclude".to_string()),
                ("trusted_sources", "only".to_string()),
            ],
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_pages: u32,
    /// Total matches across all pages.
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub data: Vec<Subtitle>,
}

/// A subtitle search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subtitle {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub attributes: SubtitleAttributes,
}

impl Subtitle {
    pub fn download_count(&self) -> u64 {
        self.attributes.download_count
    }

    pub fn hearing_impaired(&self) -> bool {
        self.attributes.hearing_impaired
    }

    /// The only attached file, if there is exactly one.
    pub fn sole_file(&self) -> Option<&SubtitleFile> {
        match self.attributes.files.as_slice() {
            [file] => Some(file),
            _ => None,
        }
    }
}

/// Attributes of a subtitle search result.
///
/// Only `download_count`, `hearing_impaired` and `files` drive selection; the
/// rest is carried along for reporting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubtitleAttributes {
    #[serde(default)]
    pub subtitle_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub new_download_count: u64,
    #[serde(default)]
    pub hearing_impaired: bool,
    #[serde(default)]
    pub hd: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
    #[serde(default)]
    pub votes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<f64>,
    #[serde(default)]
    pub from_trusted: bool,
    #[serde(default)]
    pub foreign_parts_only: bool,
    #[serde(default)]
    pub ai_translated: bool,
    #[serde(default)]
    pub machine_translated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<Uploader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_details: Option<FeatureDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub related_links: Vec<RelatedLink>,
    /// Files in this subtitle pack (more than one for multi-CD releases).
    #[serde(default)]
    pub files: Vec<SubtitleFile>,
}

/// A downloadable file belonging to a subtitle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubtitleFile {
    pub file_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cd_number: Option<u32>,
    #[serde(default)]
    pub file_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Uploader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelatedLink {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
}

// ============================================================================
// Download (download)
// ============================================================================

/// Body of a download link request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadRequest {
    pub file_id: u64,
}

/// A resolved download link plus the account's quota counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadLink {
    pub link: String,
    #[serde(default)]
    pub file_name: String,
    /// Downloads used in the current quota window.
    #[serde(default)]
    pub requests: u32,
    /// Downloads left in the current quota window.
    #[serde(default)]
    pub remaining: i64,
    #[serde(default)]
    pub message: String,
    /// Human readable time until the quota resets.
    #[serde(default)]
    pub reset_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_time_utc: Option<DateTime<Utc>>,
}
