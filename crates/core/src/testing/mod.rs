//! Testing utilities and a mock subtitle provider.
//!
//! # Example
//!
//! ```rust,ignore
//! use legendary_core::testing::{fixtures, MockSubtitleProvider};
//!
//! let provider = MockSubtitleProvider::new();
//! provider
//!     .set_file_description(fixtures::episode_description(3, 12, "Blu-Ray", "1080p"))
//!     .await;
//! provider
//!     .set_search_response(fixtures::search_response(vec![
//!         fixtures::subtitle(1, "Show.S03E12.1080p.BluRay.x264", 100, false),
//!     ]))
//!     .await;
//! ```

mod mock_provider;

pub use mock_provider::{Endpoint, MockSubtitleProvider, RecordedCall};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::opensubtitles::{
        DownloadLink, FileDescription, SearchResponse, Subtitle, SubtitleAttributes, SubtitleFile,
    };

    /// Describe an episode with the given release source and resolution.
    pub fn episode_description(
        season: u32,
        episode: u32,
        source: &str,
        screen_size: &str,
    ) -> FileDescription {
        FileDescription {
            title: "Show".to_string(),
            season: Some(season),
            episode: Some(episode),
            kind: "episode".to_string(),
            source: Some(source.to_string()),
            screen_size: Some(screen_size.to_string()),
            video_codec: Some("H.264".to_string()),
            container: Some("mkv".to_string()),
            mime_type: Some("video/x-matroska".to_string()),
        }
    }

    /// Describe a movie with the given release source and resolution.
    pub fn movie_description(source: &str, screen_size: &str) -> FileDescription {
        FileDescription {
            title: "Movie".to_string(),
            season: None,
            episode: None,
            kind: "movie".to_string(),
            source: Some(source.to_string()),
            screen_size: Some(screen_size.to_string()),
            video_codec: Some("H.264".to_string()),
            container: Some("mkv".to_string()),
            mime_type: Some("video/x-matroska".to_string()),
        }
    }

    /// A subtitle with a single file. `id` doubles as subtitle and file id.
    pub fn subtitle(id: u64, file_name: &str, download_count: u64, hearing_impaired: bool) -> Subtitle {
        Subtitle {
            id: id.to_string(),
            kind: "subtitle".to_string(),
            attributes: SubtitleAttributes {
                subtitle_id: id.to_string(),
                language: Some("en".to_string()),
                download_count,
                hearing_impaired,
                from_trusted: true,
                files: vec![SubtitleFile {
                    file_id: id,
                    cd_number: Some(1),
                    file_name: file_name.to_string(),
                }],
                ..Default::default()
            },
        }
    }

    /// A subtitle pack with one file per name, numbered `id * 100 + cd`.
    pub fn multi_file_subtitle(id: u64, file_names: &[&str], download_count: u64) -> Subtitle {
        let mut sub = subtitle(id, "", download_count, false);
        sub.attributes.files = file_names
            .iter()
            .enumerate()
            .map(|(i, name)| SubtitleFile {
                file_id: id * 100 + i as u64 + 1,
                cd_number: Some(i as u32 + 1),
                file_name: name.to_string(),
            })
            .collect();
        sub
    }

    /// Wrap candidates in a single-page search response.
    pub fn search_response(data: Vec<Subtitle>) -> SearchResponse {
        SearchResponse {
            total_pages: 1,
            total_count: data.len() as u32,
            per_page: 60,
            page: 1,
            data,
        }
    }

    /// A download link for `file_name` with a fresh quota.
    pub fn download_link(file_name: &str) -> DownloadLink {
        DownloadLink {
            link: format!("https://www.opensubtitles.com/download/mock/{}", file_name),
            file_name: file_name.to_string(),
            requests: 1,
            remaining: 99,
            message: String::new(),
            reset_time: "23 hours and 59 minutes".to_string(),
            reset_time_utc: None,
        }
    }
}
