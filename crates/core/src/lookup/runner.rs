//! Lookup runner.
//!
//! Drives identify -> search -> select -> download against a
//! [`SubtitleProvider`], one request at a time. Progress is reported through
//! an optional callback so the caller decides how to present it.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::opensubtitles::{DownloadLink, FileDescription, SubtitleProvider, Subtitle};

use super::query::build_search_query;
use super::selector::select_best;
use super::LookupError;

/// Callback invoked for each lookup step that completes.
pub type LookupCallback = Arc<dyn Fn(&LookupEvent) + Send + Sync>;

/// Progress of a lookup.
#[derive(Debug, Clone)]
pub enum LookupEvent {
    /// The file was described by the identification endpoint.
    Identified(FileDescription),
    /// The search returned at least one candidate.
    SearchCompleted {
        /// Total matches reported by the API.
        total_count: u32,
        /// Candidates actually received.
        returned: usize,
    },
    /// A subtitle survived filtering and won the ranking.
    Selected {
        subtitle_id: String,
        file_id: u64,
        summary: String,
    },
    /// A download link is about to be requested.
    DownloadRequested { file_id: u64 },
    /// The download link was resolved.
    DownloadReady(DownloadLink),
}

/// Result of a successful lookup.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub file: FileDescription,
    pub subtitle: Subtitle,
    /// The single file of the chosen subtitle.
    pub file_id: u64,
    /// `None` when downloads are disabled.
    pub download: Option<DownloadLink>,
}

/// Runs a complete subtitle lookup for one file name.
pub struct SubtitleLookup {
    provider: Arc<dyn SubtitleProvider>,
    languages: String,
    download: bool,
    on_event: Option<LookupCallback>,
}

impl SubtitleLookup {
    pub fn new(provider: Arc<dyn SubtitleProvider>, search: &SearchConfig) -> Self {
        Self {
            provider,
            languages: search.languages.clone(),
            download: true,
            on_event: None,
        }
    }

    /// Enable or disable the final download link request (default: enabled).
    pub fn with_download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    pub fn with_event_callback(mut self, callback: LookupCallback) -> Self {
        self.on_event = Some(callback);
        self
    }

    fn emit(&self, event: LookupEvent) {
        if let Some(ref callback) = self.on_event {
            callback(&event);
        }
    }

    /// Look up the best subtitle for `filename`.
    pub async fn run(&self, filename: &str) -> Result<LookupOutcome, LookupError> {
        info!(
            filename,
            provider = self.provider.name(),
            "Identifying file"
        );
        let file = self
            .provider
            .guess_file(filename)
            .await
            .map_err(LookupError::Identify)?;
        debug!(
            title = %file.title,
            kind = %file.kind,
            source = ?file.source,
            screen_size = ?file.screen_size,
            "File identified"
        );
        self.emit(LookupEvent::Identified(file.clone()));

        let query = build_search_query(&file, filename, &self.languages)?;
        let response = self
            .provider
            .search_subtitles(&query)
            .await
            .map_err(LookupError::Search)?;

        if response.data.is_empty() {
            return Err(LookupError::NoSubtitlesFound);
        }

        info!(
            total_count = response.total_count,
            returned = response.data.len(),
            "Search returned candidates"
        );
        self.emit(LookupEvent::SearchCompleted {
            total_count: response.total_count,
            returned: response.data.len(),
        });

        let selection = select_best(&file, &response.data).ok_or(
            LookupError::NoMatchingSubtitles {
                candidates: response.data.len(),
            },
        )?;

        let file_id = selection.file.file_id;
        let subtitle = selection.subtitle.clone();
        info!(subtitle_id = %subtitle.id, file_id, "Selected subtitle");
        self.emit(LookupEvent::Selected {
            subtitle_id: subtitle.id.clone(),
            file_id,
            summary: selection.summary(),
        });

        let download = if self.download {
            self.emit(LookupEvent::DownloadRequested { file_id });
            let link = self
                .provider
                .request_download(file_id)
                .await
                .map_err(LookupError::Download)?;
            debug!(remaining = link.remaining, "Download link resolved");
            self.emit(LookupEvent::DownloadReady(link.clone()));
            Some(link)
        } else {
            None
        };

        Ok(LookupOutcome {
            file,
            subtitle,
            file_id,
            download,
        })
    }
}
