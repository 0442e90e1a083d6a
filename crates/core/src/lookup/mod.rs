//! Subtitle lookup: identify a file, search, pick the best subtitle, and
//! resolve its download link.

mod query;
mod runner;
mod selector;

pub use query::build_search_query;
pub use runner::{LookupCallback, LookupEvent, LookupOutcome, SubtitleLookup};
pub use selector::{check_candidate, select_best, summary_line, Rejection, Selection};

use thiserror::Error;

use crate::opensubtitles::ApiError;

/// Errors that end a lookup. None of them are retried.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Failed to identify file: {0}")]
    Identify(#[source] ApiError),

    #[error("Subtitle search failed: {0}")]
    Search(#[source] ApiError),

    #[error("Download link request failed: {0}")]
    Download(#[source] ApiError),

    #[error("Unknown file type: {0:?}")]
    UnknownFileType(String),

    #[error("File was identified as an episode but the season or episode number is missing")]
    MissingEpisodeNumber,

    #[error("No subtitles found.")]
    NoSubtitlesFound,

    #[error("No subtitles found matching the file's resolution and source ({candidates} candidates rejected)")]
    NoMatchingSubtitles { candidates: usize },
}
