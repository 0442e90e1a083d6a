pub mod config;
pub mod credential;
pub mod lookup;
pub mod opensubtitles;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, ApiConfig, Config, ConfigError,
    SearchConfig, DEFAULT_CONFIG_FILE,
};
pub use credential::{load_api_key, ApiKey, CredentialError};
pub use lookup::{
    build_search_query, select_best, LookupCallback, LookupError, LookupEvent, LookupOutcome,
    Selection, SubtitleLookup,
};
pub use opensubtitles::{
    ApiError, ContentType, DownloadLink, FileDescription, OpenSubtitlesClient, SearchQuery,
    SearchResponse, SourceType, Subtitle, SubtitleFile, SubtitleProvider,
};
