use crate::opensubtitles::{ContentType, FileDescription, SearchQuery};

use super::LookupError;

/// Build the search query for an identified file.
///
/// `filename` is sent verbatim as the free-text query. Episodes must carry
/// both a season and an episode number.
pub fn build_search_query(
    file: &FileDescription,
    filename: &str,
    languages: &str,
) -> Result<SearchQuery, LookupError> {
    match file.content_type() {
        Some(ContentType::Episode) => {
            let (Some(season), Some(episode)) = (file.season, file.episode) else {
                return Err(LookupError::MissingEpisodeNumber);
            };
            Ok(SearchQuery::Episode {
                query: filename.to_string(),
                season,
                episode,
                languages: languages.to_string(),
            })
        }
        Some(ContentType::Movie) => Ok(SearchQuery::Movie {
            query: filename.to_string(),
            languages: languages.to_string(),
        }),
        None => Err(LookupError::UnknownFileType(file.kind.clone())),
    }
}
