//! Heuristic subtitle selection.
//!
//! Candidates are filtered against what is known about the video file and the
//! survivors are ranked:
//! 1. Exactly one attached file (multi-CD packs cannot be matched reliably)
//! 2. Resolution tag present as a dot-delimited token (`.1080p.`)
//! 3. Release source tag present, when the file's source is known
//! 4. Non hearing-impaired beats hearing-impaired, then more downloads wins;
//!    on a full tie the earlier candidate stays

use tracing::debug;

use crate::opensubtitles::{FileDescription, SourceType, Subtitle, SubtitleFile};

/// Why a candidate was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Not exactly one attached file.
    FileCount(usize),
    /// File name lacks the resolution token.
    Resolution,
    /// File name lacks any tag for the file's release source.
    Source(SourceType),
}

/// The chosen subtitle and its single file.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub subtitle: &'a Subtitle,
    pub file: &'a SubtitleFile,
}

impl Selection<'_> {
    /// One line summary: file name, `(HI)` marker, download count.
    pub fn summary(&self) -> String {
        summary_line(
            &self.file.file_name,
            self.subtitle.hearing_impaired(),
            self.subtitle.download_count(),
        )
    }
}

/// Format `<file name> [(HI) ](x<downloads>)`.
pub fn summary_line(file_name: &str, hearing_impaired: bool, download_count: u64) -> String {
    let hi = if hearing_impaired { "(HI) " } else { "" };
    format!("{} {}(x{})", file_name, hi, download_count)
}

/// Run the filters on a single candidate, returning its file if it passes.
pub fn check_candidate<'a>(
    file: &FileDescription,
    subtitle: &'a Subtitle,
) -> Result<&'a SubtitleFile, Rejection> {
    let sub_file = subtitle
        .sole_file()
        .ok_or(Rejection::FileCount(subtitle.attributes.files.len()))?;

    let name = sub_file.file_name.to_lowercase();

    if let Some(resolution) = file.screen_size.as_deref() {
        if !has_resolution_token(&name, resolution) {
            return Err(Rejection::Resolution);
        }
    }

    let source = file.source_type();
    let tags = source.release_tags();
    if !tags.is_empty() && !tags.iter().any(|tag| name.contains(tag)) {
        return Err(Rejection::Source(source));
    }

    Ok(sub_file)
}

/// Whether `name` (already lowercased) carries `.<resolution>.`.
/// A blank resolution matches everything.
fn has_resolution_token(name: &str, resolution: &str) -> bool {
    let resolution = resolution.trim().to_lowercase();
    if resolution.is_empty() {
        return true;
    }
    name.contains(&format!(".{}.", resolution))
}

/// Whether `challenger` should replace `best`.
fn is_better(best: &Subtitle, challenger: &Subtitle) -> bool {
    if best.hearing_impaired() != challenger.hearing_impaired() {
        return best.hearing_impaired();
    }
    challenger.download_count() > best.download_count()
}

/// Pick the best candidate, or `None` when every candidate is filtered out.
pub fn select_best<'a>(file: &FileDescription, candidates: &'a [Subtitle]) -> Option<Selection<'a>> {
    let mut best: Option<Selection<'a>> = None;

    for subtitle in candidates {
        let sub_file = match check_candidate(file, subtitle) {
            Ok(f) => f,
            Err(reason) => {
                debug!(subtitle_id = %subtitle.id, ?reason, "Skipping subtitle");
                continue;
            }
        };

        let replace = match &best {
            None => true,
            Some(current) => is_better(current.subtitle, subtitle),
        };

        if replace {
            best = Some(Selection {
                subtitle,
                file: sub_file,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{self, episode_description, movie_description, subtitle};

    #[test]
    fn test_source_filter_excludes_other_release() {
        let file = episode_description(3, 12, "Blu-Ray", "1080p");
        let candidates = vec![
            subtitle(1, "Show.S03E12.1080p.BluRay.x264.mkv", 100, false),
            subtitle(2, "Show.S03E12.1080p.WEBRip.x264.mkv", 500, false),
        ];

        let best = select_best(&file, &candidates).unwrap();
        assert_eq!(best.file.file_id, 1);
        assert_eq!(
            check_candidate(&file, &candidates[1]),
            Err(Rejection::Source(SourceType::BluRay))
        );
    }

    #[test]
    fn test_more_downloads_wins() {
        let file = episode_description(1, 2, "WEB-DL", "720p");
        let candidates = vec![
            subtitle(1, "Show.S01E02.720p.WEB-DL.mkv", 50, false),
            subtitle(2, "Show.S01E02.720p.WEBDL.mkv", 200, false),
        ];

        let best = select_best(&file, &candidates).unwrap();
        assert_eq!(best.file.file_id, 2);
    }

    #[test]
    fn test_equal_downloads_first_seen_wins() {
        let file = movie_description("HDTV", "720p");
        let candidates = vec![
            subtitle(1, "Movie.2020.720p.HDTV.x264", 300, false),
            subtitle(2, "Movie.2020.720p.hdtv.x265", 300, false),
        ];

        assert_eq!(select_best(&file, &candidates).unwrap().file.file_id, 1);

        let reversed: Vec<_> = candidates.into_iter().rev().collect();
        assert_eq!(select_best(&file, &reversed).unwrap().file.file_id, 2);
    }

    #[test]
    fn test_multi_file_candidate_never_selected() {
        let file = movie_description("Blu-Ray", "1080p");
        let candidates = vec![
            fixtures::multi_file_subtitle(
                1,
                &["Movie.1080p.BluRay.cd1", "Movie.1080p.BluRay.cd2"],
                10_000,
            ),
            subtitle(2, "Movie.1080p.BluRay.x264", 5, false),
        ];

        let best = select_best(&file, &candidates).unwrap();
        assert_eq!(best.subtitle.id, "2");
        assert_eq!(
            check_candidate(&file, &candidates[0]),
            Err(Rejection::FileCount(2))
        );
    }

    #[test]
    fn test_zero_files_rejected() {
        let file = movie_description("Blu-Ray", "1080p");
        let candidates = vec![fixtures::multi_file_subtitle(1, &[], 10)];

        assert_eq!(
            check_candidate(&file, &candidates[0]),
            Err(Rejection::FileCount(0))
        );
        assert!(select_best(&file, &candidates).is_none());
    }

    #[test]
    fn test_all_multi_file_yields_none() {
        let file = episode_description(3, 12, "Blu-Ray", "1080p");
        let candidates = vec![
            fixtures::multi_file_subtitle(1, &["a.1080p.bluray.1", "a.1080p.bluray.2"], 10),
            fixtures::multi_file_subtitle(2, &["b.1080p.bluray.1", "b.1080p.bluray.2"], 20),
        ];

        assert!(select_best(&file, &candidates).is_none());
    }

    #[test]
    fn test_resolution_requires_delimited_token() {
        let file = movie_description("Unknown", "1080p");
        let loose = subtitle(1, "Movie.10801080p.x264", 900, false);
        let glued = subtitle(2, "Movie1080p.x264", 900, false);
        let delimited = subtitle(3, "Movie.1080p.x264", 1, false);

        assert_eq!(check_candidate(&file, &loose), Err(Rejection::Resolution));
        assert_eq!(check_candidate(&file, &glued), Err(Rejection::Resolution));
        assert!(check_candidate(&file, &delimited).is_ok());

        let candidates = vec![loose, glued, delimited];
        assert_eq!(select_best(&file, &candidates).unwrap().file.file_id, 3);
    }

    #[test]
    fn test_resolution_match_is_case_insensitive() {
        let file = movie_description("Blu-Ray", "1080P");
        let candidate = subtitle(1, "MOVIE.1080p.BLU-RAY.X264", 1, false);
        assert!(check_candidate(&file, &candidate).is_ok());
    }

    #[test]
    fn test_missing_resolution_imposes_no_filter() {
        let mut file = movie_description("HDTV", "720p");
        file.screen_size = None;
        let candidate = subtitle(1, "Movie.hdtv.x264", 1, false);
        assert!(check_candidate(&file, &candidate).is_ok());
    }

    #[test]
    fn test_unknown_source_imposes_no_filter() {
        let file = movie_description("DVD", "480p");
        let candidate = subtitle(1, "Movie.480p.DVDRip.x264", 1, false);
        assert!(check_candidate(&file, &candidate).is_ok());
    }

    #[test]
    fn test_source_tags_need_dots() {
        let file = movie_description("WEBRip", "1080p");
        let accepted = [
            "Movie.1080p.WEBRip.x264",
            "Movie.1080p.web-rip.x264",
        ];
        let rejected = ["Movie.1080p.WEBRip-GROUP", "Movie.1080p.AMZNWEBRip.x264"];

        for name in accepted {
            assert!(check_candidate(&file, &subtitle(1, name, 1, false)).is_ok(), "{}", name);
        }
        for name in rejected {
            assert_eq!(
                check_candidate(&file, &subtitle(1, name, 1, false)),
                Err(Rejection::Source(SourceType::WebRip)),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_hearing_impaired_replaced_by_regular() {
        let file = movie_description("Blu-Ray", "1080p");
        let candidates = vec![
            subtitle(1, "Movie.1080p.BluRay.x264", 5_000, true),
            subtitle(2, "Movie.1080p.BluRay.x264", 10, false),
        ];

        let best = select_best(&file, &candidates).unwrap();
        assert_eq!(best.file.file_id, 2);
    }

    #[test]
    fn test_regular_not_replaced_by_popular_hearing_impaired() {
        let file = movie_description("Blu-Ray", "1080p");
        let candidates = vec![
            subtitle(1, "Movie.1080p.BluRay.x264", 10, false),
            subtitle(2, "Movie.1080p.BluRay.x264", 5_000, true),
        ];

        let best = select_best(&file, &candidates).unwrap();
        assert_eq!(best.file.file_id, 1);
    }

    #[test]
    fn test_hearing_impaired_chosen_only_when_alone() {
        let file = movie_description("Blu-Ray", "1080p");
        let candidates = vec![
            subtitle(1, "Movie.1080p.BluRay.x264", 10, true),
            subtitle(2, "Movie.1080p.BluRay.x264", 30, true),
            subtitle(3, "Movie.720p.BluRay.x264", 900, false),
        ];

        let best = select_best(&file, &candidates).unwrap();
        assert_eq!(best.file.file_id, 2);
        assert!(best.subtitle.hearing_impaired());
    }

    #[test]
    fn test_selection_independent_of_order_without_ties() {
        let file = episode_description(2, 5, "HDTV", "720p");
        let candidates = vec![
            subtitle(1, "Show.S02E05.720p.HDTV.x264", 40, true),
            subtitle(2, "Show.S02E05.720p.HDTV.x264", 15, false),
            subtitle(3, "Show.S02E05.720p.HDTV.x264", 75, false),
            subtitle(4, "Show.S02E05.720p.HDTV.x264", 60, false),
            subtitle(5, "Show.S02E05.1080p.HDTV.x264", 900, false),
        ];

        let forward = select_best(&file, &candidates).unwrap().file.file_id;

        let mut rotated = candidates.clone();
        rotated.rotate_left(2);
        let reversed: Vec<_> = candidates.iter().rev().cloned().collect();

        assert_eq!(forward, 3);
        assert_eq!(select_best(&file, &rotated).unwrap().file.file_id, 3);
        assert_eq!(select_best(&file, &reversed).unwrap().file.file_id, 3);
    }

    #[test]
    fn test_empty_candidates() {
        let file = movie_description("Blu-Ray", "1080p");
        assert!(select_best(&file, &[]).is_none());
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line("Show.S01E01.720p.HDTV", false, 12),
            "Show.S01E01.720p.HDTV (x12)"
        );
        assert_eq!(
            summary_line("Show.S01E01.720p.HDTV", true, 12),
            "Show.S01E01.720p.HDTV (HI) (x12)"
        );

        let file = movie_description("HDTV", "720p");
        let candidates = vec![subtitle(7, "Movie.720p.HDTV", 3, true)];
        let best = select_best(&file, &candidates).unwrap();
        assert_eq!(best.summary(), "Movie.720p.HDTV (HI) (x3)");
    }
}
