//! Console output for lookup progress.

use legendary_core::LookupEvent;
use tracing::info;

/// Render an event as the lines printed to stdout. Steps that only matter
/// for diagnostics render nothing.
pub fn render_event(event: &LookupEvent) -> Vec<String> {
    match event {
        LookupEvent::Identified(file) => {
            info!(
                "Identified '{}' as {} (source: {}, resolution: {})",
                file.title,
                file.kind,
                file.source.as_deref().unwrap_or("unknown"),
                file.screen_size.as_deref().unwrap_or("unknown")
            );
            Vec::new()
        }
        LookupEvent::SearchCompleted { total_count, .. } => {
            vec![format!("Found {} subtitles.", total_count)]
        }
        LookupEvent::Selected { summary, .. } => vec![format!("Best subtitle: {}", summary)],
        LookupEvent::DownloadRequested { file_id } => {
            vec![format!("Download subtitle {}", file_id)]
        }
        LookupEvent::DownloadReady(link) => match serde_json::to_string_pretty(link) {
            Ok(json) => vec![json],
            Err(_) => vec![format!("{} ({} downloads remaining)", link.link, link.remaining)],
        },
    }
}

pub fn print_event(event: &LookupEvent) {
    for line in render_event(event) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legendary_core::testing::fixtures;

    #[test]
    fn test_search_count_line() {
        let lines = render_event(&LookupEvent::SearchCompleted {
            total_count: 17,
            returned: 17,
        });
        assert_eq!(lines, vec!["Found 17 subtitles."]);
    }

    #[test]
    fn test_selected_line() {
        let lines = render_event(&LookupEvent::Selected {
            subtitle_id: "1".to_string(),
            file_id: 1,
            summary: "Show.S01E01.720p.HDTV (HI) (x5)".to_string(),
        });
        assert_eq!(lines, vec!["Best subtitle: Show.S01E01.720p.HDTV (HI) (x5)"]);
    }

    #[test]
    fn test_download_ready_prints_json() {
        let link = fixtures::download_link("Show.srt");
        let lines = render_event(&LookupEvent::DownloadReady(link));

        assert_eq!(lines.len(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed["file_name"], "Show.srt");
        assert_eq!(parsed["remaining"], 99);
    }

    #[test]
    fn test_identified_prints_nothing() {
        let file = fixtures::movie_description("HDTV", "720p");
        assert!(render_event(&LookupEvent::Identified(file)).is_empty());
    }
}
