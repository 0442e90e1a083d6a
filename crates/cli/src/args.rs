use std::path::{Path, PathBuf};

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "legendary")]
#[command(about = "Find the best matching subtitle for a video file on OpenSubtitles")]
#[command(version)]
pub struct Cli {
    /// Video file to find subtitles for (only the file name is sent)
    pub filename: String,

    /// Configuration file (default: ./legendary.toml if present)
    #[arg(short, long, value_name = "PATH", env = "LEGENDARY_CONFIG")]
    pub config: Option<PathBuf>,

    /// File holding the OpenSubtitles API key (overrides api.key_file)
    #[arg(long, value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    /// Stop after choosing a subtitle, without requesting a download link
    #[arg(long)]
    pub no_download: bool,

    /// Log requests and rejected candidates to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Name used for identification and search: the last path component of
    /// the argument, or the argument itself when it has none.
    pub fn lookup_name(&self) -> &str {
        Path::new(&self.filename)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.filename)
    }
}
