mod args;
mod report;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use legendary_core::{
    load_api_key, load_config, validate_config, OpenSubtitlesClient, SubtitleLookup,
    SubtitleProvider,
};

use args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Initialize logging (stderr, so stdout only carries the report)
    let default_filter = if cli.verbose {
        "legendary=debug,legendary_core=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => load_config(Some(path.as_path()))
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => load_config(None).context("Failed to load configuration")?,
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("API base URL: {}", config.api.base_url);

    // Load API key
    let key_file = cli.key_file.as_ref().unwrap_or(&config.api.key_file);
    let api_key = load_api_key(key_file).context("Failed to load API key")?;

    let client: Arc<dyn SubtitleProvider> = Arc::new(
        OpenSubtitlesClient::new(&config.api, &api_key)
            .context("Failed to create OpenSubtitles client")?,
    );
    info!("Using subtitle provider: {}", client.name());

    let lookup = SubtitleLookup::new(client, &config.search)
        .with_download(!cli.no_download)
        .with_event_callback(Arc::new(report::print_event));

    let outcome = lookup.run(cli.lookup_name()).await?;
    debug!(
        subtitle_id = %outcome.subtitle.id,
        file_id = outcome.file_id,
        "Lookup finished"
    );

    Ok(())
}
