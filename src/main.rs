use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use castgallery::app::{self, Outcome};
use castgallery::config;
use castgallery::gallery;
use castgallery::hub::HubClient;
use castgallery::session::FileSession;

/// Fetches a Farcaster user's casts and renders their embedded images as
/// an HTML gallery.
#[derive(Parser)]
#[command(name = "castgallery", version)]
struct Cli {
    /// Path to the host session context JSON ({"user":{"fid":...}})
    #[arg(long, default_value = "session.json")]
    session: PathBuf,

    /// Path to the config file (default: the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the rendered page (overrides the config file)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;
    let output = cli.output.unwrap_or_else(|| config.gallery.output.clone());

    let session = FileSession::new(cli.session);
    let source = HubClient::new(config.hub.clone());

    let outcome = app::run_session(&session, &source).await;

    let html = match &outcome {
        Outcome::Rendered(images) => gallery::gallery_page(&config.gallery, images),
        other => gallery::status_page(&config.gallery, other.status_message()),
    };
    tokio::fs::write(&output, html)
        .await
        .with_context(|| format!("failed to write gallery page {}", output.display()))?;

    match &outcome {
        Outcome::Rendered(images) => {
            println!("Rendered {} image(s) to {}", images.len(), output.display());
        }
        other => println!("{} ({})", other.status_message(), output.display()),
    }

    Ok(())
}
