//! forvo-dl - Download Forvo pronunciations from the command line
//!
//! Downloads the most up-voted recording of each word given on the command
//! line and prints the path of every file it produced.

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use forvo_dl::cli::{Cli, DownloadConfig};
use forvo_dl::ForvoClient;

/// Sends log output to stderr so stdout only carries file paths
fn init_tracing() {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    let config = DownloadConfig::from_cli(&cli)?;
    let client = ForvoClient::new(cli.key.as_str(), config.download_dir)?
        .with_cache_layout(config.layout);
    let extra = cli.extra_params();

    let mut failed = 0;
    for word in &cli.words {
        match client.download_audio(&cli.language, word, &extra).await {
            Some(path) => println!("{}", path.display()),
            None => failed += 1,
        }
    }

    if failed > 0 {
        tracing::error!(
            "{} of {} words could not be downloaded",
            failed,
            cli.words.len()
        );
        std::process::exit(1);
    }

    Ok(())
}
