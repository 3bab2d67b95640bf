//! `hot100` - most used words and most verbose artists on the Hot-100.

use std::process::ExitCode;

use hot100_lyrics::config::Config;
use hot100_lyrics::error::Result;
use hot100_lyrics::fetch::HttpFetcher;
use hot100_lyrics::pipeline::Pipeline;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = Config::load()?;
    tracing::info!("{} {}", config.app_name(), config.app_version());

    let fetcher = HttpFetcher::new(&config);
    let report = Pipeline::new(&fetcher, &config).run().await?;

    println!("{}", report.render(config.top_words, config.top_artists));

    if let Some(path) = &config.report_path {
        report.write_json(path)?;
        tracing::info!("Wrote report to {}", path.display());
    }

    Ok(())
}
