use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use survey_db::{JsonDb, SurveyService};

mod bootstrap;
mod cli;
mod server;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("surveyd error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(&cli)?;

    let db = JsonDb::open(&config.storage.data_file).context("error while initiating db")?;
    let snapshot = db
        .load()
        .context("error while loading persisted entries")?;
    tracing::info!(
        path = %db.path().display(),
        surveys = snapshot.surveys.len(),
        responses = snapshot.response_count(),
        "loaded persisted entries"
    );

    let service = Arc::new(SurveyService::with_system_providers(
        config.survey.max_questions,
        snapshot,
    ));

    server::serve(&config.server, service, &db).await?;
    tracing::info!("app exiting");
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SURVEY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
