//! Nonogram Studio - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use nonogram_studio::cli::{Cli, Command};
use nonogram_studio::{PuzzleRepository, StudioConfig, import_library};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => StudioConfig::from_file(path)?,
        None => StudioConfig::default(),
    };

    match cli.command {
        Command::Serve { port, host, db } => {
            run_server(
                host.unwrap_or_else(|| config.host().clone()),
                port.unwrap_or(*config.port()),
                db.unwrap_or_else(|| config.db_path().clone()),
            )
            .await
        }
        Command::Tui { server_url } => {
            nonogram_studio::run_tui(
                server_url.unwrap_or_else(|| config.server_url().clone()),
                *config.default_rows(),
                *config.default_cols(),
            )
            .await
        }
        Command::Import { file, db } => {
            run_import(file, db.unwrap_or_else(|| config.db_path().clone()))
        }
    }
}

/// Run the puzzle API server.
async fn run_server(host: String, port: u16, db_path: String) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(host = %host, port, db_path = %db_path, "Starting puzzle API server");

    let repository = PuzzleRepository::new(db_path);
    repository.run_migrations()?;

    nonogram_studio::serve(&host, port, repository).await
}

/// Import a JSON puzzle library into the store.
fn run_import(file: std::path::PathBuf, db_path: String) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(file = %file.display(), db_path = %db_path, "Importing puzzle library");

    let json = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let repository = PuzzleRepository::new(db_path);
    repository.run_migrations()?;

    let report = import_library(&repository, &json)?;
    println!(
        "Imported {} puzzle(s), skipped {}",
        report.imported().len(),
        report.skipped().len()
    );
    Ok(())
}
