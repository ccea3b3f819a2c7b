//! Papercat Fixture Loader
//!
//! Bulk-loads Django `loaddata` fixture files into the papers table:
//! 1. Parses and validates every file
//! 2. Ensures the papers table exists
//! 3. Upserts all records by pk

mod errors;
mod fixture;

use clap::Parser;
use papercat_common::{
    config::AppConfig,
    db::{models::Paper, DbPool, SeaOrmPaperRepository},
    metrics, VERSION,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "loaddata", version, about = "Load paper fixtures into the catalog")]
struct Cli {
    /// Configuration file (defaults to config/ layering and APP__ variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixture files to load, in order
    #[arg(required = true)]
    fixtures: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(&path.to_string_lossy())?,
        None => AppConfig::load()?,
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level)),
        )
        .with_target(true)
        .init();

    info!("Starting Papercat Fixture Loader v{}", VERSION);

    // Validate everything before touching the database
    let papers = fixture::read_fixtures(&cli.fixtures)?;

    let db = DbPool::new(&config.database).await?;
    let repo = SeaOrmPaperRepository::new(db);

    let written = load(&repo, papers).await?;

    info!(files = cli.fixtures.len(), records = written, "Installed fixtures");
    Ok(())
}

/// Write validated papers and record how many rows were touched
async fn load(repo: &SeaOrmPaperRepository, papers: Vec<Paper>) -> papercat_common::Result<u64> {
    if papers.is_empty() {
        return Ok(0);
    }

    let written = repo.upsert_many(papers).await?;
    metrics::record_fixture_load(written);

    Ok(written)
}
