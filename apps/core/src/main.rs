// Stylewise host entry point
// Reads one JSON command per line on stdin, writes one JSON response per line on stdout.

use stylewise_core::commands;
use stylewise_core::logging;
use stylewise_core::{EngineConfig, RecommendationEngine};
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = EngineConfig::from_env()?;
    logging::init_tracing(&config)?;
    info!("Starting {} v{}", logging::APP_NAME, env!("CARGO_PKG_VERSION"));

    let engine = RecommendationEngine::new(&config)?;

    commands::serve(&engine, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    info!("Input closed, shutting down");
    Ok(())
}
