mod app;

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    path::Path,
    sync::Mutex,
};

use dquest_core::{
    config::{self, AppConfig},
    Investigation, Scenario,
};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    config::ensure_default_config()?;
    let config = AppConfig::load()?;
    init_logging(&config.log_dir)?;

    let scenario = Scenario::mansion();
    let map = scenario
        .build_map()
        .context("failed to build the mansion map")?;
    let index = scenario
        .build_index(config.buckets)
        .context("failed to build the suspect index")?;
    info!(
        rooms = map.len(),
        associations = index.len(),
        buckets = index.bucket_count(),
        "Case prepared"
    );
    let investigation = Investigation::with_threshold(map, index, config.evidence_threshold)
        .context("invalid evidence threshold")?;

    let mut app = app::DetectiveApp::new(investigation, scenario.title, &config.theme_accent);
    app.run().await
}

/// Log to a file only: stdout belongs to the terminal UI.
fn init_logging(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let log_path = log_dir.join("detective-quest.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_ansi(false)
        .with_writer(Mutex::new(log_file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
