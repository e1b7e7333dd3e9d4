//! ghg-dashboard server binary.
//!
//! Reads `dashboard.toml` (or the path given with `--config`), loads both
//! input tables once, and serves the dashboard over HTTP. A dataset that
//! cannot be loaded stops the process before the listener is bound.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use ghg_dashboard::{AppState, DashboardConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "GHG emissions dashboard server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "dashboard.toml")]
  config: PathBuf,

  /// Override the configured listen port.
  #[arg(short, long)]
  port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut cfg = DashboardConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;
  if let Some(port) = cli.port {
    cfg.port = port;
  }

  let dataset = ghg_dashboard::load_dataset(&cfg).with_context(|| {
    format!(
      "failed to load dataset from {:?} and {:?}",
      cfg.emissions_path, cfg.income_path
    )
  })?;

  let state =
    AppState::new(dataset, &cfg).context("failed to render dashboard page")?;
  let app = ghg_dashboard::router(state);
  let address = cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
