//! HTTP front end for the GHG emissions dashboard.
//!
//! Serves the pre-rendered page and client script, and mounts the JSON
//! callback API from [`ghg_api`] under `/api`. All state is built once at
//! startup and shared read-only.

pub mod error;
pub mod etag;
pub mod layout;

pub use error::{Error, Result};

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{
  Router,
  extract::State,
  http::{HeaderMap, StatusCode, header},
  response::{IntoResponse, Response},
  routing::get,
};
use bytes::Bytes;
use ghg_core::{BuildOptions, Dataset, dataset::DEFAULT_TRAILING_ROWS};
use ghg_data::CsvSource;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// The client script, embedded at compile time.
pub const SCRIPT: &str = include_str!("../assets/dashboard.js");

pub const DEFAULT_FOOTER: &str = "Emissions: EDGAR 2024 GHG booklet. \
  Income classification: World Bank list of economies.";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration, deserialised from `dashboard.toml` and `GHG_*`
/// environment variables.
#[derive(Deserialize, Clone, Debug)]
pub struct DashboardConfig {
  pub host:           String,
  pub port:           u16,
  /// CSV export of the `GHG_totals_by_country` sheet.
  pub emissions_path: PathBuf,
  /// CSV export of the `List of economies` sheet.
  pub income_path:    PathBuf,
  /// Summary rows to drop from the foot of the merged table.
  pub trailing_rows:  usize,
  pub footer:         String,
}

impl DashboardConfig {
  /// Layer built-in defaults, then the TOML file at `path` (if it exists),
  /// then `GHG_*` environment variables.
  pub fn load(path: &Path) -> Result<Self> {
    let settings = config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8050_i64)?
      .set_default("emissions_path", "data/GHG_totals_by_country.csv")?
      .set_default("income_path", "data/CLASS_list_of_economies.csv")?
      .set_default("trailing_rows", DEFAULT_TRAILING_ROWS as i64)?
      .set_default("footer", DEFAULT_FOOTER)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("GHG").try_parsing(true))
      .build()?;
    Ok(settings.try_deserialize()?)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Read both input files and build the dataset. Any failure is fatal for the
/// server.
pub fn load_dataset(config: &DashboardConfig) -> Result<Dataset> {
  let source = CsvSource::new(
    expand_tilde(&config.emissions_path),
    expand_tilde(&config.income_path),
  );
  let dataset = Dataset::load(&source, BuildOptions {
    trailing_rows: config.trailing_rows,
  })?;
  tracing::info!(
    countries = dataset.countries().len(),
    continents = dataset.continents().len(),
    world_total = dataset.world_total(),
    fingerprint = dataset.fingerprint(),
    "dataset ready"
  );
  Ok(dataset)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Application state ────────────────────────────────────────────────────────

/// A fixed response body with its ETag.
#[derive(Debug, Clone)]
pub struct Asset {
  pub body:         Bytes,
  pub etag:         String,
  pub content_type: &'static str,
}

impl Asset {
  pub fn new(body: impl Into<Bytes>, content_type: &'static str) -> Self {
    let body = body.into();
    Self {
      etag: etag::compute_etag(&body),
      body,
      content_type,
    }
  }
}

/// Shared state threaded through the page handlers.
#[derive(Clone)]
pub struct AppState {
  pub dataset: Arc<Dataset>,
  pub page:    Arc<Asset>,
  pub script:  Arc<Asset>,
}

impl AppState {
  /// Render the page for `config` and wrap `dataset` for sharing.
  pub fn new(dataset: Dataset, config: &DashboardConfig) -> Result<Self> {
    let page = layout::render_page(&config.footer)?;
    Ok(Self {
      dataset: Arc::new(dataset),
      page:    Arc::new(Asset::new(page, "text/html; charset=utf-8")),
      script:  Arc::new(Asset::new(
        Bytes::from_static(SCRIPT.as_bytes()),
        "text/javascript; charset=utf-8",
      )),
    })
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the dashboard.
pub fn router(state: AppState) -> Router {
  let api = ghg_api::api_router(state.dataset.clone());
  Router::new()
    .route("/", get(page_handler))
    .route(layout::SCRIPT_PATH, get(script_handler))
    .route("/healthz", get(healthz))
    .with_state(state)
    .nest("/api", api)
    .layer(TraceLayer::new_for_http())
}

async fn page_handler(
  State(state): State<AppState>,
  headers: HeaderMap,
) -> Response {
  serve(&state.page, &headers)
}

async fn script_handler(
  State(state): State<AppState>,
  headers: HeaderMap,
) -> Response {
  serve(&state.script, &headers)
}

async fn healthz() -> &'static str { "ok" }

/// 304 when the client already has this asset, otherwise the body.
fn serve(asset: &Asset, headers: &HeaderMap) -> Response {
  if etag::if_none_match(headers, &asset.etag) {
    return (StatusCode::NOT_MODIFIED, [(header::ETAG, asset.etag.clone())])
      .into_response();
  }
  (
    [
      (header::CONTENT_TYPE, asset.content_type.to_owned()),
      (header::ETAG, asset.etag.clone()),
    ],
    asset.body.clone(),
  )
    .into_response()
}

// ─── Integration tests ────────────────────────────────────────────────────────
