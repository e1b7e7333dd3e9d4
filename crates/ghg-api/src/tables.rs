//! Handlers for the read-only table endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/summary` | Counts, world total, year range, fingerprint |
//! | `GET`  | `/countries` | Optional `?limit=n`; contribution order |
//! | `GET`  | `/continents` | Region order |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use ghg_core::{ContinentAggregate, Dataset, DatasetSummary, EmissionsRecord};
use serde::Deserialize;

/// `GET /summary`
pub async fn summary(State(ds): State<Arc<Dataset>>) -> Json<DatasetSummary> {
  Json(ds.summary())
}

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Return at most this many rows from the top of the table.
  pub limit: Option<usize>,
}

/// `GET /countries[?limit=<n>]`
pub async fn countries(
  State(ds): State<Arc<Dataset>>,
  Query(params): Query<ListParams>,
) -> Json<Vec<EmissionsRecord>> {
  let all = ds.countries();
  let n = params.limit.map_or(all.len(), |l| l.min(all.len()));
  Json(all[..n].to_vec())
}

/// `GET /continents`
pub async fn continents(
  State(ds): State<Arc<Dataset>>,
) -> Json<Vec<ContinentAggregate>> {
  Json(ds.continents().to_vec())
}
