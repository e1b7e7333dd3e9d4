//! Handlers wrapping the [`callbacks`](crate::callbacks).
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/tabs/{tab}` | `country` or `continent`; 404 otherwise |
//! | `POST` | `/callbacks/country-pie` | Body: [`SelectionBody`] |
//! | `POST` | `/callbacks/continent-pie` | Body: [`SelectionBody`] |
//! | `GET`  | `/figures/world-map` | |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use ghg_chart::{Figure, TabContent};
use ghg_core::{Dataset, Tab};
use serde::Deserialize;

use crate::{callbacks, error::ApiError};

/// `GET /tabs/{tab}`
pub async fn tab(
  State(ds): State<Arc<Dataset>>,
  Path(id): Path<String>,
) -> Result<Json<TabContent>, ApiError> {
  let tab =
    Tab::from_id(&id).map_err(|_| ApiError::unknown_tab(&id))?;
  tracing::debug!(%tab, "rendering tab content");
  Ok(Json(callbacks::render_tab_content(tab, &ds)))
}

/// JSON body for the pie callbacks: `{"selected": ["China", "India"]}`.
///
/// A missing or `null` list is the same as an empty one.
#[derive(Debug, Deserialize, Default)]
pub struct SelectionBody {
  #[serde(default)]
  pub selected: Option<Vec<String>>,
}

impl SelectionBody {
  fn names(self) -> Vec<String> { self.selected.unwrap_or_default() }
}

/// `POST /callbacks/country-pie`
pub async fn country_pie(
  State(ds): State<Arc<Dataset>>,
  Json(body): Json<SelectionBody>,
) -> Json<Figure> {
  let selected = body.names();
  tracing::debug!(selected = selected.len(), "updating country pie");
  Json(callbacks::update_country_pie(&selected, &ds))
}

/// `POST /callbacks/continent-pie`
pub async fn continent_pie(
  State(ds): State<Arc<Dataset>>,
  Json(body): Json<SelectionBody>,
) -> Json<Figure> {
  let selected = body.names();
  tracing::debug!(selected = selected.len(), "updating continent pie");
  Json(callbacks::update_continent_pie(&selected, &ds))
}

/// `GET /figures/world-map`
pub async fn world_map(State(ds): State<Arc<Dataset>>) -> Json<Figure> {
  Json(callbacks::update_world_map(&ds))
}
