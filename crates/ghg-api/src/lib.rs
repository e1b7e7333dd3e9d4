//! JSON API for the GHG emissions dashboard.
//!
//! Exposes an axum [`Router`] over a shared, immutable
//! [`Dataset`](ghg_core::Dataset). Every endpoint is a read; nothing here
//! mutates state.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", ghg_api::api_router(dataset.clone()))
//! ```

pub mod callbacks;
pub mod error;
pub mod figures;
pub mod tables;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use ghg_core::Dataset;

pub use error::ApiError;

/// Build a fully-materialised API router for `dataset`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router(dataset: Arc<Dataset>) -> Router<()> {
  Router::new()
    // Tables
    .route("/summary", get(tables::summary))
    .route("/countries", get(tables::countries))
    .route("/continents", get(tables::continents))
    // Callbacks
    .route("/tabs/{tab}", get(figures::tab))
    .route("/callbacks/country-pie", post(figures::country_pie))
    .route("/callbacks/continent-pie", post(figures::continent_pie))
    .route("/figures/world-map", get(figures::world_map))
    .with_state(dataset)
}
