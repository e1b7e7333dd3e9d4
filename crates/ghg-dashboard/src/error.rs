//! Error type for `ghg-dashboard`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("configuration error: {0}")]
  Config(#[from] config::ConfigError),

  #[error("dataset error: {0}")]
  Dataset(#[from] ghg_core::Error),

  #[error("failed to render page: {0}")]
  Render(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
