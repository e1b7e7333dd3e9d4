//! Error types for `ghg-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("dataset is empty after dropping {dropped} trailing rows")]
  EmptyDataset { dropped: usize },

  #[error("world total emissions is {0}; cannot compute contributions")]
  InvalidWorldTotal(f64),

  #[error("{code}: expected {expected} yearly values, found {found}")]
  YearCount {
    code:     String,
    expected: usize,
    found:    usize,
  },

  #[error(
    "{regions} classified regions with total emissions {total}; cannot \
     compute continent contributions"
  )]
  InvalidContinentTotal { regions: usize, total: f64 },

  #[error("unknown tab: {0:?}")]
  UnknownTab(String),

  #[error("source error: {0}")]
  Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
