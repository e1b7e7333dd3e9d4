//! Error type for `ghg-data`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to open {path:?}: {source}")]
  Open {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("{table}: csv error: {source}")]
  Csv {
    table:  &'static str,
    #[source]
    source: csv::Error,
  },

  #[error("{table}: missing required column {column:?}")]
  MissingColumn { table: &'static str, column: String },

  #[error("{table}: line {line}, column {column:?}: invalid number {value:?}")]
  InvalidNumber {
    table:  &'static str,
    line:   u64,
    column: String,
    value:  String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
