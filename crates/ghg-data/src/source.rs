//! File-backed [`DataSource`].

use std::{
  fs::File,
  io::BufReader,
  path::{Path, PathBuf},
};

use ghg_core::{
  record::{EmissionsRow, IncomeRow},
  source::DataSource,
};

use crate::{
  error::{Error, Result},
  reader::{read_emissions, read_income},
};

/// Reads both tables from CSV files on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
  emissions_path: PathBuf,
  income_path:    PathBuf,
}

impl CsvSource {
  pub fn new(
    emissions_path: impl Into<PathBuf>,
    income_path: impl Into<PathBuf>,
  ) -> Self {
    Self {
      emissions_path: emissions_path.into(),
      income_path:    income_path.into(),
    }
  }
}

fn open(path: &Path) -> Result<BufReader<File>> {
  File::open(path)
    .map(BufReader::new)
    .map_err(|source| Error::Open {
      path: path.to_path_buf(),
      source,
    })
}

impl DataSource for CsvSource {
  type Error = Error;

  fn emissions(&self) -> Result<Vec<EmissionsRow>> {
    let rows = read_emissions(open(&self.emissions_path)?)?;
    tracing::info!(
      path = %self.emissions_path.display(),
      rows = rows.len(),
      "loaded emissions table"
    );
    Ok(rows)
  }

  fn income(&self) -> Result<Vec<IncomeRow>> {
    let rows = read_income(open(&self.income_path)?)?;
    tracing::info!(
      path = %self.income_path.display(),
      rows = rows.len(),
      "loaded income classification table"
    );
    Ok(rows)
  }
}
