//! The `DataSource` trait.
//!
//! Implemented by loaders (e.g. `ghg-data`'s CSV reader). The dataset builder
//! depends on this abstraction, not on any file format.

use std::convert::Infallible;

use crate::record::{EmissionsRow, IncomeRow};

/// Supplier of the two raw input tables.
///
/// Both methods are called exactly once, at startup.
pub trait DataSource {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Rows of the emissions-by-country table, in file order.
  fn emissions(&self) -> Result<Vec<EmissionsRow>, Self::Error>;

  /// Rows of the income-classification table, in file order.
  fn income(&self) -> Result<Vec<IncomeRow>, Self::Error>;
}

/// A source over rows already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
  pub emissions: Vec<EmissionsRow>,
  pub income:    Vec<IncomeRow>,
}

impl DataSource for MemorySource {
  type Error = Infallible;

  fn emissions(&self) -> Result<Vec<EmissionsRow>, Infallible> {
    Ok(self.emissions.clone())
  }

  fn income(&self) -> Result<Vec<IncomeRow>, Infallible> {
    Ok(self.income.clone())
  }
}
