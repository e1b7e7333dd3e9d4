//! Row and record types.
//!
//! `*Row` types are what a [`DataSource`](crate::source::DataSource) hands
//! over: one line of an input table, nothing derived. `*Record` and
//! [`ContinentAggregate`] are produced by
//! [`Dataset::build`](crate::dataset::Dataset::build) and never change after.

use serde::{Deserialize, Serialize};

// ─── Year range ──────────────────────────────────────────────────────────────

/// First year column in the emissions table.
pub const FIRST_YEAR: u16 = 1970;
/// Last year column in the emissions table (inclusive).
pub const LAST_YEAR: u16 = 2023;
/// Number of yearly values every row carries.
pub const YEAR_COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

/// The year columns, in table order.
pub fn years() -> impl Iterator<Item = u16> { FIRST_YEAR..=LAST_YEAR }

/// Colour-scale transform applied to a total before it is drawn on the map.
///
/// `log10(total + 1)`, with negative totals clamped to zero so the result is
/// always defined and non-negative.
pub fn log_scale(total: f64) -> f64 { (total.max(0.0) + 1.0).log10() }

// ─── Input rows ──────────────────────────────────────────────────────────────

/// One row of the emissions-by-country table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsRow {
  /// ISO-3 style code (EDGAR country code); the join key.
  pub country_code: String,
  pub country_name: String,
  /// One slot per year, [`FIRST_YEAR`] first. `None` for a blank cell.
  pub yearly:       Vec<Option<f64>>,
}

impl EmissionsRow {
  /// Sum of all yearly values; blank cells count as zero.
  pub fn total(&self) -> f64 { self.yearly.iter().flatten().sum() }
}

/// One row of the country income-classification table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeRow {
  pub code:         String,
  /// Geographic region, used as the "continent" grouping key.
  pub region:       Option<String>,
  pub income_group: Option<String>,
}

// ─── Derived records ─────────────────────────────────────────────────────────

/// A country's emissions joined with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsRecord {
  pub country_code:     String,
  pub country_name:     String,
  /// `None` when the country has no match in the classification table.
  pub region:           Option<String>,
  pub income_group:     Option<String>,
  pub yearly_emissions: Vec<Option<f64>>,
  pub total_emissions:  f64,
  /// Share of the world total, in percent.
  pub contribution_pct: f64,
}

impl EmissionsRecord {
  pub fn log_emissions(&self) -> f64 { log_scale(self.total_emissions) }
}

/// Emissions summed over every country in a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinentAggregate {
  pub region:           String,
  pub country_count:    usize,
  pub total_emissions:  f64,
  /// Share of the sum over all regions, in percent.
  pub contribution_pct: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn year_count_matches_range() {
    assert_eq!(years().count(), YEAR_COUNT);
    assert_eq!(YEAR_COUNT, 54);
  }

  #[test]
  fn total_skips_blank_cells() {
    let row = EmissionsRow {
      country_code: "AAA".into(),
      country_name: "Aland".into(),
      yearly:       vec![Some(1.5), None, Some(2.5)],
    };
    assert_eq!(row.total(), 4.0);
  }

  #[test]
  fn log_scale_is_monotonic_and_non_negative() {
    let inputs = [0.0, 0.5, 9.0, 99.0, 1.0e6, 5.0e9];
    let scaled: Vec<f64> = inputs.iter().map(|t| log_scale(*t)).collect();
    assert_eq!(scaled[0], 0.0);
    assert!((scaled[2] - 1.0).abs() < 1e-12);
    assert!((scaled[3] - 2.0).abs() < 1e-12);
    assert!(scaled.windows(2).all(|w| w[0] < w[1]));
    assert!(log_scale(-42.0) >= 0.0);
  }
}
