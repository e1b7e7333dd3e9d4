//! The immutable emissions dataset and the transform that builds it.
//!
//! The pipeline is:
//!
//! 1. left-join emissions rows to classification rows on country code;
//! 2. drop the trailing summary rows (EU27, world total, bunkers, ...);
//! 3. total each row across the year columns;
//! 4. compute each row's share of the world total and sort descending;
//! 5. roll rows up by region into [`ContinentAggregate`]s.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::{
  error::{Error, Result},
  record::{
    ContinentAggregate, EmissionsRecord, EmissionsRow, FIRST_YEAR, IncomeRow,
    LAST_YEAR, YEAR_COUNT,
  },
  source::DataSource,
};

/// Number of summary rows at the foot of the EDGAR country sheet.
pub const DEFAULT_TRAILING_ROWS: usize = 4;

// ─── Options ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
  /// How many rows to discard from the end of the merged table.
  pub trailing_rows: usize,
}

impl Default for BuildOptions {
  fn default() -> Self {
    Self {
      trailing_rows: DEFAULT_TRAILING_ROWS,
    }
  }
}

// ─── Dataset ─────────────────────────────────────────────────────────────────

/// Both derived tables, computed once and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
  /// Sorted by contribution, largest first.
  pub(crate) countries:   Vec<EmissionsRecord>,
  /// Sorted by region name.
  pub(crate) continents:  Vec<ContinentAggregate>,
  pub(crate) world_total: f64,
  pub(crate) fingerprint: String,
  pub(crate) built_at:    DateTime<Utc>,
}

/// Headline numbers about a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
  pub country_count:   usize,
  pub continent_count: usize,
  pub world_total:     f64,
  pub first_year:      u16,
  pub last_year:       u16,
  pub fingerprint:     String,
  pub built_at:        DateTime<Utc>,
}

impl Dataset {
  /// Read both tables from `source` and build the dataset.
  pub fn load<S: DataSource>(source: &S, options: BuildOptions) -> Result<Self> {
    let emissions = source
      .emissions()
      .map_err(|e| Error::Source(Box::new(e)))?;
    let income = source.income().map_err(|e| Error::Source(Box::new(e)))?;
    Self::build(emissions, &income, options)
  }

  /// Run the join / total / contribution / rollup pipeline.
  pub fn build(
    emissions: Vec<EmissionsRow>,
    income: &[IncomeRow],
    options: BuildOptions,
  ) -> Result<Self> {
    let mut countries = left_join(emissions, income)?;

    let keep = countries.len().saturating_sub(options.trailing_rows);
    if keep == 0 {
      return Err(Error::EmptyDataset {
        dropped: options.trailing_rows,
      });
    }
    countries.truncate(keep);

    let world_total: f64 = countries.iter().map(|c| c.total_emissions).sum();
    if !world_total.is_finite() || world_total <= 0.0 {
      return Err(Error::InvalidWorldTotal(world_total));
    }

    for country in &mut countries {
      country.contribution_pct = country.total_emissions / world_total * 100.0;
    }
    // Stable: ties keep file order.
    countries
      .sort_by(|a, b| b.contribution_pct.total_cmp(&a.contribution_pct));

    let continents = rollup(&countries)?;
    let fingerprint = fingerprint(&countries);

    Ok(Self {
      countries,
      continents,
      world_total,
      fingerprint,
      built_at: Utc::now(),
    })
  }

  pub fn countries(&self) -> &[EmissionsRecord] { &self.countries }

  pub fn continents(&self) -> &[ContinentAggregate] { &self.continents }

  pub fn world_total(&self) -> f64 { self.world_total }

  /// Hex SHA-256 over the derived country table.
  ///
  /// Stable across rebuilds of the same input regardless of file row order.
  pub fn fingerprint(&self) -> &str { &self.fingerprint }

  pub fn built_at(&self) -> DateTime<Utc> { self.built_at }

  #[cfg(test)]
  pub(crate) fn country(&self, name: &str) -> Option<&EmissionsRecord> {
    self.countries.iter().find(|c| c.country_name == name)
  }

  pub fn summary(&self) -> DatasetSummary {
    DatasetSummary {
      country_count:   self.countries.len(),
      continent_count: self.continents.len(),
      world_total:     self.world_total,
      first_year:      FIRST_YEAR,
      last_year:       LAST_YEAR,
      fingerprint:     self.fingerprint.clone(),
      built_at:        self.built_at,
    }
  }
}

// ─── Pipeline steps ──────────────────────────────────────────────────────────

/// Left join on country code. Rows without a match keep `region = None`.
/// When the classification table repeats a code, its first row wins.
fn left_join(
  emissions: Vec<EmissionsRow>,
  income: &[IncomeRow],
) -> Result<Vec<EmissionsRecord>> {
  let mut by_code: HashMap<&str, &IncomeRow> = HashMap::new();
  for row in income {
    let code = row.code.as_str();
    if !code.is_empty() {
      by_code.entry(code).or_insert(row);
    }
  }

  emissions
    .into_iter()
    .map(|row| {
      check_year_count(&row)?;
      let matched = by_code.get(row.country_code.as_str());
      let total = row.total();
      Ok(EmissionsRecord {
        region: matched.and_then(|m| m.region.clone()),
        income_group: matched.and_then(|m| m.income_group.clone()),
        total_emissions: total,
        contribution_pct: 0.0,
        country_code: row.country_code,
        country_name: row.country_name,
        yearly_emissions: row.yearly,
      })
    })
    .collect()
}

fn check_year_count(row: &EmissionsRow) -> Result<()> {
  if row.yearly.len() != YEAR_COUNT {
    return Err(Error::YearCount {
      code:     row.country_code.clone(),
      expected: YEAR_COUNT,
      found:    row.yearly.len(),
    });
  }
  Ok(())
}

/// Sum totals by region. Countries with no region are left out of the
/// rollup entirely, so continent shares are relative to the classified total.
///
/// Fails when no country is classified or the classified total is not
/// positive.
fn rollup(countries: &[EmissionsRecord]) -> Result<Vec<ContinentAggregate>> {
  let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
  for country in countries {
    if let Some(region) = country.region.as_deref() {
      let entry = groups.entry(region).or_insert((0.0, 0));
      entry.0 += country.total_emissions;
      entry.1 += 1;
    }
  }

  let grand_total: f64 = groups.values().map(|(total, _)| total).sum();
  if groups.is_empty() || !grand_total.is_finite() || grand_total <= 0.0 {
    return Err(Error::InvalidContinentTotal {
      regions: groups.len(),
      total:   grand_total,
    });
  }
  Ok(
    groups
      .into_iter()
      .map(|(region, (total, count))| ContinentAggregate {
        region:           region.to_owned(),
        country_count:    count,
        total_emissions:  total,
        contribution_pct: total / grand_total * 100.0,
      })
      .collect(),
  )
}

fn fingerprint(countries: &[EmissionsRecord]) -> String {
  let mut rows: Vec<&EmissionsRecord> = countries.iter().collect();
  rows.sort_by(|a, b| a.country_code.cmp(&b.country_code));

  let mut hasher = Sha256::new();
  for row in rows {
    hasher.update(row.country_code.as_bytes());
    hasher.update([0]);
    hasher.update(row.region.as_deref().unwrap_or("").as_bytes());
    hasher.update([0]);
    hasher.update(row.total_emissions.to_bits().to_le_bytes());
  }
  hex::encode(hasher.finalize())
}
