//! Tabs and dropdown selections.
//!
//! A selection is the list of names picked in a dropdown. Filtering keeps the
//! dataset's own order, ignores names it does not know, and never returns an
//! empty list: an empty or fully-unknown selection falls back to the default
//! (top countries, or every continent).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
  dataset::Dataset,
  error::{Error, Result},
  record::{ContinentAggregate, EmissionsRecord},
};

/// Countries pre-selected in the country dropdown.
pub const DEFAULT_COUNTRY_COUNT: usize = 10;
/// Countries offered as options in the country dropdown.
pub const COUNTRY_OPTION_COUNT: usize = 50;

/// The two views in the left-hand tab selector.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
  #[default]
  Country,
  Continent,
}

impl Tab {
  /// Parse a tab id as sent by the client (`"country"`, `"continent"`).
  pub fn from_id(id: &str) -> Result<Self> {
    id.parse().map_err(|_| Error::UnknownTab(id.to_owned()))
  }

  pub fn id(self) -> &'static str { self.into() }

  pub fn label(self) -> &'static str {
    match self {
      Tab::Country => "By Country",
      Tab::Continent => "By Continent",
    }
  }
}

impl Dataset {
  /// The countries pre-selected when the country tab opens.
  pub fn default_countries(&self) -> &[EmissionsRecord] {
    &self.countries[..self.countries.len().min(DEFAULT_COUNTRY_COUNT)]
  }

  /// The countries offered in the country dropdown.
  pub fn country_options(&self) -> &[EmissionsRecord] {
    &self.countries[..self.countries.len().min(COUNTRY_OPTION_COUNT)]
  }

  /// Countries named in `selected`, in contribution order.
  pub fn select_countries(&self, selected: &[String]) -> Vec<&EmissionsRecord> {
    let picked: Vec<&EmissionsRecord> = self
      .countries
      .iter()
      .filter(|c| selected.iter().any(|s| *s == c.country_name))
      .collect();
    if picked.is_empty() {
      self.default_countries().iter().collect()
    } else {
      picked
    }
  }

  /// Continents named in `selected`, in region order.
  pub fn select_continents(
    &self,
    selected: &[String],
  ) -> Vec<&ContinentAggregate> {
    let picked: Vec<&ContinentAggregate> = self
      .continents
      .iter()
      .filter(|c| selected.iter().any(|s| *s == c.region))
      .collect();
    if picked.is_empty() {
      self.continents.iter().collect()
    } else {
      picked
    }
  }
}
