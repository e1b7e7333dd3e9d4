//! UI fragments returned by the tab-switch callback, and the element ids the
//! page and the client script agree on.

use ghg_core::selection::Tab;
use serde::Serialize;

pub const TABS_ID: &str = "tabs";
pub const TAB_CONTENT_ID: &str = "tab-content";
pub const COUNTRY_DROPDOWN_ID: &str = "country-dropdown";
pub const COUNTRY_GRAPH_ID: &str = "country-pie-chart";
pub const CONTINENT_DROPDOWN_ID: &str = "continent-dropdown";
pub const CONTINENT_GRAPH_ID: &str = "continent-pie-chart";
pub const WORLD_MAP_ID: &str = "ghg-world-map";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
  pub label: String,
  pub value: String,
}

impl DropdownOption {
  /// An option whose label and value are the same string.
  pub fn plain(text: &str) -> Self {
    Self {
      label: text.to_owned(),
      value: text.to_owned(),
    }
  }
}

/// A (multi-)select dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dropdown {
  pub id:          String,
  pub options:     Vec<DropdownOption>,
  /// Values selected when the dropdown is first shown.
  pub value:       Vec<String>,
  pub multi:       bool,
  pub placeholder: String,
}

/// What the left panel shows for a tab: a dropdown driving one pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabContent {
  pub tab:      Tab,
  pub dropdown: Dropdown,
  /// Id of the graph element the dropdown's callback draws into.
  pub graph_id: String,
}
