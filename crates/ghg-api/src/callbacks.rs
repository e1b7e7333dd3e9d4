//! The dashboard's reactive callbacks.
//!
//! Each is a pure function of the current control value and the static
//! dataset. The HTTP handlers in [`crate::figures`] are thin wrappers.

use ghg_chart::{
  Dropdown, DropdownOption, Figure, TabContent,
  component::{
    CONTINENT_DROPDOWN_ID, CONTINENT_GRAPH_ID, COUNTRY_DROPDOWN_ID,
    COUNTRY_GRAPH_ID,
  },
  continent_pie, country_pie, world_map,
};
use ghg_core::{Dataset, Tab};

pub const COUNTRY_PLACEHOLDER: &str = "Select countries (max 15)";
pub const CONTINENT_PLACEHOLDER: &str = "Select continents";

/// Tab selector changed: build the dropdown and graph for `tab`.
///
/// The country dropdown offers the top 50 countries with the top 10
/// pre-selected; the continent dropdown offers and pre-selects every region.
pub fn render_tab_content(tab: Tab, ds: &Dataset) -> TabContent {
  match tab {
    Tab::Country => TabContent {
      tab,
      dropdown: Dropdown {
        id:          COUNTRY_DROPDOWN_ID.to_owned(),
        options:     ds
          .country_options()
          .iter()
          .map(|c| DropdownOption::plain(&c.country_name))
          .collect(),
        value:       ds
          .default_countries()
          .iter()
          .map(|c| c.country_name.clone())
          .collect(),
        multi:       true,
        placeholder: COUNTRY_PLACEHOLDER.to_owned(),
      },
      graph_id: COUNTRY_GRAPH_ID.to_owned(),
    },
    Tab::Continent => TabContent {
      tab,
      dropdown: Dropdown {
        id:          CONTINENT_DROPDOWN_ID.to_owned(),
        options:     ds
          .continents()
          .iter()
          .map(|c| DropdownOption::plain(&c.region))
          .collect(),
        value:       ds.continents().iter().map(|c| c.region.clone()).collect(),
        multi:       true,
        placeholder: CONTINENT_PLACEHOLDER.to_owned(),
      },
      graph_id: CONTINENT_GRAPH_ID.to_owned(),
    },
  }
}

/// Country dropdown changed. An empty selection shows the top 10.
pub fn update_country_pie(selected: &[String], ds: &Dataset) -> Figure {
  country_pie(ds.select_countries(selected))
}

/// Continent dropdown changed. An empty selection shows every continent.
pub fn update_continent_pie(selected: &[String], ds: &Dataset) -> Figure {
  continent_pie(ds.select_continents(selected))
}

/// The world map. It does not depend on any control value.
pub fn update_world_map(ds: &Dataset) -> Figure { world_map(ds.countries()) }
