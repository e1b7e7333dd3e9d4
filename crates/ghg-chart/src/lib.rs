//! Chart and UI-fragment model for the GHG dashboard.
//!
//! Figures serialise to the JSON shape Plotly.js accepts in
//! `Plotly.newPlot(el, figure.data, figure.layout)`. Pure data; no HTTP.
//!
//! # Quick start
//!
//! ```no_run
//! # fn demo(ds: &ghg_core::Dataset) {
//! let figure = ghg_chart::country_pie(ds.default_countries().iter());
//! let json = serde_json::to_string(&figure).unwrap();
//! # }
//! ```

pub mod choropleth;
pub mod component;
pub mod figure;
pub mod pie;

pub use choropleth::world_map;
pub use component::{Dropdown, DropdownOption, TabContent};
pub use figure::{Figure, Layout, Trace};
pub use pie::{continent_pie, country_pie};
