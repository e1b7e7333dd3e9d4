//! The world map.

use ghg_core::record::EmissionsRecord;

use crate::figure::{
  ChoroplethTrace, ColorAxis, ColorBar, Figure, Font, Geo, Layout, Margin,
  Projection, Title, Trace,
};

pub const WORLD_MAP_TITLE: &str =
  "Global Greenhouse Gas Emissions (Log-Scaled)";
pub const COLORBAR_TITLE: &str = "Log Emissions (log10)";

/// Yellow through orange to red.
pub const COLOR_STOPS: [(f64, &str); 3] =
  [(0.0, "yellow"), (0.5, "orange"), (1.0, "red")];

/// Raw total with thousands separators, share with two decimals.
const HOVER_TEMPLATE: &str = "<b>%{hovertext}</b><br><br>\
  Total Emissions=%{customdata[0]:,.0f}<br>\
  Contribution (%)=%{customdata[1]:.2f}<br>\
  Log Emissions=%{z}<extra></extra>";

/// A choropleth of every country, coloured by `log10(total + 1)` and keyed by
/// ISO-3 code.
pub fn world_map<'a>(
  countries: impl IntoIterator<Item = &'a EmissionsRecord>,
) -> Figure {
  let mut trace = ChoroplethTrace {
    locations:     Vec::new(),
    locationmode:  "ISO-3".to_owned(),
    z:             Vec::new(),
    hovertext:     Vec::new(),
    customdata:    Vec::new(),
    hovertemplate: HOVER_TEMPLATE.to_owned(),
    coloraxis:     "coloraxis".to_owned(),
  };
  for c in countries {
    trace.locations.push(c.country_code.clone());
    trace.z.push(c.log_emissions());
    trace.hovertext.push(c.country_name.clone());
    trace.customdata.push([c.total_emissions, c.contribution_pct]);
  }

  Figure {
    data:   vec![Trace::Choropleth(trace)],
    layout: Layout {
      title:     Some(Title::new(WORLD_MAP_TITLE)),
      geo:       Some(Geo {
        showframe:      false,
        showcoastlines: true,
        projection:     Projection {
          kind: "natural earth".to_owned(),
        },
      }),
      coloraxis: Some(ColorAxis {
        colorscale: COLOR_STOPS
          .iter()
          .map(|(pos, colour)| (*pos, (*colour).to_owned()))
          .collect(),
        colorbar:   ColorBar {
          title:     Title {
            text: COLORBAR_TITLE.to_owned(),
            font: Some(Font { size: 10 }),
          },
          thickness: 8,
          len:       0.35,
          tickfont:  Font { size: 8 },
        },
      }),
      margin:    Some(Margin {
        r: 10,
        t: 50,
        l: 10,
        b: 10,
      }),
    },
  }
}

#[cfg(test)]
mod tests {
  use ghg_core::record::YEAR_COUNT;

  use super::*;

  fn record(code: &str, name: &str, total: f64, pct: f64) -> EmissionsRecord {
    EmissionsRecord {
      country_code:     code.into(),
      country_name:     name.into(),
      region:           None,
      income_group:     None,
      yearly_emissions: vec![None; YEAR_COUNT],
      total_emissions:  total,
      contribution_pct: pct,
    }
  }

  #[test]
  fn one_location_per_country_with_log_colour() {
    let countries = [
      record("CHN", "China", 999.0, 90.0),
      record("FRA", "France", 99.0, 9.0),
      record("ATA", "Antarctica", 0.0, 0.0),
    ];
    let fig = world_map(&countries);
    assert_eq!(fig.title(), Some(WORLD_MAP_TITLE));

    let Trace::Choropleth(trace) = &fig.data[0] else {
      panic!("expected a choropleth trace");
    };
    assert_eq!(trace.locationmode, "ISO-3");
    assert_eq!(trace.locations, ["CHN", "FRA", "ATA"]);
    assert_eq!(trace.hovertext, ["China", "France", "Antarctica"]);
    assert!((trace.z[0] - 3.0).abs() < 1e-12);
    assert!((trace.z[1] - 2.0).abs() < 1e-12);
    assert_eq!(trace.z[2], 0.0);
    assert_eq!(trace.customdata[0], [999.0, 90.0]);
  }

  #[test]
  fn colour_scale_is_monotonic_in_total() {
    let countries: Vec<EmissionsRecord> = [5.0, 50.0, 5.0e3, 5.0e7]
      .iter()
      .map(|t| record("XXX", "X", *t, 0.0))
      .collect();
    let fig = world_map(&countries);
    let Trace::Choropleth(trace) = &fig.data[0] else {
      panic!("expected a choropleth trace");
    };
    assert!(trace.z.iter().all(|z| *z >= 0.0));
    assert!(trace.z.windows(2).all(|w| w[0] < w[1]));
  }

  #[test]
  fn layout_matches_dashboard_styling() {
    let fig = world_map(std::iter::empty());
    let v = serde_json::to_value(&fig.layout).unwrap();
    assert_eq!(v["geo"]["projection"]["type"], "natural earth");
    assert_eq!(v["geo"]["showframe"], false);
    assert_eq!(v["coloraxis"]["colorbar"]["title"]["text"], COLORBAR_TITLE);
    assert_eq!(v["coloraxis"]["colorbar"]["thickness"], 8);
    assert_eq!(v["coloraxis"]["colorscale"][1][1], "orange");
    assert_eq!(v["margin"]["t"], 50);
  }
}
