//! Donut charts of contribution share.

use ghg_core::record::{ContinentAggregate, EmissionsRecord};

use crate::figure::{Figure, Layout, PieTrace, Title, Trace};

pub const COUNTRY_PIE_TITLE: &str = "GHG Emissions by Selected Countries";
pub const CONTINENT_PIE_TITLE: &str = "GHG Emissions by Selected Continents";

const HOLE: f64 = 0.3;

/// A donut chart with one slice per `(label, contribution %)`.
///
/// `label_name` is the column label shown in the hover box.
pub fn pie<'a>(
  title: &str,
  label_name: &str,
  slices: impl IntoIterator<Item = (&'a str, f64)>,
) -> Figure {
  let (labels, values): (Vec<String>, Vec<f64>) = slices
    .into_iter()
    .map(|(label, value)| (label.to_owned(), value))
    .unzip();

  Figure {
    data:   vec![Trace::Pie(PieTrace {
      labels,
      values,
      hole: HOLE,
      hovertemplate: format!(
        "{label_name}=%{{label}}<br>Contribution (%)=%{{value}}<extra></extra>"
      ),
    })],
    layout: Layout {
      title: Some(Title::new(title)),
      ..Layout::default()
    },
  }
}

pub fn country_pie<'a>(
  countries: impl IntoIterator<Item = &'a EmissionsRecord>,
) -> Figure {
  pie(
    COUNTRY_PIE_TITLE,
    "Country",
    countries
      .into_iter()
      .map(|c| (c.country_name.as_str(), c.contribution_pct)),
  )
}

pub fn continent_pie<'a>(
  continents: impl IntoIterator<Item = &'a ContinentAggregate>,
) -> Figure {
  pie(
    CONTINENT_PIE_TITLE,
    "Region",
    continents
      .into_iter()
      .map(|c| (c.region.as_str(), c.contribution_pct)),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn aggregate(region: &str, pct: f64) -> ContinentAggregate {
    ContinentAggregate {
      region:           region.into(),
      country_count:    1,
      total_emissions:  pct * 10.0,
      contribution_pct: pct,
    }
  }

  #[test]
  fn slices_follow_input_order() {
    let continents = [aggregate("Asia", 60.0), aggregate("Europe", 40.0)];
    let fig = continent_pie(&continents);
    assert_eq!(fig.title(), Some(CONTINENT_PIE_TITLE));

    let Trace::Pie(trace) = &fig.data[0] else {
      panic!("expected a pie trace");
    };
    assert_eq!(trace.labels, ["Asia", "Europe"]);
    assert_eq!(trace.values, [60.0, 40.0]);
    assert_eq!(trace.hole, 0.3);
    assert!(trace.hovertemplate.starts_with("Region=%{label}"));
  }

  #[test]
  fn empty_input_gives_empty_trace() {
    let fig = pie("t", "x", std::iter::empty());
    let Trace::Pie(trace) = &fig.data[0] else {
      panic!("expected a pie trace");
    };
    assert!(trace.labels.is_empty());
    assert!(trace.values.is_empty());
  }
}
