//! Shared fixtures for unit tests.

use crate::{
  dataset::{BuildOptions, Dataset},
  record::{EmissionsRow, IncomeRow, YEAR_COUNT},
};

/// A row whose total is split evenly between the first and last year.
pub fn row(code: &str, name: &str, total: f64) -> EmissionsRow {
  let mut yearly = vec![None; YEAR_COUNT];
  yearly[0] = Some(total / 2.0);
  yearly[YEAR_COUNT - 1] = Some(total / 2.0);
  EmissionsRow {
    country_code: code.into(),
    country_name: name.into(),
    yearly,
  }
}

pub fn income(code: &str, region: &str, group: &str) -> IncomeRow {
  IncomeRow {
    code:         code.into(),
    region:       Some(region.into()),
    income_group: Some(group.into()),
  }
}

/// Six countries in file order, followed by the four summary rows.
pub fn fixture_rows() -> Vec<EmissionsRow> {
  vec![
    row("USA", "United States", 300.0),
    row("CHN", "China", 400.0),
    row("FRA", "France", 50.0),
    row("IND", "India", 150.0),
    row("SCG", "Serbia and Montenegro", 20.0),
    row("DEU", "Germany", 100.0),
    row("EU27", "EU27", 150.0),
    row("GLOBAL TOTAL", "GLOBAL TOTAL", 1020.0),
    row("SEA", "International Shipping", 10.0),
    row("AIR", "International Aviation", 10.0),
  ]
}

pub fn fixture_income() -> Vec<IncomeRow> {
  vec![
    income("CHN", "East Asia & Pacific", "Upper middle income"),
    income("USA", "North America", "High income"),
    income("IND", "South Asia", "Lower middle income"),
    income("DEU", "Europe & Central Asia", "High income"),
    income("FRA", "Europe & Central Asia", "High income"),
    income("BRA", "Latin America & Caribbean", "Upper middle income"),
    income("USA", "Elsewhere", "High income"),
  ]
}

pub fn fixture_dataset() -> Dataset {
  Dataset::build(fixture_rows(), &fixture_income(), BuildOptions::default())
    .expect("fixture dataset")
}

/// `n` classified countries with strictly decreasing totals, no trailer.
pub fn many_countries(n: usize) -> Dataset {
  let rows: Vec<EmissionsRow> = (0..n)
    .map(|i| row(&format!("C{i:02}"), &format!("Country {i}"), (n - i) as f64))
    .collect();
  let income: Vec<IncomeRow> = (0..n)
    .map(|i| {
      let region = if i % 2 == 0 { "Even" } else { "Odd" };
      income(&format!("C{i:02}"), region, "High income")
    })
    .collect();
  Dataset::build(rows, &income, BuildOptions { trailing_rows: 0 })
    .expect("many-country dataset")
}
