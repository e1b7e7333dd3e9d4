//! Header names and column lookup.

use csv::StringRecord;

use crate::error::Error;

pub(crate) const EMISSIONS_TABLE: &str = "GHG_totals_by_country";
pub(crate) const INCOME_TABLE: &str = "List of economies";

pub(crate) const COUNTRY_CODE: &str = "EDGAR Country Code";
pub(crate) const COUNTRY: &str = "Country";

pub(crate) const CODE: &str = "Code";
pub(crate) const REGION: &str = "Region";
pub(crate) const INCOME_GROUP: &str = "Income group";

fn normalise(header: &str) -> &str {
  header.trim_start_matches('\u{feff}').trim()
}

/// Position of the column named `name`, if present.
pub(crate) fn find(headers: &StringRecord, name: &str) -> Option<usize> {
  headers.iter().position(|h| normalise(h) == name)
}

/// Position of the column named `name`, or a `MissingColumn` error.
pub(crate) fn require(
  table: &'static str,
  headers: &StringRecord,
  name: &str,
) -> Result<usize, Error> {
  find(headers, name).ok_or_else(|| Error::MissingColumn {
    table,
    column: name.to_owned(),
  })
}

/// Position of a year column. Spreadsheet exports sometimes write integer
/// headers as `1970.0`, so both forms are accepted.
pub(crate) fn require_year(
  table: &'static str,
  headers: &StringRecord,
  year: u16,
) -> Result<usize, Error> {
  headers
    .iter()
    .position(|h| {
      let h = normalise(h);
      h.parse::<u16>() == Ok(year)
        || h.parse::<f64>().is_ok_and(|f| f == f64::from(year))
    })
    .ok_or_else(|| Error::MissingColumn {
      table,
      column: year.to_string(),
    })
}

/// A trimmed cell, or `None` when the cell is blank or the row is short.
pub(crate) fn text(record: &StringRecord, idx: usize) -> Option<String> {
  record
    .get(idx)
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_owned)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn finds_trimmed_and_bom_prefixed_headers() {
    let headers = StringRecord::from(vec!["\u{feff}Code", " Region ", "x"]);
    assert_eq!(find(&headers, CODE), Some(0));
    assert_eq!(find(&headers, REGION), Some(1));
    assert_eq!(find(&headers, INCOME_GROUP), None);
  }

  #[test]
  fn year_headers_accept_float_form() {
    let headers = StringRecord::from(vec!["Country", "1970.0", "1971"]);
    assert_eq!(require_year(EMISSIONS_TABLE, &headers, 1970).unwrap(), 1);
    assert_eq!(require_year(EMISSIONS_TABLE, &headers, 1971).unwrap(), 2);
    let err = require_year(EMISSIONS_TABLE, &headers, 1972).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "1972"));
  }
}
