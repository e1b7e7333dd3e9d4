//! Table readers over any `io::Read`.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use ghg_core::record::{EmissionsRow, IncomeRow, years};

use crate::{
  columns::{self, EMISSIONS_TABLE, INCOME_TABLE},
  error::{Error, Result},
};

fn reader<R: Read>(input: R) -> csv::Reader<R> {
  ReaderBuilder::new()
    .has_headers(true)
    .flexible(true)
    .trim(Trim::All)
    .from_reader(input)
}

fn headers<R: Read>(
  table: &'static str,
  rdr: &mut csv::Reader<R>,
) -> Result<StringRecord> {
  rdr
    .headers()
    .cloned()
    .map_err(|source| Error::Csv { table, source })
}

fn is_blank(record: &StringRecord) -> bool {
  record.iter().all(|f| f.trim().is_empty())
}

/// Parse a yearly cell. Blank and `NaN` cells are missing values.
fn number(
  table: &'static str,
  record: &StringRecord,
  idx: usize,
  column: u16,
) -> Result<Option<f64>> {
  let Some(raw) = columns::text(record, idx) else {
    return Ok(None);
  };
  if raw.eq_ignore_ascii_case("nan") {
    return Ok(None);
  }
  match raw.parse::<f64>() {
    Ok(v) if v.is_finite() => Ok(Some(v)),
    _ => Err(Error::InvalidNumber {
      table,
      line: record.position().map_or(0, |p| p.line()),
      column: column.to_string(),
      value: raw,
    }),
  }
}

/// Read the emissions-by-country table.
///
/// Required columns: `EDGAR Country Code`, `Country`, and every year from
/// 1970 to 2023. Fully blank lines are skipped.
pub fn read_emissions<R: Read>(input: R) -> Result<Vec<EmissionsRow>> {
  let table = EMISSIONS_TABLE;
  let mut rdr = reader(input);
  let headers = headers(table, &mut rdr)?;

  let code_idx = columns::require(table, &headers, columns::COUNTRY_CODE)?;
  let name_idx = columns::require(table, &headers, columns::COUNTRY)?;
  let year_idx: Vec<(u16, usize)> = years()
    .map(|y| columns::require_year(table, &headers, y).map(|idx| (y, idx)))
    .collect::<Result<_>>()?;

  let mut rows = Vec::new();
  for result in rdr.records() {
    let record = result.map_err(|source| Error::Csv { table, source })?;
    if is_blank(&record) {
      continue;
    }
    let yearly = year_idx
      .iter()
      .map(|&(year, idx)| number(table, &record, idx, year))
      .collect::<Result<Vec<_>>>()?;
    rows.push(EmissionsRow {
      country_code: columns::text(&record, code_idx).unwrap_or_default(),
      country_name: columns::text(&record, name_idx).unwrap_or_default(),
      yearly,
    });
  }
  Ok(rows)
}

/// Read the income-classification table.
///
/// Only `Code` is required; `Region` and `Income group` are optional. Other
/// columns are ignored.
pub fn read_income<R: Read>(input: R) -> Result<Vec<IncomeRow>> {
  let table = INCOME_TABLE;
  let mut rdr = reader(input);
  let headers = headers(table, &mut rdr)?;

  let code_idx = columns::require(table, &headers, columns::CODE)?;
  let region_idx = columns::find(&headers, columns::REGION);
  let group_idx = columns::find(&headers, columns::INCOME_GROUP);

  let optional = |record: &StringRecord, idx: Option<usize>| {
    idx.and_then(|i| columns::text(record, i))
  };

  let mut rows = Vec::new();
  for result in rdr.records() {
    let record = result.map_err(|source| Error::Csv { table, source })?;
    if is_blank(&record) {
      continue;
    }
    rows.push(IncomeRow {
      code:         columns::text(&record, code_idx).unwrap_or_default(),
      region:       optional(&record, region_idx),
      income_group: optional(&record, group_idx),
    });
  }
  Ok(rows)
}
