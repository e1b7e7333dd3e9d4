//! CSV loader for the GHG emissions dashboard.
//!
//! Reads the two input tables (the EDGAR `GHG_totals_by_country` sheet and
//! the World Bank `List of economies` sheet, each exported to CSV) into
//! [`ghg_core`] rows. Columns are located by header name, so extra columns
//! and reordering are tolerated.

mod columns;
mod reader;
mod source;

pub mod error;

pub use error::{Error, Result};
pub use reader::{read_emissions, read_income};
pub use source::CsvSource;
