//! Core types and transforms for the GHG emissions dashboard.
//!
//! This crate is deliberately free of HTTP, file-format and charting
//! dependencies. Raw rows come in through a [`source::DataSource`]; the
//! immutable [`dataset::Dataset`] comes out, and every other crate reads from
//! it.

pub mod dataset;
pub mod error;
pub mod record;
pub mod selection;
pub mod source;

pub use dataset::{BuildOptions, Dataset, DatasetSummary};
pub use error::{Error, Result};
pub use record::{ContinentAggregate, EmissionsRecord, EmissionsRow, IncomeRow};
pub use selection::Tab;
pub use source::{DataSource, MemorySource};

#[cfg(test)]
mod test_support;
