// src/process/mod.rs
pub mod date_parser;
pub mod filter;
pub mod utils;
pub mod write;

pub use filter::{transform, transform_with_summary, TransformSummary};
pub use write::{read_clean, write_clean};

use crate::error::{EtlError, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, info};

/// Columns the loader projects out of the raw file. Anything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "period_end",
    "region_type",
    "region_name",
    "duration",
    "median_sale_price",
];

/// One row of the weekly dataset, reduced to the projected columns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(deserialize_with = "date_parser::deserialize_period_end")]
    pub period_end: NaiveDate,
    pub region_type: String,
    pub region_name: String,
    pub duration: String,
    #[serde(deserialize_with = "utils::deserialize_nullable_f64")]
    pub median_sale_price: Option<f64>,
}

/// A row of the cleaned output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyPrice {
    pub county: String,
    pub median_sale_price: f64,
}

/// Load the raw tab-separated file at `path`.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_raw<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| EtlError::io(path, e))?;
    let records = read_raw(file)?;
    info!(rows = records.len(), "loaded raw data");
    Ok(records)
}

/// Parse raw TSV from any reader. Fails before reading rows if a required
/// column is absent from the header.
pub fn read_raw<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(EtlError::MissingColumns(missing));
    }
    debug!(columns = headers.len(), "header ok");

    rdr.deserialize()
        .collect::<std::result::Result<Vec<RawRecord>, csv::Error>>()
        .map_err(Into::into)
}
