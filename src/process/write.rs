use super::CountyPrice;
use crate::error::{EtlError, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::{
    fs::{self, File},
    path::Path,
};
use tracing::info;

pub const OUTPUT_HEADER: [&str; 2] = ["county", "median_sale_price"];

/// Write `rows` as comma-separated text with a header, overwriting `path`.
/// The header is written even for an empty result. Returns the row count.
pub fn write_clean<P: AsRef<Path>>(path: P, rows: &[CountyPrice]) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| EtlError::io(parent, e))?;
    }

    // header written by hand: serde only emits one alongside the first record
    let file = File::create(path).map_err(|e| EtlError::io(path, e))?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.write_record(OUTPUT_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|e| EtlError::io(path, e))?;

    info!(path = %path.display(), rows = rows.len(), "clean data written");
    Ok(rows.len())
}

/// Read an output file written by [`write_clean`].
pub fn read_clean<P: AsRef<Path>>(path: P) -> Result<Vec<CountyPrice>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| EtlError::io(path, e))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);
    rdr.deserialize()
        .collect::<std::result::Result<Vec<CountyPrice>, csv::Error>>()
        .map_err(Into::into)
}
