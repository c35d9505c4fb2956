//! Catalog asset parsing.
//!
//! # Responsibility
//! - Open the bundled asset and deserialize it with an explicit serde schema.
//! - Classify failures as `AssetMissing` or `MalformedCatalog`.
//! - Log every entry point (file, reader, str) with the same `catalog_load` events.
//!
//! # Invariants
//! - No partial recovery and no per-record skipping.
//! - Nothing is cached between calls.
//!
//! # Side effects
//! - Emits `catalog_load` logging events with duration and status.

use super::{Catalog, CatalogError, CatalogResult};
use crate::model::record::Record;
use log::{error, info};
use serde_json::error::Category;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

/// Loads the catalog from an asset file.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let started_at = Instant::now();
    info!("event=catalog_load module=catalog status=start mode=file");

    let result = File::open(path)
        .map_err(|error| CatalogError::AssetMissing {
            origin: origin.clone(),
            error,
        })
        .and_then(|file| parse_reader(&origin, BufReader::new(file)));

    log_outcome("file", started_at, &result);
    result
}

/// Loads the catalog from any byte source, e.g. a platform asset stream.
pub fn load_catalog_from_reader(origin: &str, reader: impl Read) -> CatalogResult<Catalog> {
    let started_at = Instant::now();
    info!("event=catalog_load module=catalog status=start mode=reader");

    let result = parse_reader(origin, reader);

    log_outcome("reader", started_at, &result);
    result
}

/// Loads the catalog from text already held in memory.
pub fn load_catalog_from_str(origin: &str, json: &str) -> CatalogResult<Catalog> {
    let started_at = Instant::now();
    info!("event=catalog_load module=catalog status=start mode=str");

    let result = serde_json::from_str::<Vec<Record>>(json)
        .map_err(|err| CatalogError::malformed(origin, err.to_string()))
        .and_then(|records| Catalog::from_records(origin, records));

    log_outcome("str", started_at, &result);
    result
}

fn parse_reader(origin: &str, reader: impl Read) -> CatalogResult<Catalog> {
    let records: Vec<Record> =
        serde_json::from_reader(reader).map_err(|err| classify_json_error(origin, err))?;
    Catalog::from_records(origin, records)
}

fn classify_json_error(origin: &str, err: serde_json::Error) -> CatalogError {
    match err.classify() {
        Category::Io => CatalogError::AssetMissing {
            origin: origin.to_string(),
            error: err.into(),
        },
        Category::Syntax | Category::Data | Category::Eof => {
            CatalogError::malformed(origin, err.to_string())
        }
    }
}

fn log_outcome(mode: &str, started_at: Instant, result: &CatalogResult<Catalog>) {
    match result {
        Ok(catalog) => info!(
            "event=catalog_load module=catalog status=ok mode={} duration_ms={} records={}",
            mode,
            started_at.elapsed().as_millis(),
            catalog.len()
        ),
        Err(err) => error!(
            "event=catalog_load module=catalog status=error mode={} duration_ms={} error_code={} error={}",
            mode,
            started_at.elapsed().as_millis(),
            err.kind().code(),
            err
        ),
    }
}
