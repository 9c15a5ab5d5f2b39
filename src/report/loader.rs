//! CSV ingestion for device inventory reports
//!
//! Column order is fixed: `serial, model, rom, apps_count, apps`. There is no
//! header row; the first row is consumed as data. Short rows yield missing
//! fields rather than errors, and an `apps` column that does not decode as a
//! JSON array of objects is kept as raw text.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use csv::ReaderBuilder;
use tracing::{debug, info, warn};

use crate::report::types::{AppsField, Record};

const COL_SERIAL: usize = 0;
const COL_MODEL: usize = 1;
const COL_ROM: usize = 2;
const COL_APPS_COUNT: usize = 3;
const COL_APPS: usize = 4;

/// Load all records from a CSV report file.
///
/// Rows without a serial field and rows the CSV reader cannot decode are
/// skipped with a warning. An unreadable file is a fatal error.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<Record>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open report {}", path.display()))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let line = index + 1;
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!(line, %err, "skipping undecodable row");
                continue;
            }
        };
        let Some(serial) = row.get(COL_SERIAL) else {
            warn!(line, "skipping row without serial field");
            continue;
        };

        let apps = match row.get(COL_APPS) {
            None => AppsField::Missing,
            Some(raw) => match serde_json::from_str(raw) {
                Ok(entries) => AppsField::Parsed(entries),
                Err(err) => {
                    debug!(serial, %err, "apps column is not structured data");
                    AppsField::Raw(raw.to_string())
                }
            },
        };

        records.push(Record {
            serial: serial.to_string(),
            model: row.get(COL_MODEL).map(str::to_string),
            rom: row.get(COL_ROM).map(str::to_string),
            apps_count: row.get(COL_APPS_COUNT).map(str::to_string),
            apps,
        });
    }

    info!(count = records.len(), path = %path.display(), "loaded report");
    Ok(records)
}
