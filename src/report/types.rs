//! Typed record model for the device inventory report

use serde_json::{Map, Value};

/// One installed-application entry from the `apps` column.
///
/// Entries carry at least `packageName`, `appName` and `versionName` in
/// practice, but no schema is enforced beyond the keys queries reference.
pub type AppEntry = Map<String, Value>;

/// Parsed-vs-raw state of the `apps` column
#[derive(Debug, Clone, PartialEq)]
pub enum AppsField {
    /// Column decoded as a JSON array of app entries
    Parsed(Vec<AppEntry>),
    /// Column present but not decodable as structured data; excluded from
    /// app-based queries
    Raw(String),
    /// Column absent
    Missing,
}

/// One row of the device inventory report. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Unique device identifier, the primary output unit
    pub serial: String,
    pub model: Option<String>,
    pub rom: Option<String>,
    /// Informational only, never queried
    pub apps_count: Option<String>,
    pub apps: AppsField,
}
