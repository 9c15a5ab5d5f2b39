//! Record filtering and candidate-set intersection
//!
//! Two independent filters run over the loaded record set: one for
//! application criteria (package/name/version), one for device criteria
//! (model/ROM substrings). A full query intersects their serial sets.

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use tracing::debug;

use crate::query::error::VersionError;
use crate::query::matcher::filter_by_template;
use crate::query::version::{self, CompareOp};
use crate::report::types::{AppsField, Record};

/// One query invocation's criteria. `None` means "Any".
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub package: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub model: Option<String>,
    pub rom: Option<String>,
}

/// Filters a loaded record set.
///
/// The records are an explicit constructor dependency; nothing here reads
/// ambient state, and records are never mutated.
pub struct RecordFilter<'a> {
    records: &'a [Record],
}

impl<'a> RecordFilter<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self { records }
    }

    /// Run a full query: the intersection of the app-criteria and
    /// model/ROM-criteria serial sets, sorted ascending.
    pub fn search(&self, query: &Query) -> Result<Vec<String>, VersionError> {
        let by_app = self.serials_by_app(
            query.package.as_deref(),
            query.name.as_deref(),
            query.version.as_deref(),
        )?;
        let by_device = self.serials_by_model_rom(query.model.as_deref(), query.rom.as_deref());
        Ok(by_app.intersection(&by_device).cloned().collect())
    }

    /// Serials of records with at least one installed app matching the
    /// package/name/version criteria.
    ///
    /// Records whose `apps` column did not parse as structured data never
    /// match. When `version` carries a comparison operator, the FIRST entry
    /// matching the package/name template decides the comparison and the
    /// plain template path is not consulted afterwards.
    pub fn serials_by_app(
        &self,
        package: Option<&str>,
        name: Option<&str>,
        version: Option<&str>,
    ) -> Result<BTreeSet<String>, VersionError> {
        let (op, remainder) = version::parse_constraint(version);

        let mut template = Map::new();
        if let Some(package) = package {
            template.insert(
                "packageName".to_string(),
                Value::String(package.to_string()),
            );
        }
        if let Some(name) = name {
            template.insert("appName".to_string(), Value::String(name.to_string()));
        }

        if let Some(op) = op {
            // parse_constraint only reports an operator for non-null input,
            // so a remainder is always present here
            let wanted = remainder.unwrap_or_default();
            return self.serials_by_app_version(&template, &wanted, op);
        }

        if let Some(version) = remainder {
            template.insert("versionName".to_string(), Value::String(version));
        }

        let mut serials = BTreeSet::new();
        for record in self.records {
            if let AppsField::Parsed(apps) = &record.apps
                && !filter_by_template(&template, apps).is_empty()
            {
                serials.insert(record.serial.clone());
            }
        }
        debug!(count = serials.len(), "app filter candidates");
        Ok(serials)
    }

    /// The operator path: the first app entry matching `template` is compared
    /// against `wanted` under `op`.
    fn serials_by_app_version(
        &self,
        template: &Map<String, Value>,
        wanted: &str,
        op: CompareOp,
    ) -> Result<BTreeSet<String>, VersionError> {
        let mut serials = BTreeSet::new();
        for record in self.records {
            let AppsField::Parsed(apps) = &record.apps else {
                continue;
            };
            let matched = filter_by_template(template, apps);
            let Some(first) = matched.first() else {
                continue;
            };
            let Some(installed) = first.get("versionName").and_then(Value::as_str) else {
                debug!(serial = %record.serial, "matched app entry has no versionName, skipping");
                continue;
            };
            if version::compare(installed, wanted, op)? {
                serials.insert(record.serial.clone());
            }
        }
        debug!(count = serials.len(), "app version filter candidates");
        Ok(serials)
    }

    /// Serials of records whose model/ROM fields contain the given
    /// substrings.
    ///
    /// Both criteria unset matches every record. Records missing a consulted
    /// field are silently skipped, indistinguishable from a non-match.
    pub fn serials_by_model_rom(
        &self,
        model: Option<&str>,
        rom: Option<&str>,
    ) -> BTreeSet<String> {
        let mut serials = BTreeSet::new();
        for record in self.records {
            let hit = match (model, rom) {
                (None, None) => true,
                (Some(m), Some(r)) => match (&record.model, &record.rom) {
                    (Some(field_m), Some(field_r)) => {
                        field_m.contains(m) && field_r.contains(r)
                    }
                    _ => false,
                },
                (Some(m), None) => record.model.as_deref().is_some_and(|f| f.contains(m)),
                (None, Some(r)) => record.rom.as_deref().is_some_and(|f| f.contains(r)),
            };
            if hit {
                serials.insert(record.serial.clone());
            }
        }
        debug!(count = serials.len(), "model/rom filter candidates");
        serials
    }
}
