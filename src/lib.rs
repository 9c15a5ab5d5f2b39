//! Query engine for device inventory CSV reports
//!
//! A report row carries a device serial, model, firmware (ROM) and the list
//! of installed applications. The crate filters those rows by application
//! criteria (package name, app name, version with optional comparison-operator
//! prefix) and device criteria (model and ROM substrings), then intersects
//! the two candidate sets.
//!
//! # Modules
//!
//! - [`report`]: CSV ingestion and the typed record model
//! - [`query`]: the matching engine (structural templates, version
//!   constraints, record filtering)

pub mod query;
pub mod report;
