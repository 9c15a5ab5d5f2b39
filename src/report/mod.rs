//! Device report ingestion
//!
//! # Modules
//!
//! - [`types`]: the typed record model, including the parsed-vs-raw state of
//!   the `apps` column
//! - [`loader`]: CSV ingestion

pub mod loader;
pub mod types;
