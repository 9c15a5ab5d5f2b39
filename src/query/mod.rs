//! Matching engine for device report queries
//!
//! Two independent filters produce candidate serial sets which are then
//! intersected:
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐
//! │   Matcher   │◀────│    Filter    │────▶ serials (app criteria)
//! │ (templates) │     │ (record set) │────▶ serials (model/ROM)
//! └─────────────┘     └──────────────┘
//!        ▲                    │
//!        │                    ▼
//! ┌─────────────┐      intersection
//! │   Version   │
//! │(constraints)│
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`version`]: version-constraint parsing and digit-based comparison
//! - [`matcher`]: structural equality and template matching over JSON values
//! - [`filter`]: record filtering and candidate-set intersection
//! - [`error`]: error types for query evaluation

pub mod error;
pub mod filter;
pub mod matcher;
pub mod version;
