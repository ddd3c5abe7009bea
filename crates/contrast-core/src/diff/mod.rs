//! Comparison output consumed by the report builder.
//!
//! The comparison engine that decides which contract elements changed is
//! an external collaborator; these types are the shape of its result.
//!
//! ```ignore
//! use contrast_core::diff::SpecDiff;
//!
//! let diff = SpecDiff::from_json_str(&text)?;
//! let report = contrast_core::generate::build_report("v1", "v2", &diff, &config)?;
//! ```

pub mod element;
pub mod model;

pub use element::{short_name, Element, Field, FieldValue};
pub use model::{ChangeKind, ElementDiff, SpecDiff};
