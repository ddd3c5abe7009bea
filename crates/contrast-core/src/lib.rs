//! Contrast Core - API contract diff reports
//!
//! This crate turns the classified differences between two versions of an
//! API contract into a navigable report model, and renders that model:
//! - Report model: rows with a fixed change status, nested sections, and an
//!   index tree validated against the body
//! - Row generation from contract element trees (added, deleted, modified)
//! - Report assembly in the canonical six-section layout
//! - Self-contained HTML, plain-text and JSON rendering
//!
//! Model constructors reject malformed input (negative indents, blank
//! labels or titles, an index that does not mirror the body) with
//! configuration-class errors, so a built report is always consistent.

pub mod config;
pub mod diff;
pub mod errors;
pub mod generate;
pub mod logging_facility;
pub mod model;
pub mod render;

pub use contrast_core_types::schema;

// Re-export commonly used types
pub use config::{RenderConfig, ReportConfig};
pub use diff::{Element, ElementDiff, SpecDiff};
pub use errors::{ContrastError, ExError, ExErrorKind, Result};
pub use generate::build_report;
pub use model::{Color, HtmlReport, IndexSection, Row, RowKind, Section, WalkEvent};
pub use render::{render_html, render_json, render_text};
