//! Report renderers
//!
//! Renderers only read the report model; nothing here can change it.

pub mod html;
pub mod text;

pub use html::{html_escape, render_html, slug};
pub use text::render_text;

use crate::errors::Result;
use crate::model::HtmlReport;

/// Pretty-printed JSON form of the report model
///
/// # Errors
/// * `Serialization` - If serialization fails
pub fn render_json(report: &HtmlReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
