//! Report configuration, loaded from TOML
//!
//! ```toml
//! starting_indent = 0
//! index_depth = 1
//!
//! [render]
//! title = "API contract changes"
//! added_style = "background-color:lightgreen;"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::errors::Result;

pub const DEFAULT_ADDED_STYLE: &str = "background-color:lightgreen;";
pub const DEFAULT_DELETED_STYLE: &str = "background-color:tomato;";
pub const DEFAULT_CHANGED_STYLE: &str = "background-color:khaki;";

/// Options for building a report from a spec diff
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Indent of the first row generated for each element
    pub starting_indent: i64,
    /// Levels of subsections listed under each top-level index entry
    pub index_depth: usize,
    pub render: RenderConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            starting_indent: 0,
            index_depth: 1,
            render: RenderConfig::default(),
        }
    }
}

/// Presentation options for the HTML renderer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Page title; the heading always shows `old VS new`
    pub title: String,
    pub added_style: String,
    pub deleted_style: String,
    pub changed_style: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Contract Comparison".to_string(),
            added_style: DEFAULT_ADDED_STYLE.to_string(),
            deleted_style: DEFAULT_DELETED_STYLE.to_string(),
            changed_style: DEFAULT_CHANGED_STYLE.to_string(),
        }
    }
}

impl ReportConfig {
    /// # Errors
    /// * `Config` - If the text is not valid TOML or has unknown keys
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// # Errors
    /// * `Io` - If the file cannot be read
    /// * `Config` - If the file is not a valid configuration
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
