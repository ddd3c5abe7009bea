use serde::Serialize;

use crate::errors::{ContrastError, Result};

/// Value shown on the side of a row where the element does not exist
pub const NOT_APPLICABLE: &str = "N/A";

/// Color token applied to one side of a row
///
/// The renderer decides what each token looks like (CSS class, inline
/// style, terminal color); the model only carries the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    None,
    Added,
    Deleted,
    Changed,
}

/// Change status of a row together with the values it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum RowKind {
    /// Element only exists in the new contract
    Added { new_value: String },
    /// Element only exists in the old contract
    Deleted { old_value: String },
    /// Element exists in both contracts with different values
    Changed { old_value: String, new_value: String },
    /// Element exists in both contracts with the same value
    NoChange { value: String },
}

/// The observable cells of a row, derived from its [`RowKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub old_value: &'a str,
    pub new_value: &'a str,
    pub old_color: Color,
    pub new_color: Color,
}

impl RowKind {
    /// Derive the old/new values and colors for this change status
    pub fn resolve(&self) -> Resolved<'_> {
        match self {
            RowKind::Added { new_value } => Resolved {
                old_value: NOT_APPLICABLE,
                new_value,
                old_color: Color::None,
                new_color: Color::Added,
            },
            RowKind::Deleted { old_value } => Resolved {
                old_value,
                new_value: NOT_APPLICABLE,
                old_color: Color::Deleted,
                new_color: Color::None,
            },
            RowKind::Changed {
                old_value,
                new_value,
            } => Resolved {
                old_value,
                new_value,
                old_color: Color::Changed,
                new_color: Color::Changed,
            },
            RowKind::NoChange { value } => Resolved {
                old_value: value,
                new_value: value,
                old_color: Color::None,
                new_color: Color::None,
            },
        }
    }
}

/// One line of the report: the diff state of a single contract element
///
/// Rows are only built through the validated factories below, so a `Row`
/// value always has a non-negative indent and a non-blank label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    indent: u32,
    label: String,
    #[serde(flatten)]
    kind: RowKind,
}

impl Row {
    /// Build a row for an element that was added in the new contract
    ///
    /// # Errors
    /// * `NegativeIndent` - If `indent` is below zero
    /// * `EmptyLabel` - If `label` is blank
    pub fn added(
        indent: i64,
        label: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            indent,
            label.into(),
            RowKind::Added {
                new_value: new_value.into(),
            },
        )
    }

    /// Build a row for an element that was removed from the old contract
    ///
    /// # Errors
    /// * `NegativeIndent` - If `indent` is below zero
    /// * `EmptyLabel` - If `label` is blank
    pub fn deleted(
        indent: i64,
        label: impl Into<String>,
        old_value: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            indent,
            label.into(),
            RowKind::Deleted {
                old_value: old_value.into(),
            },
        )
    }

    /// Build a row for an element whose value differs between contracts
    ///
    /// # Errors
    /// * `NegativeIndent` - If `indent` is below zero
    /// * `EmptyLabel` - If `label` is blank
    pub fn changed(
        indent: i64,
        label: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            indent,
            label.into(),
            RowKind::Changed {
                old_value: old_value.into(),
                new_value: new_value.into(),
            },
        )
    }

    /// Build a row for an element that is identical in both contracts
    ///
    /// # Errors
    /// * `NegativeIndent` - If `indent` is below zero
    /// * `EmptyLabel` - If `label` is blank
    pub fn no_change(
        indent: i64,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            indent,
            label.into(),
            RowKind::NoChange {
                value: value.into(),
            },
        )
    }

    /// Validated factory shared by all variants
    ///
    /// # Errors
    /// * `NegativeIndent` - If `indent` is below zero (never clamped)
    /// * `IndentOutOfRange` - If `indent` does not fit in a `u32`
    /// * `EmptyLabel` - If `label` is blank
    pub fn new(indent: i64, label: String, kind: RowKind) -> Result<Self> {
        if indent < 0 {
            return Err(ContrastError::NegativeIndent { label, indent });
        }
        let checked = u32::try_from(indent).map_err(|_| ContrastError::IndentOutOfRange {
            label: label.clone(),
            indent,
        })?;
        if label.trim().is_empty() {
            return Err(ContrastError::EmptyLabel { indent });
        }

        Ok(Self {
            indent: checked,
            label,
            kind,
        })
    }

    pub fn indent(&self) -> u32 {
        self.indent
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &RowKind {
        &self.kind
    }

    /// Derived old/new values and colors
    pub fn resolve(&self) -> Resolved<'_> {
        self.kind.resolve()
    }

    pub fn old_value(&self) -> &str {
        self.resolve().old_value
    }

    pub fn new_value(&self) -> &str {
        self.resolve().new_value
    }

    pub fn old_color(&self) -> Color {
        self.resolve().old_color
    }

    pub fn new_color(&self) -> Color {
        self.resolve().new_color
    }
}
