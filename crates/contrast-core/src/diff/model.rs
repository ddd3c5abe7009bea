//! Spec diff input types.
//!
//! Entries keep the order the comparison engine produced them in; the report
//! builder never re-sorts.

use serde::Deserialize;

use super::element::Element;
use crate::errors::Result;

/// Classified differences between two contracts
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecDiff {
    /// Differences between the requests (commands) of the two contracts
    #[serde(default)]
    pub requests: Vec<ElementDiff>,
    /// Differences between the types of the two contracts
    #[serde(default)]
    pub types: Vec<ElementDiff>,
}

/// How one request or type differs between contracts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum ElementDiff {
    Added { new: Element },
    Deleted { old: Element },
    Modified { old: Element, new: Element },
    /// Present and identical in both contracts; carried for completeness
    /// and never shown in a report
    NoChange { new: Element },
}

/// Discriminant of [`ElementDiff`], used to group entries into report sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Modified,
    Deleted,
    Added,
    NoChange,
}

impl SpecDiff {
    /// # Errors
    /// * `Serialization` - If `text` is not a valid spec diff document
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// True when neither requests nor types changed
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty() && self.types.is_empty()
    }
}

impl ElementDiff {
    pub fn kind(&self) -> ChangeKind {
        match self {
            ElementDiff::Added { .. } => ChangeKind::Added,
            ElementDiff::Deleted { .. } => ChangeKind::Deleted,
            ElementDiff::Modified { .. } => ChangeKind::Modified,
            ElementDiff::NoChange { .. } => ChangeKind::NoChange,
        }
    }

    /// The version of the element a title is taken from
    ///
    /// Deleted elements only exist in the old contract; everything else is
    /// named after the new contract.
    pub fn subject(&self) -> &Element {
        match self {
            ElementDiff::Added { new }
            | ElementDiff::Modified { new, .. }
            | ElementDiff::NoChange { new } => new,
            ElementDiff::Deleted { old } => old,
        }
    }
}
