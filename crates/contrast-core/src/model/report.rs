use serde::Serialize;

use super::index::{check_alignment, IndexSection};
use super::section::{Section, WalkEvent};
use crate::errors::{ContrastError, Result};

/// The complete diff report for one comparison run
///
/// Built once after the comparison finishes and handed to a renderer, which
/// only reads it. The index is validated against the body at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlReport {
    old_contract: String,
    new_contract: String,
    index_sections: Vec<IndexSection>,
    sections: Vec<Section>,
}

impl HtmlReport {
    /// Assemble a report from an index and a body built by the caller
    ///
    /// Both lists may be empty; a report without content is still valid.
    ///
    /// # Errors
    /// * `EmptyContractId` - If either contract identifier is blank
    /// * `IndexCountMismatch` / `IndexTitleMismatch` - If the index does not
    ///   mirror the body position by position
    pub fn new(
        old_contract: impl Into<String>,
        new_contract: impl Into<String>,
        index_sections: Vec<IndexSection>,
        sections: Vec<Section>,
    ) -> Result<Self> {
        let old_contract = old_contract.into();
        let new_contract = new_contract.into();
        if old_contract.trim().is_empty() {
            return Err(ContrastError::EmptyContractId { side: "old" });
        }
        if new_contract.trim().is_empty() {
            return Err(ContrastError::EmptyContractId { side: "new" });
        }
        check_alignment(&index_sections, &sections)?;

        Ok(Self {
            old_contract,
            new_contract,
            index_sections,
            sections,
        })
    }

    /// Assemble a report whose index is projected from `sections`
    ///
    /// Each top-level section keeps `index_depth` levels of children in the index.
    ///
    /// # Errors
    /// * `EmptyContractId` - If either contract identifier is blank
    pub fn with_derived_index(
        old_contract: impl Into<String>,
        new_contract: impl Into<String>,
        sections: Vec<Section>,
        index_depth: usize,
    ) -> Result<Self> {
        let index_sections = sections
            .iter()
            .map(|s| IndexSection::project(s, index_depth))
            .collect();
        Self::new(old_contract, new_contract, index_sections, sections)
    }

    pub fn old_contract(&self) -> &str {
        &self.old_contract
    }

    pub fn new_contract(&self) -> &str {
        &self.new_contract
    }

    pub fn index_sections(&self) -> &[IndexSection] {
        &self.index_sections
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Canonical pre-order walk over every top-level section in order
    pub fn walk(&self) -> impl Iterator<Item = WalkEvent<'_>> {
        self.sections.iter().flat_map(Section::walk)
    }

    /// Total number of rows in the report body
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(Section::row_count).sum()
    }

    /// True when the report carries no sections at all
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    #[test]
    fn test_degenerate_report() {
        let report = HtmlReport::new("v1.json", "v2.json", vec![], vec![]).unwrap();

        assert!(report.is_empty());
        assert_eq!(report.row_count(), 0);
        assert_eq!(report.walk().count(), 0);
    }

    #[test]
    fn test_blank_contract_id_rejected() {
        assert!(matches!(
            HtmlReport::new("", "v2", vec![], vec![]),
            Err(ContrastError::EmptyContractId { side: "old" })
        ));
        assert!(matches!(
            HtmlReport::new("v1", " ", vec![], vec![]),
            Err(ContrastError::EmptyContractId { side: "new" })
        ));
    }

    #[test]
    fn test_mismatched_index_rejected() {
        let sections = vec![Section::new("Added Types", vec![], vec![]).unwrap()];
        let index = vec![IndexSection::new("Deleted Types", vec![]).unwrap()];

        let result = HtmlReport::new("v1", "v2", index, sections);
        assert!(result.unwrap_err().is_config_error());
    }

    #[test]
    fn test_derived_index_mirrors_body() {
        let bucket = Section::new("Bucket", vec![Row::added(0, "name", "x").unwrap()], vec![])
            .unwrap();
        let sections = vec![Section::new("Added Types", vec![], vec![bucket]).unwrap()];

        let report = HtmlReport::with_derived_index("v1", "v2", sections, 1).unwrap();

        assert_eq!(report.index_sections().len(), 1);
        assert_eq!(report.index_sections()[0].title(), "Added Types");
        assert_eq!(report.index_sections()[0].subsections()[0].title(), "Bucket");
        assert_eq!(report.row_count(), 1);
    }
}
