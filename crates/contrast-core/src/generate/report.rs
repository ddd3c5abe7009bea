//! Report assembly from a spec diff
//!
//! The engine owns lifecycle logging for `build_report`; the row generators
//! below it stay silent.

use crate::config::ReportConfig;
use crate::diff::element::short_name;
use crate::diff::{ChangeKind, Element, ElementDiff, SpecDiff};
use crate::errors::Result;
use crate::model::{HtmlReport, Section};
use crate::{log_op_end, log_op_error, log_op_start};

use super::rows::{added_rows, deleted_rows, modified_rows};

/// Top-level section order: commands first, then types, each as
/// modified / deleted / added
const SECTION_ORDER: [(&str, Subject, ChangeKind); 6] = [
    ("Modified Commands", Subject::Request, ChangeKind::Modified),
    ("Deleted Commands", Subject::Request, ChangeKind::Deleted),
    ("Added Commands", Subject::Request, ChangeKind::Added),
    ("Modified Types", Subject::Type, ChangeKind::Modified),
    ("Deleted Types", Subject::Type, ChangeKind::Deleted),
    ("Added Types", Subject::Type, ChangeKind::Added),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    Request,
    Type,
}

/// Build the full report for one comparison run
///
/// Produces six top-level sections in fixed order, each holding one
/// subsection per matching diff in input order. The index is projected from
/// the body at `config.index_depth`.
///
/// # Errors
/// * `NegativeIndent` - If `config.starting_indent` is below zero
/// * `EmptyTitle` - If a diffed element has no name to title its section
/// * `EmptyLabel` - If an element has a field with a blank name
/// * `EmptyContractId` - If either contract identifier is blank
pub fn build_report(
    old_contract: &str,
    new_contract: &str,
    diff: &SpecDiff,
    config: &ReportConfig,
) -> Result<HtmlReport> {
    log_op_start!(
        "build_report",
        old_contract = old_contract,
        new_contract = new_contract
    );
    let start = std::time::Instant::now();

    let report = build_report_impl(old_contract, new_contract, diff, config).map_err(|e| {
        log_op_error!(
            "build_report",
            &e,
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "build_report",
        duration_ms = start.elapsed().as_millis() as u64,
        section_count = report.sections().len() as u64,
        row_count = report.row_count() as u64
    );
    Ok(report)
}

fn build_report_impl(
    old_contract: &str,
    new_contract: &str,
    diff: &SpecDiff,
    config: &ReportConfig,
) -> Result<HtmlReport> {
    let mut sections = Vec::with_capacity(SECTION_ORDER.len());
    for (title, subject, kind) in SECTION_ORDER {
        let diffs = match subject {
            Subject::Request => &diff.requests,
            Subject::Type => &diff.types,
        };
        let tables = diffs
            .iter()
            .filter(|d| d.kind() == kind)
            .map(|d| diff_section(d, subject, config.starting_indent))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(section_title = title, tables = tables.len(), "Built section");
        sections.push(Section::new(title, Vec::new(), tables)?);
    }

    HtmlReport::with_derived_index(old_contract, new_contract, sections, config.index_depth)
}

fn diff_section(diff: &ElementDiff, subject: Subject, indent: i64) -> Result<Section> {
    let title = match subject {
        Subject::Request => request_title(diff.subject()),
        Subject::Type => type_title(diff.subject()),
    };
    let rows = match diff {
        ElementDiff::Added { new } => added_rows(new, indent)?,
        ElementDiff::Deleted { old } => deleted_rows(old, indent)?,
        ElementDiff::Modified { old, new } => modified_rows(old, new, indent)?,
        ElementDiff::NoChange { new } => modified_rows(new, new, indent)?,
    };
    Section::new(title, rows, Vec::new())
}

/// `Name (classification)`, or just `Name` for unclassified requests
pub fn request_title(request: &Element) -> String {
    let name = type_title(request);
    match request.display_value("classification") {
        Some(classification) => format!("{} ({})", name, classification),
        None => name,
    }
}

/// Short name of the element, falling back to its key value
pub fn type_title(element: &Element) -> String {
    element
        .display_value("name")
        .or_else(|| element.key().map(|k| short_name(k).to_string()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ContrastError;
    use serde_json::json;

    fn diff(value: serde_json::Value) -> SpecDiff {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_six_sections_in_fixed_order() {
        let report = build_report("v1", "v2", &SpecDiff::default(), &ReportConfig::default())
            .unwrap();

        let titles: Vec<_> = report.sections().iter().map(Section::title).collect();
        assert_eq!(
            titles,
            vec![
                "Modified Commands",
                "Deleted Commands",
                "Added Commands",
                "Modified Types",
                "Deleted Types",
                "Added Types",
            ]
        );
        assert_eq!(report.row_count(), 0);
        assert_eq!(report.index_sections().len(), 6);
    }

    #[test]
    fn test_diffs_routed_by_kind() {
        let spec = diff(json!({
            "requests": [
                {"change": "added", "new": {"name": "com.example.GetBucket", "classification": "spectrads3"}},
                {"change": "deleted", "old": {"name": "DeleteJob"}}
            ],
            "types": [
                {"change": "modified",
                 "old": {"name": "com.example.Bucket", "size": "1"},
                 "new": {"name": "com.example.Bucket", "size": "2"}}
            ]
        }));
        let report = build_report("v1", "v2", &spec, &ReportConfig::default()).unwrap();
        let sections = report.sections();

        assert_eq!(sections[1].subsections()[0].title(), "DeleteJob");
        assert_eq!(sections[2].subsections()[0].title(), "GetBucket (spectrads3)");
        assert_eq!(sections[3].subsections()[0].title(), "Bucket");
        assert!(sections[0].subsections().is_empty());
        assert_eq!(
            report.index_sections()[2].subsections()[0].title(),
            "GetBucket (spectrads3)"
        );
    }

    #[test]
    fn test_unchanged_entries_skipped() {
        let spec = diff(json!({
            "requests": [{"change": "no_change", "new": {"name": "GetService"}}],
            "types": [
                {"change": "no_change", "new": {"name": "com.example.Bucket"}},
                {"change": "added", "new": {"name": "com.example.Tape"}}
            ]
        }));
        let report = build_report("v1", "v2", &spec, &ReportConfig::default()).unwrap();

        let tables: usize = report.sections().iter().map(|s| s.subsections().len()).sum();
        assert_eq!(tables, 1);
        assert_eq!(report.sections()[5].subsections()[0].title(), "Tape");
        assert_eq!(report.sections().len(), 6);
    }

    #[test]
    fn test_starting_indent_applied() {
        let spec = diff(json!({"types": [{"change": "added", "new": {"name": "A", "type": "x"}}]}));
        let config = ReportConfig {
            starting_indent: 2,
            ..ReportConfig::default()
        };
        let report = build_report("v1", "v2", &spec, &config).unwrap();
        let rows = report.sections()[5].subsections()[0].rows();

        assert_eq!(rows[0].indent(), 2);
        assert_eq!(rows[1].indent(), 3);
    }

    #[test]
    fn test_unnamed_element_fails() {
        let spec = diff(json!({"types": [{"change": "added", "new": {"size": "1"}}]}));
        let result = build_report("v1", "v2", &spec, &ReportConfig::default());

        assert!(matches!(result, Err(ContrastError::EmptyTitle { .. })));
    }
}
