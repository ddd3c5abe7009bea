//! Plain-text rendering of a diff report for terminals and logs
//!
//! One heading per section and one line per row, driven by the report's
//! canonical walk. Top-level sections without content are left out.

use crate::model::{Color, HtmlReport, Row, RowKind, WalkEvent};
use crate::{log_op_end, log_op_start};

/// Spaces per nesting level, for both section depth and row indent
const INDENT_WIDTH: usize = 2;

/// Render the report as plain text
pub fn render_text(report: &HtmlReport) -> String {
    log_op_start!(
        "render_text",
        section_count = report.sections().len() as u64
    );
    let start = std::time::Instant::now();

    let mut output = format!("{} VS {}\n", report.old_contract(), report.new_contract());
    let mut skipping = false;

    for event in report.walk() {
        match event {
            WalkEvent::Enter { depth: 0, section } => {
                skipping = section.is_empty();
                if !skipping {
                    output.push('\n');
                    output.push_str(section.title());
                    output.push('\n');
                    output.push_str(&"=".repeat(section.title().chars().count()));
                    output.push('\n');
                }
            }
            WalkEvent::Enter { depth, section } => {
                if !skipping {
                    output.push_str(&" ".repeat(INDENT_WIDTH * depth));
                    output.push_str(section.title());
                    output.push('\n');
                }
            }
            WalkEvent::Row { depth, row } => {
                if !skipping {
                    output.push_str(&render_line(row, depth));
                }
            }
            WalkEvent::Exit { .. } => {}
        }
    }

    log_op_end!(
        "render_text",
        duration_ms = start.elapsed().as_millis() as u64,
        bytes = output.len() as u64
    );
    output
}

fn render_line(row: &Row, depth: usize) -> String {
    let pad = " ".repeat(INDENT_WIDTH * (depth + row.indent() as usize));
    let resolved = row.resolve();
    match row.kind() {
        RowKind::NoChange { value } => format!("  {}{}: {}\n", pad, row.label(), value),
        _ => format!(
            "{} {}{}: {} -> {}\n",
            marker(row),
            pad,
            row.label(),
            resolved.old_value,
            resolved.new_value
        ),
    }
}

fn marker(row: &Row) -> char {
    match (row.old_color(), row.new_color()) {
        (_, Color::Added) => '+',
        (Color::Deleted, _) => '-',
        (Color::Changed, _) | (_, Color::Changed) => '~',
        _ => ' ',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;

    fn report() -> HtmlReport {
        let bucket = Section::new(
            "Bucket",
            vec![
                Row::no_change(0, "name", "Bucket").unwrap(),
                Row::changed(1, "size", "1", "2").unwrap(),
                Row::added(1, "owner", "root").unwrap(),
                Row::deleted(1, "region", "eu").unwrap(),
            ],
            vec![],
        )
        .unwrap();
        let sections = vec![
            Section::new("Modified Types", vec![], vec![bucket]).unwrap(),
            Section::new("Added Types", vec![], vec![]).unwrap(),
        ];
        HtmlReport::with_derived_index("v1.json", "v2.json", sections, 1).unwrap()
    }

    #[test]
    fn test_lines_are_marked_by_change() {
        let text = render_text(&report());

        assert!(text.starts_with("v1.json VS v2.json\n"));
        assert!(text.contains("\nModified Types\n==============\n"));
        assert!(text.contains("\n  Bucket\n"));
        assert!(text.contains("\n    name: Bucket\n"));
        assert!(text.contains("\n~     size: 1 -> 2\n"));
        assert!(text.contains("\n+     owner: N/A -> root\n"));
        assert!(text.contains("\n-     region: eu -> N/A\n"));
    }

    #[test]
    fn test_empty_top_level_sections_are_skipped() {
        let text = render_text(&report());
        assert!(!text.contains("Added Types"));
    }
}
