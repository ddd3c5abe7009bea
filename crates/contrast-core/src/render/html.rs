//! Self-contained HTML rendering of a diff report
//!
//! The page has a heading naming both contracts, an index table linking to
//! every section, and one three-column table (label, old, new) per section
//! that carries rows. Everything is produced from the report's canonical
//! walk plus its index tree.

use std::collections::{HashMap, HashSet};

use crate::config::RenderConfig;
use crate::model::{Color, HtmlReport, IndexSection, Row, WalkEvent};
use crate::{log_op_end, log_op_start};

const INLINE_CSS: &str = "body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; margin-bottom: 1.5em; }
th, td { border: 1px solid #aaa; padding: 2px 8px; text-align: left; }
th { background-color: #eee; }";

/// Render the report as a complete HTML page
pub fn render_html(report: &HtmlReport, config: &RenderConfig) -> String {
    log_op_start!(
        "render_html",
        section_count = report.sections().len() as u64
    );
    let start = std::time::Instant::now();

    let anchors = Anchors::assign(report);
    let page = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
{css}
</style>
</head>
<body>
<h1>{old} VS {new}</h1>
<h2>Index</h2>
<table>
{index}</table>
{body}</body>
</html>
"#,
        title = html_escape(&config.title),
        css = INLINE_CSS,
        old = html_escape(report.old_contract()),
        new = html_escape(report.new_contract()),
        index = render_index(report.index_sections(), &anchors),
        body = render_body(report, &anchors, config),
    );

    log_op_end!(
        "render_html",
        duration_ms = start.elapsed().as_millis() as u64,
        bytes = page.len() as u64
    );
    page
}

/// Anchor ids for every section, assigned in walk order
struct Anchors {
    ordered: Vec<String>,
    by_path: HashMap<Vec<usize>, usize>,
}

impl Anchors {
    fn assign(report: &HtmlReport) -> Self {
        let mut ordered = Vec::new();
        let mut by_path = HashMap::new();
        let mut issued: HashSet<String> = HashSet::new();
        let mut path: Vec<usize> = Vec::new();

        for event in report.walk() {
            let WalkEvent::Enter { depth, section } = event else {
                continue;
            };
            if path.len() > depth {
                path.truncate(depth + 1);
                path[depth] += 1;
            } else {
                path.push(0);
            }

            let base = slug(section.title());
            let mut anchor = base.clone();
            let mut n = 1;
            while !issued.insert(anchor.clone()) {
                n += 1;
                anchor = format!("{}-{}", base, n);
            }
            by_path.insert(path.clone(), ordered.len());
            ordered.push(anchor);
        }

        Self { ordered, by_path }
    }

    fn nth(&self, n: usize) -> Option<&str> {
        self.ordered.get(n).map(String::as_str)
    }

    fn at(&self, path: &[usize]) -> Option<&str> {
        self.by_path.get(path).and_then(|&n| self.nth(n))
    }
}

fn render_index(entries: &[IndexSection], anchors: &Anchors) -> String {
    let mut output = String::new();
    let mut path = Vec::new();
    push_index_level(&mut output, entries, anchors, &mut path);
    output
}

fn push_index_level(
    output: &mut String,
    entries: &[IndexSection],
    anchors: &Anchors,
    path: &mut Vec<usize>,
) {
    for (i, entry) in entries.iter().enumerate() {
        path.push(i);
        let title = html_escape(entry.title());
        let link = match anchors.at(path) {
            Some(anchor) => format!("<a href=\"#{}\">{}</a>", anchor, title),
            None => title,
        };
        if path.len() == 1 {
            output.push_str(&format!("<tr><th>{}</th></tr>\n", link));
        } else {
            output.push_str(&format!(
                "<tr><td style=\"padding-left:{}em;\">{}</td></tr>\n",
                path.len() - 2,
                link
            ));
        }
        push_index_level(output, entry.subsections(), anchors, path);
        path.pop();
    }
}

fn render_body(report: &HtmlReport, anchors: &Anchors, config: &RenderConfig) -> String {
    let mut output = String::new();
    let mut entered = 0;
    let mut table_open = false;
    let old = html_escape(report.old_contract());
    let new = html_escape(report.new_contract());

    for event in report.walk() {
        match event {
            WalkEvent::Enter { depth, section } => {
                close_table(&mut output, &mut table_open);
                let level = (depth + 2).min(6);
                let id = anchors.nth(entered).unwrap_or_default();
                entered += 1;
                output.push_str(&format!(
                    "<h{level} id=\"{id}\">{title}</h{level}>\n",
                    level = level,
                    id = id,
                    title = html_escape(section.title())
                ));
            }
            WalkEvent::Row { row, .. } => {
                if !table_open {
                    output.push_str(&format!(
                        "<table>\n<tr><th>Label</th><th>{}</th><th>{}</th></tr>\n",
                        old, new
                    ));
                    table_open = true;
                }
                output.push_str(&render_row(row, config));
            }
            WalkEvent::Exit { .. } => close_table(&mut output, &mut table_open),
        }
    }
    output
}

fn close_table(output: &mut String, table_open: &mut bool) {
    if *table_open {
        output.push_str("</table>\n");
        *table_open = false;
    }
}

fn render_row(row: &Row, config: &RenderConfig) -> String {
    let resolved = row.resolve();
    format!(
        "<tr>
  <td style=\"padding-left:{indent}em;\">{label}</td>
  <td style=\"padding-left:{indent}em;{old_style}\">{old}</td>
  <td style=\"padding-left:{indent}em;{new_style}\">{new}</td>
</tr>\n",
        indent = row.indent(),
        label = html_escape(row.label()),
        old_style = html_escape(color_style(resolved.old_color, config)),
        old = html_escape(resolved.old_value),
        new_style = html_escape(color_style(resolved.new_color, config)),
        new = html_escape(resolved.new_value),
    )
}

fn color_style(color: Color, config: &RenderConfig) -> &str {
    match color {
        Color::None => "",
        Color::Added => config.added_style.as_str(),
        Color::Deleted => config.deleted_style.as_str(),
        Color::Changed => config.changed_style.as_str(),
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Anchor-safe form of a title: lowercase ASCII alphanumerics joined by `-`
pub fn slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}
