//! Row generation from contract elements.
//!
//! Indentation rule: the key field of an element stays at the current
//! indent, every other field sits one level deeper. A list field becomes an
//! unchanged header row with an empty value, followed by its children one
//! level below the header.

use std::collections::HashMap;

use crate::diff::element::{display_scalar, Element, FieldValue};
use crate::errors::Result;
use crate::model::Row;

type MakeRow = fn(i64, &str, String) -> Result<Row>;

fn make_added(indent: i64, label: &str, value: String) -> Result<Row> {
    Row::added(indent, label, value)
}

fn make_deleted(indent: i64, label: &str, value: String) -> Result<Row> {
    Row::deleted(indent, label, value)
}

/// Rows for an element that only exists in the new contract
///
/// # Errors
/// * `NegativeIndent` - If `indent` is below zero
/// * `EmptyLabel` - If the element has a field with a blank name
pub fn added_rows(element: &Element, indent: i64) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    push_side(&mut rows, element, indent, make_added)?;
    Ok(rows)
}

/// Rows for an element that only exists in the old contract
///
/// # Errors
/// * `NegativeIndent` - If `indent` is below zero
/// * `EmptyLabel` - If the element has a field with a blank name
pub fn deleted_rows(element: &Element, indent: i64) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    push_side(&mut rows, element, indent, make_deleted)?;
    Ok(rows)
}

/// Rows describing how `old` became `new`
///
/// Fields are visited in the order they appear in `old`, followed by fields
/// only `new` has. List children are paired by key value; unpaired children
/// are emitted wholesale as added or deleted rows.
///
/// # Errors
/// * `NegativeIndent` - If `indent` is below zero
/// * `EmptyLabel` - If either element has a field with a blank name
pub fn modified_rows(old: &Element, new: &Element, indent: i64) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    push_modified(&mut rows, old, new, indent)?;
    Ok(rows)
}

fn field_indent(element: &Element, field: &str, indent: i64) -> i64 {
    if element.key_field() == Some(field) {
        indent
    } else {
        indent + 1
    }
}

fn push_side(
    rows: &mut Vec<Row>,
    element: &Element,
    indent: i64,
    make: MakeRow,
) -> Result<()> {
    for field in element.fields() {
        let indent = field_indent(element, &field.name, indent);
        push_field(rows, &field.name, &field.value, indent, make)?;
    }
    Ok(())
}

fn push_field(
    rows: &mut Vec<Row>,
    name: &str,
    value: &FieldValue,
    indent: i64,
    make: MakeRow,
) -> Result<()> {
    match value {
        FieldValue::Scalar(value) => {
            rows.push(make(indent, name, display_scalar(name, value))?);
        }
        FieldValue::List(children) => {
            rows.push(Row::no_change(indent, name, "")?);
            for child in children {
                push_side(rows, child, indent + 1, make)?;
            }
        }
    }
    Ok(())
}

fn push_modified(
    rows: &mut Vec<Row>,
    old: &Element,
    new: &Element,
    indent: i64,
) -> Result<()> {
    let mut names: Vec<&str> = old.fields().iter().map(|f| f.name.as_str()).collect();
    for field in new.fields() {
        if old.field(&field.name).is_none() {
            names.push(&field.name);
        }
    }

    for name in names {
        let indent = field_indent(old, name, indent);
        match (old.field(name), new.field(name)) {
            (Some(FieldValue::Scalar(a)), Some(FieldValue::Scalar(b))) => {
                let (a, b) = (display_scalar(name, a), display_scalar(name, b));
                if a == b {
                    rows.push(Row::no_change(indent, name, a)?);
                } else {
                    rows.push(Row::changed(indent, name, a, b)?);
                }
            }
            (Some(FieldValue::List(a)), Some(FieldValue::List(b))) => {
                rows.push(Row::no_change(indent, name, "")?);
                push_paired(rows, a, b, indent + 1)?;
            }
            // One-sided or mismatched fields are deleted/added rows, not a
            // Changed row with an N/A side; Changed needs a value on both sides.
            (old_value, new_value) => {
                if let Some(value) = old_value {
                    push_field(rows, name, value, indent, make_deleted)?;
                }
                if let Some(value) = new_value {
                    push_field(rows, name, value, indent, make_added)?;
                }
            }
        }
    }
    Ok(())
}

fn push_paired(
    rows: &mut Vec<Row>,
    old: &[Element],
    new: &[Element],
    indent: i64,
) -> Result<()> {
    let old = keyed(old);
    let new = keyed(new);
    let old_by_key: HashMap<&str, &Element> = old.iter().map(|(k, e)| (k.as_str(), *e)).collect();
    let new_by_key: HashMap<&str, &Element> = new.iter().map(|(k, e)| (k.as_str(), *e)).collect();

    for (key, old_child) in &old {
        match new_by_key.get(key.as_str()) {
            Some(new_child) => push_modified(rows, old_child, new_child, indent)?,
            None => push_side(rows, old_child, indent, make_deleted)?,
        }
    }
    for (key, new_child) in &new {
        if !old_by_key.contains_key(key.as_str()) {
            push_side(rows, new_child, indent, make_added)?;
        }
    }
    Ok(())
}

/// Pairing keys for list children: the key value plus its occurrence count,
/// so repeated or missing keys still pair positionally.
fn keyed(children: &[Element]) -> Vec<(String, &Element)> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    children
        .iter()
        .map(|child| {
            let base = child.key().unwrap_or("");
            let n = seen.entry(base).or_insert(0);
            let key = format!("{}#{}", base, n);
            *n += 1;
            (key, child)
        })
        .collect()
}
