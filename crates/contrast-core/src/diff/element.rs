//! Contract element trees.
//!
//! An element is an ordered list of named fields, each either a scalar or a
//! list of child elements. Field order is document order and is preserved
//! from the JSON the comparison engine emits.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{ContrastError, Result};

/// Field names tried, in order, to find the field identifying an element
pub const KEY_FIELDS: &[&str] = &["name", "code", "type"];

/// A single contract element (request, type, parameter, response code, ...)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Element {
    fields: Vec<Field>,
}

/// One named field of an [`Element`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<Element>),
}

impl Element {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    /// Scalar value of `name`, with any dotted path removed for `name`/`type`
    pub fn display_value(&self, name: &str) -> Option<String> {
        match self.field(name)? {
            FieldValue::Scalar(value) => Some(display_scalar(name, value)),
            FieldValue::List(_) => None,
        }
    }

    /// Name of the field that identifies this element among its siblings
    pub fn key_field(&self) -> Option<&str> {
        KEY_FIELDS
            .iter()
            .copied()
            .find(|k| matches!(self.field(k), Some(FieldValue::Scalar(_))))
    }

    /// Raw value of the key field, used to match old and new siblings
    pub fn key(&self) -> Option<&str> {
        match self.field(self.key_field()?)? {
            FieldValue::Scalar(value) => Some(value.as_str()),
            FieldValue::List(_) => None,
        }
    }

    /// Build an element from a JSON object, reporting problems against `path`
    ///
    /// # Errors
    /// * `InvalidElement` - If the value is not an object, a field name is
    ///   blank, a field holds a nested object, or a list holds a non-object
    pub fn from_json(value: &Value, path: &str) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| ContrastError::InvalidElement {
            path: path.to_string(),
            reason: format!("expected an object, got {}", json_kind(value)),
        })?;
        Self::from_map(object, path)
    }

    fn from_map(object: &Map<String, Value>, path: &str) -> Result<Self> {
        let mut fields = Vec::with_capacity(object.len());
        for (name, value) in object {
            let here = format!("{}.{}", path, name);
            if name.trim().is_empty() {
                return Err(ContrastError::InvalidElement {
                    path: here,
                    reason: "empty field name".to_string(),
                });
            }
            let value = match value {
                Value::Null => continue,
                Value::String(s) => FieldValue::Scalar(s.clone()),
                Value::Bool(b) => FieldValue::Scalar(b.to_string()),
                Value::Number(n) => FieldValue::Scalar(n.to_string()),
                Value::Array(items) => FieldValue::List(
                    items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| Element::from_json(item, &format!("{}[{}]", here, i)))
                        .collect::<Result<Vec<_>>>()?,
                ),
                Value::Object(_) => {
                    return Err(ContrastError::InvalidElement {
                        path: here,
                        reason: "nested objects must be wrapped in a list".to_string(),
                    })
                }
            };
            fields.push(Field {
                name: name.clone(),
                value,
            });
        }
        Ok(Self { fields })
    }
}

impl TryFrom<Value> for Element {
    type Error = ContrastError;

    fn try_from(value: Value) -> Result<Self> {
        Element::from_json(&value, "$")
    }
}

/// Strip a dotted package path: `com.example.Bucket` becomes `Bucket`
pub fn short_name(value: &str) -> &str {
    value.rsplit('.').next().unwrap_or(value)
}

pub(crate) fn display_scalar(field: &str, value: &str) -> String {
    match field {
        "name" | "type" => short_name(value).to_string(),
        _ => value.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_order_preserved() {
        let element: Element = serde_json::from_value(json!({
            "name": "com.example.Bucket",
            "type": "object",
            "nullable": false,
            "size": 12
        }))
        .unwrap();

        let names: Vec<_> = element.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "type", "nullable", "size"]);
        assert_eq!(
            element.field("size"),
            Some(&FieldValue::Scalar("12".to_string()))
        );
    }

    #[test]
    fn test_null_fields_are_absent() {
        let element = Element::from_json(&json!({"name": "a", "description": null}), "$").unwrap();
        assert_eq!(element.fields().len(), 1);
        assert!(element.field("description").is_none());
    }

    #[test]
    fn test_key_field_priority() {
        let by_name = Element::from_json(&json!({"type": "x", "name": "n"}), "$").unwrap();
        assert_eq!(by_name.key_field(), Some("name"));

        let by_code = Element::from_json(&json!({"code": 404, "type": "Error"}), "$").unwrap();
        assert_eq!(by_code.key_field(), Some("code"));
        assert_eq!(by_code.key(), Some("404"));

        let keyless = Element::from_json(&json!({"value": "x"}), "$").unwrap();
        assert_eq!(keyless.key_field(), None);
    }

    #[test]
    fn test_nested_object_rejected_with_path() {
        let result = Element::from_json(&json!({"name": "a", "inner": {"x": 1}}), "$");
        match result {
            Err(ContrastError::InvalidElement { path, .. }) => assert_eq!(path, "$.inner"),
            other => panic!("expected InvalidElement, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_field_name_rejected_with_path() {
        let result = Element::from_json(&json!({"": "x"}), "$");
        match result {
            Err(ContrastError::InvalidElement { path, reason }) => {
                assert_eq!(path, "$.");
                assert_eq!(reason, "empty field name");
            }
            other => panic!("expected InvalidElement, got {:?}", other),
        }

        let nested = Element::from_json(&json!({"name": "a", "params": [{" ": "x"}]}), "$");
        assert!(matches!(
            nested,
            Err(ContrastError::InvalidElement { path, .. }) if path == "$.params[0]. "
        ));
    }

    #[test]
    fn test_list_items_must_be_objects() {
        let result = Element::from_json(&json!({"params": [1, 2]}), "$");
        match result {
            Err(ContrastError::InvalidElement { path, .. }) => assert_eq!(path, "$.params[0]"),
            other => panic!("expected InvalidElement, got {:?}", other),
        }
    }

    #[test]
    fn test_display_value_strips_path() {
        let element =
            Element::from_json(&json!({"name": "com.example.Bucket", "doc": "a.b"}), "$").unwrap();

        assert_eq!(element.display_value("name").as_deref(), Some("Bucket"));
        assert_eq!(element.display_value("doc").as_deref(), Some("a.b"));
        assert_eq!(short_name("Plain"), "Plain");
    }
}
