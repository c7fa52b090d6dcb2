//! Narrowed schema types
//!
//! Keys follow the camelCase names users write in the editor
//! (`formTitle`, `formDescription`, ...).

use super::field_type::FieldType;
use super::validation::FieldValidation;
use serde_json::{Map, Value};

// ============================================================================
// Form-level
// ============================================================================

/// The whole form description.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub title: String,
    pub description: String,
    /// Render order is the order in the source array.
    pub fields: Vec<Field>,
}

impl FormSchema {
    /// Narrow a decoded value into a schema.
    ///
    /// Returns `None` only when the value is not a JSON object, which the
    /// previewer treats as "no schema loaded". Missing or mistyped members
    /// fall back to empty values; array entries that are not objects are
    /// dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;

        let fields = map
            .get("fields")
            .and_then(Value::as_array)
            .map(|raw| raw.iter().filter_map(Field::from_value).collect())
            .unwrap_or_default();

        Some(Self {
            title: str_member(map, "formTitle").unwrap_or_default(),
            description: str_member(map, "formDescription").unwrap_or_default(),
            fields,
        })
    }
}

// ============================================================================
// Field-level
// ============================================================================

/// One control description.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// DOM id and form name. Uniqueness is the author's responsibility.
    pub id: String,
    pub field_type: FieldType,
    pub label: String,
    pub required: bool,
    pub placeholder: Option<String>,
    /// File-type filter, `file` fields only.
    pub accept: Option<String>,
    /// Format constraint, `tel` fields only.
    pub validation: Option<FieldValidation>,
    /// Raw option entries, normalized at render time.
    pub options: Vec<Value>,
}

impl Field {
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let field_type = FieldType::parse(map.get("type").and_then(Value::as_str).unwrap_or(""));

        // Options only mean something for choice controls.
        let options = match map.get("options").and_then(Value::as_array) {
            Some(raw) if field_type.uses_options() => raw.clone(),
            _ => Vec::new(),
        };

        Some(Self {
            id: str_member(map, "id").unwrap_or_default(),
            field_type,
            label: str_member(map, "label").unwrap_or_default(),
            required: map.get("required").and_then(Value::as_bool).unwrap_or(false),
            placeholder: str_member(map, "placeholder"),
            accept: str_member(map, "accept"),
            validation: map.get("validation").and_then(FieldValidation::from_value),
            options,
        })
    }
}

fn str_member(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_schema() {
        let value = json!({
            "formTitle": "Signup",
            "formDescription": "Join us",
            "fields": [
                {"id": "name", "type": "text", "label": "Name", "required": true, "placeholder": "Jane"},
                {"id": "phone", "type": "tel", "label": "Phone", "required": false,
                 "validation": {"pattern": "[0-9]+", "message": "Digits only"}},
                {"id": "avatar", "type": "file", "label": "Avatar", "required": false, "accept": "image/png"}
            ]
        });

        let schema = FormSchema::from_value(&value).unwrap();
        assert_eq!(schema.title, "Signup");
        assert_eq!(schema.description, "Join us");
        assert_eq!(schema.fields.len(), 3);

        let name = &schema.fields[0];
        assert_eq!(name.id, "name");
        assert_eq!(name.field_type, FieldType::Text);
        assert!(name.required);
        assert_eq!(name.placeholder.as_deref(), Some("Jane"));

        let phone = &schema.fields[1];
        let rules = phone.validation.as_ref().unwrap();
        assert_eq!(rules.pattern.as_deref(), Some("[0-9]+"));

        assert_eq!(schema.fields[2].accept.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_field_order_is_preserved() {
        let value = json!({"fields": [
            {"id": "c", "type": "text"},
            {"id": "a", "type": "text"},
            {"id": "b", "type": "text"}
        ]});
        let schema = FormSchema::from_value(&value).unwrap();
        let ids: Vec<_> = schema.fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_non_object_is_absent() {
        assert!(FormSchema::from_value(&json!(null)).is_none());
        assert!(FormSchema::from_value(&json!([1, 2])).is_none());
        assert!(FormSchema::from_value(&json!("schema")).is_none());
        assert!(FormSchema::from_value(&json!(0)).is_none());
    }

    #[test]
    fn test_shape_problems_degrade() {
        let schema = FormSchema::from_value(&json!({"formTitle": 7, "fields": "nope"})).unwrap();
        assert_eq!(schema.title, "");
        assert!(schema.fields.is_empty());

        let schema = FormSchema::from_value(&json!({"fields": [1, {"type": "text"}]})).unwrap();
        assert_eq!(schema.fields.len(), 1);
        assert_eq!(schema.fields[0].id, "");
        assert!(!schema.fields[0].required);
    }

    #[test]
    fn test_options_kept_only_for_choice_types() {
        let value = json!({"fields": [
            {"id": "t", "type": "text", "options": ["A"]},
            {"id": "s", "type": "select", "options": ["A", "B"]}
        ]});
        let schema = FormSchema::from_value(&value).unwrap();
        assert!(schema.fields[0].options.is_empty());
        assert_eq!(schema.fields[1].options.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let value = json!({"fields": [
            {"id": "dup", "type": "text"},
            {"id": "dup", "type": "email"}
        ]});
        let schema = FormSchema::from_value(&value).unwrap();
        assert_eq!(schema.fields.len(), 2);
    }
}
