//! Typed form descriptor model

use super::kind::FieldKind;
use serde::{Deserialize, Serialize};

/// A validated description of a form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDescriptor {
    pub form_title: String,
    pub form_description: String,
    pub fields: Vec<FieldDescriptor>,
}

/// One field of a form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique within the form; both the answer key and the control identity
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
}

impl FieldDescriptor {
    pub fn options(&self) -> &[FieldOption] {
        self.options.as_deref().unwrap_or_default()
    }

    pub fn placeholder_or_empty(&self) -> &str {
        self.placeholder.as_deref().unwrap_or_default()
    }
}

/// A selectable option of a `select` or `radio` field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_camel_case_keys() {
        let json = r#"{
            "formTitle": "T",
            "formDescription": "D",
            "fields": [
                {"id": "name", "type": "text", "label": "Name", "required": true}
            ]
        }"#;
        let descriptor: FormDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.form_title, "T");
        assert_eq!(descriptor.form_description, "D");
        assert_eq!(descriptor.fields.len(), 1);
        assert_eq!(descriptor.fields[0].kind, FieldKind::Text);
        assert!(descriptor.fields[0].placeholder.is_none());
        assert!(descriptor.fields[0].options().is_empty());
    }

    #[test]
    fn test_deserialize_options() {
        let json = r#"{"id": "c", "type": "select", "label": "Color", "required": false,
            "options": [{"value": "r", "label": "Red"}]}"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(
            field.options(),
            &[FieldOption {
                value: "r".to_string(),
                label: "Red".to_string(),
            }]
        );
    }

    #[test]
    fn test_ignores_unknown_properties() {
        let json = r#"{"id": "n", "type": "email", "label": "E", "required": true, "hint": "x"}"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.kind, FieldKind::Email);
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let field = FieldDescriptor {
            id: "bio".to_string(),
            kind: FieldKind::TextArea,
            label: "Bio".to_string(),
            required: false,
            placeholder: None,
            options: None,
        };
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "bio", "type": "textarea", "label": "Bio", "required": false})
        );
    }
}
