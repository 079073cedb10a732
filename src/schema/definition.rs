//! JSON Schema that a pasted form descriptor must satisfy

use super::kind::FieldKind;
use serde_json::{json, Value};

/// Build the descriptor schema.
///
/// `nullable: true` on the optional properties means an explicit `null` is
/// accepted. Draft 2020-12 has no such keyword, so the validator expands it
/// before compiling (see `validation::json_schema`).
pub fn form_descriptor_schema() -> Value {
    let kinds: Vec<&str> = FieldKind::ALL.iter().map(FieldKind::as_str).collect();

    json!({
        "type": "object",
        "properties": {
            "formTitle": { "type": "string" },
            "formDescription": { "type": "string" },
            "fields": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "type": {
                            "type": "string",
                            "enum": kinds,
                        },
                        "label": { "type": "string" },
                        "required": { "type": "boolean" },
                        "placeholder": { "type": "string", "nullable": true },
                        "options": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "value": { "type": "string" },
                                    "label": { "type": "string" },
                                },
                                "required": ["value", "label"],
                            },
                            "nullable": true,
                        },
                    },
                    "required": ["id", "type", "label", "required"],
                },
            },
        },
        "required": ["formTitle", "formDescription", "fields"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_enum_matches_field_kind() {
        let schema = form_descriptor_schema();
        let kinds = &schema["properties"]["fields"]["items"]["properties"]["type"]["enum"];
        assert_eq!(
            kinds,
            &json!(["text", "email", "select", "radio", "textarea"])
        );
    }

    #[test]
    fn test_top_level_required() {
        let schema = form_descriptor_schema();
        assert_eq!(
            schema["required"],
            json!(["formTitle", "formDescription", "fields"])
        );
    }

    #[test]
    fn test_field_required_and_nullable() {
        let schema = form_descriptor_schema();
        let item = &schema["properties"]["fields"]["items"];
        assert_eq!(item["required"], json!(["id", "type", "label", "required"]));
        assert_eq!(item["properties"]["placeholder"]["nullable"], json!(true));
        assert_eq!(item["properties"]["options"]["nullable"], json!(true));
        assert_eq!(
            item["properties"]["options"]["items"]["required"],
            json!(["value", "label"])
        );
    }
}
