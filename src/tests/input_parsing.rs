// Unit Tests for Input Schema Parsing
//
// UNIT UNDER TEST: JsonSchemaNode deserialization
//
// BUSINESS RESPONSIBILITY:
//   - Parse validation-library JSON Schema documents into typed nodes
//   - Keep unknown type names so translation can report them
//   - Ignore keywords the target API has no use for
//   - Reject structurally malformed documents as invalid schemas
//
// TEST COVERAGE:
//   - Variant selection by `type`
//   - Shared keywords on every variant
//   - Missing `type` and wrongly typed keywords
//   - Absent vs empty format

use crate::core_types::{JsonSchemaNode, SchemaCommon};
use crate::error::SchemaError;
use serde_json::json;

#[cfg(test)]
mod variant_selection_tests {
    use super::*;

    #[test]
    fn test_type_keyword_selects_variant() {
        let cases = [
            ("object", "object"),
            ("string", "string"),
            ("number", "number"),
            ("integer", "integer"),
            ("boolean", "boolean"),
            ("array", "array"),
            ("null", "null"),
        ];

        for (type_name, expected) in cases {
            // Act
            let node = JsonSchemaNode::try_from(&json!({"type": type_name}))
                .expect("Document with a string type should parse");

            // Assert
            assert_eq!(node.type_name(), expected);
        }
    }

    #[test]
    fn test_unknown_type_keeps_shared_keywords() {
        // Act
        let node = JsonSchemaNode::try_from(&json!({"type": "null", "description": "nothing"})).unwrap();

        // Assert
        assert_eq!(
            node,
            JsonSchemaNode::Unknown {
                type_name: "null".to_string(),
                common: SchemaCommon {
                    description: Some("nothing".to_string()),
                    default: None,
                    format: None,
                },
            }
        );
    }

    #[test]
    fn test_string_keywords_parsed() {
        // Act
        let node = JsonSchemaNode::try_from(&json!({
            "type": "string",
            "pattern": "^x$",
            "enum": ["a", "b"],
            "minLength": 2,
            "maxLength": 4
        }))
        .unwrap();

        // Assert
        match node {
            JsonSchemaNode::String(string) => {
                assert_eq!(string.pattern.as_deref(), Some("^x$"));
                assert_eq!(
                    string.enum_values,
                    Some(vec!["a".to_string(), "b".to_string()])
                );
                assert_eq!(string.min_length, Some(2));
                assert_eq!(string.max_length, Some(4));
            }
            other => panic!("Expected string node, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_keywords_ignored() {
        // Act
        let node = JsonSchemaNode::try_from(&json!({
            "type": "object",
            "$schema": "http://json-schema.org/draft-07/schema#",
            "additionalProperties": false,
            "properties": {"x": {"type": "boolean", "title": "X"}}
        }))
        .unwrap();

        // Assert
        match node {
            JsonSchemaNode::Object(object) => {
                assert_eq!(object.properties.len(), 1);
                assert_eq!(object.required, None);
            }
            other => panic!("Expected object node, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod shared_keyword_tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_format_are_distinct() {
        // Act
        let absent = JsonSchemaNode::try_from(&json!({"type": "string"})).unwrap();
        let empty = JsonSchemaNode::try_from(&json!({"type": "string", "format": ""})).unwrap();

        // Assert
        assert_eq!(absent.common().format, None);
        assert_eq!(empty.common().format.as_deref(), Some(""));
    }

    #[test]
    fn test_default_parsed_on_every_variant() {
        for document in [
            json!({"type": "string", "default": "x"}),
            json!({"type": "number", "default": 1.5}),
            json!({"type": "boolean", "default": false}),
            json!({"type": "object", "default": {}}),
        ] {
            // Act
            let node = JsonSchemaNode::try_from(&document).unwrap();

            // Assert
            assert_eq!(node.common().default.as_ref(), document.get("default"));
        }
    }
}

#[cfg(test)]
mod malformed_document_tests {
    use super::*;

    #[test]
    fn test_missing_type_is_invalid_schema() {
        // Act
        let result = JsonSchemaNode::try_from(&json!({"description": "no type"}));

        // Assert
        assert!(matches!(result, Err(SchemaError::InvalidSchema { .. })));
    }

    #[test]
    fn test_missing_type_on_nested_property_is_invalid_schema() {
        // Act
        let result = JsonSchemaNode::try_from(&json!({
            "type": "object",
            "properties": {"child": {"description": "no type"}}
        }));

        // Assert
        assert!(matches!(result, Err(SchemaError::InvalidSchema { .. })));
    }

    #[test]
    fn test_wrongly_typed_keyword_is_invalid_schema() {
        // Act
        let result = JsonSchemaNode::try_from(&json!({"type": "string", "minLength": "three"}));

        // Assert
        match result {
            Err(SchemaError::InvalidSchema { message }) => assert!(!message.is_empty()),
            other => panic!("Expected InvalidSchema, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_str_rejects_non_json() {
        // Act
        let result = JsonSchemaNode::from_json_str("{not json");

        // Assert
        assert!(matches!(result, Err(SchemaError::InvalidSchema { .. })));
    }

    #[test]
    fn test_from_json_str_parses_document() {
        // Act
        let node = JsonSchemaNode::from_json_str(r#"{"type": "integer", "minimum": 3}"#).unwrap();

        // Assert
        match node {
            JsonSchemaNode::Integer(integer) => assert_eq!(integer.minimum, Some(3.into())),
            other => panic!("Expected integer node, got {other:?}"),
        }
    }
}
