//! Test helper utilities for genai-schema unit tests
//!
//! Reusable schema fixtures shared across the test modules.

use crate::core_types::{JsonSchemaNode, NumericSchema, ObjectSchema, StringSchema};
use serde_json::{json, Value};

pub const BOTH_MODES: [crate::DeploymentMode; 2] = [
    crate::DeploymentMode::DirectApi,
    crate::DeploymentMode::CloudHosted,
];

/// Object with one field of every supported scalar shape, as a schema
/// validation library would emit it.
pub fn kitchen_sink_document() -> Value {
    json!({
        "type": "object",
        "properties": {
            "simpleString": {"type": "string", "description": "This is a simple string"},
            "stringWithRegex": {"type": "string", "pattern": "^[a-zA-Z]{1,10}$"},
            "stringDateTime": {"type": "string", "format": "date-time"},
            "stringWithEnum": {"type": "string", "enum": ["enumvalue1", "enumvalue2", "enumvalue3"]},
            "stringWithLength": {"type": "string", "minLength": 1, "maxLength": 10},
            "simpleNumber": {"type": "number"},
            "simpleInteger": {"type": "integer"},
            "integerInt64": {"type": "integer", "format": "int64"},
            "numberWithMinMax": {"type": "number", "minimum": 1, "maximum": 10},
            "simpleBoolean": {"type": "boolean"}
        },
        "required": [
            "simpleString",
            "stringWithRegex",
            "stringDateTime",
            "stringWithEnum",
            "stringWithLength",
            "simpleNumber",
            "simpleInteger",
            "integerInt64",
            "numberWithMinMax",
            "simpleBoolean"
        ],
        "additionalProperties": false,
        "$schema": "http://json-schema.org/draft-07/schema#"
    })
}

/// Wire form of [`kitchen_sink_document`] after translation.
pub fn kitchen_sink_expected() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "simpleString": {"type": "STRING", "description": "This is a simple string"},
            "stringWithRegex": {"type": "STRING", "pattern": "^[a-zA-Z]{1,10}$"},
            "stringDateTime": {"type": "STRING", "format": "date-time"},
            "stringWithEnum": {
                "type": "STRING",
                "format": "enum",
                "enum": ["enumvalue1", "enumvalue2", "enumvalue3"]
            },
            "stringWithLength": {"type": "STRING", "minLength": "1", "maxLength": "10"},
            "simpleNumber": {"type": "NUMBER"},
            "simpleInteger": {"type": "INTEGER"},
            "integerInt64": {"type": "INTEGER", "format": "int64"},
            "numberWithMinMax": {"type": "NUMBER", "minimum": 1, "maximum": 10},
            "simpleBoolean": {"type": "BOOLEAN"}
        },
        "required": [
            "simpleString",
            "stringWithRegex",
            "stringDateTime",
            "stringWithEnum",
            "stringWithLength",
            "simpleNumber",
            "simpleInteger",
            "integerInt64",
            "numberWithMinMax",
            "simpleBoolean"
        ]
    })
}

/// `{a: string, b: number in [1, 10]}`, both required.
pub fn two_field_object() -> JsonSchemaNode {
    ObjectSchema::new()
        .property("a", StringSchema::new())
        .property(
            "b",
            JsonSchemaNode::Number(NumericSchema::new().range(Some(1.into()), Some(10.into()))),
        )
        .required(["a", "b"])
        .into()
}

pub fn string_node() -> JsonSchemaNode {
    StringSchema::new().into()
}

pub fn number_node() -> JsonSchemaNode {
    JsonSchemaNode::Number(NumericSchema::new())
}

pub fn integer_node() -> JsonSchemaNode {
    JsonSchemaNode::Integer(NumericSchema::new())
}
