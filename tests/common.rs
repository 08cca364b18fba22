//! Test helper utilities for genai-schema integration tests
//!
//! Reusable schema documents shared across the integration test files.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use genai_schema::DeploymentMode;
use serde_json::{json, Value};

pub const BOTH_MODES: [DeploymentMode; 2] = [DeploymentMode::DirectApi, DeploymentMode::CloudHosted];

/// `{a: string, b: number in [1, 10]}`, both required.
pub fn two_field_document() -> Value {
    json!({
        "type": "object",
        "properties": {
            "a": {"type": "string"},
            "b": {"type": "number", "minimum": 1, "maximum": 10}
        },
        "required": ["a", "b"]
    })
}

/// Wire form of [`two_field_document`] after translation in either mode.
pub fn two_field_expected() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "a": {"type": "STRING"},
            "b": {"type": "NUMBER", "minimum": 1, "maximum": 10}
        },
        "required": ["a", "b"]
    })
}

/// Nested object mixing every scalar type, a default and cloud-only formats.
pub fn nested_cloud_document() -> Value {
    json!({
        "type": "object",
        "description": "A user profile",
        "properties": {
            "name": {"type": "string", "minLength": 1, "maxLength": 64},
            "contact": {
                "type": "object",
                "properties": {
                    "email": {"type": "string", "format": "email"},
                    "avatar": {"type": "string", "format": "byte"}
                },
                "required": ["email"]
            },
            "age": {"type": "integer", "format": "int32", "minimum": 0},
            "score": {"type": "number", "format": "double", "default": 0.5},
            "role": {"type": "string", "enum": ["admin", "member"]},
            "active": {"type": "boolean", "default": true}
        },
        "required": ["name", "contact"]
    })
}

/// Wire form of [`nested_cloud_document`] under the cloud-hosted API.
pub fn nested_cloud_expected() -> Value {
    json!({
        "type": "OBJECT",
        "description": "A user profile",
        "properties": {
            "name": {"type": "STRING", "minLength": "1", "maxLength": "64"},
            "contact": {
                "type": "OBJECT",
                "properties": {
                    "email": {"type": "STRING", "format": "email"},
                    "avatar": {"type": "STRING", "format": "byte"}
                },
                "required": ["email"]
            },
            "age": {"type": "INTEGER", "format": "int32", "minimum": 0},
            "score": {"type": "NUMBER", "format": "double", "default": 0.5},
            "role": {"type": "STRING", "format": "enum", "enum": ["admin", "member"]},
            "active": {"type": "BOOLEAN", "default": true}
        },
        "required": ["name", "contact"]
    })
}
