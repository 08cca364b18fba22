//! Request payload fragments that carry translated schemas.
//!
//! These only describe the JSON shape a request builder embeds; sending the
//! request is left to the caller's HTTP layer.

use super::schema::Schema;
use serde::{Deserialize, Serialize};

/// MIME type the target API requires alongside a response schema.
pub const JSON_MIME_TYPE: &str = "application/json";

/// The structured-output part of a generation config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,
}

impl GenerationConfig {
    /// Constrain the model's response to `schema`, as JSON.
    pub fn with_response_schema(schema: Schema) -> Self {
        Self {
            response_mime_type: Some(JSON_MIME_TYPE.to_string()),
            response_schema: Some(schema),
        }
    }
}

/// A callable function offered to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Schema>,
}

/// Tool entry of a request; groups function declarations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub function_declarations: Vec<FunctionDeclaration>,
}

impl Tool {
    pub fn new(function_declarations: Vec<FunctionDeclaration>) -> Self {
        Self {
            function_declarations,
        }
    }
}
