//! # genai-schema
//!
//! Translate JSON schemas produced by schema-validation libraries into the
//! structured-output schema of a generative-AI API, for either its direct
//! public deployment or its cloud-hosted enterprise deployment.
//!
//! ## Key Features
//!
//! - **Typed translation**: Input and output schemas are tagged unions, not loose maps
//! - **Deployment-aware validation**: Format modifiers and defaults are checked per mode
//! - **Order preserving**: Property declaration order survives end to end
//! - **Request fragments**: Response schemas and function declarations ready to embed
//!
//! ## Example
//!
//! ```rust
//! use genai_schema::{translate_value, DeploymentMode, GenerationConfig, SchemaType};
//! use serde_json::json;
//!
//! # fn example() -> genai_schema::SchemaResult<()> {
//! let document = json!({
//!     "type": "object",
//!     "properties": {
//!         "a": {"type": "string"},
//!         "b": {"type": "number", "minimum": 1, "maximum": 10}
//!     },
//!     "required": ["a", "b"]
//! });
//!
//! let schema = translate_value(DeploymentMode::DirectApi, &document)?;
//! assert_eq!(schema.schema_type, SchemaType::Object);
//!
//! let config = GenerationConfig::with_response_schema(schema);
//! let payload = serde_json::to_value(&config).unwrap();
//! assert_eq!(payload["responseSchema"]["properties"]["b"]["type"], "NUMBER");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod config;
pub mod core_types;
pub mod error;
pub mod translator;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{ClientConfig, ResolvedConfig};
pub use error::{SchemaError, SchemaResult};
pub use translator::{
    function_declaration_from, response_schema_from, translate, translate_value,
    validate_format, DescribedSchema, SchemaSource,
};

// Re-export core types (input/output schema models and request fragments)
pub use core_types::{
    ArraySchema, BooleanSchema, DeploymentMode, FunctionDeclaration, GenerationConfig,
    JsonSchemaNode, NumericSchema, ObjectSchema, Properties, Schema, SchemaCommon, SchemaType,
    StringSchema, Tool,
};
