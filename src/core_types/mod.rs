//! Core types for schema translation
//!
//! ## Organization
//! - `mode` - Deployment mode of the target API
//! - `input` - Input schema nodes (JSON Schema from validation libraries)
//! - `schema` - Output schema nodes in the target wire vocabulary
//! - `properties` - Insertion-ordered property map used by both trees
//! - `request` - Request payload fragments that embed translated schemas

pub mod input;
pub mod mode;
pub mod properties;
pub mod request;
pub mod schema;

// Re-export commonly used types
pub use input::{
    ArraySchema, BooleanSchema, JsonSchemaNode, NumericSchema, ObjectSchema, SchemaCommon,
    StringSchema,
};
pub use mode::DeploymentMode;
pub use properties::Properties;
pub use request::{FunctionDeclaration, GenerationConfig, Tool, JSON_MIME_TYPE};
pub use schema::{Schema, SchemaType};
