//! Translation of input schemas into the target API's schema vocabulary
//!
//! ## Module Organization
//!
//! - `schema`: Recursive tree translation (type mapping, constraint extraction)
//! - `format`: Format modifier validation per type and deployment mode
//! - `declarations`: Response schema and function declaration helpers

pub mod declarations;
pub mod format;
pub mod schema;

pub use declarations::{
    function_declaration_from, response_schema_from, DescribedSchema, SchemaSource,
};
pub use format::{allowed_formats, validate_format};
pub use schema::{translate, translate_value};
