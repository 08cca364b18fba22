//! Schema translation from validation-library JSON Schema to the target API's
//! structured-output schema.
//!
//! Translation is a single eager, top-down pass. The deployment mode is passed
//! by value through every recursive call; nothing is cached between calls.

use super::format::validate_format;
use crate::core_types::{
    DeploymentMode, JsonSchemaNode, NumericSchema, ObjectSchema, Properties, Schema, SchemaType,
    StringSchema,
};
use crate::error::{SchemaError, SchemaResult};
use crate::logging::{log_debug, log_trace};
use serde_json::Value;

/// Translate an input schema tree for the given deployment mode.
///
/// # Errors
///
/// Fails on the first problem found anywhere in the tree:
/// - [`SchemaError::DefaultNotSupported`] for a `default` under the direct API
/// - [`SchemaError::UnsupportedFormat`] / [`SchemaError::UnsupportedType`]
///   from format validation
/// - [`SchemaError::UnsupportedType`] for `array` nodes and unknown types
///
/// # Example
///
/// ```rust
/// use genai_schema::{translate, DeploymentMode, JsonSchemaNode, ObjectSchema, StringSchema};
///
/// let input: JsonSchemaNode = ObjectSchema::new()
///     .property("name", StringSchema::new())
///     .required(["name"])
///     .into();
///
/// let schema = translate(DeploymentMode::DirectApi, &input).unwrap();
/// assert_eq!(schema.required, Some(vec!["name".to_string()]));
/// ```
pub fn translate(mode: DeploymentMode, node: &JsonSchemaNode) -> SchemaResult<Schema> {
    log_debug!(
        mode = %mode,
        root_type = node.type_name(),
        "Translating schema"
    );
    translate_node(mode, node)
}

/// Parse a raw JSON Schema document and translate it.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidSchema`] if the document cannot be parsed,
/// otherwise the same errors as [`translate`].
pub fn translate_value(mode: DeploymentMode, document: &Value) -> SchemaResult<Schema> {
    let node = JsonSchemaNode::try_from(document)?;
    translate(mode, &node)
}

fn translate_node(mode: DeploymentMode, node: &JsonSchemaNode) -> SchemaResult<Schema> {
    let common = node.common();

    let default = match &common.default {
        Some(_) if !mode.supports_default() => {
            return Err(SchemaError::default_not_supported(mode));
        }
        default => default.clone(),
    };
    let format = validate_format(mode, node.type_name(), common.format.as_deref())?;

    let mut schema = match node {
        JsonSchemaNode::Object(object) => translate_object(mode, object)?,
        JsonSchemaNode::String(string) => translate_string(string),
        JsonSchemaNode::Number(number) => translate_numeric(SchemaType::Number, number),
        JsonSchemaNode::Integer(integer) => translate_numeric(SchemaType::Integer, integer),
        JsonSchemaNode::Boolean(_) => Schema::new(SchemaType::Boolean),
        JsonSchemaNode::Array(_) | JsonSchemaNode::Unknown { .. } => {
            return Err(SchemaError::unsupported_type(node.type_name()));
        }
    };

    schema.default = default;
    schema.description = common.description.clone();
    // an enum forces format "enum" and must not be overwritten
    if schema.format.is_none() {
        schema.format = format;
    }
    Ok(schema)
}

fn translate_object(mode: DeploymentMode, object: &ObjectSchema) -> SchemaResult<Schema> {
    let mut properties = Properties::with_capacity(object.properties.len());
    for (name, child) in object.properties.iter() {
        log_trace!(property = name, child_type = child.type_name(), "Translating property");
        properties.insert(name, translate_node(mode, child)?);
    }

    let mut schema = Schema::new(SchemaType::Object);
    schema.properties = Some(properties);
    schema.required = object.required.clone();
    Ok(schema)
}

fn translate_string(string: &StringSchema) -> Schema {
    let mut schema = Schema::new(SchemaType::String);
    match &string.enum_values {
        Some(values) => {
            schema.format = Some("enum".to_string());
            schema.enum_values = Some(values.clone());
        }
        None => {
            schema.pattern = string.pattern.clone();
            schema.min_length = string.min_length.map(|len| len.to_string());
            schema.max_length = string.max_length.map(|len| len.to_string());
        }
    }
    schema
}

fn translate_numeric(schema_type: SchemaType, numeric: &NumericSchema) -> Schema {
    let mut schema = Schema::new(schema_type);
    schema.minimum = numeric.minimum.clone();
    schema.maximum = numeric.maximum.clone();
    schema
}
