//! Helpers that turn schema sources into request-ready values: response
//! schemas for structured output and function declarations for tools.

use super::schema::translate;
use crate::core_types::{DeploymentMode, FunctionDeclaration, JsonSchemaNode, Schema};
use crate::error::{SchemaError, SchemaResult};
use crate::logging::log_debug;
use serde_json::Value;

/// Anything that can describe itself as an input schema tree.
///
/// Implemented for raw JSON Schema documents ([`serde_json::Value`]) and for
/// already-parsed [`JsonSchemaNode`]s. Wrap a source in [`DescribedSchema`] to
/// attach a function description.
#[cfg_attr(test, mockall::automock)]
pub trait SchemaSource {
    /// The schema tree this source describes.
    fn schema_node(&self) -> SchemaResult<JsonSchemaNode>;

    /// Human-readable description of the value or function being described.
    fn description(&self) -> Option<String> {
        None
    }
}

impl SchemaSource for Value {
    fn schema_node(&self) -> SchemaResult<JsonSchemaNode> {
        JsonSchemaNode::try_from(self)
    }
}

impl SchemaSource for JsonSchemaNode {
    fn schema_node(&self) -> SchemaResult<JsonSchemaNode> {
        Ok(self.clone())
    }
}

/// A schema source paired with a description, typically the description of a
/// function whose arguments the schema describes.
#[derive(Debug, Clone, PartialEq)]
pub struct DescribedSchema<S> {
    pub description: String,
    pub schema: S,
}

impl<S: SchemaSource> DescribedSchema<S> {
    pub fn new(description: impl Into<String>, schema: S) -> Self {
        Self {
            description: description.into(),
            schema,
        }
    }
}

impl<S: SchemaSource> SchemaSource for DescribedSchema<S> {
    fn schema_node(&self) -> SchemaResult<JsonSchemaNode> {
        self.schema.schema_node()
    }

    fn description(&self) -> Option<String> {
        Some(self.description.clone())
    }
}

/// Translate an object schema for use as a generation config's response schema.
///
/// # Errors
///
/// Returns [`SchemaError::UnsupportedType`] if the root is not an object,
/// otherwise any error from parsing the source or from [`translate`].
pub fn response_schema_from<S: SchemaSource + ?Sized>(
    mode: DeploymentMode,
    source: &S,
) -> SchemaResult<Schema> {
    let node = object_root(source)?;
    translate(mode, &node)
}

/// Build a function declaration whose parameters are the translated source.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidSchema`] for an empty name,
/// [`SchemaError::UnsupportedType`] if the argument schema is not an object,
/// otherwise any error from parsing the source or from [`translate`].
pub fn function_declaration_from<S: SchemaSource + ?Sized>(
    mode: DeploymentMode,
    name: impl Into<String>,
    source: &S,
) -> SchemaResult<FunctionDeclaration> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(SchemaError::invalid_schema(
            "Function declaration name must not be empty",
        ));
    }

    let node = object_root(source)?;
    let parameters = translate(mode, &node)?;
    let description = source.description();

    log_debug!(
        function = %name,
        has_description = description.is_some(),
        parameter_count = parameters.properties.as_ref().map_or(0, |props| props.len()),
        "Built function declaration"
    );

    Ok(FunctionDeclaration {
        name,
        description,
        parameters: Some(parameters),
    })
}

fn object_root<S: SchemaSource + ?Sized>(source: &S) -> SchemaResult<JsonSchemaNode> {
    let node = source.schema_node()?;
    match node {
        JsonSchemaNode::Object(_) => Ok(node),
        other => Err(SchemaError::unsupported_type(other.type_name())),
    }
}
