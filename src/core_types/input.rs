//! Input schema model: JSON Schema documents as emitted by schema-validation
//! libraries (for example `zod-to-json-schema`).
//!
//! Nodes are a tagged union on the `type` keyword. Each variant carries only
//! the constraint fields meaningful for that type; keywords the target API
//! has no use for (`$schema`, `additionalProperties`, ...) are ignored when
//! parsing.

use super::properties::Properties;
use crate::error::{SchemaError, SchemaResult};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Number, Value};

/// Keywords shared by every node type.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SchemaCommon {
    pub description: Option<String>,
    /// Declared default value. `null` is treated as no default.
    pub default: Option<Value>,
    /// Format modifier. `None` (absent) is distinct from `Some("")`.
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ObjectSchema {
    #[serde(flatten)]
    pub common: SchemaCommon,
    #[serde(default)]
    pub properties: Properties<JsonSchemaNode>,
    /// Field names that must be present, in declaration order.
    #[serde(default)]
    pub required: Option<Vec<String>>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, name: impl Into<String>, node: impl Into<JsonSchemaNode>) -> Self {
        self.properties.insert(name, node.into());
        self
    }

    pub fn required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringSchema {
    #[serde(flatten)]
    pub common: SchemaCommon,
    pub pattern: Option<String>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<String>>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
}

impl StringSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn length(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }
}

/// Constraints for both `number` and `integer` nodes.
///
/// Bounds keep their JSON number form, so `1` stays an integer literal and
/// 64-bit bounds are not rounded through `f64`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NumericSchema {
    #[serde(flatten)]
    pub common: SchemaCommon,
    pub minimum: Option<Number>,
    pub maximum: Option<Number>,
}

impl NumericSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(mut self, minimum: Option<Number>, maximum: Option<Number>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BooleanSchema {
    #[serde(flatten)]
    pub common: SchemaCommon,
}

/// Array nodes parse so that documents containing them can be inspected, but
/// they are never translated.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ArraySchema {
    #[serde(flatten)]
    pub common: SchemaCommon,
    pub items: Option<Value>,
}

/// One node of an input schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSchemaNode {
    Object(ObjectSchema),
    String(StringSchema),
    Number(NumericSchema),
    Integer(NumericSchema),
    Boolean(BooleanSchema),
    Array(ArraySchema),
    /// A `type` outside the closed set. Kept so translation can report it.
    Unknown {
        type_name: String,
        common: SchemaCommon,
    },
}

impl JsonSchemaNode {
    /// The `type` keyword of this node, as it appeared in the input.
    pub fn type_name(&self) -> &str {
        match self {
            JsonSchemaNode::Object(_) => "object",
            JsonSchemaNode::String(_) => "string",
            JsonSchemaNode::Number(_) => "number",
            JsonSchemaNode::Integer(_) => "integer",
            JsonSchemaNode::Boolean(_) => "boolean",
            JsonSchemaNode::Array(_) => "array",
            JsonSchemaNode::Unknown { type_name, .. } => type_name,
        }
    }

    pub fn common(&self) -> &SchemaCommon {
        match self {
            JsonSchemaNode::Object(node) => &node.common,
            JsonSchemaNode::String(node) => &node.common,
            JsonSchemaNode::Number(node) | JsonSchemaNode::Integer(node) => &node.common,
            JsonSchemaNode::Boolean(node) => &node.common,
            JsonSchemaNode::Array(node) => &node.common,
            JsonSchemaNode::Unknown { common, .. } => common,
        }
    }

    fn common_mut(&mut self) -> &mut SchemaCommon {
        match self {
            JsonSchemaNode::Object(node) => &mut node.common,
            JsonSchemaNode::String(node) => &mut node.common,
            JsonSchemaNode::Number(node) | JsonSchemaNode::Integer(node) => &mut node.common,
            JsonSchemaNode::Boolean(node) => &mut node.common,
            JsonSchemaNode::Array(node) => &mut node.common,
            JsonSchemaNode::Unknown { common, .. } => common,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.common_mut().description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.common_mut().default = Some(default);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.common_mut().format = Some(format.into());
        self
    }

    /// Parse a JSON Schema document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidSchema`] if the document is not valid
    /// JSON, a node lacks `type`, or a keyword has the wrong JSON type.
    pub fn from_json_str(document: &str) -> SchemaResult<Self> {
        serde_json::from_str(document).map_err(|e| SchemaError::invalid_schema(e.to_string()))
    }
}

impl From<ObjectSchema> for JsonSchemaNode {
    fn from(node: ObjectSchema) -> Self {
        JsonSchemaNode::Object(node)
    }
}

impl From<StringSchema> for JsonSchemaNode {
    fn from(node: StringSchema) -> Self {
        JsonSchemaNode::String(node)
    }
}

impl From<BooleanSchema> for JsonSchemaNode {
    fn from(node: BooleanSchema) -> Self {
        JsonSchemaNode::Boolean(node)
    }
}

impl From<ArraySchema> for JsonSchemaNode {
    fn from(node: ArraySchema) -> Self {
        JsonSchemaNode::Array(node)
    }
}

impl TryFrom<&Value> for JsonSchemaNode {
    type Error = SchemaError;

    fn try_from(document: &Value) -> SchemaResult<Self> {
        JsonSchemaNode::deserialize(document).map_err(|e| SchemaError::invalid_schema(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for JsonSchemaNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let type_name = match value.get("type") {
            Some(Value::String(name)) => name.clone(),
            // e.g. `["string", "null"]`; reported as an unsupported type later
            Some(other) => other.to_string(),
            None => return Err(de::Error::missing_field("type")),
        };

        let node = match type_name.as_str() {
            "object" => ObjectSchema::deserialize(value).map(JsonSchemaNode::Object),
            "string" => StringSchema::deserialize(value).map(JsonSchemaNode::String),
            "number" => NumericSchema::deserialize(value).map(JsonSchemaNode::Number),
            "integer" => NumericSchema::deserialize(value).map(JsonSchemaNode::Integer),
            "boolean" => BooleanSchema::deserialize(value).map(JsonSchemaNode::Boolean),
            "array" => ArraySchema::deserialize(value).map(JsonSchemaNode::Array),
            _ => SchemaCommon::deserialize(value)
                .map(|common| JsonSchemaNode::Unknown {
                    type_name: type_name.clone(),
                    common,
                }),
        };
        node.map_err(de::Error::custom)
    }
}
