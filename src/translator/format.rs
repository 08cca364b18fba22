//! Format modifier validation.
//!
//! Format modifiers are only meaningful on scalar leaves, and each deployment
//! of the target API accepts a closed set of them:
//!
//! | type | direct API | cloud-hosted API |
//! |------|------------|------------------|
//! | number | `float`, `double` | `float`, `double` |
//! | integer | `int32`, `int64` | `int32`, `int64` |
//! | string | `date-time`, `enum` | `date-time`, `byte`, `enum`, `email` |
//!
//! Matching is exact and case-sensitive.

use crate::core_types::DeploymentMode;
use crate::error::{SchemaError, SchemaResult};

const NUMBER_FORMATS: &[&str] = &["float", "double"];
const INTEGER_FORMATS: &[&str] = &["int32", "int64"];
const DIRECT_API_STRING_FORMATS: &[&str] = &["date-time", "enum"];
const CLOUD_HOSTED_STRING_FORMATS: &[&str] = &["date-time", "byte", "enum", "email"];

/// Formats a node of `type_name` may carry under `mode`.
///
/// Returns `None` for types that take no format at all.
pub fn allowed_formats(mode: DeploymentMode, type_name: &str) -> Option<&'static [&'static str]> {
    match (type_name, mode) {
        ("number", _) => Some(NUMBER_FORMATS),
        ("integer", _) => Some(INTEGER_FORMATS),
        ("string", DeploymentMode::DirectApi) => Some(DIRECT_API_STRING_FORMATS),
        ("string", DeploymentMode::CloudHosted) => Some(CLOUD_HOSTED_STRING_FORMATS),
        _ => None,
    }
}

/// Check a node's format modifier against the allowed table.
///
/// An absent format passes through untouched; an empty string is a declared
/// format and is validated like any other.
///
/// # Errors
///
/// - [`SchemaError::UnsupportedType`] if a format is declared on a type other
///   than `number`, `integer` or `string`
/// - [`SchemaError::UnsupportedFormat`] if the format is not in the allowed
///   set for the type and mode
pub fn validate_format(
    mode: DeploymentMode,
    type_name: &str,
    format: Option<&str>,
) -> SchemaResult<Option<String>> {
    let Some(format) = format else {
        return Ok(None);
    };

    let allowed = allowed_formats(mode, type_name)
        .ok_or_else(|| SchemaError::unsupported_type(type_name))?;

    if !allowed.contains(&format) {
        return Err(SchemaError::unsupported_format(type_name, format, mode));
    }

    Ok(Some(format.to_string()))
}
