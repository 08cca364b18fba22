//! Error types for schema translation.
//!
//! Every failure in this crate is a terminal, non-retryable authoring or
//! configuration mistake: the schema (or client setup) describes something the
//! target API cannot represent. Translation is fail-fast, so the first error
//! found aborts the whole call and no partial schema is returned.
//!
//! # Error Types
//!
//! The main error type is [`SchemaError`]:
//! - Unsupported node types (`array`, or anything outside the closed set)
//! - Unsupported `(type, format)` pairs for the current deployment mode
//! - `default` values under the direct API
//! - Malformed input documents
//! - Conflicting client configuration
//!
//! # Error Handling Example
//!
//! ```rust
//! use genai_schema::{translate_value, DeploymentMode, SchemaError};
//! use serde_json::json;
//!
//! let err = translate_value(
//!     DeploymentMode::DirectApi,
//!     &json!({"type": "string", "format": "byte"}),
//! )
//! .unwrap_err();
//!
//! assert!(matches!(err, SchemaError::UnsupportedFormat { .. }));
//! assert!(!err.is_retryable());
//! println!("Tell the schema author: {}", err);
//! ```

use crate::core_types::DeploymentMode;
use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
///
/// Use [`SchemaError::category()`] to get the category for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The schema itself cannot be represented by the target API.
    ///
    /// The schema author has to change the schema; retrying is pointless.
    SchemaAuthoring,

    /// The client was configured with conflicting or invalid options.
    Configuration,
}

/// Severity level for logging and alerting decisions.
///
/// Use [`SchemaError::severity()`] to get the severity for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Setup failed; nothing can be translated or sent until it is fixed.
    Error,

    /// A single schema was rejected; other schemas are unaffected.
    Warning,
}

// ============================================================================
// Schema Error types
// ============================================================================

/// Convenient result type for schema operations.
///
/// Alias for `Result<T, SchemaError>`.
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while translating a schema or resolving client
/// configuration.
///
/// # Creating Errors
///
/// Use the constructor methods which automatically log the error:
///
/// ```rust
/// use genai_schema::{DeploymentMode, SchemaError};
///
/// let err = SchemaError::unsupported_type("array");
/// let err = SchemaError::unsupported_format("string", "byte", DeploymentMode::DirectApi);
/// let err = SchemaError::default_not_supported(DeploymentMode::DirectApi);
/// ```
///
/// # Error Categories
///
/// | Variant | Category | Severity |
/// |---------|----------|----------|
/// | `UnsupportedType` | SchemaAuthoring | Warning |
/// | `UnsupportedFormat` | SchemaAuthoring | Warning |
/// | `DefaultNotSupported` | SchemaAuthoring | Warning |
/// | `InvalidSchema` | SchemaAuthoring | Warning |
/// | `ConfigurationError` | Configuration | Error |
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// The node's `type` has no counterpart in the target schema.
    ///
    /// Raised for `array` nodes, for type names outside the closed set, and
    /// for format modifiers attached to non-scalar types.
    #[error("Unsupported type: {type_name}")]
    UnsupportedType {
        /// The offending type name, as it appeared in the input.
        type_name: String,
    },

    /// The `(type, format)` pair is not allowed under the deployment mode.
    #[error("Unsupported format for {type_name} type under {mode}: {format}")]
    UnsupportedFormat {
        /// Type of the node carrying the format.
        type_name: String,
        /// The rejected format string.
        format: String,
        /// Mode the schema was being translated for.
        mode: DeploymentMode,
    },

    /// A `default` value was declared but the deployment mode rejects defaults.
    #[error("Default value is not supported in the response schema for the {mode}")]
    DefaultNotSupported {
        /// Mode the schema was being translated for.
        mode: DeploymentMode,
    },

    /// The input document is not a well-formed schema description.
    #[error("Invalid schema: {message}")]
    InvalidSchema {
        /// What was wrong with the document.
        message: String,
    },

    /// Client options conflict with each other.
    #[error("Client configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },
}

impl SchemaError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedType { .. } => ErrorCategory::SchemaAuthoring,
            Self::UnsupportedFormat { .. } => ErrorCategory::SchemaAuthoring,
            Self::DefaultNotSupported { .. } => ErrorCategory::SchemaAuthoring,
            Self::InvalidSchema { .. } => ErrorCategory::SchemaAuthoring,
            Self::ConfigurationError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            _ => ErrorSeverity::Warning,
        }
    }

    /// Schema errors never go away on their own.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Convert to a short message suitable for showing to the schema author.
    ///
    /// Unlike `Display`, this omits the offending values.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedType { .. } => {
                "The schema uses a type the target API cannot represent".to_string()
            }
            Self::UnsupportedFormat { .. } => {
                "The schema uses a format the target API does not accept".to_string()
            }
            Self::DefaultNotSupported { .. } => {
                "Default values are only supported by the cloud-hosted API".to_string()
            }
            Self::InvalidSchema { .. } => "The schema description is malformed".to_string(),
            Self::ConfigurationError { .. } => {
                "Client configuration issue. Please check your settings".to_string()
            }
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    /// Create an unsupported type error (logs at WARN level).
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        log_warn!(
            error_type = "unsupported_type",
            type_name = %type_name,
            "Schema node type is not supported"
        );
        Self::UnsupportedType { type_name }
    }

    pub fn unsupported_format(
        type_name: impl Into<String>,
        format: impl Into<String>,
        mode: DeploymentMode,
    ) -> Self {
        let type_name = type_name.into();
        let format = format.into();
        log_warn!(
            error_type = "unsupported_format",
            type_name = %type_name,
            format = %format,
            mode = %mode,
            "Schema format modifier is not supported"
        );
        Self::UnsupportedFormat {
            type_name,
            format,
            mode,
        }
    }

    pub fn default_not_supported(mode: DeploymentMode) -> Self {
        log_warn!(
            error_type = "default_not_supported",
            mode = %mode,
            "Schema default value rejected"
        );
        Self::DefaultNotSupported { mode }
    }

    pub fn invalid_schema(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "invalid_schema",
            message = %message,
            "Schema description is malformed"
        );
        Self::InvalidSchema { message }
    }

    /// Create a configuration error (logs at ERROR level).
    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Client configuration validation failed"
        );
        Self::ConfigurationError { message }
    }
}
