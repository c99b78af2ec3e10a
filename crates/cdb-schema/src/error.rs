//! Schema validation error types.

use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under this name.
    #[error("unknown schema '{0}'")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("failed validation against '{schema}': {}", .errors.join("; "))]
    ValidationFailed {
        schema: String,
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// The document carries `options` but its `type` has no options schema.
    #[error("no '{prefix}' options schema for type '{type_name}'")]
    UnknownOptionsType { prefix: String, type_name: String },

    /// A generated schema could not be serialised or compiled.
    #[error("cannot build schema {0}")]
    Generation(String),
}
