//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match [`crate::CourseDbConfig`].
    #[error("coursedb configuration: {0}")]
    Figment(#[from] figment::Error),

    /// The merged configuration holds a value the loader cannot run with.
    #[error("invalid `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}
