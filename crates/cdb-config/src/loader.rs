//! Course loader configuration.

use serde::{Deserialize, Serialize};

use cdb_core::defaults::EXAMPLE_COURSE_UUID;

use crate::error::ConfigError;

/// Default cap on concurrently loading entities.
const fn default_max_concurrent_loads() -> usize {
    64
}

fn default_example_course_uuid() -> String {
    EXAMPLE_COURSE_UUID.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Upper bound on entity loads in flight at once, across all scans of one
    /// course load. Keeps large catalogs from exhausting file descriptors.
    #[serde(default = "default_max_concurrent_loads")]
    pub max_concurrent_loads: usize,

    /// Uuid that marks the bundled example course (together with its name and title).
    #[serde(default = "default_example_course_uuid")]
    pub example_course_uuid: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_concurrent_loads: default_max_concurrent_loads(),
            example_course_uuid: default_example_course_uuid(),
        }
    }
}

impl LoaderConfig {
    /// Reject values the loader cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `max_concurrent_loads` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_loads == 0 {
            return Err(ConfigError::InvalidValue {
                field: "loader.max_concurrent_loads",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
