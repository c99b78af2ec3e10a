//! Per-entity load outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A successfully loaded entity together with the non-fatal warnings it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub data: T,
    pub warnings: Vec<String>,
}

impl<T> Loaded<T> {
    #[must_use]
    pub const fn new(data: T, warnings: Vec<String>) -> Self {
        Self { data, warnings }
    }
}

/// Outcome of loading one entity: either a fatal error, or data with optional warnings.
///
/// Failed slots never carry warnings; anything learned about a failed entity
/// belongs in its error text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadResult<T> {
    Loaded {
        data: T,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        warnings: Vec<String>,
    },
    Failed {
        error: String,
    },
}

impl<T> LoadResult<T> {
    #[must_use]
    pub const fn loaded(data: T) -> Self {
        Self::Loaded {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn failed(error: impl fmt::Display) -> Self {
        Self::Failed {
            error: error.to_string(),
        }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded { data, .. } => Some(data),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Loaded { data, .. } => Some(data),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Loaded { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        match self {
            Self::Loaded { warnings, .. } => warnings,
            Self::Failed { .. } => &[],
        }
    }

    /// All warnings joined by newlines, or `None` when there are none.
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        let warnings = self.warnings();
        if warnings.is_empty() {
            None
        } else {
            Some(warnings.join("\n"))
        }
    }

    /// Append warnings to a loaded slot. No-op on a failed slot.
    pub fn add_warnings<I>(&mut self, extra: I)
    where
        I: IntoIterator<Item = String>,
    {
        if let Self::Loaded { warnings, .. } = self {
            warnings.extend(extra);
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadResult<U> {
        match self {
            Self::Loaded { data, warnings } => LoadResult::Loaded {
                data: f(data),
                warnings,
            },
            Self::Failed { error } => LoadResult::Failed { error },
        }
    }
}

impl<T> From<Loaded<T>> for LoadResult<T> {
    fn from(loaded: Loaded<T>) -> Self {
        Self::Loaded {
            data: loaded.data,
            warnings: loaded.warnings,
        }
    }
}
