//! Central schema registry for course descriptors.
//!
//! The `SchemaRegistry` builds JSON Schemas from cdb-core types at construction
//! time using [`schemars::schema_for!`] and compiles each one once with
//! `jsonschema`, so validating thousands of sibling descriptors reuses the
//! same compiled validators.

use std::collections::HashMap;

use jsonschema::Validator;
use schemars::schema_for;
use serde_json::{Map, Value};

use cdb_core::entities::{
    AssessmentInfo, CheckboxOptions, CourseDescriptor, CourseInstanceInfo, FileOptions,
    MultipleChoiceOptions, MultipleTrueFalseOptions, NoOptions, QuestionInfo,
};
use cdb_core::kind::QUESTION_OPTIONS_PREFIX;

use crate::error::SchemaError;

/// Store of every descriptor schema, raw and compiled.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
    validators: HashMap<&'static str, Validator>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty))
                .map_err(|e| SchemaError::Generation(format!("{}: {e}", $name)))?,
        );
    };
}

impl SchemaRegistry {
    /// Build a registry with all descriptor and question-options schemas.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if a generated schema cannot be
    /// serialised or compiled.
    pub fn new() -> Result<Self, SchemaError> {
        let mut schemas = HashMap::new();

        // --- Descriptors (4) ---
        register!(schemas, "infoCourse", CourseDescriptor);
        register!(schemas, "infoQuestion", QuestionInfo);
        register!(schemas, "infoCourseInstance", CourseInstanceInfo);
        register!(schemas, "infoAssessment", AssessmentInfo);

        // --- Question options, keyed by question type (7) ---
        register!(schemas, "questionOptionsCalculation", NoOptions);
        register!(schemas, "questionOptionsShortAnswer", NoOptions);
        register!(schemas, "questionOptionsMultipleChoice", MultipleChoiceOptions);
        register!(schemas, "questionOptionsCheckbox", CheckboxOptions);
        register!(schemas, "questionOptionsFile", FileOptions);
        register!(schemas, "questionOptionsMultipleTrueFalse", MultipleTrueFalseOptions);
        register!(schemas, "questionOptionsv3", NoOptions);

        let mut validators = HashMap::with_capacity(schemas.len());
        for (name, schema) in &schemas {
            let validator = jsonschema::validator_for(schema)
                .map_err(|e| SchemaError::Generation(format!("{name}: {e}")))?;
            validators.insert(*name, validator);
        }

        Ok(Self {
            schemas,
            validators,
        })
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let validator = self
            .validators
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    format!("{e}")
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// Validate `document["options"]` against `<prefix><document["type"]>`.
    ///
    /// Does nothing when `prefix` is `None` or the document has no `options`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnknownOptionsType` if no schema exists for the
    /// document's type, or `SchemaError::ValidationFailed` for invalid options.
    pub fn validate_options(
        &self,
        document: &Map<String, Value>,
        prefix: Option<&str>,
    ) -> Result<(), SchemaError> {
        let Some(prefix) = prefix else {
            return Ok(());
        };
        let Some(options) = document.get("options") else {
            return Ok(());
        };

        let type_name = document.get("type").and_then(Value::as_str);
        let schema_name = type_name.map(|t| format!("{prefix}{t}"));
        match schema_name {
            Some(name) if self.validators.contains_key(name.as_str()) => {
                self.validate(&name, options)
            }
            _ => Err(SchemaError::UnknownOptionsType {
                prefix: prefix.to_string(),
                type_name: type_name.unwrap_or("<missing>").to_string(),
            }),
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Whether an options schema exists for every question type.
    #[must_use]
    pub fn covers_question_types(&self) -> bool {
        cdb_core::entities::QuestionType::ALL
            .iter()
            .all(|t| self.get(&format!("{QUESTION_OPTIONS_PREFIX}{t}")).is_some())
    }
}
