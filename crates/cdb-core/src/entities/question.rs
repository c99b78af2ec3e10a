use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Rendering/grading type of a question.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum QuestionType {
    #[default]
    Calculation,
    ShortAnswer,
    MultipleChoice,
    Checkbox,
    File,
    MultipleTrueFalse,
    #[serde(rename = "v3")]
    V3,
}

impl QuestionType {
    pub const ALL: [Self; 7] = [
        Self::Calculation,
        Self::ShortAnswer,
        Self::MultipleChoice,
        Self::Checkbox,
        Self::File,
        Self::MultipleTrueFalse,
        Self::V3,
    ];

    /// Return the string representation used in descriptors and schema names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calculation => "Calculation",
            Self::ShortAnswer => "ShortAnswer",
            Self::MultipleChoice => "MultipleChoice",
            Self::Checkbox => "Checkbox",
            Self::File => "File",
            Self::MultipleTrueFalse => "MultipleTrueFalse",
            Self::V3 => "v3",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum GradingMethod {
    Internal,
    External,
    Manual,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExternalGradingOptions {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub entrypoint: Option<String>,
    #[serde(default)]
    pub server_files_course: Vec<String>,
    #[serde(default)]
    pub timeout: Option<u64>,
    #[serde(default)]
    pub enable_networking: Option<bool>,
}

/// A loaded `info.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInfo {
    /// Directory name; any value in the descriptor is overwritten, so the
    /// schema does not constrain it.
    #[serde(default)]
    #[schemars(skip)]
    pub qid: String,
    pub uuid: String,
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    pub title: String,
    pub topic: String,
    #[serde(default)]
    pub secondary_topics: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub client_files: Vec<String>,
    #[serde(default)]
    pub client_templates: Vec<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub grading_method: Option<GradingMethod>,
    #[serde(default)]
    pub single_variant: Option<bool>,
    #[serde(default)]
    pub partial_credit: Option<bool>,
    /// Type-specific options, validated against `questionOptions<type>`.
    #[serde(default)]
    pub options: Option<Value>,
    #[serde(default)]
    pub external_grading_options: Option<ExternalGradingOptions>,
}

impl QuestionInfo {
    /// Decode [`Self::options`] into the variant matching [`Self::question_type`].
    ///
    /// # Errors
    ///
    /// Returns the decode error if the options do not match the type's shape.
    pub fn typed_options(&self) -> Result<Option<QuestionOptions>, serde_json::Error> {
        let Some(options) = self.options.clone() else {
            return Ok(None);
        };
        let typed = match self.question_type {
            QuestionType::Calculation => {
                QuestionOptions::Calculation(serde_json::from_value(options)?)
            }
            QuestionType::ShortAnswer => {
                QuestionOptions::ShortAnswer(serde_json::from_value(options)?)
            }
            QuestionType::MultipleChoice => {
                QuestionOptions::MultipleChoice(serde_json::from_value(options)?)
            }
            QuestionType::Checkbox => QuestionOptions::Checkbox(serde_json::from_value(options)?),
            QuestionType::File => QuestionOptions::File(serde_json::from_value(options)?),
            QuestionType::MultipleTrueFalse => {
                QuestionOptions::MultipleTrueFalse(serde_json::from_value(options)?)
            }
            QuestionType::V3 => QuestionOptions::V3(serde_json::from_value(options)?),
        };
        Ok(Some(typed))
    }
}

/// Options for types that take no structured options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NoOptions {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceOptions {
    pub text: String,
    pub correct_answers: Vec<String>,
    pub incorrect_answers: Vec<String>,
    #[serde(default)]
    pub number_answers: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxOptions {
    pub text: String,
    pub correct_answers: Vec<String>,
    pub incorrect_answers: Vec<String>,
    #[serde(default)]
    pub number_answers: Option<u32>,
    #[serde(default)]
    pub min_correct_answers: Option<u32>,
    #[serde(default)]
    pub max_correct_answers: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileOptions {
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MultipleTrueFalseOptions {
    pub text: String,
    pub true_statements: Vec<String>,
    pub false_statements: Vec<String>,
}

/// Question options keyed by question type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionOptions {
    Calculation(NoOptions),
    ShortAnswer(NoOptions),
    MultipleChoice(MultipleChoiceOptions),
    Checkbox(CheckboxOptions),
    File(FileOptions),
    MultipleTrueFalse(MultipleTrueFalseOptions),
    V3(NoOptions),
}
