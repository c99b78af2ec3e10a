use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::course_instance::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AssessmentType {
    Homework,
    Exam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AccessMode {
    Public,
    Exam,
    #[serde(rename = "SEB")]
    Seb,
}

/// Safe Exam Browser settings attached to an access rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SebConfig {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub quit_password: Option<String>,
    #[serde(default)]
    pub allow_programs: Vec<String>,
}

/// One entry of an assessment's `allowAccess` list.
///
/// `start_date`/`end_date` are kept as written; they are checked as
/// ISO-8601 timestamps while the assessment loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentAccessRule {
    #[serde(default)]
    pub mode: Option<AccessMode>,
    #[serde(default)]
    pub exam_uuid: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub uids: Option<Vec<String>>,
    #[serde(default)]
    pub credit: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub time_limit_min: Option<f64>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(rename = "SEBConfig", default)]
    pub seb_config: Option<SebConfig>,
}

/// A point value, or a per-attempt ladder of point values.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum Points {
    Single(f64),
    Ladder(Vec<f64>),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAlternative {
    pub id: String,
    #[serde(default)]
    pub points: Option<Points>,
    #[serde(default)]
    pub max_points: Option<Points>,
    #[serde(default)]
    pub force_max_points: Option<bool>,
    #[serde(default)]
    pub tries_per_variant: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneQuestion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub points: Option<Points>,
    #[serde(default)]
    pub max_points: Option<Points>,
    #[serde(default)]
    pub force_max_points: Option<bool>,
    #[serde(default)]
    pub alternatives: Vec<QuestionAlternative>,
    #[serde(default)]
    pub number_choose: Option<u32>,
    #[serde(default)]
    pub tries_per_variant: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub max_points: Option<f64>,
    #[serde(default)]
    pub max_choose: Option<u32>,
    #[serde(default)]
    pub best_questions: Option<u32>,
    #[serde(default)]
    pub questions: Vec<ZoneQuestion>,
}

/// A loaded `infoAssessment.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInfo {
    /// Directory name; any value in the descriptor is overwritten, so the
    /// schema does not constrain it.
    #[serde(default)]
    #[schemars(skip)]
    pub tid: String,
    pub uuid: String,
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,
    pub title: String,
    /// Must name one of the course's assessment sets.
    pub set: String,
    pub number: String,
    #[serde(default)]
    pub allow_issue_reporting: Option<bool>,
    #[serde(default)]
    pub multiple_instance: Option<bool>,
    #[serde(default)]
    pub shuffle_questions: Option<bool>,
    #[serde(default)]
    pub allow_access: Vec<AssessmentAccessRule>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub max_points: Option<f64>,
    #[serde(default)]
    pub auto_close: Option<bool>,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub constant_question_value: Option<bool>,
}
