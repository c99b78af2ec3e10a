//! Entity kinds and the on-disk layout each kind follows.
//!
//! ```text
//! <course>/infoCourse.json
//! <course>/questions/<qid>/info.json
//! <course>/courseInstances/<ciid>/infoCourseInstance.json
//! <course>/courseInstances/<ciid>/assessments/<tid>/infoAssessment.json
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directory holding one subdirectory per question.
pub const QUESTIONS_DIR: &str = "questions";

/// Directory holding one subdirectory per course instance.
pub const COURSE_INSTANCES_DIR: &str = "courseInstances";

/// Directory (inside a course instance) holding one subdirectory per assessment.
pub const ASSESSMENTS_DIR: &str = "assessments";

/// Schema-name prefix for the per-type question options sub-schemas.
pub const QUESTION_OPTIONS_PREFIX: &str = "questionOptions";

/// The four loadable descriptor kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Course,
    Question,
    CourseInstance,
    Assessment,
}

impl EntityKind {
    /// Return the string representation used in logs and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Question => "question",
            Self::CourseInstance => "course_instance",
            Self::Assessment => "assessment",
        }
    }

    /// Field that receives the directory name of the entity.
    ///
    /// The course itself is not keyed by directory, so it has none.
    #[must_use]
    pub const fn id_field(self) -> Option<&'static str> {
        match self {
            Self::Course => None,
            Self::Question => Some("qid"),
            Self::CourseInstance => Some("ciid"),
            Self::Assessment => Some("tid"),
        }
    }

    /// Descriptor filename inside the entity directory.
    #[must_use]
    pub const fn descriptor_file(self) -> &'static str {
        match self {
            Self::Course => "infoCourse.json",
            Self::Question => "info.json",
            Self::CourseInstance => "infoCourseInstance.json",
            Self::Assessment => "infoAssessment.json",
        }
    }

    /// Name of the primary schema the descriptor is validated against.
    #[must_use]
    pub const fn schema_name(self) -> &'static str {
        match self {
            Self::Course => "infoCourse",
            Self::Question => "infoQuestion",
            Self::CourseInstance => "infoCourseInstance",
            Self::Assessment => "infoAssessment",
        }
    }

    /// Prefix of the options sub-schema, if this kind has one.
    #[must_use]
    pub const fn options_prefix(self) -> Option<&'static str> {
        match self {
            Self::Question => Some(QUESTION_OPTIONS_PREFIX),
            Self::Course | Self::CourseInstance | Self::Assessment => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
