//! Entity structs for every descriptor kind.
//!
//! Each struct derives `Serialize`, `Deserialize`, and `JsonSchema`. The
//! generated schemas are the ones `cdb-schema` validates raw descriptors
//! against, so a document that passes validation always decodes into its
//! struct. Unknown descriptor fields are tolerated and dropped on decode.

mod assessment;
mod course;
mod course_instance;
mod question;

pub use assessment::{
    AccessMode, AssessmentAccessRule, AssessmentInfo, AssessmentType, Points,
    QuestionAlternative, SebConfig, Zone, ZoneQuestion,
};
pub use course::{
    AssessmentSet, CourseDescriptor, CourseDescriptorOptions, CourseInfo, CourseOptions, Origin,
    Tag, Topic,
};
pub use course_instance::{CourseInstanceAccessRule, CourseInstanceInfo, Institution, UserRole};
pub use question::{
    CheckboxOptions, ExternalGradingOptions, FileOptions, GradingMethod, MultipleChoiceOptions,
    MultipleTrueFalseOptions, NoOptions, QuestionInfo, QuestionOptions, QuestionType,
};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::kind::EntityKind;

/// A descriptor kind that is discovered by scanning a parent directory.
///
/// Each child directory of the parent holds one descriptor of the kind; the
/// child's name becomes the value of [`EntityKind::id_field`].
pub trait Entity: DeserializeOwned + Serialize + Send + Sync + 'static {
    const KIND: EntityKind;
}

impl Entity for QuestionInfo {
    const KIND: EntityKind = EntityKind::Question;
}

impl Entity for CourseInstanceInfo {
    const KIND: EntityKind = EntityKind::CourseInstance;
}

impl Entity for AssessmentInfo {
    const KIND: EntityKind = EntityKind::Assessment;
}
