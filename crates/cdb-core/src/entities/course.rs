use std::collections::HashSet;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where an assessment set or tag entry came from.
///
/// Serialised with a loaded [`CourseInfo`]. A value written in
/// `infoCourse.json` is absent from the schema and reset to `Declared` by
/// the course loader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Listed in `infoCourse.json`.
    #[default]
    Declared,
    /// Injected from the built-in defaults.
    Builtin,
}

/// A named group of assessments (e.g., "Homework", "Exam").
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssessmentSet {
    pub abbreviation: String,
    pub name: String,
    pub heading: String,
    pub color: String,
    #[serde(default)]
    #[schemars(skip)]
    pub origin: Origin,
}

impl AssessmentSet {
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(self.origin, Origin::Builtin)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    #[schemars(skip)]
    pub origin: Origin,
}

impl Tag {
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(self.origin, Origin::Builtin)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The `options` block of `infoCourse.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseDescriptorOptions {
    #[serde(default)]
    pub use_new_question_renderer: bool,
}

/// Raw `infoCourse.json` as written by course authors.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseDescriptor {
    pub uuid: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub assessment_sets: Option<Vec<AssessmentSet>>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub options: CourseDescriptorOptions,
}

/// Feature flags derived for a loaded course.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseOptions {
    pub use_new_question_renderer: bool,
    pub is_example_course: bool,
}

/// A loaded course: the validated descriptor plus resolved paths and merged defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseInfo {
    /// Lower-cased course uuid.
    pub uuid: String,
    pub name: String,
    pub title: String,
    pub timezone: Option<String>,
    /// Course root directory.
    pub path: PathBuf,
    pub questions_dir: PathBuf,
    pub course_instances_dir: PathBuf,
    /// Declared sets first, then built-ins whose names were not declared.
    pub assessment_sets: Vec<AssessmentSet>,
    /// Declared tags first, then built-ins whose names were not declared.
    pub tags: Vec<Tag>,
    pub topics: Vec<Topic>,
    pub options: CourseOptions,
}

impl CourseInfo {
    /// Whether `infoCourse.json` listed any assessment sets of its own.
    #[must_use]
    pub fn declares_assessment_sets(&self) -> bool {
        self.assessment_sets.iter().any(|set| !set.is_builtin())
    }

    /// Set names an assessment's `set` field may reference.
    ///
    /// When the course declares its own assessment sets only those are
    /// referenceable; otherwise the built-in sets are.
    #[must_use]
    pub fn referenceable_assessment_sets(&self) -> HashSet<String> {
        let declared = self.declares_assessment_sets();
        self.assessment_sets
            .iter()
            .filter(|set| !declared || !set.is_builtin())
            .map(|set| set.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(name: &str, origin: Origin) -> AssessmentSet {
        AssessmentSet {
            abbreviation: name.to_string(),
            name: name.to_string(),
            heading: format!("{name}s"),
            color: "gray1".to_string(),
            origin,
        }
    }

    fn course(sets: Vec<AssessmentSet>) -> CourseInfo {
        CourseInfo {
            uuid: "u".into(),
            name: "XC 101".into(),
            title: "Example".into(),
            timezone: None,
            path: PathBuf::from("/course"),
            questions_dir: PathBuf::from("/course/questions"),
            course_instances_dir: PathBuf::from("/course/courseInstances"),
            assessment_sets: sets,
            tags: Vec::new(),
            topics: Vec::new(),
            options: CourseOptions::default(),
        }
    }

    #[test]
    fn declared_sets_restrict_references() {
        let info = course(vec![
            set("HW", Origin::Declared),
            set("Quiz", Origin::Builtin),
        ]);
        let names = info.referenceable_assessment_sets();
        assert!(names.contains("HW"));
        assert!(!names.contains("Quiz"));
    }

    #[test]
    fn builtin_sets_apply_without_declarations() {
        let info = course(vec![
            set("Homework", Origin::Builtin),
            set("Quiz", Origin::Builtin),
        ]);
        assert!(!info.declares_assessment_sets());
        assert_eq!(info.referenceable_assessment_sets().len(), 2);
    }

    #[test]
    fn origin_survives_a_serde_round_trip() {
        let info = course(vec![
            set("HW", Origin::Declared),
            set("Quiz", Origin::Builtin),
        ]);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["assessmentSets"][1]["origin"], "builtin");

        let back: CourseInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back, info);
        assert_eq!(
            back.referenceable_assessment_sets(),
            HashSet::from(["HW".to_string()])
        );
    }

    #[test]
    fn missing_origin_reads_as_declared() {
        let parsed: AssessmentSet = serde_json::from_value(serde_json::json!({
            "abbreviation": "HW",
            "name": "Homework",
            "heading": "Homeworks",
            "color": "green1"
        }))
        .unwrap();
        assert_eq!(parsed.origin, Origin::Declared);
    }
}
