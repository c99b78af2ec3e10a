//! The aggregate returned by a full course load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{AssessmentInfo, CourseInfo, CourseInstanceInfo, QuestionInfo};
use crate::kind::EntityKind;
use crate::result::LoadResult;

/// A course instance and the assessments found under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInstanceData {
    pub course_instance: LoadResult<CourseInstanceInfo>,
    /// Always present; empty when the instance failed or has no `assessments` directory.
    pub assessments: BTreeMap<String, LoadResult<AssessmentInfo>>,
}

impl CourseInstanceData {
    #[must_use]
    pub const fn without_assessments(course_instance: LoadResult<CourseInstanceInfo>) -> Self {
        Self {
            course_instance,
            assessments: BTreeMap::new(),
        }
    }
}

/// Everything loaded from one course directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseData {
    pub course: LoadResult<CourseInfo>,
    pub questions: BTreeMap<String, LoadResult<QuestionInfo>>,
    pub course_instances: BTreeMap<String, CourseInstanceData>,
}

/// One entity that failed to load, located by kind and path of ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedEntity {
    pub kind: EntityKind,
    /// e.g. `["Fa19"]` for a course instance, `["Fa19", "hw1"]` for an assessment.
    pub ids: Vec<String>,
    pub error: String,
}

impl CourseData {
    /// A course whose info failed to load; nothing below it was scanned.
    pub fn failed_course(error: impl std::fmt::Display) -> Self {
        Self {
            course: LoadResult::failed(error),
            questions: BTreeMap::new(),
            course_instances: BTreeMap::new(),
        }
    }

    /// Every failed slot in the tree, course first.
    #[must_use]
    pub fn failures(&self) -> Vec<FailedEntity> {
        let mut failures = Vec::new();
        if let Some(error) = self.course.error() {
            failures.push(FailedEntity {
                kind: EntityKind::Course,
                ids: Vec::new(),
                error: error.to_string(),
            });
        }
        for (qid, question) in &self.questions {
            if let Some(error) = question.error() {
                failures.push(FailedEntity {
                    kind: EntityKind::Question,
                    ids: vec![qid.clone()],
                    error: error.to_string(),
                });
            }
        }
        for (ciid, instance) in &self.course_instances {
            if let Some(error) = instance.course_instance.error() {
                failures.push(FailedEntity {
                    kind: EntityKind::CourseInstance,
                    ids: vec![ciid.clone()],
                    error: error.to_string(),
                });
            }
            for (tid, assessment) in &instance.assessments {
                if let Some(error) = assessment.error() {
                    failures.push(FailedEntity {
                        kind: EntityKind::Assessment,
                        ids: vec![ciid.clone(), tid.clone()],
                        error: error.to_string(),
                    });
                }
            }
        }
        failures
    }

    /// Whether every slot in the tree loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_course_has_empty_maps() {
        let data = CourseData::failed_course("missing infoCourse.json");
        assert!(data.questions.is_empty());
        assert!(data.course_instances.is_empty());
        let failures = data.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].kind, EntityKind::Course);
    }

    #[test]
    fn failures_locate_nested_assessments() {
        let mut instance = CourseInstanceData::without_assessments(LoadResult::failed("ci broke"));
        instance
            .assessments
            .insert("hw1".into(), LoadResult::failed("bad set"));
        let data = CourseData {
            course: LoadResult::failed("course broke"),
            questions: BTreeMap::from([("q1".to_string(), LoadResult::failed("bad json"))]),
            course_instances: BTreeMap::from([("Fa19".to_string(), instance)]),
        };
        let failures = data.failures();
        assert_eq!(failures.len(), 4);
        assert_eq!(failures[3].ids, vec!["Fa19".to_string(), "hw1".to_string()]);
        assert!(!data.is_complete());
    }
}
