//! Semantic checks that a descriptor schema cannot express.
//!
//! Rules run on the validated document after its id field has been set and
//! before defaults are merged. A failed rule is fatal for the entity; the
//! returned strings are non-fatal warnings.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use cdb_core::EntityKind;
use cdb_core::entities::CourseInfo;

use crate::dates::parse_access_date;
use crate::error::LoadError;

/// Course-level reference data shared by every entity of one directory scan.
///
/// A fresh context is created per scan, so the memoised set names never
/// outlive the scan or leak between courses.
#[derive(Debug, Default)]
pub struct ScanContext {
    course: Option<Arc<CourseInfo>>,
    assessment_sets: OnceLock<HashSet<String>>,
}

impl ScanContext {
    #[must_use]
    pub const fn new(course: Option<Arc<CourseInfo>>) -> Self {
        Self {
            course,
            assessment_sets: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn course(&self) -> Option<&CourseInfo> {
        self.course.as_deref()
    }

    /// Set names an assessment may reference, computed on first use.
    ///
    /// `None` when the scan has no course context.
    fn assessment_sets(&self) -> Option<&HashSet<String>> {
        let course = self.course.as_ref()?;
        Some(
            self.assessment_sets
                .get_or_init(|| course.referenceable_assessment_sets()),
        )
    }
}

/// Run the rules for `kind` against `document`, read from `path`.
///
/// # Errors
///
/// Returns the first rule violation found.
pub fn check_rules(
    kind: EntityKind,
    document: &Map<String, Value>,
    path: &Path,
    context: &ScanContext,
) -> Result<Vec<String>, LoadError> {
    match kind {
        EntityKind::Assessment => {
            check_assessment_set(document, path, context)?;
            check_access_dates(document, path)?;
            Ok(Vec::new())
        }
        EntityKind::CourseInstance => check_issue_reporting(document, path),
        EntityKind::Course | EntityKind::Question => Ok(Vec::new()),
    }
}

fn check_assessment_set(
    document: &Map<String, Value>,
    path: &Path,
    context: &ScanContext,
) -> Result<(), LoadError> {
    let Some(valid) = context.assessment_sets() else {
        return Ok(());
    };
    let set = document.get("set").and_then(Value::as_str).unwrap_or_default();
    if valid.contains(set) {
        Ok(())
    } else {
        Err(LoadError::InvalidAssessmentSet {
            path: path.to_path_buf(),
            set: set.to_string(),
        })
    }
}

fn check_access_dates(document: &Map<String, Value>, path: &Path) -> Result<(), LoadError> {
    let Some(Value::Array(rules)) = document.get("allowAccess") else {
        return Ok(());
    };

    for (index, rule) in rules.iter().enumerate() {
        let start = rule_date(rule, "startDate", index, path)?;
        let end = rule_date(rule, "endDate", index, path)?;

        if let (Some((start, start_at)), Some((end, end_at))) = (start, end) {
            if start_at > end_at {
                return Err(LoadError::InvertedAccessRange {
                    path: path.to_path_buf(),
                    index,
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// The raw and parsed value of `rule[field]`, or `None` when the key is absent.
///
/// A key that is present must hold a parseable date string; `null` is not
/// treated as absent.
fn rule_date<'a>(
    rule: &'a Value,
    field: &'static str,
    index: usize,
    path: &Path,
) -> Result<Option<(&'a str, NaiveDateTime)>, LoadError> {
    let Some(value) = rule.get(field) else {
        return Ok(None);
    };
    let parsed = value
        .as_str()
        .and_then(|raw| parse_access_date(raw).map(|at| (raw, at)));
    parsed.map(Some).ok_or_else(|| LoadError::InvalidAccessDate {
        path: path.to_path_buf(),
        index,
        field,
        value: value
            .as_str()
            .map_or_else(|| value.to_string(), str::to_string),
    })
}

fn check_issue_reporting(
    document: &Map<String, Value>,
    path: &Path,
) -> Result<Vec<String>, LoadError> {
    match document.get("allowIssueReporting") {
        None => Ok(Vec::new()),
        Some(value) if is_truthy(value) => Ok(vec![format!(
            "{}: \"allowIssueReporting\" is no longer needed.",
            path.display()
        )]),
        Some(_) => Err(LoadError::ForbiddenIssueReporting {
            path: path.to_path_buf(),
        }),
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
