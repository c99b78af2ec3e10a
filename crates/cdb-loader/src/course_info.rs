//! Loading `infoCourse.json` into a [`CourseInfo`].

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use cdb_config::LoaderConfig;
use cdb_core::defaults::{
    EXAMPLE_COURSE_NAME, EXAMPLE_COURSE_TITLE, builtin_assessment_sets, builtin_tags,
};
use cdb_core::entities::{
    AssessmentSet, CourseDescriptor, CourseInfo, CourseOptions, Origin, Tag,
};
use cdb_core::kind::{COURSE_INSTANCES_DIR, QUESTIONS_DIR};
use cdb_core::{EntityKind, Loaded};
use cdb_schema::SchemaRegistry;

use crate::error::LoadError;
use crate::reader::read_and_validate;

/// Entries of a course-level list that are unique by name.
trait Named {
    const LABEL: &'static str;
    fn name(&self) -> &str;
    fn declare(&mut self);
}

impl Named for AssessmentSet {
    const LABEL: &'static str = "assessmentSet";
    fn name(&self) -> &str {
        &self.name
    }
    fn declare(&mut self) {
        self.origin = Origin::Declared;
    }
}

impl Named for Tag {
    const LABEL: &'static str = "tag";
    fn name(&self) -> &str {
        &self.name
    }
    fn declare(&mut self) {
        self.origin = Origin::Declared;
    }
}

/// Load and validate the course descriptor in `course_dir`.
///
/// Built-in assessment sets and tags are appended after the declared ones,
/// skipping any name the course already declares. Each skipped built-in
/// and each repeated declaration yields a warning.
///
/// # Errors
///
/// `LoadError::CourseInfoMissing` when there is no descriptor, otherwise
/// any read, validation or decode error for it.
pub async fn load_course_info(
    course_dir: &Path,
    registry: &SchemaRegistry,
    config: &LoaderConfig,
) -> Result<Loaded<CourseInfo>, LoadError> {
    let kind = EntityKind::Course;
    let path = course_dir.join(kind.descriptor_file());

    let document = match read_and_validate(&path, kind.schema_name(), registry).await {
        Ok(Some(document)) => document,
        Ok(None) => return Err(LoadError::CourseInfoMissing { path }),
        Err(LoadError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            return Err(LoadError::CourseInfoMissing { path });
        }
        Err(e) => return Err(e),
    };

    let descriptor: CourseDescriptor = serde_json::from_value(Value::Object(document))
        .map_err(|source| LoadError::Decode {
            path: path.clone(),
            source,
        })?;

    let mut warnings = Vec::new();
    let assessment_sets = with_builtins(
        descriptor.assessment_sets.unwrap_or_default(),
        builtin_assessment_sets(),
        &mut warnings,
    );
    let tags = with_builtins(
        descriptor.tags.unwrap_or_default(),
        builtin_tags(),
        &mut warnings,
    );

    let uuid = descriptor.uuid.to_lowercase();
    let is_example_course = uuid == config.example_course_uuid.to_lowercase()
        && descriptor.title == EXAMPLE_COURSE_TITLE
        && descriptor.name == EXAMPLE_COURSE_NAME;

    let info = CourseInfo {
        uuid,
        name: descriptor.name,
        title: descriptor.title,
        timezone: descriptor.timezone,
        path: course_dir.to_path_buf(),
        questions_dir: course_dir.join(QUESTIONS_DIR),
        course_instances_dir: course_dir.join(COURSE_INSTANCES_DIR),
        assessment_sets,
        tags,
        topics: descriptor.topics,
        options: CourseOptions {
            use_new_question_renderer: descriptor.options.use_new_question_renderer,
            is_example_course,
        },
    };

    tracing::debug!(
        course = %info.name,
        assessment_sets = info.assessment_sets.len(),
        tags = info.tags.len(),
        "loaded course info"
    );
    Ok(Loaded::new(info, warnings))
}

fn with_builtins<T: Named>(
    declared: Vec<T>,
    builtins: Vec<T>,
    warnings: &mut Vec<String>,
) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(declared.len() + builtins.len());

    for mut entry in declared {
        entry.declare();
        if seen.insert(entry.name().to_string()) {
            merged.push(entry);
        } else {
            warnings.push(format!(
                "Duplicate {} \"{}\" in infoCourse.json",
                T::LABEL,
                entry.name()
            ));
        }
    }

    for builtin in builtins {
        if seen.contains(builtin.name()) {
            warnings.push(format!(
                "Default {} \"{}\" should not be included in infoCourse.json",
                T::LABEL,
                builtin.name()
            ));
        } else {
            merged.push(builtin);
        }
    }
    merged
}
