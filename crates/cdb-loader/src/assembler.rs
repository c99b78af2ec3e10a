//! Whole-course loading.
//!
//! Stages run in order, each consuming the previous one's output: course
//! info, questions, course instances, then the assessments of every course
//! instance that loaded. Assessment scans for different course instances
//! run concurrently and are independent of each other.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;

use cdb_config::LoaderConfig;
use cdb_core::entities::{AssessmentInfo, CourseInfo, CourseInstanceInfo, QuestionInfo};
use cdb_core::kind::{ASSESSMENTS_DIR, QUESTIONS_DIR};
use cdb_core::{CourseData, CourseInstanceData, LoadResult, Loaded};
use cdb_schema::SchemaRegistry;

use crate::course_info::load_course_info;
use crate::entity::load_entity;
use crate::error::LoadError;
use crate::rules::ScanContext;
use crate::scanner::{LoadEnv, ScanMode, scan_directory};

type Assessments = BTreeMap<String, LoadResult<AssessmentInfo>>;

/// Entry point for loading course content from disk.
///
/// The schema registry is built once and shared by every load. Each
/// top-level load gets its own concurrency budget of
/// `max_concurrent_loads` entity reads.
pub struct CourseLoader {
    config: LoaderConfig,
    registry: Arc<SchemaRegistry>,
}

impl CourseLoader {
    /// # Errors
    ///
    /// `LoadError::Config` for an unusable configuration,
    /// `LoadError::Registry` if a schema fails to build.
    pub fn new(config: LoaderConfig) -> Result<Self, LoadError> {
        config.validate()?;
        let registry = Arc::new(SchemaRegistry::new()?);
        Ok(Self { config, registry })
    }

    #[must_use]
    pub const fn config(&self) -> &LoaderConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Load one question without any course context.
    ///
    /// Returns `Ok(None)` when `questions/<qid>` is not a directory.
    ///
    /// # Errors
    ///
    /// Any read, validation or decode error for the question.
    pub async fn load_single_question(
        &self,
        course_dir: &Path,
        qid: &str,
    ) -> Result<Option<QuestionInfo>, LoadError> {
        let question_dir = course_dir.join(QUESTIONS_DIR).join(qid);
        let context = ScanContext::default();
        let loaded =
            load_entity::<QuestionInfo>(&self.registry, &question_dir, qid, &context).await?;
        Ok(loaded.map(|loaded| loaded.data))
    }

    /// Load a whole course, failing on the first entity error.
    ///
    /// # Errors
    ///
    /// The first error met anywhere in the course.
    pub async fn load_full_course(&self, course_dir: &Path) -> Result<CourseData, LoadError> {
        self.load(course_dir, ScanMode::Strict).await
    }

    /// Load a whole course, recording each entity's outcome in its own slot.
    ///
    /// A course whose info fails to load is returned with a failed course
    /// slot and nothing else.
    ///
    /// # Errors
    ///
    /// Only when `questions/` or `courseInstances/` cannot be listed.
    pub async fn load_full_course_with_partial_results(
        &self,
        course_dir: &Path,
    ) -> Result<CourseData, LoadError> {
        self.load(course_dir, ScanMode::Partial).await
    }

    async fn load(&self, course_dir: &Path, mode: ScanMode) -> Result<CourseData, LoadError> {
        let env = LoadEnv::new(Arc::clone(&self.registry), self.config.max_concurrent_loads);

        let Loaded {
            data: course,
            warnings,
        } = match load_course_info(course_dir, &self.registry, &self.config).await {
            Ok(loaded) => loaded,
            Err(error) if mode == ScanMode::Partial => {
                tracing::warn!(
                    course_dir = %course_dir.display(),
                    %error,
                    "course info failed to load"
                );
                return Ok(CourseData::failed_course(error));
            }
            Err(error) => return Err(error),
        };
        let course = Arc::new(course);

        let questions = scan_directory::<QuestionInfo>(
            &env,
            &course.questions_dir,
            Some(Arc::clone(&course)),
            mode,
        )
        .await?;
        let instances = scan_directory::<CourseInstanceInfo>(
            &env,
            &course.course_instances_dir,
            Some(Arc::clone(&course)),
            mode,
        )
        .await?;
        let course_instances = load_all_assessments(&env, &course, instances, mode).await?;

        let course = Arc::try_unwrap(course).unwrap_or_else(|shared| (*shared).clone());
        tracing::debug!(
            course = %course.name,
            questions = questions.len(),
            course_instances = course_instances.len(),
            "course loaded"
        );
        Ok(CourseData {
            course: Loaded::new(course, warnings).into(),
            questions,
            course_instances,
        })
    }
}

/// Scan the assessments of every loaded course instance.
async fn load_all_assessments(
    env: &LoadEnv,
    course: &Arc<CourseInfo>,
    instances: BTreeMap<String, LoadResult<CourseInstanceInfo>>,
    mode: ScanMode,
) -> Result<BTreeMap<String, CourseInstanceData>, LoadError> {
    let mut course_instances = BTreeMap::new();
    let mut tasks = JoinSet::new();

    for (ciid, instance) in instances {
        if !instance.is_loaded() {
            course_instances.insert(ciid, CourseInstanceData::without_assessments(instance));
            continue;
        }
        let env = env.clone();
        let course = Arc::clone(course);
        let instance_dir = course.course_instances_dir.join(&ciid);
        tasks.spawn(async move {
            let scanned = scan_assessments(&env, instance_dir, &ciid, course, mode).await;
            (ciid, instance, scanned)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let (ciid, mut instance, scanned) = match joined {
            Ok(triple) => triple,
            Err(e) => {
                let error = LoadError::Task(e.to_string());
                if mode == ScanMode::Strict {
                    tasks.detach_all();
                    return Err(error);
                }
                tracing::warn!(%error, "assessment scan task lost");
                continue;
            }
        };

        let (assessments, warnings) = match scanned {
            Ok(scan) => scan,
            Err(error) => {
                tasks.detach_all();
                return Err(error);
            }
        };
        for warning in &warnings {
            tracing::warn!(%ciid, "{warning}");
        }
        instance.add_warnings(warnings);
        course_instances.insert(
            ciid,
            CourseInstanceData {
                course_instance: instance,
                assessments,
            },
        );
    }
    Ok(course_instances)
}

/// Check `<instance_dir>/assessments` and scan it when it is a directory.
///
/// A missing, inaccessible or non-directory `assessments` entry yields an
/// empty map and a warning. Symlinks count as non-directories. Only strict
/// mode propagates a scan error.
async fn scan_assessments(
    env: &LoadEnv,
    instance_dir: PathBuf,
    ciid: &str,
    course: Arc<CourseInfo>,
    mode: ScanMode,
) -> Result<(Assessments, Vec<String>), LoadError> {
    let assessments_dir = instance_dir.join(ASSESSMENTS_DIR);

    // lstat: a symlinked `assessments` entry is not scanned.
    let warning = match tokio::fs::symlink_metadata(&assessments_dir).await {
        Ok(metadata) if metadata.is_dir() => None,
        Ok(_) => Some(format!("\"{ciid}/{ASSESSMENTS_DIR}\" is not a directory")),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Some(format!("{ciid} has no \"{ASSESSMENTS_DIR}\" directory"))
        }
        Err(e) => Some(format!("\"{ciid}/{ASSESSMENTS_DIR}\" is inaccessible: {e}")),
    };
    if let Some(warning) = warning {
        return Ok((BTreeMap::new(), vec![warning]));
    }

    match scan_directory::<AssessmentInfo>(env, &assessments_dir, Some(course), mode).await {
        Ok(assessments) => Ok((assessments, Vec::new())),
        Err(error) if mode == ScanMode::Partial => Ok((
            BTreeMap::new(),
            vec![format!("{ciid}: assessments could not be scanned: {error}")],
        )),
        Err(error) => Err(error),
    }
}
