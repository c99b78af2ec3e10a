//! Concurrent scanning of a parent directory of entities.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use cdb_core::entities::CourseInfo;
use cdb_core::{Entity, LoadResult, Loaded};
use cdb_schema::SchemaRegistry;

use crate::entity::load_entity;
use crate::error::LoadError;
use crate::rules::ScanContext;

/// How a scan treats a failed entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// The first entity error fails the whole scan.
    Strict,
    /// Every entity keeps its own slot, failed or loaded.
    Partial,
}

/// Resources shared by every scan of one top-level load.
///
/// `permits` bounds the entity loads in flight across all scans sharing
/// this environment, nested assessment scans included.
#[derive(Clone)]
pub struct LoadEnv {
    registry: Arc<SchemaRegistry>,
    permits: Arc<Semaphore>,
}

impl LoadEnv {
    #[must_use]
    pub fn new(registry: Arc<SchemaRegistry>, max_concurrent_loads: usize) -> Self {
        Self {
            registry,
            permits: Arc::new(Semaphore::new(max_concurrent_loads)),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }
}

/// Load every child of `parent` as an `E`, keyed by child name.
///
/// Children that are not directories are left out of the map. Siblings
/// load concurrently; the course, when given, supplies the reference data
/// for rule checks through one [`ScanContext`] created for this scan.
///
/// # Errors
///
/// `LoadError::ScanDirectory` when `parent` cannot be listed. In
/// [`ScanMode::Strict`], also the first entity error; in-flight siblings are
/// detached and their results dropped.
pub async fn scan_directory<E: Entity>(
    env: &LoadEnv,
    parent: &Path,
    course: Option<Arc<CourseInfo>>,
    mode: ScanMode,
) -> Result<BTreeMap<String, LoadResult<E>>, LoadError> {
    let ids = list_children(parent).await?;
    let context = Arc::new(ScanContext::new(course));

    let mut tasks = JoinSet::new();
    for id in ids {
        let env = env.clone();
        let context = Arc::clone(&context);
        let entity_dir = parent.join(&id);
        tasks.spawn(async move {
            let outcome: Result<Option<Loaded<E>>, LoadError> = async {
                let _permit = env
                    .permits
                    .acquire()
                    .await
                    .map_err(|e| LoadError::Task(e.to_string()))?;
                load_entity::<E>(&env.registry, &entity_dir, &id, &context).await
            }
            .await;
            (id, outcome)
        });
    }

    let mut results = BTreeMap::new();
    while let Some(joined) = tasks.join_next().await {
        let (id, outcome) = match joined {
            Ok(pair) => pair,
            Err(e) => {
                let error = LoadError::Task(e.to_string());
                if mode == ScanMode::Strict {
                    tasks.detach_all();
                    return Err(error);
                }
                tracing::warn!(parent = %parent.display(), %error, "entity load task lost");
                continue;
            }
        };

        match outcome {
            Ok(Some(loaded)) => {
                results.insert(id, LoadResult::from(loaded));
            }
            Ok(None) => {}
            Err(error) if mode == ScanMode::Strict => {
                tasks.detach_all();
                return Err(error);
            }
            Err(error) => {
                tracing::warn!(kind = %E::KIND, %id, %error, "entity failed to load");
                results.insert(id, LoadResult::failed(error));
            }
        }
    }

    tracing::debug!(
        parent = %parent.display(),
        kind = %E::KIND,
        count = results.len(),
        "scanned directory"
    );
    Ok(results)
}

/// Names of the immediate children of `parent`.
async fn list_children(parent: &Path) -> Result<Vec<String>, LoadError> {
    let scan_error = |source| LoadError::ScanDirectory {
        path: parent.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(parent).await.map_err(scan_error)?;
    let mut ids = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(scan_error)? {
        match entry.file_name().into_string() {
            Ok(name) => ids.push(name),
            Err(name) => {
                tracing::warn!(parent = %parent.display(), ?name, "skipping non UTF-8 entry");
            }
        }
    }
    Ok(ids)
}
