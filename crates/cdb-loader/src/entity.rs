//! Loading a single entity directory.

use std::path::Path;

use serde_json::Value;

use cdb_core::defaults::entity_defaults;
use cdb_core::{Entity, Loaded};
use cdb_schema::SchemaRegistry;

use crate::error::LoadError;
use crate::merge::merge_defaults;
use crate::reader::read_and_validate;
use crate::rules::{ScanContext, check_rules};

/// Load the descriptor of `E` inside `entity_dir`, identified as `id`.
///
/// The pipeline is read and validate, validate options, set the id field,
/// check rules, merge defaults, decode. Returns `Ok(None)` when
/// `entity_dir` is not a directory.
///
/// # Errors
///
/// Returns the first failure of any stage; later stages do not run.
pub async fn load_entity<E: Entity>(
    registry: &SchemaRegistry,
    entity_dir: &Path,
    id: &str,
    context: &ScanContext,
) -> Result<Option<Loaded<E>>, LoadError> {
    let kind = E::KIND;
    let path = entity_dir.join(kind.descriptor_file());

    let Some(mut document) = read_and_validate(&path, kind.schema_name(), registry).await? else {
        return Ok(None);
    };

    registry
        .validate_options(&document, kind.options_prefix())
        .map_err(|source| LoadError::Options {
            path: path.clone(),
            source,
        })?;

    if let Some(field) = kind.id_field() {
        document.insert(field.to_string(), Value::String(id.to_string()));
    }

    let warnings = check_rules(kind, &document, &path, context)?;
    let document = merge_defaults(document, &entity_defaults(kind));

    let data = serde_json::from_value(Value::Object(document))
        .map_err(|source| LoadError::Decode { path, source })?;
    Ok(Some(Loaded::new(data, warnings)))
}
