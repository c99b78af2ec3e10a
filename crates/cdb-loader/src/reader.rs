//! Descriptor reading.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};

use cdb_schema::SchemaRegistry;

use crate::error::LoadError;

/// Read `path`, parse it as JSON and validate it against `schema`.
///
/// Returns `Ok(None)` when a parent component of `path` is not a directory,
/// which is how a stray file among entity directories is skipped.
///
/// # Errors
///
/// `LoadError::Io` when the file is missing or unreadable, `LoadError::Json`
/// when it does not parse, `LoadError::Schema` when it fails validation.
pub async fn read_and_validate(
    path: &Path,
    schema: &str,
    registry: &SchemaRegistry,
) -> Result<Option<Map<String, Value>>, LoadError> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotADirectory => return Ok(None),
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let document: Value = serde_json::from_str(&contents).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    registry
        .validate(schema, &document)
        .map_err(|source| LoadError::Schema {
            path: path.to_path_buf(),
            source,
        })?;

    match document {
        Value::Object(map) => Ok(Some(map)),
        _ => Err(LoadError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}
