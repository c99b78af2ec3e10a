//! Loader error types.
//!
//! Every variant that concerns a single descriptor names its file, so the
//! display text is self-contained when it is stored in a failed
//! `LoadResult` slot.

use std::path::PathBuf;

use thiserror::Error;

use cdb_config::ConfigError;
use cdb_schema::SchemaError;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The descriptor is missing or unreadable.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The descriptor exists but is not valid JSON.
    #[error("{}: invalid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The descriptor failed its primary schema.
    #[error("{}: {source}", path.display())]
    Schema { path: PathBuf, source: SchemaError },

    /// The descriptor's `options` failed the options sub-schema.
    #[error("{}: invalid options: {source}", path.display())]
    Options { path: PathBuf, source: SchemaError },

    /// The descriptor's top-level value is not an object.
    #[error("{}: descriptor must be a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    /// An assessment references a set the course does not declare.
    #[error(
        "{}: invalid \"set\": \"{set}\" (must be a \"name\" of the \"assessmentSets\" listed in infoCourse.json)",
        path.display()
    )]
    InvalidAssessmentSet { path: PathBuf, set: String },

    /// An access rule date is not an ISO-8601 timestamp.
    #[error("{}: invalid allowAccess {field} in rule {index}: {value}", path.display())]
    InvalidAccessDate {
        path: PathBuf,
        index: usize,
        field: &'static str,
        value: String,
    },

    /// An access rule starts after it ends.
    #[error(
        "{}: invalid allowAccess rule {index}: startDate ({start}) must not be after endDate ({end})",
        path.display()
    )]
    InvertedAccessRange {
        path: PathBuf,
        index: usize,
        start: String,
        end: String,
    },

    /// A course instance explicitly disables issue reporting.
    #[error(
        "{}: \"allowIssueReporting\" is no longer permitted in \"infoCourseInstance.json\". Instead, set \"allowIssueReporting\" in \"infoAssessment.json\" files.",
        path.display()
    )]
    ForbiddenIssueReporting { path: PathBuf },

    /// A validated document did not decode into its entity type.
    #[error("{}: cannot decode descriptor: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The course directory has no course descriptor.
    #[error("{}: course descriptor not found", path.display())]
    CourseInfoMissing { path: PathBuf },

    /// A directory to be scanned is missing or unreadable.
    #[error("cannot read directory {}: {source}", path.display())]
    ScanDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The schema registry could not be built.
    #[error("schema registry: {0}")]
    Registry(#[from] SchemaError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A concurrent load task panicked or was cancelled.
    #[error("entity load task failed: {0}")]
    Task(String),
}
