//! # cdb-loader
//!
//! Reads a course directory into a [`CourseData`] tree:
//!
//! ```text
//! infoCourse.json
//! questions/<qid>/info.json
//! courseInstances/<ciid>/infoCourseInstance.json
//! courseInstances/<ciid>/assessments/<tid>/infoAssessment.json
//! ```
//!
//! Every descriptor is parsed, validated against its schema (and its
//! options schema, for questions), checked against the semantic rules for
//! its kind, and merged with the kind's defaults. Siblings load
//! concurrently on tokio.
//!
//! [`CourseLoader::load_full_course`] fails on the first bad entity.
//! [`CourseLoader::load_full_course_with_partial_results`] keeps going and
//! records each entity's [`LoadResult`] in place.

pub mod assembler;
pub mod course_info;
pub mod dates;
pub mod entity;
pub mod error;
pub mod merge;
pub mod reader;
pub mod rules;
pub mod scanner;

pub use assembler::CourseLoader;
pub use course_info::load_course_info;
pub use entity::load_entity;
pub use error::LoadError;
pub use merge::merge_defaults;
pub use reader::read_and_validate;
pub use rules::{ScanContext, check_rules};
pub use scanner::{LoadEnv, ScanMode, scan_directory};

pub use cdb_core::{CourseData, CourseInstanceData, LoadResult};
