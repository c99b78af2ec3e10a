//! # cdb-core
//!
//! Core types shared across all coursedb crates:
//! - Entity structs for every descriptor kind (course, question, course instance, assessment)
//! - The [`EntityKind`] enum with per-kind layout constants (id field, descriptor file, schema)
//! - [`LoadResult`], the per-entity outcome carrying either an error or data plus warnings
//! - [`CourseData`], the aggregate produced by a full course load
//! - Built-in defaults (assessment sets, tags, per-kind descriptor defaults)

pub mod course_data;
pub mod defaults;
pub mod entities;
pub mod kind;
pub mod result;

pub use course_data::{CourseData, CourseInstanceData, FailedEntity};
pub use entities::Entity;
pub use kind::EntityKind;
pub use result::{LoadResult, Loaded};
