//! # cdb-schema
//!
//! JSON Schema generation and validation for course descriptors.
//!
//! Descriptor types are defined in `cdb-core` with `#[derive(JsonSchema)]`.
//! This crate turns them into named, compiled schemas (`infoCourse`,
//! `infoQuestion`, `infoCourseInstance`, `infoAssessment`, and the
//! `questionOptions<type>` family) and validates parsed documents against them.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
