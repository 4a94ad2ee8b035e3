//! # cohort-schema
//!
//! JSON Schema generation, validation, and registry for Cohort.
//!
//! Entity and response types are defined in `cohort-core` with
//! `#[derive(JsonSchema)]`. This crate collects their schemas into a
//! [`SchemaRegistry`] used by `cohort schema` and by output validation.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
