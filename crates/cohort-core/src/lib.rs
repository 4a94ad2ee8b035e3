//! # cohort-core
//!
//! Core types, persona catalog, and error types for Cohort.
//!
//! This crate provides the foundational types shared across all Cohort crates:
//! - Entity structs for student records, personas, and derived insights
//! - Enums for subjects, persona labels, levels, predictors, and score bands
//! - The static learning persona catalog
//! - Cross-cutting error types
//! - CLI response types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
