//! # cohort-analytics
//!
//! The analytics core of Cohort:
//! - [`generator`]: seeded synthetic population of student records
//! - [`statistics`]: Pearson correlation and population insights
//! - [`classifier`]: two-factor persona classification
//! - [`population`]: the process-wide, generate-once population
//! - [`query`]: search, filter, and sort over classified records
//!
//! Everything except [`population::init`] is a pure function over borrowed
//! records. Nothing here mutates a record after generation.

pub mod classifier;
pub mod generator;
pub mod population;
pub mod query;
pub mod statistics;

pub use classifier::classify;
pub use generator::{generate, generate_seeded};
pub use population::Population;
pub use statistics::{correlation, summarize};
