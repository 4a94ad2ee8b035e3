//! The process-wide student population.
//!
//! The population is generated at most once per process and never mutated
//! afterwards. [`init`] stores it in a [`OnceLock`]; every later reader gets
//! the same `&'static Population` and may share it across threads freely.

use std::sync::OnceLock;

use cohort_core::entities::{ClassifiedStudent, Insights, StudentRecord};
use cohort_core::errors::CoreError;

use crate::{classifier, generator, statistics};

static POPULATION: OnceLock<Population> = OnceLock::new();

/// An immutable, generation-ordered set of student records.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    seed: u64,
    records: Vec<StudentRecord>,
}

impl Population {
    /// Generate a population of `size` records from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `size` is zero.
    pub fn generate(size: usize, seed: u64) -> Result<Self, CoreError> {
        let records = generator::generate_seeded(size, seed)?;
        Ok(Self { seed, records })
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id, case-insensitively.
    #[must_use]
    pub fn find(&self, student_id: &str) -> Option<&StudentRecord> {
        self.records
            .iter()
            .find(|r| r.student_id.eq_ignore_ascii_case(student_id))
    }

    /// Every record paired with its persona.
    #[must_use]
    pub fn classified(&self) -> Vec<ClassifiedStudent> {
        classifier::cluster(&self.records)
    }

    /// Fresh [`Insights`] over the whole population.
    ///
    /// # Errors
    ///
    /// Never fails for a generated population, which is non-empty.
    pub fn insights(&self) -> Result<Insights, CoreError> {
        statistics::summarize(&self.records)
    }
}

/// Generate the process-wide population, or return it if it already exists.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if `size` is zero, or if the
/// population was already generated with a different size or seed.
pub fn init(size: usize, seed: u64) -> Result<&'static Population, CoreError> {
    if let Some(existing) = POPULATION.get() {
        return ensure_matches(existing, size, seed);
    }

    let generated = Population::generate(size, seed)?;
    tracing::debug!(size, seed, "initialized process-wide population");
    ensure_matches(POPULATION.get_or_init(|| generated), size, seed)
}

/// The process-wide population, if [`init`] has run.
#[must_use]
pub fn get() -> Option<&'static Population> {
    POPULATION.get()
}

fn ensure_matches(
    population: &'static Population,
    size: usize,
    seed: u64,
) -> Result<&'static Population, CoreError> {
    if population.len() == size && population.seed() == seed {
        return Ok(population);
    }
    tracing::warn!(
        existing_size = population.len(),
        existing_seed = population.seed(),
        size,
        seed,
        "population re-requested with different parameters"
    );
    Err(CoreError::invalid(format!(
        "population already generated with size {} and seed {}",
        population.len(),
        population.seed()
    )))
}
