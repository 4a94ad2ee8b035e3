use anyhow::Context;
use cohort_analytics::{Population, population};
use cohort_config::CohortConfig;

use crate::cli::GlobalFlags;

/// Everything a command handler needs: config and the generated population.
pub struct AppContext {
    pub config: CohortConfig,
    pub population: &'static Population,
}

impl AppContext {
    /// Resolve the seed and generate the process-wide population.
    pub fn init(config: CohortConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let size = config.population.size;
        let seed = config.population.seed.unwrap_or_else(rand::random);
        if !config.population.is_seeded() && !flags.quiet {
            eprintln!("cohort: no seed configured, using --seed {seed}");
        }

        let population = population::init(size, seed)
            .with_context(|| format!("failed to generate population of {size}"))?;
        tracing::info!(size, seed, "population ready");

        Ok(Self { config, population })
    }
}

#[cfg(test)]
impl AppContext {
    /// Context over a private, leaked population so tests never touch the
    /// process-wide one.
    pub fn for_tests(size: usize, seed: u64) -> Self {
        let population = Population::generate(size, seed).expect("test population");
        Self {
            config: CohortConfig::default(),
            population: Box::leak(Box::new(population)),
        }
    }
}
