use anyhow::Context;
use cohort_config::CohortConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then apply `--size` / `--seed` on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CohortConfig> {
    let mut config = CohortConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_flags(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_flags(config: &mut CohortConfig, flags: &GlobalFlags) {
    if let Some(size) = flags.size {
        config.population.size = size;
    }
    if let Some(seed) = flags.seed {
        config.population.seed = Some(seed);
    }
}
