use cohort_config::CohortConfig;
use figment::Jail;

#[test]
fn env_sets_population_values() {
    Jail::expect_with(|jail| {
        jail.set_env("COHORT_POPULATION__SIZE", "75");
        jail.set_env("COHORT_POPULATION__SEED", "1234");

        let config = CohortConfig::load().expect("config loads");
        assert_eq!(config.population.size, 75);
        assert_eq!(config.population.seed, Some(1234));
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".cohort")).expect("create .cohort");
        jail.create_file(
            ".cohort/config.toml",
            r"
[general]
default_limit = 40
top_performers = 3
",
        )?;
        jail.set_env("COHORT_GENERAL__DEFAULT_LIMIT", "7");

        let config = CohortConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        assert_eq!(config.general.top_performers, 3);
        Ok(())
    });
}
