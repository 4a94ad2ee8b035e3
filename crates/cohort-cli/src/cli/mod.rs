use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// `cohort`: inspect a synthetic student population.
#[derive(Debug, Parser)]
#[command(
    name = "cohort",
    version,
    about = "Cohort - synthetic student analytics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// json (pretty), raw (one line) or an aligned table
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Row cap for listings
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Errors only; also hides the generated-seed notice
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Population size (overrides config)
    #[arg(long, global = true)]
    pub size: Option<usize>,

    /// Generation seed (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            size: self.size,
            seed: self.seed,
        }
    }
}
