pub mod limit;
pub mod parse;

#[cfg(test)]
pub fn test_flags() -> crate::cli::GlobalFlags {
    crate::cli::GlobalFlags {
        format: crate::cli::OutputFormat::Json,
        limit: None,
        quiet: true,
        verbose: false,
        color: crate::cli::ColorMode::Never,
        size: None,
        seed: None,
    }
}
