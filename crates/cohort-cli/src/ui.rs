//! Terminal presentation preferences, resolved once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower terminals are ignored and tables render at natural width.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    ));
}

/// Prefs set by [`init`], or plain output if it never ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

fn resolve(flags: &GlobalFlags, is_tty: bool, no_color: bool, columns: Option<&str>) -> UiPrefs {
    let is_table = flags.format == OutputFormat::Table;
    let table_color = is_table
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_tty && !flags.quiet && !no_color,
        };

    UiPrefs {
        table_color,
        term_width: columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH),
    }
}
