use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::global::{ColorMode, GlobalFlags, OutputFormat};

const MIN_TERM_WIDTH: usize = 40;

/// Terminal-dependent output preferences, fixed once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

/// What the process knows about its terminal.
#[derive(Clone, Copy, Debug, Default)]
struct Terminal {
    stdout_tty: bool,
    stderr_tty: bool,
    no_color: bool,
    columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS").ok().and_then(|v| v.parse().ok()),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(flags, Terminal::detect()));
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

fn resolve(flags: &GlobalFlags, terminal: Terminal) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let table_color = table
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => terminal.stdout_tty && !terminal.no_color && !flags.quiet,
        };
    UiPrefs {
        table_color,
        // Spinners draw on stderr and never mix with piped stdout.
        progress: terminal.stderr_tty && !flags.quiet,
        term_width: terminal.columns.filter(|width| *width >= MIN_TERM_WIDTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            color,
            quiet: false,
            api_url: None,
        }
    }

    #[test]
    fn auto_colour_needs_a_tty_table_without_no_color() {
        let tty = Terminal {
            stdout_tty: true,
            ..Terminal::default()
        };
        assert!(resolve(&flags(OutputFormat::Table, ColorMode::Auto), tty).table_color);
        assert!(!resolve(&flags(OutputFormat::Json, ColorMode::Auto), tty).table_color);

        let no_color = Terminal { no_color: true, ..tty };
        assert!(!resolve(&flags(OutputFormat::Table, ColorMode::Auto), no_color).table_color);
        assert!(resolve(&flags(OutputFormat::Table, ColorMode::Always), no_color).table_color);
    }

    #[test]
    fn narrow_columns_are_ignored_and_quiet_hides_progress() {
        let terminal = Terminal {
            stderr_tty: true,
            columns: Some(20),
            ..Terminal::default()
        };
        let mut quiet = flags(OutputFormat::Json, ColorMode::Auto);
        assert!(resolve(&quiet, terminal).progress);
        quiet.quiet = true;
        let prefs = resolve(&quiet, terminal);
        assert!(!prefs.progress);
        assert_eq!(prefs.term_width, None);
    }
}
