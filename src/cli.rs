//! CLI argument parsing via clap.

use clap::{Parser, ValueEnum};

/// Border theme selector exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Modern,
    Rounded,
    Ascii,
}

/// Demo questionnaire: asks a few questions and renders the answers as a
/// bordered table.
#[derive(Debug, Parser)]
#[command(name = "quest", version = quest::build_info::cli_version_text())]
pub struct Args {
    /// Border theme for the summary table.
    #[arg(long = "theme", value_enum, default_value = "modern")]
    pub theme: ThemeChoice,

    /// Draw a separator between every table row, not just after the header.
    #[arg(long = "row-borders")]
    pub row_borders: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_to_modern_theme_with_color() {
        let args = Args::parse_from(["quest"]);
        assert_eq!(args.theme, ThemeChoice::Modern);
        assert!(!args.no_color);
        assert!(!args.row_borders);
    }

    #[test]
    fn theme_parses_by_name() {
        let args = Args::parse_from(["quest", "--theme", "ascii", "--no-color"]);
        assert_eq!(args.theme, ThemeChoice::Ascii);
        assert!(args.no_color);
    }
}
