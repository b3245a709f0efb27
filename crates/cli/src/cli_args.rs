//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and provides
//! validation for CLI arguments using the `clap` crate.

use crate::arguments::{determine, ChoiceSource, Overrides, Provider};
use clap::Parser;
use rust_select_core::error::Result;

/// Command-line arguments for the rust-select CLI tool.
///
/// The selected value is printed to stdout; the prompt itself is drawn on
/// stderr so the command can be used inside `$(...)`.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rust_select_cli::cli_args::Args;
///
/// let args = Args::parse_from(["rsel", "apple", "banana"]);
/// assert_eq!(args.choices.len(), 2);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to a YAML prompt file with the label, mode, default and choices.
    ///
    /// Cannot be mixed with inline choices.
    #[arg(long, short = 'f')]
    pub prompt_file: Option<String>,

    /// Allow choosing several options. The values are printed comma-joined,
    /// in list order.
    #[arg(long, short = 'm', action)]
    pub multi: bool,

    /// The initially selected option(s).
    ///
    /// A value, a label or a 1-based index. In multi mode, a comma-separated
    /// list of any of these.
    #[arg(long, short = 'd')]
    pub default: Option<String>,

    /// The question shown above the choices.
    #[arg(long, short = 'l')]
    pub label: Option<String>,

    /// Path to the theme file YAML.
    ///
    /// If not provided, defaults to `~/.rust-select/theme.yml`.
    #[arg(long, short = 't')]
    pub theme_path: Option<String>,

    /// Number of choices shown at once; longer lists scroll.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// How long a bare Escape waits for the rest of an escape sequence, in
    /// milliseconds.
    ///
    /// If not provided, defaults to 50.
    #[arg(long)]
    pub escape_timeout_ms: Option<u64>,

    /// The choices, in `label` or `label=value` format.
    ///
    /// # Examples
    /// ```bash
    /// rsel "US East=us-east-1" "US West=us-west-2"
    /// ```
    pub choices: Vec<String>,
}

impl Args {
    /// The command-line settings that override a prompt file's own.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            label: self.label.clone(),
            multi: self.multi,
            default: self.default.clone(),
            page_size: self.page_size,
        }
    }
}

impl Provider for Args {
    /// Validates that a prompt file and inline choices aren't mixed and
    /// returns the appropriate [`ChoiceSource`].
    ///
    /// # Errors
    ///
    /// Returns an error if both are provided.
    fn get_source(&self) -> Result<ChoiceSource> {
        determine(self.prompt_file.as_deref(), &self.choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["rsel"]);

        assert!(args.prompt_file.is_none());
        assert!(!args.multi);
        assert!(args.default.is_none());
        assert!(args.label.is_none());
        assert!(args.theme_path.is_none());
        assert!(args.page_size.is_none());
        assert!(args.escape_timeout_ms.is_none());
        assert!(args.choices.is_empty());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "rsel",
            "-f",
            "/custom/prompt.yml",
            "-m",
            "-d",
            "1,3",
            "-l",
            "Pick",
            "-t",
            "/custom/theme.yml",
        ]);

        assert_eq!(args.prompt_file, Some("/custom/prompt.yml".to_string()));
        assert!(args.multi);
        assert_eq!(args.default, Some("1,3".to_string()));
        assert_eq!(args.label, Some("Pick".to_string()));
        assert_eq!(args.theme_path, Some("/custom/theme.yml".to_string()));
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "rsel",
            "--multi",
            "--default",
            "b",
            "--label",
            "Letters",
            "--theme-path",
            "/custom/theme.yml",
            "--page-size",
            "5",
            "--escape-timeout-ms",
            "120",
            "a",
            "b",
        ]);

        assert!(args.multi);
        assert_eq!(args.default, Some("b".to_string()));
        assert_eq!(args.label, Some("Letters".to_string()));
        assert_eq!(args.page_size, Some(5));
        assert_eq!(args.escape_timeout_ms, Some(120));
        assert_eq!(args.choices, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_overrides_mirror_flags() {
        let args = Args::parse_from(["rsel", "-m", "-l", "Letters", "a"]);
        let overrides = args.overrides();
        assert!(overrides.multi);
        assert_eq!(overrides.label.as_deref(), Some("Letters"));
        assert!(overrides.default.is_none());
    }

    #[test]
    fn test_source_provider_inline() {
        let args = Args::parse_from(["rsel", "apple", "Banana=banana"]);
        match args.get_source().unwrap() {
            ChoiceSource::Inline(choices) => {
                assert_eq!(choices, vec!["apple".to_string(), "Banana=banana".to_string()]);
            }
            other => panic!("Expected inline choices, got {other:?}"),
        }
    }

    #[test]
    fn test_source_provider_file() {
        let args = Args::parse_from(["rsel", "-f", "prompt.yml"]);
        assert_eq!(
            args.get_source().unwrap(),
            ChoiceSource::File("prompt.yml".to_string())
        );
    }

    #[test]
    fn test_source_provider_mixed_error() {
        let args = Args::parse_from(["rsel", "-f", "prompt.yml", "apple"]);
        assert!(args.get_source().is_err());
    }
}
