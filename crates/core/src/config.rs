//! Configuration path utilities for rust-select.
//!
//! This module resolves the theme and prompt file paths and the engine's
//! timing defaults. Shell expansions like `~` are resolved in every path.

use std::time::Duration;

/// Default path for the theme file
const DEFAULT_THEME_PATH: &str = "~/.rust-select/theme.yml";

/// Number of choice rows shown at once when the prompt does not say
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// How long a bare ESC waits for the rest of an escape sequence
pub const DEFAULT_ESCAPE_TIMEOUT: Duration = Duration::from_millis(50);

/// Label used when the caller does not give one
pub const DEFAULT_LABEL: &str = "Select an option";

/// Resolves the theme file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// theme path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use rust_select_core::config::get_theme_path;
///
/// let default_path = get_theme_path(&None);
/// let custom_path = get_theme_path(&Some("/path/to/theme.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/theme.yml");
/// ```
pub fn get_theme_path(theme_path_arg: &Option<String>) -> String {
    let theme_path = match theme_path_arg {
        Some(theme_path) => theme_path,
        None => DEFAULT_THEME_PATH,
    };

    shellexpand::tilde(theme_path).to_string()
}

/// Expands shell variables in a prompt file path.
pub fn expand_prompt_path(prompt_path: &str) -> String {
    shellexpand::tilde(prompt_path).to_string()
}

/// Converts a millisecond count from the command line into the lookahead window.
pub fn escape_timeout(millis: Option<u64>) -> Duration {
    millis.map_or(DEFAULT_ESCAPE_TIMEOUT, Duration::from_millis)
}
