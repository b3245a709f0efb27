//! Argument processing for the rust-select CLI.
//!
//! Choices reach the CLI in one of two ways:
//! - **Prompt file**: A YAML prompt given with `-f/--prompt-file`
//! - **Inline choices**: Trailing arguments in `label` or `label=value` format
//!
//! The module ensures the two sources are not mixed and turns whichever is
//! used into a [`PromptSpec`](rust_select_core::choice_definitions::PromptSpec).

// Export public items from submodules
pub mod processing;
pub mod style;

// Re-exports for convenience
pub use processing::{parse_inline_choice, process_command_line, Overrides};
pub use style::determine;
pub use style::ChoiceSource;
pub use style::Provider;
