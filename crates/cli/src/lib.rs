//! Rust Select CLI Library
//!
//! This crate provides the interactive selection engine for rust-select and
//! the `rsel` command built on it. It handles raw terminal input, in-place
//! rendering of single and multi choice lists, and a line-based fallback for
//! non-interactive input.
//!
//! # Key Features
//!
//! - **Single Choice**: Arrow keys, Home/End and digit quick-jump
//! - **Multi Choice**: Space or digit toggles, Enter once at least one is chosen
//! - **Line Fallback**: Pipes and redirects get numbered lists and typed answers
//! - **Themes**: Markers and colors from an optional YAML theme file
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`selection`]: The input engine: decoder, widgets, renderer and fallback
//! - [`arguments`]: Turning inline arguments or a prompt file into a prompt
//!
//! # Examples
//!
//! The CLI binary (`rsel`) prints the selected value to stdout:
//!
//! ```bash
//! # Pick one of three
//! rsel apple banana cherry
//!
//! # Labels with separate values, and a default
//! rsel -l "Region" -d west "US East=east" "US West=west"
//!
//! # Pick several, comma-joined in list order
//! rsel --multi -d 1,3 a b c
//!
//! # Load the prompt from a file
//! rsel -f ~/prompts/deploy.yml
//! ```

pub mod arguments;
pub mod cli_args;
pub mod selection;
