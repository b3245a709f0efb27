//! Rust Select Core Library
//!
//! This crate provides the data model and configuration handling for
//! rust-select, an interactive single/multi choice picker for the terminal.
//! It has no terminal dependencies: the interactive engine lives in the CLI
//! crate and consumes the types defined here.
//!
//! # Key Features
//!
//! - **Choice Definitions**: Choices, prompt specs and themes, loadable from YAML
//! - **Default Resolution**: One set of matching rules for ordinals, values and labels
//! - **Configuration Management**: Theme and prompt file paths and engine timing defaults
//! - **Error Handling**: One error type covering terminal, decode and configuration failures
//!
//! # Examples
//!
//! Loading a prompt from a file:
//!
//! ```no_run
//! use rust_select_core::file_handling::get_prompt_spec;
//!
//! let spec = get_prompt_spec("/path/to/prompt.yml")?;
//! for choice in &spec.choices {
//!     println!("Choice: {}", choice);
//! }
//! # Ok::<(), rust_select_core::error::Error>(())
//! ```

pub mod choice_definitions;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod resolution;
