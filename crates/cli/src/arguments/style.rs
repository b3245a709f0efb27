//! Choice source determination and validation.
//!
//! This module defines where a prompt's choices come from and validates that
//! only one source is used at a time.

use rust_select_core::error::Error::MixedChoiceSource;
use rust_select_core::error::Result;

/// Represents where the choices for a prompt come from.
///
/// Choices can be provided in two different ways, and these sources cannot
/// be mixed in a single invocation.
#[derive(PartialEq, Clone, Debug)]
pub enum ChoiceSource {
    /// Nothing was provided
    None,
    /// A YAML prompt file, by path
    File(String),
    /// Trailing arguments in `label` or `label=value` format
    Inline(Vec<String>),
}

/// Trait for objects that can determine their choice source.
pub trait Provider {
    /// Validates that a prompt file and inline choices aren't mixed and
    /// returns the appropriate [`ChoiceSource`].
    ///
    /// # Errors
    ///
    /// Returns an error if both a prompt file and inline choices are given.
    fn get_source(&self) -> Result<ChoiceSource>;
}

/// Determines the choice source from the prompt file flag and the trailing
/// arguments.
///
/// # Errors
///
/// Returns [`MixedChoiceSource`] if both are provided.
///
/// # Examples
///
/// ```rust
/// use rust_select_cli::arguments::{determine, ChoiceSource};
///
/// let source = determine(None, &["apple".to_string(), "banana".to_string()]).unwrap();
/// assert_eq!(source, ChoiceSource::Inline(vec!["apple".to_string(), "banana".to_string()]));
///
/// let source = determine(Some("prompt.yml"), &[]).unwrap();
/// assert_eq!(source, ChoiceSource::File("prompt.yml".to_string()));
/// ```
pub fn determine(prompt_file: Option<&str>, inline_choices: &[String]) -> Result<ChoiceSource> {
    match (prompt_file, inline_choices.is_empty()) {
        (Some(_), false) => Err(MixedChoiceSource),
        (Some(path), true) => Ok(ChoiceSource::File(path.to_string())),
        (None, false) => Ok(ChoiceSource::Inline(inline_choices.to_vec())),
        (None, true) => Ok(ChoiceSource::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_none() {
        assert_eq!(determine(None, &[]).unwrap(), ChoiceSource::None);
    }

    #[test]
    fn test_determine_file() {
        let result = determine(Some("~/prompt.yml"), &[]).unwrap();
        assert_eq!(result, ChoiceSource::File("~/prompt.yml".to_string()));
    }

    #[test]
    fn test_determine_inline() {
        let choices = vec!["a".to_string(), "b=2".to_string()];
        match determine(None, &choices).unwrap() {
            ChoiceSource::Inline(values) => {
                assert_eq!(values.len(), 2);
                assert_eq!(values[1], "b=2");
            }
            other => panic!("Expected inline choices, got {other:?}"),
        }
    }

    #[test]
    fn test_determine_mixed_error() {
        let result = determine(Some("prompt.yml"), &["a".to_string()]);
        assert!(matches!(result.unwrap_err(), MixedChoiceSource));
    }
}
