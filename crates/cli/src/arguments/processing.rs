use log::debug;
use rust_select_core::choice_definitions::{Choice, PromptSpec, SelectionMode};
use rust_select_core::config::{expand_prompt_path, DEFAULT_LABEL};
use rust_select_core::error::Error::{ChoiceFormat, EmptyChoices};
use rust_select_core::error::Result;
use rust_select_core::file_handling::get_prompt_spec;

use crate::arguments::style::ChoiceSource;

/// Command-line settings that apply on top of whichever source the choices
/// come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub label: Option<String>,
    pub multi: bool,
    pub default: Option<String>,
    pub page_size: Option<usize>,
}

/// Builds the prompt to run from the choice source and the command-line
/// overrides.
///
/// A prompt file supplies its own label, mode, default and page size; any
/// override given on the command line replaces the file's setting, and
/// `--multi` always switches to multi mode.
///
/// # Errors
///
/// Returns an error if:
/// - No choices were given at all
/// - An inline choice is not in `label` or `label=value` format
/// - The prompt file cannot be read or parsed
pub fn process_command_line(source: ChoiceSource, overrides: &Overrides) -> Result<PromptSpec> {
    let mut spec = match source {
        ChoiceSource::None => return Err(EmptyChoices("the command line".to_string())),
        ChoiceSource::File(path) => {
            let path = expand_prompt_path(&path);
            debug!("Prompt file: `{path}`");
            get_prompt_spec(&path)?
        }
        ChoiceSource::Inline(inline_choices) => {
            let choices = inline_choices
                .iter()
                .map(|choice| parse_inline_choice(choice))
                .collect::<Result<Vec<_>>>()?;
            PromptSpec::new(DEFAULT_LABEL, choices)
        }
    };

    if let Some(label) = &overrides.label {
        spec.label.clone_from(label);
    }
    if overrides.multi {
        spec.mode = SelectionMode::Multi;
    }
    if overrides.default.is_some() {
        spec.default.clone_from(&overrides.default);
    }
    if overrides.page_size.is_some() {
        spec.page_size = overrides.page_size;
    }

    Ok(spec)
}

/// Parses `label` or `label=value`. Only the first `=` splits, so values may
/// contain `=`.
///
/// # Errors
///
/// Returns [`ChoiceFormat`] if the label or the value is empty.
pub fn parse_inline_choice(choice: &str) -> Result<Choice> {
    match choice.split_once('=') {
        None if !choice.trim().is_empty() => Ok(Choice::labelled(choice)),
        Some((label, value)) if !label.trim().is_empty() && !value.is_empty() => {
            Ok(Choice::new(label, value))
        }
        _ => Err(ChoiceFormat(choice.to_string())),
    }
}
