//! File handling and validation for rust-select configuration.
//!
//! This module reads prompt files and theme files, and validates the choice
//! lists that every prompt is built from.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use log::debug;

use crate::choice_definitions::{Choice, PromptDefinition, PromptSpec, ThemeDefinition};
use crate::error::Error::{EmptyChoices, EmptyLabel, NonUniqueValue, ZeroPageSize};
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Validates a choice list before it is handed to a widget.
///
/// # Errors
///
/// Returns an error if:
/// - There are no choices
/// - A label is empty
/// - Two choices share a value
pub fn validate_choices(source: &str, choices: &[Choice]) -> Result<()> {
    if choices.is_empty() {
        return Err(EmptyChoices(source.to_string()));
    }

    let mut values = HashSet::new();
    for choice in choices {
        if choice.label.trim().is_empty() {
            return Err(EmptyLabel);
        }

        if !values.insert(choice.value.as_str()) {
            return Err(NonUniqueValue(choice.value.clone()));
        }
    }

    Ok(())
}

/// Validates a whole prompt: its choices and its page size.
///
/// # Errors
///
/// See [`validate_choices`]; additionally fails on a page size of zero.
pub fn validate_prompt(source: &str, spec: &PromptSpec) -> Result<()> {
    if spec.page_size == Some(0) {
        return Err(ZeroPageSize);
    }

    validate_choices(source, &spec.choices)
}

/// Loads and validates a prompt from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The choices fail [`validate_choices`]
///
/// # Examples
///
/// ```no_run
/// use rust_select_core::file_handling::get_prompt_spec;
///
/// let spec = get_prompt_spec("/path/to/prompt.yml")?;
/// println!("Loaded {} choices", spec.choices.len());
/// # Ok::<(), rust_select_core::error::Error>(())
/// ```
pub fn get_prompt_spec(prompt_path: &str) -> Result<PromptSpec> {
    let reader = get_reader("prompt", prompt_path)?;

    let definition: PromptDefinition = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "prompt".to_string(),
            prompt_path.to_string(),
            e,
        )
    })?;

    let spec = PromptSpec::from(definition);
    validate_prompt(&format!("`{prompt_path}`"), &spec)?;

    Ok(spec)
}

/// Reads the theme file, if there is one.
///
/// A missing file is not an error: the built-in theme is used instead.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn get_theme(theme_path: &str) -> Result<Option<ThemeDefinition>> {
    if !Path::exists(Path::new(theme_path)) {
        debug!("No theme file at `{}`, using built-in theme", theme_path);
        return Ok(None);
    }

    let reader = get_reader("theme", theme_path)?;

    // An empty file deserializes to unit, not to an empty mapping
    let theme: Option<ThemeDefinition> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "theme".to_string(),
            theme_path.to_string(),
            e,
        )
    })?;

    Ok(Some(theme.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_validate_choices_rejects_empty_list() {
        let result = validate_choices("inline", &[]);
        assert!(matches!(result, Err(EmptyChoices(source)) if source == "inline"));
    }

    #[test]
    fn test_validate_choices_rejects_duplicate_values() {
        let choices = vec![Choice::new("Apple", "fruit"), Choice::new("Pear", "fruit")];
        let result = validate_choices("inline", &choices);
        assert!(matches!(result, Err(NonUniqueValue(value)) if value == "fruit"));
    }

    #[test]
    fn test_validate_choices_rejects_blank_label() {
        let choices = vec![Choice::new("  ", "blank")];
        assert!(matches!(validate_choices("inline", &choices), Err(EmptyLabel)));
    }

    #[test]
    fn test_validate_prompt_rejects_zero_page_size() {
        let spec = PromptSpec::new("Pick", vec![Choice::labelled("a")]).with_page_size(0);
        assert!(matches!(validate_prompt("inline", &spec), Err(ZeroPageSize)));
    }

    #[test]
    fn test_get_prompt_spec_reads_file() {
        let file = write_temp(
            r#"
label: Pick fruit
mode: multi
default: "1,3"
choices:
  - label: apple
  - label: Banana
    value: banana
    description: yellow
  - label: cherry
"#,
        );

        let spec = get_prompt_spec(file.path().to_str().unwrap()).unwrap();
        assert_eq!(spec.label, "Pick fruit");
        assert_eq!(spec.choices.len(), 3);
        assert_eq!(spec.choices[1].value, "banana");
        assert_eq!(spec.choices[1].description.as_deref(), Some("yellow"));
        assert_eq!(spec.default.as_deref(), Some("1,3"));
    }

    #[test]
    fn test_get_prompt_spec_missing_file() {
        let result = get_prompt_spec("/definitely/not/here.yml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_get_prompt_spec_bad_yaml() {
        let file = write_temp("label: [unterminated");
        let result = get_prompt_spec(file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_theme_missing_file_is_none() {
        assert!(get_theme("/definitely/not/theme.yml").unwrap().is_none());
    }

    #[test]
    fn test_get_theme_reads_markers() {
        let file = write_temp("pointer: \">\"\nchecked: \"[x]\"\npointer_color:\n  name: cyan\n");
        let theme = get_theme(file.path().to_str().unwrap()).unwrap().unwrap();
        assert_eq!(theme.pointer.as_deref(), Some(">"));
        assert_eq!(theme.checked.as_deref(), Some("[x]"));
        assert_eq!(
            theme.pointer_color.unwrap().name.as_deref(),
            Some("cyan")
        );
    }

    #[test]
    fn test_get_theme_empty_file_is_default() {
        let file = write_temp("");
        let theme = get_theme(file.path().to_str().unwrap()).unwrap();
        assert_eq!(theme, Some(ThemeDefinition::default()));
    }
}
