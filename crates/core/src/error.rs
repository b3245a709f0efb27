use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure while turning terminal input bytes into keys.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("malformed UTF-8 sequence {0:02x?}")]
    MalformedUtf8(Vec<u8>),

    #[error("input closed before a selection was made")]
    UnexpectedEof,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input is not an interactive terminal.")]
    NotATty,

    #[error("Unable to change terminal mode: {}", .0)]
    TerminalState(std::io::Error),

    #[error("Unable to decode terminal input: {}", .0)]
    Decode(#[from] DecodeError),

    #[error("Selection cancelled.")]
    Cancelled,

    #[error("Select at least one option.")]
    EmptySelection,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No choices were given in {}.", .0)]
    EmptyChoices(String),

    #[error("Invalid choice: label may not be empty")]
    EmptyLabel,

    #[error("Found a non-unique choice value: `{}`", .0)]
    NonUniqueValue(String),

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("Choices may come from a prompt file or the command line, not both.")]
    MixedChoiceSource,

    #[error("Invalid choice `{}`: expected `label` or `label=value`", .0)]
    ChoiceFormat(String),

    #[error("Page size must be at least 1.")]
    ZeroPageSize,
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// True for the errors a user causes on purpose; these are not reported as failures.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}
