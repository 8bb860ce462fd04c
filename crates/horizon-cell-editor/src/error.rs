//! Error types for the cell editing layer.

use std::path::PathBuf;

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;

/// Raw cell text could not be converted to the editor's value type.
///
/// Parse errors never escape an edit session: the editor turns them into a
/// rejected commit with error feedback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text is empty or only whitespace.
    #[error("no value entered")]
    Empty,

    /// The text is not a well-formed value of the expected kind.
    #[error("'{text}' is not a valid {expected}")]
    Invalid {
        text: String,
        expected: &'static str,
    },

    /// The text is well-formed but its magnitude does not fit the target type.
    #[error("'{text}' is out of range for {expected}")]
    OutOfRange {
        text: String,
        expected: &'static str,
    },

    /// The text names a value that cells cannot hold (NaN, infinity).
    #[error("'{text}' is not a finite number")]
    NotFinite { text: String },

    /// Error raised by an application-supplied parser.
    #[error("{0}")]
    Custom(String),
}

impl ParseError {
    /// Create an invalid-format error.
    pub fn invalid(text: impl Into<String>, expected: &'static str) -> Self {
        Self::Invalid {
            text: text.into(),
            expected,
        }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(text: impl Into<String>, expected: &'static str) -> Self {
        Self::OutOfRange {
            text: text.into(),
            expected,
        }
    }

    /// Create an error with a free-form message.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// Host protocol violations.
///
/// These describe calls made in the wrong session state. They are distinct
/// from rejected commits, which are a normal [`CommitOutcome`](crate::CommitOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// No edit session is active.
    #[error("no edit session is active; call begin_edit first")]
    NotEditing,

    /// The active session already committed and is waiting for the host to finish it.
    #[error("the edit session has already committed; call finish_edit or begin_edit")]
    AlreadyCommitted,

    /// The active session has not committed yet; cancel it or commit first.
    #[error("the edit session has not committed; call attempt_commit or cancel")]
    NotCommitted,
}

/// Editor misconfiguration, reported before any edit session starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The editor was built without a parser.
    #[error("editor has no parser; supply one with EditorBuilder::parser")]
    MissingParser,

    /// The editor was built without a validation rule.
    #[error("editor has no validation rule; supply one with EditorBuilder::rule")]
    MissingRule,

    /// Malformed TOML configuration.
    #[error("invalid editor configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("failed to read editor configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
