use thiserror::Error;

/// Classifies term source errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSourceErrorKind {
    /// Required path or format not configured
    NotConfigured,
    /// File open/read failure
    FileError,
    /// Term list content could not be parsed
    Malformed,
    /// Source cannot provide terms at all
    Unavailable,
}

/// Moderation engine error types
#[derive(Error, Debug)]
pub enum ModerationError {
    #[error("String expected, got {found}")]
    InvalidInputType { found: String },

    #[error("Term source error: {message}")]
    TermSource {
        kind: TermSourceErrorKind,
        message: String,
    },

    #[error("Term list error at line {line}: {message}")]
    TermSourceAtLine { line: usize, message: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Automaton error: {0}")]
    Automaton(#[from] aho_corasick::BuildError),
}

impl ModerationError {
    pub(crate) fn term_source(kind: TermSourceErrorKind, message: impl Into<String>) -> Self {
        ModerationError::TermSource {
            kind,
            message: message.into(),
        }
    }

    /// Whether this error came from loading the term list.
    pub fn is_term_source(&self) -> bool {
        matches!(
            self,
            ModerationError::TermSource { .. } | ModerationError::TermSourceAtLine { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ModerationError>;
