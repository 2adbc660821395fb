use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ModerationError, Result, TermSourceErrorKind};

use super::format::TermListFormat;
use super::parser::{parse_json_terms, parse_terms_from_file};

/// Built-in prohibited terms used by the shared moderator
pub const DEFAULT_TERMS: &[&str] = &["badword", "spam", "offensive", "hate", "asshole"];

/// Trait for loading prohibited terms at matcher construction time.
///
/// An error must be returned whenever the source cannot be read or parsed;
/// returning an empty list in that case would let every text through.
pub trait TermSource: Send + Sync {
    /// Load the raw term list
    fn load_terms(&self) -> Result<Vec<String>>;

    /// Short human-readable description, used in log lines
    fn describe(&self) -> String;
}

/// The fixed built-in term list
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTermSource;

impl TermSource for StaticTermSource {
    fn load_terms(&self) -> Result<Vec<String>> {
        Ok(DEFAULT_TERMS.iter().map(|t| t.to_string()).collect())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// In-memory term list, mainly for tests and embedding hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryTermSource {
    terms: Vec<String>,
}

impl MemoryTermSource {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add_term(&mut self, term: impl Into<String>) {
        self.terms.push(term.into());
    }
}

impl TermSource for MemoryTermSource {
    fn load_terms(&self) -> Result<Vec<String>> {
        Ok(self.terms.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} terms)", self.terms.len())
    }
}

/// Source that never provides terms
#[derive(Debug, Clone, Copy, Default)]
pub struct NilTermSource;

impl TermSource for NilTermSource {
    fn load_terms(&self) -> Result<Vec<String>> {
        Err(ModerationError::term_source(
            TermSourceErrorKind::Unavailable,
            "No term source configured",
        ))
    }

    fn describe(&self) -> String {
        "nil".to_string()
    }
}

/// File-based term source with format auto-detection
#[derive(Debug, Clone)]
pub struct FileTermSource {
    path: PathBuf,
    format: Option<TermListFormat>,
}

impl FileTermSource {
    /// Create a new FileTermSource
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format: None,
        }
    }

    /// Set explicit format (overrides auto-detection)
    pub fn with_format(mut self, format: TermListFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Get format (explicit or detected from path)
    fn get_format(&self) -> Option<TermListFormat> {
        self.format.or_else(|| TermListFormat::detect(&self.path))
    }
}

impl TermSource for FileTermSource {
    fn load_terms(&self) -> Result<Vec<String>> {
        let format = self.get_format().ok_or_else(|| {
            ModerationError::term_source(
                TermSourceErrorKind::NotConfigured,
                format!(
                    "Cannot detect term list format for '{}'",
                    self.path.display()
                ),
            )
        })?;

        match format {
            TermListFormat::Text => parse_terms_from_file(&self.path),
            TermListFormat::Json => {
                let text = fs::read_to_string(&self.path).map_err(|e| {
                    ModerationError::term_source(
                        TermSourceErrorKind::FileError,
                        format!("Failed to read term list '{}': {}", self.path.display(), e),
                    )
                })?;
                parse_json_terms(&text)
            }
        }
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
