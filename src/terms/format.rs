use std::path::Path;

/// Term list file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermListFormat {
    /// One term per line, `#` comments, `file:` includes
    Text,
    /// JSON array of strings
    Json,
}

impl TermListFormat {
    /// Detect format from file extension
    pub fn detect(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "txt" | "list" => Some(TermListFormat::Text),
            "json" => Some(TermListFormat::Json),
            _ => None,
        }
    }
}
