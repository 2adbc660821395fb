//! Prohibited term sets and the sources they are loaded from.

pub mod format;
pub mod parser;
pub mod set;
pub mod source;

pub use format::TermListFormat;
pub use parser::{parse_json_terms, parse_terms, parse_terms_from_file};
pub use set::ProhibitedTermSet;
pub use source::{
    FileTermSource, MemoryTermSource, NilTermSource, StaticTermSource, TermSource, DEFAULT_TERMS,
};
