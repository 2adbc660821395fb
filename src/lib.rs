//! Moderation Engine - whole-word prohibited-term matching for text moderation
//!
//! This library decides whether a text contains a prohibited term and
//! reports which terms matched:
//! - Case-insensitive (ASCII) whole-token matching
//! - Whitespace tokenization, punctuation left attached
//! - Pluggable term sources (built-in list, memory, text or JSON files)
//! - Token-set or Aho-Corasick matching strategies
//! - Lazily-built shared moderator with an optional LRU outcome cache
//!
//! # Example
//!
//! ```rust
//! use moderation_engine::{moderate_text, MatcherOptions, MemoryTermSource, TermMatcher};
//!
//! // Process-wide moderator with the built-in term list
//! let outcome = moderate_text("SPAM alert").unwrap();
//! assert!(!outcome.allowed);
//! assert_eq!(outcome.bad_words, Some(vec!["spam".to_string()]));
//!
//! // Dedicated matcher with its own terms
//! let source = MemoryTermSource::new(["lorem", "ipsum"]);
//! let matcher = TermMatcher::new(&source, MatcherOptions::default()).unwrap();
//! assert!(matcher.contains_prohibited_term("Lorem dolor"));
//! assert!(!matcher.contains_prohibited_term("lorem, dolor"));
//! ```
//!
//! # Term List Syntax
//!
//! Text term lists hold one term per line:
//! ```text
//! # comments start with '#'
//! spam
//! hate        # trailing comments are fine
//! file: /etc/moderation/extra.txt
//! ```
//!
//! JSON term lists are a single array of strings: `["spam", "hate"]`.
//!
//! ## Matching Modes
//!
//! | Strategy | Mode | "spammer" vs term "spam" |
//! |----------|------|--------------------------|
//! | `TokenSet` | `WholeWord` | no match |
//! | `Automaton` | `WholeWord` | no match |
//! | `Automaton` | `Substring` | match |

pub mod error;
pub mod filter;
pub mod matcher;
pub mod moderate;
pub mod terms;
pub mod tokenize;
pub mod types;

// Re-export commonly used items
pub use error::{ModerationError, Result, TermSourceErrorKind};
pub use filter::{MatcherOptions, TermMatcher};
pub use matcher::{
    AutomatonMatcher, MatchMode, MatchStrategy, Matcher, TextMatcher, TokenSetMatcher,
};
pub use moderate::{
    moderate_text, moderate_value, Moderator, ModeratorOptions, DEFAULT_CACHE_SIZE,
    MAX_CACHED_TEXT_LEN, MAX_CACHE_SIZE,
};
pub use terms::{
    FileTermSource, MemoryTermSource, NilTermSource, ProhibitedTermSet, StaticTermSource,
    TermListFormat, TermSource, DEFAULT_TERMS,
};
pub use types::{MatchResult, ModerationOutcome};
