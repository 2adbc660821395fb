mod automaton;
mod token;

pub use automaton::AutomatonMatcher;
pub use token::TokenSetMatcher;

use serde::Deserialize;

/// Trait for prohibited-term text matchers
pub trait TextMatcher: Send + Sync {
    /// Check if any prohibited term occurs in the text.
    fn contains_term(&self, text: &str) -> bool {
        !self.find_terms(text).is_empty()
    }

    /// List every prohibited term occurrence, in input order.
    fn find_terms(&self, text: &str) -> Vec<String>;
}

/// Matching algorithm selected at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Per-token hash set lookup
    #[default]
    TokenSet,
    /// Aho-Corasick automaton over the whole text
    Automaton,
}

/// What counts as an occurrence of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// A whitespace-delimited token must equal the term: "spammer" does not match "spam"
    #[default]
    WholeWord,
    /// The term may occur anywhere, including inside a larger token (automaton only)
    Substring,
}

/// Enum wrapper for all matcher types
#[derive(Debug)]
pub enum Matcher {
    TokenSet(TokenSetMatcher),
    Automaton(AutomatonMatcher),
}

impl TextMatcher for Matcher {
    fn contains_term(&self, text: &str) -> bool {
        match self {
            Matcher::TokenSet(m) => m.contains_term(text),
            Matcher::Automaton(m) => m.contains_term(text),
        }
    }

    fn find_terms(&self, text: &str) -> Vec<String> {
        match self {
            Matcher::TokenSet(m) => m.find_terms(text),
            Matcher::Automaton(m) => m.find_terms(text),
        }
    }
}
