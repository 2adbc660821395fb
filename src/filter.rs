//! Term matcher.
//!
//! Owns one immutable prohibited term set and answers read-only queries
//! against it. Safe to share across threads without locking.

use serde::Deserialize;
use tracing::debug;

use crate::error::{ModerationError, Result};
use crate::matcher::{
    AutomatonMatcher, MatchMode, MatchStrategy, Matcher, TextMatcher, TokenSetMatcher,
};
use crate::terms::{ProhibitedTermSet, TermSource};
use crate::types::MatchResult;

/// Term matcher construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MatcherOptions {
    /// Matching algorithm
    pub strategy: MatchStrategy,
    /// Whole-word or substring matching
    pub mode: MatchMode,
}

impl MatcherOptions {
    /// Create new matcher options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the matching strategy.
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the match mode.
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Prohibited term matcher
#[derive(Debug)]
pub struct TermMatcher {
    matcher: Matcher,
    term_count: usize,
    options: MatcherOptions,
}

impl TermMatcher {
    /// Create a matcher from a term source.
    ///
    /// Fails if the source fails; there is no fallback to an empty set.
    pub fn new(source: &dyn TermSource, options: MatcherOptions) -> Result<Self> {
        let terms = source.load_terms()?;
        let matcher = Self::from_terms(terms, options)?;
        debug!(
            source = %source.describe(),
            terms = matcher.term_count(),
            strategy = ?options.strategy,
            "Loaded prohibited terms"
        );
        Ok(matcher)
    }

    /// Create a matcher directly from a list of terms.
    pub fn from_terms<I, S>(terms: I, options: MatcherOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = ProhibitedTermSet::from_terms(terms)?;
        let term_count = set.len();

        let matcher = match (options.strategy, options.mode) {
            (MatchStrategy::TokenSet, MatchMode::WholeWord) => {
                Matcher::TokenSet(TokenSetMatcher::new(set))
            }
            (MatchStrategy::TokenSet, MatchMode::Substring) => {
                return Err(ModerationError::ConfigError(
                    "Substring matching requires the automaton strategy".to_string(),
                ));
            }
            (MatchStrategy::Automaton, mode) => {
                Matcher::Automaton(AutomatonMatcher::new(&set, mode)?)
            }
        };

        Ok(Self {
            matcher,
            term_count,
            options,
        })
    }

    /// Check whether the text contains any prohibited term.
    ///
    /// Stops at the first hit.
    pub fn contains_prohibited_term(&self, text: &str) -> bool {
        self.matcher.contains_term(text)
    }

    /// List every prohibited term found in the text, in input order,
    /// duplicates included.
    pub fn find_prohibited_terms(&self, text: &str) -> Vec<String> {
        self.matcher.find_terms(text)
    }

    /// Check the text and build a full match result.
    pub fn check(&self, text: &str) -> MatchResult {
        if !self.contains_prohibited_term(text) {
            return MatchResult::from_matches(Vec::new());
        }
        MatchResult::from_matches(self.find_prohibited_terms(text))
    }

    /// Number of distinct terms loaded.
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.options.strategy
    }

    pub fn mode(&self) -> MatchMode {
        self.options.mode
    }
}
