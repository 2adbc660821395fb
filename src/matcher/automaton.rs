use aho_corasick::{AhoCorasick, MatchKind};

use super::{MatchMode, TextMatcher};
use crate::error::Result;
use crate::terms::ProhibitedTermSet;
use crate::tokenize::is_separator;

/// Aho-Corasick matcher - scans the whole text once, in time linear in its
/// length regardless of how many terms are loaded.
///
/// In [`MatchMode::WholeWord`] a match only counts when it spans an entire
/// token, which gives exactly the results of
/// [`TokenSetMatcher`](super::TokenSetMatcher). Terms never contain
/// separators, so with leftmost-longest semantics the match starting at a
/// token's first byte is the whole token whenever the token is a term.
///
/// In [`MatchMode::Substring`] every non-overlapping occurrence is reported,
/// so "spammer" yields "spam".
#[derive(Debug)]
pub struct AutomatonMatcher {
    automaton: AhoCorasick,
    /// Folded terms, indexed by pattern id
    patterns: Vec<String>,
    mode: MatchMode,
}

impl AutomatonMatcher {
    /// Build the automaton from a term set.
    pub fn new(terms: &ProhibitedTermSet, mode: MatchMode) -> Result<Self> {
        let mut patterns: Vec<String> = terms.iter().map(str::to_string).collect();
        patterns.sort_unstable();

        // Terms are already folded; ASCII-insensitive search saves folding the text.
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)?;

        Ok(Self {
            automaton,
            patterns,
            mode,
        })
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Iterate over accepted matches as pattern indexes.
    fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = usize> + 'a {
        let bytes = text.as_bytes();
        self.automaton
            .find_iter(text)
            .filter(move |m| match self.mode {
                MatchMode::Substring => true,
                MatchMode::WholeWord => {
                    let starts_token = m.start() == 0 || is_separator(bytes[m.start() - 1]);
                    let ends_token = m.end() == bytes.len() || is_separator(bytes[m.end()]);
                    starts_token && ends_token
                }
            })
            .map(|m| m.pattern().as_usize())
    }
}

impl TextMatcher for AutomatonMatcher {
    fn contains_term(&self, text: &str) -> bool {
        self.matches(text).next().is_some()
    }

    fn find_terms(&self, text: &str) -> Vec<String> {
        self.matches(text)
            .map(|id| self.patterns[id].clone())
            .collect()
    }
}
