use super::TextMatcher;
use crate::terms::ProhibitedTermSet;
use crate::tokenize::{fold_case, tokens};

/// Token set matcher - folds the text, splits it on whitespace and looks
/// each token up in the term set.
///
/// This is the baseline every other strategy must agree with.
#[derive(Debug, Clone)]
pub struct TokenSetMatcher {
    terms: ProhibitedTermSet,
}

impl TokenSetMatcher {
    pub fn new(terms: ProhibitedTermSet) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &ProhibitedTermSet {
        &self.terms
    }
}

impl TextMatcher for TokenSetMatcher {
    fn contains_term(&self, text: &str) -> bool {
        let folded = fold_case(text);
        let mut words = tokens(&folded);
        words.any(|token| self.terms.contains(token))
    }

    fn find_terms(&self, text: &str) -> Vec<String> {
        let folded = fold_case(text);
        tokens(&folded)
            .filter(|token| self.terms.contains(token))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(terms: &[&str]) -> TokenSetMatcher {
        TokenSetMatcher::new(ProhibitedTermSet::from_terms(terms).unwrap())
    }

    #[test]
    fn test_exact_token_match() {
        let m = matcher(&["badword"]);
        assert!(m.contains_term("this is a badword example"));
        assert_eq!(m.find_terms("this is a badword example"), vec!["badword"]);
    }

    #[test]
    fn test_case_insensitive() {
        let m = matcher(&["spam"]);
        assert_eq!(m.find_terms("SPAM alert"), vec!["spam"]);
        assert_eq!(m.find_terms("SpAm"), vec!["spam"]);
    }

    #[test]
    fn test_substring_does_not_match() {
        let m = matcher(&["spam"]);
        assert!(!m.contains_term("spammer community"));
        assert!(m.find_terms("spammer community").is_empty());
    }

    #[test]
    fn test_attached_punctuation_does_not_match() {
        let m = matcher(&["spam"]);
        assert!(!m.contains_term("spam, spam. (spam)"));
    }

    #[test]
    fn test_duplicates_in_order() {
        let m = matcher(&["spam", "hate"]);
        assert_eq!(
            m.find_terms("hate spam is spam"),
            vec!["hate", "spam", "spam"]
        );
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let m = matcher(&["spam"]);
        assert!(!m.contains_term(""));
        assert!(m.find_terms("").is_empty());
        assert!(!m.contains_term(" \t\n "));
        assert!(m.find_terms(" \t\n ").is_empty());
    }

    #[test]
    fn test_non_ascii_not_folded() {
        let m = matcher(&["école"]);
        assert!(m.contains_term("école"));
        assert!(!m.contains_term("ÉCOLE"));
        assert!(m.contains_term("éCOLE"));
    }
}
