use std::collections::HashSet;

use crate::error::{ModerationError, Result, TermSourceErrorKind};
use crate::tokenize::{fold_case, has_separator};

/// Immutable set of prohibited whole-word terms.
///
/// Terms are stored ASCII-lowercased, so lookups must use text folded with
/// [`fold_case`](crate::tokenize::fold_case). There are no insert or remove
/// operations after construction.
#[derive(Debug, Clone, Default)]
pub struct ProhibitedTermSet {
    terms: HashSet<String>,
}

impl ProhibitedTermSet {
    /// Build a term set from a list of terms.
    ///
    /// Each term is lowercased; duplicates collapse and empty terms are
    /// skipped. A term containing whitespace could never equal a token, so it
    /// is rejected as malformed.
    pub fn from_terms<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms.into_iter();
        let mut set = HashSet::with_capacity(terms.size_hint().0);

        for term in terms {
            let term = term.as_ref();
            if term.is_empty() {
                continue;
            }
            if has_separator(term) {
                return Err(ModerationError::term_source(
                    TermSourceErrorKind::Malformed,
                    format!("Term contains whitespace: {:?}", term),
                ));
            }
            set.insert(fold_case(term));
        }

        Ok(Self { terms: set })
    }

    /// Check whether an already-folded token is a prohibited term.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(token)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the stored terms in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}
