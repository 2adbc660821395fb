use serde::Serialize;

/// Result of checking one text against a term matcher
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchResult {
    /// True iff `matched_terms` is empty
    pub allowed: bool,
    /// Every matched token, in input order, duplicates included
    pub matched_terms: Vec<String>,
}

impl MatchResult {
    /// Build a result from the matched terms.
    pub fn from_matches(matched_terms: Vec<String>) -> Self {
        Self {
            allowed: matched_terms.is_empty(),
            matched_terms,
        }
    }
}

/// Moderation outcome returned across the boundary.
///
/// Serializes as `{"allowed":true}` or `{"allowed":false,"badWords":[...]}`.
/// `bad_words` is `None` whenever the text is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModerationOutcome {
    pub allowed: bool,
    #[serde(rename = "badWords", skip_serializing_if = "Option::is_none")]
    pub bad_words: Option<Vec<String>>,
}

impl ModerationOutcome {
    /// An allowed outcome, with no term list.
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            bad_words: None,
        }
    }
}

impl From<MatchResult> for ModerationOutcome {
    fn from(result: MatchResult) -> Self {
        if result.allowed {
            Self::allowed()
        } else {
            Self {
                allowed: false,
                bad_words: Some(result.matched_terms),
            }
        }
    }
}
