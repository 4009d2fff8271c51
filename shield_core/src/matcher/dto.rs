use std::fmt;

use serde::Serialize;

use crate::heuristics::dto::{Language, Sentiment};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub is_flagged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FlagReason>,
    pub sentiment: Sentiment,
    pub language: Language,
}

impl AnalysisResult {
    /// Result for empty or whitespace-only comments.
    pub fn empty() -> Self {
        Self {
            is_flagged: false,
            reason: None,
            sentiment: Sentiment::Neutral,
            language: Language::Mixed,
        }
    }

    pub fn clean(sentiment: Sentiment, language: Language) -> Self {
        Self {
            is_flagged: false,
            reason: None,
            sentiment,
            language,
        }
    }

    /// Flagged comments always report negative sentiment.
    pub fn flagged(reason: FlagReason, language: Language) -> Self {
        Self {
            is_flagged: true,
            reason: Some(reason),
            sentiment: Sentiment::Negative,
            language,
        }
    }
}

/// Which scan flagged the comment and what it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FlagReason {
    Term(String),
    Pattern(String),
    Spaced(String),
    Combination(Vec<String>),
}

impl fmt::Display for FlagReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagReason::Term(term) => write!(f, "term '{}'", term),
            FlagReason::Pattern(pattern) => write!(f, "pattern '{}'", pattern),
            FlagReason::Spaced(term) => write!(f, "spaced-out term '{}'", term),
            FlagReason::Combination(tokens) => write!(f, "combination [{}]", tokens.join(", ")),
        }
    }
}

/// A lexicon term prepared for each haystack it is compared against.
#[derive(Debug, Clone)]
pub(crate) struct LexiconEntry {
    /// Lowercased term, matched against the lowercased comment.
    pub term: String,
    /// Normalized term, matched against the normalized comment.
    pub cleaned: String,
    /// Normalized term without separators, matched against the no-space form.
    pub spaced: String,
    /// Short tokens with known cover words are never matched on their own.
    pub short_ambiguous: bool,
    pub covers_lower: Vec<String>,
    pub covers_cleaned: Vec<String>,
    pub covers_spaced: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_flagged_result() {
        let result = AnalysisResult::flagged(FlagReason::Term("hell".to_string()), Language::English);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["is_flagged"], true);
        assert_eq!(json["reason"]["kind"], "term");
        assert_eq!(json["reason"]["value"], "hell");
        assert_eq!(json["sentiment"], "Negative");
        assert_eq!(json["language"], "english");
    }

    #[test]
    fn test_serialize_clean_result_omits_reason() {
        let json = serde_json::to_value(AnalysisResult::empty()).unwrap();

        assert_eq!(json["is_flagged"], false);
        assert!(json.get("reason").is_none());
        assert_eq!(json["sentiment"], "Neutral");
        assert_eq!(json["language"], "mixed");
    }

    #[test]
    fn test_reason_display() {
        let reason = FlagReason::Combination(vec!["khankir".to_string(), "pola".to_string()]);
        assert_eq!(reason.to_string(), "combination [khankir, pola]");
    }
}
