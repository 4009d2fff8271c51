//! Bengali/English comment moderation: normalization, profanity matching,
//! sentiment and language tags, and fallback replies.

pub mod config;
pub mod error;
pub mod heuristics;
pub mod matcher;
pub mod normalizer;
pub mod reply;

use once_cell::sync::Lazy;

pub use config::LexiconConfig;
pub use error::{ShieldError, ShieldResult};
pub use heuristics::{Language, Sentiment};
pub use matcher::{AnalysisResult, FlagReason, Moderator};
pub use normalizer::normalize;
pub use reply::{ReplyDesk, ReplyTemplates, ReplyVerdict};

static DEFAULT_MODERATOR: Lazy<Moderator> =
    Lazy::new(|| Moderator::embedded().expect("embedded lexicon is invalid"));

/// Moderator built from the embedded lexicon on first use.
pub fn default_moderator() -> &'static Moderator {
    &DEFAULT_MODERATOR
}

pub fn analyze(text: &str) -> AnalysisResult {
    DEFAULT_MODERATOR.analyze(text)
}

pub fn sentiment(text: &str) -> Sentiment {
    DEFAULT_MODERATOR.sentiment(text)
}

pub fn detect_language(text: &str) -> Language {
    DEFAULT_MODERATOR.detect_language(text)
}
