//! Keyword-vote sentiment and character-count language detection.

pub mod dto;
pub mod language;
pub mod sentiment;

pub use dto::{Language, Sentiment};
pub use language::LanguageModel;
pub use sentiment::SentimentModel;
