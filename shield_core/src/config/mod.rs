pub mod dto;
pub mod handler;
pub mod helpers;

pub use dto::{LanguageHints, LexiconConfig, ScanLimits, SentimentKeywords};
