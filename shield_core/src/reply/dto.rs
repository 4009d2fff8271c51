use std::fmt;

use serde::{Deserialize, Serialize};

use crate::heuristics::dto::{Language, Sentiment};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyTemplates {
    pub greeting_triggers: Vec<String>,
    pub application_triggers: Vec<String>,
    pub greeting: ReplyBucket,
    pub application: ReplyBucket,
    pub positive: ReplyBucket,
    pub negative: ReplyBucket,
    pub neutral: ReplyBucket,
    #[serde(default)]
    pub problematic_phrases: Vec<String>,
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    #[serde(default = "default_lenient_word_count")]
    pub lenient_word_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyBucket {
    pub bangla: Vec<String>,
    pub english: Vec<String>,
}

impl ReplyBucket {
    /// Bengali replies for Bengali comments, English ones otherwise.
    pub fn for_language(&self, language: Language) -> &[String] {
        match language {
            Language::Bangla => &self.bangla,
            Language::English | Language::Mixed => &self.english,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyIntent {
    Greeting,
    Application,
    Sentiment(Sentiment),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyVerdict {
    Accepted,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    ProblematicPhrase(String),
    TooLong { words: usize, limit: usize },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::ProblematicPhrase(phrase) => {
                write!(f, "contains problematic phrase '{}'", phrase)
            }
            RejectReason::TooLong { words, limit } => {
                write!(f, "too long ({} words, limit {})", words, limit)
            }
        }
    }
}

fn default_max_words() -> usize {
    50
}

fn default_lenient_word_count() -> usize {
    5
}
