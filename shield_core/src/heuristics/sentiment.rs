use crate::config::dto::SentimentKeywords;
use crate::heuristics::dto::Sentiment;
use crate::normalizer::helpers::count_keyword;

/// Bag-of-words vote between a positive and a negative keyword list.
#[derive(Debug, Clone)]
pub struct SentimentModel {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl SentimentModel {
    pub fn new(keywords: &SentimentKeywords) -> Self {
        Self {
            positive: lowercase_all(&keywords.positive),
            negative: lowercase_all(&keywords.negative),
        }
    }

    pub fn score(&self, text: &str) -> Sentiment {
        let text_lower = text.to_lowercase();
        let positive_count = count_all(&text_lower, &self.positive);
        let negative_count = count_all(&text_lower, &self.negative);

        log::debug!(
            "Sentiment votes: {} positive, {} negative",
            positive_count,
            negative_count
        );

        if positive_count > negative_count {
            Sentiment::Positive
        } else if negative_count > positive_count {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

fn lowercase_all(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

fn count_all(text: &str, keywords: &[String]) -> usize {
    keywords.iter().map(|k| count_keyword(text, k)).sum()
}
