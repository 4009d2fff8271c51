use std::collections::HashSet;

use crate::config::dto::LanguageHints;
use crate::heuristics::dto::Language;
use crate::normalizer::helpers::word_tokens;
use crate::normalizer::script::is_bengali;

/// Counts Bengali code points against Latin letters, each side boosted by a
/// dictionary of common words. English must win by `english_ratio`.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    roman_bangla: HashSet<String>,
    english: HashSet<String>,
    english_ratio: f64,
}

impl LanguageModel {
    pub fn new(hints: &LanguageHints) -> Self {
        Self {
            roman_bangla: hints.roman_bangla.iter().map(|w| w.to_lowercase()).collect(),
            english: hints.english.iter().map(|w| w.to_lowercase()).collect(),
            english_ratio: hints.english_ratio,
        }
    }

    pub fn detect(&self, text: &str) -> Language {
        let text_lower = text.to_lowercase();

        let bangla_chars = text_lower.chars().filter(|c| is_bengali(*c)).count();
        let english_chars = text_lower.chars().filter(|c| c.is_ascii_alphabetic()).count();

        let mut roman_bangla_words = 0;
        let mut english_words = 0;
        for token in word_tokens(&text_lower) {
            if self.roman_bangla.contains(token) {
                roman_bangla_words += 1;
            }
            if self.english.contains(token) {
                english_words += 1;
            }
        }

        let bangla_count = bangla_chars + roman_bangla_words;
        let english_count = english_chars + english_words;

        log::debug!(
            "Language counts: bangla={} english={}",
            bangla_count,
            english_count
        );

        if bangla_count > english_count {
            Language::Bangla
        } else if english_count as f64 > bangla_count as f64 * self.english_ratio {
            Language::English
        } else {
            Language::Mixed
        }
    }
}
