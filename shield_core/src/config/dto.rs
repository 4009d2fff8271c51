use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The versioned moderation artifact. Loaded once, compiled into a
/// [`crate::matcher::Moderator`] and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub version: u32,
    pub terms: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub false_positives: HashMap<String, Vec<String>>,
    pub greetings: Vec<String>,
    #[serde(default)]
    pub combinations: Vec<Vec<String>>,
    pub sentiment: SentimentKeywords,
    pub language: LanguageHints,
    #[serde(default)]
    pub limits: ScanLimits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentKeywords {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageHints {
    #[serde(default)]
    pub roman_bangla: Vec<String>,
    #[serde(default)]
    pub english: Vec<String>,
    #[serde(default = "default_english_ratio")]
    pub english_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanLimits {
    #[serde(default = "default_max_scan_chars")]
    pub max_scan_chars: usize,
    #[serde(default = "default_min_spaced_term_chars")]
    pub min_spaced_term_chars: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_scan_chars: default_max_scan_chars(),
            min_spaced_term_chars: default_min_spaced_term_chars(),
        }
    }
}

fn default_english_ratio() -> f64 {
    1.5
}

fn default_max_scan_chars() -> usize {
    2000
}

fn default_min_spaced_term_chars() -> usize {
    3
}
