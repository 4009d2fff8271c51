use std::path::Path;

use regex::{RegexBuilder, RegexSet, RegexSetBuilder};

use super::dto::{AnalysisResult, FlagReason, LexiconEntry};
use super::helpers::{build_entries, contains_all, has_uncovered_hit, JoinedText};
use crate::config::dto::{LexiconConfig, ScanLimits};
use crate::error::{ShieldError, ShieldResult};
use crate::heuristics::dto::{Language, Sentiment};
use crate::heuristics::language::LanguageModel;
use crate::heuristics::sentiment::SentimentModel;
use crate::normalizer::helpers::truncate_chars;
use crate::normalizer::normalize;

/// Compiled, read-only moderation tables. Every method takes `&self`, so one
/// instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Moderator {
    version: u32,
    entries: Vec<LexiconEntry>,
    patterns: RegexSet,
    greetings: Vec<String>,
    combinations: Vec<Vec<String>>,
    sentiment: SentimentModel,
    language: LanguageModel,
    limits: ScanLimits,
}

impl Moderator {
    /// Compiles a validated config. A pattern that fails to compile is
    /// fatal.
    pub fn new(config: LexiconConfig) -> ShieldResult<Self> {
        config.validate()?;

        let patterns = compile_patterns(&config.patterns)?;
        let entries = build_entries(&config.terms, &config.false_positives);

        let greetings = config
            .greetings
            .iter()
            .map(|g| g.trim().to_lowercase())
            .filter(|g| !g.is_empty())
            .collect();

        let combinations = config
            .combinations
            .iter()
            .map(|group| group.iter().map(|token| token.trim().to_lowercase()).collect())
            .collect();

        log::info!(
            "Moderator ready: lexicon v{}, {} entries, {} patterns",
            config.version,
            entries.len(),
            patterns.len()
        );

        Ok(Self {
            version: config.version,
            entries,
            patterns,
            greetings,
            combinations,
            sentiment: SentimentModel::new(&config.sentiment),
            language: LanguageModel::new(&config.language),
            limits: config.limits,
        })
    }

    pub fn embedded() -> ShieldResult<Self> {
        Self::new(LexiconConfig::embedded()?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> ShieldResult<Self> {
        Self::new(LexiconConfig::from_path(path)?)
    }

    pub fn lexicon_version(&self) -> u32 {
        self.version
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            return AnalysisResult::empty();
        }

        let language = self.language.detect(text);

        if self.is_greeting(text) {
            log::debug!("Greeting short-circuit");
            return AnalysisResult::clean(self.sentiment.score(text), language);
        }

        match self.detect(text) {
            Some(reason) => {
                log::debug!("Flagged by {}", reason);
                AnalysisResult::flagged(reason, language)
            }
            None => AnalysisResult::clean(self.sentiment.score(text), language),
        }
    }

    /// Same as [`Moderator::analyze`] for raw bytes that must be UTF-8.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> ShieldResult<AnalysisResult> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ShieldError::InvalidInput(format!("comment is not UTF-8 text: {}", e)))?;
        Ok(self.analyze(text))
    }

    pub fn sentiment(&self, text: &str) -> Sentiment {
        self.sentiment.score(text)
    }

    pub fn detect_language(&self, text: &str) -> Language {
        self.language.detect(text)
    }

    pub fn is_greeting(&self, text: &str) -> bool {
        let original_lower = text.trim().to_lowercase();
        if original_lower.is_empty() {
            return false;
        }

        self.greetings
            .iter()
            .any(|greeting| greeting_form_matches(&original_lower, greeting))
    }

    /// Runs the offensive-language scans in order and reports the first hit.
    /// Does not apply the greeting short-circuit.
    pub fn detect(&self, text: &str) -> Option<FlagReason> {
        let original_lower = text.trim().to_lowercase();
        let cleaned = normalize(text);
        log::debug!("Cleaned text: {:?}", cleaned);

        if let Some(term) = self.scan_lexicon(&cleaned, &original_lower) {
            return Some(FlagReason::Term(term));
        }

        if let Some(pattern) = self.scan_patterns(&cleaned, &original_lower) {
            return Some(FlagReason::Pattern(pattern));
        }

        let joined = JoinedText::new(&cleaned);
        if let Some(term) = self.scan_spaced(&joined) {
            return Some(FlagReason::Spaced(term));
        }

        self.scan_combinations(&cleaned, &original_lower)
            .map(FlagReason::Combination)
    }

    fn scan_lexicon(&self, cleaned: &str, original_lower: &str) -> Option<String> {
        self.entries
            .iter()
            .filter(|entry| !entry.short_ambiguous)
            .find(|entry| {
                has_uncovered_hit(cleaned, &entry.cleaned, &entry.covers_cleaned, true)
                    || has_uncovered_hit(original_lower, &entry.term, &entry.covers_lower, true)
            })
            .map(|entry| entry.term.clone())
    }

    fn scan_patterns(&self, cleaned: &str, original_lower: &str) -> Option<String> {
        let max_chars = self.limits.max_scan_chars;
        let cleaned_capped = truncate_chars(cleaned, max_chars);
        let original_capped = truncate_chars(original_lower, max_chars);

        if cleaned_capped.len() < cleaned.len() || original_capped.len() < original_lower.len() {
            log::warn!(
                "Comment longer than {} characters, pattern scan limited to its prefix",
                max_chars
            );
        }

        [cleaned_capped, original_capped]
            .iter()
            .find_map(|haystack| self.patterns.matches(haystack).iter().next())
            .map(|index| self.patterns.patterns()[index].clone())
    }

    fn scan_spaced(&self, joined: &JoinedText) -> Option<String> {
        self.entries
            .iter()
            .filter(|entry| {
                !entry.short_ambiguous
                    && entry.spaced.chars().count() >= self.limits.min_spaced_term_chars
            })
            .find(|entry| joined.has_uncovered_hit(&entry.spaced, &entry.covers_spaced))
            .map(|entry| entry.term.clone())
    }

    fn scan_combinations(&self, cleaned: &str, original_lower: &str) -> Option<Vec<String>> {
        self.combinations
            .iter()
            .find(|group| contains_all(&[original_lower, cleaned], group))
            .cloned()
    }
}

/// The whole comment, a leading "<g> ", "<g>," or "<g>!", a trailing " <g>",
/// or an interior " <g> ".
fn greeting_form_matches(original_lower: &str, greeting: &str) -> bool {
    if original_lower == greeting {
        return true;
    }

    if let Some(rest) = original_lower.strip_prefix(greeting) {
        if rest.starts_with([' ', ',', '!']) {
            return true;
        }
    }

    if let Some(head) = original_lower.strip_suffix(greeting) {
        if head.ends_with(' ') {
            return true;
        }
    }

    original_lower.contains(&format!(" {} ", greeting))
}

fn compile_patterns(patterns: &[String]) -> ShieldResult<RegexSet> {
    for pattern in patterns {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| ShieldError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
    }

    RegexSetBuilder::new(patterns)
        .case_insensitive(true)
        .build()
        .map_err(|source| ShieldError::Pattern {
            pattern: format!("<set of {}>", patterns.len()),
            source,
        })
}
