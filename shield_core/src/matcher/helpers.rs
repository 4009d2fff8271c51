use std::collections::HashMap;

use super::dto::LexiconEntry;
use crate::normalizer::helpers::{occurrences, whole_word_occurrences, word_tokens};
use crate::normalizer::normalize;
use crate::normalizer::script::desymbol;

const SHORT_TERM_CHARS: usize = 3;

/// Prepares every distinct term once. Terms that normalize to nothing are
/// dropped.
pub(crate) fn build_entries(
    terms: &[String],
    false_positives: &HashMap<String, Vec<String>>,
) -> Vec<LexiconEntry> {
    let covers_by_term: HashMap<String, &Vec<String>> = false_positives
        .iter()
        .map(|(term, covers)| (term.trim().to_lowercase(), covers))
        .collect();

    let mut entries: Vec<LexiconEntry> = Vec::with_capacity(terms.len());
    for raw in terms {
        let term = raw.trim().to_lowercase();
        if entries.iter().any(|entry| entry.term == term) {
            continue;
        }

        let cleaned = normalize(&term);
        let spaced = desymbol(&cleaned);
        if cleaned.is_empty() || spaced.is_empty() {
            log::warn!("Skipping lexicon term {:?}: nothing left after normalization", raw);
            continue;
        }

        let covers = covers_by_term.get(&term).map(|c| c.as_slice()).unwrap_or(&[]);
        let covers_lower: Vec<String> = covers.iter().map(|c| c.trim().to_lowercase()).collect();
        let covers_cleaned: Vec<String> = covers_lower.iter().map(|c| normalize(c)).collect();
        let covers_spaced: Vec<String> = covers_cleaned.iter().map(|c| desymbol(c)).collect();

        entries.push(LexiconEntry {
            short_ambiguous: !covers.is_empty() && term.chars().count() <= SHORT_TERM_CHARS,
            term,
            cleaned,
            spaced,
            covers_lower,
            covers_cleaned,
            covers_spaced,
        });
    }

    entries
}

/// True when `needle` occurs in `haystack` at a position that no cover word
/// occurrence spans.
pub fn has_uncovered_hit(haystack: &str, needle: &str, covers: &[String], whole_word: bool) -> bool {
    let hits = if whole_word {
        whole_word_occurrences(haystack, needle)
    } else {
        occurrences(haystack, needle)
    };

    any_uncovered(haystack, &hits, needle.len(), covers)
}

fn any_uncovered(haystack: &str, hits: &[usize], needle_len: usize, covers: &[String]) -> bool {
    if hits.is_empty() {
        return false;
    }

    let cover_spans: Vec<(usize, usize)> = covers
        .iter()
        .filter(|cover| !cover.is_empty())
        .flat_map(|cover| {
            occurrences(haystack, cover)
                .into_iter()
                .map(move |start| (start, start + cover.len()))
        })
        .collect();

    hits.iter().any(|&start| {
        let end = start + needle_len;
        !cover_spans
            .iter()
            .any(|&(cover_start, cover_end)| cover_start <= start && end <= cover_end)
    })
}

/// Normalized text with every separator removed, remembering where each of
/// its tokens started and ended.
#[derive(Debug, Clone)]
pub(crate) struct JoinedText {
    pub text: String,
    starts: Vec<usize>,
    ends: Vec<usize>,
}

impl JoinedText {
    pub fn new(cleaned: &str) -> Self {
        let mut text = String::with_capacity(cleaned.len());
        let mut starts = Vec::new();
        let mut ends = Vec::new();

        for token in word_tokens(cleaned) {
            starts.push(text.len());
            text.push_str(token);
            ends.push(text.len());
        }

        Self { text, starts, ends }
    }

    /// Like [`has_uncovered_hit`], but a hit must begin where a token began
    /// and finish where a token finished, so "wish it" never yields "shit".
    pub fn has_uncovered_hit(&self, needle: &str, covers: &[String]) -> bool {
        let hits: Vec<usize> = occurrences(&self.text, needle)
            .into_iter()
            .filter(|&start| self.on_token_edges(start, needle))
            .collect();

        any_uncovered(&self.text, &hits, needle.len(), covers)
    }

    /// A stretched first or last letter ("ccunt", "cuntt") may run past the
    /// hit up to the token edge.
    fn on_token_edges(&self, start: usize, needle: &str) -> bool {
        let (Some(first), Some(last)) = (needle.chars().next(), needle.chars().next_back()) else {
            return false;
        };

        let end = start + needle.len();
        let mut earliest = start;
        for c in self.text[..start].chars().rev() {
            if c != first {
                break;
            }
            earliest -= c.len_utf8();
        }
        let mut latest = end;
        for c in self.text[end..].chars() {
            if c != last {
                break;
            }
            latest += c.len_utf8();
        }

        self.starts.iter().any(|&s| earliest <= s && s <= start)
            && self.ends.iter().any(|&e| end <= e && e <= latest)
    }
}

/// Every token appears somewhere in one of the haystacks.
pub fn contains_all(haystacks: &[&str], tokens: &[String]) -> bool {
    tokens
        .iter()
        .all(|token| haystacks.iter().any(|haystack| haystack.contains(token.as_str())))
}
