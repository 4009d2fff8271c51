/// Leetspeak symbols and the letter each one stands for.
const LEET_SUBSTITUTIONS: &[(char, char)] = &[
    ('@', 'a'),
    ('4', 'a'),
    ('3', 'e'),
    ('1', 'i'),
    ('!', 'i'),
    ('0', 'o'),
    ('5', 's'),
    ('$', 's'),
    ('7', 't'),
];

/// Decoration dropped outright so "f*u*c*k" closes up.
const DECORATIVE: &[char] = &['*', '#', '%', '&', '+', '='];

/// Punctuation that becomes a single space.
const SEPARATORS: &[char] = &[
    '_', '-', '.', ',', ';', ':', '(', ')', '[', ']', '{', '}', '<', '>', '/', '\\', '|',
];

/// Longest run of one character that survives normalization.
const MAX_RUN: usize = 2;

/// Canonical lowercase form of a comment. Deterministic and idempotent, and
/// empty for empty or whitespace-only input.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    let mut substituted = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if let Some(&(_, letter)) = LEET_SUBSTITUTIONS.iter().find(|(symbol, _)| *symbol == c) {
            substituted.push(letter);
        } else if DECORATIVE.contains(&c) {
            continue;
        } else if SEPARATORS.contains(&c) {
            substituted.push(' ');
        } else {
            substituted.push(c);
        }
    }

    let spaced = substituted.split_whitespace().collect::<Vec<_>>().join(" ");
    collapse_runs(&spaced, MAX_RUN)
}

/// Caps every run of an identical character at `max_run` ("fukkkk" -> "fukk").
pub fn collapse_runs(text: &str, max_run: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous = None;
    let mut run = 0;

    for c in text.chars() {
        if previous == Some(c) {
            run += 1;
        } else {
            previous = Some(c);
            run = 1;
        }
        if run <= max_run {
            result.push(c);
        }
    }

    result
}
