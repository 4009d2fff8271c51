use crate::normalizer::script::{contains_bengali, is_word_char, script_of};

/// Byte offsets of every occurrence of `needle`, overlapping ones included.
pub fn occurrences(haystack: &str, needle: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    if needle.is_empty() {
        return positions;
    }

    let mut start = 0;
    while let Some(offset) = haystack[start..].find(needle) {
        let position = start + offset;
        positions.push(position);
        let step = haystack[position..].chars().next().map_or(1, char::len_utf8);
        start = position + step;
    }

    positions
}

/// True when the occurrence of `needle` at `position` is not glued to a word
/// character of the same script on either side.
pub fn is_whole_word_at(haystack: &str, position: usize, needle: &str) -> bool {
    let before = haystack[..position].chars().next_back();
    let after = haystack[position + needle.len()..].chars().next();

    !joins(before, needle.chars().next()) && !joins(after, needle.chars().next_back())
}

fn joins(neighbour: Option<char>, edge: Option<char>) -> bool {
    match (neighbour.and_then(script_of), edge.and_then(script_of)) {
        (Some(neighbour), Some(edge)) => neighbour == edge,
        _ => false,
    }
}

pub fn whole_word_occurrences(haystack: &str, needle: &str) -> Vec<usize> {
    occurrences(haystack, needle)
        .into_iter()
        .filter(|&position| is_whole_word_at(haystack, position, needle))
        .collect()
}

/// Occurrences of a keyword in lowercase text. Bengali keywords match as
/// substrings since the script inflects by suffix; everything else must be
/// a whole word.
pub fn count_keyword(haystack: &str, keyword: &str) -> usize {
    if contains_bengali(keyword) {
        haystack.matches(keyword).count()
    } else {
        whole_word_occurrences(haystack, keyword).len()
    }
}

pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
}

/// Prefix of at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurrences_overlapping() {
        assert_eq!(occurrences("aaa", "aa"), vec![0, 1]);
        assert_eq!(occurrences("class pass", "ass"), vec![2, 7]);
        assert!(occurrences("abc", "").is_empty());
        assert!(occurrences("", "abc").is_empty());
    }

    #[test]
    fn test_whole_word_latin() {
        assert_eq!(whole_word_occurrences("go to hell", "hell"), vec![6]);
        assert!(whole_word_occurrences("hello there", "hell").is_empty());
        assert!(whole_word_occurrences("shell", "hell").is_empty());
        assert_eq!(whole_word_occurrences("hell, no", "hell"), vec![0]);
        assert!(whole_word_occurrences("hell2", "hell").is_empty());
    }

    #[test]
    fn test_whole_word_bengali() {
        // Vowel sign after the match glues it to the next word
        assert!(whole_word_occurrences("মাগির পোলা", "মাগি").is_empty());
        assert_eq!(whole_word_occurrences("তুই মাগি", "মাগি").len(), 1);
        // Different script families never glue
        assert_eq!(whole_word_occurrences("fuckমাগি", "fuck"), vec![0]);
    }

    #[test]
    fn test_count_keyword() {
        assert_eq!(count_keyword("hi there, hi", "hi"), 2);
        assert_eq!(count_keyword("this is nothing", "hi"), 0);
        assert_eq!(count_keyword("খুব ভালো, ভালোই", "ভালো"), 2);
    }

    #[test]
    fn test_word_tokens() {
        let tokens: Vec<&str> = word_tokens("Hello, how are you? ভালো!").collect();
        assert_eq!(tokens, vec!["Hello", "how", "are", "you", "ভালো"]);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("ভালো", 2), "ভা");
    }
}
