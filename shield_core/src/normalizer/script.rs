const BENGALI_BLOCK: std::ops::RangeInclusive<char> = '\u{0980}'..='\u{09FF}';
const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';

/// Coarse script family used for word-boundary decisions. Every alphanumeric
/// character outside the Bengali block is lumped into `Latin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFamily {
    Bengali,
    Latin,
}

pub fn is_bengali(c: char) -> bool {
    BENGALI_BLOCK.contains(&c)
}

/// Family of a word character, `None` for spaces, punctuation and symbols.
/// Bengali vowel signs and the virama are not alphabetic in every Unicode
/// table, so the whole block counts as word characters.
pub fn script_of(c: char) -> Option<ScriptFamily> {
    if is_bengali(c) || c == ZWNJ || c == ZWJ {
        Some(ScriptFamily::Bengali)
    } else if c.is_alphanumeric() {
        Some(ScriptFamily::Latin)
    } else {
        None
    }
}

pub fn is_word_char(c: char) -> bool {
    script_of(c).is_some()
}

/// Drops everything that is not a word character, spaces included.
pub fn desymbol(text: &str) -> String {
    text.chars().filter(|c| is_word_char(*c)).collect()
}

pub fn contains_bengali(text: &str) -> bool {
    text.chars().any(is_bengali)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_of() {
        assert_eq!(script_of('a'), Some(ScriptFamily::Latin));
        assert_eq!(script_of('7'), Some(ScriptFamily::Latin));
        assert_eq!(script_of('ক'), Some(ScriptFamily::Bengali));
        // Vowel sign and virama
        assert_eq!(script_of('ি'), Some(ScriptFamily::Bengali));
        assert_eq!(script_of('\u{09CD}'), Some(ScriptFamily::Bengali));
        assert_eq!(script_of(' '), None);
        assert_eq!(script_of('!'), None);
        // Danda lives in the Devanagari block and acts as punctuation
        assert_eq!(script_of('।'), None);
    }

    #[test]
    fn test_desymbol() {
        assert_eq!(desymbol("f u.c-k!"), "fuck");
        assert_eq!(desymbol("খা ন কি র"), "খানকির");
        assert_eq!(desymbol("  "), "");
    }
}
