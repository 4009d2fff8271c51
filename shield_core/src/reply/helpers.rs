use crate::normalizer::helpers::count_keyword;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whole-word match for Latin triggers, substring match for Bengali ones.
pub fn mentions_any(comment_lower: &str, triggers: &[String]) -> bool {
    triggers
        .iter()
        .any(|trigger| count_keyword(comment_lower, trigger) > 0)
}

/// Removes a leading "<name>" followed by spaces or `,.:;` from a reply,
/// plus any `!` left in front. The name must be a whole word.
pub fn strip_addressee(reply: &str, name: &str) -> String {
    let reply = reply.trim();
    let name = name.trim();
    if name.is_empty() {
        return reply.to_string();
    }

    let rest = match strip_prefix_ignore_case(reply, name) {
        Some(rest) if !rest.starts_with(char::is_alphanumeric) => rest,
        _ => return reply.to_string(),
    };

    let rest = rest.trim_start_matches(|c: char| c.is_whitespace() || ",.:;".contains(c));
    let rest = rest.strip_prefix('!').unwrap_or(rest);
    rest.trim().to_string()
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.chars();
    for expected in prefix.chars() {
        let actual = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.as_str())
}
