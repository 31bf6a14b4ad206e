//! # String Transformations
//!
//! Pure string helpers used for headlines and by the [`Str`](crate::Str) proxy.
//!
//! Word boundaries are found by [`words`]: any non-alphanumeric character
//! separates words, and inside a run of alphanumerics a new word starts at a
//! lower→upper or digit→upper transition, or at the last capital of an
//! acronym (`"HTTPServer"` → `["HTTP", "Server"]`). Digits never start a new
//! word, so `"Case1"` stays one word.

use crate::primitives::SLUG_AT_WORD;

/// Split an identifier or phrase into words.
pub fn words(value: &str) -> Vec<String> {
    let mut words = Vec::new();

    for chunk in value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|chunk| !chunk.is_empty())
    {
        let mut current = String::new();
        let mut prev: Option<char> = None;
        let mut chars = chunk.chars().peekable();

        while let Some(ch) = chars.next() {
            if let Some(p) = prev {
                let next_is_lower = chars.peek().is_some_and(|next| next.is_lowercase());
                let boundary = ch.is_uppercase()
                    && (p.is_lowercase() || p.is_numeric() || (p.is_uppercase() && next_is_lower));
                if boundary && !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            current.push(ch);
            prev = Some(ch);
        }

        if !current.is_empty() {
            words.push(current);
        }
    }

    words
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Human-readable title rendering of an identifier.
///
/// `"CaseOne"` → `"Case One"`, `"case_one"` → `"Case One"`, `"Case1"` → `"Case1"`.
/// An acronym stays one word and is title-cased with it, so `"HTTPServer"`
/// → `"Http Server"` rather than one word per capital.
pub fn headline(value: &str) -> String {
    words(value)
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize every word, lowercasing the rest (`"hello WORLD"` → `"Hello World"`).
pub fn title(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;

    for ch in value.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}

/// Lowercase words joined by `delimiter`.
pub fn snake(value: &str, delimiter: &str) -> String {
    words(value)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Capitalized words joined together (`"case one"` → `"CaseOne"`).
pub fn studly(value: &str) -> String {
    words(value).iter().map(|word| capitalize(word)).collect()
}

/// Studly case with a lowercase first letter (`"case one"` → `"caseOne"`).
pub fn camel(value: &str) -> String {
    lcfirst(&studly(value))
}

/// URL-friendly slug.
///
/// Lowercases, drops punctuation, turns `@` into `at`, and collapses runs of
/// whitespace, `-`, `_` and `separator` into a single `separator`. Leading
/// and trailing separators are trimmed.
pub fn slug(value: &str, separator: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_separator = false;

    for ch in value.chars() {
        if ch.is_alphanumeric() {
            push_slug_char(&mut out, &mut pending_separator, separator, ch);
        } else if ch == '@' {
            pending_separator = true;
            for at in SLUG_AT_WORD.chars() {
                push_slug_char(&mut out, &mut pending_separator, separator, at);
            }
            pending_separator = true;
        } else if ch.is_whitespace() || ch == '-' || ch == '_' || separator.contains(ch) {
            pending_separator = true;
        }
    }

    out
}

fn push_slug_char(out: &mut String, pending_separator: &mut bool, separator: &str, ch: char) {
    if *pending_separator && !out.is_empty() {
        out.push_str(separator);
    }
    *pending_separator = false;
    out.extend(ch.to_lowercase());
}

/// Uppercase the first character only.
pub fn ucfirst(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character only.
pub fn lcfirst(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keep at most `limit` characters, appending `end` when truncated.
pub fn limit(value: &str, limit: usize, end: &str) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }

    let kept: String = value.chars().take(limit).collect();
    format!("{}{}", kept.trim_end(), end)
}

/// Ensure `value` begins with a single instance of `prefix`.
pub fn start(value: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return value.to_string();
    }

    let mut rest = value;
    while let Some(stripped) = rest.strip_prefix(prefix) {
        rest = stripped;
    }
    format!("{prefix}{rest}")
}

/// Ensure `value` ends with a single instance of `cap`.
pub fn finish(value: &str, cap: &str) -> String {
    if cap.is_empty() {
        return value.to_string();
    }

    let mut rest = value;
    while let Some(stripped) = rest.strip_suffix(cap) {
        rest = stripped;
    }
    format!("{rest}{cap}")
}

/// Reverse the characters of `value`.
pub fn reverse(value: &str) -> String {
    value.chars().rev().collect()
}

/// Trim and collapse internal whitespace to single spaces.
pub fn squish(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_case_and_punctuation() {
        assert_eq!(words("CaseOne"), vec!["Case", "One"]);
        assert_eq!(words("case_one-two three"), vec!["case", "one", "two", "three"]);
        assert_eq!(words("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(words("Case1"), vec!["Case1"]);
        assert_eq!(words("v2Api"), vec!["v2", "Api"]);
        assert!(words("__").is_empty());
    }

    #[test]
    fn headline_renders_titles() {
        assert_eq!(headline("CaseOne"), "Case One");
        assert_eq!(headline("Case1"), "Case1");
        assert_eq!(headline("case_one"), "Case One");
        assert_eq!(headline("HTTPServer"), "Http Server");
        assert_eq!(headline(""), "");
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slug("case1", "-"), "case1");
        assert_eq!(slug("Case One", "-"), "case-one");
        assert_eq!(slug("  Hello,  World! ", "-"), "hello-world");
        assert_eq!(slug("snake_case--value", "-"), "snake-case-value");
        assert_eq!(slug("user@example", "-"), "user-at-example");
        assert_eq!(slug("Case One", "_"), "case_one");
        assert_eq!(slug("CaseOne", "-"), "caseone");
    }

    #[test]
    fn casing_helpers() {
        assert_eq!(snake("CaseOne", "_"), "case_one");
        assert_eq!(snake("Case One", "-"), "case-one");
        assert_eq!(studly("case_one"), "CaseOne");
        assert_eq!(camel("case_one"), "caseOne");
        assert_eq!(title("hello WORLD-wide"), "Hello World-Wide");
        assert_eq!(ucfirst("case"), "Case");
        assert_eq!(lcfirst("Case"), "case");
        assert_eq!(ucfirst(""), "");
    }

    #[test]
    fn limit_start_finish() {
        assert_eq!(limit("Case Three", 4, "..."), "Case...");
        assert_eq!(limit("Case Three", 5, "..."), "Case...");
        assert_eq!(limit("Case", 10, "..."), "Case");
        assert_eq!(start("//path", "/"), "/path");
        assert_eq!(start("path", "/"), "/path");
        assert_eq!(finish("path//", "/"), "path/");
        assert_eq!(finish("path", ""), "path");
    }

    #[test]
    fn reverse_and_squish() {
        assert_eq!(reverse("abc"), "cba");
        assert_eq!(squish("  a   b \t c "), "a b c");
    }
}
