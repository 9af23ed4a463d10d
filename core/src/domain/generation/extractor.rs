//! Isolates the JSON object a generator wrapped in prose, code fences or
//! trailing commentary.

use std::sync::LazyLock;

use regex::Regex;

static FENCED_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json|JSON)?[ \t]*\r?\n?(\{.*?\})\s*```").expect("valid fence pattern")
});

static WIDEST_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").expect("valid object pattern"));

/// Returns the most likely JSON object substring of `text`, or `text`
/// unchanged when nothing object-shaped is present.
///
/// ```rust
/// use salus_core::domain::generation::extractor::extract_json;
///
/// assert_eq!(extract_json(r#"Sure! {"a":1} Hope that helps."#), r#"{"a":1}"#);
/// assert_eq!(extract_json("no braces here"), "no braces here");
/// ```
pub fn extract_json(text: &str) -> &str {
    extract_json_candidate(text).unwrap_or(text)
}

/// Like [`extract_json`] but reports `None` when no candidate was found.
pub fn extract_json_candidate(text: &str) -> Option<&str> {
    if let Some(fenced) = FENCED_OBJECT
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| find_balanced_object(m.as_str()))
    {
        return Some(fenced);
    }

    if let Some(balanced) = find_balanced_object(text) {
        return Some(balanced);
    }

    WIDEST_OBJECT.find(text).map(|m| m.as_str())
}

/// Earliest `{` that reaches its matching `}`. Openers that never close, such
/// as a stray brace in leading prose, are skipped.
fn find_balanced_object(text: &str) -> Option<&str> {
    text.match_indices('{')
        .find_map(|(start, _)| balanced_from(text, start))
}

/// Span from the `{` at `start` to its matching `}`, ignoring braces inside
/// string literals.
fn balanced_from(text: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, c) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + i]);
                }
            }
            _ => {}
        }
    }

    None
}
