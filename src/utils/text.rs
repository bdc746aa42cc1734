//! Text normalization helpers shared by the sanitizer and the generator.
//!
//! All lengths are measured in characters, not bytes.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Characters a keyword may keep: letters, digits, `&`, `-` and whitespace.
static KEYWORD_STRIP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}&\-\s]").unwrap());

/// Trims and collapses every run of whitespace into a single space.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(collapse_whitespace("  ring \t dish\n"), "ring dish");
/// ```
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a keyword, material or tag candidate.
///
/// # Normalization Rules
///
/// 1. Lowercased
/// 2. Everything except letters, digits, `&`, `-` and whitespace is removed
/// 3. Whitespace is collapsed and trimmed
///
/// May return an empty string; callers drop empties.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_keyword("  Ring-Dish!! & Tray "), "ring-dish & tray");
/// ```
pub fn normalize_keyword(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped = KEYWORD_STRIP_REGEX.replace_all(&lowered, "");
    collapse_whitespace(&stripped)
}

/// Normalizes, deduplicates and caps a list of keywords.
///
/// Keeps first-seen order. Entries that normalize to an empty string are
/// dropped and do not count toward `cap`.
pub fn normalize_keyword_list<'a, I>(items: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for item in items {
        if result.len() >= cap {
            break;
        }

        let normalized = normalize_keyword(item);
        if normalized.is_empty() || !seen.insert(normalized.clone()) {
            continue;
        }

        result.push(normalized);
    }

    result
}

/// Capitalizes the first letter of each whitespace-separated token.
///
/// The rest of each token is left unchanged and tokens are rejoined with a
/// single space.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(title_case("ring dish for iPhone"), "Ring Dish For IPhone");
/// ```
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Number of characters in `input`.
pub fn char_len(input: &str) -> usize {
    input.chars().count()
}

/// Returns at most `max` leading characters of `input`.
pub fn truncate_chars(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

/// Joins items as natural-language prose: `a`, `a and b`, `a, b and c`.
pub fn join_human(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
