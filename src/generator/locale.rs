//! UK spelling post-processing.
//!
//! Runs after composition on the visible copy of a pack. Replacement targets
//! never contain their own source pattern, so the pass is idempotent.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::domain::entities::ListingPack;

/// US → UK replacements, applied in order.
const UK_REPLACEMENTS: [(&str, &str); 5] = [
    ("color", "colour"),
    ("favorite", "favourite"),
    ("customization", "customisation"),
    ("personalization", "personalisation"),
    ("organize", "organise"),
];

static UK_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    UK_REPLACEMENTS
        .iter()
        .map(|(us, uk)| (Regex::new(&format!("(?i){us}")).unwrap(), *uk))
        .collect()
});

/// Rewrites US spellings to UK spellings, case-insensitively.
///
/// The replacement follows the case of the matched text: `COLOR` becomes
/// `COLOUR`, `Color` becomes `Colour`, anything else becomes lowercase.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(to_uk_spelling("Personalization in any color"), "Personalisation in any colour");
/// ```
pub fn to_uk_spelling(text: &str) -> String {
    let mut result = text.to_string();

    for (pattern, replacement) in UK_PATTERNS.iter() {
        if pattern.is_match(&result) {
            result = pattern
                .replace_all(&result, |caps: &Captures| match_case(&caps[0], replacement))
                .into_owned();
        }
    }

    result
}

fn match_case(matched: &str, replacement: &str) -> String {
    let has_lower = matched.chars().any(char::is_lowercase);
    if !has_lower {
        return replacement.to_uppercase();
    }

    match matched.chars().next() {
        Some(first) if first.is_uppercase() => {
            let mut chars = replacement.chars();
            match chars.next() {
                Some(r) => r.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => replacement.to_string(),
    }
}

/// Applies [`to_uk_spelling`] to every visible copy field of a pack.
///
/// Tags and FAQ questions are left as generated.
pub fn apply_uk_spelling(pack: &mut ListingPack) {
    pack.title = to_uk_spelling(&pack.title);
    pack.description = to_uk_spelling(&pack.description);

    for line in pack
        .highlights
        .iter_mut()
        .chain(pack.photo_shot_list.iter_mut())
        .chain(pack.launch_checklist.iter_mut())
    {
        *line = to_uk_spelling(line);
    }

    for item in &mut pack.faq {
        item.answer = to_uk_spelling(&item.answer);
    }
}
