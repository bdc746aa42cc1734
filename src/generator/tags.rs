//! Tag selection from a prioritized candidate pool.

use std::collections::HashSet;

use crate::domain::entities::ListingInput;
use crate::utils::text::{char_len, normalize_keyword};

/// Maximum number of tags in a pack.
pub const MAX_TAGS: usize = 13;

/// Maximum length of a single tag, in characters.
pub const MAX_TAG_LENGTH: usize = 20;

/// Tags appended last when the brief-derived candidates run short.
const FALLBACK_TAGS: &[&str] = &[
    "small business",
    "handmade",
    "gift for her",
    "gift for him",
    "home decor",
    "custom order",
];

/// Minimum length of a primary keyword word to expand into tag variants.
const MIN_WORD_LENGTH: usize = 3;

/// Builds up to [`MAX_TAGS`] unique tags for a brief.
///
/// # Candidate Order
///
/// 1. Primary keyword
/// 2. Supporting keywords, in input order
/// 3. `"{product type} gift"`, then `"{audience} gift"`
/// 4. Product type, then audience
/// 5. `"personalized gift"` or `"ready to ship"`
/// 6. `"etsy seller"`
/// 7. For each primary keyword word of 3+ characters once normalized: the word,
///    `"{word} decor"`, `"{word} idea"`
/// 8. [`FALLBACK_TAGS`]
///
/// Every candidate is normalized like a keyword. Empty, over-long and
/// duplicate candidates are skipped; the walk stops at [`MAX_TAGS`].
pub fn build_tags(input: &ListingInput) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();

    candidates.push(input.primary_keyword.clone());
    candidates.extend(input.supporting_keywords.iter().cloned());
    candidates.push(format!("{} gift", input.product_type));
    candidates.push(format!("{} gift", input.target_audience));
    candidates.push(input.product_type.clone());
    candidates.push(input.target_audience.clone());
    candidates.push(
        if input.personalization {
            "personalized gift"
        } else {
            "ready to ship"
        }
        .to_string(),
    );
    candidates.push("etsy seller".to_string());

    for word in input
        .primary_keyword
        .split_whitespace()
        .map(normalize_keyword)
        .filter(|word| char_len(word) >= MIN_WORD_LENGTH)
    {
        candidates.push(word.clone());
        candidates.push(format!("{word} decor"));
        candidates.push(format!("{word} idea"));
    }

    candidates.extend(FALLBACK_TAGS.iter().map(|tag| tag.to_string()));

    select_tags(candidates)
}

/// Walks candidates in order and keeps the first acceptable ones.
fn select_tags(candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::with_capacity(MAX_TAGS);

    for candidate in candidates {
        if tags.len() >= MAX_TAGS {
            break;
        }

        let tag = normalize_keyword(&candidate);
        if tag.is_empty() || char_len(&tag) > MAX_TAG_LENGTH {
            continue;
        }
        if !seen.insert(tag.clone()) {
            continue;
        }

        tags.push(tag);
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::ring_dish_brief;

    #[test]
    fn test_ring_dish_tags() {
        let tags = build_tags(&ring_dish_brief());

        assert_eq!(
            tags,
            vec![
                "engagement gift",
                "bridal shower gift",
                "ceramic tray",
                "ring dish gift",
                "brides gift",
                "ring dish",
                "brides",
                "personalized gift",
                "etsy seller",
                "personalized",
                "personalized decor",
                "personalized idea",
                "ring",
            ]
        );
    }

    #[test]
    fn test_skips_overlong_primary_keyword() {
        let tags = build_tags(&ring_dish_brief());
        assert!(!tags.contains(&"personalized ring dish".to_string()));
    }

    #[test]
    fn test_ready_to_ship_without_personalization() {
        let mut brief = ring_dish_brief();
        brief.personalization = false;

        let tags = build_tags(&brief);
        assert!(tags.contains(&"ready to ship".to_string()));
        assert!(!tags.contains(&"personalized gift".to_string()));
    }

    #[test]
    fn test_falls_back_when_candidates_collapse() {
        let mut brief = ring_dish_brief();
        brief.primary_keyword = "mug".to_string();
        brief.product_type = "mug".to_string();
        brief.target_audience = "mug".to_string();
        brief.supporting_keywords = vec!["mug".to_string()];

        let tags = build_tags(&brief);

        assert_eq!(
            tags,
            vec![
                "mug",
                "mug gift",
                "personalized gift",
                "etsy seller",
                "mug decor",
                "mug idea",
                "small business",
                "handmade",
                "gift for her",
                "gift for him",
                "home decor",
                "custom order",
            ]
        );
    }

    #[test]
    fn test_caps_at_thirteen_unique_short_tags() {
        let mut brief = ring_dish_brief();
        brief.supporting_keywords = (0..16).map(|i| format!("keyword {i}")).collect();

        let tags = build_tags(&brief);
        assert_eq!(tags.len(), MAX_TAGS);

        let unique: HashSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
        assert!(tags.iter().all(|t| char_len(t) <= MAX_TAG_LENGTH));
    }

    #[test]
    fn test_short_words_not_expanded() {
        let mut brief = ring_dish_brief();
        brief.primary_keyword = "a to z".to_string();
        brief.supporting_keywords = vec!["alphabet print".to_string()];

        let tags = build_tags(&brief);
        assert!(!tags.iter().any(|t| t == "to decor" || t == "a idea"));
    }

    #[test]
    fn test_word_length_measured_after_normalization() {
        let mut brief = ring_dish_brief();
        brief.primary_keyword = "ab! Mug?".to_string();
        brief.supporting_keywords = vec!["coffee cup".to_string()];

        let tags = build_tags(&brief);

        assert!(!tags.iter().any(|t| t == "ab" || t == "ab decor" || t == "ab idea"));
        assert!(tags.contains(&"mug decor".to_string()));
        assert!(tags.contains(&"mug idea".to_string()));
    }
}
