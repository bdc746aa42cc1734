//! Listing title composition.

use crate::domain::entities::ListingInput;
use crate::generator::locale::to_uk_spelling;
use crate::utils::text::{char_len, title_case, truncate_chars};

/// Maximum title length, in characters.
pub const MAX_TITLE_LENGTH: usize = 140;

const SEGMENT_SEPARATOR: &str = " | ";

/// Used for the last segment when no supporting keyword exists, and as the
/// whole title when nothing else is usable.
const DEFAULT_TITLE: &str = "Handmade Gift";

/// Composes a title of `" | "`-joined segments within [`MAX_TITLE_LENGTH`].
///
/// # Segments
///
/// 1. Primary keyword
/// 2. Product type
/// 3. `Personalized` or `Ready to Ship`
/// 4. `Gift for {audience}`
/// 5. First supporting keyword
///
/// All segments are title-cased, and respelled for the UK when the brief
/// asks for it, before they are measured. Segments are appended while the
/// joined string still fits; the first segment that would overflow ends the
/// title.
pub fn compose_title(input: &ListingInput) -> String {
    let mut segments = [
        title_case(&input.primary_keyword),
        title_case(&input.product_type),
        if input.personalization {
            "Personalized".to_string()
        } else {
            "Ready to Ship".to_string()
        },
        format!("Gift for {}", title_case(&input.target_audience)),
        input
            .supporting_keywords
            .first()
            .map(|keyword| title_case(keyword))
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
    ];

    if input.include_uk_spelling {
        for segment in &mut segments {
            *segment = to_uk_spelling(segment);
        }
    }

    join_segments(&segments)
}

fn join_segments(segments: &[String]) -> String {
    let mut title = String::new();

    for segment in segments.iter().filter(|s| !s.is_empty()) {
        let candidate = if title.is_empty() {
            segment.clone()
        } else {
            format!("{title}{SEGMENT_SEPARATOR}{segment}")
        };

        if char_len(&candidate) > MAX_TITLE_LENGTH {
            break;
        }
        title = candidate;
    }

    if !title.is_empty() {
        return title;
    }

    match segments.iter().find(|s| !s.is_empty()) {
        Some(first) => truncate_chars(first, MAX_TITLE_LENGTH),
        None => DEFAULT_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::ring_dish_brief;

    #[test]
    fn test_ring_dish_title() {
        let title = compose_title(&ring_dish_brief());
        assert_eq!(
            title,
            "Personalized Ring Dish | Ring Dish | Personalized | Gift for Brides | Engagement Gift"
        );
    }

    #[test]
    fn test_ready_to_ship_segment() {
        let mut brief = ring_dish_brief();
        brief.personalization = false;

        let title = compose_title(&brief);
        assert!(title.contains("| Ready to Ship |"));
    }

    #[test]
    fn test_stops_at_first_overflowing_segment() {
        let mut brief = ring_dish_brief();
        brief.primary_keyword = "a".repeat(60);
        brief.product_type = "b".repeat(60);
        brief.target_audience = "c".repeat(60);

        let title = compose_title(&brief);

        // 60 + 3 + 60 + 3 + 12 = 138; the audience segment would overflow.
        assert_eq!(char_len(&title), 138);
        assert!(title.ends_with("| Personalized"));
        assert!(!title.contains("Engagement"));
    }

    #[test]
    fn test_uk_spelling_measured_before_joining() {
        let mut brief = ring_dish_brief();
        brief.primary_keyword = vec!["color"; 13].join(" ");
        brief.product_type = "y".repeat(60);
        brief.include_uk_spelling = true;

        let title = compose_title(&brief);

        // 13 * 6 + 12 = 90 for the respelled keyword; the product type no longer fits.
        assert!(char_len(&title) <= MAX_TITLE_LENGTH);
        assert_eq!(char_len(&title), 90);
        assert!(title.starts_with("Colour Colour"));
        assert!(!title.contains("Yyy"));
    }

    #[test]
    fn test_uk_title_unchanged_by_uk_pass() {
        let mut brief = ring_dish_brief();
        brief.primary_keyword = "favorite color tray".to_string();
        brief.include_uk_spelling = true;

        let title = compose_title(&brief);
        assert!(title.starts_with("Favourite Colour Tray |"));
        assert_eq!(to_uk_spelling(&title), title);
    }

    #[test]
    fn test_oversized_first_segment_is_truncated() {
        let segments = vec!["x".repeat(200), "Short".to_string()];
        let title = join_segments(&segments);
        assert_eq!(char_len(&title), MAX_TITLE_LENGTH);
    }

    #[test]
    fn test_all_empty_segments_use_default() {
        let segments = vec![String::new(), String::new()];
        assert_eq!(join_segments(&segments), DEFAULT_TITLE);
    }
}
