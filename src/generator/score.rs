//! Heuristic listing quality score.

use crate::domain::entities::ListingInput;

/// Scores a pack on `0..=100` from its tag count and brief.
///
/// ```text
/// 55
///   + min(20, tags)
///   + min(8, supporting keywords)
///   + (personalization ? 7 : 4)
///   + (materials >= 3 ? 6 : 2)
///   + (processing days <= 3 ? 4 : 1)
/// ```
pub fn compute_score(input: &ListingInput, tag_count: usize) -> u8 {
    let mut score = 55 + tag_count.min(20) + input.supporting_keywords.len().min(8);

    score += if input.personalization { 7 } else { 4 };
    score += if input.materials.len() >= 3 { 6 } else { 2 };
    score += if input.processing_time_days <= 3 { 4 } else { 1 };

    score.min(100) as u8
}
