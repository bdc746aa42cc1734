//! Generated listing pack.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// The full bundle of listing copy generated for one brief.
///
/// Invariants upheld by [`crate::generator::build_pack`]:
///
/// - `title` is at most 140 characters
/// - `tags` holds at most 13 pairwise distinct entries of at most 20 characters
/// - `score` lies in `0..=100`
///
/// Apart from `generated_at`, a pack is a pure function of its brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPack {
    pub generated_at: DateTime<Utc>,
    pub score: u8,
    pub title: String,
    pub tags: Vec<String>,
    pub highlights: Vec<String>,
    pub description: String,
    pub faq: Vec<FaqItem>,
    pub photo_shot_list: Vec<String>,
    pub launch_checklist: Vec<String>,
}

impl ListingPack {
    /// Returns true if both packs carry the same copy, ignoring `generated_at`.
    pub fn same_copy_as(&self, other: &ListingPack) -> bool {
        self.score == other.score
            && self.title == other.title
            && self.tags == other.tags
            && self.highlights == other.highlights
            && self.description == other.description
            && self.faq == other.faq
            && self.photo_shot_list == other.photo_shot_list
            && self.launch_checklist == other.launch_checklist
    }

    /// First paragraph of the description.
    pub fn lead_paragraph(&self) -> &str {
        self.description
            .split("\n\n")
            .next()
            .unwrap_or(&self.description)
    }
}
