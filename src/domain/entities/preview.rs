//! Truncated view of a pack shown before the payment gate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ListingPack;

/// Highlights revealed in a preview.
pub const PREVIEW_HIGHLIGHTS: usize = 2;

/// A pack with most of its copy withheld.
///
/// Reveals the title, score, the first few tags and highlights and the lead
/// description paragraph. Counts of the withheld items are reported so the
/// caller can show what unlocking adds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackPreview {
    pub generated_at: DateTime<Utc>,
    pub score: u8,
    pub title: String,
    pub tags: Vec<String>,
    pub highlights: Vec<String>,
    pub description: String,
    pub locked: bool,
    pub locked_tags: usize,
    pub locked_faq: usize,
    pub locked_photo_shots: usize,
    pub locked_checklist: usize,
}

impl PackPreview {
    /// Builds a preview revealing at most `tag_count` tags.
    pub fn from_pack(pack: &ListingPack, tag_count: usize) -> Self {
        let tags: Vec<String> = pack.tags.iter().take(tag_count).cloned().collect();
        let highlights: Vec<String> = pack
            .highlights
            .iter()
            .take(PREVIEW_HIGHLIGHTS)
            .cloned()
            .collect();

        Self {
            generated_at: pack.generated_at,
            score: pack.score,
            title: pack.title.clone(),
            locked_tags: pack.tags.len() - tags.len(),
            tags,
            highlights,
            description: pack.lead_paragraph().to_string(),
            locked: true,
            locked_faq: pack.faq.len(),
            locked_photo_shots: pack.photo_shot_list.len(),
            locked_checklist: pack.launch_checklist.len(),
        }
    }
}
