//! Listing pack generation pipeline.
//!
//! A brief flows through a fixed sequence of pure steps:
//!
//! 1. [`tags::build_tags`] - prioritized, deduplicated tag selection
//! 2. [`title::compose_title`] - segment joining within 140 characters,
//!    measured after UK respelling when the brief asks for it
//! 3. [`copy`] - description, highlights, FAQ, photo plan and checklist
//! 4. [`score::compute_score`] - heuristic quality score
//! 5. [`locale::apply_uk_spelling`] - optional UK spelling pass
//!
//! The pipeline holds no state between calls. Apart from `generated_at`,
//! equal briefs always produce equal packs.

pub mod copy;
pub mod locale;
pub mod score;
pub mod tags;
pub mod title;

use chrono::{DateTime, Utc};

use crate::domain::entities::{ListingInput, ListingPack};

/// Builds a pack stamped with the current time.
pub fn build_pack(input: &ListingInput) -> ListingPack {
    build_pack_at(input, Utc::now())
}

/// Builds a pack stamped with `generated_at`.
pub fn build_pack_at(input: &ListingInput, generated_at: DateTime<Utc>) -> ListingPack {
    let tags = tags::build_tags(input);
    let score = score::compute_score(input, tags.len());

    let mut pack = ListingPack {
        generated_at,
        score,
        title: title::compose_title(input),
        tags,
        highlights: copy::compose_highlights(input),
        description: copy::compose_description(input),
        faq: copy::compose_faq(input),
        photo_shot_list: copy::compose_photo_shot_list(input),
        launch_checklist: copy::compose_launch_checklist(),
    };

    if input.include_uk_spelling {
        locale::apply_uk_spelling(&mut pack);
    }

    pack
}
