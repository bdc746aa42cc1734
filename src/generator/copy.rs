//! Template fills for description, highlights, FAQ, photo plan and checklist.
//!
//! Every function here is a pure template fill over an already sanitized
//! brief. Wording varies only by tone and the personalization flag.

use crate::domain::entities::{FaqItem, ListingInput, Tone};
use crate::utils::text::{join_human, title_case};

/// Materials named in the description.
const DESCRIPTION_MATERIAL_LIMIT: usize = 5;

/// Materials named in highlights.
const HIGHLIGHT_MATERIAL_LIMIT: usize = 3;

/// Materials named in the detail photo shot.
const PHOTO_MATERIAL_LIMIT: usize = 4;

/// Supporting keywords echoed at the end of the description.
const DESCRIPTION_KEYWORD_LIMIT: usize = 3;

const LAUNCH_CHECKLIST: [&str; 5] = [
    "Paste the title and confirm the first 40 characters read naturally in search results.",
    "Add every tag, then remove any that only repeat words already in the title.",
    "Upload photos in shot-list order with the hero image first.",
    "Match the processing time and shipping profile to the promise in the description.",
    "Preview the listing on mobile and check the color and sizing details before publishing.",
];

/// One fixed sentence per tone.
pub fn tone_descriptor(tone: Tone) -> &'static str {
    match tone {
        Tone::Playful => {
            "Bright, cheerful details make it a conversation starter from the moment it is unwrapped."
        }
        Tone::Minimal => "Clean lines and a pared-back finish let the craftsmanship speak for itself.",
        Tone::Luxury => {
            "Premium finishing and careful detailing give it an elevated, keepsake-worthy feel."
        }
        Tone::Warm => "Thoughtful, cozy details make it feel personal from the very first look.",
    }
}

/// `"1 business day"` / `"3 business days"`.
fn business_days(days: u8) -> String {
    if days == 1 {
        "1 business day".to_string()
    } else {
        format!("{days} business days")
    }
}

fn first_materials(input: &ListingInput, limit: usize) -> Vec<String> {
    input.materials.iter().take(limit).cloned().collect()
}

/// Builds the description as paragraphs separated by a blank line.
pub fn compose_description(input: &ListingInput) -> String {
    let mut intro = vec![
        format!(
            "{} from {}, made for {}.",
            title_case(&input.product_type),
            input.shop_name,
            input.target_audience
        ),
        tone_descriptor(input.tone).to_string(),
    ];

    let materials = first_materials(input, DESCRIPTION_MATERIAL_LIMIT);
    if materials.is_empty() {
        intro.push("Made with carefully chosen materials that hold up to everyday use.".to_string());
    } else {
        intro.push(format!("Crafted with {}.", join_human(&materials)));
    }

    let framing = if input.personalization {
        "Personalization is included, so every order is made to match your details."
    } else {
        "It is ready to ship, so it leaves the studio quickly without waiting on custom work."
    };

    let logistics = format!(
        "{} Ships within {}, and it sits in the {} price range.",
        framing,
        business_days(input.processing_time_days),
        input.price_band
    );

    let keywords: Vec<String> = input
        .supporting_keywords
        .iter()
        .take(DESCRIPTION_KEYWORD_LIMIT)
        .cloned()
        .collect();
    let closing = format!(
        "A great pick for anyone searching for {} or {}.",
        input.primary_keyword,
        join_human(&keywords)
    );

    [intro.join(" "), logistics, closing].join("\n\n")
}

/// Five short selling points.
pub fn compose_highlights(input: &ListingInput) -> Vec<String> {
    let materials = first_materials(input, HIGHLIGHT_MATERIAL_LIMIT);

    vec![
        format!(
            "{} designed for {}",
            title_case(&input.primary_keyword),
            input.target_audience
        ),
        if input.personalization {
            "Personalization available for names, dates or short messages".to_string()
        } else {
            "Ready to ship with no customization wait".to_string()
        },
        format!("Ships within {}", business_days(input.processing_time_days)),
        if materials.is_empty() {
            "Made with quality materials".to_string()
        } else {
            format!("Made with {}", join_human(&materials))
        },
        format!(
            "{} style in the {} price band",
            title_case(input.tone.as_str()),
            input.price_band
        ),
    ]
}

/// Exactly three FAQ entries: shipping, personalization or custom requests,
/// and first-photo guidance.
pub fn compose_faq(input: &ListingInput) -> Vec<FaqItem> {
    let shipping = FaqItem {
        question: "How long does it take to ship?".to_string(),
        answer: format!(
            "Orders are prepared within {} and then shipped with tracking.",
            business_days(input.processing_time_days)
        ),
    };

    let custom = if input.personalization {
        FaqItem {
            question: "Can I personalize this item?".to_string(),
            answer: "Yes. Add your personalization details at checkout and we will confirm the spelling before production starts.".to_string(),
        }
    } else {
        FaqItem {
            question: "Can I request a custom version?".to_string(),
            answer: format!(
                "This piece ships ready to go, but message {} about customization and we will let you know what is possible.",
                input.shop_name
            ),
        }
    };

    let photo = FaqItem {
        question: "What should the first photo show?".to_string(),
        answer: if input.personalization {
            format!(
                "Lead with a finished {} showing a sample personalization, so shoppers see exactly what they will receive.",
                input.product_type
            )
        } else {
            format!(
                "Lead with a clean, well-lit shot of the {} so shoppers recognize it instantly in search results.",
                input.product_type
            )
        },
    };

    vec![shipping, custom, photo]
}

/// Eight photo shots in upload order.
pub fn compose_photo_shot_list(input: &ListingInput) -> Vec<String> {
    let materials = first_materials(input, PHOTO_MATERIAL_LIMIT);

    vec![
        format!(
            "Hero shot of the {} on a clean, neutral background",
            input.product_type
        ),
        "Scale shot in hand or beside a familiar everyday object".to_string(),
        if input.personalization {
            "Close-up of a personalized example with a sample name or date".to_string()
        } else {
            "Packaged, ready-to-ship view showing what arrives at the door".to_string()
        },
        if materials.is_empty() {
            "Detail shot of texture, color and finish".to_string()
        } else {
            format!("Detail shot highlighting {}", join_human(&materials))
        },
        format!("Lifestyle shot styled for {}", input.target_audience),
        "Gift-ready view with packaging or wrapping".to_string(),
        "Flat lay showing every color or variation offered".to_string(),
        "Styled shot in a favorite everyday setting".to_string(),
    ]
}

/// Five fixed launch steps.
pub fn compose_launch_checklist() -> Vec<String> {
    LAUNCH_CHECKLIST.iter().map(|line| line.to_string()).collect()
}
