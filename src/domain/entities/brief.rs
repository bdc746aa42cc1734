//! Sanitized brief describing a product to list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Voice of the generated copy. Affects template wording only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Playful,
    Minimal,
    Luxury,
    Warm,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Playful => "playful",
            Tone::Minimal => "minimal",
            Tone::Luxury => "luxury",
            Tone::Warm => "warm",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a tone case-insensitively, ignoring surrounding whitespace.
impl FromStr for Tone {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "playful" => Ok(Tone::Playful),
            "minimal" => Ok(Tone::Minimal),
            "luxury" => Ok(Tone::Luxury),
            "warm" => Ok(Tone::Warm),
            _ => Err(()),
        }
    }
}

/// A validated brief.
///
/// Only [`crate::application::services::sanitizer::sanitize`] should build
/// one from untrusted data: every string is trimmed and whitespace-collapsed,
/// keyword and material lists are normalized, deduplicated and capped, and
/// `processing_time_days` lies in `1..=45`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingInput {
    pub shop_name: String,
    pub product_type: String,
    pub target_audience: String,
    pub primary_keyword: String,
    /// 1 to 16 normalized keywords in first-seen order.
    pub supporting_keywords: Vec<String>,
    /// 0 to 12 normalized materials in first-seen order.
    pub materials: Vec<String>,
    pub tone: Tone,
    pub price_band: String,
    pub processing_time_days: u8,
    pub personalization: bool,
    pub include_uk_spelling: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_parse_case_insensitive() {
        assert_eq!("Playful".parse::<Tone>(), Ok(Tone::Playful));
        assert_eq!("  LUXURY ".parse::<Tone>(), Ok(Tone::Luxury));
        assert_eq!("warm".parse::<Tone>(), Ok(Tone::Warm));
        assert_eq!("minimal".parse::<Tone>(), Ok(Tone::Minimal));
    }

    #[test]
    fn test_tone_parse_rejects_unknown() {
        assert!("edgy".parse::<Tone>().is_err());
        assert!("".parse::<Tone>().is_err());
    }

    #[test]
    fn test_tone_serializes_lowercase() {
        let json = serde_json::to_string(&Tone::Luxury).unwrap();
        assert_eq!(json, "\"luxury\"");
    }
}
