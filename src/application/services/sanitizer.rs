//! Brief sanitization: raw caller input → [`ListingInput`].
//!
//! Every failure is reported as a [`ValidationError`] naming the offending
//! field. Fields are checked in declaration order and the first failure
//! wins; no partially sanitized brief is ever returned.

use serde_json::Value;

use crate::domain::entities::{ListingInput, RawListingInput, Tone};
use crate::domain::{Field, ValidationError};
use crate::utils::text::{char_len, collapse_whitespace, normalize_keyword, normalize_keyword_list};

/// Default maximum length of a phrase field, in characters.
pub const DEFAULT_PHRASE_MAX_LENGTH: usize = 80;

/// Maximum length of `priceBand`, in characters.
pub const PRICE_BAND_MAX_LENGTH: usize = 40;

pub const MAX_SUPPORTING_KEYWORDS: usize = 16;
pub const MAX_MATERIALS: usize = 12;

/// Cap on keywords synthesized when the caller supplies none.
pub const MAX_FALLBACK_KEYWORDS: usize = 8;

/// Maximum length of a single normalized keyword or material.
pub const MAX_LIST_ENTRY_LENGTH: usize = 80;

/// Maximum length of comma/newline delimited list text.
pub const MAX_LIST_TEXT_LENGTH: usize = 4000;

pub const MIN_PROCESSING_DAYS: i64 = 1;
pub const MAX_PROCESSING_DAYS: i64 = 45;

const DEFAULT_FALLBACK_KEYWORD: &str = "handmade gift";

/// Tunable sanitizer limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeLimits {
    /// Maximum length of shop name, product type, audience and primary keyword.
    pub phrase_max_length: usize,
}

impl Default for SanitizeLimits {
    fn default() -> Self {
        Self {
            phrase_max_length: DEFAULT_PHRASE_MAX_LENGTH,
        }
    }
}

/// Sanitizes a raw brief with default limits.
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first field that fails.
pub fn sanitize(raw: &RawListingInput) -> Result<ListingInput, ValidationError> {
    sanitize_with_limits(raw, &SanitizeLimits::default())
}

/// Sanitizes a raw brief.
///
/// # Rules
///
/// - Phrase fields are trimmed, whitespace-collapsed, non-empty and bounded
/// - `supportingKeywords` wins over `keywordsCsv`; with neither, keywords are
///   synthesized from the primary keyword, product type and audience
/// - `materials` wins over `materialsCsv`; both are optional
/// - `tone` must name one of the four tones, case-insensitively
/// - `processingTimeDays` must be an integer in `1..=45`
/// - Missing booleans default to `false`
///
/// A value of the wrong JSON type fails with its field's code.
pub fn sanitize_with_limits(
    raw: &RawListingInput,
    limits: &SanitizeLimits,
) -> Result<ListingInput, ValidationError> {
    let max = limits.phrase_max_length;

    let shop_name = phrase(raw.shop_name.as_ref(), Field::ShopName, max)?;
    let product_type = phrase(raw.product_type.as_ref(), Field::ProductType, max)?;
    let target_audience = phrase(raw.target_audience.as_ref(), Field::TargetAudience, max)?;
    let primary_keyword = phrase(raw.primary_keyword.as_ref(), Field::PrimaryKeyword, max)?;

    let supporting_keywords = match (&raw.supporting_keywords, &raw.keywords_csv) {
        (Some(list), _) => {
            let keywords = string_list(list, Field::SupportingKeywords, MAX_SUPPORTING_KEYWORDS)?;
            if keywords.is_empty() {
                return Err(ValidationError::new(
                    Field::SupportingKeywords,
                    "no usable keywords",
                ));
            }
            keywords
        }
        (None, Some(text)) => parse_keyword_list(as_str(text, Field::KeywordsCsv)?)?,
        (None, None) => fallback_keywords(&primary_keyword, &product_type, &target_audience),
    };

    let materials = match (&raw.materials, &raw.materials_csv) {
        (Some(list), _) => string_list(list, Field::Materials, MAX_MATERIALS)?,
        (None, Some(text)) => parse_material_list(as_str(text, Field::MaterialsCsv)?)?,
        (None, None) => Vec::new(),
    };

    let tone = match raw.tone.as_ref() {
        Some(Value::String(s)) => s.parse::<Tone>().ok(),
        _ => None,
    }
    .ok_or_else(|| ValidationError::new(Field::Tone, "unknown tone"))?;

    let price_band = phrase(
        raw.price_band.as_ref(),
        Field::PriceBand,
        PRICE_BAND_MAX_LENGTH,
    )?;

    let processing_time_days = processing_days(raw.processing_time_days.as_ref())?;
    let personalization = flag(raw.personalization.as_ref(), Field::Personalization)?;
    let include_uk_spelling = flag(raw.include_uk_spelling.as_ref(), Field::IncludeUkSpelling)?;

    Ok(ListingInput {
        shop_name,
        product_type,
        target_audience,
        primary_keyword,
        supporting_keywords,
        materials,
        tone,
        price_band,
        processing_time_days,
        personalization,
        include_uk_spelling,
    })
}

/// Parses comma or newline delimited keywords.
///
/// # Errors
///
/// Fails with `invalid_keywordsCsv` if the text is too long, an entry is too
/// long, or nothing usable remains after normalization.
///
/// # Examples
///
/// ```ignore
/// let keywords = parse_keyword_list("wedding gift, bridesmaid gift\nhandmade box").unwrap();
/// assert_eq!(keywords, vec!["wedding gift", "bridesmaid gift", "handmade box"]);
/// ```
pub fn parse_keyword_list(text: &str) -> Result<Vec<String>, ValidationError> {
    let keywords = delimited_list(text, Field::KeywordsCsv, MAX_SUPPORTING_KEYWORDS)?;
    if keywords.is_empty() {
        return Err(ValidationError::new(Field::KeywordsCsv, "no usable keywords"));
    }
    Ok(keywords)
}

/// Parses comma or newline delimited materials. An empty result is allowed.
///
/// # Errors
///
/// Fails with `invalid_materialsCsv` if the text or an entry is too long.
pub fn parse_material_list(text: &str) -> Result<Vec<String>, ValidationError> {
    delimited_list(text, Field::MaterialsCsv, MAX_MATERIALS)
}

/// Synthesizes keywords from the phrase fields when none were supplied.
///
/// Only combinations whose phrase parts survive normalization are tried.
fn fallback_keywords(primary_keyword: &str, product_type: &str, audience: &str) -> Vec<String> {
    let primary = normalize_keyword(primary_keyword);
    let product = normalize_keyword(product_type);
    let audience = normalize_keyword(audience);

    let mut candidates = Vec::new();
    if !primary.is_empty() {
        candidates.push(primary.clone());
    }
    if !product.is_empty() {
        candidates.push(product.clone());
        candidates.push(format!("{product} gift"));
    }
    if !audience.is_empty() {
        candidates.push(format!("{audience} gift"));
    }
    if !primary.is_empty() && !audience.is_empty() {
        candidates.push(format!("{primary} for {audience}"));
    }
    if !audience.is_empty() {
        candidates.push(format!("gift for {audience}"));
    }
    if !product.is_empty() {
        candidates.push(format!("handmade {product}"));
        candidates.push(format!("custom {product}"));
    }
    if !product.is_empty() && !audience.is_empty() {
        candidates.push(format!("{audience} {product}"));
    }

    let keywords = normalize_keyword_list(
        candidates
            .iter()
            .map(String::as_str)
            .filter(|candidate| char_len(candidate) <= MAX_LIST_ENTRY_LENGTH),
        MAX_FALLBACK_KEYWORDS,
    );

    if keywords.is_empty() {
        vec![DEFAULT_FALLBACK_KEYWORD.to_string()]
    } else {
        keywords
    }
}

fn as_str(value: &Value, field: Field) -> Result<&str, ValidationError> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::new(field, "expected a string"))
}

fn phrase(value: Option<&Value>, field: Field, max: usize) -> Result<String, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::new(field, "missing"))?;
    let collapsed = collapse_whitespace(as_str(value, field)?);

    if collapsed.is_empty() {
        return Err(ValidationError::new(field, "empty"));
    }
    if char_len(&collapsed) > max {
        return Err(ValidationError::new(field, "too long"));
    }

    Ok(collapsed)
}

fn string_list(value: &Value, field: Field, cap: usize) -> Result<Vec<String>, ValidationError> {
    let items = value
        .as_array()
        .ok_or_else(|| ValidationError::new(field, "expected an array of strings"))?;

    let strings = items
        .iter()
        .map(|item| as_str(item, field))
        .collect::<Result<Vec<&str>, _>>()?;

    bounded_list(strings, field, cap)
}

fn delimited_list(text: &str, field: Field, cap: usize) -> Result<Vec<String>, ValidationError> {
    if char_len(text) > MAX_LIST_TEXT_LENGTH {
        return Err(ValidationError::new(field, "text too long"));
    }

    bounded_list(text.split([',', '\n']), field, cap)
}

fn bounded_list<'a, I>(items: I, field: Field, cap: usize) -> Result<Vec<String>, ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let list = normalize_keyword_list(items, cap);

    if list.iter().any(|entry| char_len(entry) > MAX_LIST_ENTRY_LENGTH) {
        return Err(ValidationError::new(field, "entry too long"));
    }

    Ok(list)
}

fn processing_days(value: Option<&Value>) -> Result<u8, ValidationError> {
    let invalid = || ValidationError::new(Field::ProcessingTimeDays, "expected an integer in 1..=45");

    let days = match value.ok_or_else(invalid)? {
        Value::Number(n) => match n.as_i64() {
            Some(days) => days,
            None => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => f as i64,
                _ => return Err(invalid()),
            },
        },
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };

    if !(MIN_PROCESSING_DAYS..=MAX_PROCESSING_DAYS).contains(&days) {
        return Err(invalid());
    }

    u8::try_from(days).map_err(|_| invalid())
}

fn flag(value: Option<&Value>, field: Field) -> Result<bool, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ValidationError::new(field, "expected a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawListingInput {
        serde_json::from_value(value).unwrap()
    }

    fn valid_brief() -> Value {
        json!({
            "shopName": "  Clay   Studio ",
            "productType": "ring dish",
            "targetAudience": "brides",
            "primaryKeyword": "personalized ring dish",
            "supportingKeywords": ["Engagement Gift", "bridal shower gift!", "ceramic tray"],
            "materials": ["ceramic", "glaze", "gold paint"],
            "tone": "Warm",
            "priceBand": "$25-$40",
            "processingTimeDays": 3,
            "personalization": true
        })
    }

    fn with(field: &str, value: Value) -> RawListingInput {
        let mut brief = valid_brief();
        brief[field] = value;
        raw(brief)
    }

    fn without(field: &str) -> RawListingInput {
        let mut brief = valid_brief();
        brief.as_object_mut().unwrap().remove(field);
        raw(brief)
    }

    fn code(result: Result<ListingInput, ValidationError>) -> &'static str {
        result.unwrap_err().code()
    }

    #[test]
    fn test_sanitize_valid_brief() {
        let input = sanitize(&raw(valid_brief())).unwrap();

        assert_eq!(input.shop_name, "Clay Studio");
        assert_eq!(
            input.supporting_keywords,
            vec!["engagement gift", "bridal shower gift", "ceramic tray"]
        );
        assert_eq!(input.materials, vec!["ceramic", "glaze", "gold paint"]);
        assert_eq!(input.tone, Tone::Warm);
        assert_eq!(input.processing_time_days, 3);
        assert!(input.personalization);
        assert!(!input.include_uk_spelling);
    }

    #[test]
    fn test_empty_supporting_keywords_fails() {
        assert_eq!(
            code(sanitize(&with("supportingKeywords", json!([])))),
            "invalid_supportingKeywords"
        );
        assert_eq!(
            code(sanitize(&with("supportingKeywords", json!(["!!!", "  "])))),
            "invalid_supportingKeywords"
        );
    }

    #[test]
    fn test_supporting_keywords_wrong_type() {
        assert_eq!(
            code(sanitize(&with("supportingKeywords", json!("a, b")))),
            "invalid_supportingKeywords"
        );
        assert_eq!(
            code(sanitize(&with("supportingKeywords", json!(["ok", 5])))),
            "invalid_supportingKeywords"
        );
    }

    #[test]
    fn test_supporting_keywords_capped_at_sixteen() {
        let keywords: Vec<String> = (0..30).map(|i| format!("keyword {i}")).collect();
        let input = sanitize(&with("supportingKeywords", json!(keywords))).unwrap();
        assert_eq!(input.supporting_keywords.len(), MAX_SUPPORTING_KEYWORDS);
    }

    #[test]
    fn test_keywords_csv_used_without_list() {
        let mut brief = valid_brief();
        brief.as_object_mut().unwrap().remove("supportingKeywords");
        brief["keywordsCsv"] = json!("wedding gift, bridesmaid gift\nhandmade box");

        let input = sanitize(&raw(brief)).unwrap();
        assert_eq!(
            input.supporting_keywords,
            vec!["wedding gift", "bridesmaid gift", "handmade box"]
        );
    }

    #[test]
    fn test_keywords_csv_empty_fails() {
        let mut brief = valid_brief();
        brief.as_object_mut().unwrap().remove("supportingKeywords");
        brief["keywordsCsv"] = json!(" , \n ,");

        assert_eq!(code(sanitize(&raw(brief))), "invalid_keywordsCsv");
    }

    #[test]
    fn test_fallback_keywords_synthesized() {
        let input = sanitize(&without("supportingKeywords")).unwrap();

        assert_eq!(input.supporting_keywords.len(), MAX_FALLBACK_KEYWORDS);
        assert_eq!(input.supporting_keywords[0], "personalized ring dish");
        assert_eq!(input.supporting_keywords[1], "ring dish");
        assert_eq!(input.supporting_keywords[2], "ring dish gift");
        assert!(input.supporting_keywords.contains(&"gift for brides".to_string()));
    }

    #[test]
    fn test_fallback_keywords_deduplicated() {
        let keywords = fallback_keywords("mug", "mug", "mug");
        assert_eq!(
            keywords,
            vec!["mug", "mug gift", "mug for mug", "gift for mug", "handmade mug", "custom mug", "mug mug"]
        );
    }

    #[test]
    fn test_fallback_keywords_default_phrase() {
        assert_eq!(fallback_keywords("!!", "??", ".."), vec!["handmade gift"]);
    }

    #[test]
    fn test_fallback_keywords_skip_overlong_combinations() {
        let primary = "p".repeat(78);
        let keywords = fallback_keywords(&primary, "mug", "dads");
        assert!(keywords.iter().all(|k| char_len(k) <= MAX_LIST_ENTRY_LENGTH));
        assert!(!keywords.iter().any(|k| k.ends_with(" for dads") && k.starts_with("ppp")));
    }

    #[test]
    fn test_materials_optional() {
        let input = sanitize(&without("materials")).unwrap();
        assert!(input.materials.is_empty());

        let input = sanitize(&with("materials", json!([]))).unwrap();
        assert!(input.materials.is_empty());
    }

    #[test]
    fn test_materials_csv() {
        let mut brief = valid_brief();
        brief.as_object_mut().unwrap().remove("materials");
        brief["materialsCsv"] = json!("Oak, Walnut\noak");

        let input = sanitize(&raw(brief)).unwrap();
        assert_eq!(input.materials, vec!["oak", "walnut"]);
    }

    #[test]
    fn test_materials_wrong_type() {
        assert_eq!(code(sanitize(&with("materials", json!({"a": 1})))), "invalid_materials");

        let mut brief = valid_brief();
        brief.as_object_mut().unwrap().remove("materials");
        brief["materialsCsv"] = json!(["oak"]);
        assert_eq!(code(sanitize(&raw(brief))), "invalid_materialsCsv");
    }

    #[test]
    fn test_materials_capped_at_twelve() {
        let materials: Vec<String> = (0..20).map(|i| format!("material {i}")).collect();
        let input = sanitize(&with("materials", json!(materials))).unwrap();
        assert_eq!(input.materials.len(), MAX_MATERIALS);
    }

    #[test]
    fn test_phrase_fields() {
        assert_eq!(code(sanitize(&with("shopName", json!("   ")))), "invalid_shopName");
        assert_eq!(code(sanitize(&without("productType"))), "invalid_productType");
        assert_eq!(code(sanitize(&with("targetAudience", json!(7)))), "invalid_targetAudience");
        assert_eq!(
            code(sanitize(&with("primaryKeyword", json!("k".repeat(81))))),
            "invalid_primaryKeyword"
        );
        assert_eq!(code(sanitize(&with("priceBand", json!("p".repeat(41))))), "invalid_priceBand");
    }

    #[test]
    fn test_phrase_limit_is_configurable() {
        let limits = SanitizeLimits {
            phrase_max_length: 100,
        };
        let brief = with("primaryKeyword", json!("k".repeat(90)));

        assert!(sanitize(&brief).is_err());
        assert!(sanitize_with_limits(&brief, &limits).is_ok());
    }

    #[test]
    fn test_tone_validation() {
        assert_eq!(sanitize(&with("tone", json!(" LUXURY "))).unwrap().tone, Tone::Luxury);
        assert_eq!(code(sanitize(&with("tone", json!("edgy")))), "invalid_tone");
        assert_eq!(code(sanitize(&with("tone", json!(1)))), "invalid_tone");
        assert_eq!(code(sanitize(&without("tone"))), "invalid_tone");
    }

    #[test]
    fn test_processing_time_days() {
        assert_eq!(
            sanitize(&with("processingTimeDays", json!(45))).unwrap().processing_time_days,
            45
        );
        assert_eq!(
            sanitize(&with("processingTimeDays", json!("7"))).unwrap().processing_time_days,
            7
        );
        assert_eq!(
            sanitize(&with("processingTimeDays", json!(2.0))).unwrap().processing_time_days,
            2
        );

        for bad in [json!(0), json!(46), json!(-1), json!(2.5), json!("soon"), json!(true)] {
            assert_eq!(
                code(sanitize(&with("processingTimeDays", bad))),
                "invalid_processingTimeDays"
            );
        }
        assert_eq!(
            code(sanitize(&without("processingTimeDays"))),
            "invalid_processingTimeDays"
        );
    }

    #[test]
    fn test_flags() {
        let input = sanitize(&without("personalization")).unwrap();
        assert!(!input.personalization);

        let input = sanitize(&with("includeUkSpelling", json!(true))).unwrap();
        assert!(input.include_uk_spelling);

        assert_eq!(
            code(sanitize(&with("personalization", json!("yes")))),
            "invalid_personalization"
        );
        assert_eq!(
            code(sanitize(&with("includeUkSpelling", json!(1)))),
            "invalid_includeUkSpelling"
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let mut brief = valid_brief();
        brief["shopName"] = json!("");
        brief["tone"] = json!("edgy");
        assert_eq!(code(sanitize(&raw(brief))), "invalid_shopName");
    }

    #[test]
    fn test_parse_keyword_list() {
        let keywords = parse_keyword_list("wedding gift, bridesmaid gift\nhandmade box").unwrap();
        assert_eq!(&keywords[..3], ["wedding gift", "bridesmaid gift", "handmade box"]);
    }

    #[test]
    fn test_parse_keyword_list_failures() {
        assert_eq!(parse_keyword_list("").unwrap_err().code(), "invalid_keywordsCsv");
        assert_eq!(
            parse_keyword_list(&"a,".repeat(3000)).unwrap_err().code(),
            "invalid_keywordsCsv"
        );
        assert_eq!(
            parse_keyword_list(&"k".repeat(81)).unwrap_err().code(),
            "invalid_keywordsCsv"
        );
    }

    #[test]
    fn test_parse_material_list() {
        assert!(parse_material_list("").unwrap().is_empty());
        assert_eq!(parse_material_list("Linen,\ncotton").unwrap(), vec!["linen", "cotton"]);
        assert_eq!(
            parse_material_list(&"m".repeat(81)).unwrap_err().code(),
            "invalid_materialsCsv"
        );
    }
}
