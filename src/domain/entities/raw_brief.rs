//! Unvalidated brief as received from a caller.

use serde::Deserialize;
use serde_json::Value;

/// A brief before sanitization.
///
/// Every field is an optional, loosely typed JSON value so that a wrong type
/// is reported by the sanitizer with the field's own `invalid_<field>` code
/// instead of failing deserialization as a whole.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListingInput {
    #[serde(default)]
    pub shop_name: Option<Value>,
    #[serde(default)]
    pub product_type: Option<Value>,
    #[serde(default)]
    pub target_audience: Option<Value>,
    #[serde(default)]
    pub primary_keyword: Option<Value>,
    /// Pre-split keyword list. Takes priority over `keywords_csv`.
    #[serde(default)]
    pub supporting_keywords: Option<Value>,
    /// Comma or newline delimited keywords.
    #[serde(default)]
    pub keywords_csv: Option<Value>,
    /// Pre-split material list. Takes priority over `materials_csv`.
    #[serde(default)]
    pub materials: Option<Value>,
    #[serde(default)]
    pub materials_csv: Option<Value>,
    #[serde(default)]
    pub tone: Option<Value>,
    #[serde(default)]
    pub price_band: Option<Value>,
    #[serde(default)]
    pub processing_time_days: Option<Value>,
    #[serde(default)]
    pub personalization: Option<Value>,
    #[serde(default)]
    pub include_uk_spelling: Option<Value>,
}
