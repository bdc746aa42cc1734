//! Field-scoped validation errors.
//!
//! Every rejected brief maps to exactly one stable machine-readable code of
//! the form `invalid_<fieldName>`, where `fieldName` is the camelCase wire
//! name of the offending field.

use std::fmt;

/// A brief field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ShopName,
    ProductType,
    TargetAudience,
    PrimaryKeyword,
    SupportingKeywords,
    KeywordsCsv,
    Materials,
    MaterialsCsv,
    Tone,
    PriceBand,
    ProcessingTimeDays,
    Personalization,
    IncludeUkSpelling,
}

impl Field {
    /// Returns the camelCase wire name of the field.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::ShopName => "shopName",
            Field::ProductType => "productType",
            Field::TargetAudience => "targetAudience",
            Field::PrimaryKeyword => "primaryKeyword",
            Field::SupportingKeywords => "supportingKeywords",
            Field::KeywordsCsv => "keywordsCsv",
            Field::Materials => "materials",
            Field::MaterialsCsv => "materialsCsv",
            Field::Tone => "tone",
            Field::PriceBand => "priceBand",
            Field::ProcessingTimeDays => "processingTimeDays",
            Field::Personalization => "personalization",
            Field::IncludeUkSpelling => "includeUkSpelling",
        }
    }

    /// Returns the error code reported when this field is rejected.
    pub fn error_code(self) -> &'static str {
        match self {
            Field::ShopName => "invalid_shopName",
            Field::ProductType => "invalid_productType",
            Field::TargetAudience => "invalid_targetAudience",
            Field::PrimaryKeyword => "invalid_primaryKeyword",
            Field::SupportingKeywords => "invalid_supportingKeywords",
            Field::KeywordsCsv => "invalid_keywordsCsv",
            Field::Materials => "invalid_materials",
            Field::MaterialsCsv => "invalid_materialsCsv",
            Field::Tone => "invalid_tone",
            Field::PriceBand => "invalid_priceBand",
            Field::ProcessingTimeDays => "invalid_processingTimeDays",
            Field::Personalization => "invalid_personalization",
            Field::IncludeUkSpelling => "invalid_includeUkSpelling",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Validation failure for a single brief field.
///
/// `Display` yields the stable error code, e.g. `invalid_primaryKeyword`.
/// The `reason` is human-readable context and is not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .field.error_code())]
pub struct ValidationError {
    pub field: Field,
    pub reason: &'static str,
}

impl ValidationError {
    pub fn new(field: Field, reason: &'static str) -> Self {
        Self { field, reason }
    }

    /// Stable machine-readable code for this failure.
    pub fn code(&self) -> &'static str {
        self.field.error_code()
    }
}
