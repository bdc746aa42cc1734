//! Brief-to-pack orchestration service.

use crate::application::services::sanitizer::{
    SanitizeLimits, parse_keyword_list, parse_material_list, sanitize_with_limits,
};
use crate::domain::ValidationError;
use crate::domain::entities::{ListingInput, ListingPack, PackPreview, RawListingInput};
use crate::generator;

/// Kind of delimited list accepted by [`ListingService::parse_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Keywords,
    Materials,
}

/// Service turning raw briefs into listing packs.
///
/// Stateless apart from its configured limits, so a single instance can be
/// shared across any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct ListingService {
    limits: SanitizeLimits,
    preview_tag_count: usize,
}

impl ListingService {
    /// Creates a new listing service.
    ///
    /// # Arguments
    ///
    /// - `limits` - phrase length limits applied by the sanitizer
    /// - `preview_tag_count` - tags revealed by [`Self::preview`]
    pub fn new(limits: SanitizeLimits, preview_tag_count: usize) -> Self {
        Self {
            limits,
            preview_tag_count,
        }
    }

    /// Validates and normalizes a raw brief.
    ///
    /// # Errors
    ///
    /// Returns the field-scoped [`ValidationError`] of the first invalid field.
    pub fn sanitize(&self, raw: &RawListingInput) -> Result<ListingInput, ValidationError> {
        sanitize_with_limits(raw, &self.limits).inspect_err(|err| {
            tracing::debug!(code = err.code(), reason = err.reason, "Brief rejected");
        })
    }

    /// Generates a pack from a sanitized brief. Never fails.
    pub fn build_pack(&self, input: &ListingInput) -> ListingPack {
        let pack = generator::build_pack(input);

        tracing::info!(
            score = pack.score,
            tags = pack.tags.len(),
            tone = %input.tone,
            uk_spelling = input.include_uk_spelling,
            "Listing pack generated"
        );

        pack
    }

    /// Sanitizes a raw brief and generates its pack.
    ///
    /// # Errors
    ///
    /// See [`Self::sanitize`]. No pack is built for a rejected brief.
    pub fn generate(&self, raw: &RawListingInput) -> Result<ListingPack, ValidationError> {
        let input = self.sanitize(raw)?;
        Ok(self.build_pack(&input))
    }

    /// Truncates a pack for display before payment.
    pub fn preview(&self, pack: &ListingPack) -> PackPreview {
        PackPreview::from_pack(pack, self.preview_tag_count)
    }

    /// Parses comma or newline delimited keywords or materials.
    ///
    /// # Errors
    ///
    /// `invalid_keywordsCsv` or `invalid_materialsCsv`, depending on `kind`.
    pub fn parse_list(&self, text: &str, kind: ListKind) -> Result<Vec<String>, ValidationError> {
        match kind {
            ListKind::Keywords => parse_keyword_list(text),
            ListKind::Materials => parse_material_list(text),
        }
    }
}

impl Default for ListingService {
    fn default() -> Self {
        Self::new(SanitizeLimits::default(), 3)
    }
}
