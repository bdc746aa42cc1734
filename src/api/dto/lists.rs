//! DTOs for delimited list parsing.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ListKind;

/// Which list the text holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKindParam {
    #[default]
    Keywords,
    Materials,
}

impl From<ListKindParam> for ListKind {
    fn from(kind: ListKindParam) -> Self {
        match kind {
            ListKindParam::Keywords => ListKind::Keywords,
            ListKindParam::Materials => ListKind::Materials,
        }
    }
}

/// Request to split comma or newline delimited text.
#[derive(Debug, Deserialize, Validate)]
pub struct ParseListRequest {
    /// Same bound as `sanitizer::MAX_LIST_TEXT_LENGTH`.
    #[validate(length(max = 4000))]
    pub text: String,

    /// Defaults to `keywords`.
    #[serde(default)]
    pub kind: ListKindParam,
}

/// Normalized list items in first-seen order.
#[derive(Debug, Serialize)]
pub struct ParseListResponse {
    pub items: Vec<String>,
    pub count: usize,
}

impl From<Vec<String>> for ParseListResponse {
    fn from(items: Vec<String>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
