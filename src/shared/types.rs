use axum::http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{
    DEFAULT_PAGE, NOT_FOUND_MESSAGE, QUESTIONS_PER_PAGE, UNPROCESSABLE_MESSAGE,
};

/// JSON body of every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    /// HTTP status code, repeated in the body
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn from_status(status: StatusCode) -> Self {
        let message = if status == StatusCode::NOT_FOUND {
            NOT_FOUND_MESSAGE
        } else {
            UNPROCESSABLE_MESSAGE
        };

        Self {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// `?page=N` query parameter shared by the paginated question endpoints.
///
/// A missing or non-numeric value falls back to the first page instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "lenient_page")]
    #[param(minimum = 1)]
    pub page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse::<i64>().ok()))
}

/// Slice out page `page` (1-indexed) of `items`, `QUESTIONS_PER_PAGE` at a time.
///
/// Pages before the first or past the last item yield an empty slice.
pub fn paginate<T>(page: i64, items: &[T]) -> &[T] {
    let Some(index) = page.checked_sub(1).and_then(|i| usize::try_from(i).ok()) else {
        return &[];
    };
    let Some(start) = index.checked_mul(QUESTIONS_PER_PAGE) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
