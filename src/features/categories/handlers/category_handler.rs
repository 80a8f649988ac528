use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoriesResponseDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorResponse;

/// List all categories
///
/// Returns an object keyed by category id rather than an array.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Categories keyed by id", body = CategoriesResponseDto),
        (status = 404, description = "No categories exist", body = ErrorResponse),
        (status = 422, description = "Categories could not be loaded", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoriesResponseDto>> {
    let categories = service.list().await?;
    Ok(Json(CategoriesResponseDto { categories }))
}
