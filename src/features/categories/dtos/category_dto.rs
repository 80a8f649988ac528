use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Category labels keyed by category id, e.g. `{"1": "Science"}`
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Response DTO for `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponseDto {
    pub categories: BTreeMap<i32, String>,
}
