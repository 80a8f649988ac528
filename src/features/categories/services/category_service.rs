use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{category_map, CategoryMap};
use crate::modules::store::SharedStore;

/// Service for category operations
pub struct CategoryService {
    store: SharedStore,
}

impl CategoryService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Every category as an id -> label map; an empty table is "not found"
    pub async fn list(&self) -> Result<CategoryMap> {
        let categories = self.store.list_categories().await?;

        if categories.is_empty() {
            return Err(AppError::NotFound("No categories available".to_string()));
        }

        Ok(category_map(categories))
    }
}
