use axum::Json;

use crate::error::ApiError;
use crate::fixtures;
use crate::types::Category;

/// GET /api/categories - the category fixture, unfiltered
pub async fn categories_get() -> Result<Json<Vec<Category>>, ApiError> {
    let store = fixtures::store()?;
    Ok(Json(store.categories.clone()))
}
