use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::fixtures;

/// GET /dashboard - overview document for the landing page
pub async fn overview_get() -> Result<Json<Value>, ApiError> {
    let store = fixtures::store()?;
    let stats = store.compute_stats();

    Ok(Json(json!({
        "page": "dashboard",
        "stats": stats,
        "categories": store.categories.len(),
    })))
}
