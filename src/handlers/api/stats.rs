use axum::Json;

use crate::error::ApiError;
use crate::fixtures;
use crate::types::Stats;

/// GET /api/stats - dashboard counters over the content fixtures
pub async fn stats_get() -> Result<Json<Stats>, ApiError> {
    let store = fixtures::store()?;
    Ok(Json(store.compute_stats()))
}
