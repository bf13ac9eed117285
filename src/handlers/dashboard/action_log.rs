use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::database::{DatabaseError, DatabaseManager};
use crate::error::ApiError;
use crate::types::AuditLogEntry;

#[derive(Debug, Deserialize)]
pub struct ActionLogQuery {
    pub limit: Option<i64>,
}

/// GET /dashboard/team-calls/action-log - recent audit entries, newest first
pub async fn action_log_get(
    Query(query): Query<ActionLogQuery>,
) -> Result<Json<Vec<AuditLogEntry>>, ApiError> {
    let limit = query.limit.unwrap_or(50).clamp(1, 500);
    let pool = DatabaseManager::pool().await?;

    let entries: Vec<AuditLogEntry> =
        sqlx::query_as("SELECT * FROM audit_logs ORDER BY timestamp DESC LIMIT ?")
            .bind(limit)
            .fetch_all(pool)
            .await
            .map_err(DatabaseError::from)?;

    Ok(Json(entries))
}
