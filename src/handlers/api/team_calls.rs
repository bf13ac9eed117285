use axum::Json;

use crate::database::{DatabaseError, DatabaseManager};
use crate::error::ApiError;
use crate::types::{Agent, Tag};

/// GET /api/team-calls/agents - roster ordered by name
pub async fn agents_get() -> Result<Json<Vec<Agent>>, ApiError> {
    let pool = DatabaseManager::pool().await?;

    let agents: Vec<Agent> =
        sqlx::query_as("SELECT id, name, avatarId FROM agents ORDER BY name ASC")
            .fetch_all(pool)
            .await
            .map_err(DatabaseError::from)?;

    Ok(Json(agents))
}

#[derive(sqlx::FromRow)]
struct TagRow {
    id: String,
    name: String,
    code: String,
    category: String,
    is_mandatory: i64,
    dimension: String,
    #[sqlx(rename = "type")]
    tag_type: String,
    severity: Option<String>,
    #[sqlx(rename = "scoreRange")]
    score_range: String,
    description: String,
    active: i64,
    #[sqlx(rename = "createdAt")]
    created_at: String,
    #[sqlx(rename = "updatedAt")]
    updated_at: String,
}

/// GET /api/team-calls/config/tags - all tags, newest first
pub async fn tags_get() -> Result<Json<Vec<Tag>>, ApiError> {
    let pool = DatabaseManager::pool().await?;

    let rows: Vec<TagRow> = sqlx::query_as("SELECT * FROM tags ORDER BY createdAt DESC")
        .fetch_all(pool)
        .await
        .map_err(DatabaseError::from)?;

    // SQLite stores the flags as 0/1; expose them as booleans
    let tags = rows
        .into_iter()
        .map(|row| Tag {
            id: row.id,
            name: row.name,
            code: row.code,
            category: row.category,
            is_mandatory: row.is_mandatory != 0,
            dimension: row.dimension,
            tag_type: row.tag_type,
            severity: row.severity,
            score_range: row.score_range,
            description: row.description,
            active: row.active != 0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
        .collect();

    Ok(Json(tags))
}
