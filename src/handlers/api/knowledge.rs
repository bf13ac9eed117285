use axum::{extract::Query, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Deserialize;

use crate::error::ApiError;
use crate::fixtures;
use crate::types::{CreateKnowledgeInput, Knowledge};

#[derive(Debug, Deserialize)]
pub struct KnowledgeQuery {
    pub topic: Option<String>,
    pub search: Option<String>,
}

/// GET /api/knowledge - list entries, optionally filtered by exact topic
/// and by a case-insensitive search over topic and stringified content
pub async fn knowledge_get(
    Query(query): Query<KnowledgeQuery>,
) -> Result<Json<Vec<Knowledge>>, ApiError> {
    let store = fixtures::store()?;
    let mut filtered: Vec<Knowledge> = store.knowledge().clone();

    if let Some(topic) = &query.topic {
        filtered.retain(|k| &k.topic == topic);
    }

    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        filtered.retain(|k| {
            k.topic.to_lowercase().contains(&needle)
                || k.content.to_string().to_lowercase().contains(&needle)
        });
    }

    Ok(Json(filtered))
}

/// POST /api/knowledge - create a new entry (in-memory, resets on restart)
pub async fn knowledge_post(
    Json(input): Json<CreateKnowledgeInput>,
) -> Result<impl IntoResponse, ApiError> {
    let topic = input.topic.filter(|t| !t.is_empty());
    let content = input.content.filter(|c| !c.is_null());

    let (Some(topic), Some(content)) = (topic, content) else {
        return Err(ApiError::bad_request("Topic and content are required"));
    };

    let now = Utc::now();
    let entry = Knowledge {
        id: now.timestamp_millis(),
        topic,
        content,
        created_at: now.to_rfc3339(),
        updated_at: now.to_rfc3339(),
    };

    let store = fixtures::store()?;
    store.knowledge_mut().push(entry.clone());

    Ok((StatusCode::CREATED, Json(entry)))
}
