use axum::{extract::Query, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::fixtures;
use crate::types::{CreateMediaInput, MediaItem};

#[derive(Debug, Deserialize)]
pub struct MediaQuery {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

/// GET /api/media - filtered media listing as { data, total }
pub async fn media_get(Query(query): Query<MediaQuery>) -> Result<impl IntoResponse, ApiError> {
    let store = fixtures::store()?;
    let mut filtered: Vec<MediaItem> = store.media().clone();

    if let Some(media_type) = &query.media_type {
        filtered.retain(|m| &m.media_type == media_type);
    }

    if let Some(tag) = &query.tag {
        filtered.retain(|m| {
            m.tags
                .as_ref()
                .is_some_and(|tags| tags.iter().any(|t| t == tag))
        });
    }

    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        filtered.retain(|m| {
            m.filename.to_lowercase().contains(&needle)
                || m.description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        });
    }

    Ok(Json(json!({
        "data": filtered,
        "total": filtered.len(),
    })))
}

/// POST /api/media - register an upload (in-memory, resets on restart)
pub async fn media_post(Json(input): Json<CreateMediaInput>) -> Result<impl IntoResponse, ApiError> {
    let store = fixtures::store()?;
    let mut media = store.media_mut();

    let next_id = media.iter().map(|m| m.id).max().unwrap_or(0) + 1;
    let item = MediaItem {
        id: next_id,
        filename: input.filename,
        media_type: input.media_type,
        url: input.url,
        size: input.size,
        tags: input.tags,
        description: input.description,
        uploaded_at: Utc::now().to_rfc3339(),
        used_in: vec![],
    };
    media.push(item.clone());

    Ok((StatusCode::CREATED, Json(item)))
}
