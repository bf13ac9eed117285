use axum::{extract::Query, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::fixtures;
use crate::types::{CreatePublishingInput, PublishChecklist, PublishHistoryEntry, PublishingItem};

#[derive(Debug, Deserialize)]
pub struct PublishingQuery {
    pub status: Option<String>,
    pub channel: Option<String>,
}

fn count_status(items: &[PublishingItem], status: &str) -> usize {
    items.iter().filter(|p| p.status == status).count()
}

/// GET /api/publishing - filtered listing as { data, total, stats },
/// newest update first
pub async fn publishing_get(
    Query(query): Query<PublishingQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let store = fixtures::store()?;
    let mut filtered: Vec<PublishingItem> = store.publishing().clone();

    if let Some(status) = &query.status {
        filtered.retain(|p| &p.status == status);
    }

    if let Some(channel) = &query.channel {
        filtered.retain(|p| &p.channel == channel);
    }

    // ISO-8601 timestamps, so a string sort is a time sort
    filtered.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    Ok(Json(json!({
        "data": filtered,
        "total": filtered.len(),
        "stats": {
            "draft": count_status(&filtered, "draft"),
            "pending_review": count_status(&filtered, "pending_review"),
            "published": count_status(&filtered, "published"),
            "archived": count_status(&filtered, "archived"),
        },
    })))
}

/// POST /api/publishing - create a draft with an empty checklist and a
/// one-entry history
pub async fn publishing_post(
    Json(input): Json<CreatePublishingInput>,
) -> Result<impl IntoResponse, ApiError> {
    let store = fixtures::store()?;
    let mut publishing = store.publishing_mut();

    let now = Utc::now().to_rfc3339();
    let next_id = publishing.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    let item = PublishingItem {
        id: next_id,
        title: input.title,
        channel: input.channel,
        status: "draft".to_string(),
        checklist: PublishChecklist::default(),
        history: vec![PublishHistoryEntry {
            status: "draft".to_string(),
            timestamp: now.clone(),
            actor: "user_001".to_string(),
            note: "Draft created".to_string(),
        }],
        created_at: now.clone(),
        updated_at: now,
    };
    publishing.push(item.clone());

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "data": item,
            "message": "Publishing created successfully",
        })),
    ))
}
