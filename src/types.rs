// Shared data models for the dashboard APIs.
//
// Fixture-backed models keep the field casing of the JSON files they are
// loaded from (media/publishing use camelCase keys, knowledge/plans/drafts
// use snake_case). Database-backed models keep the column names of the
// team-calls SQLite schema.
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: i64,
    pub filename: String,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub uploaded_at: String,
    pub used_in: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaInput {
    pub filename: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: Option<String>,
    pub size: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Knowledge {
    pub id: i64,
    pub topic: String,
    pub content: Value,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateKnowledgeInput {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub content: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishChecklist {
    pub title_review: bool,
    pub content_review: bool,
    pub seo_optimization: bool,
    pub image_selection: bool,
    pub meta_description: bool,
}

impl Default for PublishChecklist {
    fn default() -> Self {
        Self {
            title_review: false,
            content_review: false,
            seo_optimization: false,
            image_selection: false,
            meta_description: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishHistoryEntry {
    pub status: String,
    pub timestamp: String,
    pub actor: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishingItem {
    pub id: i64,
    pub title: String,
    pub channel: String,
    pub status: String,
    pub checklist: PublishChecklist,
    pub history: Vec<PublishHistoryEntry>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePublishingInput {
    pub title: String,
    pub channel: String,
}

/// Dashboard stats aggregated over the knowledge/plans/drafts fixtures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_knowledge: usize,
    pub total_plans: usize,
    pub total_drafts: usize,
    pub published_content: usize,
    pub plans_by_status: std::collections::BTreeMap<String, usize>,
    pub drafts_by_status: std::collections::BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(rename = "avatarId")]
    #[sqlx(rename = "avatarId")]
    pub avatar_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub code: String,
    pub category: String,
    pub is_mandatory: bool,
    pub dimension: String,
    #[serde(rename = "type")]
    pub tag_type: String,
    pub severity: Option<String>,
    #[serde(rename = "scoreRange")]
    pub score_range: String,
    pub description: String,
    pub active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AuditLogEntry {
    pub id: String,
    pub timestamp: String,
    pub user: String,
    pub action: String,
    #[serde(rename = "objectType")]
    #[sqlx(rename = "objectType")]
    pub object_type: String,
    #[serde(rename = "objectName")]
    #[sqlx(rename = "objectName")]
    pub object_name: String,
    pub changes: String,
    pub details: String,
}
