mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn categories_returns_fixture_array() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/categories", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    let categories = body.as_array().expect("array body");
    assert!(!categories.is_empty());
    assert!(categories[0].get("slug").is_some());
    Ok(())
}

#[tokio::test]
async fn stats_fields_are_consistent() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let stats = res.json::<Value>().await?;
    let total_drafts = stats["totalDrafts"].as_u64().unwrap();
    let by_status: u64 = stats["draftsByStatus"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(total_drafts, by_status);

    let published = stats["publishedContent"].as_u64().unwrap();
    assert!(published <= total_drafts);
    Ok(())
}

#[tokio::test]
async fn media_filters_by_type() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/media?type=image", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    let data = body["data"].as_array().unwrap();
    assert_eq!(body["total"].as_u64().unwrap() as usize, data.len());
    assert!(data.iter().all(|m| m["type"] == "image"));
    Ok(())
}

#[tokio::test]
async fn media_search_is_case_insensitive() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/media?search=NEWSLETTER", server.base_url))
        .send()
        .await?;
    let body = res.json::<Value>().await?;
    let data = body["data"].as_array().unwrap();
    assert!(!data.is_empty());
    Ok(())
}

#[tokio::test]
async fn knowledge_filters_by_topic() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/knowledge?topic=weekly-newsletter", server.base_url))
        .send()
        .await?;
    let entries = res.json::<Value>().await?;
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["topic"], "weekly-newsletter");
    Ok(())
}

#[tokio::test]
async fn knowledge_post_requires_topic_and_content() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/knowledge", server.base_url))
        .json(&json!({ "topic": "orphan" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn knowledge_post_creates_entry() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/knowledge", server.base_url))
        .json(&json!({
            "topic": "integration-topic",
            "content": { "summary": "created during tests" }
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let created = res.json::<Value>().await?;
    assert_eq!(created["topic"], "integration-topic");
    assert!(created["id"].as_i64().unwrap() > 0);

    // New entry is visible to subsequent reads
    let res = client
        .get(format!("{}/api/knowledge?topic=integration-topic", server.base_url))
        .send()
        .await?;
    let entries = res.json::<Value>().await?;
    assert_eq!(entries.as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn publishing_reports_counts_for_filtered_set() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/publishing?channel=blog", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    let data = body["data"].as_array().unwrap();
    assert!(data.iter().all(|p| p["channel"] == "blog"));

    let stats = &body["stats"];
    let sum = stats["draft"].as_u64().unwrap()
        + stats["pending_review"].as_u64().unwrap()
        + stats["published"].as_u64().unwrap()
        + stats["archived"].as_u64().unwrap();
    assert_eq!(sum, body["total"].as_u64().unwrap());

    // Sorted newest update first
    let timestamps: Vec<&str> = data.iter().map(|p| p["updated_at"].as_str().unwrap()).collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted);
    Ok(())
}

#[tokio::test]
async fn agents_are_ordered_by_name() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/team-calls/agents", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let agents = res.json::<Value>().await?;
    let agents = agents.as_array().unwrap();
    assert!(!agents.is_empty());
    assert!(agents.iter().all(|a| a.get("avatarId").is_some()));

    let names: Vec<&str> = agents.iter().map(|a| a["name"].as_str().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    Ok(())
}

#[tokio::test]
async fn tags_expose_boolean_active_flag() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/team-calls/config/tags", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let tags = res.json::<Value>().await?;
    let tags = tags.as_array().unwrap();
    assert!(!tags.is_empty());
    assert!(tags.iter().all(|t| t["active"].is_boolean()));
    assert!(tags.iter().all(|t| t.get("scoreRange").is_some()));
    Ok(())
}
