// Schema creation and first-run seed data for the team-calls database.
//
// Mirrors the dashboard's boot behavior: CREATE TABLE IF NOT EXISTS for
// every table, then seed only when the tags table is empty.
use sqlx::SqlitePool;
use tracing::info;

use super::manager::DatabaseError;

const TABLES: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS tags (
      id TEXT PRIMARY KEY,
      name TEXT NOT NULL,
      code TEXT NOT NULL UNIQUE,
      category TEXT NOT NULL,
      is_mandatory BOOLEAN DEFAULT 0,
      dimension TEXT NOT NULL,
      type TEXT NOT NULL,
      severity TEXT,
      scoreRange TEXT NOT NULL,
      description TEXT NOT NULL,
      active INTEGER DEFAULT 1,
      createdAt TEXT NOT NULL,
      updatedAt TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS agents (
      id TEXT PRIMARY KEY,
      name TEXT NOT NULL,
      avatarId TEXT NOT NULL,
      teamId TEXT,
      createdAt TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS audit_logs (
      id TEXT PRIMARY KEY,
      timestamp TEXT NOT NULL,
      user TEXT NOT NULL,
      action TEXT NOT NULL,
      objectType TEXT NOT NULL,
      objectName TEXT NOT NULL,
      changes TEXT NOT NULL,
      details TEXT NOT NULL
    )"#,
];

struct TagSeed {
    id: &'static str,
    name: &'static str,
    code: &'static str,
    category: &'static str,
    is_mandatory: i64,
    dimension: &'static str,
    tag_type: &'static str,
    severity: &'static str,
    score_range: &'static str,
    description: &'static str,
}

const TAG_SEEDS: &[TagSeed] = &[
    TagSeed { id: "1", name: "开场白完整", code: "opening_complete", category: "Sales", is_mandatory: 1, dimension: "Process", tag_type: "positive", severity: "无", score_range: "1-1", description: "完整介绍角色与目的" },
    TagSeed { id: "2", name: "基础需求识别", code: "needs_identification_basic", category: "Sales", is_mandatory: 0, dimension: "Process", tag_type: "positive", severity: "无", score_range: "1-5", description: "基础需求识别" },
    TagSeed { id: "3", name: "尝试预约", code: "schedule_attempt", category: "Sales", is_mandatory: 1, dimension: "Process", tag_type: "positive", severity: "无", score_range: "1-5", description: "尝试推进预约" },
    TagSeed { id: "4", name: "基础异议处理", code: "skill_handle_objection_basic", category: "Sales", is_mandatory: 0, dimension: "Skills", tag_type: "positive", severity: "无", score_range: "1-5", description: "常规异议处理" },
    TagSeed { id: "5", name: "价格异议处理", code: "skill_handle_objection_price", category: "Sales", is_mandatory: 0, dimension: "Skills", tag_type: "positive", severity: "无", score_range: "1-5", description: "价格异议处理" },
    TagSeed { id: "6", name: "倾听技巧", code: "listening_good", category: "Sales", is_mandatory: 0, dimension: "Communication", tag_type: "positive", severity: "无", score_range: "1-5", description: "认真倾听（复述、回应）" },
    TagSeed { id: "7", name: "客户高意向", code: "customer_high_intent", category: "Customer", is_mandatory: 0, dimension: "Customer.Intent", tag_type: "positive", severity: "无", score_range: "1-5", description: "强烈需求（急、焦虑）" },
    TagSeed { id: "8", name: "客户异议-价格", code: "customer_objection_price", category: "Customer", is_mandatory: 0, dimension: "Customer.Attribute", tag_type: "negative", severity: "无", score_range: "1-5", description: "价格异议" },
    TagSeed { id: "9", name: "沟通中断", code: "communication_breakdown", category: "Service Issue", is_mandatory: 0, dimension: "Service Issue", tag_type: "negative", severity: "1-3", score_range: "1-5", description: "沟通中断/冲突" },
    TagSeed { id: "10", name: "风险未解决", code: "risk_unaddressed", category: "Service Issue", is_mandatory: 0, dimension: "Service Issue", tag_type: "negative", severity: "1-3", score_range: "1-5", description: "风险被忽略未解释" },
];

const AGENT_SEEDS: &[(&str, &str, &str, &str)] = &[
    ("1", "Mike Jones", "knowledge", "9055771909563658940"),
    ("2", "Sarah Johnson", "planner", "9055771909563658940"),
    ("3", "Derrick Deacon", "writer", "9055771909563658940"),
    ("4", "Sheryl Grow", "verifier", "9055771909563658940"),
    ("5", "Sam Waltman", "call_analysis", "9055771909563658940"),
];

const AUDIT_LOG_SEEDS: &[(&str, &str, &str, &str, &str, &str, &str, &str)] = &[
    (
        "1",
        "2025-12-04T09:15:00Z",
        "admin",
        "create",
        "tag",
        "opening_complete",
        r#"{"active": 1}"#,
        "Initial tag import",
    ),
    (
        "2",
        "2025-12-04T09:16:00Z",
        "admin",
        "update",
        "tag",
        "schedule_attempt",
        r#"{"is_mandatory": [0, 1]}"#,
        "Marked as mandatory for Sales.Process",
    ),
    (
        "3",
        "2025-12-05T14:02:00Z",
        "admin",
        "create",
        "agent",
        "Sam Waltman",
        r#"{"avatarId": "call_analysis"}"#,
        "Added call analysis agent",
    ),
];

/// Create tables when missing and seed the database on first run.
pub async fn initialize(pool: &SqlitePool) -> Result<(), DatabaseError> {
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }

    let (tag_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tags")
        .fetch_one(pool)
        .await?;
    if tag_count > 0 {
        return Ok(());
    }

    let seed_date = "2025-12-04";
    for tag in TAG_SEEDS {
        sqlx::query(
            r#"INSERT INTO tags(id, name, code, category, is_mandatory, dimension, type, severity, scoreRange, description, active, createdAt, updatedAt)
               VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?)"#,
        )
        .bind(tag.id)
        .bind(tag.name)
        .bind(tag.code)
        .bind(tag.category)
        .bind(tag.is_mandatory)
        .bind(tag.dimension)
        .bind(tag.tag_type)
        .bind(tag.severity)
        .bind(tag.score_range)
        .bind(tag.description)
        .bind(seed_date)
        .bind(seed_date)
        .execute(pool)
        .await?;
    }

    for (id, name, avatar_id, team_id) in AGENT_SEEDS {
        sqlx::query("INSERT INTO agents(id, name, avatarId, teamId, createdAt) VALUES(?, ?, ?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(avatar_id)
            .bind(team_id)
            .bind("2025-01-01")
            .execute(pool)
            .await?;
    }

    for (id, timestamp, user, action, object_type, object_name, changes, details) in AUDIT_LOG_SEEDS
    {
        sqlx::query(
            r#"INSERT INTO audit_logs(id, timestamp, user, action, objectType, objectName, changes, details)
               VALUES(?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(id)
        .bind(timestamp)
        .bind(user)
        .bind(action)
        .bind(object_type)
        .bind(object_name)
        .bind(changes)
        .bind(details)
        .execute(pool)
        .await?;
    }

    info!("Database seeded with tags, agents and audit logs");
    Ok(())
}
