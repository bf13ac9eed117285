// One-shot inspection commands for the team-calls database file: quick
// schema, count and content dumps for local debugging.
use anyhow::Result;
use clap::Subcommand;
use sqlx::Row;

use crate::database::DatabaseManager;

#[derive(Subcommand)]
pub enum InspectCommands {
    #[command(about = "Print the schema of each known table")]
    Tables,

    #[command(about = "Print row counts per table")]
    Counts,

    #[command(about = "Dump tag rows plus the distinct severities in use")]
    Tags,

    #[command(about = "Dump the agent roster")]
    Agents,
}

const KNOWN_TABLES: &[&str] = &["tags", "agents", "audit_logs"];

pub async fn run(cmd: InspectCommands) -> Result<()> {
    match cmd {
        InspectCommands::Tables => tables().await,
        InspectCommands::Counts => counts().await,
        InspectCommands::Tags => tags().await,
        InspectCommands::Agents => agents().await,
    }
}

async fn tables() -> Result<()> {
    let pool = DatabaseManager::pool().await?;

    for table in KNOWN_TABLES {
        println!("\n--- Schema for {} ---", table);
        let sql = format!("PRAGMA table_info({})", table);
        let rows = sqlx::query(&sql).fetch_all(pool).await?;
        if rows.is_empty() {
            println!("Table {} does not exist.", table);
            continue;
        }
        for row in rows {
            let cid: i64 = row.get("cid");
            let name: String = row.get("name");
            let col_type: String = row.get("type");
            let notnull: i64 = row.get("notnull");
            let pk: i64 = row.get("pk");
            println!("{:>3}  {:<16} {:<10} notnull={} pk={}", cid, name, col_type, notnull, pk);
        }
    }

    Ok(())
}

async fn counts() -> Result<()> {
    let pool = DatabaseManager::pool().await?;

    for table in KNOWN_TABLES {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(pool).await?;
        println!("{:<12} {}", table, count);
    }

    Ok(())
}

async fn tags() -> Result<()> {
    let pool = DatabaseManager::pool().await?;

    let rows = sqlx::query(
        "SELECT id, name, code, category, dimension, type, active FROM tags ORDER BY CAST(id AS INTEGER)",
    )
    .fetch_all(pool)
    .await?;

    for row in rows {
        let id: String = row.get("id");
        let name: String = row.get("name");
        let code: String = row.get("code");
        let category: String = row.get("category");
        let dimension: String = row.get("dimension");
        let tag_type: String = row.get("type");
        let active: i64 = row.get("active");
        println!(
            "{:>3}  {:<28} {:<36} {:<14} {:<18} {:<9} active={}",
            id, name, code, category, dimension, tag_type, active
        );
    }

    let severities = sqlx::query("SELECT DISTINCT severity FROM tags")
        .fetch_all(pool)
        .await?;
    let distinct: Vec<String> = severities
        .iter()
        .map(|row| row.get::<Option<String>, _>("severity").unwrap_or_else(|| "NULL".to_string()))
        .collect();
    println!("\nDistinct severity: {:?}", distinct);

    Ok(())
}

async fn agents() -> Result<()> {
    let pool = DatabaseManager::pool().await?;

    let rows = sqlx::query("SELECT id, name, avatarId FROM agents ORDER BY name ASC")
        .fetch_all(pool)
        .await?;

    for row in rows {
        let id: String = row.get("id");
        let name: String = row.get("name");
        let avatar_id: String = row.get("avatarId");
        println!("{:>3}  {:<20} avatar={}", id, name, avatar_id);
    }

    Ok(())
}
