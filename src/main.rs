use axum::{
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod config;
mod database;
mod error;
mod fixtures;
mod handlers;
mod middleware;
mod types;

use crate::middleware::{route_guard, RouteGuard};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up ADMIN_PASSWORD, DATABASE_PATH, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting Studio API in {:?} mode", config.environment);

    if config.security.admin_password.is_none() {
        tracing::warn!("ADMIN_PASSWORD environment variable is not set. Auth will fail.");
    }

    // Fixtures and the team-calls database must be usable before traffic
    if let Err(e) = crate::fixtures::store() {
        panic!("failed to load fixtures: {}", e);
    }
    if let Err(e) = crate::database::DatabaseManager::pool().await {
        panic!("failed to open team-calls database: {}", e);
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("STUDIO_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Studio API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    let guard = RouteGuard::new(crate::config::config().guard.clone());

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/login", get(handlers::public::login_page))
        // Public auth routes
        .merge(auth_routes())
        // Content APIs (outside the guarded prefixes)
        .merge(api_routes())
        // Guarded pages
        .merge(dashboard_routes())
        .merge(admin_routes())
        // The guard sees every inbound request; paths outside the
        // protected prefixes flow through untouched
        .layer(axum::middleware::from_fn_with_state(guard, route_guard))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn auth_routes() -> Router {
    use handlers::public::login;

    Router::new().route("/api/auth/login", post(login))
}

fn api_routes() -> Router {
    use handlers::api;

    Router::new()
        .route("/api/categories", get(api::categories_get))
        .route("/api/knowledge", get(api::knowledge_get).post(api::knowledge_post))
        .route("/api/media", get(api::media_get).post(api::media_post))
        .route("/api/publishing", get(api::publishing_get).post(api::publishing_post))
        .route("/api/stats", get(api::stats_get))
        .route("/api/team-calls/agents", get(api::agents_get))
        .route("/api/team-calls/config/tags", get(api::tags_get))
}

fn dashboard_routes() -> Router {
    use handlers::dashboard;

    Router::new()
        .route("/dashboard", get(dashboard::overview_get))
        .route("/dashboard/team-calls/action-log", get(dashboard::action_log_get))
}

fn admin_routes() -> Router {
    use handlers::dashboard;

    Router::new().route("/admin/settings", get(dashboard::settings_get))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Studio API (Rust)",
        "version": version,
        "description": "Content studio dashboard backend built with Rust (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "login": "/login, /api/auth/login (public - cookie acquisition)",
            "content": "/api/categories, /api/knowledge, /api/media, /api/publishing, /api/stats (public)",
            "team_calls": "/api/team-calls/agents, /api/team-calls/config/tags (public)",
            "dashboard": "/dashboard/* (protected - auth cookie required)",
            "admin": "/admin/* (protected - auth cookie required)",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
