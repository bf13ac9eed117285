use axum::Json;
use serde_json::{json, Value};

use crate::config;

/// GET /admin/settings - sanitized view of the runtime configuration.
/// The admin password never leaves the process, only whether it is set.
pub async fn settings_get() -> Json<Value> {
    let settings = config::config();

    Json(json!({
        "environment": settings.environment,
        "guard": {
            "protectedPrefixes": settings.guard.protected_prefixes,
            "loginPath": settings.guard.login_path,
            "cookieName": settings.guard.cookie_name,
        },
        "fixtures": {
            "dir": settings.fixtures.dir,
        },
        "database": {
            "path": settings.database.path,
        },
        "security": {
            "adminPasswordSet": settings.security.admin_password.is_some(),
            "secureCookies": settings.security.secure_cookies,
            "corsOrigins": settings.security.cors_origins,
        },
    }))
}
