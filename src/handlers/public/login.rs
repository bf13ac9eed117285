use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::json;

use crate::config;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// POST /api/auth/login - exchange the shared secret for the auth cookie.
///
/// The cookie carries a fixed marker value, not a session token; the route
/// guard compares it for byte equality and nothing else ever reads it.
pub async fn login(jar: CookieJar, body: Option<Json<LoginRequest>>) -> impl IntoResponse {
    let Some(Json(body)) = body else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid request body" })),
        )
            .into_response();
    };

    let settings = config::config();

    let Some(expected) = settings.security.admin_password.as_deref() else {
        tracing::warn!("ADMIN_PASSWORD environment variable is not set. Auth will fail.");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Server configuration error: Password not set" })),
        )
            .into_response();
    };

    if body.password != expected {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid password" })),
        )
            .into_response();
    }

    let cookie = Cookie::build((
        settings.guard.cookie_name.clone(),
        settings.guard.cookie_expected_value.clone(),
    ))
    .http_only(true)
    .secure(settings.security.secure_cookies)
    .same_site(SameSite::Strict)
    .max_age(time::Duration::weeks(1))
    .path("/")
    .build();

    (jar.add(cookie), Json(json!({ "success": true }))).into_response()
}

/// GET /login - redirect target of the route guard. The login form itself
/// is rendered client-side; this route only has to exist and stay public.
pub async fn login_page() -> impl IntoResponse {
    Json(json!({
        "page": "login",
        "hint": "POST /api/auth/login with { \"password\": ... } to obtain the auth cookie"
    }))
}
