mod common;

use anyhow::Result;
use reqwest::{header, StatusCode};
use serde_json::json;

#[tokio::test]
async fn login_rejects_wrong_password() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "password": "wrong" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn login_sets_auth_cookie_and_unlocks_dashboard() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::no_redirect_client()?;

    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "password": common::ADMIN_PASSWORD }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let set_cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set the auth cookie")
        .to_str()?
        .to_string();
    assert!(set_cookie.contains("auth_token=authenticated"));
    assert!(set_cookie.contains("HttpOnly"));

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);

    // The freshly issued cookie opens the protected pages
    let res = client
        .get(format!("{}/dashboard", server.base_url))
        .header(header::COOKIE, "auth_token=authenticated")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}
