use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::config::GuardSettings;

/// Outcome of a guard evaluation for a single request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the request continue to its handler unchanged.
    Allow,
    /// Send the client to the login path instead of the requested resource.
    RedirectToLogin,
}

/// Cookie route guard.
///
/// Holds an immutable prefix set and the expected cookie, fixed at
/// construction. Evaluating a request is a pure function of the request
/// path and the cookie value, so one guard instance is shared across all
/// in-flight requests without coordination.
#[derive(Clone)]
pub struct RouteGuard {
    config: Arc<GuardSettings>,
}

impl RouteGuard {
    pub fn new(config: GuardSettings) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.config.login_path
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }

    /// True if the path falls under any protected prefix.
    ///
    /// Raw byte-prefix comparison, case-sensitive, no segment boundary:
    /// "/dashboardExtra" matches the "/dashboard" prefix just like
    /// "/dashboard/x" does. An empty prefix set protects nothing.
    pub fn is_protected(&self, path: &str) -> bool {
        self.config
            .protected_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Decide what happens to a request, given its path and the value of
    /// the auth cookie if one was sent. Absent cookie and wrong value
    /// collapse to the same redirect outcome.
    pub fn decide(&self, path: &str, cookie_value: Option<&str>) -> GuardDecision {
        if !self.is_protected(path) {
            return GuardDecision::Allow;
        }

        match cookie_value {
            Some(value) if value == self.config.cookie_expected_value => GuardDecision::Allow,
            _ => GuardDecision::RedirectToLogin,
        }
    }
}

/// Axum middleware wrapping [`RouteGuard::decide`].
///
/// Layered over the whole router, so every inbound request flows through
/// the prefix check; unprotected paths pass straight through.
pub async fn route_guard(
    State(guard): State<RouteGuard>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let cookie_value = jar.get(guard.cookie_name()).map(|c| c.value());

    match guard.decide(&path, cookie_value) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::RedirectToLogin => {
            // Optional: pass the requested path along so login can send
            // the user back afterwards
            // let location = format!("{}?from={}", guard.login_path(), path);
            Redirect::temporary(guard.login_path()).into_response()
        }
    }
}
