use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub guard: GuardSettings,
    pub fixtures: FixtureSettings,
    pub database: DatabaseSettings,
    pub security: SecuritySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Route guard settings. Defaults gate /dashboard and /admin behind the
/// auth_token=authenticated cookie and redirect everything else to /login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardSettings {
    pub protected_prefixes: Vec<String>,
    pub login_path: String,
    pub cookie_name: String,
    pub cookie_expected_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSettings {
    pub dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub path: String,
    pub max_connections: u32,
    pub enable_query_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// Shared secret for the login endpoint. None means login is disabled
    /// and the endpoint answers with a server configuration error.
    pub admin_password: Option<String>,
    pub secure_cookies: bool,
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Guard overrides
        if let Ok(v) = env::var("GUARD_PROTECTED_PREFIXES") {
            self.guard.protected_prefixes = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Ok(v) = env::var("GUARD_LOGIN_PATH") {
            self.guard.login_path = v;
        }
        if let Ok(v) = env::var("GUARD_COOKIE_NAME") {
            self.guard.cookie_name = v;
        }
        if let Ok(v) = env::var("GUARD_COOKIE_EXPECTED_VALUE") {
            self.guard.cookie_expected_value = v;
        }

        // Fixture overrides
        if let Ok(v) = env::var("FIXTURES_DIR") {
            self.fixtures.dir = v;
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_PATH") {
            self.database.path = v;
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_ENABLE_QUERY_LOGGING") {
            self.database.enable_query_logging = v.parse().unwrap_or(self.database.enable_query_logging);
        }

        // Security overrides
        if let Ok(v) = env::var("ADMIN_PASSWORD") {
            self.security.admin_password = Some(v);
        }
        if let Ok(v) = env::var("SECURITY_SECURE_COOKIES") {
            self.security.secure_cookies = v.parse().unwrap_or(self.security.secure_cookies);
        }
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v.split(',').map(|s| s.trim().to_string()).collect();
        }

        self
    }

    fn guard_defaults() -> GuardSettings {
        GuardSettings {
            protected_prefixes: vec!["/dashboard".to_string(), "/admin".to_string()],
            login_path: "/login".to_string(),
            cookie_name: "auth_token".to_string(),
            cookie_expected_value: "authenticated".to_string(),
        }
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            guard: Self::guard_defaults(),
            fixtures: FixtureSettings {
                dir: "data".to_string(),
            },
            database: DatabaseSettings {
                path: "team-calls.db".to_string(),
                max_connections: 5,
                enable_query_logging: true,
            },
            security: SecuritySettings {
                admin_password: None,
                secure_cookies: false,
                enable_cors: true,
                cors_origins: vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ],
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            guard: Self::guard_defaults(),
            fixtures: FixtureSettings {
                dir: "data".to_string(),
            },
            database: DatabaseSettings {
                path: "team-calls.db".to_string(),
                max_connections: 10,
                enable_query_logging: true,
            },
            security: SecuritySettings {
                admin_password: None,
                secure_cookies: true,
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            guard: Self::guard_defaults(),
            fixtures: FixtureSettings {
                dir: "data".to_string(),
            },
            database: DatabaseSettings {
                path: "team-calls.db".to_string(),
                max_connections: 20,
                enable_query_logging: false,
            },
            security: SecuritySettings {
                admin_password: None,
                secure_cookies: true,
                enable_cors: true,
                cors_origins: vec!["https://app.example.com".to_string()],
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
