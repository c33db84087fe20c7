use std::env;

/// Token signing secret and lifetimes, in seconds.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

fn env_seconds(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "change-this-secret-in-production".to_string()),
            // 1 hour access, 7 day refresh
            access_token_expiry: env_seconds("JWT_ACCESS_EXPIRY", 3600),
            refresh_token_expiry: env_seconds("JWT_REFRESH_EXPIRY", 604800),
        }
    }
}
