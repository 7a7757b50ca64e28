pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const SESSION_TOKEN_TTL_ENV_VAR: &str = "SESSION_TOKEN_TTL_SECONDS";
    pub const OAUTH_CLIENT_ID_ENV_VAR: &str = "OAUTH_CLIENT_ID";
    pub const OAUTH_CLIENT_SECRET_ENV_VAR: &str = "OAUTH_CLIENT_SECRET";
}

// `config::Environment` lowercases variable names when it collects them.
pub(crate) mod keys {
    pub const JWT_SECRET: &str = "jwt_secret";
    pub const SESSION_TOKEN_TTL: &str = "session_token_ttl_seconds";
    pub const OAUTH_CLIENT_ID: &str = "oauth_client_id";
    pub const OAUTH_CLIENT_SECRET: &str = "oauth_client_secret";
}

/// 30 days, matching the session lifetime of the source framework.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 30 * 24 * 60 * 60;
