//! Server Configuration

/// Server configuration, loaded from environment variables
///
/// | Env var | Default | Meaning |
/// |---------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | DATABASE_PATH | taskboard.db | SQLite database file |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | GEMINI_API_KEY | (unset) | Generative API key for the chat bridge |
/// | GEMINI_MODEL | gemini-2.0-flash | Generative model id |
/// | GEMINI_BASE_URL | https://generativelanguage.googleapis.com | Generative API endpoint |
/// | REQUEST_TIMEOUT_MS | 30000 | Outbound request timeout (milliseconds) |
///
/// ```ignore
/// DATABASE_PATH=/data/taskboard.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Generative API key; the chat bridge refuses to run without one
    pub gemini_api_key: Option<String>,
    /// Generative model id
    pub gemini_model: String,
    /// Generative API endpoint (overridable for testing)
    pub gemini_base_url: String,
    /// Outbound request timeout (milliseconds)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "taskboard.db".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".into()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override the pieces tests care about
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }
}
