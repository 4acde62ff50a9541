use std::env;

// ============================================================================
// Config
// ============================================================================

/// Runtime configuration, parsed once at startup from environment variables.
///
/// Handlers never read the environment directly; they see this struct through
/// the shared application state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Free-text deployment label reported by `GET /health`.
    pub environment: String,
    /// Origins allowed by the CORS policy.
    pub cors_origins: Vec<String>,
    /// Provider credential. When absent, `POST /chat` is disabled for the
    /// lifetime of the process.
    pub openai_api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API.
    pub openai_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            cors_origins: default_cors_origins(),
            openai_api_key: None,
            openai_base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// The credential is read exactly once here; changing `OPENAI_API_KEY`
    /// after startup has no effect on a running process.
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| default_environment());

        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(raw) => parse_cors_origins(&raw),
            Err(_) => default_cors_origins(),
        };

        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        let openai_base_url = env::var("OPENAI_BASE_URL").unwrap_or_else(|_| default_base_url());

        Self {
            environment,
            cors_origins,
            openai_api_key,
            openai_base_url,
        }
    }
}

/// Split a comma-separated origin list, trimming whitespace and dropping
/// empty entries.
pub fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_environment() -> String {
    "local".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
    ]
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

// ============================================================================
// Tests
// ============================================================================
