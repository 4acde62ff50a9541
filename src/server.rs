use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::handlers;
use crate::llm::{LLMProvider, OpenAIProvider};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Present only when a credential was configured at startup. Handlers
    /// never observe a half-constructed provider; it is built before the
    /// server accepts connections.
    pub provider: Option<Arc<dyn LLMProvider>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let provider = config.openai_api_key.as_ref().map(|key| {
            info!(base_url = %config.openai_base_url, "configured OpenAI provider");
            Arc::new(OpenAIProvider::new(
                config.openai_base_url.clone(),
                key.clone(),
            )) as Arc<dyn LLMProvider>
        });

        if provider.is_none() {
            warn!("OPENAI_API_KEY not set; /chat will return 503");
        }

        Self {
            config: Arc::new(config),
            provider,
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/test", get(handlers::test))
        .route("/chat", post(handlers::chat))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS policy: configured origins only, all methods and headers mirrored,
/// credentials allowed. A wildcard is not usable with credentials, so the
/// request's own method and header lists are echoed back.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
