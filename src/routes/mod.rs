pub mod health;
pub mod readings;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use std::sync::Arc;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;
use crate::config::Config;
use crate::pagination::PagedResult;
use crate::services::rate_limit::ClientIpKeyExtractor;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        readings::list_readings,
        readings::create_reading,
    ),
    components(
        schemas(
            readings::ReadingResponse,
            readings::CreateReadingRequest,
            PagedResult<readings::ReadingResponse>,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "readings", description = "Temperature readings"),
    ),
    info(
        title = "Thermostat API",
        description = "Temperature logging API with paginated readings",
        version = "0.1.0"
    )
)]
struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    // Credentials rule out wildcards, so methods and headers are explicit
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

fn with_rate_limit(routes: Router<AppState>, config: &Config) -> Router<AppState> {
    if config.disable_rate_limiting {
        tracing::warn!("Rate limiting DISABLED");
        return routes;
    }

    let limiter = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor {
            trust_proxy_headers: config.trust_proxy_headers,
        })
        .per_second(config.rate_limit_replenish_seconds)
        .burst_size(config.rate_limit_burst)
        .finish();

    match limiter {
        Some(limiter) => {
            tracing::info!(
                replenish_seconds = config.rate_limit_replenish_seconds,
                burst = config.rate_limit_burst,
                trust_proxy_headers = config.trust_proxy_headers,
                "Rate limiting configured"
            );
            routes.layer(GovernorLayer {
                config: Arc::new(limiter),
            })
        }
        None => {
            tracing::warn!(
                replenish_seconds = config.rate_limit_replenish_seconds,
                burst = config.rate_limit_burst,
                "Invalid rate limit settings, rate limiting DISABLED"
            );
            routes
        }
    }
}

/// The OpenAPI document served at `/docs`.
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    let readings_routes = Router::new().route(
        "/readings",
        get(readings::list_readings).post(readings::create_reading),
    );

    let api_routes = with_rate_limit(readings_routes, &config)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    // Health check routes (NO rate limiting)
    let health_routes = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz));

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .merge(health_routes);

    if config.docs_enabled() {
        router = router.merge(Scalar::with_url("/docs", openapi()));
    }

    router
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
