//! HTTP adapters - REST API implementations.
//!
//! `api_router` mounts the user endpoints and the health check; `app_router`
//! wraps it with request ids, tracing, timeouts and CORS for the binary.

pub mod user;

pub use user::{user_routes, UserHandlers};

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Routes without middleware. Used directly by router tests.
pub fn api_router(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/users", user_routes(handlers))
}

/// Full application router with the middleware stack.
pub fn app_router(handlers: UserHandlers, server: &ServerConfig) -> Router {
    // Outermost layer is added last: the request id exists before tracing starts.
    api_router(handlers)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}
