//! Cross-origin policy for browser front-ends.

use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::CORS_ALLOWED_METHODS;

/// Any origin may call the API with the listed methods and headers.
pub fn cors_layer() -> CorsLayer {
    let methods: Vec<Method> = CORS_ALLOWED_METHODS
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(methods)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}
