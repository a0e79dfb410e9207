//! HTTP REST adapter
//!
//! Depends only on core/. Exposes prime generation over a single
//! `GET /primes` endpoint via the Axum web framework.

pub mod handlers;
pub mod middleware;
mod response;

pub use handlers::*;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;

/// Build the API router with shared services
///
/// Unrouted paths and methods answer with the same JSON envelope as
/// `/primes`.
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route(
            "/primes",
            get(primes_handler).fallback(method_not_allowed_handler),
        )
        .fallback(not_found_handler)
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
