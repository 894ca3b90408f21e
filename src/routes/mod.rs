//! HTTP route table.
//!
//! The worker exposes a single liveness route. Registration goes through the
//! [`RouteTable`] trait so the binding can be checked without building a real
//! router, while [`create_router`] produces the axum `Router` that is served.
//!
//! Request tracing is enabled via middleware that attaches a request ID to
//! each incoming request, allowing correlation of all logs within a request.

pub mod health;

use axum::{handler::Handler, middleware, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, HEALTH_PATH};
use crate::middleware::request_id_layer;

/// Something routes can be registered on.
///
/// Implemented for axum's `Router`; tests provide a recording table.
pub trait RouteTable: Sized {
    /// Bind `GET path` to `handler`.
    fn get<H, T>(self, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static;
}

impl RouteTable for Router {
    fn get<H, T>(self, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        self.route(path, axum::routing::get(handler))
    }
}

/// Register every route the worker serves.
pub fn register_routes<R: RouteTable>(table: R) -> R {
    table.get(HEALTH_PATH, health::health)
}

/// Creates the Axum router with all routes and middleware.
///
/// Built once at startup; the table is immutable afterwards.
pub fn create_router() -> Router {
    // Health check - never cached, always fresh for liveness probes
    let health_routes = register_routes(Router::new()).layer(
        SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ),
    );

    Router::new()
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
