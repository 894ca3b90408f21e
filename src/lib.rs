//! Chronos AI worker.
//!
//! A small HTTP service whose only route is a liveness probe:
//! `GET /health` answers `{"status": "ok"}`.

pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use config::AppConfig;
pub use error::AppError;
pub use health::{health_status, HealthStatus, Status};
pub use routes::{create_router, register_routes, RouteTable};
