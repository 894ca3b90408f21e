//! Health check endpoint for container orchestration.
//!
//! Liveness probe that returns 200 OK with `{"status": "ok"}` whenever the
//! process can run request handlers. Used by Kubernetes, ECS, systemd, and
//! load balancers to verify the worker is alive.

use axum::Json;

use crate::health::{health_status, HealthStatus};

/// Health check handler.
///
/// Only checks that the process can respond to HTTP; there are no
/// dependencies to probe.
pub async fn health() -> Json<HealthStatus> {
    Json(health_status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_health_handler_returns_ok_status() {
        let Json(body) = health().await;
        assert_eq!(body, HealthStatus::OK);
    }

    #[tokio::test]
    async fn test_health_handler_response_is_json_200() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}
