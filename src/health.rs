//! Liveness status reported by the worker.
//!
//! The responder here knows nothing about HTTP. It answers "is this process able
//! to run request-handling code" and nothing more, so it can be called from a
//! route handler, a test, or anywhere else without a running server.

use serde::{Deserialize, Serialize};

/// The only status the worker ever reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
}

/// Body of a liveness response, serialized as `{"status": "ok"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: Status,
}

impl HealthStatus {
    pub const OK: Self = Self { status: Status::Ok };
}

/// Report that the process is alive.
///
/// Total and side-effect free: no I/O, no shared state.
pub const fn health_status() -> HealthStatus {
    HealthStatus::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_status_is_ok() {
        assert_eq!(health_status(), HealthStatus { status: Status::Ok });
    }

    #[test]
    fn test_health_status_serializes_to_status_ok() {
        let value = serde_json::to_value(health_status()).unwrap();
        assert_eq!(value, json!({ "status": "ok" }));
    }

    #[test]
    fn test_health_status_wire_form() {
        let body = serde_json::to_string(&health_status()).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_other_status_strings_are_rejected() {
        let parsed = serde_json::from_str::<HealthStatus>(r#"{"status":"degraded"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = health_status();
        for _ in 0..1_000 {
            assert_eq!(health_status(), first);
        }
    }

    #[test]
    fn test_concurrent_calls_are_identical() {
        let results: Vec<HealthStatus> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16)
                .map(|_| scope.spawn(|| (0..100).map(|_| health_status()).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(results.len(), 1_600);
        assert!(results.iter().all(|s| *s == HealthStatus::OK));
    }

    #[test]
    fn test_usable_in_const_context() {
        const STATUS: HealthStatus = health_status();
        assert_eq!(STATUS.status, Status::Ok);
    }
}
