use crate::config::ConfigError;
use crate::http::ServerError;

/// Errors that stop the worker during startup or while serving.
///
/// The liveness responder itself cannot fail; everything here comes from
/// configuration or the listener.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("Invalid log filter: {0}")]
    LogFilter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display_is_transparent() {
        let err: AppError = ConfigError::Validation("bad port".to_string()).into();
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }

    #[test]
    fn test_server_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: AppError = ServerError::Bind(io).into();
        assert!(matches!(err, AppError::Server(_)));
        assert_eq!(err.to_string(), "Failed to bind server: address in use");
    }
}
