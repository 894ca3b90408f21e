//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;
use crate::error::AppError;

/// Install the global subscriber with `filter`, in text or JSON form.
///
/// A filter that does not parse is rejected before anything is installed.
pub fn init_tracing(filter: &str, format: LogFormat) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| AppError::LogFilter(e.to_string()))?;

    let (text, json) = match format {
        LogFormat::Text => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_filter_rejected() {
        let result = init_tracing("ai_worker=loudest", LogFormat::Text);
        assert!(matches!(result, Err(AppError::LogFilter(_))));
    }

    #[test]
    fn test_malformed_filter_rejected_for_json() {
        let result = init_tracing("ai_worker=loudest", LogFormat::Json);
        assert!(matches!(result, Err(AppError::LogFilter(_))));
    }
}
