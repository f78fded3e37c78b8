//! Tracing subscriber installation.

use crate::config::LogFormat;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter `{directive}`: {message}")]
    InvalidFilter {
        /// Directive as supplied.
        directive: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Installs a global `fmt` subscriber filtered by `filter`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for a malformed directive and
/// [`TelemetryError::AlreadyInstalled`] when another subscriber is active.
pub fn init_tracing(filter: &str, format: LogFormat) -> Result<(), TelemetryError> {
    let env_filter =
        EnvFilter::try_new(filter).map_err(|err| TelemetryError::InvalidFilter {
            directive: filter.to_owned(),
            message: err.to_string(),
        })?;
    let builder = fmt().with_env_filter(env_filter);
    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(|err| TelemetryError::AlreadyInstalled(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{TelemetryError, init_tracing};
    use crate::config::LogFormat;

    #[test]
    fn rejects_malformed_filter() {
        let result = init_tracing("tasktrack=notalevel", LogFormat::Compact);
        assert!(matches!(result, Err(TelemetryError::InvalidFilter { .. })));
    }

    #[test]
    fn second_installation_reports_an_error() {
        let first = init_tracing("info", LogFormat::Json);
        let second = init_tracing("info", LogFormat::Json);
        assert!(first.is_ok() || matches!(first, Err(TelemetryError::AlreadyInstalled(_))));
        assert!(matches!(second, Err(TelemetryError::AlreadyInstalled(_))));
    }
}
