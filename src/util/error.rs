// AdMapLog - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
//
// The Logger capability itself has no error channel: its severity methods
// always return `false`. These types cover everything around it (config
// loading, CLI argument validation, launching the demo host).

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all AdMapLog operations.
#[derive(Debug)]
pub enum AdMapLogError {
    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// A severity name could not be recognised.
    InvalidSeverity { value: String },

    /// A sink name could not be recognised.
    InvalidSink { value: String },

    /// The demo host window could not be started.
    Gui { reason: String },
}

impl fmt::Display for AdMapLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::InvalidSeverity { value } => write!(
                f,
                "Unknown severity '{value}'. Expected one of: error, warning, info, debug"
            ),
            Self::InvalidSink { value } => {
                write!(f, "Unknown sink '{value}'. Expected \"console\" or \"gui\"")
            }
            Self::Gui { reason } => write!(f, "Failed to start host window: {reason}"),
        }
    }
}

impl std::error::Error for AdMapLogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for AdMapLogError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for AdMapLog results.
pub type Result<T> = std::result::Result<T, AdMapLogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_is_source_of_top_level() {
        let inner = ConfigError::ValueOutOfRange {
            field: "logger.verbosity".to_string(),
            value: "99".to_string(),
            expected: "0-16".to_string(),
        };
        let err: AdMapLogError = inner.into();
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_severity_message_lists_choices() {
        let err = AdMapLogError::InvalidSeverity {
            value: "loud".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("'loud'"));
        assert!(text.contains("warning"));
        assert!(err.source().is_none());
    }
}
