// AdMapLog - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::Verbosity;
use crate::util::constants;
use crate::util::error::{AdMapLogError, ConfigError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for AdMapLog configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/admaplog/ or %APPDATA%\AdMapLog\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logger]` section.
    pub logger: LoggerSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[logger]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggerSection {
    /// Reporting threshold, 0 (errors) upwards.
    pub verbosity: Option<i64>,
    /// Sink: "console" or "gui".
    pub sink: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Diagnostic log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Which sink the binary dispatches through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkKind {
    #[default]
    Console,
    Gui,
}

impl std::str::FromStr for SinkKind {
    type Err = AdMapLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" => Ok(SinkKind::Console),
            "gui" => Ok(SinkKind::Gui),
            _ => Err(AdMapLogError::InvalidSink {
                value: s.to_string(),
            }),
        }
    }
}

/// Validated configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    /// Reporting threshold for the plugin logger.
    pub verbosity: Verbosity,
    /// Sink used when the CLI does not choose one.
    pub sink: SinkKind,
    /// Diagnostic logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity(constants::DEFAULT_VERBOSITY),
            sink: SinkKind::default(),
            log_level: None,
        }
    }
}

/// Read and parse config.toml without validating values.
pub fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate raw values against named constants, accumulating all problems.
pub fn validate(raw: &RawConfig) -> (LoggerConfig, Vec<ConfigError>) {
    let mut config = LoggerConfig::default();
    let mut problems = Vec::new();

    // -- Logger: verbosity --
    if let Some(verbosity) = raw.logger.verbosity {
        match u32::try_from(verbosity) {
            Ok(v) if v <= constants::MAX_VERBOSITY => config.verbosity = Verbosity(v),
            _ => problems.push(ConfigError::ValueOutOfRange {
                field: "[logger] verbosity".to_string(),
                value: verbosity.to_string(),
                expected: format!("0-{}", constants::MAX_VERBOSITY),
            }),
        }
    }

    // -- Logger: sink --
    if let Some(ref sink) = raw.logger.sink {
        match sink.parse::<SinkKind>() {
            Ok(kind) => config.sink = kind,
            Err(_) => problems.push(ConfigError::ValueOutOfRange {
                field: "[logger] sink".to_string(),
                value: sink.clone(),
                expected: "\"console\" or \"gui\"".to_string(),
            }),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            problems.push(ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level.clone(),
                expected: "error, warn, info, debug, trace".to_string(),
            });
        }
    }

    (config, problems)
}

/// Load and validate `config.toml` at `config_path`.
///
/// Returns the validated config and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning;
/// the application still starts but the user is informed.
pub fn load_config(config_path: &Path) -> (LoggerConfig, Vec<String>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (LoggerConfig::default(), Vec::new());
    }

    let raw = match read_config(config_path) {
        Ok(raw) => raw,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            return (LoggerConfig::default(), vec![msg]);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let (config, problems) = validate(&raw);
    let warnings: Vec<String> = problems
        .iter()
        .map(|p| format!("{p}. Using default."))
        .collect();

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}
