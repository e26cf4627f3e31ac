// AdMapLog - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "AdMapLog";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "AdMapLog";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Logger behaviour
// =============================================================================

/// Plugin title used as the log-panel category for every GUI-sink entry.
///
/// Kept byte-for-byte as the plugin has always published it; host-side log
/// panel tabs are keyed on this string.
pub const PLUGIN_TITLE: &str = "Intel Autonomus Driving Map";

/// Seconds a message-bar entry stays visible before the host dismisses it.
pub const MESSAGE_BAR_TIMEOUT_SECS: u32 = 5;

/// Verbosity used when none is configured: errors, warnings, infos and debug.
pub const DEFAULT_VERBOSITY: u32 = 4;

/// Largest verbosity accepted from config or the CLI. Anything above 3
/// already permits every severity; the cap only catches typos.
pub const MAX_VERBOSITY: u32 = 16;

// =============================================================================
// Demo host limits
// =============================================================================

/// Maximum number of entries kept in the host log panel. Oldest entries are
/// dropped first (bounded growing collection).
pub const MAX_PANEL_ENTRIES: usize = 5_000;

/// Maximum number of simultaneously visible message-bar widgets. The GUI
/// sink clears before every push, so more than one only appears when other
/// callers push directly.
pub const MAX_BAR_WIDGETS: usize = 8;

/// Maximum length of a message accepted by the composer text field.
pub const MAX_COMPOSER_LENGTH: usize = 4_096;

// =============================================================================
// Logging
// =============================================================================

/// Default diagnostic log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
