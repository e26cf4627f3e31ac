// AdMapLog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::error::AdMapLogError;
use serde::{Deserialize, Serialize};

// =============================================================================
// Severity
// =============================================================================

/// Severities a plugin message can carry, ordered from most to least severe.
///
/// Each severity needs a minimum [`Verbosity`] before it is emitted; the
/// requirements nest so that a logger permitting `Debug` permits everything.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Debug,
}

impl Severity {
    /// Returns all variants in display order (most severe first).
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Error,
            Severity::Warning,
            Severity::Info,
            Severity::Debug,
        ]
    }

    /// Minimum verbosity at which this severity is emitted.
    pub fn required_verbosity(&self) -> Verbosity {
        match self {
            Severity::Error => Verbosity(0),
            Severity::Warning => Verbosity(1),
            Severity::Info => Verbosity(2),
            Severity::Debug => Verbosity(3),
        }
    }

    /// Canonical five-character tag handed to sinks.
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN.",
            Severity::Info => "INFO.",
            Severity::Debug => "DEBUG",
        }
    }

    /// Inverse of [`Severity::tag`]. Exact match only; anything else is `None`.
    pub fn from_tag(tag: &str) -> Option<Severity> {
        Severity::all().iter().copied().find(|s| s.tag() == tag)
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
            Severity::Debug => "Debug",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Severity {
    type Err = AdMapLogError;

    /// Case-insensitive parse of a severity name (`warn` is accepted for
    /// `warning`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(AdMapLogError::InvalidSeverity {
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Verbosity
// =============================================================================

/// Reporting threshold of a logger.
///
/// 0: errors
/// 1: errors, warnings
/// 2: errors, warnings, infos
/// 3 and above: errors, warnings, infos, debug
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Verbosity(pub u32);

impl Verbosity {
    /// Errors only.
    pub const ERRORS: Verbosity = Verbosity(0);

    /// Most verbose level the plugin configures by default.
    pub const ALL: Verbosity = Verbosity(crate::util::constants::DEFAULT_VERBOSITY);

    /// Whether a message of `severity` passes this threshold.
    pub fn permits(&self, severity: Severity) -> bool {
        *self >= severity.required_verbosity()
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::ALL
    }
}

impl From<u32> for Verbosity {
    fn from(value: u32) -> Self {
        Verbosity(value)
    }
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Host display styles
// =============================================================================

/// Visual style of a transient message-bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageStyle {
    Critical,
    Warning,
    Info,
    Success,
}

impl MessageStyle {
    pub fn label(&self) -> &'static str {
        match self {
            MessageStyle::Critical => "Critical",
            MessageStyle::Warning => "Warning",
            MessageStyle::Info => "Info",
            MessageStyle::Success => "Success",
        }
    }
}

/// Level of a persistent log-panel entry. The host panel has no debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelLevel {
    Critical,
    Warning,
    Info,
}

impl PanelLevel {
    pub fn label(&self) -> &'static str {
        match self {
            PanelLevel::Critical => "CRITICAL",
            PanelLevel::Warning => "WARNING",
            PanelLevel::Info => "INFO",
        }
    }
}

/// Message-bar style and panel level for a sink tag.
///
/// Debug has no native host style: it shows as `Success` on the bar and is
/// demoted to `Info` in the panel. Unrecognised tags get the debug styling.
pub fn display_style(tag: &str) -> (MessageStyle, PanelLevel) {
    match Severity::from_tag(tag) {
        Some(Severity::Error) => (MessageStyle::Critical, PanelLevel::Critical),
        Some(Severity::Warning) => (MessageStyle::Warning, PanelLevel::Warning),
        Some(Severity::Info) => (MessageStyle::Info, PanelLevel::Info),
        Some(Severity::Debug) | None => (MessageStyle::Success, PanelLevel::Info),
    }
}

// =============================================================================
// Log entry
// =============================================================================

/// A tagged message on its way to a sink. Lives for one dispatch only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry<'a> {
    pub tag: &'a str,
    pub message: &'a str,
}

impl<'a> LogEntry<'a> {
    pub fn new(tag: &'a str, message: &'a str) -> Self {
        Self { tag, message }
    }

    /// The severity this entry was tagged with, if the tag is canonical.
    pub fn severity(&self) -> Option<Severity> {
        Severity::from_tag(self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_verbosity_nests() {
        let required: Vec<u32> = Severity::all()
            .iter()
            .map(|s| s.required_verbosity().value())
            .collect();
        assert_eq!(required, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_permits_matrix() {
        for threshold in 0..=3u32 {
            let verbosity = Verbosity(threshold);
            for severity in Severity::all() {
                assert_eq!(
                    verbosity.permits(*severity),
                    threshold >= severity.required_verbosity().value(),
                    "verbosity {threshold} vs {severity}"
                );
            }
        }
    }

    #[test]
    fn test_high_verbosity_behaves_like_most_verbose() {
        for severity in Severity::all() {
            assert!(Verbosity(4).permits(*severity));
            assert!(Verbosity(u32::MAX).permits(*severity));
        }
    }

    #[test]
    fn test_tags_are_canonical_and_invertible() {
        let tags: Vec<&str> = Severity::all().iter().map(|s| s.tag()).collect();
        assert_eq!(tags, vec!["ERROR", "WARN.", "INFO.", "DEBUG"]);
        for severity in Severity::all() {
            assert_eq!(Severity::from_tag(severity.tag()), Some(*severity));
        }
        assert_eq!(Severity::from_tag("WARN"), None);
        assert_eq!(Severity::from_tag("error"), None);
    }

    #[test]
    fn test_parse_severity_names() {
        assert_eq!("ERROR".parse::<Severity>().ok(), Some(Severity::Error));
        assert_eq!("warn".parse::<Severity>().ok(), Some(Severity::Warning));
        assert_eq!(" Info ".parse::<Severity>().ok(), Some(Severity::Info));
        assert_eq!("debug".parse::<Severity>().ok(), Some(Severity::Debug));
        assert!("trace".parse::<Severity>().is_err());
    }

    #[test]
    fn test_display_style_mapping() {
        assert_eq!(
            display_style("ERROR"),
            (MessageStyle::Critical, PanelLevel::Critical)
        );
        assert_eq!(
            display_style("WARN."),
            (MessageStyle::Warning, PanelLevel::Warning)
        );
        assert_eq!(display_style("INFO."), (MessageStyle::Info, PanelLevel::Info));
        assert_eq!(
            display_style("DEBUG"),
            (MessageStyle::Success, PanelLevel::Info)
        );
        assert_eq!(
            display_style("NOTICE"),
            (MessageStyle::Success, PanelLevel::Info)
        );
    }

    #[test]
    fn test_entry_severity() {
        assert_eq!(
            LogEntry::new("INFO.", "x").severity(),
            Some(Severity::Info)
        );
        assert_eq!(LogEntry::new("", "x").severity(), None);
    }
}
