// AdMapLog - core/logger.rs
//
// The Logger capability: one required sink operation (`log`) and four
// severity methods shared by every sink.
//
// Each severity method checks the logger's verbosity, forwards the message
// with the canonical tag when permitted, and returns `false` either way.
// Plugin code relies on that constant in short-circuit expressions such as
// `return logger.error("no map loaded")`, so it is not a success flag.

use crate::core::model::{LogEntry, Severity, Verbosity};
use std::sync::Arc;

/// A severity-filtered message sink.
///
/// Implementors supply [`Logger::verbosity`] and [`Logger::log`]; the
/// severity methods are provided.
pub trait Logger {
    /// Reporting threshold, fixed at construction.
    fn verbosity(&self) -> Verbosity;

    /// Write `message` tagged with `tag` to the sink.
    ///
    /// Called by the severity methods with one of the canonical tags
    /// (`"ERROR"`, `"WARN."`, `"INFO."`, `"DEBUG"`), but callers may invoke it
    /// directly with any tag. No verbosity check happens here.
    fn log(&self, tag: &str, message: &str);

    /// Forward `message` at `severity` if the verbosity permits it.
    ///
    /// Always returns `false`.
    fn emit(&self, severity: Severity, message: &str) -> bool {
        if self.verbosity().permits(severity) {
            let entry = LogEntry::new(severity.tag(), message);
            self.log(entry.tag, entry.message);
        }
        false
    }

    /// Logs an error (verbosity >= 0). Returns `false`.
    fn error(&self, message: &str) -> bool {
        self.emit(Severity::Error, message)
    }

    /// Logs a warning (verbosity >= 1). Returns `false`.
    fn warning(&self, message: &str) -> bool {
        self.emit(Severity::Warning, message)
    }

    /// Logs an info message (verbosity >= 2). Returns `false`.
    fn info(&self, message: &str) -> bool {
        self.emit(Severity::Info, message)
    }

    /// Logs a debug message (verbosity >= 3). Returns `false`.
    fn debug(&self, message: &str) -> bool {
        self.emit(Severity::Debug, message)
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn verbosity(&self) -> Verbosity {
        (**self).verbosity()
    }

    fn log(&self, tag: &str, message: &str) {
        (**self).log(tag, message)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn verbosity(&self) -> Verbosity {
        (**self).verbosity()
    }

    fn log(&self, tag: &str, message: &str) {
        (**self).log(tag, message)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn verbosity(&self) -> Verbosity {
        (**self).verbosity()
    }

    fn log(&self, tag: &str, message: &str) {
        (**self).log(tag, message)
    }
}
