// AdMapLog - core/console.rs
//
// Console sink: one `[<thread-id>]<TAG>: <message>` line per call.
//
// The thread label is read when the line is written and is purely
// informational. The writer sits behind a mutex so `log` can take `&self`;
// that keeps each line whole but gives no ordering between threads.

use crate::core::logger::Logger;
use crate::core::model::Verbosity;
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

/// Label of the calling thread: the numeric part of its `ThreadId`.
pub fn current_thread_label() -> String {
    let id = format!("{:?}", std::thread::current().id());
    id.trim_start_matches("ThreadId(")
        .trim_end_matches(')')
        .to_string()
}

/// Logs to a text console (standard output unless another writer is given).
pub struct ConsoleSink<W: Write = Stdout> {
    verbosity: Verbosity,
    writer: Mutex<W>,
    thread_label: fn() -> String,
}

impl ConsoleSink<Stdout> {
    /// Console sink on standard output.
    pub fn stdout(verbosity: Verbosity) -> Self {
        Self::with_writer(io::stdout(), verbosity)
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Console sink writing lines to `writer`.
    pub fn with_writer(writer: W, verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            writer: Mutex::new(writer),
            thread_label: current_thread_label,
        }
    }

    /// Replace the thread identifier provider (e.g. with the host's own
    /// execution-context id).
    pub fn with_thread_label(mut self, thread_label: fn() -> String) -> Self {
        self.thread_label = thread_label;
        self
    }

    /// Consume the sink and return its writer.
    pub fn into_writer(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Render one console line (without the trailing newline).
pub fn format_line(thread: &str, tag: &str, message: &str) -> String {
    format!("[{thread}]{tag}: {message}")
}

impl<W: Write> Logger for ConsoleSink<W> {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn log(&self, tag: &str, message: &str) {
        let line = format_line(&(self.thread_label)(), tag, message);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // Same contract as printing to stdout: a console that cannot be
        // written to is fatal.
        if let Err(e) = writeln!(writer, "{line}") {
            panic!("failed printing to console: {e}");
        }
    }
}
