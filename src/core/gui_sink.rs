// AdMapLog - core/gui_sink.rs
//
// GUI sink: every dispatched message replaces the host message-bar content
// and is appended to the host log panel under the plugin title.
//
// Style mapping (bar / panel):
//   ERROR -> Critical / Critical
//   WARN. -> Warning  / Warning
//   INFO. -> Info     / Info
//   DEBUG -> Success  / Info
//   other -> Success  / Info
//
// clear-then-push is two separate host calls. Concurrent callers can clear
// each other's widgets; serialise at the call site if that matters.

use crate::core::logger::Logger;
use crate::core::model::{display_style, Verbosity};
use crate::core::surface::{HostInterface, MessageBar, MessagePanel};
use crate::util::constants;

/// Logs to the host GUI's message bar and log panel.
pub struct GuiSink<B: MessageBar, P: MessagePanel> {
    verbosity: Verbosity,
    message_bar: B,
    message_panel: P,
    title: &'static str,
}

impl<B: MessageBar, P: MessagePanel> GuiSink<B, P> {
    /// Build a sink on the surfaces provided by `host`.
    ///
    /// The host is only queried here; it is not retained.
    pub fn new<H>(host: &H, verbosity: Verbosity) -> Self
    where
        H: HostInterface<Bar = B, Panel = P>,
    {
        tracing::debug!(verbosity = verbosity.value(), "GUI sink attached to host surfaces");
        Self {
            verbosity,
            message_bar: host.message_bar(),
            message_panel: host.message_panel(),
            title: constants::PLUGIN_TITLE,
        }
    }

    /// Build a sink reporting every severity.
    pub fn with_default_verbosity<H>(host: &H) -> Self
    where
        H: HostInterface<Bar = B, Panel = P>,
    {
        Self::new(host, Verbosity::default())
    }

    /// Log-panel category used for every entry.
    pub fn title(&self) -> &str {
        self.title
    }
}

impl<B: MessageBar, P: MessagePanel> Logger for GuiSink<B, P> {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn log(&self, tag: &str, message: &str) {
        let (style, level) = display_style(tag);
        tracing::trace!(tag, ?style, ?level, "GUI sink dispatch");
        self.message_bar.clear_widgets();
        self.message_bar
            .push_message(tag, message, style, constants::MESSAGE_BAR_TIMEOUT_SECS);
        self.message_panel.log_message(message, self.title, level);
    }
}
