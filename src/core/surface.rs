// AdMapLog - core/surface.rs
//
// Host message surfaces the GUI sink draws on: a transient message bar and a
// persistent log panel, both handed over by the host at construction time.
//
// Surface methods take `&self`. Hosts hand out shared handles to GUI state
// and do their own interior locking; the sink adds none.

use crate::core::model::{MessageStyle, PanelLevel};
use std::sync::{Arc, Mutex, PoisonError};

/// Transient notification strip of the host window.
pub trait MessageBar {
    /// Remove every widget currently displayed.
    fn clear_widgets(&self);

    /// Show `text` under `title` in `style` for `duration_secs` seconds.
    fn push_message(&self, title: &str, text: &str, style: MessageStyle, duration_secs: u32);
}

/// Persistent, categorised log panel of the host window.
pub trait MessagePanel {
    /// Append `text` under `category` at `level`.
    fn log_message(&self, text: &str, category: &str, level: PanelLevel);
}

/// The host application's interface object.
///
/// Queried once when a GUI sink is built; the sink keeps the returned handles.
pub trait HostInterface {
    type Bar: MessageBar;
    type Panel: MessagePanel;

    fn message_bar(&self) -> Self::Bar;
    fn message_panel(&self) -> Self::Panel;
}

// =============================================================================
// Recording surface
// =============================================================================

/// One effect observed on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    ClearWidgets,
    PushMessage {
        title: String,
        text: String,
        style: MessageStyle,
        duration_secs: u32,
    },
    LogMessage {
        text: String,
        category: String,
        level: PanelLevel,
    },
}

/// Host stand-in that records every call in order.
///
/// Clones share one call log, so the recorder can act as host, bar and panel
/// at once and still be inspected after the sink took its handles.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Arc<Mutex<Vec<SurfaceCall>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all calls so far.
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.lock().clone()
    }

    /// Drain the call log.
    pub fn take_calls(&self) -> Vec<SurfaceCall> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SurfaceCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: SurfaceCall) {
        self.lock().push(call);
    }
}

impl MessageBar for RecordingSurface {
    fn clear_widgets(&self) {
        self.record(SurfaceCall::ClearWidgets);
    }

    fn push_message(&self, title: &str, text: &str, style: MessageStyle, duration_secs: u32) {
        self.record(SurfaceCall::PushMessage {
            title: title.to_string(),
            text: text.to_string(),
            style,
            duration_secs,
        });
    }
}

impl MessagePanel for RecordingSurface {
    fn log_message(&self, text: &str, category: &str, level: PanelLevel) {
        self.record(SurfaceCall::LogMessage {
            text: text.to_string(),
            category: category.to_string(),
            level,
        });
    }
}

impl HostInterface for RecordingSurface {
    type Bar = RecordingSurface;
    type Panel = RecordingSurface;

    fn message_bar(&self) -> Self::Bar {
        self.clone()
    }

    fn message_panel(&self) -> Self::Panel {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_call_log() {
        let host = RecordingSurface::new();
        let bar = host.message_bar();
        let panel = host.message_panel();
        bar.clear_widgets();
        panel.log_message("hello", "cat", PanelLevel::Warning);

        assert_eq!(
            host.calls(),
            vec![
                SurfaceCall::ClearWidgets,
                SurfaceCall::LogMessage {
                    text: "hello".to_string(),
                    category: "cat".to_string(),
                    level: PanelLevel::Warning,
                },
            ]
        );
    }

    #[test]
    fn test_take_calls_drains() {
        let host = RecordingSurface::new();
        host.push_message("T", "x", MessageStyle::Info, 5);
        assert_eq!(host.take_calls().len(), 1);
        assert!(host.calls().is_empty());
    }
}
