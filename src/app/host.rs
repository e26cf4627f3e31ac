// AdMapLog - app/host.rs
//
// Shared handle to the demo host state. Acts as the host interface object
// and as both message surfaces, so a GUI sink built from it draws straight
// into the window the UI renders.
//
// Each surface call takes the lock once. A sink's clear-then-push is two
// calls, so another thread may interleave between them.

use crate::app::state::HostState;
use crate::core::model::{MessageStyle, PanelLevel, Verbosity};
use crate::core::surface::{HostInterface, MessageBar, MessagePanel};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to the demo host.
#[derive(Debug, Clone)]
pub struct SharedHost {
    state: Arc<Mutex<HostState>>,
}

impl SharedHost {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            state: Arc::new(Mutex::new(HostState::new(verbosity))),
        }
    }

    /// Lock the host state. A poisoned lock is recovered: the state is plain
    /// display data and stays usable after a panicking writer.
    pub fn lock(&self) -> MutexGuard<'_, HostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedHost {
    fn default() -> Self {
        Self::new(Verbosity::default())
    }
}

impl MessageBar for SharedHost {
    fn clear_widgets(&self) {
        self.lock().clear_widgets();
    }

    fn push_message(&self, title: &str, text: &str, style: MessageStyle, duration_secs: u32) {
        self.lock().push_widget(title, text, style, duration_secs);
    }
}

impl MessagePanel for SharedHost {
    fn log_message(&self, text: &str, category: &str, level: PanelLevel) {
        self.lock().append_panel(text, category, level);
    }
}

impl HostInterface for SharedHost {
    type Bar = SharedHost;
    type Panel = SharedHost;

    fn message_bar(&self) -> Self::Bar {
        self.clone()
    }

    fn message_panel(&self) -> Self::Panel {
        self.clone()
    }
}
