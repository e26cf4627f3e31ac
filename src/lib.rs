// AdMapLog - lib.rs
//
// Library entry point. The plugin-facing surface is `core`: the `Logger`
// capability, `ConsoleSink`, `GuiSink` and the host surface traits.
// `app`, `platform` and `ui` back the demo host binary and are exposed for
// integration testing.
//
// The eframe application (`gui`) lives with `main.rs` and is not part of the
// library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;

pub use crate::core::console::ConsoleSink;
pub use crate::core::gui_sink::GuiSink;
pub use crate::core::logger::Logger;
pub use crate::core::model::{Severity, Verbosity};
