// AdMapLog - core/mod.rs
//
// Core logging layer: the Logger capability, its two sinks, and the host
// surface traits the GUI sink draws on.
// Dependencies: standard library, serde (model derives), tracing.
// Must NOT depend on: ui, platform, app.

pub mod console;
pub mod gui_sink;
pub mod logger;
pub mod model;
pub mod surface;
