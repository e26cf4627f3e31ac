// AdMapLog - app/mod.rs
//
// Application layer: the demo host's message-bar and log-panel state, and the
// shared handle that lets a GUI sink draw on it.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod host;
pub mod state;
