// AdMapLog - ui/panels/mod.rs

pub mod composer;
pub mod log_panel;
pub mod message_bar;
