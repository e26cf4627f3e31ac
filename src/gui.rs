// AdMapLog - gui.rs
//
// Top-level eframe::App implementation for the demo host window.
// Wires together the message bar, composer and log panel, and drives the
// plugin logger's GUI sink against the window's own surfaces.

use crate::app::host::SharedHost;
use crate::core::console::ConsoleSink;
use crate::core::gui_sink::GuiSink;
use crate::core::logger::Logger;
use crate::core::model::{Severity, Verbosity};
use crate::ui;
use std::time::{Duration, Instant};

/// The demo host application.
pub struct AdMapHostApp {
    pub host: SharedHost,
    gui_sink: GuiSink<SharedHost, SharedHost>,
    console: ConsoleSink,
}

impl AdMapHostApp {
    /// Create the host window state. `initial` is dispatched once before the
    /// first frame.
    pub fn new(host: SharedHost, initial: Option<(Severity, String)>) -> Self {
        let verbosity = host.lock().verbosity;
        let mut app = Self {
            gui_sink: GuiSink::new(&host, verbosity),
            console: ConsoleSink::stdout(verbosity),
            host,
        };
        if let Some((severity, message)) = initial {
            app.dispatch(severity, &message, false);
        }
        app
    }

    /// Rebuild both sinks when the composer changed the verbosity.
    fn sync_verbosity(&mut self, verbosity: Verbosity) {
        if self.gui_sink.verbosity() == verbosity {
            return;
        }
        tracing::debug!(
            from = self.gui_sink.verbosity().value(),
            to = verbosity.value(),
            "Verbosity changed; rebuilding sinks"
        );
        self.gui_sink = GuiSink::new(&self.host, verbosity);
        self.console = ConsoleSink::stdout(verbosity);
    }

    fn dispatch(&self, severity: Severity, message: &str, mirror_to_console: bool) {
        tracing::debug!(%severity, len = message.len(), "Dispatching composed message");
        self.gui_sink.emit(severity, message);
        if mirror_to_console {
            self.console.emit(severity, message);
        }
    }
}

impl eframe::App for AdMapHostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Draw everything under one lock; sink calls happen after it is released.
        let (pending, verbosity, mirror, next_expiry) = {
            let mut state = self.host.lock();
            let expired = state.expire(now);
            if expired > 0 {
                tracing::trace!(expired, "Message bar widgets expired");
            }

            egui::TopBottomPanel::top("message_bar")
                .show_separator_line(false)
                .show(ctx, |ui| {
                    ui::panels::message_bar::render(ui, &mut state);
                });

            egui::SidePanel::left("composer")
                .default_width(ui::theme::COMPOSER_WIDTH)
                .resizable(true)
                .show(ctx, |ui| {
                    ui::panels::composer::render(ui, &mut state);
                });

            egui::CentralPanel::default().show(ctx, |ui| {
                ui::panels::log_panel::render(ui, &mut state);
            });

            (
                state.pending_dispatch.take(),
                state.verbosity,
                state.mirror_to_console,
                state.next_expiry(now),
            )
        };

        self.sync_verbosity(verbosity);

        if let Some((severity, message)) = pending {
            self.dispatch(severity, &message, mirror);
            ctx.request_repaint();
        } else if let Some(delay) = next_expiry {
            // Tick once a second for the countdown, and again at expiry.
            ctx.request_repaint_after(delay.min(Duration::from_secs(1)));
        }
    }
}
