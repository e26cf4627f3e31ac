// AdMapLog - ui/panels/message_bar.rs
//
// Transient message strip across the top of the host window. One coloured
// frame per live widget; a close button dismisses it early.

use crate::app::state::HostState;
use crate::ui::theme;
use std::time::Instant;

/// Render the message bar. Draws nothing when no widget is live.
pub fn render(ui: &mut egui::Ui, state: &mut HostState) {
    let now = Instant::now();
    let mut dismiss: Option<usize> = None;

    for (idx, widget) in state.widgets.iter().enumerate() {
        let remaining = widget
            .timeout
            .saturating_sub(now.saturating_duration_since(widget.pushed_at));

        egui::Frame::new()
            .fill(theme::style_bg_colour(widget.style))
            .corner_radius(theme::BAR_ROUNDING)
            .inner_margin(egui::Margin::symmetric(8, 4))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&widget.title)
                            .strong()
                            .monospace()
                            .color(theme::BAR_TEXT),
                    );
                    ui.label(egui::RichText::new(&widget.text).color(theme::BAR_TEXT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("\u{2715}").clicked() {
                            dismiss = Some(idx);
                        }
                        ui.label(
                            egui::RichText::new(format!("{}s", remaining.as_secs() + 1))
                                .small()
                                .color(theme::BAR_TEXT),
                        );
                    });
                });
            });
    }

    if let Some(idx) = dismiss {
        state.widgets.remove(idx);
    }
}
