// AdMapLog - ui/panels/log_panel.rs
//
// Persistent log panel: every entry the host received, newest at the bottom,
// filterable by category. Uses `ScrollArea::show_rows` so only visible rows
// are laid out.

use crate::app::state::HostState;
use crate::ui::theme;
use egui::text::{LayoutJob, TextFormat};

/// Render the log panel (central area).
pub fn render(ui: &mut egui::Ui, state: &mut HostState) {
    ui.horizontal(|ui| {
        ui.heading("Log Messages");
        ui.separator();

        let selected = state
            .category_filter
            .clone()
            .unwrap_or_else(|| "All categories".to_string());
        egui::ComboBox::from_id_salt("panel_category")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.category_filter, None, "All categories");
                for category in state.categories() {
                    let label = category.clone();
                    ui.selectable_value(&mut state.category_filter, Some(category), label);
                }
            });

        if ui.button("Clear").clicked() {
            state.clear_panel();
        }
    });
    ui.separator();

    let rows: Vec<_> = state.visible_panel().collect();
    if rows.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No messages yet.");
        });
        return;
    }

    let font = egui::FontId::monospace(12.0);
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show_rows(ui, theme::ROW_HEIGHT, rows.len(), |ui, row_range| {
            for entry in &rows[row_range] {
                let mut job = LayoutJob::default();
                job.append(
                    &format!("{} ", entry.timestamp.format("%Y-%m-%dT%H:%M:%S")),
                    0.0,
                    TextFormat {
                        font_id: font.clone(),
                        color: ui.visuals().weak_text_color(),
                        ..Default::default()
                    },
                );
                job.append(
                    &format!("{:<8} ", entry.level.label()),
                    0.0,
                    TextFormat {
                        font_id: font.clone(),
                        color: theme::level_colour(entry.level),
                        ..Default::default()
                    },
                );
                job.append(
                    &format!("[{}] {}", entry.category, entry.text),
                    0.0,
                    TextFormat {
                        font_id: font.clone(),
                        color: ui.visuals().text_color(),
                        ..Default::default()
                    },
                );
                ui.label(job);
            }
        });
}
