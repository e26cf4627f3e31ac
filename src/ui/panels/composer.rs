// AdMapLog - ui/panels/composer.rs
//
// Side panel for sending test messages through the plugin logger.
// Sets `state.pending_dispatch`; the app performs the dispatch after the
// frame so the sink can take the host lock itself.

use crate::app::state::HostState;
use crate::core::model::{Severity, Verbosity};
use crate::util::constants;

/// Render the composer controls.
pub fn render(ui: &mut egui::Ui, state: &mut HostState) {
    ui.heading("Send Message");
    ui.separator();

    ui.label("Severity:");
    ui.horizontal_wrapped(|ui| {
        for severity in Severity::all() {
            ui.radio_value(&mut state.draft_severity, *severity, severity.label());
        }
    });

    ui.add_space(6.0);
    ui.label("Verbosity:");
    let mut level = state.verbosity.value();
    let response = ui.add(egui::Slider::new(&mut level, 0..=constants::DEFAULT_VERBOSITY));
    if response.changed() {
        state.verbosity = Verbosity(level);
    }
    let permitted: Vec<&str> = Severity::all()
        .iter()
        .filter(|s| state.verbosity.permits(**s))
        .map(|s| s.label())
        .collect();
    ui.label(egui::RichText::new(format!("Reports: {}", permitted.join(", "))).weak());

    ui.add_space(6.0);
    ui.checkbox(&mut state.mirror_to_console, "Also print to console");

    ui.add_space(6.0);
    ui.label("Message:");
    let edit = ui.add(
        egui::TextEdit::multiline(&mut state.draft)
            .char_limit(constants::MAX_COMPOSER_LENGTH)
            .desired_rows(3)
            .hint_text("Type a message, Ctrl+Enter to send"),
    );
    let ctrl_enter =
        edit.has_focus() && ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));

    let send = ui
        .add_enabled(!state.draft.trim().is_empty(), egui::Button::new("Send"))
        .clicked();

    if send || ctrl_enter {
        state.submit_draft();
    }

    if !state.verbosity.permits(state.draft_severity) {
        ui.label(
            egui::RichText::new(format!(
                "{} messages are filtered at verbosity {}.",
                state.draft_severity, state.verbosity
            ))
            .small()
            .weak(),
        );
    }
}
