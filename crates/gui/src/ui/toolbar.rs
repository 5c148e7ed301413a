//! Toolbar with the undo/redo triggers

use egui::Ui;
use shared::InputEvent;

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(state.can_undo(), egui::Button::new("⟲ Undo"))
            .on_hover_text("Undo (Ctrl+Z)")
            .clicked()
        {
            state.dispatch(InputEvent::Undo);
        }
        if ui
            .add_enabled(state.can_redo(), egui::Button::new("⟳ Redo"))
            .on_hover_text("Redo (Ctrl+Y)")
            .clicked()
        {
            state.dispatch(InputEvent::Redo);
        }

        ui.separator();

        if ui
            .add_enabled(!state.editor.scene().is_empty(), egui::Button::new("Clear"))
            .on_hover_text("Start a new drawing (clears history)")
            .clicked()
        {
            state.editor.reset();
        }

        ui.separator();
        ui.weak(hint(state));
    });
}

fn hint(state: &AppState) -> &'static str {
    if state.editor.scene().current_shape().is_empty() {
        "Click to place the first vertex"
    } else {
        "Click to add a vertex · double-click to finish · right-click to cancel"
    }
}
