use egui::Ui;

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    let scene = state.editor.scene();
    let history = state.editor.history();

    ui.horizontal(|ui| {
        ui.weak(format!("Shapes: {}", scene.shape_count()));
        ui.separator();
        ui.weak(format!("Drawing: {} pts", scene.current_shape().len()));
        ui.separator();
        ui.weak(format!(
            "History: {} undo / {} redo",
            history.undo_depth(),
            history.redo_depth()
        ));

        if let Some(p) = state.editor.preview() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.monospace(format!("{:>6.1}, {:>6.1}", p.x, p.y));
            });
        }
    });
}
