//! Application menu bar and settings window

use eframe::egui;
use shared::{InputEvent, Rgba, StrokeStyle};

use crate::state::{AppSettings, AppState};

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("File", |ui| {
        if ui.button("New drawing").clicked() {
            state.editor.reset();
            tracing::info!("Started a new drawing");
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("Edit", |ui| {
        if ui
            .add_enabled(
                state.can_undo(),
                egui::Button::new("Undo").shortcut_text("Ctrl+Z"),
            )
            .clicked()
        {
            state.dispatch(InputEvent::Undo);
            ui.close_menu();
        }
        if ui
            .add_enabled(
                state.can_redo(),
                egui::Button::new("Redo").shortcut_text("Ctrl+Y"),
            )
            .clicked()
        {
            state.dispatch(InputEvent::Redo);
            ui.close_menu();
        }
        ui.separator();

        let drawing = !state.editor.scene().current_shape().is_empty();
        if ui
            .add_enabled(drawing, egui::Button::new("Finish shape").shortcut_text("Enter"))
            .clicked()
        {
            state.dispatch(InputEvent::DoubleClick);
            ui.close_menu();
        }
        if ui
            .add_enabled(drawing, egui::Button::new("Cancel shape").shortcut_text("Esc"))
            .clicked()
        {
            state.dispatch(InputEvent::ContextMenu);
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("View", |ui| {
        if ui
            .checkbox(&mut state.settings.ui.status_bar, "Status bar")
            .changed()
        {
            state.settings_dirty = true;
        }
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("Settings", |ui| {
        if ui.button("Preferences…").clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new("Preferences")
        .open(&mut open)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            let before = state.settings.clone();

            show_palette_settings(ui, &mut state.settings);
            show_ui_settings(ui, &mut state.settings);
            show_settings_buttons(ui, state);

            if state.settings != before {
                state.settings_dirty = true;
            }
        });
    // The Close button clears the flag from inside the window
    state.show_settings_window &= open;
}

fn show_palette_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Drawing");
    stroke_row(ui, "Shapes", &mut settings.palette.finished);
    stroke_row(ui, "Preview", &mut settings.palette.preview);

    ui.horizontal(|ui| {
        ui.label("Dot radius");
        ui.add(
            egui::DragValue::new(&mut settings.palette.dot_radius)
                .speed(0.1)
                .range(0.5..=12.0)
                .suffix(" px"),
        );
    });

    ui.horizontal(|ui| {
        ui.label("Background");
        color_button(ui, &mut settings.palette.background);
    });
    ui.add_space(10.0);
}

fn stroke_row(ui: &mut egui::Ui, label: &str, stroke: &mut StrokeStyle) {
    ui.horizontal(|ui| {
        ui.label(label);
        color_button(ui, &mut stroke.color);
        ui.add(
            egui::DragValue::new(&mut stroke.width)
                .speed(0.1)
                .range(0.5..=10.0)
                .suffix(" px"),
        );
    });
}

fn color_button(ui: &mut egui::Ui, rgba: &mut Rgba) {
    let [r, g, b, a] = *rgba;
    let mut color = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
    if ui.color_edit_button_srgba(&mut color).changed() {
        *rgba = color.to_srgba_unmultiplied();
    }
}

fn show_ui_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Interface");
    ui.horizontal(|ui| {
        ui.label("Font size");
        ui.add(
            egui::DragValue::new(&mut settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.checkbox(&mut settings.ui.status_bar, "Show status bar");
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Reset").clicked() {
            state.settings = AppSettings::default();
        }
        if ui.button("Close").clicked() {
            state.show_settings_window = false;
        }
    });
}
