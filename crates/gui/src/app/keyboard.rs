//! Keyboard shortcut handling

use eframe::egui;
use shared::shortcut;

use crate::state::AppState;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let events: Vec<_> = ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => shortcut(key.name(), modifiers.command, modifiers.shift),
                _ => None,
            })
            .collect()
    });

    for event in events {
        state.dispatch(event);
    }
}
