//! Drawing surface panel: turns pointer input into editor events and paints
//! the editor's frame with egui.

mod painter;

use eframe::egui;
use shared::{paint, InputEvent};

use crate::state::AppState;

pub use painter::EguiSurface;

/// Central drawing surface
pub struct CanvasPanel {
    /// Pointer position of the previous frame, surface-local
    last_pointer: Option<(f64, f64)>,
}

impl CanvasPanel {
    pub fn new() -> Self {
        Self { last_pointer: None }
    }

    /// Show the surface, dispatch its input and paint the current frame
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let origin = response.rect.min;
        let to_local =
            |pos: egui::Pos2| (f64::from(pos.x - origin.x), f64::from(pos.y - origin.y));

        let pointer = response.hover_pos().map(to_local);
        if pointer != self.last_pointer {
            match pointer {
                Some((x, y)) => state.dispatch(InputEvent::PointerMove { x, y }),
                None => state.dispatch(InputEvent::PointerLeave),
            };
            self.last_pointer = pointer;
        }

        let clicks = click_events(
            response.clicked(),
            response.double_clicked(),
            response.secondary_clicked(),
            response.interact_pointer_pos().map(to_local),
        );
        for event in clicks {
            state.dispatch(event);
        }

        let frame = state.editor.render();
        let mut surface = EguiSurface::new(&painter, response.rect, &state.settings.palette);
        match paint(&mut surface, &frame) {
            Ok(()) => {}
            Err(never) => match never {},
        }

        if state.editor.preview().is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    }
}

/// Editor events for one frame of button input.
///
/// egui reports the second click of a double click as a click too; that
/// click places no vertex, the double click closes the shape instead.
fn click_events(
    clicked: bool,
    double_clicked: bool,
    secondary_clicked: bool,
    pos: Option<(f64, f64)>,
) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if double_clicked {
        events.push(InputEvent::DoubleClick);
    } else if let (true, Some((x, y))) = (clicked, pos) {
        events.push(InputEvent::PrimaryClick { x, y });
    }
    if secondary_clicked {
        events.push(InputEvent::ContextMenu);
    }
    events
}

impl Default for CanvasPanel {
    fn default() -> Self {
        Self::new()
    }
}
