//! Headless test harness for programmatic drawing.
//!
//! Drives an [`Editor`] the way the window does, but without a display, and
//! keeps the last painted frame around for inspection.

use std::convert::Infallible;

use shared::{paint, DrawCommand, Editor, InputEvent, Point, Scene, Shape, Stroke, Surface};

/// Surface that remembers every command it was asked to draw
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn draw(&mut self, cmd: &DrawCommand) -> Result<(), Infallible> {
        if matches!(cmd, DrawCommand::Clear) {
            self.commands.clear();
        }
        self.commands.push(cmd.clone());
        Ok(())
    }
}

/// Headless test harness: owns an editor and a recording surface
pub struct TestHarness {
    pub editor: Editor,
    surface: RecordingSurface,
    redraws: usize,
}

impl TestHarness {
    /// Create a new empty harness.
    pub fn new() -> Self {
        Self {
            editor: Editor::new(),
            surface: RecordingSurface::default(),
            redraws: 0,
        }
    }

    /// Start from a prepared scene (history starts empty)
    pub fn with_scene(scene: Scene) -> Self {
        Self {
            editor: Editor::with_scene(scene),
            ..Self::new()
        }
    }

    // ── Input ─────────────────────────────────────────────────

    /// Send an event and repaint if the editor asks for it
    pub fn send(&mut self, event: InputEvent) -> bool {
        let changed = self.editor.handle(event);
        if changed {
            self.render();
        }
        changed
    }

    pub fn click(&mut self, x: f64, y: f64) {
        self.send(InputEvent::PrimaryClick { x, y });
    }

    pub fn double_click(&mut self) -> bool {
        self.send(InputEvent::DoubleClick)
    }

    pub fn cancel(&mut self) -> bool {
        self.send(InputEvent::ContextMenu)
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> bool {
        self.send(InputEvent::PointerMove { x, y })
    }

    pub fn leave(&mut self) -> bool {
        self.send(InputEvent::PointerLeave)
    }

    /// Click every point, then close the shape
    pub fn draw_shape(&mut self, points: &[(f64, f64)]) {
        for &(x, y) in points {
            self.click(x, y);
        }
        self.double_click();
    }

    /// Undo the last operation
    pub fn undo(&mut self) -> bool {
        self.send(InputEvent::Undo)
    }

    /// Redo the last undone operation
    pub fn redo(&mut self) -> bool {
        self.send(InputEvent::Redo)
    }

    /// Clear the drawing and its history
    pub fn clear(&mut self) {
        self.editor.reset();
        self.render();
    }

    // ── Rendering + inspection ────────────────────────────────

    /// Paint the current state onto the recording surface
    pub fn render(&mut self) {
        let frame = self.editor.render();
        match paint(&mut self.surface, &frame) {
            Ok(()) => {}
            Err(never) => match never {},
        }
        self.redraws += 1;
    }

    /// Commands of the last painted frame
    pub fn frame(&self) -> &[DrawCommand] {
        &self.surface.commands
    }

    /// How many frames have been painted
    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// The preview segment of the last frame, if one was drawn
    pub fn preview_segment(&self) -> Option<(Point, Point)> {
        self.frame().iter().find_map(|cmd| match cmd {
            DrawCommand::Segment {
                from,
                to,
                stroke: Stroke::Preview,
            } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn scene(&self) -> &Scene {
        self.editor.scene()
    }

    /// Number of finished shapes
    pub fn shape_count(&self) -> usize {
        self.scene().shape_count()
    }

    pub fn finished_shapes(&self) -> &[Shape] {
        self.scene().finished_shapes()
    }

    pub fn current_points(&self) -> &[Point] {
        self.scene().current_shape().points()
    }

    pub fn undo_depth(&self) -> usize {
        self.editor.history().undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.editor.history().redo_depth()
    }

    /// Export the current scene as JSON
    pub fn export_scene_json(&self) -> String {
        serde_json::to_string_pretty(self.scene()).unwrap_or_default()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_empty() {
        let h = TestHarness::new();
        assert_eq!(h.shape_count(), 0);
        assert!(h.frame().is_empty());
    }

    #[test]
    fn test_draw_shape() {
        let mut h = TestHarness::new();
        h.draw_shape(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert_eq!(h.shape_count(), 1);
        assert_eq!(h.finished_shapes()[0].len(), 3);
        assert!(h.current_points().is_empty());
    }

    #[test]
    fn test_every_change_repaints() {
        let mut h = TestHarness::new();
        h.click(1.0, 1.0);
        h.move_to(2.0, 2.0);
        h.undo();
        assert_eq!(h.redraw_count(), 3);

        // Nothing to finish: no repaint
        h.double_click();
        assert_eq!(h.redraw_count(), 3);
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let mut h = TestHarness::new();
        h.click(1.0, 1.0);
        h.click(2.0, 1.0);
        assert_eq!(h.frame()[0], DrawCommand::Clear);
        assert_eq!(h.frame().len(), 2);
    }

    #[test]
    fn test_preview_segment() {
        let mut h = TestHarness::new();
        h.move_to(5.0, 5.0);
        assert_eq!(h.preview_segment(), None);

        h.click(1.0, 1.0);
        h.move_to(5.0, 5.0);
        assert_eq!(
            h.preview_segment(),
            Some((Point::new(1.0, 1.0), Point::new(5.0, 5.0)))
        );

        h.leave();
        assert_eq!(h.preview_segment(), None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut h = TestHarness::new();
        h.draw_shape(&[(0.0, 0.0), (1.0, 1.0)]);
        h.clear();
        assert_eq!(h.shape_count(), 0);
        assert_eq!(h.undo_depth(), 0);
        assert_eq!(h.frame(), &[DrawCommand::Clear]);
    }

    #[test]
    fn test_export_json() {
        let mut h = TestHarness::new();
        h.draw_shape(&[(0.0, 0.0), (10.0, 0.0)]);
        let json = h.export_scene_json();
        assert!(json.contains("finished_shapes"));
        assert!(json.contains("current_shape"));
    }
}
