//! Event-driven editor: owns the scene, its history and the pointer preview

use serde::{Deserialize, Serialize};

use crate::history::History;
use crate::render::{render, DrawCommand};
use crate::{Point, Scene};

/// Input understood by the editor, already translated to surface-local
/// coordinates by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer moved over the surface
    PointerMove { x: f64, y: f64 },
    /// Pointer left the surface
    PointerLeave,
    /// Primary button click: place a vertex
    PrimaryClick { x: f64, y: f64 },
    /// Close the shape in progress
    DoubleClick,
    /// Secondary button / context menu: drop the shape in progress
    ContextMenu,
    Undo,
    Redo,
}

/// Polygon editor state.
///
/// Hosts construct one per drawing surface, feed it events through
/// [`Editor::handle`] and repaint from [`Editor::render`] whenever `handle`
/// reports a change.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    scene: Scene,
    history: History,
    preview: Option<Point>,
    /// Monotonically increasing, bumped on every scene change
    version: u64,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing scene with empty history
    pub fn with_scene(scene: Scene) -> Self {
        Self {
            scene,
            ..Self::default()
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn preview(&self) -> Option<Point> {
        self.preview
    }

    /// Current scene version (increments on every scene change)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply one input event. Returns true when the surface needs a redraw.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerMove { x, y } => {
                tracing::trace!(x, y, "pointer move");
                self.set_preview(Some(Point::new(x, y)))
            }
            InputEvent::PointerLeave => self.set_preview(None),
            InputEvent::PrimaryClick { x, y } => {
                tracing::debug!(x, y, "click");
                self.add_vertex(Point::new(x, y));
                true
            }
            InputEvent::DoubleClick => self.finish_shape(),
            InputEvent::ContextMenu => self.cancel_shape(),
            InputEvent::Undo => self.undo(),
            InputEvent::Redo => self.redo(),
        }
    }

    /// Commands for the current frame
    pub fn render(&self) -> Vec<DrawCommand> {
        render(&self.scene, self.preview)
    }

    pub fn add_vertex(&mut self, p: Point) {
        self.history.record_before_mutation(&self.scene);
        self.scene.add_vertex(p);
        self.version += 1;
    }

    /// Close the current shape. Empty shapes record nothing and return false.
    pub fn finish_shape(&mut self) -> bool {
        if self.scene.current_shape().is_empty() {
            return false;
        }
        self.history.record_before_mutation(&self.scene);
        self.scene.finish_shape();
        self.version += 1;
        tracing::debug!(shapes = self.scene.shape_count(), "shape finished");
        true
    }

    /// Drop the current shape. Empty shapes record nothing and return false.
    pub fn cancel_shape(&mut self) -> bool {
        if self.scene.current_shape().is_empty() {
            return false;
        }
        self.history.record_before_mutation(&self.scene);
        self.scene.cancel_shape();
        self.version += 1;
        tracing::debug!("shape cancelled");
        true
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.scene);
        if undone {
            self.version += 1;
        }
        tracing::debug!(undone, depth = self.history.undo_depth(), "undo");
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.scene);
        if redone {
            self.version += 1;
        }
        tracing::debug!(redone, depth = self.history.redo_depth(), "redo");
        redone
    }

    /// Drop the drawing and its history
    pub fn reset(&mut self) {
        self.scene = Scene::new();
        self.history.clear();
        self.preview = None;
        self.version += 1;
    }

    fn set_preview(&mut self, preview: Option<Point>) -> bool {
        if self.preview == preview {
            return false;
        }
        self.preview = preview;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Shape, Stroke};

    fn click(e: &mut Editor, x: f64, y: f64) {
        e.handle(InputEvent::PrimaryClick { x, y });
    }

    #[test]
    fn test_click_click_double_click() {
        let mut e = Editor::new();
        click(&mut e, 0.0, 0.0);
        click(&mut e, 10.0, 0.0);
        assert!(e.handle(InputEvent::DoubleClick));

        assert_eq!(
            e.scene().finished_shapes(),
            &[Shape::from(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)])]
        );
        assert!(e.scene().current_shape().is_empty());
    }

    #[test]
    fn test_undo_after_finish_reverts_click_only() {
        let mut e = Editor::new();
        click(&mut e, 0.0, 0.0);
        click(&mut e, 10.0, 0.0);
        e.handle(InputEvent::DoubleClick);
        click(&mut e, 5.0, 5.0);

        assert!(e.handle(InputEvent::Undo));
        assert!(e.scene().current_shape().is_empty());
        assert_eq!(e.scene().shape_count(), 1);
    }

    #[test]
    fn test_noop_finish_and_cancel_record_nothing() {
        let mut e = Editor::new();
        click(&mut e, 1.0, 1.0);
        e.handle(InputEvent::Undo);
        assert!(e.history().can_redo());
        let version = e.version();

        assert!(!e.handle(InputEvent::DoubleClick));
        assert!(!e.handle(InputEvent::ContextMenu));
        assert_eq!(e.history().undo_depth(), 0);
        assert!(e.history().can_redo());
        assert_eq!(e.version(), version);
    }

    #[test]
    fn test_context_menu_cancels_and_is_undoable() {
        let mut e = Editor::new();
        click(&mut e, 1.0, 1.0);
        click(&mut e, 2.0, 2.0);
        assert!(e.handle(InputEvent::ContextMenu));
        assert!(e.scene().current_shape().is_empty());

        assert!(e.handle(InputEvent::Undo));
        assert_eq!(e.scene().current_shape().len(), 2);
    }

    #[test]
    fn test_pointer_move_never_touches_history() {
        let mut e = Editor::new();
        click(&mut e, 1.0, 1.0);
        assert!(e.handle(InputEvent::PointerMove { x: 4.0, y: 4.0 }));
        assert!(!e.handle(InputEvent::PointerMove { x: 4.0, y: 4.0 }));

        assert_eq!(e.preview(), Some(Point::new(4.0, 4.0)));
        assert_eq!(e.history().undo_depth(), 1);
        assert_eq!(e.version(), 1);

        assert!(e.handle(InputEvent::PointerLeave));
        assert_eq!(e.preview(), None);
    }

    #[test]
    fn test_render_includes_preview() {
        let mut e = Editor::new();
        click(&mut e, 1.0, 1.0);
        e.handle(InputEvent::PointerMove { x: 8.0, y: 3.0 });

        let cmds = e.render();
        assert!(matches!(
            cmds.last(),
            Some(DrawCommand::Segment {
                stroke: Stroke::Preview,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_undo_redo_report_no_redraw() {
        let mut e = Editor::new();
        assert!(!e.handle(InputEvent::Undo));
        assert!(!e.handle(InputEvent::Redo));
        assert_eq!(e.version(), 0);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut e = Editor::new();
        click(&mut e, 1.0, 1.0);
        e.reset();
        assert!(e.scene().is_empty());
        assert!(!e.history().can_undo());
    }

    #[test]
    fn test_event_serde() {
        let ev: InputEvent =
            serde_json::from_str(r#"{"event": "primary_click", "x": 3.0, "y": 4.0}"#).unwrap();
        assert_eq!(ev, InputEvent::PrimaryClick { x: 3.0, y: 4.0 });
        let ev: InputEvent = serde_json::from_str(r#"{"event": "undo"}"#).unwrap();
        assert_eq!(ev, InputEvent::Undo);
    }
}
