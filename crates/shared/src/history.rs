//! Undo/redo functionality

use crate::scene::{Scene, Snapshot};

/// Linear undo/redo history of full scene snapshots.
///
/// The undo stack holds pre-action states, so popping it always yields the
/// scene as it was just before the most recent action that has not been
/// undone yet.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Undo stack - previous states, most recent last
    undo_stack: Vec<Snapshot>,
    /// Redo stack - undone states, most recent last
    redo_stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save current state to undo stack and drop the redo branch.
    ///
    /// Call immediately before mutating `scene`.
    pub fn record_before_mutation(&mut self, scene: &Scene) {
        self.undo_stack.push(scene.snapshot());
        self.redo_stack.clear();
    }

    /// Undo last change. Returns false when there was nothing to undo.
    pub fn undo(&mut self, scene: &mut Scene) -> bool {
        let Some(prev) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(scene.snapshot());
        scene.restore(&prev);
        true
    }

    /// Redo last undone change. Returns false when there was nothing to redo.
    pub fn redo(&mut self, scene: &mut Scene) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(scene.snapshot());
        scene.restore(&next);
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
