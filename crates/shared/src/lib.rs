//! Core types for the polygon editor: points, shapes, the scene with its
//! undo/redo history, the render pass and the event-driven editor.
//!
//! Everything here is host independent. The desktop and browser front-ends
//! feed [`InputEvent`]s into an [`Editor`] and paint the [`DrawCommand`]s it
//! produces onto their own [`Surface`].

use serde::{Deserialize, Serialize};

mod editor;
mod history;
mod keys;
mod palette;
mod render;
mod scene;

pub use editor::{Editor, InputEvent};
pub use history::History;
pub use keys::shortcut;
pub use palette::{css_rgba, Palette, Rgba, StrokeStyle};
pub use render::{paint, render, DrawCommand, Stroke, Surface};
pub use scene::{Scene, Snapshot};

/// 2D point in surface-local coordinates (origin at the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered list of vertices forming an open polyline.
///
/// Insertion order defines edge order. The last vertex is never joined back
/// to the first one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape {
    pub points: Vec<Point>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last placed vertex
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl From<Vec<Point>> for Shape {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for Shape {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
