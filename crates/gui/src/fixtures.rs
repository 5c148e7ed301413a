//! Factory functions for creating test data.
//!
//! Provides helpers to construct `Shape`s and `Scene`s used in tests and by
//! the scripted command interface.

use shared::*;

// ── Shape factories ─────────────────────────────────────────────

/// Shape through the given points, in order.
pub fn shape(points: &[(f64, f64)]) -> Shape {
    points.iter().map(|&p| Point::from(p)).collect()
}

/// Axis-aligned square as an open polyline (4 vertices, not closed).
pub fn square(x: f64, y: f64, size: f64) -> Shape {
    shape(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
}

/// Triangle with the given corners.
pub fn triangle(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Shape {
    shape(&[a, b, c])
}

/// Single-vertex shape, rendered as a dot.
pub fn dot(x: f64, y: f64) -> Shape {
    shape(&[(x, y)])
}

// ── Scene factories ─────────────────────────────────────────────

/// Scene with finished shapes and nothing in progress.
pub fn scene_with(shapes: Vec<Shape>) -> Scene {
    Scene::from_parts(shapes, Shape::new())
}

/// Scene with a finished square and a two-vertex shape in progress.
pub fn scene_in_progress() -> Scene {
    Scene::from_parts(
        vec![square(0.0, 0.0, 10.0)],
        shape(&[(20.0, 20.0), (30.0, 20.0)]),
    )
}
