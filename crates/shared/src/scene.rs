//! Scene state: finished shapes plus the shape being drawn

use serde::{Deserialize, Serialize};

use crate::{Point, Shape};

/// Deep, independent copy of a [`Scene`] at one instant.
///
/// Every container in a scene is owned, so a clone shares nothing with the
/// live scene it was taken from.
pub type Snapshot = Scene;

/// Completed shapes and the in-progress shape
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "SceneParts")]
pub struct Scene {
    /// Never contains an empty shape
    finished_shapes: Vec<Shape>,
    /// Always present, possibly empty
    current_shape: Shape,
}

/// Wire form of a scene; decoded scenes go through [`Scene::from_parts`]
#[derive(Deserialize)]
struct SceneParts {
    #[serde(default)]
    finished_shapes: Vec<Shape>,
    #[serde(default)]
    current_shape: Shape,
}

impl From<SceneParts> for Scene {
    fn from(parts: SceneParts) -> Self {
        Scene::from_parts(parts.finished_shapes, parts.current_shape)
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from parts. Empty shapes in `finished` are dropped.
    pub fn from_parts(finished: Vec<Shape>, current: Shape) -> Self {
        Self {
            finished_shapes: finished.into_iter().filter(|s| !s.is_empty()).collect(),
            current_shape: current,
        }
    }

    pub fn finished_shapes(&self) -> &[Shape] {
        &self.finished_shapes
    }

    pub fn current_shape(&self) -> &Shape {
        &self.current_shape
    }

    /// True when nothing has been drawn at all
    pub fn is_empty(&self) -> bool {
        self.finished_shapes.is_empty() && self.current_shape.is_empty()
    }

    /// Number of finished shapes
    pub fn shape_count(&self) -> usize {
        self.finished_shapes.len()
    }

    /// Total vertices across finished and in-progress shapes
    pub fn vertex_count(&self) -> usize {
        self.finished_shapes.iter().map(Shape::len).sum::<usize>() + self.current_shape.len()
    }

    /// Append a vertex to the in-progress shape
    pub fn add_vertex(&mut self, p: Point) {
        self.current_shape.push(p);
    }

    /// Close the in-progress shape. No-op when it has no vertices.
    pub fn finish_shape(&mut self) {
        if self.current_shape.is_empty() {
            return;
        }
        let shape = std::mem::take(&mut self.current_shape);
        self.finished_shapes.push(shape);
    }

    /// Discard the in-progress shape
    pub fn cancel_shape(&mut self) {
        self.current_shape = Shape::new();
    }

    pub fn snapshot(&self) -> Snapshot {
        self.clone()
    }

    /// Replace the whole scene with a copy of `snapshot`
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.finished_shapes = snapshot.finished_shapes.clone();
        self.current_shape = snapshot.current_shape.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_new_scene_is_empty() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.current_shape().is_empty());
        assert_eq!(scene.shape_count(), 0);
    }

    #[test]
    fn test_add_vertex_keeps_call_order() {
        let mut scene = Scene::new();
        let points: Vec<Point> = (0..7).map(|i| pt(i as f64, (i * i) as f64)).collect();
        for p in &points {
            scene.add_vertex(*p);
        }
        assert_eq!(scene.current_shape().points(), points.as_slice());
        assert_eq!(scene.shape_count(), 0);
    }

    #[test]
    fn test_finish_moves_current_shape() {
        let mut scene = Scene::new();
        scene.add_vertex(pt(0.0, 0.0));
        scene.add_vertex(pt(10.0, 0.0));
        scene.finish_shape();

        assert_eq!(scene.finished_shapes(), &[Shape::from(vec![pt(0.0, 0.0), pt(10.0, 0.0)])]);
        assert!(scene.current_shape().is_empty());
    }

    #[test]
    fn test_finish_appends_to_end() {
        let mut scene = Scene::new();
        scene.add_vertex(pt(1.0, 1.0));
        scene.finish_shape();
        scene.add_vertex(pt(2.0, 2.0));
        scene.add_vertex(pt(3.0, 3.0));
        scene.add_vertex(pt(4.0, 4.0));
        scene.finish_shape();

        assert_eq!(scene.shape_count(), 2);
        assert_eq!(scene.finished_shapes()[1].len(), 3);
        assert_eq!(scene.finished_shapes()[1].last(), Some(pt(4.0, 4.0)));
        assert_eq!(scene.vertex_count(), 4);
    }

    #[test]
    fn test_finish_empty_is_noop() {
        let mut scene = Scene::new();
        scene.add_vertex(pt(1.0, 1.0));
        scene.finish_shape();
        let before = scene.clone();

        scene.finish_shape();
        assert_eq!(scene, before);
        assert_eq!(scene.shape_count(), 1);
    }

    #[test]
    fn test_cancel_discards_current() {
        let mut scene = Scene::new();
        scene.add_vertex(pt(1.0, 1.0));
        scene.finish_shape();
        scene.add_vertex(pt(5.0, 5.0));
        scene.add_vertex(pt(6.0, 5.0));
        scene.cancel_shape();

        assert!(scene.current_shape().is_empty());
        assert_eq!(scene.shape_count(), 1);
    }

    #[test]
    fn test_cancel_empty_is_noop() {
        let mut scene = Scene::new();
        scene.add_vertex(pt(1.0, 1.0));
        scene.finish_shape();
        let before = scene.clone();

        scene.cancel_shape();
        assert_eq!(scene, before);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut scene = Scene::new();
        scene.add_vertex(pt(0.0, 0.0));
        let snap = scene.snapshot();

        scene.add_vertex(pt(1.0, 0.0));
        scene.finish_shape();

        assert_eq!(snap.current_shape().len(), 1);
        assert_eq!(snap.shape_count(), 0);
    }

    #[test]
    fn test_restore_leaves_snapshot_reusable() {
        let mut scene = Scene::new();
        scene.add_vertex(pt(0.0, 0.0));
        scene.add_vertex(pt(3.0, 4.0));
        let snap = scene.snapshot();

        let mut other = Scene::new();
        other.restore(&snap);
        other.add_vertex(pt(9.0, 9.0));
        other.finish_shape();

        assert_eq!(snap, scene);
        other.restore(&snap);
        assert_eq!(other, scene);
    }

    #[test]
    fn test_from_parts_drops_empty_shapes() {
        let scene = Scene::from_parts(
            vec![Shape::new(), Shape::from(vec![pt(1.0, 2.0)]), Shape::new()],
            Shape::new(),
        );
        assert_eq!(scene.shape_count(), 1);
    }

    #[test]
    fn test_decode_drops_empty_finished_shapes() {
        let json = r#"{"finished_shapes": [[], [{"x": 1.0, "y": 2.0}]], "current_shape": []}"#;
        let scene: Scene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.shape_count(), 1);
        assert!(scene.finished_shapes().iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_json_round_trip_keeps_scene() {
        let scene = Scene::from_parts(
            vec![Shape::from(vec![pt(0.0, 0.0), pt(10.0, 0.0)])],
            Shape::from(vec![pt(5.0, 5.0)]),
        );
        let json = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scene);
    }
}
