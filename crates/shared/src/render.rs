//! Render pass: projects a scene and the pointer preview into draw commands.
//!
//! The pass is pure. Hosts execute the resulting commands on their own
//! drawing target through the [`Surface`] trait.

use serde::{Deserialize, Serialize};

use crate::{Point, Scene, Shape};

/// Which palette entry a command is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
    Finished,
    Preview,
}

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Wipe the whole surface
    Clear,
    /// Single-point shape
    Dot { at: Point, stroke: Stroke },
    /// Open polyline through two or more points
    Polyline { points: Vec<Point>, stroke: Stroke },
    /// One straight segment
    Segment {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
}

/// A drawing target able to execute [`DrawCommand`]s
pub trait Surface {
    type Error;

    fn draw(&mut self, cmd: &DrawCommand) -> Result<(), Self::Error>;
}

/// Build the commands for one frame
pub fn render(scene: &Scene, preview: Option<Point>) -> Vec<DrawCommand> {
    let mut cmds = Vec::with_capacity(scene.shape_count() + 3);
    cmds.push(DrawCommand::Clear);

    for shape in scene.finished_shapes() {
        push_shape(&mut cmds, shape);
    }

    let current = scene.current_shape();
    push_shape(&mut cmds, current);

    if let (Some(last), Some(pointer)) = (current.last(), preview) {
        cmds.push(DrawCommand::Segment {
            from: last,
            to: pointer,
            stroke: Stroke::Preview,
        });
    }

    cmds
}

fn push_shape(cmds: &mut Vec<DrawCommand>, shape: &Shape) {
    match shape.points() {
        [] => {}
        [p] => cmds.push(DrawCommand::Dot {
            at: *p,
            stroke: Stroke::Finished,
        }),
        points => cmds.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke: Stroke::Finished,
        }),
    }
}

/// Execute a frame on `surface`, stopping at the first failing command
pub fn paint<S: Surface>(surface: &mut S, cmds: &[DrawCommand]) -> Result<(), S::Error> {
    for cmd in cmds {
        surface.draw(cmd)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_empty_scene_only_clears() {
        let cmds = render(&Scene::new(), Some(pt(3.0, 3.0)));
        assert_eq!(cmds, vec![DrawCommand::Clear]);
    }

    #[test]
    fn test_finished_shapes_in_order() {
        let scene = Scene::from_parts(
            vec![
                Shape::from(vec![pt(0.0, 0.0), pt(10.0, 0.0)]),
                Shape::from(vec![pt(5.0, 5.0)]),
            ],
            Shape::new(),
        );
        let cmds = render(&scene, None);

        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds[0], DrawCommand::Clear);
        assert_eq!(
            cmds[1],
            DrawCommand::Polyline {
                points: vec![pt(0.0, 0.0), pt(10.0, 0.0)],
                stroke: Stroke::Finished,
            }
        );
        assert_eq!(
            cmds[2],
            DrawCommand::Dot {
                at: pt(5.0, 5.0),
                stroke: Stroke::Finished,
            }
        );
    }

    #[test]
    fn test_current_shape_uses_finished_stroke() {
        let scene = Scene::from_parts(vec![], Shape::from(vec![pt(1.0, 1.0), pt(2.0, 2.0)]));
        let cmds = render(&scene, None);
        assert!(matches!(
            cmds.last(),
            Some(DrawCommand::Polyline {
                stroke: Stroke::Finished,
                ..
            })
        ));
    }

    #[test]
    fn test_preview_segment_from_last_vertex() {
        let scene = Scene::from_parts(vec![], Shape::from(vec![pt(1.0, 1.0), pt(4.0, 2.0)]));
        let cmds = render(&scene, Some(pt(9.0, 9.0)));
        assert_eq!(
            cmds.last(),
            Some(&DrawCommand::Segment {
                from: pt(4.0, 2.0),
                to: pt(9.0, 9.0),
                stroke: Stroke::Preview,
            })
        );
    }

    #[test]
    fn test_no_preview_without_current_shape() {
        let scene = Scene::from_parts(vec![Shape::from(vec![pt(1.0, 1.0)])], Shape::new());
        let cmds = render(&scene, Some(pt(9.0, 9.0)));
        assert!(cmds
            .iter()
            .all(|c| !matches!(c, DrawCommand::Segment { .. })));
    }

    #[test]
    fn test_no_preview_without_pointer() {
        let scene = Scene::from_parts(vec![], Shape::from(vec![pt(1.0, 1.0)]));
        let cmds = render(&scene, None);
        assert_eq!(cmds.len(), 2);
    }

    #[test]
    fn test_command_json_shape() {
        let json = serde_json::to_string(&DrawCommand::Dot {
            at: pt(1.0, 2.0),
            stroke: Stroke::Preview,
        })
        .unwrap();
        assert_eq!(json, r#"{"op":"dot","at":{"x":1.0,"y":2.0},"stroke":"preview"}"#);
    }

    struct Recorder {
        seen: Vec<DrawCommand>,
        fail_on: Option<usize>,
    }

    impl Surface for Recorder {
        type Error = String;

        fn draw(&mut self, cmd: &DrawCommand) -> Result<(), String> {
            if self.fail_on == Some(self.seen.len()) {
                return Err("surface lost".into());
            }
            self.seen.push(cmd.clone());
            Ok(())
        }
    }

    #[test]
    fn test_paint_stops_on_error() {
        let scene = Scene::from_parts(
            vec![Shape::from(vec![pt(0.0, 0.0)]), Shape::from(vec![pt(1.0, 1.0)])],
            Shape::new(),
        );
        let cmds = render(&scene, None);

        let mut ok = Recorder { seen: vec![], fail_on: None };
        paint(&mut ok, &cmds).unwrap();
        assert_eq!(ok.seen, cmds);

        let mut broken = Recorder { seen: vec![], fail_on: Some(1) };
        assert_eq!(paint(&mut broken, &cmds), Err("surface lost".to_string()));
        assert_eq!(broken.seen, vec![DrawCommand::Clear]);
    }
}
