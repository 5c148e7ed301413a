//! egui implementation of the drawing surface

use std::convert::Infallible;

use eframe::egui;
use shared::{DrawCommand, Palette, Point, Rgba, Stroke, StrokeStyle, Surface};

/// Paints draw commands into an egui painter, offset to a panel rect
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    palette: &'a Palette,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, palette: &'a Palette) -> Self {
        Self {
            painter,
            rect,
            palette,
        }
    }

    fn to_screen(&self, p: Point) -> egui::Pos2 {
        self.rect.min + egui::vec2(p.x as f32, p.y as f32)
    }

    fn style(&self, stroke: Stroke) -> &StrokeStyle {
        match stroke {
            Stroke::Finished => &self.palette.finished,
            Stroke::Preview => &self.palette.preview,
        }
    }

    fn egui_stroke(&self, stroke: Stroke) -> egui::Stroke {
        let style = self.style(stroke);
        egui::Stroke::new(style.width, color32(style.color))
    }
}

impl Surface for EguiSurface<'_> {
    type Error = Infallible;

    fn draw(&mut self, cmd: &DrawCommand) -> Result<(), Infallible> {
        match cmd {
            DrawCommand::Clear => {
                self.painter
                    .rect_filled(self.rect, 0.0, color32(self.palette.background));
            }
            DrawCommand::Dot { at, stroke } => {
                let color = color32(self.style(*stroke).color);
                self.painter
                    .circle_filled(self.to_screen(*at), self.palette.dot_radius, color);
            }
            DrawCommand::Polyline { points, stroke } => {
                let screen: Vec<egui::Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
                self.painter
                    .add(egui::Shape::line(screen, self.egui_stroke(*stroke)));
            }
            DrawCommand::Segment { from, to, stroke } => {
                self.painter.line_segment(
                    [self.to_screen(*from), self.to_screen(*to)],
                    self.egui_stroke(*stroke),
                );
            }
        }
        Ok(())
    }
}

fn color32([r, g, b, a]: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
