//! Canvas 2D implementation of the drawing surface.
//!
//! This module is the only place that touches [`CanvasRenderingContext2d`].

use std::f64::consts::TAU;

use shared::{css_rgba, DrawCommand, Palette, Point, Stroke, StrokeStyle, Surface};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Executes draw commands on a canvas 2D context
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    width: f64,
    height: f64,
    palette: &'a Palette,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(
        ctx: &'a CanvasRenderingContext2d,
        canvas: &HtmlCanvasElement,
        palette: &'a Palette,
    ) -> Self {
        Self {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
            palette,
        }
    }

    fn style(&self, stroke: Stroke) -> &StrokeStyle {
        match stroke {
            Stroke::Finished => &self.palette.finished,
            Stroke::Preview => &self.palette.preview,
        }
    }

    fn stroke_path(&self, points: &[Point], stroke: Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let style = self.style(stroke);

        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.set_stroke_style_str(&style.css_color());
        self.ctx.set_line_width(f64::from(style.width));
        self.ctx.stroke();
    }
}

impl Surface for CanvasSurface<'_> {
    type Error = JsValue;

    fn draw(&mut self, cmd: &DrawCommand) -> Result<(), JsValue> {
        match cmd {
            DrawCommand::Clear => {
                self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
                self.ctx.set_fill_style_str(&css_rgba(self.palette.background));
                self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
                self.ctx.set_line_join("round");
                self.ctx.set_line_cap("round");
            }
            DrawCommand::Dot { at, stroke } => {
                self.ctx.begin_path();
                self.ctx
                    .arc(at.x, at.y, f64::from(self.palette.dot_radius), 0.0, TAU)?;
                self.ctx.set_fill_style_str(&self.style(*stroke).css_color());
                self.ctx.fill();
            }
            DrawCommand::Polyline { points, stroke } => {
                self.stroke_path(points, *stroke);
            }
            DrawCommand::Segment { from, to, stroke } => {
                self.stroke_path(&[*from, *to], *stroke);
            }
        }
        Ok(())
    }
}
