//! Visual styles used by the render pass

use serde::{Deserialize, Serialize};

/// RGBA color, 0-255 per channel
pub type Rgba = [u8; 4];

/// Line color and width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Rgba,
    /// Line width in surface pixels
    pub width: f32,
}

impl StrokeStyle {
    /// CSS color string, e.g. `rgba(255, 80, 40, 0.706)`
    pub fn css_color(&self) -> String {
        css_rgba(self.color)
    }
}

/// Styles for finished geometry and the preview segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Finished shapes and the in-progress shape
    pub finished: StrokeStyle,
    /// Segment from the last vertex to the pointer
    pub preview: StrokeStyle,
    /// Radius of the dot drawn for single-point shapes
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f32,
    /// Surface color after a clear
    #[serde(default = "default_background")]
    pub background: Rgba,
}

fn default_dot_radius() -> f32 {
    2.5
}

fn default_background() -> Rgba {
    [255, 255, 255, 255]
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            finished: StrokeStyle {
                color: [0, 0, 0, 255],
                width: 2.0,
            },
            preview: StrokeStyle {
                color: [255, 80, 40, 180],
                width: 1.0,
            },
            dot_radius: default_dot_radius(),
            background: default_background(),
        }
    }
}

/// Format a color for a canvas `fillStyle`/`strokeStyle`
pub fn css_rgba([r, g, b, a]: Rgba) -> String {
    format!("rgba({}, {}, {}, {:.3})", r, g, b, a as f64 / 255.0)
}
