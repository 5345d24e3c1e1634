// File: crates/chart-core/src/artist.rs
// Summary: Drawable primitives placed in axes data coordinates (rectangles and texts).

use skia_safe as skia;

use crate::types::{HAlign, TICK_FONT_SIZE};

/// Axis-aligned rectangle anchored at its data-space corner `(x, y)`.
/// Width and height may be negative; the drawn extent is normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: skia::Color,
    pub edge: Option<skia::Color>,
    pub line_width: f32,
    /// Legend/debug label (e.g. the hue level a bar belongs to).
    pub label: Option<String>,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: skia::Color) -> Self {
        Self { x, y, width, height, fill, edge: None, line_width: 0.0, label: None }
    }

    pub fn with_edge(mut self, color: skia::Color, line_width: f32) -> Self {
        self.edge = Some(color);
        self.line_width = line_width;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// `(x_min, y_min, x_max, y_max)` in data space.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        let (x0, x1) = (self.x.min(self.x + self.width), self.x.max(self.x + self.width));
        let (y0, y1) = (self.y.min(self.y + self.height), self.y.max(self.y + self.height));
        (x0, y0, x1, y1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: skia::Color,
    pub size: f32,
    pub align: HAlign,
}

impl Text {
    pub fn new(x: f64, y: f64, text: impl Into<String>, color: skia::Color) -> Self {
        Self { x, y, text: text.into(), color, size: TICK_FONT_SIZE, align: HAlign::Center }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Artist {
    Rectangle(Rectangle),
    Text(Text),
}

impl Artist {
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Artist::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Artist::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Rectangle> for Artist {
    fn from(r: Rectangle) -> Self { Artist::Rectangle(r) }
}

impl From<Text> for Artist {
    fn from(t: Text) -> Self { Artist::Text(t) }
}
