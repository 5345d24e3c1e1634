// File: crates/chart-core/src/axes.rs
// Summary: Axes: a plot area with two axes, a background patch and child artists.

use skia_safe as skia;

use crate::artist::{Artist, Rectangle, Text};
use crate::geometry::Bounds;
use crate::Axis;

#[derive(Clone, Debug, PartialEq)]
pub struct Axes {
    pub bounds: Bounds,
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Keep the plot area square when rendering.
    pub square: bool,
    /// Draw horizontal grid lines at the y ticks.
    pub y_grid: bool,
    /// Background rectangle covering the whole plot area (axes fraction space).
    patch: Artist,
    artists: Vec<Artist>,
}

impl Axes {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            title: String::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            square: false,
            y_grid: false,
            patch: Artist::Rectangle(Rectangle::new(0.0, 0.0, 1.0, 1.0, skia::Color::WHITE)),
            artists: Vec::new(),
        }
    }

    pub fn set_face_color(&mut self, color: skia::Color) {
        if let Artist::Rectangle(r) = &mut self.patch {
            r.fill = color;
        }
    }

    pub fn face_color(&self) -> skia::Color {
        self.patch.as_rectangle().map(|r| r.fill).unwrap_or(skia::Color::WHITE)
    }

    pub fn add_rectangle(&mut self, rect: Rectangle) {
        self.artists.push(Artist::Rectangle(rect));
    }

    pub fn add_text(&mut self, text: Text) {
        self.artists.push(Artist::Text(text));
    }

    pub fn xlabel(&self) -> &str { &self.x_axis.label }
    pub fn ylabel(&self) -> &str { &self.y_axis.label }

    pub fn xtick_labels(&self) -> Vec<&str> { self.x_axis.tick_labels() }
    pub fn ytick_labels(&self) -> Vec<&str> { self.y_axis.tick_labels() }

    /// Child artists in draw order, followed by the background patch.
    pub fn children(&self) -> impl Iterator<Item = &Artist> {
        self.artists.iter().chain(std::iter::once(&self.patch))
    }

    /// Artists added to the axes, without the background patch.
    pub fn artists(&self) -> &[Artist] { &self.artists }

    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle> {
        self.children().filter_map(Artist::as_rectangle)
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.children().filter_map(Artist::as_text)
    }

    /// Annotation strings in insertion order.
    pub fn text_strings(&self) -> Vec<&str> {
        self.texts().map(|t| t.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_include_patch_last() {
        let mut ax = Axes::new(Bounds::new(0.0, 0.0, 1.0, 1.0));
        ax.add_rectangle(Rectangle::new(0.0, 0.0, 1.0, 2.0, skia::Color::RED));
        ax.add_text(Text::new(0.5, 0.5, "0.1", skia::Color::BLACK));
        assert_eq!(ax.children().count(), 3);
        assert_eq!(ax.rectangles().count(), 2);
        assert_eq!(ax.text_strings(), vec!["0.1"]);
        assert!(matches!(ax.children().last(), Some(Artist::Rectangle(r)) if r.fill == skia::Color::WHITE));
    }
}
