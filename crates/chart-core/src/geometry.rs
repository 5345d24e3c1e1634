// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and figure-relative placement.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Largest square with the same center that fits inside this rect.
    pub fn centered_square(&self) -> Self {
        let side = self.width().min(self.height());
        let left = self.left + (self.width() - side) / 2;
        let top = self.top + (self.height() - side) / 2;
        Self::from_ltwh(left, top, side, side)
    }
}

/// Placement of an axes inside its figure, as fractions of the figure size.
/// `left`/`top` are measured from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Bounds covering the figure minus pixel insets.
    pub fn inset(fig_w: i32, fig_h: i32, insets: &Insets) -> Self {
        let w = fig_w.max(1) as f32;
        let h = fig_h.max(1) as f32;
        Self {
            left: insets.left as f32 / w,
            top: insets.top as f32 / h,
            width: (1.0 - insets.hsum() as f32 / w).max(0.0),
            height: (1.0 - insets.vsum() as f32 / h).max(0.0),
        }
    }

    /// Split horizontally into `n` equal columns separated by `gap` (fraction of figure width).
    pub fn columns(&self, n: usize, gap: f32) -> Vec<Bounds> {
        if n == 0 { return Vec::new(); }
        let total_gap = gap * (n as f32 - 1.0);
        let col_w = ((self.width - total_gap) / n as f32).max(0.0);
        (0..n)
            .map(|i| Bounds::new(self.left + i as f32 * (col_w + gap), self.top, col_w, self.height))
            .collect()
    }

    pub fn to_pixels(&self, fig_w: i32, fig_h: i32) -> RectI32 {
        let l = (self.left * fig_w as f32).round() as i32;
        let t = (self.top * fig_h as f32).round() as i32;
        let w = (self.width * fig_w as f32).round() as i32;
        let h = (self.height * fig_h as f32).round() as i32;
        RectI32::from_ltwh(l, t, w, h)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_split_evenly() {
        let b = Bounds::new(0.1, 0.1, 0.8, 0.8);
        let cols = b.columns(2, 0.1);
        assert_eq!(cols.len(), 2);
        assert!((cols[0].width - 0.35).abs() < 1e-6);
        assert!((cols[1].left - 0.55).abs() < 1e-6);
    }

    #[test]
    fn centered_square_fits() {
        let r = RectI32::from_ltwh(0, 0, 200, 100).centered_square();
        assert_eq!(r, RectI32::from_ltwh(50, 0, 100, 100));
    }
}
