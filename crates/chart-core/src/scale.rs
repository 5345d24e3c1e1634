// File: crates/chart-core/src/scale.rs
// Summary: Data-to-pixel transforms for axes.

/// Linear map from a data interval onto a pixel interval.
/// `v0 -> px0`, `v1 -> px1`; either side may be decreasing, which is how
/// inverted axes (y growing downward in data space) are expressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub v0: f64,
    pub v1: f64,
    pub px0: f32,
    pub px1: f32,
}

impl LinearScale {
    pub fn new(v0: f64, v1: f64, px0: f32, px1: f32) -> Self {
        let mut s = Self { v0, v1, px0, px1 };
        if (s.v1 - s.v0).abs() < 1e-12 { s.v1 = s.v0 + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.v0) / (self.v1 - self.v0);
        self.px0 + t as f32 * (self.px1 - self.px0)
    }
}
