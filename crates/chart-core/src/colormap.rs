// File: crates/chart-core/src/colormap.rs
// Summary: Piecewise-linear colormaps and a centered (diverging) normalization.

use skia_safe as skia;

use crate::geometry::clamp;

/// Colormap defined by sorted anchor stops in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    pub name: &'static str,
    stops: Vec<(f32, skia::Color)>,
}

impl Colormap {
    pub fn new(name: &'static str, stops: Vec<(f32, skia::Color)>) -> Self {
        Self { name, stops }
    }

    /// Diverging light-blue / black / orange map in the spirit of seaborn's "icefire".
    pub fn icefire() -> Self {
        Self::new(
            "icefire",
            vec![
                (0.0, skia::Color::from_argb(255, 0xbd, 0xe7, 0xdb)),
                (0.2, skia::Color::from_argb(255, 0x3d, 0x9a, 0xd8)),
                (0.4, skia::Color::from_argb(255, 0x33, 0x3e, 0x8e)),
                (0.5, skia::Color::from_argb(255, 0x1f, 0x1e, 0x1e)),
                (0.6, skia::Color::from_argb(255, 0x7a, 0x1f, 0x3a)),
                (0.8, skia::Color::from_argb(255, 0xe0, 0x50, 0x29)),
                (1.0, skia::Color::from_argb(255, 0xff, 0xe2, 0xb8)),
            ],
        )
    }

    pub fn sample(&self, t: f32) -> skia::Color {
        let t = if t.is_nan() { 0.0 } else { clamp(t, 0.0, 1.0) };
        let Some(first) = self.stops.first() else { return skia::Color::BLACK };
        if t <= first.0 { return first.1; }
        for w in self.stops.windows(2) {
            let (t0, c0) = w[0];
            let (t1, c1) = w[1];
            if t <= t1 {
                let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
                return lerp_color(c0, c1, f);
            }
        }
        self.stops[self.stops.len() - 1].1
    }
}

fn lerp_color(a: skia::Color, b: skia::Color, f: f32) -> skia::Color {
    let mix = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * f).round() as u8 };
    skia::Color::from_argb(mix(a.a(), b.a()), mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Maps data values to `[0, 1]` with `center` landing on 0.5.
/// Values below `vmin` or above `vmax` saturate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenteredNorm {
    pub vmin: f64,
    pub vmax: f64,
    pub center: f64,
}

impl CenteredNorm {
    pub fn new(vmin: f64, vmax: f64, center: f64) -> Self {
        Self { vmin, vmax, center }
    }

    pub fn apply(&self, v: f64) -> f32 {
        if v.is_nan() { return f32::NAN; }
        let t = if v < self.center {
            let lo = (self.center - self.vmin).max(1e-12);
            0.5 * (1.0 - (self.center - v) / lo)
        } else {
            let hi = (self.vmax - self.center).max(1e-12);
            0.5 + 0.5 * (v - self.center) / hi
        };
        clamp(t, 0.0, 1.0) as f32
    }
}

/// WCAG relative luminance of an sRGB color in `[0, 1]`.
pub fn relative_luminance(c: skia::Color) -> f32 {
    let lin = |u: u8| -> f32 {
        let v = u as f32 / 255.0;
        if v <= 0.03928 { v / 12.92 } else { ((v + 0.055) / 1.055).powf(2.4) }
    };
    0.2126 * lin(c.r()) + 0.7152 * lin(c.g()) + 0.0722 * lin(c.b())
}

/// Text color that stays readable on top of `background`.
pub fn contrasting_text(background: skia::Color) -> skia::Color {
    if relative_luminance(background) > 0.408 { skia::Color::BLACK } else { skia::Color::WHITE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_norm_places_center_midway() {
        let n = CenteredNorm::new(-0.1, 0.25, 0.0);
        assert_eq!(n.apply(0.0), 0.5);
        assert_eq!(n.apply(-0.1), 0.0);
        assert_eq!(n.apply(0.25), 1.0);
        assert_eq!(n.apply(0.9), 1.0);
        assert_eq!(n.apply(-3.0), 0.0);
    }

    #[test]
    fn sample_hits_stops() {
        let cm = Colormap::icefire();
        assert_eq!(cm.sample(0.5), skia::Color::from_argb(255, 0x1f, 0x1e, 0x1e));
        assert_eq!(cm.sample(-1.0), cm.sample(0.0));
        assert_eq!(cm.sample(2.0), cm.sample(1.0));
    }

    #[test]
    fn text_contrast() {
        assert_eq!(contrasting_text(skia::Color::WHITE), skia::Color::BLACK);
        assert_eq!(contrasting_text(skia::Color::BLACK), skia::Color::WHITE);
    }
}
