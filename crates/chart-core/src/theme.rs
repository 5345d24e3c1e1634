// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for figure rendering colors and categorical palettes.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axes_face: skia::Color,
    pub grid: skia::Color,
    pub spine: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    /// Cell borders in heat maps and bar outlines.
    pub separator: skia::Color,
    /// Categorical colors assigned to hue levels in order.
    pub palette: [skia::Color; 6],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axes_face: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            spine: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            separator: skia::Color::from_argb(255, 255, 255, 255),
            // seaborn "deep"
            palette: [
                skia::Color::from_argb(255, 0x4c, 0x72, 0xb0),
                skia::Color::from_argb(255, 0xdd, 0x84, 0x52),
                skia::Color::from_argb(255, 0x55, 0xa8, 0x68),
                skia::Color::from_argb(255, 0xc4, 0x4e, 0x52),
                skia::Color::from_argb(255, 0x81, 0x72, 0xb3),
                skia::Color::from_argb(255, 0x93, 0x78, 0x60),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axes_face: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            spine: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            separator: skia::Color::from_argb(255, 18, 18, 20),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 150, 70),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 170, 140, 230),
                skia::Color::from_argb(255, 200, 170, 130),
            ],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            axes_face: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            spine: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            separator: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            palette: [
                skia::Color::from_argb(255, 0x00, 0xff, 0xff),
                skia::Color::from_argb(255, 0xff, 0xff, 0x00),
                skia::Color::from_argb(255, 0x00, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0x00, 0x00),
                skia::Color::from_argb(255, 0xff, 0x00, 0xff),
                skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            ],
        }
    }

    /// Palette color for hue level `i`, cycling when there are more levels than colors.
    pub fn hue(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
