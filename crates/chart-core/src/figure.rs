// File: crates/chart-core/src/figure.rs
// Summary: Figure container (axes list + optional legend) and its rendering entry points.

use skia_safe as skia;

use crate::error::Result;
use crate::geometry::Bounds;
use crate::render::{rasterize, RenderOptions};
use crate::types::{HEIGHT, WIDTH};
use crate::Axes;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
}

/// Figure-level legend drawn to the right of the axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), entries: Vec::new() }
    }

    pub fn push(&mut self, label: impl Into<String>, color: skia::Color) {
        self.entries.push(LegendEntry { label: label.into(), color });
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub width: i32,
    pub height: i32,
    pub title: String,
    axes: Vec<Axes>,
    legend: Option<Legend>,
}

impl Figure {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, title: String::new(), axes: Vec::new(), legend: None }
    }

    /// Add an axes occupying `bounds` and return it for configuration.
    pub fn add_axes(&mut self, bounds: Bounds) -> &mut Axes {
        self.axes.push(Axes::new(bounds));
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    pub fn axes(&self) -> &[Axes] { &self.axes }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    pub fn legend(&self) -> Option<&Legend> { self.legend.as_ref() }

    /// Render the figure to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_png_path.as_ref(), &data)?;
        tracing::debug!(path = %output_png_path.as_ref().display(), bytes = data.len(), "wrote png");
        Ok(())
    }

    /// Render the figure and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = rasterize(self, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(crate::RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the figure to an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = rasterize(self, opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(crate::RenderError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

impl Default for Figure {
    fn default() -> Self { Self::new(WIDTH, HEIGHT) }
}
