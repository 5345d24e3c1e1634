// File: crates/chart-core/src/render.rs
// Summary: Headless rendering pipeline turning a Figure into a Skia CPU raster surface.

use skia_safe as skia;

use crate::artist::{Artist, Rectangle, Text};
use crate::error::{RenderError, Result};
use crate::geometry::RectI32;
use crate::scale::LinearScale;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{HAlign, LABEL_FONT_SIZE, TICK_FONT_SIZE};
use crate::{Axes, Axis, Figure};

pub struct RenderOptions {
    /// Device pixels per figure pixel.
    pub scale: f32,
    pub theme: Theme,
    /// Skip all text; keeps pixel snapshots independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0, theme: Theme::light(), draw_labels: true }
    }
}

/// Rasterize `figure` into a fresh surface.
pub fn rasterize(figure: &Figure, opts: &RenderOptions) -> Result<skia::Surface> {
    if figure.axes().is_empty() {
        return Err(RenderError::EmptyFigure);
    }
    let scale = opts.scale.max(0.1);
    let width = (figure.width as f32 * scale).round() as i32;
    let height = (figure.height as f32 * scale).round() as i32;
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or(RenderError::Surface { width, height })?;

    {
        let canvas = surface.canvas();
        canvas.scale((scale, scale));
        canvas.clear(opts.theme.background);

        let shaper = opts.draw_labels.then(TextShaper::new);
        for axes in figure.axes() {
            draw_axes(canvas, figure, axes, &opts.theme, shaper.as_ref());
        }
        if let (Some(legend), Some(shaper)) = (figure.legend(), shaper.as_ref()) {
            draw_legend(canvas, figure, legend, &opts.theme, shaper);
        }
        if let (false, Some(shaper)) = (figure.title.is_empty(), shaper.as_ref()) {
            shaper.draw(
                canvas,
                &figure.title,
                figure.width as f32 * 0.5,
                LABEL_FONT_SIZE * 1.8,
                LABEL_FONT_SIZE * 1.2,
                opts.theme.axis_label,
                HAlign::Center,
                false,
            );
        }
    }
    tracing::trace!(width, height, axes = figure.axes().len(), "rasterized figure");
    Ok(surface)
}

// ---- helpers ----------------------------------------------------------------

struct PlotArea {
    rect: RectI32,
    sx: LinearScale,
    sy: LinearScale,
}

fn plot_area(figure: &Figure, axes: &Axes) -> PlotArea {
    let mut rect = axes.bounds.to_pixels(figure.width, figure.height);
    if axes.square {
        rect = rect.centered_square();
    }
    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
    let x = &axes.x_axis;
    let y = &axes.y_axis;
    let sx = if x.inverted { LinearScale::new(x.min, x.max, r, l) } else { LinearScale::new(x.min, x.max, l, r) };
    let sy = if y.inverted { LinearScale::new(y.min, y.max, t, b) } else { LinearScale::new(y.min, y.max, b, t) };
    PlotArea { rect, sx, sy }
}

fn draw_axes(canvas: &skia::Canvas, figure: &Figure, axes: &Axes, theme: &Theme, shaper: Option<&TextShaper>) {
    let area = plot_area(figure, axes);
    let rect = area.rect;
    let plot = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);

    let mut face = skia::Paint::default();
    face.set_style(skia::paint::Style::Fill);
    face.set_color(axes.face_color());
    canvas.draw_rect(plot, &face);

    if axes.y_grid {
        draw_y_grid(canvas, &area, &axes.y_axis, theme);
    }

    canvas.save();
    canvas.clip_rect(plot, skia::ClipOp::Intersect, true);
    for artist in axes.artists() {
        match artist {
            Artist::Rectangle(r) => draw_rectangle(canvas, &area, r),
            Artist::Text(t) => {
                if let Some(shaper) = shaper {
                    draw_text(canvas, &area, t, shaper);
                }
            }
        }
    }
    canvas.restore();

    draw_spines(canvas, &area, axes, theme);
    if let Some(shaper) = shaper {
        draw_ticks_and_labels(canvas, &area, axes, theme, shaper);
    }
}

fn draw_y_grid(canvas: &skia::Canvas, area: &PlotArea, y: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    let (l, r) = (area.rect.left as f32, area.rect.right as f32);
    for tick in &y.ticks {
        let py = area.sy.to_px(tick.position);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_rectangle(canvas: &skia::Canvas, area: &PlotArea, r: &Rectangle) {
    let (x0, y0, x1, y1) = r.extent();
    let (px0, px1) = (area.sx.to_px(x0), area.sx.to_px(x1));
    let (py0, py1) = (area.sy.to_px(y0), area.sy.to_px(y1));
    let rect = skia::Rect::from_ltrb(px0.min(px1), py0.min(py1), px0.max(px1), py0.max(py1));

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(r.fill);
    canvas.draw_rect(rect, &fill);

    if let Some(edge) = r.edge {
        if r.line_width > 0.0 {
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(r.line_width);
            stroke.set_color(edge);
            canvas.draw_rect(rect, &stroke);
        }
    }
}

fn draw_text(canvas: &skia::Canvas, area: &PlotArea, t: &Text, shaper: &TextShaper) {
    let x = area.sx.to_px(t.x);
    let y = area.sy.to_px(t.y) + t.size * 0.35;
    shaper.draw(canvas, &t.text, x, y, t.size, t.color, t.align, true);
}

fn draw_spines(canvas: &skia::Canvas, area: &PlotArea, axes: &Axes, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.spine);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.25);
    let r = area.rect;
    let (l, t, rr, b) = (r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
    if axes.x_axis.visible {
        canvas.draw_line((l, b), (rr, b), &paint);
    }
    if axes.y_axis.visible {
        canvas.draw_line((l, t), (l, b), &paint);
    }
}

fn draw_ticks_and_labels(canvas: &skia::Canvas, area: &PlotArea, axes: &Axes, theme: &Theme, shaper: &TextShaper) {
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let r = area.rect;
    let (l, t, rr, b) = (r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
    let tick_len = 4.0f32;

    if axes.x_axis.visible {
        for tick in &axes.x_axis.ticks {
            let px = area.sx.to_px(tick.position);
            canvas.draw_line((px, b), (px, b + tick_len), &tick_paint);
            shaper.draw(canvas, &tick.label, px, b + tick_len + TICK_FONT_SIZE + 2.0, TICK_FONT_SIZE, theme.tick, HAlign::Center, false);
        }
        let x_label_offset = tick_len + TICK_FONT_SIZE * 2.0 + 8.0;
        if !axes.x_axis.label.is_empty() {
            shaper.draw(canvas, &axes.x_axis.label, (l + rr) * 0.5, b + x_label_offset + LABEL_FONT_SIZE, LABEL_FONT_SIZE, theme.axis_label, HAlign::Center, false);
        }
    }

    if axes.y_axis.visible {
        let mut widest = 0.0f32;
        for tick in &axes.y_axis.ticks {
            let py = area.sy.to_px(tick.position);
            canvas.draw_line((l - tick_len, py), (l, py), &tick_paint);
            shaper.draw(canvas, &tick.label, l - tick_len - 3.0, py + TICK_FONT_SIZE * 0.35, TICK_FONT_SIZE, theme.tick, HAlign::Right, false);
            widest = widest.max(shaper.measure_width(&tick.label, TICK_FONT_SIZE, false));
        }
        if !axes.y_axis.label.is_empty() {
            let x = l - tick_len - widest - LABEL_FONT_SIZE - 4.0;
            shaper.draw_vertical(canvas, &axes.y_axis.label, x, (t + b) * 0.5, LABEL_FONT_SIZE, theme.axis_label);
        }
    }

    if !axes.title.is_empty() {
        shaper.draw(canvas, &axes.title, (l + rr) * 0.5, t - 8.0, LABEL_FONT_SIZE, theme.axis_label, HAlign::Center, false);
    }
}

fn draw_legend(canvas: &skia::Canvas, figure: &Figure, legend: &crate::Legend, theme: &Theme, shaper: &TextShaper) {
    let right_edge = figure
        .axes()
        .iter()
        .map(|a| plot_area(figure, a).rect.right)
        .max()
        .unwrap_or(figure.width);
    let x = right_edge as f32 + 16.0;
    let mut y = figure.height as f32 * 0.5 - (legend.entries.len() as f32 + 1.0) * LABEL_FONT_SIZE;

    if !legend.title.is_empty() {
        shaper.draw(canvas, &legend.title, x, y, LABEL_FONT_SIZE, theme.axis_label, HAlign::Left, false);
        y += LABEL_FONT_SIZE * 1.6;
    }
    let mut swatch = skia::Paint::default();
    swatch.set_style(skia::paint::Style::Fill);
    for entry in &legend.entries {
        swatch.set_color(entry.color);
        let sq = skia::Rect::from_xywh(x, y - TICK_FONT_SIZE, TICK_FONT_SIZE, TICK_FONT_SIZE);
        canvas.draw_rect(sq, &swatch);
        shaper.draw(canvas, &entry.label, x + TICK_FONT_SIZE + 6.0, y, TICK_FONT_SIZE, theme.tick, HAlign::Left, false);
        y += LABEL_FONT_SIZE * 1.5;
    }
}
