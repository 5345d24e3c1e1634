use anyhow::Result;
use chart_core::{Bounds, Colormap, Figure, Rectangle, RenderOptions, Text};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

// n x n annotated grid, the shape of a correlation heat map
fn build_grid(n: usize) -> Figure {
    let mut fig = Figure::new(1000, 1000);
    let ax = fig.add_axes(Bounds::new(0.1, 0.05, 0.8, 0.85));
    ax.square = true;
    ax.x_axis = chart_core::Axis::new("", 0.0, n as f64);
    ax.y_axis = chart_core::Axis::new("", 0.0, n as f64);
    ax.y_axis.inverted = true;
    let cmap = Colormap::icefire();
    for row in 0..n {
        for col in 0..row {
            let t = (row * n + col) as f32 / (n * n) as f32;
            ax.add_rectangle(Rectangle::new(col as f64, row as f64, 1.0, 1.0, cmap.sample(t)));
            ax.add_text(Text::new(col as f64 + 0.5, row as f64 + 0.5, format!("{t:.1}"), chart_core::Color::BLACK));
        }
    }
    fig
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[14usize, 40usize] {
        group.bench_function(format!("grid_{n}"), |b| {
            let fig = build_grid(n);
            let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = fig.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
