// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small figures to PNG bytes with text disabled.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{Axis, Bounds, CenteredNorm, Colormap, Figure, Legend, Rectangle, RenderOptions, Theme};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(fig: &Figure) -> Vec<u8> {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() }; // avoid text nondeterminism across platforms
    fig.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_bar_facets() {
    let theme = Theme::light();
    let mut fig = Figure::new(600, 300);
    let mut legend = Legend::new("value");
    legend.push("0", theme.hue(0));
    legend.push("1", theme.hue(1));
    fig.set_legend(legend);

    let heights = [[2.0, 1.0, 3.0], [1.0, 3.0, 2.0]];
    for (facet, bounds) in Bounds::new(0.08, 0.1, 0.72, 0.75).columns(2, 0.04).into_iter().enumerate() {
        let ax = fig.add_axes(bounds);
        ax.y_grid = true;
        ax.x_axis = Axis::categorical("variable", &["a", "b", "c"]);
        ax.y_axis = Axis::new("total", 0.0, 3.5);
        ax.y_axis.auto_ticks(4);
        for (i, h) in heights[facet].iter().enumerate() {
            ax.add_rectangle(Rectangle::new(i as f64 - 0.4, 0.0, 0.4, *h, theme.hue(0)));
            ax.add_rectangle(Rectangle::new(i as f64, 0.0, 0.4, h * 0.5, theme.hue(1)));
        }
    }
    write_or_compare("bar_facets.png", &render_bytes(&fig));
}

#[test]
fn golden_heat_grid() {
    let n = 5;
    let mut fig = Figure::new(300, 300);
    let ax = fig.add_axes(Bounds::new(0.1, 0.1, 0.8, 0.8));
    ax.square = true;
    ax.x_axis = Axis::new("", 0.0, n as f64);
    ax.y_axis = Axis::new("", 0.0, n as f64);
    ax.y_axis.inverted = true;

    let cmap = Colormap::icefire();
    let norm = CenteredNorm::new(-0.1, 0.25, 0.0);
    for row in 1..n {
        for col in 0..row {
            let v = (row as f64 - col as f64) * 0.08 - 0.1;
            let cell = Rectangle::new(col as f64, row as f64, 1.0, 1.0, cmap.sample(norm.apply(v)))
                .with_edge(chart_core::Color::WHITE, 0.5);
            ax.add_rectangle(cell);
        }
    }
    write_or_compare("heat_grid.png", &render_bytes(&fig));
}
