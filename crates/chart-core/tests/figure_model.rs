// File: crates/chart-core/tests/figure_model.rs
// Purpose: Introspection of figures without rendering.

use chart_core::{Artist, Axis, Bounds, Color, Figure, Legend, Rectangle, ScaleKind, Text};

#[test]
fn categorical_axis_places_ticks_on_integers() {
    let axis = Axis::categorical("variable", &["active", "alco", "smoke"]);
    assert_eq!(axis.kind, ScaleKind::Categorical);
    assert_eq!(axis.tick_labels(), vec!["active", "alco", "smoke"]);
    let positions: Vec<f64> = axis.ticks.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![0.0, 1.0, 2.0]);
    assert_eq!((axis.min, axis.max), (-0.5, 2.5));
}

#[test]
fn axes_keep_insertion_order() {
    let mut fig = Figure::default();
    let ax = fig.add_axes(Bounds::new(0.1, 0.1, 0.8, 0.8));
    ax.add_text(Text::new(0.5, 0.5, "first", Color::BLACK));
    ax.add_rectangle(Rectangle::new(0.0, 0.0, 1.0, 1.0, Color::BLUE).with_label("0"));
    ax.add_text(Text::new(1.5, 0.5, "second", Color::BLACK));

    let ax = &fig.axes()[0];
    assert_eq!(ax.text_strings(), vec!["first", "second"]);
    // added rectangle plus the background patch
    assert_eq!(ax.rectangles().count(), 2);
    assert_eq!(ax.rectangles().next().and_then(|r| r.label.as_deref()), Some("0"));
    assert!(matches!(ax.artists().first(), Some(Artist::Text(_))));
}

#[test]
fn face_color_sets_patch_fill() {
    let mut fig = Figure::new(100, 100);
    let ax = fig.add_axes(Bounds::new(0.0, 0.0, 1.0, 1.0));
    ax.set_face_color(Color::from_rgb(234, 234, 242));
    assert_eq!(ax.face_color(), Color::from_rgb(234, 234, 242));
    assert_eq!(ax.rectangles().last().map(|r| r.fill), Some(Color::from_rgb(234, 234, 242)));
}

#[test]
fn legend_labels_in_order() {
    let mut fig = Figure::new(100, 100);
    assert!(fig.legend().is_none());
    let mut legend = Legend::new("value");
    legend.push("0", Color::BLUE);
    legend.push("1", Color::RED);
    fig.set_legend(legend);
    let legend = fig.legend().expect("legend set");
    assert_eq!(legend.title, "value");
    assert_eq!(legend.labels(), vec!["0", "1"]);
    assert_eq!(legend.entries[1].color, Color::RED);
}
