// File: crates/cli/src/summary.rs
// Summary: Plain-text dump of the category counts and the masked correlation table.

use std::io::Write;

use anyhow::Result;
use medical_viz::heatmap::format_cell;
use medical_viz::MedicalVisualizer;

pub fn print(viz: &MedicalVisualizer, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<8} {:<12} {:>5} {:>8}", "cardio", "variable", "value", "total")?;
    for c in viz.category_counts()? {
        writeln!(out, "{:<8} {:<12} {:>5} {:>8}", c.outcome, c.variable, c.value, c.total)?;
    }
    writeln!(out)?;

    let style = &viz.config().heat_map;
    let matrix = viz.correlation()?;
    let width = matrix.names().iter().map(|n| n.len()).max().unwrap_or(0).max(6);
    write!(out, "{:width$}", "")?;
    for name in matrix.names() {
        write!(out, " {name:>width$}")?;
    }
    writeln!(out)?;
    for (i, name) in matrix.names().iter().enumerate() {
        write!(out, "{name:<width$}")?;
        for (j, &v) in matrix.row(i).iter().enumerate() {
            let cell = if style.mask.hides(i, j) || v.is_nan() { String::new() } else { format_cell(v, style.decimals) };
            write!(out, " {cell:>width$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
