// File: crates/ternary-examples/src/bin/basic.rs
// Summary: Minimal example that renders a labelled ternary diagram with a few points to PNG.

use anyhow::Result;
use ternary_core::{project, ternary, FigureOptions, LineStyle, MarkerStyle};

fn main() -> Result<()> {
    let mut fig = ternary(Some("A"), Some("C"), Some("B"), FigureOptions::default());
    let theme = fig.options.theme;

    // Mixing path from a B-C blend towards pure A, then a few scattered samples
    let path: Vec<_> = (0..=10)
        .map(|i| {
            let a = i as f64 / 10.0;
            project(a, 0.3 * (1.0 - a), 0.7 * (1.0 - a))
        })
        .collect();
    fig.axes_mut().plot_points(&path, LineStyle::new(theme.line, 2.0).with_z_order(12.0));

    let samples = [project(20.0, 10.5, 3.2), project(1.0, 1.0, 1.0), project(10.0, 60.0, 30.0)];
    fig.axes_mut().scatter(&samples, MarkerStyle::new(theme.marker, 5.0).with_z_order(12.0));

    let out = std::path::PathBuf::from("target/out/example_basic.png");
    fig.render_to_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
