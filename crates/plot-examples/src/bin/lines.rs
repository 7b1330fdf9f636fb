// File: crates/plot-examples/src/bin/lines.rs
// Summary: Minimal example that plots a data table, a sampled function and an engine expression to PNG.

use anyhow::{Context, Result};
use plot_core::{PlotConfig, Range, Series};
use std::path::PathBuf;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "plot_core=info".into()),
        )
        .init();

    // Build a simple line series
    let data = vec![
        (0.0, 0.0),
        (1.0, 1.2),
        (2.0, 0.8),
        (3.0, 1.8),
        (4.0, 1.4),
        (5.0, 2.0),
    ];

    let mut cfg = PlotConfig::new()
        .set("title", "Lines")
        .set("xrange", "[0:5]")
        .set("key", "left top")
        .series(Series::xy(&data).with("lp").title("measured"))
        .series(Series::function(|x| 0.4 * x, Range::new(0.0, 5.0, 0.25))?.title("fit"))
        .series(Series::expression("1 + sin(x)/2").width(1.0).title("model"));

    let out = PathBuf::from("target/out/example_lines.png");
    std::fs::create_dir_all(out.parent().context("output has no parent")?)?;
    cfg.plot(&out).with_context(|| format!("failed to plot {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
