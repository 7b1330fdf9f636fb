// File: crates/plot-examples/src/bin/surface.rs
// Summary: 3D example: a gridded surface written as x/y/z columns and drawn with splot to SVG.

use anyhow::{Context, Result};
use plot_core::{PlotConfig, Series};
use std::path::PathBuf;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "plot_core=info".into()),
        )
        .init();

    let n = 30;
    let (mut xs, mut ys, mut zs) = (Vec::new(), Vec::new(), Vec::new());
    for i in 0..n {
        for j in 0..n {
            let x = -3.0 + 6.0 * i as f64 / (n - 1) as f64;
            let y = -3.0 + 6.0 * j as f64 / (n - 1) as f64;
            xs.push(x);
            ys.push(y);
            zs.push((-(x * x + y * y) / 2.0).exp());
        }
    }

    let mut cfg = PlotConfig::new()
        .set("title", "Gaussian")
        .set("zlabel", "Z")
        .set("dgrid3d", format!("{n},{n}"))
        .flag("hidden3d", true)
        .series(Series::array(vec![xs, ys, zs])?.using([1, 2, 3]).width(1.0).title("exp(-r^2/2)"));

    let out = PathBuf::from("target/out/example_surface.svg");
    std::fs::create_dir_all(out.parent().context("output has no parent")?)?;
    cfg.splot(&out).with_context(|| format!("failed to plot {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
