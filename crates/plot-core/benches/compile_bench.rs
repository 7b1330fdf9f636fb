use plot_core::{compile, Command, PlotConfig, PlotError, Series, TempFiles};
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use std::path::Path;

fn build_config(n: usize) -> PlotConfig {
    let data: Vec<(f64, f64)> = (0..n)
        .map(|i| (i as f64, (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)))
        .collect();
    PlotConfig::new()
        .set("title", "Bench")
        .set("xrange", format!("[0:{}]", n - 1))
        .flag("key", true)
        .series(Series::xy(&data).title("wave"))
        .series(Series::expression("sin(x)").title("sine"))
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_script");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let cfg = build_config(n);
            b.iter(|| -> Result<(), PlotError> {
                let mut temps = TempFiles::new();
                let script = compile(&cfg, Command::Plot, Path::new("bench.png"), &mut temps)?;
                black_box(script);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
