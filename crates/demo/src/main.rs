// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV file and plots every numeric column against the first (or chosen) X column.

use anyhow::{Context, Result};
use clap::Parser;
use plot_core::{compile, Command, PlotConfig, Series, TempFiles};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Plot CSV columns through an external plotting engine
#[derive(Parser, Clone, Debug)]
#[command(name = "plotscript-demo")]
struct Args {
    /// Input CSV (header row required; .csv/.cvs are tried interchangeably)
    input: PathBuf,

    /// Output image; defaults to target/out/plot_<stem>.png
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output type tag, overriding the output extension (png, svg, jpeg, gif)
    #[arg(long = "type")]
    output_type: Option<String>,

    /// Engine binary
    #[arg(long, env = "PLOT_ENGINE", default_value = plot_core::types::ENGINE)]
    engine: String,

    /// Column used as X (name or 0-based index); defaults to the first column
    #[arg(short = 'x', long)]
    x_column: Option<String>,

    /// Plot title
    #[arg(long)]
    title: Option<String>,

    /// Render style for every series (l, p, lp, ...)
    #[arg(long, default_value = plot_core::types::STYLE)]
    style: String,

    /// Reference the CSV directly instead of copying columns into temp files
    #[arg(long)]
    direct: bool,

    /// Kill the engine after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the generated script and exit without running the engine
    #[arg(long)]
    print_script: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plot_core=info,plotscript_demo=info".into()),
        )
        .init();

    let args = Args::parse();
    let (path, used_alt) = resolve_path(&args.input)?;
    info!("Using input file: {}", path.display());
    if used_alt {
        info!("  (extension swapped between .csv/.cvs)");
    }

    let table = load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!("Loaded {} rows x {} columns", table.rows(), table.headers.len());
    if table.rows() == 0 {
        anyhow::bail!("no numeric rows loaded - check headers/delimiter.");
    }

    let x = match &args.x_column {
        Some(want) => table.column_index(want).with_context(|| format!("no column '{want}'"))?,
        None => 0,
    };

    let mut cfg = PlotConfig::new()
        .engine(&args.engine)
        .set("xlabel", table.headers[x].as_str())
        .set("ylabel", "Value")
        .set("key", "outside right top");
    if let Some(title) = &args.title {
        cfg = cfg.set("title", title.as_str());
    }
    if let Some(tag) = &args.output_type {
        cfg = cfg.output_type(tag);
    }
    if let Some(secs) = args.timeout_secs {
        cfg = cfg.timeout(Duration::from_secs(secs));
    }
    if args.direct {
        cfg = cfg.quoted("datafile separator", ",");
    }

    for (i, name) in table.headers.iter().enumerate().filter(|(i, _)| *i != x) {
        let series = if args.direct {
            Series::file(path.clone()).using([x + 1, i + 1])
        } else {
            Series::array(vec![table.columns[x].clone(), table.columns[i].clone()])?
        };
        cfg.add_series(series.with(&args.style).title(name.as_str()));
    }
    if cfg.series.is_empty() {
        anyhow::bail!("only one column; nothing to plot against '{}'", table.headers[x]);
    }

    let out = args.output.clone().unwrap_or_else(|| out_name(&path));

    if args.print_script {
        let mut temps = TempFiles::new().keep_files(true);
        let script = compile(&cfg, Command::Plot, &out, &mut temps)?;
        println!("{script}");
        for p in temps.paths() {
            info!("kept data file {}", p.display());
        }
        return Ok(());
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    cfg.plot(&out).with_context(|| format!("failed to plot {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Column-major numeric table plus header names.
struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    fn column_index(&self, want: &str) -> Option<usize> {
        if let Ok(i) = want.parse::<usize>() {
            return (i < self.headers.len()).then_some(i);
        }
        self.headers.iter().position(|h| h.eq_ignore_ascii_case(want))
    }
}

/// Load a CSV into columns; rows with any non-numeric cell are skipped.
fn load_csv(path: &Path) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    info!("Headers: {:?}", headers);

    let mut columns = vec![Vec::new(); headers.len()];
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let row = rec.iter().map(|s| s.trim().parse::<f64>().ok()).collect::<Option<Vec<_>>>();
        match row {
            Some(row) if row.len() == headers.len() => {
                for (col, v) in columns.iter_mut().zip(row) {
                    col.push(v);
                }
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("skipped {} non-numeric rows", skipped);
    }
    Ok(Table { headers, columns })
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(p: &Path) -> Result<(PathBuf, bool)> {
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/plot_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("data");
    PathBuf::from("target/out").join(format!("plot_{stem}.png"))
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
