// File: crates/plot-core/src/script.rs
// Summary: Compiles a PlotConfig into engine script text (terminal header, option statements, plot line).

use std::path::Path;

use tracing::debug;

use crate::config::PlotConfig;
use crate::error::{PlotError, Result};
use crate::options::{quote, statement, OptionValue};
use crate::series::{format_columns, DataSource, Series};
use crate::tempfiles::TempFiles;

/// Option keys never emitted from `PlotConfig::options`.
pub const RESERVED_KEYS: &[&str] = &["output", "terminal"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// 2D plot.
    Plot,
    /// 3D surface plot.
    Splot,
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Plot => "plot",
            Command::Splot => "splot",
        }
    }
}

/// Build the full script for `config`. Array series are written into `temps`; no
/// process is started. Validation runs first so bad input never touches the disk.
pub fn compile(config: &PlotConfig, command: Command, output: &Path, temps: &mut TempFiles) -> Result<String> {
    if config.series.is_empty() {
        return Err(PlotError::NoSeries);
    }
    for (i, s) in config.series.iter().enumerate() {
        s.validate(i + 1)?;
    }
    let driver = config.driver_for(output)?;

    let mut lines = Vec::with_capacity(config.options.len() + 3);
    lines.push(format!(
        "set terminal {driver} size {},{} font {}",
        config.width,
        config.height,
        quote(&format!("{},{}", config.font, config.font_size)),
    ));
    lines.push(statement("output", &OptionValue::Quoted(output.display().to_string())));

    // The header owns the terminal and output statements.
    for (key, value) in config.options.iter().filter(|(k, _)| !RESERVED_KEYS.contains(&k.as_str())) {
        lines.push(statement(key, value));
    }

    let clauses = config
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| series_clause(s, i + 1, temps))
        .collect::<Result<Vec<_>>>()?;
    lines.push(format!("{} {}", command.keyword(), clauses.join(", ")));

    let script = lines.join("\n");
    debug!(command = command.keyword(), series = clauses.len(), bytes = script.len(), "compiled script");
    Ok(script)
}

/// Clause for the series at 1-based `position`, e.g. `"d.dat" u 1:2 w l lt 1 lw 2 t "a"`.
pub fn series_clause(series: &Series, position: usize, temps: &mut TempFiles) -> Result<String> {
    let head = match &series.source {
        DataSource::Expression(expr) => expr.clone(),
        DataSource::File(path) => file_head(path, &series.using),
        DataSource::Array(columns) => {
            let path = temps.write(&format_columns(columns)?, ".dat")?;
            file_head(&path, &series.using)
        }
    };
    let line_type = series.line_type.unwrap_or(position as u32);
    Ok(format!(
        "{head} w {} lt {line_type} lw {} t {}",
        series.style,
        series.width,
        quote(series.title.as_deref().unwrap_or("")),
    ))
}

fn file_head(path: &Path, using: &[String]) -> String {
    format!("{} u {}", quote(&path.display().to_string()), using.join(":"))
}
