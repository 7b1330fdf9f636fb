// File: crates/plot-core/src/series.rs
// Summary: Series descriptors (engine expression, data file, in-memory array, sampled function).
// Notes:
// - Array and function series keep their numbers in memory and are written to a temp
//   file when a script is compiled; one file per series per compile.
// - Constructors validate eagerly so configuration errors surface before any I/O.

use std::path::PathBuf;

use crate::error::{PlotError, Result};
use crate::types::{LINE_WIDTH, MAX_SAMPLES, RANGE_START, RANGE_STEP, RANGE_STOP, STYLE, USING};

/// Column-major table: `columns[column][row]`.
pub type Columns = Vec<Vec<f64>>;

#[derive(Clone, Debug, PartialEq)]
pub enum DataSource {
    /// Literal expression evaluated by the engine, e.g. `sin(x)`.
    Expression(String),
    /// Existing data file on disk. The path is not checked.
    File(PathBuf),
    /// In-memory table, materialized to a temp file at compile time.
    Array(Columns),
}

/// Sampling range for function series: `start, start+step, ...` up to and including `stop`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl Range {
    pub const fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Reject a zero step (the sample loop would never end) and non-finite bounds.
    pub fn validate(&self) -> Result<()> {
        if !(self.start.is_finite() && self.stop.is_finite() && self.step.is_finite()) {
            return Err(PlotError::InvalidRange { start: self.start, stop: self.stop, step: self.step });
        }
        if self.step == 0.0 {
            return Err(PlotError::ZeroStep);
        }
        Ok(())
    }

    /// Number of samples the range yields; capped at `MAX_SAMPLES`.
    pub fn sample_count(&self) -> Result<usize> {
        self.validate()?;
        let span = (self.stop - self.start) / self.step;
        if span < 0.0 {
            return Ok(0);
        }
        if !span.is_finite() || span >= MAX_SAMPLES as f64 {
            return Err(PlotError::TooManySamples { limit: MAX_SAMPLES });
        }
        Ok(span.floor() as usize + 1)
    }

    /// Sample positions. Empty when `step` points away from `stop`.
    pub fn points(&self) -> Result<Vec<f64>> {
        let count = self.sample_count()?;
        let mut out = Vec::with_capacity(count + 1);
        // One extra slot absorbs rounding in the count; the bound check decides.
        for i in 0..=count {
            let x = self.start + i as f64 * self.step;
            let inside = if self.step > 0.0 { x <= self.stop } else { x >= self.stop };
            if !inside { break; }
            out.push(x);
        }
        Ok(out)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(RANGE_START, RANGE_STOP, RANGE_STEP)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub source: DataSource,
    pub using: Vec<String>,       // column selection, joined with ':'
    pub style: String,            // `with` clause, e.g. "l", "p", "lp"
    pub width: f64,               // line width
    pub line_type: Option<u32>,   // explicit `lt`, else the 1-based series position
    pub title: Option<String>,
}

impl Series {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            using: USING.iter().map(|c| c.to_string()).collect(),
            style: STYLE.to_string(),
            width: LINE_WIDTH,
            line_type: None,
            title: None,
        }
    }

    /// Expression evaluated by the engine itself; no file, no column clause.
    pub fn expression(expr: impl Into<String>) -> Self {
        Self::new(DataSource::Expression(expr.into()))
    }

    /// Pre-existing data file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(DataSource::File(path.into()))
    }

    /// Column-major table; all columns must have the same length.
    pub fn array(columns: Columns) -> Result<Self> {
        validate_columns(&columns)?;
        Ok(Self::new(DataSource::Array(columns)))
    }

    /// Two-column table from (x, y) pairs.
    pub fn xy(points: &[(f64, f64)]) -> Self {
        let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
        Self::new(DataSource::Array(vec![xs, ys]))
    }

    /// Sample `f` over `range` into an (x, f(x)) table.
    pub fn function<F>(f: F, range: Range) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        Ok(Self::new(DataSource::Array(sample(f, range)?)))
    }

    pub fn using<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.using = columns.into_iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn line_type(mut self, line_type: u32) -> Self {
        self.line_type = Some(line_type);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_file_backed(&self) -> bool {
        !matches!(self.source, DataSource::Expression(_))
    }

    /// Check the descriptor at 1-based position `index` can be emitted.
    pub fn validate(&self, index: usize) -> Result<()> {
        match &self.source {
            DataSource::Expression(expr) if expr.trim().is_empty() => {
                return Err(PlotError::EmptyField { index, field: "expression" });
            }
            DataSource::File(path) if path.as_os_str().is_empty() => {
                return Err(PlotError::EmptyField { index, field: "file path" });
            }
            DataSource::Array(columns) => { validate_columns(columns)?; }
            DataSource::Expression(_) | DataSource::File(_) => {}
        }
        if self.style.trim().is_empty() {
            return Err(PlotError::EmptyField { index, field: "style" });
        }
        if self.is_file_backed() && self.using.is_empty() {
            return Err(PlotError::EmptyUsing { index });
        }
        Ok(())
    }
}

/// Row count shared by every column.
pub fn validate_columns(columns: &[Vec<f64>]) -> Result<usize> {
    let first = columns.first().ok_or(PlotError::EmptyColumns)?;
    let expected = first.len();
    for (column, c) in columns.iter().enumerate().skip(1) {
        if c.len() != expected {
            return Err(PlotError::ColumnLengthMismatch { column: column + 1, expected, found: c.len() });
        }
    }
    Ok(expected)
}

/// Row-major text: values separated by one space, rows by '\n', no trailing newline.
pub fn format_columns(columns: &[Vec<f64>]) -> Result<String> {
    let rows = validate_columns(columns)?;
    let mut out = String::new();
    for row in 0..rows {
        if row > 0 { out.push('\n'); }
        for (i, column) in columns.iter().enumerate() {
            if i > 0 { out.push(' '); }
            out.push_str(&column[row].to_string());
        }
    }
    Ok(out)
}

/// Evaluate `f` at each point of `range`: `[xs, f(xs)]`.
pub fn sample<F>(f: F, range: Range) -> Result<Columns>
where
    F: Fn(f64) -> f64,
{
    let xs = range.points()?;
    let ys = xs.iter().map(|&x| f(x)).collect();
    Ok(vec![xs, ys])
}
