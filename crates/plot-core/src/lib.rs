// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the config model, script compiler and engine invoker.

pub mod config;
pub mod engine;
pub mod error;
pub mod options;
pub mod script;
pub mod series;
pub mod tempfiles;
pub mod terminal;
pub mod types;

pub use config::PlotConfig;
pub use engine::{plot, render, render_in, run_engine, splot};
pub use error::{PlotError, Result};
pub use options::OptionValue;
pub use script::{compile, series_clause, Command};
pub use series::{format_columns, sample, Columns, DataSource, Range, Series};
pub use tempfiles::TempFiles;
pub use terminal::Terminal;
