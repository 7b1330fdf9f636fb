// File: crates/plot-core/src/error.rs
// Summary: Error taxonomy for configuration, temp-file I/O and engine invocation.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    // -- configuration ------------------------------------------------------
    #[error("column length mismatch: column {column} has {found} rows, expected {expected}")]
    ColumnLengthMismatch { column: usize, expected: usize, found: usize },

    #[error("array data has no columns")]
    EmptyColumns,

    #[error("range step must be non-zero")]
    ZeroStep,

    #[error("range bounds must be finite (start={start}, stop={stop}, step={step})")]
    InvalidRange { start: f64, stop: f64, step: f64 },

    #[error("range yields more than {limit} samples; use a larger step")]
    TooManySamples { limit: usize },

    #[error("series {index}: {field} is empty")]
    EmptyField { index: usize, field: &'static str },

    #[error("series {index}: column selection is empty")]
    EmptyUsing { index: usize },

    #[error("plot has no data series")]
    NoSeries,

    #[error("unknown output type '{0}'")]
    UnknownOutputType(String),

    #[error("cannot infer output type from '{}'; set it explicitly", .0.display())]
    MissingOutputType(PathBuf),

    // -- I/O ----------------------------------------------------------------
    #[error("failed to write temp file")]
    TempFile {
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    // -- engine -------------------------------------------------------------
    #[error("failed to launch engine '{binary}'")]
    EngineLaunch {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("engine '{binary}' exited with {status}: {stderr}")]
    EngineFailed { binary: String, status: ExitStatus, stderr: String },

    #[error("engine '{binary}' did not finish within {timeout:?}")]
    EngineTimeout { binary: String, timeout: Duration },
}

impl PlotError {
    /// True for errors raised while validating input, before any I/O.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            PlotError::ColumnLengthMismatch { .. }
                | PlotError::EmptyColumns
                | PlotError::ZeroStep
                | PlotError::InvalidRange { .. }
                | PlotError::TooManySamples { .. }
                | PlotError::EmptyField { .. }
                | PlotError::EmptyUsing { .. }
                | PlotError::NoSeries
                | PlotError::UnknownOutputType(_)
                | PlotError::MissingOutputType(_)
        )
    }

    /// True when the engine itself could not run or reported failure.
    pub fn is_engine(&self) -> bool {
        matches!(
            self,
            PlotError::EngineLaunch { .. } | PlotError::EngineFailed { .. } | PlotError::EngineTimeout { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
