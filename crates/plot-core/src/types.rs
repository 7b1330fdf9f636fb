// File: crates/plot-core/src/types.rs
// Summary: Shared defaults and constants (canvas size, font, engine, sampling range).

use std::time::Duration;

/// Default canvas width in pixels.
pub const WIDTH: u32 = 500;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 400;

/// Default font family passed to the terminal statement.
pub const FONT: &str = "Arial";
/// Default font size in points.
pub const FONT_SIZE: u32 = 12;

/// Engine binary, resolved through `PATH` when not absolute.
pub const ENGINE: &str = "gnuplot";

/// Default per-series render style (`lines`).
pub const STYLE: &str = "l";
/// Default per-series line width.
pub const LINE_WIDTH: f64 = 2.0;
/// Default column selection.
pub const USING: [u32; 2] = [1, 2];

/// Default sampling range for function series.
pub const RANGE_START: f64 = -5.0;
pub const RANGE_STOP: f64 = 5.0;
pub const RANGE_STEP: f64 = 0.1;
/// Upper bound on samples per function series; larger ranges are rejected.
pub const MAX_SAMPLES: usize = 10_000_000;

/// How often a running engine is polled while a timeout is armed.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Filename prefix for everything written to the temp dir.
pub const TEMP_PREFIX: &str = "plotscript-";
