// File: crates/plot-core/src/config.rs
// Summary: Plot configuration: global options, ordered series list and reserved render settings.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use crate::engine;
use crate::error::{PlotError, Result};
use crate::options::OptionValue;
use crate::script::Command;
use crate::series::Series;
use crate::terminal::Terminal;
use crate::types::{ENGINE, FONT, FONT_SIZE, HEIGHT, WIDTH};

/// Everything needed to produce one plot.
/// Reserved settings are plain fields, so only `options` ever becomes `set` statements.
#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub options: BTreeMap<String, OptionValue>,
    pub series: Vec<Series>,
    pub width: u32,
    pub height: u32,
    pub font: String,
    pub font_size: u32,
    pub engine: String,
    /// Explicit type tag; when `None` the output path's extension decides.
    pub output_type: Option<String>,
    /// Raw terminal driver, bypassing the type-tag table.
    pub terminal: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        let mut options = BTreeMap::new();
        options.insert("grid".to_string(), OptionValue::from("back"));
        options.insert("xlabel".to_string(), OptionValue::from("X"));
        options.insert("ylabel".to_string(), OptionValue::from("Y"));
        Self {
            options,
            series: Vec::new(),
            width: WIDTH,
            height: HEIGHT,
            font: FONT.to_string(),
            font_size: FONT_SIZE,
            engine: ENGINE.to_string(),
            output_type: None,
            terminal: None,
            timeout: None,
        }
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn flag(self, key: impl Into<String>, on: bool) -> Self {
        self.set(key, OptionValue::Flag(on))
    }

    pub fn quoted(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, OptionValue::Quoted(value.into()))
    }

    /// Drop an option entirely (no statement at all, unlike `flag(key, false)`).
    pub fn remove_option(&mut self, key: &str) -> Option<OptionValue> {
        self.options.remove(key)
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn font(mut self, name: impl Into<String>, size: u32) -> Self {
        self.font = name.into();
        self.font_size = size;
        self
    }

    pub fn engine(mut self, binary: impl Into<String>) -> Self {
        self.engine = binary.into();
        self
    }

    pub fn output_type(mut self, tag: impl Into<String>) -> Self {
        self.output_type = Some(tag.into());
        self
    }

    pub fn terminal(mut self, driver: impl Into<String>) -> Self {
        self.terminal = Some(driver.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Driver string for the `set terminal` line.
    pub fn driver_for(&self, output: &Path) -> Result<String> {
        if let Some(driver) = &self.terminal {
            return Ok(driver.clone());
        }
        let terminal = match &self.output_type {
            Some(tag) => Terminal::from_tag(tag).ok_or_else(|| PlotError::UnknownOutputType(tag.clone()))?,
            None => Terminal::from_path(output)?,
        };
        Ok(terminal.driver().to_string())
    }

    /// Render a 2D plot. An explicit output type applies to this call only.
    pub fn plot(&mut self, output: impl AsRef<Path>) -> Result<&mut Self> {
        self.render(Command::Plot, output.as_ref())
    }

    /// Render a 3D plot. An explicit output type applies to this call only.
    pub fn splot(&mut self, output: impl AsRef<Path>) -> Result<&mut Self> {
        self.render(Command::Splot, output.as_ref())
    }

    fn render(&mut self, command: Command, output: &Path) -> Result<&mut Self> {
        let result = engine::render(self, command, output);
        self.output_type = None;
        result.map(|_| self)
    }
}
