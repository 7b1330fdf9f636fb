// File: crates/plot-core/src/terminal.rs
// Summary: Output type tags and the engine terminal driver each one selects.

use std::path::Path;

use crate::error::{PlotError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminal {
    Png,
    Svg,
    Jpeg,
    Gif,
}

impl Terminal {
    /// Parse a type tag (`png`, `svg`, `jpg`/`jpeg`, `gif`), case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "png" => Some(Terminal::Png),
            "svg" => Some(Terminal::Svg),
            "jpg" | "jpeg" => Some(Terminal::Jpeg),
            "gif" => Some(Terminal::Gif),
            _ => None,
        }
    }

    /// Infer from the output path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| PlotError::MissingOutputType(path.to_path_buf()))?;
        Self::from_tag(ext).ok_or_else(|| PlotError::UnknownOutputType(ext.to_string()))
    }

    pub fn driver(&self) -> &'static str {
        match self {
            Terminal::Png => "pngcairo enhanced",
            Terminal::Svg => "svg dashed enhanced",
            Terminal::Jpeg => "jpeg enhanced",
            Terminal::Gif => "gif enhanced",
        }
    }
}
