//! Configuration types for parsing and chart output.
//!
//! These are plain builder structs with no CLI framework dependency, so
//! library users can construct them directly or deserialize them.
//!
//! - [`ParserConfig`] - how the line stream is folded into messages
//! - [`ChartConfig`] - image size, format and tick density
//!
//! # Example
//!
//! ```rust
//! use chatplot::config::{ChartConfig, ImageFormat, ParserConfig};
//!
//! let parser = ParserConfig::new().with_flush_trailing(true);
//! let charts = ChartConfig::new()
//!     .with_format(ImageFormat::Svg)
//!     .with_size(1280, 720);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Configuration for chat log parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Emit the message still open at end of input (default: false).
    ///
    /// Off by default: the last message of a log is left out, which keeps
    /// counts identical to earlier reports over the same exports.
    pub flush_trailing: bool,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables emitting the trailing message.
    #[must_use]
    pub fn with_flush_trailing(mut self, enabled: bool) -> Self {
        self.flush_trailing = enabled;
        self
    }
}

/// Image file format for saved charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG bitmap (default)
    #[default]
    Png,
    /// SVG vector image
    Svg,
}

impl ImageFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["png", "svg"]
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Png => write!(f, "PNG"),
            ImageFormat::Svg => write!(f, "SVG"),
        }
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(format!(
                "Unknown image format: '{}'. Expected one of: {}",
                s,
                ImageFormat::all_names().join(", ")
            )),
        }
    }
}

/// Configuration for chart rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Label every n-th month on time series charts (default: 2)
    pub tick_stride: usize,

    /// Output image format (default: PNG)
    pub format: ImageFormat,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            tick_stride: 2,
            format: ImageFormat::Png,
        }
    }
}

impl ChartConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the image size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the month label stride. Zero is treated as one.
    #[must_use]
    pub fn with_tick_stride(mut self, stride: usize) -> Self {
        self.tick_stride = stride.max(1);
        self
    }

    /// Sets the output image format.
    #[must_use]
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }
}
