//! Chart building and presentation.
//!
//! - [`series`] - backend-independent chart data ([`TimeSeriesChart`], [`BarChart`])
//! - `render` - drawing with `plotters` - requires `charts` feature
//!
//! A [`Presenter`] sends each chart to a [`ChartSink`]: either an image file
//! under `<output_root>/<chat_name>/<label>.<ext>` or a text table on stdout.
//!
//! # Example
//!
//! ```rust
//! use chatplot::chart::{Presenter, build_charts};
//! use chatplot::config::ChartConfig;
//! use chatplot::parser::ChatLogParser;
//!
//! let log = "\
//! 1/2/23, 14:05 - Alice: Hello
//! 2/2/23, 14:07 - Bob: Hi there
//! 2/2/23, 14:08 - Alice: bye
//! ";
//! let messages = ChatLogParser::new().parse_str(log)?;
//! let charts = build_charts(&messages, false);
//! assert_eq!(charts.len(), 4);
//!
//! let presenter = Presenter::summary(ChartConfig::new());
//! presenter.present_all(&charts)?;
//! # Ok::<(), chatplot::ChatplotError>(())
//! ```

#[cfg(feature = "charts")]
pub mod render;
pub mod series;

pub use series::{Bar, BarChart, Chart, TimeSeriesChart, file_safe};

use series::{AVERAGE_LENGTH_LABEL, CHARACTERS_LABEL, MESSAGES_LABEL};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{ChartConfig, ImageFormat};
use crate::error::{ChatplotError, Result};
use crate::message::DatedMessage;
use crate::stats::{monthly_counts_by_sender, sender_stats};

/// Builds every chart for a chat.
///
/// Order: the whole-chat time series, one time series per sender when
/// `per_sender` is set, then the three bar charts. Labels are unique, so
/// senders whose names map to the same file name get a numeric suffix.
pub fn build_charts(messages: &[DatedMessage], per_sender: bool) -> Vec<Chart> {
    let mut charts = vec![Chart::TimeSeries(TimeSeriesChart::from_messages(messages))];

    if per_sender {
        let mut used: BTreeSet<String> = charts.iter().map(|c| c.label().to_string()).collect();
        used.extend(
            [MESSAGES_LABEL, CHARACTERS_LABEL, AVERAGE_LENGTH_LABEL].map(String::from),
        );
        for (sender, points) in monthly_counts_by_sender(messages) {
            let mut series = TimeSeriesChart::for_sender(&sender, points);
            series.label = unique_label(&series.label, &mut used);
            charts.push(Chart::TimeSeries(series));
        }
    }

    let stats = sender_stats(messages);
    charts.push(Chart::Bar(BarChart::messages_and_media(&stats)));
    charts.push(Chart::Bar(BarChart::characters(&stats)));
    charts.push(Chart::Bar(BarChart::average_length(&stats)));
    charts
}

/// Returns `label`, or `label_2`, `label_3`, ... if it is already taken.
fn unique_label(label: &str, used: &mut BTreeSet<String>) -> String {
    let mut candidate = label.to_string();
    let mut n = 2;
    while used.contains(&candidate) {
        candidate = format!("{label}_{n}");
        n += 1;
    }
    used.insert(candidate.clone());
    candidate
}

/// Checks that a chat name can be used as a single directory name.
pub fn validate_chat_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ChatplotError::invalid_chat_name(name, "must not be empty"));
    }
    if name == "." || name == ".." {
        return Err(ChatplotError::invalid_chat_name(name, "must not be a relative directory"));
    }
    if name.contains(['/', '\\']) {
        return Err(ChatplotError::invalid_chat_name(name, "must not contain path separators"));
    }
    Ok(())
}

/// `<output_root>/<chat_name>/<label>.<ext>`
pub fn chart_path(output_root: &Path, chat_name: &str, label: &str, format: ImageFormat) -> PathBuf {
    output_root
        .join(chat_name)
        .join(format!("{label}.{}", format.extension()))
}

/// Where charts go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartSink {
    /// Write image files under `<output_root>/<chat_name>/`.
    Save { output_root: PathBuf, chat_name: String },
    /// Print each chart's data as a text table.
    Summary,
}

/// Presents charts one after another.
#[derive(Debug, Clone)]
pub struct Presenter {
    config: ChartConfig,
    sink: ChartSink,
}

impl Presenter {
    /// Presenter that saves image files.
    pub fn save(
        output_root: impl Into<PathBuf>,
        chat_name: impl Into<String>,
        config: ChartConfig,
    ) -> Result<Self> {
        let chat_name = chat_name.into();
        validate_chat_name(&chat_name)?;
        Ok(Self {
            config,
            sink: ChartSink::Save {
                output_root: output_root.into(),
                chat_name,
            },
        })
    }

    /// Presenter that prints text tables.
    pub fn summary(config: ChartConfig) -> Self {
        Self {
            config,
            sink: ChartSink::Summary,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn sink(&self) -> &ChartSink {
        &self.sink
    }

    /// Directory charts are saved to, if saving.
    pub fn output_dir(&self) -> Option<PathBuf> {
        match &self.sink {
            ChartSink::Save {
                output_root,
                chat_name,
            } => Some(output_root.join(chat_name)),
            ChartSink::Summary => None,
        }
    }

    /// Target file for `chart`, if saving.
    pub fn path_for(&self, chart: &Chart) -> Option<PathBuf> {
        match &self.sink {
            ChartSink::Save {
                output_root,
                chat_name,
            } => Some(chart_path(output_root, chat_name, chart.label(), self.config.format)),
            ChartSink::Summary => None,
        }
    }

    /// Presents one chart; returns the written file when saving.
    pub fn present(&self, chart: &Chart) -> Result<Option<PathBuf>> {
        let Some(path) = self.path_for(chart) else {
            println!("{}", chart.to_text());
            return Ok(None);
        };

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        self.render(chart, &path)?;
        info!(path = %path.display(), "saved chart");
        Ok(Some(path))
    }

    /// Presents every chart in order; returns the written files.
    pub fn present_all(&self, charts: &[Chart]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for chart in charts {
            if let Some(path) = self.present(chart)? {
                written.push(path);
            }
        }
        Ok(written)
    }

    #[cfg(feature = "charts")]
    fn render(&self, chart: &Chart, path: &Path) -> Result<()> {
        render::render_to_file(chart, path, &self.config)
    }

    #[cfg(not(feature = "charts"))]
    fn render(&self, _chart: &Chart, path: &Path) -> Result<()> {
        Err(ChatplotError::chart(
            "built without the `charts` feature",
            Some(path.to_path_buf()),
        ))
    }
}
