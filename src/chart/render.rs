//! Drawing charts with `plotters`.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::{ChartConfig, ImageFormat};
use crate::error::{ChatplotError, Result};

use super::series::{BarChart, Chart, TimeSeriesChart};

type DrawResult<DB> = std::result::Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

const CAPTION_FONT: (&str, u32) = ("sans-serif", 28);
const LABEL_FONT: (&str, u32) = ("sans-serif", 14);

/// Renders `chart` into an image file at `path`.
///
/// The file is complete when this returns.
pub fn render_to_file(chart: &Chart, path: &Path, config: &ChartConfig) -> Result<()> {
    let size = (config.width, config.height);
    match config.format {
        ImageFormat::Png => finish(BitMapBackend::new(path, size).into_drawing_area(), chart, config, path),
        ImageFormat::Svg => finish(SVGBackend::new(path, size).into_drawing_area(), chart, config, path),
    }
}

fn finish<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    chart: &Chart,
    config: &ChartConfig,
    path: &Path,
) -> Result<()> {
    let fail = |e: DrawingAreaErrorKind<DB::ErrorType>| {
        ChatplotError::chart(e.to_string(), Some(path.to_path_buf()))
    };
    draw(&root, chart, config).map_err(fail)?;
    root.present().map_err(fail)
}

/// Draws `chart` onto any drawing area.
pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &Chart,
    config: &ChartConfig,
) -> DrawResult<DB> {
    root.fill(&WHITE)?;
    match chart {
        Chart::TimeSeries(series) => draw_time_series(root, series, config.tick_stride),
        Chart::Bar(bars) => draw_bars(root, bars),
    }
}

fn draw_time_series<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &TimeSeriesChart,
    stride: usize,
) -> DrawResult<DB> {
    let n = series.points.len().max(1) as i32;
    let y_max = headroom(series.max_total() as f64);

    let mut chart = ChartBuilder::on(root)
        .caption(series.title(), CAPTION_FONT)
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0i32..n, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_labels(n as usize)
        .x_label_formatter(&|x| usize::try_from(*x).map(|i| series.tick_label(i, stride)).unwrap_or_default())
        .x_label_style(LABEL_FONT)
        .x_desc("Date (month/year)")
        .y_desc("Number of messages sent")
        .draw()?;

    let lines = [
        ("total", series.totals(), BLUE),
        ("text", series.texts(), GREEN),
        ("media", series.media(), RED),
    ];
    for (name, values, color) in lines {
        let points = values.into_iter().enumerate().map(|(i, v)| (i as i32, v as f64));
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_bars<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, bars: &BarChart) -> DrawResult<DB> {
    let n = bars.bars.len().max(1) as i32;
    let y_max = headroom(bars.max_value());

    let mut chart = ChartBuilder::on(root)
        .caption(&bars.title, CAPTION_FONT)
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0i32..n).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n as usize)
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => usize::try_from(*i)
                .ok()
                .and_then(|i| bars.bars.get(i))
                .map(|b| b.sender.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_style(LABEL_FONT)
        .x_desc("Sender")
        .y_desc(bars.y_desc.as_str())
        .draw()?;

    chart
        .draw_series(bars.bars.iter().enumerate().map(|(i, bar)| {
            let i = i as i32;
            let mut rect = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), bar.value)],
                BLUE.mix(0.7).filled(),
            );
            rect.set_margin(0, 0, 8, 8);
            rect
        }))?
        .label(bars.value_name.as_str())
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BLUE.mix(0.7).filled()));

    if let Some(overlay_name) = &bars.overlay_name {
        chart
            .draw_series(bars.bars.iter().enumerate().filter_map(|(i, bar)| {
                let value = bar.overlay?;
                let i = i as i32;
                let mut rect = Rectangle::new(
                    [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), value)],
                    RED.mix(0.7).filled(),
                );
                rect.set_margin(0, 0, 20, 20);
                Some(rect)
            }))?
            .label(overlay_name.as_str())
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], RED.mix(0.7).filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

/// Top of the y axis: 10% above the largest value, never zero.
fn headroom(max: f64) -> f64 {
    (max * 1.1).max(1.0)
}
