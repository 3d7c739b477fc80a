use crate::analyzers::PressureDistribution;
use crate::error::{ProcessingError, Result};
use crate::utils::constants::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, HISTOGRAM_BAR_WIDTH, HISTOGRAM_TICK_FONT_SIZE,
    HISTOGRAM_TITLE, HISTOGRAM_TITLE_FONT_SIZE, HISTOGRAM_X_LABEL, HISTOGRAM_Y_LABEL,
};
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::ops::Range;
use std::path::Path;
use tracing::{debug, info};

fn plot_error<E: std::fmt::Display>(err: E) -> ProcessingError {
    ProcessingError::Plot(err.to_string())
}

/// Axis ranges for bars of `(pressure, count)`: one unit of padding either
/// side on x, ten percent headroom on y
pub fn chart_extent(bars: &[(i32, usize)]) -> (Range<f64>, Range<f64>) {
    let low = bars.iter().map(|&(p, _)| p).min().unwrap_or(0) as f64;
    let high = bars.iter().map(|&(p, _)| p).max().unwrap_or(0) as f64;
    let tallest = bars.iter().map(|&(_, c)| c).max().unwrap_or(0).max(1) as f64;

    ((low - 1.0)..(high + 1.0), 0.0..(tallest * 1.1))
}

pub struct HistogramWriter {
    width: u32,
    height: u32,
}

impl HistogramWriter {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Draw the central pressure frequency chart as PNG.
    ///
    /// Returns `false` without touching `output_path` when there is nothing to plot.
    pub fn write_histogram(
        &self,
        distribution: &PressureDistribution,
        output_path: &Path,
    ) -> Result<bool> {
        if distribution.is_empty() {
            debug!("Pressure distribution is empty, no histogram drawn");
            return Ok(false);
        }

        let bars = distribution.sorted();
        let (x_range, y_range) = chart_extent(&bars);
        let half_width = HISTOGRAM_BAR_WIDTH / 2.0;

        let root = BitMapBackend::new(output_path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                HISTOGRAM_TITLE,
                FontDesc::new(FontFamily::SansSerif, HISTOGRAM_TITLE_FONT_SIZE, FontStyle::Normal)
                    .color(&BLACK),
            )
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(plot_error)?;

        chart
            .configure_mesh()
            .x_desc(HISTOGRAM_X_LABEL)
            .y_desc(HISTOGRAM_Y_LABEL)
            .label_style(
                FontDesc::new(FontFamily::SansSerif, HISTOGRAM_TICK_FONT_SIZE, FontStyle::Normal)
                    .color(&BLACK),
            )
            .x_label_formatter(&|x| format!("{:.0}", x))
            .draw()
            .map_err(plot_error)?;

        chart
            .draw_series(bars.iter().map(|&(pressure, count)| {
                let x = pressure as f64;
                Rectangle::new(
                    [(x - half_width, 0.0), (x + half_width, count as f64)],
                    BLUE.filled(),
                )
            }))
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;

        info!(
            output = %output_path.display(),
            bars = bars.len(),
            records = distribution.total(),
            "Wrote pressure histogram"
        );

        Ok(true)
    }
}

impl Default for HistogramWriter {
    fn default() -> Self {
        Self::new()
    }
}
