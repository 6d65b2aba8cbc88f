// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, Cross, PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use std::error::Error;
use std::ops::Range;
use tracing::info;

use crate::constants::{
    ANNOTATION_X_FRACTION, ANNOTATION_Y_FRACTION, FONT_SIZE_ANNOTATION, FONT_SIZE_AXIS_LABEL,
    FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE, FONT_SIZE_MESSAGE,
    LINE_WIDTH_LEGEND, LINE_WIDTH_MARKER, PEAK_MARKER_SIZE, PLOT_HEIGHT, PLOT_WIDTH,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Padded range of the finite values in `data`, or `None` when there are none.
pub fn padded_range(data: &Array1<f64>) -> Option<Range<f64>> {
    let finite: Array1<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    let min = *finite.min().ok()?;
    let max = *finite.max().ok()?;
    let (lo, hi) = calculate_range(min, max);
    Some(lo..hi)
}

/// Y-axis tick text: "k" notation for thousands, one decimal for small fractional values.
pub fn format_tick_label(y: f64) -> String {
    if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 10.0 && y.fract() != 0.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    panel_title: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{panel_title} Data Unavailable: {reason}");

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_text_width = (message.len() as i32).saturating_mul(estimated_char_width);
    let center_x = width / 2 - estimated_text_width / 2;
    let center_y = height / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// Point markers drawn as crosses on top of the series.
#[derive(Clone)]
pub struct PlotMarkers {
    pub points: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    pub peaks: Option<PlotMarkers>,
    /// Text drawn inside the chart near its upper-right corner.
    pub annotation: Option<String>,
}

impl PlotConfig {
    pub fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
    }

    /// Both ranges are finite and non-empty. Plotters never finishes laying out an infinite axis.
    pub fn has_valid_ranges(&self) -> bool {
        let valid = |r: &Range<f64>| r.start.is_finite() && r.end.is_finite() && r.end > r.start;
        valid(&self.x_range) && valid(&self.y_range)
    }

    fn annotation_anchor(&self) -> (f64, f64) {
        let x_span = self.x_range.end - self.x_range.start;
        let y_span = self.y_range.end - self.y_range.start;
        (
            self.x_range.start + x_span * ANNOTATION_X_FRACTION,
            self.y_range.start + y_span * ANNOTATION_Y_FRACTION,
        )
    }
}

/// Draws a single chart from a PlotConfig: line series, peak crosses, and annotation.
fn draw_single_chart_with_config(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .y_label_formatter(&|y| format_tick_label(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], s.color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    if let Some(markers) = plot_config.peaks.as_ref().filter(|m| !m.points.is_empty()) {
        let marker_style = markers.color.stroke_width(LINE_WIDTH_MARKER);
        let marker_color = markers.color;
        chart
            .draw_series(
                markers
                    .points
                    .iter()
                    .map(|&point| Cross::new(point, PEAK_MARKER_SIZE, marker_style)),
            )?
            .label(&markers.label)
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, marker_color.filled()));
        legend_series_count += 1;
    }

    if let Some(text) = &plot_config.annotation {
        chart.draw_series(std::iter::once(Text::new(
            text.clone(),
            plot_config.annotation_anchor(),
            ("sans-serif", FONT_SIZE_ANNOTATION).into_font().color(&BLACK),
        )))?;
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Creates an image with one full-width panel per entry of `panels`, stacked vertically.
pub fn draw_stacked_panels<'a>(
    output_filename: &'a str,
    root_name: &str,
    panels: &[(String, Option<PlotConfig>)],
) -> Result<(), Box<dyn Error>>
where
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area = BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE).into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((panels.len().max(1), 1));
    let mut any_panel_plotted = false;

    for ((panel_title, plot_config), area) in panels.iter().zip(sub_plot_areas.iter()) {
        match plot_config {
            Some(config) if config.has_data() && config.has_valid_ranges() => {
                draw_single_chart_with_config(area, config)?;
                any_panel_plotted = true;
            }
            Some(config) => {
                let reason = if !config.has_data() {
                    "No data points"
                } else {
                    "Invalid ranges"
                };
                draw_unavailable_message(area, panel_title, reason)?;
            }
            None => {
                draw_unavailable_message(area, panel_title, "Calculation/Data Extraction Failed")?;
            }
        }
    }

    root_area.present()?;
    if any_panel_plotted {
        info!("Stacked plot saved as '{output_filename}'.");
    } else {
        info!("Saved '{output_filename}' with placeholder messages only: no panel had data to plot.");
    }
    Ok(())
}
