//! Chart rendering for sweep results.
//!
//! Draws one line per method over the sweep, batch size on the x axis and
//! average gas on the y axis. Two styles: the default bitmap chart written
//! at the end of a sweep, and a whitegrid SVG variant used when re-plotting
//! from an existing CSV.

use super::{ensure_parent_dirs, file_size, validate_output_path};
use crate::aggregator::series::MethodSeries;
use crate::utils::error::PlotError;
use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const CHART_TITLE: &str = "Gas Usage by Batch Number for Each Method";
const X_LABEL: &str = "Batch Number";
const Y_LABEL: &str = "Average Gas Used";

/// Rendering style for the sweep chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotStyle {
    /// Default bitmap chart (PNG)
    Png,
    /// Whitegrid vector chart (SVG), used by the re-plot path
    Svg,
}

/// Render the sweep chart to an image file
///
/// **Public** - main entry point for chart output
///
/// # Arguments
/// * `series` - per-method series from the aggregator
/// * `output_path` - image file to write
/// * `style` - bitmap or whitegrid vector styling
///
/// # Errors
/// * `PlotError::EmptySeries` - nothing to draw
/// * `PlotError::RenderFailed` - backend drawing error
pub fn render_plot(
    series: &[MethodSeries],
    output_path: impl AsRef<Path>,
    style: PlotStyle,
) -> Result<(), PlotError> {
    let output_path = output_path.as_ref();

    if series.iter().all(|s| s.points.is_empty()) {
        return Err(PlotError::EmptySeries);
    }

    validate_output_path(output_path).map_err(|e| PlotError::RenderFailed(e.to_string()))?;
    ensure_parent_dirs(output_path).map_err(|e| PlotError::RenderFailed(e.to_string()))?;

    info!("Rendering chart to: {}", output_path.display());

    match style {
        PlotStyle::Png => {
            let root = BitMapBackend::new(output_path, (1200, 675)).into_drawing_area();
            draw_chart(root, series, style)?;
        }
        PlotStyle::Svg => {
            let root = SVGBackend::new(output_path, (1440, 810)).into_drawing_area();
            draw_chart(root, series, style)?;
        }
    }

    info!(
        "Chart written successfully ({} bytes)",
        file_size(output_path)
    );

    Ok(())
}

/// Draw the chart onto a prepared drawing area
///
/// **Private** - generic over the backend so both styles share one path
fn draw_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    series: &[MethodSeries],
    style: PlotStyle,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(render_err)?;

    let ((x_min, x_max), (y_min, y_max)) = axis_bounds(series);
    debug!(
        "Chart bounds: x {}..{} y {}..{}",
        x_min, x_max, y_min, y_max
    );

    let (title_size, label_size, stroke) = match style {
        PlotStyle::Png => (28, 16, 2u32),
        PlotStyle::Svg => (36, 20, 3u32),
    };

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", title_size))
        .margin(24)
        .x_label_area_size(48)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .label_style(("sans-serif", label_size));
    if style == PlotStyle::Svg {
        // whitegrid look: drop the fine mesh, keep faint major lines
        mesh.light_line_style(WHITE.mix(0.0))
            .bold_line_style(BLACK.mix(0.12));
    }
    mesh.draw().map_err(render_err)?;

    for (idx, method_series) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();

        chart
            .draw_series(LineSeries::new(
                method_series.points.iter().copied(),
                color.stroke_width(stroke),
            ))
            .map_err(render_err)?
            .label(method_series.method.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(stroke))
            });

        // Point markers, one per sweep size
        chart
            .draw_series(
                method_series
                    .points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
            )
            .map_err(render_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .label_font(("sans-serif", label_size))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;

    Ok(())
}

/// Axis bounds with padding so degenerate sweeps still render
///
/// **Private** - internal helper for draw_chart
fn axis_bounds(series: &[MethodSeries]) -> ((u64, u64), (u64, u64)) {
    let mut x_min = u64::MAX;
    let mut x_max = 0u64;
    let mut y_min = u64::MAX;
    let mut y_max = 0u64;

    for method_series in series {
        for &(x, y) in &method_series.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    // Single-point sweeps produce zero-width ranges the backend rejects
    if x_min >= x_max {
        x_max = x_min + 1;
    }

    let y_pad = ((y_max.saturating_sub(y_min)) / 10).max(1);
    let y_lo = y_min.saturating_sub(y_pad);
    let y_hi = y_max.saturating_add(y_pad);

    ((x_min, x_max), (y_lo, y_hi))
}

/// Collapse backend error types into PlotError
///
/// **Private** - internal utility
fn render_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::RenderFailed(e.to_string())
}
