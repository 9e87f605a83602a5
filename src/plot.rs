use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::data::model::Table;

/// Errors that can occur during plot generation.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("invalid plot data: {0}")]
    InvalidData(String),
}

/// Render a column's numeric values against row index as a line chart,
/// saved as a 1200x800 PNG. Non-numeric cells are skipped; their row
/// indices still count on the x-axis.
pub fn plot_column(
    table: &Table,
    column: &str,
    title: &str,
    output_path: &Path,
) -> Result<(), PlotError> {
    if !table.has_column(column) {
        return Err(PlotError::InvalidData(format!("no column '{column}'")));
    }

    let points: Vec<(f64, f64)> = table
        .column_values(column)
        .enumerate()
        .filter_map(|(i, v)| v.as_f64().map(|y| (i as f64, y)))
        .collect();

    if points.is_empty() {
        return Err(PlotError::InvalidData(format!(
            "column '{column}' has nothing to plot"
        )));
    }

    let y_min = points.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = points
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    // Pad a flat series so the axis range stays non-degenerate
    let (y_min, y_max) = if (y_max - y_min).abs() < f64::EPSILON {
        (y_min - 1.0, y_max + 1.0)
    } else {
        (y_min, y_max)
    };

    let x_max = (table.len().saturating_sub(1)) as f64;
    let x_max = if x_max > 0.0 { x_max } else { 1.0 };

    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&drawing_area)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Row")
        .y_desc(column)
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    log::info!("wrote plot to {}", output_path.display());
    Ok(())
}
