use plotters::prelude::*;
use thiserror::Error;

use crate::domain::projection::NetworthProjectionData;
use crate::services::currency_format::group_digits;
use crate::services::goal_markers::goal_markers;
use crate::services::time_axis::month_label;

#[derive(Error, Debug)]
pub enum ProjectionPlotError {
    #[error("projection has no monthly values")]
    EmptyTrajectory,
    #[error("failed to render projection plot: {0}")]
    Plot(String),
}

/// Writes a PNG of the net worth trajectory with goal markers coloured by
/// tier.
pub fn write_projection_png(
    output_path: &str,
    projection: &NetworthProjectionData,
    title: &str,
) -> Result<(), ProjectionPlotError> {
    if projection.monthly_values.is_empty() {
        return Err(ProjectionPlotError::EmptyTrajectory);
    }

    let (min_y, max_y) = networth_range(projection);
    let max_x = projection.monthly_values.len().saturating_sub(1).max(1) as i32;

    let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ProjectionPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(100)
        .build_cartesian_2d(0..max_x, min_y..max_y)
        .map_err(|e| ProjectionPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Time")
        .y_desc("Net worth")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_labels(10)
        .x_label_formatter(&|month| {
            if *month < 0 {
                return String::new();
            }
            month_label(*month as usize)
        })
        .y_label_formatter(&|value| group_digits(*value))
        .draw()
        .map_err(|e| ProjectionPlotError::Plot(e.to_string()))?;

    let line_color = RGBColor(37, 99, 235);
    let baseline = min_y.max(0.0).min(max_y);
    chart
        .draw_series(
            AreaSeries::new(
                projection
                    .monthly_values
                    .iter()
                    .map(|value| (value.month as i32, value.total_networth)),
                baseline,
                line_color.mix(0.15),
            )
            .border_style(line_color.stroke_width(2)),
        )
        .map_err(|e| ProjectionPlotError::Plot(e.to_string()))?;

    for marker in goal_markers(projection) {
        let (r, g, b) = marker.tier.rgb();
        let color = RGBColor(r, g, b);
        chart
            .draw_series(std::iter::once(Circle::new(
                (marker.month as i32, marker.networth),
                7,
                color.filled(),
            )))
            .map_err(|e| ProjectionPlotError::Plot(e.to_string()))?
            .label(format!("{} ({})", marker.goal_name, marker.tier.description()))
            .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 16))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()
        .map_err(|e| ProjectionPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| ProjectionPlotError::Plot(e.to_string()))?;
    Ok(())
}

/// Y range with 10% headroom; always includes zero and is never empty.
fn networth_range(projection: &NetworthProjectionData) -> (f64, f64) {
    let (min, max) = projection
        .monthly_values
        .iter()
        .map(|value| value.total_networth)
        .filter(|value| value.is_finite())
        .fold((0.0_f64, 0.0_f64), |(min, max), value| (min.min(value), max.max(value)));
    let span = (max - min).max(1.0);
    let min = if min < 0.0 { min - span * 0.1 } else { 0.0 };
    (min, max + span * 0.1)
}
