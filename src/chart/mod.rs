//! Chart configuration: turn measurements, benchmarks and axis flags into a [`ChartSpec`].
//!
//! - One numeric domain shared by all axes (snapped to tens, padded)
//! - One shared left axis, or one/two dedicated right axes tinted with their series color
//! - Two series with fixed colors and optional benchmark markers
//! - Slider + inside zoom over the category axis and all value axes together
//!
//! [`compute_chart_spec`] is pure: identical inputs give identical output, empty input gives a
//! well-defined spec.

pub mod axes;
pub mod echarts;
pub mod scale;
pub mod series;
pub mod types;
pub mod zoom;

pub use scale::Domain;
pub use types::{
    AxisPosition, AxisSpec, ChartSpec, Color, DEFAULT_TITLE, SeriesSpec, ZoomDimension, ZoomKind,
    ZoomRegion,
};

use crate::models::{AxisAssignment, Benchmarks, Measurement, SeriesId};

/// Derive the complete chart specification.
pub fn compute_chart_spec(
    measurements: &[Measurement],
    benchmarks: &Benchmarks,
    assignment: &AxisAssignment,
) -> ChartSpec {
    let total_etp = series::values(measurements, SeriesId::TotalEtp);
    let etp_ro = series::values(measurements, SeriesId::EtpRo);
    let domain = scale::compute_domain(&total_etp, &etp_ro, benchmarks, assignment);
    let layout = axes::layout_axes(assignment, &domain);

    log::debug!(
        "chart spec: {} points, {} axes, domain {}..{}",
        measurements.len(),
        layout.axes.len(),
        domain.min,
        domain.max
    );

    ChartSpec {
        title: DEFAULT_TITLE.to_string(),
        categories: series::categories(measurements),
        series: series::assemble_series(measurements, benchmarks, &layout),
        zoom: zoom::zoom_regions(layout.axes.len()),
        axes: layout.axes,
    }
}
