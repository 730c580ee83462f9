//! Series assembly: values, colors, axis bindings and benchmark markers.

use crate::models::{Benchmarks, Measurement, SeriesId, date_label};

use super::axes::AxisLayout;
use super::types::{Color, SeriesSpec};

/// Microsoft Office (2013+) chart palette, first two entries: blue (#4472C4), orange (#ED7D31).
const OFFICE_BLUE: Color = Color::new(68, 114, 196);
const OFFICE_ORANGE: Color = Color::new(237, 125, 49);

/// Fixed color per series identity.
#[inline]
pub fn series_color(series: SeriesId) -> Color {
    match series {
        SeriesId::TotalEtp => OFFICE_BLUE,
        SeriesId::EtpRo => OFFICE_ORANGE,
    }
}

/// One date-only label per measurement.
pub fn categories(measurements: &[Measurement]) -> Vec<String> {
    measurements.iter().map(|m| date_label(&m.date)).collect()
}

/// Values of one series in source order.
pub fn values(measurements: &[Measurement], series: SeriesId) -> Vec<f64> {
    measurements.iter().map(|m| m.value(series)).collect()
}

/// Both series, in [`SeriesId::ALL`] order.
pub fn assemble_series(
    measurements: &[Measurement],
    benchmarks: &Benchmarks,
    layout: &AxisLayout,
) -> Vec<SeriesSpec> {
    SeriesId::ALL
        .into_iter()
        .map(|id| SeriesSpec {
            id,
            name: id.label().to_string(),
            values: values(measurements, id),
            axis_index: layout.axis_index(id),
            color: series_color(id),
            benchmark_line: benchmarks.get(id),
        })
        .collect()
}
