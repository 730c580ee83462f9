//! Output types of the chart-configuration engine.
//!
//! A [`ChartSpec`] is an ephemeral, renderer-neutral description of one chart. It is rebuilt
//! from scratch on every input change and has no identity of its own.

use serde::{Serialize, Serializer};

use crate::models::SeriesId;

/// Title used when the caller does not supply one.
pub const DEFAULT_TITLE: &str = "Total ETP Recovery & Total ETP RO Recovery %";

/// Complete chart description consumed by a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    /// One date-only label per measurement, in source order.
    pub categories: Vec<String>,
    /// Always one or two entries; series refer to them by index.
    pub axes: Vec<AxisSpec>,
    pub series: Vec<SeriesSpec>,
    pub zoom: Vec<ZoomRegion>,
}

impl ChartSpec {
    /// Replace the title, keeping everything else.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Axis a series is bound to.
    pub fn axis_for(&self, series: SeriesId) -> Option<&AxisSpec> {
        let s = self.series.iter().find(|s| s.id == series)?;
        self.axes.get(s.axis_index)
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Which side of the plot an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
}

/// One Y axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    /// Series label for a dedicated axis; the shared axis is unnamed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Series this axis is dedicated to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_to: Option<SeriesId>,
    pub min: f64,
    pub max: f64,
    pub tick_interval: f64,
    pub position: AxisPosition,
    /// Horizontal offset (px) away from the plot edge.
    pub offset: u32,
    /// Axis line tint; `None` draws a neutral line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_hint: Option<Color>,
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSpec {
    pub id: SeriesId,
    pub name: String,
    pub values: Vec<f64>,
    pub axis_index: usize,
    pub color: Color,
    /// Y value of the horizontal benchmark marker, drawn against `axis_index`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark_line: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomKind {
    /// Explicit slider control drawn next to the axis.
    Slider,
    /// Wheel/drag zoom on the plot area itself.
    Inside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDimension {
    /// Category (time) axis.
    X,
    /// Value axes.
    Y,
}

/// An interactive zoom/pan control. All axes listed in `axis_indices` move together.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomRegion {
    pub kind: ZoomKind,
    pub dimension: ZoomDimension,
    pub axis_indices: Vec<usize>,
    /// Visible window start, percent of the full range.
    pub start: f64,
    /// Visible window end, percent of the full range.
    pub end: f64,
}

impl ZoomRegion {
    /// Map the percent window onto `[lo, hi]`.
    pub fn window(&self, lo: f64, hi: f64) -> (f64, f64) {
        let span = hi - lo;
        let start = self.start.clamp(0.0, 100.0) / 100.0;
        let end = self.end.clamp(0.0, 100.0) / 100.0;
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        (lo + span * start, lo + span * end)
    }
}

/// 8-bit RGB color, serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_serializes_as_hex() {
        let c = Color::new(68, 114, 196);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#4472C4\"");
    }

    #[test]
    fn zoom_window_maps_percentages() {
        let z = ZoomRegion {
            kind: ZoomKind::Slider,
            dimension: ZoomDimension::Y,
            axis_indices: vec![0],
            start: 25.0,
            end: 75.0,
        };
        assert_eq!(z.window(0.0, 100.0), (25.0, 75.0));
        assert_eq!(z.window(-10.0, 10.0), (-5.0, 5.0));
    }
}
