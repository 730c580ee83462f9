use super::types::{ZoomDimension, ZoomKind, ZoomRegion};

/// Zoom controls for a chart with `axis_count` value axes.
///
/// Slider and inside controls cover the same scope. The value-axis controls list every axis,
/// so two axes always pan and zoom together.
pub fn zoom_regions(axis_count: usize) -> Vec<ZoomRegion> {
    let value_axes: Vec<usize> = (0..axis_count.max(1)).collect();
    [ZoomKind::Slider, ZoomKind::Inside]
        .into_iter()
        .flat_map(|kind| {
            [
                full_range(kind, ZoomDimension::X, vec![0]),
                full_range(kind, ZoomDimension::Y, value_axes.clone()),
            ]
        })
        .collect()
}

fn full_range(kind: ZoomKind, dimension: ZoomDimension, axis_indices: Vec<usize>) -> ZoomRegion {
    ZoomRegion {
        kind,
        dimension,
        axis_indices,
        start: 0.0,
        end: 100.0,
    }
}
