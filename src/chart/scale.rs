//! Value-domain computation shared by every Y axis.

use serde::Serialize;

use crate::models::{AxisAssignment, Benchmarks};

/// Fixed distance between Y gridlines.
pub const TICK_INTERVAL: f64 = 20.0;
/// Bounds snap to multiples of this.
pub const SNAP: f64 = 10.0;
/// Headroom added on both ends with a single shared axis.
pub const SHARED_PADDING: f64 = 10.0;
/// Headroom when at least one series has its own axis; axis names need the room.
pub const DEDICATED_PADDING: f64 = 20.0;

/// Numeric range and tick spacing reused verbatim by all axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    pub interval: f64,
}

/// Padding for the current axis assignment.
pub fn padding_for(assignment: &AxisAssignment) -> f64 {
    if assignment.any_dedicated() {
        DEDICATED_PADDING
    } else {
        SHARED_PADDING
    }
}

/// Derive the shared domain from both series and both benchmarks.
///
/// An absent benchmark counts as `0` toward both bounds, and an empty series has min and max `0`.
/// This keeps zero inside the domain whenever either benchmark is unset.
pub fn compute_domain(
    total_etp: &[f64],
    etp_ro: &[f64],
    benchmarks: &Benchmarks,
    assignment: &AxisAssignment,
) -> Domain {
    let bounds = [
        extent(total_etp),
        extent(etp_ro),
        point(benchmarks.total_etp.unwrap_or(0.0)),
        point(benchmarks.etp_ro.unwrap_or(0.0)),
    ];
    let raw_min = bounds.iter().map(|b| b.0).fold(f64::INFINITY, f64::min);
    let raw_max = bounds.iter().map(|b| b.1).fold(f64::NEG_INFINITY, f64::max);

    let padding = padding_for(assignment);
    Domain {
        min: (raw_min / SNAP).floor() * SNAP - padding,
        max: (raw_max / SNAP).ceil() * SNAP + padding,
        interval: TICK_INTERVAL,
    }
}

fn point(v: f64) -> (f64, f64) {
    (v, v)
}

/// `(min, max)` of the values, `(0, 0)` when there are none.
fn extent(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}
