//! Y-axis layout: how many axes, where they sit, and which series binds to which.
//!
//! | total_etp | etp_ro | axes                       | total_etp idx | etp_ro idx |
//! |-----------|--------|----------------------------|---------------|------------|
//! | false     | false  | shared (left)              | 0             | 0          |
//! | true      | false  | total_etp (right)          | 0             | 0          |
//! | false     | true   | etp_ro (right)             | 0             | 0          |
//! | true      | true   | total_etp, etp_ro (right)  | 0             | 1          |

use crate::models::{AxisAssignment, SeriesId};

use super::scale::Domain;
use super::series::series_color;
use super::types::{AxisPosition, AxisSpec};

/// Outward shift applied to each further right-hand axis.
pub const DEDICATED_AXIS_OFFSET: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub axes: Vec<AxisSpec>,
    /// Axis index per series, indexed in [`SeriesId::ALL`] order.
    bindings: [usize; 2],
}

impl AxisLayout {
    pub fn axis_index(&self, series: SeriesId) -> usize {
        match series {
            SeriesId::TotalEtp => self.bindings[0],
            SeriesId::EtpRo => self.bindings[1],
        }
    }
}

/// Build the axes for `assignment`, all spanning `domain`.
pub fn layout_axes(assignment: &AxisAssignment, domain: &Domain) -> AxisLayout {
    let dedicated: Vec<SeriesId> = SeriesId::ALL
        .into_iter()
        .filter(|s| assignment.is_dedicated(*s))
        .collect();

    if dedicated.is_empty() {
        return AxisLayout {
            axes: vec![shared_axis(domain)],
            bindings: [0, 0],
        };
    }

    let axes = dedicated
        .iter()
        .enumerate()
        .map(|(i, series)| dedicated_axis(*series, i, domain))
        .collect();

    // A series without its own axis reads off the first one.
    let bind = |series: SeriesId| dedicated.iter().position(|s| *s == series).unwrap_or(0);

    AxisLayout {
        axes,
        bindings: [bind(SeriesId::TotalEtp), bind(SeriesId::EtpRo)],
    }
}

fn shared_axis(domain: &Domain) -> AxisSpec {
    AxisSpec {
        name: None,
        dedicated_to: None,
        min: domain.min,
        max: domain.max,
        tick_interval: domain.interval,
        position: AxisPosition::Left,
        offset: 0,
        color_hint: None,
    }
}

fn dedicated_axis(series: SeriesId, slot: usize, domain: &Domain) -> AxisSpec {
    AxisSpec {
        name: Some(series.axis_name().to_string()),
        dedicated_to: Some(series),
        min: domain.min,
        max: domain.max,
        tick_interval: domain.interval,
        position: AxisPosition::Right,
        offset: DEDICATED_AXIS_OFFSET * slot as u32,
        color_hint: Some(series_color(series)),
    }
}
