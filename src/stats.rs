use crate::models::{Benchmarks, Measurement, SeriesId};
use serde::{Deserialize, Serialize};

/// Summary statistics for one series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub series: SeriesId,
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Value of the last record in source order.
    pub latest: Option<f64>,
    /// Points strictly below the series' benchmark; `None` when no benchmark is set.
    pub below_benchmark: Option<usize>,
}

/// Compute statistics for both series, in [`SeriesId::ALL`] order.
pub fn series_summary(points: &[Measurement], benchmarks: &Benchmarks) -> Vec<Summary> {
    SeriesId::ALL
        .into_iter()
        .map(|series| {
            let latest = points.last().map(|m| m.value(series));
            let mut vals: Vec<f64> = points.iter().map(|m| m.value(series)).collect();
            let below_benchmark = benchmarks
                .get(series)
                .map(|b| vals.iter().filter(|v| **v < b).count());

            vals.sort_by(|a, b| a.total_cmp(b));
            let count = vals.len();
            let min = vals.first().cloned();
            let max = vals.last().cloned();
            let mean = if count > 0 {
                Some(vals.iter().copied().sum::<f64>() / count as f64)
            } else {
                None
            };
            let median = if count == 0 {
                None
            } else if count % 2 == 1 {
                Some(vals[count / 2])
            } else {
                Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
            };
            Summary {
                series,
                count,
                min,
                max,
                mean,
                median,
                latest,
                below_benchmark,
            }
        })
        .collect()
}
