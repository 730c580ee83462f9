//! Session state owned by one report view.
//!
//! The session is the single owner of measurements, benchmarks and axis flags. Every mutation
//! replaces the relevant state wholesale and recomputes the [`ChartSpec`] before returning, so
//! the spec held here always reflects the latest inputs.

use anyhow::Result;

use crate::chart::{ChartSpec, compute_chart_spec};
use crate::models::{AxisAssignment, Benchmarks, Measurement, SeriesId};

#[derive(Debug, Clone)]
pub struct ReportSession {
    measurements: Vec<Measurement>,
    benchmarks: Benchmarks,
    assignment: AxisAssignment,
    title: Option<String>,
    spec: ChartSpec,
}

impl Default for ReportSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSession {
    /// Empty session: no data, no benchmarks, one shared axis.
    pub fn new() -> Self {
        let benchmarks = Benchmarks::default();
        let assignment = AxisAssignment::default();
        Self {
            spec: compute_chart_spec(&[], &benchmarks, &assignment),
            measurements: Vec::new(),
            benchmarks,
            assignment,
            title: None,
        }
    }

    /// Custom chart title applied to every recomputed spec.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.recompute();
        self
    }

    /// Apply the outcome of a measurement fetch.
    ///
    /// On failure the measurement set is emptied (never left partially filled) and the error is
    /// handed back for display.
    pub fn load(&mut self, outcome: Result<Vec<Measurement>>) -> Result<()> {
        match outcome {
            Ok(measurements) => {
                log::info!("loaded {} measurements", measurements.len());
                self.measurements = measurements;
                self.recompute();
                Ok(())
            }
            Err(err) => {
                log::warn!("measurement fetch failed, showing an empty chart: {err:#}");
                self.measurements.clear();
                self.recompute();
                Err(err)
            }
        }
    }

    /// Replace both benchmark values at once.
    pub fn set_benchmarks(&mut self, benchmarks: Benchmarks) {
        self.benchmarks = benchmarks;
        self.recompute();
    }

    /// Replace both axis flags at once.
    pub fn set_axis_assignment(&mut self, assignment: AxisAssignment) {
        self.assignment = assignment;
        self.recompute();
    }

    /// Flip the dedicated-axis flag of one series.
    pub fn toggle_dedicated(&mut self, series: SeriesId) {
        let flipped = !self.assignment.is_dedicated(series);
        self.set_axis_assignment(self.assignment.with(series, flipped));
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn benchmarks(&self) -> Benchmarks {
        self.benchmarks
    }

    pub fn axis_assignment(&self) -> AxisAssignment {
        self.assignment
    }

    /// Spec for the current inputs.
    pub fn chart_spec(&self) -> &ChartSpec {
        &self.spec
    }

    fn recompute(&mut self) {
        let spec = compute_chart_spec(&self.measurements, &self.benchmarks, &self.assignment);
        self.spec = match &self.title {
            Some(title) => spec.with_title(title.clone()),
            None => spec,
        };
    }
}
