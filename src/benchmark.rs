//! Typed benchmark entry.
//!
//! The form holds raw text for both series. [`BenchmarkForm::submit`] either yields a complete
//! [`Benchmarks`] value or an error; nothing half-parsed ever reaches a session.

use thiserror::Error;

use crate::models::{Benchmarks, SeriesId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchmarkInputError {
    #[error("benchmark for {series} is not a number: {input:?}")]
    NotANumber { series: &'static str, input: String },
    #[error("benchmark for {series} must be finite")]
    NotFinite { series: &'static str },
    #[error("enter a benchmark for at least one series")]
    Empty,
}

/// Raw text of the benchmark dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkForm {
    pub total_etp: String,
    pub etp_ro: String,
}

impl BenchmarkForm {
    /// Pre-fill the form from current values.
    pub fn from_benchmarks(current: &Benchmarks) -> Self {
        let text = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
        Self {
            total_etp: text(current.total_etp),
            etp_ro: text(current.etp_ro),
        }
    }

    /// Validate both fields. At least one must hold a number; a blank field means "no benchmark".
    pub fn submit(&self) -> Result<Benchmarks, BenchmarkInputError> {
        let total_etp = parse_benchmark(SeriesId::TotalEtp, &self.total_etp)?;
        let etp_ro = parse_benchmark(SeriesId::EtpRo, &self.etp_ro)?;
        if total_etp.is_none() && etp_ro.is_none() {
            return Err(BenchmarkInputError::Empty);
        }
        Ok(Benchmarks { total_etp, etp_ro })
    }
}

/// Parse one field. Blank is `Ok(None)`.
pub fn parse_benchmark(series: SeriesId, input: &str) -> Result<Option<f64>, BenchmarkInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| BenchmarkInputError::NotANumber {
            series: series.axis_name(),
            input: trimmed.to_string(),
        })?;
    if !value.is_finite() {
        return Err(BenchmarkInputError::NotFinite {
            series: series.axis_name(),
        });
    }
    Ok(Some(value))
}
