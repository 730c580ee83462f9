//! etp_report
//!
//! A lightweight Rust library for charting water-treatment (ETP) recovery measurements.
//! Pairs with the `etp-report` CLI and the `etp-report-gui` desktop app.
//!
//! ### Features
//! - Fetch measurements from the store's HTTP endpoint, or load them from CSV/JSON
//! - Derive a complete chart specification (axes, series, benchmarks, zoom) with
//!   [`compute_chart_spec`]
//! - Export the spec as JSON or as an ECharts option; render it to SVG/PNG
//! - Quick per-series statistics (min, max, mean, median)
//!
//! ### Example
//! ```no_run
//! use etp_report::{AxisAssignment, Benchmarks, Client, compute_chart_spec};
//!
//! let client = Client::new("http://localhost:3000");
//! let rows = client.fetch_measurements()?;
//! let benchmarks = Benchmarks { total_etp: Some(85.0), etp_ro: None };
//! let spec = compute_chart_spec(&rows, &benchmarks, &AxisAssignment::default());
//! etp_report::render::plot_spec(&spec, "recovery.svg", 1000, 600, "en")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod benchmark;
pub mod chart;
pub mod config;
pub mod models;
pub mod render;
pub mod session;
pub mod stats;
pub mod storage;

pub use api::Client;
pub use chart::{ChartSpec, compute_chart_spec};
pub use models::{AxisAssignment, Benchmarks, Measurement, SeriesId};
pub use session::ReportSession;
