use anyhow::anyhow;
use etp_report::chart::DEFAULT_TITLE;
use etp_report::{AxisAssignment, Benchmarks, Measurement, ReportSession, SeriesId};

fn rows() -> Vec<Measurement> {
    vec![
        Measurement::new("2024-03-01T00:00:00.000Z", 80.0, 60.0),
        Measurement::new("2024-03-02T00:00:00.000Z", 84.0, 57.5),
    ]
}

#[test]
fn new_session_is_empty_with_one_shared_axis() {
    let s = ReportSession::new();
    assert!(s.measurements().is_empty());
    assert_eq!(s.benchmarks(), Benchmarks::default());
    assert_eq!(s.axis_assignment(), AxisAssignment::default());
    assert!(s.chart_spec().is_empty());
    assert_eq!(s.chart_spec().axes.len(), 1);
    assert_eq!(s.chart_spec().title, DEFAULT_TITLE);
}

#[test]
fn successful_load_refreshes_the_spec() {
    let mut s = ReportSession::new();
    s.load(Ok(rows())).unwrap();
    assert_eq!(s.measurements().len(), 2);
    assert_eq!(s.chart_spec().categories, vec!["2024-03-01", "2024-03-02"]);
}

#[test]
fn failed_load_empties_measurements_and_returns_the_error() {
    let mut s = ReportSession::new();
    s.load(Ok(rows())).unwrap();
    let err = s.load(Err(anyhow!("connection refused"))).unwrap_err();
    assert!(err.to_string().contains("connection refused"));
    assert!(s.measurements().is_empty());
    assert!(s.chart_spec().is_empty());
    assert_eq!(s.chart_spec().series.len(), 2);
}

#[test]
fn benchmarks_are_replaced_wholesale() {
    let mut s = ReportSession::new();
    s.load(Ok(rows())).unwrap();
    s.set_benchmarks(Benchmarks {
        total_etp: Some(85.0),
        etp_ro: Some(55.0),
    });
    s.set_benchmarks(Benchmarks {
        total_etp: None,
        etp_ro: Some(50.0),
    });
    let spec = s.chart_spec();
    assert_eq!(spec.series[0].benchmark_line, None);
    assert_eq!(spec.series[1].benchmark_line, Some(50.0));
}

#[test]
fn toggle_twice_restores_the_spec() {
    let mut s = ReportSession::new().with_title("Plant 3");
    s.load(Ok(rows())).unwrap();
    let before = s.chart_spec().clone();

    s.toggle_dedicated(SeriesId::TotalEtp);
    assert!(s.axis_assignment().total_etp);
    assert_eq!(s.chart_spec().axes[0].dedicated_to, Some(SeriesId::TotalEtp));

    s.toggle_dedicated(SeriesId::TotalEtp);
    assert_eq!(s.chart_spec(), &before);
    assert_eq!(s.chart_spec().title, "Plant 3");
}

#[test]
fn axis_assignment_applies_both_flags() {
    let mut s = ReportSession::new();
    s.load(Ok(rows())).unwrap();
    s.set_axis_assignment(AxisAssignment {
        total_etp: true,
        etp_ro: true,
    });
    assert_eq!(s.chart_spec().axes.len(), 2);
    s.set_axis_assignment(AxisAssignment {
        total_etp: false,
        etp_ro: true,
    });
    assert_eq!(s.chart_spec().axes.len(), 1);
    assert_eq!(s.chart_spec().axes[0].dedicated_to, Some(SeriesId::EtpRo));
}
