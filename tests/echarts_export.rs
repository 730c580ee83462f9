use etp_report::chart::echarts::to_option;
use etp_report::{AxisAssignment, Benchmarks, Measurement, compute_chart_spec};

fn rows() -> Vec<Measurement> {
    vec![
        Measurement::new("2024-01-01T00:00:00.000Z", 80.0, 60.0),
        Measurement::new("2024-01-02T00:00:00.000Z", 81.0, 62.0),
    ]
}

#[test]
fn single_axis_is_still_an_array() {
    let spec = compute_chart_spec(&rows(), &Benchmarks::default(), &AxisAssignment::default());
    let opt = to_option(&spec);
    let y = opt["yAxis"].as_array().expect("yAxis array");
    assert_eq!(y.len(), 1);
    assert_eq!(y[0]["type"], "value");
    assert_eq!(y[0]["position"], "left");
    assert!(y[0].get("name").is_none());
    assert!(y[0]["axisLine"].get("lineStyle").is_none());
    assert_eq!(opt["xAxis"]["type"], "category");
    assert_eq!(opt["xAxis"]["data"][1], "2024-01-02");
    assert_eq!(opt["tooltip"]["trigger"], "axis");
}

#[test]
fn mark_line_only_for_present_benchmarks() {
    let spec = compute_chart_spec(
        &rows(),
        &Benchmarks {
            total_etp: None,
            etp_ro: Some(65.0),
        },
        &AxisAssignment::default(),
    );
    let opt = to_option(&spec);
    let series = opt["series"].as_array().unwrap();
    assert!(series[0].get("markLine").is_none());
    assert_eq!(series[1]["markLine"]["data"][0]["yAxis"], 65.0);
    assert_eq!(series[1]["type"], "line");
    assert_eq!(opt["legend"]["data"][1], "ETP RO Recovery(%)");
}

#[test]
fn dedicated_axes_and_zoom_indices() {
    let spec = compute_chart_spec(
        &rows(),
        &Benchmarks::default(),
        &AxisAssignment {
            total_etp: true,
            etp_ro: true,
        },
    );
    let opt = to_option(&spec);
    let y = opt["yAxis"].as_array().unwrap();
    assert_eq!(y.len(), 2);
    assert_eq!(y[0]["name"], "Total ETP");
    assert_eq!(y[1]["name"], "ETP RO");
    assert_eq!(y[1]["position"], "right");
    assert_eq!(y[1]["offset"], 60);
    assert_eq!(y[0]["axisLine"]["lineStyle"]["color"], "#4472C4");
    assert_eq!(opt["series"][1]["yAxisIndex"], 1);

    let zoom = opt["dataZoom"].as_array().unwrap();
    assert_eq!(zoom.len(), 4);
    let y_zoom: Vec<_> = zoom.iter().filter(|z| z.get("yAxisIndex").is_some()).collect();
    assert_eq!(y_zoom.len(), 2);
    for z in y_zoom {
        assert_eq!(z["yAxisIndex"], serde_json::json!([0, 1]));
    }
    assert!(zoom.iter().any(|z| z["type"] == "inside"));
}
