use etp_report::chart::axes::DEDICATED_AXIS_OFFSET;
use etp_report::chart::{AxisPosition, ChartSpec};
use etp_report::{AxisAssignment, Benchmarks, Measurement, SeriesId, compute_chart_spec};

fn sample() -> Vec<Measurement> {
    vec![
        Measurement::new("2024-01-01", 80.0, 60.0),
        Measurement::new("2024-01-02", 82.5, 58.0),
        Measurement::new("2024-01-03", 79.0, 63.5),
    ]
}

fn spec_for(total_etp: bool, etp_ro: bool) -> ChartSpec {
    compute_chart_spec(
        &sample(),
        &Benchmarks::default(),
        &AxisAssignment { total_etp, etp_ro },
    )
}

fn bindings(spec: &ChartSpec) -> (usize, usize) {
    let idx = |id| spec.series.iter().find(|s| s.id == id).unwrap().axis_index;
    (idx(SeriesId::TotalEtp), idx(SeriesId::EtpRo))
}

#[test]
fn axis_table_matches_for_all_flag_combinations() {
    // (total_etp, etp_ro) -> (axis count, total_etp idx, etp_ro idx)
    let table = [
        ((false, false), (1, 0, 0)),
        ((true, false), (1, 0, 0)),
        ((false, true), (1, 0, 0)),
        ((true, true), (2, 0, 1)),
    ];
    for ((a, b), (count, ia, ib)) in table {
        let spec = spec_for(a, b);
        assert_eq!(spec.axes.len(), count, "axis count for ({a}, {b})");
        assert_eq!(bindings(&spec), (ia, ib), "bindings for ({a}, {b})");
    }
}

#[test]
fn shared_axis_is_left_and_untinted() {
    let spec = spec_for(false, false);
    let axis = &spec.axes[0];
    assert_eq!(axis.position, AxisPosition::Left);
    assert_eq!(axis.offset, 0);
    assert!(axis.color_hint.is_none());
    assert!(axis.name.is_none());
    assert!(axis.dedicated_to.is_none());
}

#[test]
fn single_dedicated_axis_belongs_to_the_flagged_series() {
    for series in SeriesId::ALL {
        let spec = compute_chart_spec(
            &sample(),
            &Benchmarks::default(),
            &AxisAssignment::default().with(series, true),
        );
        let axis = &spec.axes[0];
        let color = spec.series.iter().find(|s| s.id == series).unwrap().color;
        assert_eq!(axis.position, AxisPosition::Right);
        assert_eq!(axis.offset, 0);
        assert_eq!(axis.dedicated_to, Some(series));
        assert_eq!(axis.color_hint, Some(color));
        assert_eq!(axis.name.as_deref(), Some(series.axis_name()));
    }
}

#[test]
fn two_dedicated_axes_are_right_with_the_second_offset() {
    let spec = spec_for(true, true);
    let (first, second) = (&spec.axes[0], &spec.axes[1]);
    assert_eq!(first.position, AxisPosition::Right);
    assert_eq!(second.position, AxisPosition::Right);
    assert_eq!(first.offset, 0);
    assert_eq!(second.offset, DEDICATED_AXIS_OFFSET);
    assert_eq!(first.dedicated_to, Some(SeriesId::TotalEtp));
    assert_eq!(second.dedicated_to, Some(SeriesId::EtpRo));
    assert_ne!(first.color_hint, second.color_hint);
}

#[test]
fn all_axes_share_one_domain() {
    for (a, b) in [(false, false), (true, false), (false, true), (true, true)] {
        let spec = spec_for(a, b);
        let first = &spec.axes[0];
        for axis in &spec.axes {
            assert_eq!(
                (axis.min, axis.max, axis.tick_interval),
                (first.min, first.max, first.tick_interval)
            );
        }
    }
}

#[test]
fn axis_for_resolves_bound_axis() {
    let spec = spec_for(true, true);
    let ro = spec.axis_for(SeriesId::EtpRo).unwrap();
    assert_eq!(ro.dedicated_to, Some(SeriesId::EtpRo));
}
