use etp_report::chart::scale::{
    DEDICATED_PADDING, SHARED_PADDING, TICK_INTERVAL, compute_domain, padding_for,
};
use etp_report::{AxisAssignment, Benchmarks, Measurement, compute_chart_spec};
use proptest::prelude::*;

fn one_point() -> Vec<Measurement> {
    vec![Measurement::new("2024-01-01", 80.0, 60.0)]
}

#[test]
fn padding_grows_when_any_axis_is_dedicated() {
    assert_eq!(padding_for(&AxisAssignment::default()), SHARED_PADDING);
    assert_eq!(
        padding_for(&AxisAssignment {
            total_etp: true,
            etp_ro: false,
        }),
        DEDICATED_PADDING
    );
    assert_eq!(
        padding_for(&AxisAssignment {
            total_etp: true,
            etp_ro: true,
        }),
        DEDICATED_PADDING
    );
}

#[test]
fn empty_input_gives_symmetric_domain_around_zero() {
    let d = compute_domain(&[], &[], &Benchmarks::default(), &AxisAssignment::default());
    assert_eq!((d.min, d.max, d.interval), (-10.0, 10.0, TICK_INTERVAL));

    let d = compute_domain(
        &[],
        &[],
        &Benchmarks::default(),
        &AxisAssignment {
            total_etp: true,
            etp_ro: true,
        },
    );
    assert_eq!((d.min, d.max), (-20.0, 20.0));
}

#[test]
fn absent_benchmark_counts_as_zero() {
    let spec = compute_chart_spec(
        &one_point(),
        &Benchmarks {
            total_etp: Some(85.0),
            etp_ro: None,
        },
        &AxisAssignment::default(),
    );
    // min(80, 60, 85, 0) = 0 -> 0 - 10; max 85 -> 90 + 10
    assert_eq!(spec.axes[0].min, -10.0);
    assert_eq!(spec.axes[0].max, 100.0);

    // With both benchmarks present zero no longer participates.
    let spec = compute_chart_spec(
        &one_point(),
        &Benchmarks {
            total_etp: Some(85.0),
            etp_ro: Some(70.0),
        },
        &AxisAssignment::default(),
    );
    assert_eq!(spec.axes[0].min, 50.0);
    assert_eq!(spec.axes[0].max, 100.0);
}

#[test]
fn negative_benchmark_pulls_minimum_down_only_as_far_as_needed() {
    let spec = compute_chart_spec(
        &one_point(),
        &Benchmarks {
            total_etp: Some(-50.0),
            etp_ro: None,
        },
        &AxisAssignment::default(),
    );
    assert_eq!(spec.axes[0].min, -60.0);
    assert_eq!(spec.axes[0].max, 90.0);
}

#[test]
fn fractional_bounds_snap_outward_to_tens() {
    let d = compute_domain(
        &[-3.2, 41.7],
        &[12.0],
        &Benchmarks {
            total_etp: Some(5.0),
            etp_ro: Some(5.0),
        },
        &AxisAssignment::default(),
    );
    assert_eq!(d.min, -20.0);
    assert_eq!(d.max, 60.0);
}

fn measurement_sets() -> impl Strategy<Value = Vec<Measurement>> {
    prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (a, b))| Measurement::new(format!("2024-01-{:02}", i % 28 + 1), a, b))
            .collect()
    })
}

proptest! {
    #[test]
    fn domain_covers_every_plotted_and_benchmark_value(
        rows in measurement_sets(),
        total_bm in prop::option::of(-1_000.0f64..1_000.0),
        ro_bm in prop::option::of(-1_000.0f64..1_000.0),
        total_ded in any::<bool>(),
        ro_ded in any::<bool>(),
    ) {
        let benchmarks = Benchmarks {
            total_etp: total_bm,
            etp_ro: ro_bm,
        };
        let assignment = AxisAssignment {
            total_etp: total_ded,
            etp_ro: ro_ded,
        };
        let spec = compute_chart_spec(&rows, &benchmarks, &assignment);

        let all: Vec<f64> = rows
            .iter()
            .flat_map(|m| [m.total_etp, m.etp_ro])
            .chain(total_bm)
            .chain(ro_bm)
            .collect();
        let padding = padding_for(&assignment);

        for axis in &spec.axes {
            prop_assert!(axis.min.is_finite() && axis.max.is_finite());
            prop_assert!(axis.min < axis.max);
            for v in &all {
                prop_assert!(axis.min + padding <= *v + 1e-9);
                prop_assert!(axis.max - padding >= *v - 1e-9);
            }
            // Bounds sit on the 10-grid shifted by the padding.
            prop_assert_eq!(((axis.min + padding) / 10.0).fract(), 0.0);
            prop_assert_eq!(((axis.max - padding) / 10.0).fract(), 0.0);
        }
    }

    #[test]
    fn computation_is_idempotent(
        rows in measurement_sets(),
        total_bm in prop::option::of(-200.0f64..200.0),
        total_ded in any::<bool>(),
        ro_ded in any::<bool>(),
    ) {
        let benchmarks = Benchmarks {
            total_etp: total_bm,
            etp_ro: None,
        };
        let assignment = AxisAssignment {
            total_etp: total_ded,
            etp_ro: ro_ded,
        };
        let a = compute_chart_spec(&rows, &benchmarks, &assignment);
        let b = compute_chart_spec(&rows, &benchmarks, &assignment);
        prop_assert_eq!(a, b);
    }
}
