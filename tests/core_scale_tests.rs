use approx::assert_relative_eq;
use scatter_brush::core::{LinearScale, SqrtScale};

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.map(original);
    let recovered = scale.invert(px);

    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn inverted_range_plots_larger_values_higher() {
    let scale = LinearScale::new((0.0, 50.0), (350.0, 0.0)).expect("valid scale");

    assert_eq!(scale.map(0.0), 350.0);
    assert_eq!(scale.map(50.0), 0.0);
    assert!(scale.map(40.0) < scale.map(10.0));
}

#[test]
fn nice_keeps_already_round_extent() {
    let scale = LinearScale::new((1.0, 5.0), (0.0, 500.0))
        .expect("valid scale")
        .nice(10);
    assert_eq!(scale.domain(), (1.0, 5.0));
}

#[test]
fn nice_extends_ragged_extent_to_round_bounds() {
    let scale = LinearScale::new((1613.0, 5140.0), (0.0, 500.0))
        .expect("valid scale")
        .nice(10);
    assert_eq!(scale.domain(), (1500.0, 5500.0));

    let scale = LinearScale::new((9.0, 46.6), (0.0, 500.0))
        .expect("valid scale")
        .nice(10);
    assert_eq!(scale.domain(), (5.0, 50.0));
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let scale = LinearScale::new((7.0, 7.0), (0.0, 200.0))
        .expect("degenerate domain is allowed")
        .nice(10);
    assert_eq!(scale.domain(), (7.0, 7.0));
    assert_eq!(scale.map(7.0), 100.0);
    assert_eq!(scale.ticks(10), vec![7.0]);
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (0.0, f64::INFINITY)).is_err());
}

#[test]
fn ticks_cover_niced_domain() {
    let scale = LinearScale::new((1500.0, 5500.0), (0.0, 500.0)).expect("valid scale");
    let ticks = scale.ticks(10);
    assert_eq!(ticks.first().copied(), Some(1500.0));
    assert_eq!(ticks.last().copied(), Some(5500.0));
    assert_eq!(ticks.len(), 9);
    assert_eq!(scale.tick_precision(10), 0);
}

#[test]
fn sqrt_scale_grows_area_linearly() {
    let scale = SqrtScale::new((0.0, 100.0), (0.0, 10.0)).expect("valid scale");
    assert_relative_eq!(scale.map(25.0), 5.0, epsilon = 1e-12);
    assert_relative_eq!(scale.map(100.0), 10.0, epsilon = 1e-12);

    let sized = SqrtScale::new((3.0, 9.0), (4.0, 12.0)).expect("valid scale");
    assert_eq!(sized.map(3.0), 4.0);
    assert_relative_eq!(sized.map(9.0), 12.0, epsilon = 1e-12);
    assert!(sized.map(3.0) < sized.map(9.0));
}
