// src/geometry/tests.rs

use super::{CubicBezier, Point};
use test_log::test;

fn curve(points: [(i32, i32); 4]) -> CubicBezier {
    CubicBezier::new(points.map(|(x, y)| Point::new(x, y)))
}

#[test]
fn endpoints_are_exact_for_arbitrary_control_points() {
    let c = curve([(100, 100), (150, 50), (250, 50), (300, 100)]);
    assert_eq!(c.point_at(0.0), (100.0, 100.0));
    assert_eq!(c.point_at(1.0), (300.0, 100.0));

    let c = curve([(-7, 13), (0, 0), (9999, -42), (3, 2)]);
    assert_eq!(c.point_at(0.0), (-7.0, 13.0));
    assert_eq!(c.point_at(1.0), (3.0, 2.0));
}

#[test]
fn degenerate_curve_collapses_to_a_point() {
    let c = curve([(42, 17); 4]);
    for i in 0..=100 {
        let u = i as f64 / 100.0;
        let (x, y) = c.point_at(u);
        assert!((x - 42.0).abs() < 1e-9, "x at u={} was {}", u, x);
        assert!((y - 17.0).abs() < 1e-9, "y at u={} was {}", u, y);
    }
}

#[test]
fn midpoint_matches_bernstein_expansion() {
    // At u = 0.5 the basis weights are 1/8, 3/8, 3/8, 1/8.
    let c = curve([(0, 0), (8, 0), (8, 8), (0, 8)]);
    let (x, y) = c.point_at(0.5);
    assert!((x - 6.0).abs() < 1e-9);
    assert!((y - 4.0).abs() < 1e-9);
}

#[test]
fn evaluation_is_deterministic() {
    let c = curve([(100, 100), (150, 50), (250, 50), (300, 100)]);
    assert_eq!(c.sample(0.001), c.sample(0.001));
}

#[test]
fn sample_count_matches_step() {
    let c = curve([(0, 0), (1, 1), (2, 2), (3, 3)]);
    // step 0.0001 -> 10,001 samples, the default density.
    assert_eq!(c.sample(0.0001).len(), 10_001);
    assert_eq!(c.sample(0.01).len(), 101);
}

#[test]
fn pathological_steps_are_clamped_instead_of_panicking() {
    let c = curve([(100, 100), (150, 50), (250, 50), (300, 100)]);

    // Zero, negative, and non-finite steps degenerate to a single segment.
    for step in [0.0, -0.5, f64::NAN, f64::INFINITY] {
        let samples = c.sample(step);
        assert_eq!(samples.len(), 2, "step {} should yield one segment", step);
        assert_eq!(samples[0], (100.0, 100.0));
        assert_eq!(samples[1], (300.0, 100.0));
    }

    // A tiny positive step is capped rather than allocating per 1/step.
    let samples = c.sample(1e-12);
    assert_eq!(samples.len(), super::MAX_SEGMENTS + 1);
    assert_eq!(samples[0], (100.0, 100.0));
    assert_eq!(*samples.last().unwrap(), (300.0, 100.0));
}

#[test]
fn sample_sequence_starts_at_p0_and_ends_at_p3() {
    let c = curve([(100, 100), (150, 50), (250, 50), (300, 100)]);
    let samples = c.sample(0.001);
    assert_eq!(samples[0], (100.0, 100.0));
    assert_eq!(*samples.last().unwrap(), (300.0, 100.0));
}

#[test]
fn distance_to_is_euclidean() {
    let p = Point::new(100, 100);
    assert_eq!(p.distance_to(100, 100), 0.0);
    assert_eq!(p.distance_to(103, 104), 5.0);
    assert!((p.distance_to(103, 101) - 10.0f64.sqrt()).abs() < 1e-12);
}
