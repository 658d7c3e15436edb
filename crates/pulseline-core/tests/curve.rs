// File: crates/pulseline-core/tests/curve.rs
// Purpose: Validate the step-smoothed control-point rule and bezier
// evaluation.

use pulseline_core::{control_points, point_on_curve, Point};

#[test]
fn control_points_sit_on_the_horizontal_midpoint() {
    let p0 = Point::new(100.0, 40.0);
    let p1 = Point::new(200.0, 90.0);
    let (cp1, cp2) = control_points(p0, p1);
    assert_eq!(cp1, Point::new(150.0, 40.0), "cp1 holds the start's y");
    assert_eq!(cp2, Point::new(150.0, 90.0), "cp2 holds the end's y");
}

#[test]
fn control_points_handle_descending_segments() {
    let p0 = Point::new(0.0, 80.0);
    let p1 = Point::new(50.0, 10.0);
    let (cp1, cp2) = control_points(p0, p1);
    assert_eq!(cp1, Point::new(25.0, 80.0));
    assert_eq!(cp2, Point::new(25.0, 10.0));
}

#[test]
fn curve_is_exact_at_the_endpoints() {
    let p0 = Point::new(0.0, 13.7);
    let p1 = Point::new(10.0, -4.0);
    let p2 = Point::new(20.0, 55.0);
    let p3 = Point::new(30.0, 21.3);
    assert_eq!(point_on_curve(0.0, p0, p1, p2, p3), p0.y);
    assert_eq!(point_on_curve(1.0, p0, p1, p2, p3), p3.y);
}

#[test]
fn midpoint_of_a_step_segment_is_the_y_average() {
    // With both control points on the midpoint, t = 0.5 lands exactly
    // between the endpoint heights.
    let p0 = Point::new(0.0, 0.0);
    let p3 = Point::new(100.0, 40.0);
    let (p1, p2) = control_points(p0, p3);
    let y = point_on_curve(0.5, p0, p1, p2, p3);
    assert!((y - 20.0).abs() < 1e-12);
}

#[test]
fn curve_stays_between_the_endpoint_heights() {
    let p0 = Point::new(0.0, 10.0);
    let p3 = Point::new(100.0, 90.0);
    let (p1, p2) = control_points(p0, p3);
    for i in 0..=100 {
        let t = i as f64 / 100.0;
        let y = point_on_curve(t, p0, p1, p2, p3);
        assert!((10.0..=90.0).contains(&y), "t={t} escaped: {y}");
    }
}
