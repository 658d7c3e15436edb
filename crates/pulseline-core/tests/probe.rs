// File: crates/pulseline-core/tests/probe.rs
// Purpose: Validate pointer-to-index location and on-curve probing,
// including the silent no-op edges.

mod common;

use common::{series_of, Op, RecordingSurface};
use pulseline_core::{
    control_points, locate, point_on_curve, probe_curve, project, Chart, PointerAction, Viewport,
};

fn viewport() -> Viewport {
    Viewport::new(300.0, 100.0)
}

#[test]
fn locate_never_returns_index_zero() {
    // Documented clamp floor: even a pointer at x = 0 resolves to index 1.
    assert_eq!(locate(0.0, 300.0, 2), Some(1));
    assert_eq!(locate(0.0, 300.0, 10), Some(1));
}

#[test]
fn locate_rounds_to_the_nearest_index() {
    // 5 points across 300px sit 75px apart.
    assert_eq!(locate(80.0, 300.0, 5), Some(1));
    assert_eq!(locate(140.0, 300.0, 5), Some(2));
    assert_eq!(locate(190.0, 300.0, 5), Some(3));
}

#[test]
fn locate_clamps_to_the_last_index() {
    assert_eq!(locate(299.0, 300.0, 3), Some(2));
    assert_eq!(locate(10_000.0, 300.0, 3), Some(2));
}

#[test]
fn locate_rejects_degenerate_series() {
    assert_eq!(locate(50.0, 300.0, 1), None);
    assert_eq!(locate(50.0, 300.0, 0), None);
}

#[test]
fn probe_evaluates_the_segment_under_the_pointer() {
    let points = project(&series_of(&[10.0, 20.0, 30.0]), viewport()).unwrap();
    // x = 200 lies past points[1].x = 150, so the probe walks the
    // [1, 2] segment with t = (200 - 150) / 150.
    let hit = probe_curve(&points, 200.0, 300.0).unwrap();
    assert_eq!(hit.index, 1);
    assert_eq!(hit.x, 200.0);

    let t = (200.0 - points[1].x) / (points[2].x - points[1].x);
    let (cp1, cp2) = control_points(points[1].position(), points[2].position());
    let expected = point_on_curve(t, points[1].position(), cp1, cp2, points[2].position());
    assert_eq!(hit.y, expected);
}

#[test]
fn probe_left_of_the_located_point_uses_the_previous_segment() {
    let points = project(&series_of(&[10.0, 20.0, 30.0]), viewport()).unwrap();
    // x = 130 rounds to index 1 but sits left of points[1].x = 150.
    let hit = probe_curve(&points, 130.0, 300.0).unwrap();
    assert_eq!(hit.index, 1);

    let t = 130.0 / 150.0;
    let (cp1, cp2) = control_points(points[0].position(), points[1].position());
    let expected = point_on_curve(t, points[0].position(), cp1, cp2, points[1].position());
    assert_eq!(hit.y, expected);
}

#[test]
fn probe_beyond_the_last_point_is_a_silent_no_op() {
    let points = project(&series_of(&[10.0, 20.0, 30.0]), viewport()).unwrap();
    // The pointer is at/past the last point's x and there is no neighbor
    // segment to the right.
    assert_eq!(probe_curve(&points, 300.0, 300.0), None);
    assert_eq!(probe_curve(&points, 450.0, 300.0), None);
}

#[test]
fn probe_needs_at_least_two_points() {
    let points = project(&series_of(&[10.0]), viewport()).unwrap();
    assert_eq!(probe_curve(&points, 0.0, 300.0), None);
}

#[test]
fn only_down_and_move_gestures_probe() {
    assert!(PointerAction::Down.probes());
    assert!(PointerAction::Move.probes());
    assert!(!PointerAction::Up.probes());
    assert!(!PointerAction::Other.probes());

    let mut chart = Chart::new(viewport());
    let mut surface = RecordingSurface::new();
    chart.set_series(&mut surface, &series_of(&[10.0, 20.0, 30.0])).unwrap();
    surface.reset();

    chart.pointer_event(&mut surface, 100.0, PointerAction::Up);
    assert!(surface.ops.is_empty(), "up must not redraw");

    chart.pointer_event(&mut surface, 100.0, PointerAction::Move);
    assert!(
        surface.count(|op| matches!(op, Op::Arc { .. })) == 1,
        "move draws the marker"
    );
}

#[test]
fn probe_hit_updates_the_displayed_value() {
    let mut chart = Chart::new(viewport());
    let mut surface = RecordingSurface::new();
    chart.set_series(&mut surface, &series_of(&[10.0, 20.5, 30.0])).unwrap();

    chart.pointer_event(&mut surface, 140.0, PointerAction::Down);
    assert_eq!(chart.displayed_value(), "20.50");
}

#[test]
fn probe_miss_leaves_state_untouched() {
    let mut chart = Chart::new(viewport());
    let mut surface = RecordingSurface::new();
    chart.set_series(&mut surface, &series_of(&[10.0, 20.0, 30.0])).unwrap();
    let before = chart.displayed_value().to_string();
    surface.reset();

    chart.pointer_event(&mut surface, 450.0, PointerAction::Move);
    assert!(surface.ops.is_empty());
    assert_eq!(chart.displayed_value(), before);
}
