// File: crates/pulseline-core/src/curve.rs
// Summary: Cubic bezier geometry for the step-smoothed line.

/// Screen-space point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Control points for the segment from `p0` to `p1`: both sit on the
/// horizontal midpoint, each holding its endpoint's y. This exact rule is
/// what gives the line its step-smoothed look; it is not a true spline and
/// must not be swapped for another smoothing heuristic.
pub fn control_points(p0: Point, p1: Point) -> (Point, Point) {
    let cp1 = Point::new((p1.x - p0.x) / 2.0 + p0.x, p0.y);
    let cp2 = Point::new((p0.x + p1.x) / 2.0, p1.y);
    (cp1, cp2)
}

/// Evaluate the cubic bezier's y at parameter `t` in [0, 1]. The probe
/// samples x directly from screen space, so only y is ever needed.
/// Exact at the endpoints: t = 0 gives p0.y, t = 1 gives p3.y.
pub fn point_on_curve(t: f64, p0: Point, p1: Point, p2: Point, p3: Point) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0.y + 3.0 * u * u * t * p1.y + 3.0 * u * t * t * p2.y + t * t * t * p3.y
}
