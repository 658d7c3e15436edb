// File: crates/pulseline-core/src/probe.rs
// Summary: Pointer-to-curve probing: nearest index lookup and exact y on
// the bezier segment under the pointer.

use crate::curve::{control_points, point_on_curve};
use crate::series::PlottedPoint;

/// Pointer gesture kinds the host reports. Only `Down` and `Move` probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Other,
}

impl PointerAction {
    pub fn probes(self) -> bool {
        matches!(self, PointerAction::Down | PointerAction::Move)
    }
}

/// Result of a successful probe: the nearest data index and the exact
/// curve position under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbeHit {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Nearest data index for a pointer x, clamped to `[1, len - 1]`. Index 0
/// is excluded by design (the leftmost point has no segment to its left
/// that the marker should sit on). `None` for series shorter than 2.
pub fn locate(pointer_x: f64, width: f64, len: usize) -> Option<usize> {
    if len < 2 || width <= 0.0 {
        return None;
    }
    let raw = ((pointer_x / width) * (len - 1) as f64).round() as i64;
    Some(raw.clamp(1, len as i64 - 1) as usize)
}

/// Evaluate the curve under `pointer_x`. Picks the adjacent segment the
/// pointer falls in, linearly interpolates `t` across its x span, and
/// evaluates y on the segment's bezier. A missing neighbor (pointer beyond
/// the last point) is a deliberate silent no-op, never an error.
pub fn probe_curve(points: &[PlottedPoint], pointer_x: f64, width: f64) -> Option<ProbeHit> {
    let index = locate(pointer_x, width, points.len())?;
    let (start, end) = if pointer_x >= points[index].x {
        (points[index], *points.get(index + 1)?)
    } else {
        (points[index - 1], points[index])
    };
    let span = end.x - start.x;
    if span <= 0.0 {
        return None;
    }
    let t = (pointer_x - start.x) / span;
    let (cp1, cp2) = control_points(start.position(), end.position());
    let y = point_on_curve(t, start.position(), cp1, cp2, end.position());
    Some(ProbeHit { index, x: pointer_x, y })
}
