// File: crates/pulseline-core/src/render.rs
// Summary: Drawing-surface abstraction (canvas-shaped) and the two draw
// routines: base curve and probe marker.

use std::f64::consts::TAU;

use crate::curve::control_points;
use crate::series::PlottedPoint;
use crate::theme::Theme;
use crate::types::{Color, Viewport};

/// Stroke width of the base curve.
pub const CURVE_STROKE_WIDTH: f64 = 8.0;
/// Stroke width of the probe marker's outline.
pub const MARKER_STROKE_WIDTH: f64 = 10.0;
/// Radius of the probe marker.
pub const MARKER_RADIUS: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Linear gradient between two surface points with ordered color stops.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1, stops: Vec::new() }
    }

    pub fn add_color_stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(GradientStop { offset, color });
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StrokeStyle {
    Solid(Color),
    Gradient(LinearGradient),
}

/// Minimal 2D vector surface the host must supply: paths, cubic beziers,
/// arcs, gradient strokes, solid fills. Mutating calls only; the engine
/// never reads pixels back.
pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn set_line_width(&mut self, width: f64);
    fn set_stroke_style(&mut self, style: StrokeStyle);
    fn set_fill_style(&mut self, color: Color);
    fn stroke(&mut self);
    fn fill(&mut self);
}

/// The vertical accent-to-white gradient the curve is stroked with.
fn stroke_gradient(theme: &Theme, viewport: Viewport) -> LinearGradient {
    LinearGradient::new(0.0, 0.0, 0.0, viewport.height)
        .add_color_stop(0.0, theme.accent)
        .add_color_stop(0.5, theme.accent_soft)
        .add_color_stop(1.0, theme.curve_fade)
}

/// Clear the surface and stroke one continuous path of cubic segments
/// through `points`, starting at `(0, y0)`. No fill. Fewer than two points
/// leaves the surface cleared; a degenerate frame, not an error.
pub fn draw_curve<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[PlottedPoint],
    theme: &Theme,
    viewport: Viewport,
) {
    surface.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    if points.len() < 2 {
        return;
    }
    surface.begin_path();
    surface.move_to(0.0, points[0].y);
    for pair in points.windows(2) {
        let (cp1, cp2) = control_points(pair[0].position(), pair[1].position());
        surface.bezier_curve_to(cp1.x, cp1.y, cp2.x, cp2.y, pair[1].x, pair[1].y);
    }
    surface.set_stroke_style(StrokeStyle::Gradient(stroke_gradient(theme, viewport)));
    surface.set_line_width(CURVE_STROKE_WIDTH);
    surface.stroke();
}

/// Redraw the base curve, then a filled, stroked circle at the probed
/// position.
pub fn draw_probe_marker<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[PlottedPoint],
    theme: &Theme,
    viewport: Viewport,
    x: f64,
    y: f64,
) {
    draw_curve(surface, points, theme, viewport);
    surface.begin_path();
    surface.arc(x, y, MARKER_RADIUS, 0.0, TAU);
    surface.set_fill_style(theme.marker_fill);
    surface.fill();
    surface.set_stroke_style(StrokeStyle::Gradient(stroke_gradient(theme, viewport)));
    surface.set_line_width(MARKER_STROKE_WIDTH);
    surface.stroke();
}
