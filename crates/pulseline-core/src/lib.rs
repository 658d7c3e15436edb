// File: crates/pulseline-core/src/lib.rs
// Summary: Engine entry point; exports public API for projection, animation,
// rendering, and interactive probing of a single animated line series.

pub mod animate;
pub mod chart;
pub mod curve;
pub mod error;
pub mod probe;
pub mod render;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;
pub mod view;

pub use animate::{Animator, FrameScheduler, TickFrame, PROGRESS_STEP};
pub use chart::{Chart, ChartState};
pub use curve::{control_points, point_on_curve, Point};
pub use error::ChartError;
pub use probe::{locate, probe_curve, PointerAction, ProbeHit};
pub use render::{draw_curve, draw_probe_marker, LinearGradient, StrokeStyle, Surface};
pub use scale::{compute_bounds, project, Bounds};
pub use series::{PlottedPoint, Sample, Series};
pub use theme::Theme;
pub use types::{Color, Viewport};
pub use view::{ViewState, Window, POINTS_PER_MONTH};
