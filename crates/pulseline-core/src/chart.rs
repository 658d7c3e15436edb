// File: crates/pulseline-core/src/chart.rs
// Summary: Chart orchestrator: owns the committed state and the animator,
// wires projection, rendering, ticking, and pointer probing together.

use crate::animate::{Animator, FrameScheduler, TickFrame};
use crate::error::ChartError;
use crate::probe::{self, PointerAction};
use crate::render::{self, Surface};
use crate::scale;
use crate::series::{PlottedPoint, Series};
use crate::theme::Theme;
use crate::types::Viewport;

/// The committed, render-ready state. A value object: every tick reads the
/// prior frame's state and writes the next; nothing is shared.
#[derive(Clone, Debug)]
pub struct ChartState {
    pub points: Vec<PlottedPoint>,
    pub displayed_value: String,
}

impl Default for ChartState {
    fn default() -> Self {
        Self { points: Vec::new(), displayed_value: "0".to_string() }
    }
}

/// The single live chart instance a host retains.
pub struct Chart {
    viewport: Viewport,
    theme: Theme,
    state: ChartState,
    animator: Animator,
}

impl Chart {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            theme: Theme::dark(),
            state: ChartState::default(),
            animator: Animator::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The last-computed coordinate set, as consumed by the probe.
    pub fn points(&self) -> &[PlottedPoint] {
        &self.state.points
    }

    /// Current readout, formatted to two decimals while animating/probing.
    pub fn displayed_value(&self) -> &str {
        &self.state.displayed_value
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Project and draw `series` immediately, without animating.
    pub fn set_series<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        series: &Series,
    ) -> Result<(), ChartError> {
        self.state.points = scale::project(series, self.viewport)?;
        render::draw_curve(surface, &self.state.points, &self.theme, self.viewport);
        Ok(())
    }

    /// Begin an animated transition from the committed points to `new`,
    /// requesting the first frame. Supersedes any in-flight transition;
    /// frames scheduled under the previous generation become no-ops.
    pub fn transition_to<F: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut F,
        new: Series,
    ) -> u64 {
        let generation = self.animator.start(self.state.points.clone(), new);
        scheduler.request_frame(generation);
        generation
    }

    /// Advance the transition one tick: render the interpolated frame,
    /// chase the readout toward the target, and either request the next
    /// frame or commit. Stale generations do nothing.
    pub fn tick<S: Surface + ?Sized, F: FrameScheduler + ?Sized>(
        &mut self,
        surface: &mut S,
        scheduler: &mut F,
        generation: u64,
    ) -> Result<(), ChartError> {
        match self.animator.tick(generation, self.viewport) {
            None => Ok(()),
            Some(TickFrame::Step { points, progress, target }) => {
                render::draw_curve(surface, &points, &self.theme, self.viewport);
                // The frame becomes the last-computed coordinate set: probes
                // mid-animation and superseding transitions both read it.
                self.state.points = points;
                let displayed: f64 = self.state.displayed_value.parse().unwrap_or(0.0);
                let next = displayed + progress * (target - displayed);
                self.state.displayed_value = format!("{next:.2}");
                scheduler.request_frame(generation);
                Ok(())
            }
            Some(TickFrame::Complete { committed }) => {
                self.state.points = scale::project(&committed, self.viewport)?;
                render::draw_curve(surface, &self.state.points, &self.theme, self.viewport);
                self.probe(surface, self.viewport.width - 1.0);
                Ok(())
            }
        }
    }

    /// Pointer entry point; only down/move gestures probe the curve.
    pub fn pointer_event<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        x: f64,
        action: PointerAction,
    ) {
        if !action.probes() {
            return;
        }
        self.probe(surface, x);
    }

    /// Probe at `pointer_x`: on a hit, redraw with the marker and update
    /// the readout to the located sample's value. A miss (too few points,
    /// pointer past the last point) draws nothing.
    fn probe<S: Surface + ?Sized>(&mut self, surface: &mut S, pointer_x: f64) {
        let Some(hit) = probe::probe_curve(&self.state.points, pointer_x, self.viewport.width)
        else {
            return;
        };
        render::draw_probe_marker(
            surface,
            &self.state.points,
            &self.theme,
            self.viewport,
            hit.x,
            hit.y,
        );
        self.state.displayed_value = format!("{:.2}", self.state.points[hit.index].value);
    }
}
