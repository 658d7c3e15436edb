// File: crates/pulseline-core/src/animate.rs
// Summary: Transition animator; an explicit state machine stepped by the
// host's frame scheduler, superseded via a generation counter.

use crate::scale;
use crate::series::{PlottedPoint, Series};
use crate::types::Viewport;

/// Progress added per tick; a full transition takes ~50 frames.
pub const PROGRESS_STEP: f64 = 0.02;

/// "Run this callback before the next paint." Supplied by the host event
/// loop; cooperative and single-threaded, one tick in flight at a time.
pub trait FrameScheduler {
    fn request_frame(&mut self, generation: u64);
}

/// An in-flight transition, held by value. The old side keeps its committed
/// screen coordinates; the new side is projected fresh every tick.
#[derive(Clone, Debug)]
pub struct Transition {
    old: Vec<PlottedPoint>,
    new: Series,
    progress: f64,
}

#[derive(Clone, Debug, Default)]
enum Phase {
    #[default]
    Idle,
    Running(Transition),
}

/// What one tick produced.
#[derive(Clone, Debug)]
pub enum TickFrame {
    /// Mid-flight frame: render it, advance the readout, request another
    /// frame. `progress` is the value the frame was built with.
    Step {
        points: Vec<PlottedPoint>,
        progress: f64,
        target: f64,
    },
    /// The transition converged; `committed` replaces the current series.
    Complete { committed: Series },
}

#[derive(Clone, Debug, Default)]
pub struct Animator {
    phase: Phase,
    generation: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin a transition, superseding any in-flight one. Ticks scheduled
    /// under an earlier generation become no-ops.
    pub fn start(&mut self, old: Vec<PlottedPoint>, new: Series) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.phase = Phase::Running(Transition { old, new, progress: 0.0 });
        self.generation
    }

    /// Advance by one tick. Returns `None` when idle or when `generation`
    /// is stale, in which case nothing was mutated.
    pub fn tick(&mut self, generation: u64, viewport: Viewport) -> Option<TickFrame> {
        if generation != self.generation {
            return None;
        }
        let Phase::Running(transition) = &mut self.phase else {
            return None;
        };
        if transition.progress < 1.0 {
            let points = interpolate_frame(
                &transition.old,
                &transition.new,
                transition.progress,
                viewport,
            );
            let frame = TickFrame::Step {
                points,
                progress: transition.progress,
                target: transition.new.last_value().unwrap_or(0.0),
            };
            transition.progress += PROGRESS_STEP;
            Some(frame)
        } else {
            let committed = transition.new.clone();
            self.phase = Phase::Idle;
            Some(TickFrame::Complete { committed })
        }
    }
}

/// A frame point before its y is known: either carried over verbatim from
/// the old projection, or a value still waiting on this frame's bounds.
enum Slot {
    Carried(PlottedPoint),
    Fresh {
        index: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
        value: f64,
    },
}

impl Slot {
    fn value(&self) -> f64 {
        match self {
            Slot::Carried(p) => p.value,
            Slot::Fresh { value, .. } => *value,
        }
    }
}

/// Index-ordered appearance threshold for the tail a length change exposes.
/// Points past the shared prefix wipe in (or out, mirrored) one by one.
fn wipe_threshold(index: usize, min_len: usize, max_len: usize) -> f64 {
    (index - min_len + 1) as f64 / (max_len - min_len + 1) as f64
}

/// Build one interpolated frame.
///
/// Indices valid in both series lerp their values. When the series shrinks,
/// old tail points survive with their committed coordinates only while
/// `progress <= 1 - shrink`; when it grows, new tail points join once
/// `progress >= grow`. The asymmetric wipe is deliberate and load-bearing
/// for the visual: it is not a uniform fade.
///
/// Fresh points are projected against the frame's own value bounds over the
/// target viewport, x spread by index over the combined length.
fn interpolate_frame(
    old: &[PlottedPoint],
    new: &Series,
    progress: f64,
    viewport: Viewport,
) -> Vec<PlottedPoint> {
    let max_len = old.len().max(new.len());
    let min_len = old.len().min(new.len());

    let mut slots: Vec<Slot> = Vec::with_capacity(max_len);
    for i in 0..max_len {
        let in_old = i < old.len();
        let in_new = i < new.len();
        if in_old && in_new {
            let sample = new.samples()[i];
            let from = old[i].value;
            slots.push(Slot::Fresh {
                index: i,
                timestamp: sample.timestamp,
                value: from + (sample.value - from) * progress,
            });
        } else if in_old {
            let shrink = wipe_threshold(i, min_len, max_len);
            if progress <= 1.0 - shrink {
                slots.push(Slot::Carried(old[i]));
            }
        } else {
            let grow = wipe_threshold(i, min_len, max_len);
            if progress >= grow {
                let sample = new.samples()[i];
                slots.push(Slot::Fresh {
                    index: i,
                    timestamp: sample.timestamp,
                    value: sample.value,
                });
            }
        }
    }

    let Ok(bounds) = scale::bounds_of(slots.iter().map(Slot::value)) else {
        return Vec::new();
    };
    slots
        .into_iter()
        .map(|slot| match slot {
            Slot::Carried(p) => p,
            Slot::Fresh { index, timestamp, value } => PlottedPoint {
                timestamp,
                value,
                x: scale::x_at(index, max_len, viewport.width),
                y: scale::y_at(value, bounds, viewport.height),
            },
        })
        .collect()
}
