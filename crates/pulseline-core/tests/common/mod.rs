// File: crates/pulseline-core/tests/common/mod.rs
// Purpose: Shared test doubles: a recording surface and a queue-backed
// frame scheduler.
#![allow(dead_code)]

use std::collections::VecDeque;

use pulseline_core::render::{StrokeStyle, Surface};
use pulseline_core::types::Color;
use pulseline_core::{FrameScheduler, Series};

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    BezierCurveTo { cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64 },
    Arc { cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64 },
    SetLineWidth(f64),
    SetStrokeStyle(StrokeStyle),
    SetFillStyle(Color),
    Stroke,
    Fill,
}

/// Surface that records every call for later assertion.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::ClearRect { x, y, width, height });
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo { x, y });
    }
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.ops.push(Op::BezierCurveTo { cp1x, cp1y, cp2x, cp2y, x, y });
    }
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.ops.push(Op::Arc { cx, cy, radius, start_angle, end_angle });
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::SetLineWidth(width));
    }
    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.ops.push(Op::SetStrokeStyle(style));
    }
    fn set_fill_style(&mut self, color: Color) {
        self.ops.push(Op::SetFillStyle(color));
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }
}

/// Scheduler that queues requested frames; tests drain it cooperatively,
/// one tick in flight at a time, the way a host event loop would.
#[derive(Default)]
pub struct QueueScheduler {
    pub pending: VecDeque<u64>,
}

impl QueueScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pop(&mut self) -> Option<u64> {
        self.pending.pop_front()
    }
}

impl FrameScheduler for QueueScheduler {
    fn request_frame(&mut self, generation: u64) {
        self.pending.push_back(generation);
    }
}

/// Series from bare values, most recent first.
pub fn series_of(values: &[f64]) -> Series {
    Series::from_values(values.iter().copied())
}
