// File: crates/demo/src/main.rs
// Summary: Demo plays the part of the host: supplies data (CSV or a mock
// walk), drives the animation loop, and dumps PNG frames.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use pulseline_core::{
    Chart, FrameScheduler, PointerAction, Sample, Series, Theme, Viewport, ViewState, Window,
    POINTS_PER_MONTH,
};
use pulseline_render_skia::RasterFrame;

const WIDTH: i32 = 1024;
const HEIGHT: i32 = 640;
/// Write every Nth animation frame to disk.
const FRAME_STRIDE: usize = 10;

/// Host-side "before next paint" queue, drained one tick at a time.
#[derive(Default)]
struct MainLoop {
    pending: VecDeque<u64>,
}

impl FrameScheduler for MainLoop {
    fn request_frame(&mut self, generation: u64) {
        self.pending.push_back(generation);
    }
}

fn main() -> Result<()> {
    let dataset = match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            println!("Using input file: {}", path.display());
            load_series_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No input file given; generating a mock walk");
            mock_walk(7)
        }
    };
    println!("Loaded {} samples", dataset.len());

    let theme = Theme::dark();
    let mut frame = RasterFrame::new(WIDTH, HEIGHT, theme.background)?;
    let mut chart = Chart::new(Viewport::new(WIDTH as f64, HEIGHT as f64)).with_theme(theme);
    let mut main_loop = MainLoop::default();
    let mut view = ViewState::default();

    let out_dir = PathBuf::from("target/demo_out");

    // Static draw of the default window first, like the component's initial
    // paint.
    {
        let mut surface = frame.surface();
        chart.set_series(&mut surface, &dataset.window(view.window))?;
    }
    frame.write_png(out_dir.join("initial.png"))?;

    // Animate to the one-year window.
    view.window = Window::OneYear;
    println!("Animating to window: {}", view.window.label());
    chart.transition_to(&mut main_loop, dataset.window(view.window));

    let mut ticks = 0usize;
    while let Some(generation) = main_loop.pending.pop_front() {
        {
            let mut surface = frame.surface();
            chart.tick(&mut surface, &mut main_loop, generation)?;
        }
        view.displayed_value = chart.displayed_value().to_string();
        if ticks % FRAME_STRIDE == 0 {
            let name = format!("frame_{ticks:03}.png");
            frame.write_png(out_dir.join(&name))?;
            println!("  tick {ticks:3}  value {:>8}  -> {name}", view.displayed_value);
        }
        ticks += 1;
    }
    frame.write_png(out_dir.join("committed.png"))?;
    println!("Committed after {ticks} ticks, value {}", chart.displayed_value());

    // Probe three quarters of the way across, as a touch would.
    {
        let mut surface = frame.surface();
        chart.pointer_event(&mut surface, WIDTH as f64 * 0.75, PointerAction::Down);
    }
    view.displayed_value = chart.displayed_value().to_string();
    frame.write_png(out_dir.join("probe.png"))?;
    println!("Probe value: {}", view.displayed_value);
    println!("Wrote frames to {}", out_dir.display());
    Ok(())
}

/// Load `timestamp,value` rows (RFC 3339 timestamps, header row expected).
fn load_series_csv(path: &Path) -> Result<Series> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut samples = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let timestamp = record
            .get(0)
            .with_context(|| format!("row {row}: missing timestamp"))?;
        let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(timestamp)
            .with_context(|| format!("row {row}: bad timestamp '{timestamp}'"))?
            .with_timezone(&Utc);
        let value: f64 = record
            .get(1)
            .with_context(|| format!("row {row}: missing value"))?
            .parse()
            .with_context(|| format!("row {row}: bad value"))?;
        samples.push(Sample::new(timestamp, value));
    }
    if samples.is_empty() {
        anyhow::bail!("no samples loaded; check headers/delimiter");
    }
    Ok(Series::from_samples(samples))
}

/// Deterministic bounded random walk: one sample per day going back a year,
/// steps within ±2.0. Seeded so runs are reproducible.
fn mock_walk(seed: u64) -> Series {
    let mut rng = seed.max(1);
    let mut next_unit = move || {
        // xorshift64
        rng ^= rng << 13;
        rng ^= rng >> 7;
        rng ^= rng << 17;
        (rng >> 11) as f64 / (1u64 << 53) as f64
    };

    let max_change = 2.0;
    let now = Utc::now();
    let mut previous = next_unit() * 100.0;
    let mut samples = vec![Sample::new(now, previous)];
    for day in 1..=(12 * POINTS_PER_MONTH) {
        let change = next_unit() * max_change * 2.0 - max_change;
        previous += change;
        samples.push(Sample::new(now - Duration::days(day as i64), previous));
    }
    Series::from_samples(samples)
}
