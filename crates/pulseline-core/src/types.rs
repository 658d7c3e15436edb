// File: crates/pulseline-core/src/types.rs
// Summary: Shared types and constants (surface size, viewport, colors).

/// Default surface width in pixels.
pub const WIDTH: f64 = 1024.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 640.0;

/// Drawing area the chart projects into, in surface pixels.
/// Contract: both dimensions are positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: width.max(1.0), height: height.max(1.0) }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}

/// ARGB color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
}
