// File: crates/pulseline-core/src/theme.rs
// Summary: Color presets for the curve gradient and probe marker.

use crate::types::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Gradient stop at the top of the surface.
    pub accent: Color,
    /// Gradient stop at mid-height.
    pub accent_soft: Color,
    /// Gradient stop at the bottom of the surface.
    pub curve_fade: Color,
    pub marker_fill: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(0x16, 0x16, 0x18),
            accent: Color::from_rgb(0x33, 0x99, 0xff),
            accent_soft: Color::from_rgb(0x64, 0xa9, 0xf0),
            curve_fade: Color::WHITE,
            marker_fill: Color::WHITE,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(0xfa, 0xfa, 0xfc),
            accent: Color::from_rgb(0x20, 0x78, 0xc8),
            accent_soft: Color::from_rgb(0x64, 0xa9, 0xf0),
            curve_fade: Color::from_rgb(0x16, 0x16, 0x18),
            marker_fill: Color::WHITE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

/// Built-in presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
