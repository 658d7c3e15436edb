// File: crates/pulseline-core/src/view.rs
// Summary: Time-window selection and the host-owned view state.

/// Samples per month of window; the data source serves series in multiples
/// of this unit.
pub const POINTS_PER_MONTH: usize = 15;

/// Selectable time windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Window {
    ThirtyDays,
    SixtyDays,
    SixMonths,
    OneYear,
}

impl Window {
    pub const ALL: [Window; 4] = [
        Window::ThirtyDays,
        Window::SixtyDays,
        Window::SixMonths,
        Window::OneYear,
    ];

    pub fn months(self) -> usize {
        match self {
            Window::ThirtyDays => 1,
            Window::SixtyDays => 2,
            Window::SixMonths => 6,
            Window::OneYear => 12,
        }
    }

    pub fn point_count(self) -> usize {
        self.months() * POINTS_PER_MONTH
    }

    pub fn label(self) -> &'static str {
        match self {
            Window::ThirtyDays => "30 Days",
            Window::SixtyDays => "60 Days",
            Window::SixMonths => "6 Months",
            Window::OneYear => "1 Year",
        }
    }
}

/// Mutable state the surrounding UI owns. The engine never holds a
/// reference to it; hosts mirror `Chart::displayed_value` into it after
/// each tick or probe.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub window: Window,
    pub displayed_value: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { window: Window::ThirtyDays, displayed_value: "0".to_string() }
    }
}
