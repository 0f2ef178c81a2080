//! Colors, defined in OKLCH and converted once to terminal RGB.

use crossterm::style::Color;
use palette::{IntoColor, Oklch, Srgb};

fn oklch(l: f32, c: f32, h: f32) -> Color {
    let srgb: Srgb = Oklch::new(l, c, h).into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Color::Rgb { r, g, b }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    /// Settled indicator.
    pub indicator: Color,
    /// Indicator while retracting.
    pub indicator_dim: Color,
    /// Text on top of the indicator.
    pub on_indicator: Color,
    pub accent: Color,
    pub selected: Color,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            background: oklch(0.16, 0.01, 150.0),
            surface: oklch(0.22, 0.02, 150.0),
            foreground: oklch(0.93, 0.02, 150.0),
            muted: oklch(0.65, 0.02, 150.0),
            border: oklch(0.45, 0.03, 150.0),
            indicator: oklch(0.85, 0.12, 145.0),
            indicator_dim: oklch(0.5, 0.06, 145.0),
            on_indicator: oklch(0.15, 0.02, 145.0),
            accent: oklch(0.75, 0.14, 140.0),
            selected: oklch(0.3, 0.05, 145.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
