//! Highlight styling for constellation points and lines.

use serde::{Deserialize, Serialize};

/// Linear RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    /// Color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self([
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        ])
    }
}

/// How strongly a constellation is emphasized.
///
/// Selection outranks hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightState {
    Idle,
    Hovered,
    Selected,
}

impl HighlightState {
    #[must_use]
    pub fn from_flags(hovered: bool, selected: bool) -> Self {
        match (hovered, selected) {
            (_, true) => Self::Selected,
            (true, false) => Self::Hovered,
            (false, false) => Self::Idle,
        }
    }

    /// Hovered and selected constellations are both drawn as active.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Resolved draw parameters for one constellation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub star_color: Rgb,
    pub line_color: Rgb,
    /// Point size in pixels, attenuated by distance.
    pub star_size: f32,
    pub line_width: f32,
    pub opacity: f32,
}

/// Colors and sizes for each highlight state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub idle_star: Rgb,
    pub idle_line: Rgb,
    pub hover_star: Rgb,
    pub hover_line: Rgb,
    pub selected_star: Rgb,
    pub selected_line: Rgb,
    pub idle_line_width: f32,
    pub active_line_width: f32,
    pub idle_star_size: f32,
    pub hover_star_size: f32,
    pub selected_star_size: f32,
    pub idle_opacity: f32,
    pub active_opacity: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            idle_star: Rgb::from_hex(0x77_77_88),
            idle_line: Rgb::from_hex(0x33_33_44),
            hover_star: Rgb::from_hex(0x00_ff_ff),
            hover_line: Rgb::from_hex(0x00_aa_aa),
            selected_star: Rgb::from_hex(0xff_ff_00),
            selected_line: Rgb::from_hex(0xaa_aa_00),
            idle_line_width: 0.5,
            active_line_width: 2.0,
            idle_star_size: 2.5,
            hover_star_size: 5.0,
            selected_star_size: 6.0,
            idle_opacity: 0.7,
            active_opacity: 1.0,
        }
    }
}

impl Palette {
    /// Scale every star size and line width, e.g. for high-DPI output.
    #[must_use]
    pub fn scaled(mut self, star_scale: f32, line_scale: f32) -> Self {
        self.idle_star_size *= star_scale;
        self.hover_star_size *= star_scale;
        self.selected_star_size *= star_scale;
        self.idle_line_width *= line_scale;
        self.active_line_width *= line_scale;
        self
    }

    #[must_use]
    pub fn appearance(&self, state: HighlightState) -> Appearance {
        let (star_color, line_color, star_size) = match state {
            HighlightState::Idle => (self.idle_star, self.idle_line, self.idle_star_size),
            HighlightState::Hovered => (self.hover_star, self.hover_line, self.hover_star_size),
            HighlightState::Selected => (
                self.selected_star,
                self.selected_line,
                self.selected_star_size,
            ),
        };
        let (line_width, opacity) = if state.is_active() {
            (self.active_line_width, self.active_opacity)
        } else {
            (self.idle_line_width, self.idle_opacity)
        };
        Appearance {
            star_color,
            line_color,
            star_size,
            line_width,
            opacity,
        }
    }
}
