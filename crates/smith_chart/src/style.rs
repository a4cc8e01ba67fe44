//! Stroke styling for chart primitives.
//!
//! Plain black lines on a white page unless the configuration says otherwise.

use serde::{Deserialize, Serialize};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    #[serde(default = "opaque")]
    pub a: f32,
}

const fn opaque() -> f32 {
    1.0
}

impl Color {
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Chart background blue.
    pub const CHART_BLUE: Self = Self::hex(0x1099_bbff);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Converts to 8-bit RGB channels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb8(self) -> [u8; 3] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// CSS hex notation (`#rrggbb`), alpha dropped.
    #[must_use]
    pub fn to_css_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Stroke for an outlined primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stroke {
    /// Line color.
    #[serde(default)]
    pub color: Color,
    /// Line width in pixels.
    #[serde(default = "Stroke::default_width")]
    pub width: f32,
}

impl Stroke {
    /// Default line width in pixels.
    pub const DEFAULT_WIDTH: f32 = 3.0;

    /// Creates a stroke.
    #[must_use]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    const fn default_width() -> f32 {
        Self::DEFAULT_WIDTH
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(Color::BLACK, Self::DEFAULT_WIDTH)
    }
}

/// Strokes for each contour family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartStyle {
    /// Canvas background (used by surfaces that paint one).
    pub background: Color,
    /// Chart boundary (the r = 0 circle).
    pub boundary: Stroke,
    /// Constant-resistance circles.
    pub resistance: Stroke,
    /// Constant-reactance arcs and the real axis.
    pub reactance: Stroke,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: Color::CHART_BLUE,
            boundary: Stroke::default(),
            resistance: Stroke::default(),
            reactance: Stroke::default(),
        }
    }
}
