//! Color representation shared between the model and the persisted form.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// RGBA color with float components in `[0, 1]`.
///
/// The field names are part of the persisted document format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::opaque(0.0, 0.0, 0.0);
    pub const RED: Rgba = Rgba::opaque(0.92, 0.26, 0.27);
    pub const ORANGE: Rgba = Rgba::opaque(1.0, 0.58, 0.0);
    pub const YELLOW: Rgba = Rgba::opaque(1.0, 0.84, 0.0);
    pub const GREEN: Rgba = Rgba::opaque(0.2, 0.78, 0.35);
    pub const BLUE: Rgba = Rgba::opaque(0.0, 0.48, 1.0);
    pub const PURPLE: Rgba = Rgba::opaque(0.69, 0.32, 0.87);
    pub const CYAN: Rgba = Rgba::opaque(0.35, 0.78, 0.98);
    pub const PINK: Rgba = Rgba::opaque(1.0, 0.18, 0.33);

    /// The preset palette offered by the toolbar.
    pub fn presets() -> &'static [Rgba] {
        &[
            Rgba::WHITE,
            Rgba::BLACK,
            Rgba::RED,
            Rgba::ORANGE,
            Rgba::YELLOW,
            Rgba::GREEN,
            Rgba::BLUE,
            Rgba::PURPLE,
            Rgba::CYAN,
            Rgba::PINK,
        ]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::from_rgba8(
            (c.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (c.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (c.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
            (c.alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            red: rgba.r as f64 / 255.0,
            green: rgba.g as f64 / 255.0,
            blue: rgba.b as f64 / 255.0,
            alpha: rgba.a as f64 / 255.0,
        }
    }
}
