//! Colors of a round: hex-like `#rrggbb` values and the palette generator.
use std::fmt;

use bevy::color::Srgba;
use bevy::prelude::*;
use rand::Rng;

/// A color as shown to the player, `#rrggbb` in lowercase hex.
/// Equality is decided on the text alone.
#[derive(Clone, Debug)]
pub struct HexColor {
    text: String,
    srgba: Srgba,
}

impl HexColor {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            text: format!("#{r:02x}{g:02x}{b:02x}"),
            srgba: Srgba::rgb_u8(r, g, b),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Material color for this value.
    pub fn to_color(&self) -> Color {
        Color::Srgba(self.srgba)
    }
}

impl PartialEq for HexColor {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for HexColor {}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Uniformly random color over the full 24-bit range.
pub fn random_color(rng: &mut impl Rng) -> HexColor {
    HexColor::from_rgb(rng.random(), rng.random(), rng.random())
}

/// `count` random colors. Duplicates are allowed.
pub fn generate_palette(count: usize, rng: &mut impl Rng) -> Vec<HexColor> {
    (0..count).map(|_| random_color(rng)).collect()
}
