//! RGB and HSL color types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

pub mod parse;

#[cfg(test)]
mod tests;

/// A color with 8-bit red, green, and blue channels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    /// Get the channels in `[r, g, b]` order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
    /// Convert this color to HSL.
    pub fn to_hsl(self) -> Hsl {
        crate::conv::rgb2hsl(self)
    }
}
impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}
impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.channels()
    }
}
impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { r, g, b } = self;
        write!(f, "rgb({r}, {g}, {b})")
    }
}

/// A color as hue, saturation, and lightness.
///
/// Conversions produce `h` in degrees in `[0, 360)`, with `s` and `l` as
/// fractions in `[0, 1]`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}
impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
    /// Get the components in `[h, s, l]` order.
    pub const fn components(self) -> [f64; 3] {
        [self.h, self.s, self.l]
    }
}
impl From<[f64; 3]> for Hsl {
    fn from([h, s, l]: [f64; 3]) -> Self {
        Self { h, s, l }
    }
}
impl From<Hsl> for [f64; 3] {
    fn from(color: Hsl) -> Self {
        color.components()
    }
}
impl Display for Hsl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { h, s, l } = self;
        write!(f, "hsl({h}, {s}, {l})")
    }
}
