//! Color space conversions, following the convention of `<input format>2<output format>`.

use crate::color::{Hsl, Rgb};


/// Convert an RGB color to its HSL equivalent.
///
/// The result always has a hue in `[0, 360)` degrees and saturation and
/// lightness in `[0, 1]`, and depends on nothing but the input channels.
pub fn rgb2hsl(from: Rgb) -> Hsl {
    let [r, g, b] = from.channels().map(|c| c as f64 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;
    if delta == 0.0 {
        // achromatic
        return Hsl { h: 0.0, s: 0.0, l };
    }
    // rounding in the denominator can leave the quotient a few ulps past one
    let s = (delta / (1.0 - (2.0 * l - 1.0).abs())).min(1.0);
    // equal maxima resolve in channel order: red, then green, then blue
    let mut h = if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h *= 60.0;
    // the remainder keeps the sign of its dividend, so the red branch can
    // come out as low as -60 degrees
    if h < 0.0 {
        h += 360.0;
    }
    Hsl { h, s, l }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        rgb2hsl(value)
    }
}
