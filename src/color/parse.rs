//! Parsing of `#hex` and `rgb()` color strings.

use super::Rgb;
use std::str::FromStr;
use thiserror::Error;

/// An error that occurs when parsing a color string.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParseColorError {
    /// The input was empty or all whitespace.
    #[error("Empty color string")]
    Empty,
    /// A `#hex` color had a length other than 3 or 6 digits.
    #[error("Hex colors must have 3 or 6 digits")]
    InvalidLength,
    /// A `#hex` color contained a non-hex character.
    #[error("Invalid digit in hex color")]
    InvalidHex,
    /// The input wasn't a recognized color form.
    #[error("Expected a color like #rrggbb or rgb(r, g, b)")]
    InvalidFunc,
    /// An `rgb()` channel fell outside `0..=255`.
    #[error("Channel values must be in 0..=255")]
    OutOfRange,
}

fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Result<Rgb, ParseColorError> {
    let digits = hex.as_bytes();
    match digits.len() {
        3 => {
            let r = nibble(digits[0]).ok_or(ParseColorError::InvalidHex)?;
            let g = nibble(digits[1]).ok_or(ParseColorError::InvalidHex)?;
            let b = nibble(digits[2]).ok_or(ParseColorError::InvalidHex)?;
            // each digit repeats: #f80 means #ff8800
            Ok(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let mut channels = [0; 3];
            for (chan, pair) in channels.iter_mut().zip(digits.chunks_exact(2)) {
                let hi = nibble(pair[0]).ok_or(ParseColorError::InvalidHex)?;
                let lo = nibble(pair[1]).ok_or(ParseColorError::InvalidHex)?;
                *chan = hi << 4 | lo;
            }
            Ok(channels.into())
        }
        _ => Err(ParseColorError::InvalidLength),
    }
}

fn parse_func(args: &str) -> Result<Rgb, ParseColorError> {
    let mut channels = [0; 3];
    let mut parts = args.split(',');
    for chan in &mut channels {
        let part = parts.next().ok_or(ParseColorError::InvalidFunc)?.trim();
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseColorError::InvalidFunc);
        }
        // an all-digit parse only fails by overflow
        let value = part
            .parse::<u32>()
            .map_err(|_| ParseColorError::OutOfRange)?;
        *chan = u8::try_from(value).map_err(|_| ParseColorError::OutOfRange)?;
    }
    if parts.next().is_some() {
        return Err(ParseColorError::InvalidFunc);
    }
    Ok(channels.into())
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }
        if let Some(hex) = s.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(args) = s
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            parse_func(args)
        } else {
            Err(ParseColorError::InvalidFunc)
        }
    }
}
impl TryFrom<&str> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
