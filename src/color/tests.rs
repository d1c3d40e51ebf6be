use super::parse::ParseColorError;
use super::*;

#[test]
fn display_rgb() {
    assert_eq!(Rgb::new(28, 58, 58).to_string(), "rgb(28, 58, 58)");
    assert_eq!(Rgb::BLACK.to_string(), "rgb(0, 0, 0)");
}

#[test]
fn display_hsl() {
    assert_eq!(Hsl::new(120.0, 1.0, 0.5).to_string(), "hsl(120, 1, 0.5)");
}

#[test]
fn parse_long_hex() {
    assert_eq!("#1a2b3c".parse(), Ok(Rgb::new(26, 43, 60)));
    assert_eq!("#1A2B3C".parse(), Ok(Rgb::new(26, 43, 60)));
    assert_eq!("#ffffff".parse(), Ok(Rgb::WHITE));
}

#[test]
fn parse_short_hex() {
    assert_eq!("#f80".parse(), Ok(Rgb::new(255, 136, 0)));
    assert_eq!("#fff".parse(), Ok(Rgb::WHITE));
}

#[test]
fn parse_rgb_func() {
    assert_eq!("rgb(255, 0, 0)".parse(), Ok(Rgb::RED));
    assert_eq!("rgb(0,128, 255)".parse(), Ok(Rgb::new(0, 128, 255)));
    assert_eq!(Rgb::try_from("rgb(28, 58, 58)"), Ok(Rgb::new(28, 58, 58)));
}

#[test]
fn parse_ignores_outer_whitespace() {
    assert_eq!("  #fff\n".parse(), Ok(Rgb::WHITE));
}

#[test]
fn parse_errors() {
    fn err(s: &str) -> ParseColorError {
        s.parse::<Rgb>().unwrap_err()
    }
    assert_eq!(err(""), ParseColorError::Empty);
    assert_eq!(err("   "), ParseColorError::Empty);
    assert_eq!(err("#"), ParseColorError::InvalidLength);
    assert_eq!(err("#ff"), ParseColorError::InvalidLength);
    assert_eq!(err("#fffff"), ParseColorError::InvalidLength);
    assert_eq!(err("#ggg"), ParseColorError::InvalidHex);
    assert_eq!(err("#12345g"), ParseColorError::InvalidHex);
    assert_eq!(err("blue"), ParseColorError::InvalidFunc);
    assert_eq!(err("rgb(1, 2)"), ParseColorError::InvalidFunc);
    assert_eq!(err("rgb(1, 2, 3, 4)"), ParseColorError::InvalidFunc);
    assert_eq!(err("rgb(1, 2, c)"), ParseColorError::InvalidFunc);
    assert_eq!(err("rgb(-1, 0, 0)"), ParseColorError::InvalidFunc);
    assert_eq!(err("rgb(1, 2, 3"), ParseColorError::InvalidFunc);
    assert_eq!(err("rgb(256, 0, 0)"), ParseColorError::OutOfRange);
    assert_eq!(err("rgb(0, 0, 4294967296)"), ParseColorError::OutOfRange);
}

#[test]
fn display_parse_roundtrip() {
    let colors = [
        Rgb::BLACK,
        Rgb::WHITE,
        Rgb::new(28, 58, 58),
        Rgb::new(1, 128, 254),
    ];
    for rgb in colors {
        assert_eq!(rgb.to_string().parse(), Ok(rgb));
    }
}

#[test]
fn channel_arrays_roundtrip() {
    let rgb = Rgb::from([12, 34, 56]);
    assert_eq!(rgb, Rgb::new(12, 34, 56));
    assert_eq!(<[u8; 3]>::from(rgb), [12, 34, 56]);
    assert_eq!(rgb.channels(), [12, 34, 56]);
    let hsl = Hsl::from([180.0, 0.25, 0.5]);
    assert_eq!(hsl.components(), [180.0, 0.25, 0.5]);
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip() {
    let rgb = Rgb::new(28, 58, 58);
    let json = serde_json::to_string(&rgb).unwrap();
    assert_eq!(json, r#"{"r":28,"g":58,"b":58}"#);
    assert_eq!(serde_json::from_str::<Rgb>(&json).unwrap(), rgb);
    let hsl = Hsl::new(180.0, 0.25, 0.5);
    let json = serde_json::to_string(&hsl).unwrap();
    assert_eq!(serde_json::from_str::<Hsl>(&json).unwrap(), hsl);
}
