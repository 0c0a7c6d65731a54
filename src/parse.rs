//! Parse textual color input into a [`Color`].
//!
//! The accepted notations are:
//! * `#RGB`
//! * `#RGBA`
//! * `#RRGGBB`
//! * `#RRGGBBAA`
//! * `rgb(R, G, B)` with integer channels in 0..=255
//! * `rgba(R, G, B, A)` with a decimal alpha in [0..1]
//!
//! Hex digits are case insensitive. Whitespace is allowed around the
//! arguments of `rgb()` and `rgba()` and nowhere else.

use std::str::FromStr;

use crate::{
    color::{Color, Component},
    error::ParseError,
};

/// Parse a color from any of the supported notations.
/// ```rust
/// use chromalens::{parse, Color};
/// assert_eq!(parse("#0f8").unwrap(), Color::from_u8(0x00, 0xff, 0x88, 0xff));
/// assert_eq!(parse("rgba(255, 0, 0, 0.5)").unwrap(), Color::new(1.0, 0.0, 0.0, 0.5));
/// assert!(parse("not-a-color").is_err());
/// ```
pub fn parse(input: &str) -> Result<Color, ParseError> {
    let result = if let Some(digits) = input.strip_prefix('#') {
        parse_hex(digits)
    } else if let Some(args) = function_args(input, "rgba") {
        parse_rgba(args)
    } else if let Some(args) = function_args(input, "rgb") {
        parse_rgb(args)
    } else {
        Err("expected a hex color, rgb() or rgba()")
    };

    result.map_err(|reason| {
        tracing::debug!(input, reason, "rejected color input");
        ParseError::invalid_format(input, reason)
    })
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Return the text between the parentheses of `name(...)`.
fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(digits: &str) -> Result<Color, &'static str> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("invalid hex digit");
    }

    // All bytes are ASCII hex digits, so slicing by byte is safe and each
    // slice parses.
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| "invalid hex digit");
    let nibble = |i: usize| {
        u8::from_str_radix(&digits[i..i + 1], 16)
            .map(|n| n * 17)
            .map_err(|_| "invalid hex digit")
    };

    let [red, green, blue, alpha] = match digits.len() {
        3 => [nibble(0)?, nibble(1)?, nibble(2)?, u8::MAX],
        4 => [nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?],
        6 => [byte(0)?, byte(2)?, byte(4)?, u8::MAX],
        8 => [byte(0)?, byte(2)?, byte(4)?, byte(6)?],
        _ => return Err("expected 3, 4, 6 or 8 hex digits"),
    };

    Ok(Color::from_u8(red, green, blue, alpha))
}

fn parse_rgb(args: &str) -> Result<Color, &'static str> {
    let args: Vec<&str> = args.split(',').map(str::trim).collect();
    let [red, green, blue] = args.as_slice() else {
        return Err("rgb() takes exactly 3 arguments");
    };

    Ok(Color::from_u8(
        parse_channel(red)?,
        parse_channel(green)?,
        parse_channel(blue)?,
        u8::MAX,
    ))
}

fn parse_rgba(args: &str) -> Result<Color, &'static str> {
    let args: Vec<&str> = args.split(',').map(str::trim).collect();
    let [red, green, blue, alpha] = args.as_slice() else {
        return Err("rgba() takes exactly 4 arguments");
    };

    let opaque = Color::from_u8(
        parse_channel(red)?,
        parse_channel(green)?,
        parse_channel(blue)?,
        u8::MAX,
    );

    Ok(Color {
        alpha: parse_alpha(alpha)?,
        ..opaque
    })
}

/// An integer channel in 0..=255, digits only.
fn parse_channel(s: &str) -> Result<u8, &'static str> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err("channels must be integers");
    }
    s.parse::<u8>().map_err(|_| "channels must be in 0..=255")
}

/// A decimal number in [0..1]: digits with at most one decimal point.
fn parse_alpha(s: &str) -> Result<Component, &'static str> {
    let digits = s.bytes().filter(u8::is_ascii_digit).count();
    let points = s.bytes().filter(|&b| b == b'.').count();
    if digits == 0 || points > 1 || digits + points != s.len() {
        return Err("alpha must be a decimal number");
    }

    let alpha = s
        .parse::<Component>()
        .map_err(|_| "alpha must be a decimal number")?;
    if !(0.0..=1.0).contains(&alpha) {
        return Err("alpha must be in [0..1]");
    }
    Ok(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use pretty_assertions::assert_eq;

    fn rejected(input: &str) -> bool {
        matches!(parse(input), Err(ParseError::InvalidFormat { .. }))
    }

    #[test]
    fn shorthand_hex_doubles_each_digit() {
        let c = parse("#0F8").unwrap();
        assert_eq!(c.to_u8(), [0, 255, 136, 255]);
        assert_eq!(c.alpha, 1.0);

        let c = parse("#0f88").unwrap();
        assert_eq!(c.to_u8(), [0, 255, 136, 136]);
    }

    #[test]
    fn long_hex() {
        let c = parse("#0088FF").unwrap();
        assert_eq!(c.to_u8(), [0x00, 0x88, 0xff, 0xff]);
        assert_eq!(c.red, 0.0);
        assert_eq!(c.blue, 1.0);
        assert_eq!(c.alpha, 1.0);

        let c = parse("#0088ff80").unwrap();
        assert_eq!(c.to_u8(), [0x00, 0x88, 0xff, 0x80]);
        assert_component_eq!(c.alpha, 128.0 / 255.0);
    }

    #[test]
    fn hex_digits_are_case_insensitive() {
        assert_eq!(parse("#AbCdEf").unwrap(), parse("#abcdef").unwrap());
    }

    #[test]
    fn six_digit_hex_round_trips() {
        for hex in ["#000000", "#ffffff", "#0088ff", "#123456", "#fedcba", "#7f7f80"] {
            assert_eq!(parse(hex).unwrap().to_string(), hex);
            assert_eq!(parse(&hex.to_uppercase()).unwrap().to_string(), hex);
        }

        for v in 0..=255u8 {
            let hex = format!("#{v:02x}{:02x}{:02x}", 255 - v, v / 2);
            assert_eq!(parse(&hex).unwrap().to_string(), hex);
        }
    }

    #[test]
    fn rgb_function() {
        assert_eq!(parse("rgb(255, 0, 0)").unwrap(), Color::opaque(1.0, 0.0, 0.0));
        assert_eq!(parse("rgb(0,136,255)").unwrap().to_u8(), [0, 136, 255, 255]);
        assert_eq!(
            parse("rgb(  12 ,34,  56  )").unwrap().to_u8(),
            [12, 34, 56, 255]
        );
    }

    #[test]
    fn rgba_function() {
        assert_eq!(
            parse("rgba(255, 0, 0, 0.5)").unwrap(),
            Color::new(1.0, 0.0, 0.0, 0.5)
        );
        assert_eq!(parse("rgba(0, 0, 0, 1)").unwrap().alpha, 1.0);
        assert_eq!(parse("rgba(0, 0, 0, 0)").unwrap().alpha, 0.0);
        assert_eq!(parse("rgba(0, 0, 0, .25)").unwrap().alpha, 0.25);
    }

    #[test]
    fn from_str() {
        let c: Color = "#fff".parse().unwrap();
        assert_eq!(c, Color::opaque(1.0, 1.0, 1.0));
    }

    #[test]
    fn unknown_notations_are_rejected() {
        assert!(rejected("not-a-color"));
        assert!(rejected(""));
        assert!(rejected("red"));
        assert!(rejected("hsl(0, 100%, 50%)"));
        assert!(rejected("0088ff"));
        assert!(rejected(" #0088ff"));
        assert!(rejected("#0088ff "));
        assert!(rejected("RGB(0, 0, 0)"));
        assert!(rejected("rgb (0, 0, 0)"));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(rejected("#"));
        assert!(rejected("#12"));
        assert!(rejected("#12345"));
        assert!(rejected("#1234567"));
        assert!(rejected("#123456789"));
        assert!(rejected("#GGGGGG"));
        assert!(rejected("#+12"));
        assert!(rejected("#ééé"));
    }

    #[test]
    fn malformed_functions_are_rejected() {
        assert!(rejected("rgb(255, 0)"));
        assert!(rejected("rgb(255, 0, 0, 0)"));
        assert!(rejected("rgb(256, 0, 0)"));
        assert!(rejected("rgb(-1, 0, 0)"));
        assert!(rejected("rgb(+1, 0, 0)"));
        assert!(rejected("rgb(1.5, 0, 0)"));
        assert!(rejected("rgb(, 0, 0)"));
        assert!(rejected("rgb(255, 0, 0"));
        assert!(rejected("rgba(255, 0, 0)"));
        assert!(rejected("rgba(255, 0, 0, 1.5)"));
        assert!(rejected("rgba(255, 0, 0, -0.5)"));
        assert!(rejected("rgba(255, 0, 0, 1e-1)"));
        assert!(rejected("rgba(255, 0, 0, nan)"));
        assert!(rejected("rgba(255, 0, 0, .)"));
        assert!(rejected("rgba(255, 0, 0, 0.5.1)"));
    }

    #[test]
    fn error_carries_input_and_reason() {
        assert_eq!(
            parse("#12").unwrap_err(),
            ParseError::InvalidFormat {
                input: "#12".to_string(),
                reason: "expected 3, 4, 6 or 8 hex digits",
            }
        );
        assert_eq!(
            parse("rgb(256, 0, 0)").unwrap_err(),
            ParseError::InvalidFormat {
                input: "rgb(256, 0, 0)".to_string(),
                reason: "channels must be in 0..=255",
            }
        );
    }
}
