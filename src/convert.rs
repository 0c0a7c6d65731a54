//! The entry points that take user input all the way to a rendered notation.

use crate::{
    color::{Color, ColorSpace},
    error::ConversionError,
    format::Converted,
    parse::parse,
};

impl Color {
    /// Convert this color to the given notation.
    pub fn convert(&self, target: ColorSpace) -> Converted {
        match target {
            ColorSpace::Hex => Converted::Hex(*self),
            ColorSpace::P3 => Converted::P3(self.to_display_p3()),
            ColorSpace::Oklch => Converted::Oklch(self.to_oklch()),
        }
    }
}

/// The three notations of a single color.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Conversions {
    /// `#rrggbb[aa]`
    pub hex: String,
    /// `color(display-p3 r g b [/ a])`
    pub p3: String,
    /// `oklch(l c h)`
    pub oklch: String,
}

impl Conversions {
    /// Render all three notations of `color`.
    pub fn of(color: &Color) -> Self {
        Self {
            hex: color.convert(ColorSpace::Hex).format(),
            p3: color.convert(ColorSpace::P3).format(),
            oklch: color.convert(ColorSpace::Oklch).format(),
        }
    }

    /// The notation for the given color space.
    pub fn get(&self, space: ColorSpace) -> &str {
        match space {
            ColorSpace::Hex => &self.hex,
            ColorSpace::P3 => &self.p3,
            ColorSpace::Oklch => &self.oklch,
        }
    }
}

fn parse_input(input: &str) -> Result<Color, ConversionError> {
    parse(input).map_err(|source| ConversionError::InvalidInput {
        input: input.to_string(),
        source,
    })
}

/// Parse `input` and render it in the `target` notation.
/// ```rust
/// use chromalens::{convert, ColorSpace};
/// assert_eq!(
///     convert("#0088ff", ColorSpace::P3).unwrap(),
///     "color(display-p3 0.231 0.525 0.968)"
/// );
/// assert_eq!(
///     convert("#0088ff", ColorSpace::Oklch).unwrap(),
///     "oklch(0.632 0.202 254.1)"
/// );
/// assert!(convert("not-a-color", ColorSpace::Hex).is_err());
/// ```
pub fn convert(input: &str, target: ColorSpace) -> Result<String, ConversionError> {
    let output = parse_input(input)?.convert(target).format();
    tracing::trace!(input, %target, %output, "converted color");
    Ok(output)
}

/// Parse `input` once and render it in every notation.
pub fn convert_all(input: &str) -> Result<Conversions, ConversionError> {
    let conversions = Conversions::of(&parse_input(input)?);
    tracing::trace!(input, ?conversions, "converted color");
    Ok(conversions)
}
