//! Render colors in their canonical textual notations.
//!
//! - [`Color`]: `#rrggbb`, or `#rrggbbaa` when the alpha channel does not
//!   quantize to 255. Always lower case.
//! - [`P3Coordinate`]: `color(display-p3 r g b)` with three decimals, followed
//!   by ` / a` when alpha does not round to `1.000`. Components are not
//!   clamped.
//! - [`OklchCoordinate`]: `oklch(l c h)` with three decimals for lightness and
//!   chroma and one for the hue.

use std::fmt;

use crate::{
    color::{Color, ColorSpace, Component},
    gamut::P3Coordinate,
    models::OklchCoordinate,
};

/// A color converted to one of the supported notations, ready to be
/// formatted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Converted {
    /// An sRGB color, rendered as hex.
    Hex(Color),
    /// A Display-P3 color.
    P3(P3Coordinate),
    /// An OKLCH color.
    Oklch(OklchCoordinate),
}

impl Converted {
    /// The notation this value is rendered in.
    pub fn space(&self) -> ColorSpace {
        match self {
            Converted::Hex(_) => ColorSpace::Hex,
            Converted::P3(_) => ColorSpace::P3,
            Converted::Oklch(_) => ColorSpace::Oklch,
        }
    }

    /// Render the value in its notation.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Converted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Converted::Hex(color) => fmt::Display::fmt(color, f),
            Converted::P3(p3) => fmt::Display::fmt(p3, f),
            Converted::Oklch(oklch) => fmt::Display::fmt(oklch, f),
        }
    }
}

/// A component written with a fixed number of decimals. Never renders a
/// negative zero.
struct Fixed(Component, usize);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Fixed(value, decimals) = *self;
        let s = format!("{value:.decimals$}");
        match s.strip_prefix('-') {
            Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => f.write_str(rest),
            _ => f.write_str(&s),
        }
    }
}

/// Returns true if `alpha` renders as fully opaque at the given number of
/// decimals.
fn is_opaque(alpha: Component, decimals: usize) -> bool {
    Fixed(alpha, decimals).to_string() == Fixed(1.0, decimals).to_string()
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue, alpha] = self.to_u8();
        write!(f, "#{red:02x}{green:02x}{blue:02x}")?;
        if alpha != u8::MAX {
            write!(f, "{alpha:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for P3Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "color(display-p3 {} {} {}",
            Fixed(self.red, 3),
            Fixed(self.green, 3),
            Fixed(self.blue, 3)
        )?;
        if !is_opaque(self.alpha, 3) {
            write!(f, " / {}", Fixed(self.alpha, 3))?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for OklchCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A hue just below 360 would round up to "360.0".
        let hue = if Fixed(self.hue, 1).to_string() == "360.0" {
            0.0
        } else {
            self.hue
        };

        write!(
            f,
            "oklch({} {} {})",
            Fixed(self.lightness, 3),
            Fixed(self.chroma, 3),
            Fixed(hue, 1)
        )
    }
}
