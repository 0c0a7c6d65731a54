//! A [`Color`] is the canonical form every supported input notation is parsed
//! into: gamma encoded sRGB channels plus alpha, each normalized to [0..1].

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownColorSpace;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Return true if `f` holds for all three components.
    pub fn all(&self, f: impl Fn(Component) -> bool) -> bool {
        f(self.0) && f(self.1) && f(self.2)
    }
}

/// The notations a color can be converted to and rendered in.
///
/// At the call boundary these are the strings `HEX`, `P3` and `OKLCH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum ColorSpace {
    /// sRGB written as `#rrggbb[aa]`.
    Hex = 0,
    /// Display-P3 written as `color(display-p3 r g b [/ a])`.
    P3 = 1,
    /// OKLCH written as `oklch(l c h)`.
    Oklch = 2,
}

impl ColorSpace {
    /// All color spaces, in the order they are usually presented.
    pub const ALL: [ColorSpace; 3] = [ColorSpace::Hex, ColorSpace::P3, ColorSpace::Oklch];

    /// The discriminator used at the call boundary.
    pub const fn name(&self) -> &'static str {
        match self {
            ColorSpace::Hex => "HEX",
            ColorSpace::P3 => "P3",
            ColorSpace::Oklch => "OKLCH",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = UnknownColorSpace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorSpace::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColorSpace(s.to_string()))
    }
}

/// A color in the sRGB color space with gamma encoded components.
///
/// Colors created by the parser always have components inside [0..1]. Colors
/// created by inverse conversions (see [`crate::OklchCoordinate::to_color`])
/// may fall outside of that range; see [`Color::in_gamut`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The red component of the color.
    pub red: Component,
    /// The green component of the color.
    pub green: Component,
    /// The blue component of the color.
    pub blue: Component,
    /// The alpha component of the color, 1.0 being fully opaque.
    pub alpha: Component,
}

impl Color {
    /// Create a new [`Color`] from normalized components.
    pub const fn new(red: Component, green: Component, blue: Component, alpha: Component) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a new fully opaque [`Color`].
    pub const fn opaque(red: Component, green: Component, blue: Component) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Create a color from 8-bit channels.
    /// ```rust
    /// use chromalens::Color;
    /// let c = Color::from_u8(255, 0, 0, 255);
    /// assert_eq!(c, Color::opaque(1.0, 0.0, 0.0));
    /// ```
    pub fn from_u8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        let n = |v: u8| v as Component / 255.0;
        Self::new(n(red), n(green), n(blue), n(alpha))
    }

    /// Quantize to 8-bit channels, rounding and clamping each component.
    pub fn to_u8(&self) -> [u8; 4] {
        let q = |v: Component| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        [q(self.red), q(self.green), q(self.blue), q(self.alpha)]
    }

    /// The three color components, without alpha.
    pub fn components(&self) -> Components {
        Components(self.red, self.green, self.blue)
    }

    pub(crate) fn with_components(components: Components, alpha: Component) -> Self {
        let Components(red, green, blue) = components;
        Self::new(red, green, blue, alpha)
    }
}
