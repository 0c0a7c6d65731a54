//! Conversion to Display-P3 and gamut checks.
//!
//! Coordinates are never clamped on conversion so that chained computations
//! stay exact. Use [`P3Coordinate::in_gamut`] or [`Color::in_gamut`] to find
//! out whether a value can be displayed, and `clip` to force it.

use bitflags::bitflags;

use crate::{
    color::{Color, Component, Components},
    math::in_unit_range,
    models::{DisplayP3, DisplayP3Linear, Srgb, SrgbLinear},
};

/// How far outside of [0..1] a component may be and still count as in gamut,
/// to absorb floating point rounding.
pub const GAMUT_TOLERANCE: Component = 1.0e-4;

bitflags! {
    /// The channels of an RGB color that lie outside of its gamut.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Channels : u8 {
        /// The red component is out of range.
        const RED = 1 << 0;
        /// The green component is out of range.
        const GREEN = 1 << 1;
        /// The blue component is out of range.
        const BLUE = 1 << 2;
    }
}

impl Channels {
    fn out_of_range(components: Components) -> Self {
        let Components(red, green, blue) = components;
        let mut channels = Channels::empty();
        channels.set(Channels::RED, !in_unit_range(red, GAMUT_TOLERANCE));
        channels.set(Channels::GREEN, !in_unit_range(green, GAMUT_TOLERANCE));
        channels.set(Channels::BLUE, !in_unit_range(blue, GAMUT_TOLERANCE));
        channels
    }
}

fn clip(components: Components) -> Components {
    components.map(|v| v.clamp(0.0, 1.0))
}

/// A color in the Display-P3 color space with gamma encoded components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct P3Coordinate {
    /// The red component of the color.
    pub red: Component,
    /// The green component of the color.
    pub green: Component,
    /// The blue component of the color.
    pub blue: Component,
    /// The alpha component of the color.
    pub alpha: Component,
}

impl P3Coordinate {
    /// Create a new Display-P3 coordinate.
    pub const fn new(red: Component, green: Component, blue: Component, alpha: Component) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// The three color components, without alpha.
    pub fn components(&self) -> Components {
        Components(self.red, self.green, self.blue)
    }

    fn with_components(components: Components, alpha: Component) -> Self {
        let Components(red, green, blue) = components;
        Self::new(red, green, blue, alpha)
    }

    /// Convert this coordinate back to sRGB. Colors outside of the sRGB gamut
    /// produce components outside of [0..1].
    pub fn to_srgb(&self) -> Color {
        let linear = DisplayP3::from(self.components()).to_linear_light();
        let srgb = SrgbLinear::from(linear).to_gamma_encoded();
        Color::with_components(srgb.to_components(), self.alpha)
    }

    /// Returns true if this Display-P3 color can be represented in sRGB.
    pub fn is_in_srgb_gamut(&self) -> bool {
        self.to_srgb().in_gamut()
    }

    /// Returns true if all components lie within [0..1].
    pub fn in_gamut(&self) -> bool {
        self.out_of_gamut().is_empty()
    }

    /// The channels that lie outside of [0..1].
    pub fn out_of_gamut(&self) -> Channels {
        Channels::out_of_range(self.components())
    }

    /// Return a coordinate with each of the components clipped (clamped to
    /// [0..1]).
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Self {
        Self::with_components(clip(self.components()), self.alpha)
    }
}

impl Color {
    /// Convert this color to the Display-P3 color space. Alpha is passed
    /// through unchanged.
    pub fn to_display_p3(&self) -> P3Coordinate {
        let linear = Srgb::from(self.components()).to_linear_light();
        let p3 = DisplayP3Linear::from(linear).to_gamma_encoded();
        P3Coordinate::with_components(p3.to_components(), self.alpha)
    }

    /// Returns true if the Display-P3 equivalent of this color lies within
    /// [0..1] on every channel, before any clamping.
    ///
    /// Display-P3 contains all of sRGB, so this holds for every color the
    /// parser produces.
    pub fn is_in_srgb_gamut(&self) -> bool {
        self.to_display_p3().in_gamut()
    }

    /// Returns true if all components lie within [0..1].
    pub fn in_gamut(&self) -> bool {
        self.out_of_gamut().is_empty()
    }

    /// The channels that lie outside of [0..1].
    pub fn out_of_gamut(&self) -> Channels {
        Channels::out_of_range(self.components())
    }

    /// Return a color with each of the components clipped (clamped to
    /// [0..1]).
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Color {
        Color::with_components(clip(self.components()), self.alpha)
    }
}
