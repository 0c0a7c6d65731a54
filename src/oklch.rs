//! Conversion between sRGB and the perceptual Oklab/OKLCH color space.

use crate::{
    color::{Color, Component},
    math::hue_distance,
    models::{Oklab, OklchCoordinate, Srgb, SrgbLinear},
};

impl Color {
    /// Convert this color to the rectangular Oklab form.
    pub fn to_oklab(&self) -> Oklab {
        Oklab::from(Srgb::from(self.components()).to_linear_light())
    }

    /// Convert this color to OKLCH.
    ///
    /// Lightness is clamped to [0..1] and chroma to be non negative; chroma
    /// has no upper bound. Achromatic colors (black, white, grays) have a hue
    /// of 0.
    /// ```rust
    /// use chromalens::Color;
    /// let gray = Color::opaque(0.5, 0.5, 0.5).to_oklch();
    /// assert_eq!(gray.hue, 0.0);
    /// ```
    pub fn to_oklch(&self) -> OklchCoordinate {
        let polar = self.to_oklab().to_polar();
        OklchCoordinate::new(
            polar.lightness.clamp(0.0, 1.0),
            polar.chroma.max(0.0),
            polar.hue,
        )
    }
}

impl OklchCoordinate {
    /// Convert this coordinate to an sRGB color with the given alpha. The
    /// result is not clamped; check [`Color::in_gamut`] before displaying it.
    pub fn to_color(&self, alpha: Component) -> Color {
        let srgb = SrgbLinear::from(self.to_rectangular()).to_gamma_encoded();
        Color::with_components(srgb.to_components(), alpha)
    }

    /// The shortest angular distance between the hues of two coordinates, in
    /// degrees. Hues on either side of 0°/360° are close to each other.
    pub fn hue_distance(&self, other: &OklchCoordinate) -> Component {
        hue_distance(self.hue, other.hue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn oklch_of(r: u8, g: u8, b: u8) -> OklchCoordinate {
        Color::from_u8(r, g, b, 255).to_oklch()
    }

    #[test]
    fn black() {
        let black = oklch_of(0, 0, 0);
        assert_eq!(black.lightness, 0.0);
        assert_eq!(black.chroma, 0.0);
        assert_eq!(black.hue, 0.0);
    }

    #[test]
    fn white() {
        let white = oklch_of(255, 255, 255);
        assert_component_eq!(white.lightness, 1.0);
        assert!(white.lightness <= 1.0);
        assert_component_eq!(white.chroma, 0.0);
        assert_eq!(white.hue, 0.0);
    }

    #[test]
    fn grays_have_no_hue() {
        for v in [1, 17, 64, 128, 200, 254] {
            let gray = oklch_of(v, v, v);
            assert!(!gray.hue.is_nan());
            assert_eq!(gray.hue, 0.0, "gray {v}");
            assert_component_eq!(gray.chroma, 0.0);
        }

        assert_component_eq!(oklch_of(128, 128, 128).lightness, 0.5998708017071177);
    }

    #[test]
    fn primaries() {
        let red = oklch_of(255, 0, 0);
        assert_component_eq!(red.lightness, 0.6279553606145516);
        assert_component_eq!(red.chroma, 0.2576833077361567);
        approx::assert_abs_diff_eq!(red.hue, 29.233885192342633, epsilon = 1.0e-3);

        let green = oklch_of(0, 255, 0);
        assert_component_eq!(green.lightness, 0.8664396115356694);
        assert_component_eq!(green.chroma, 0.2948272403370166);
        approx::assert_abs_diff_eq!(green.hue, 142.49533888780996, epsilon = 1.0e-3);

        let blue = oklch_of(0, 0, 255);
        assert_component_eq!(blue.lightness, 0.4520137183853429);
        assert_component_eq!(blue.chroma, 0.31321437166460114);
        approx::assert_abs_diff_eq!(blue.hue, 264.052020638055, epsilon = 1.0e-3);
    }

    #[test]
    fn azure() {
        // #0088ff
        let azure = oklch_of(0x00, 0x88, 0xff);
        assert_component_eq!(azure.lightness, 0.6320535731799914);
        assert_component_eq!(azure.chroma, 0.2017874155540712);
        approx::assert_abs_diff_eq!(azure.hue, 254.08790274034567, epsilon = 1.0e-3);
    }

    #[test]
    fn oklab_of_azure() {
        let lab = Color::from_u8(0x00, 0x88, 0xff, 0xff).to_oklab();
        assert_component_eq!(lab.a, -0.05532249626298308);
        assert_component_eq!(lab.b, -0.19405561698447082);
    }

    #[test]
    fn round_trip_through_oklch() {
        let color = Color::new(0.8, 0.3, 0.1, 0.6);
        let back = color.to_oklch().to_color(color.alpha);
        assert_component_eq!(back.red, 0.8);
        assert_component_eq!(back.green, 0.3);
        assert_component_eq!(back.blue, 0.1);
        assert_eq!(back.alpha, 0.6);
    }

    #[test]
    fn hue_is_continuous_across_zero() {
        let hues: [Component; 6] = [358.5, 359.5, 359.9, 0.1, 0.5, 1.5];

        let converted = hues.map(|hue| {
            let source = OklchCoordinate::new(0.7, 0.1, hue);
            let color = source.to_color(1.0);
            assert!(color.in_gamut(), "oklch(0.7 0.1 {hue}) is not in sRGB");

            let back = color.to_oklch();
            assert!((0.0..360.0).contains(&back.hue));
            assert!(back.hue_distance(&source) < 0.01, "{hue} became {}", back.hue);
            back
        });

        for pair in converted.windows(2) {
            let expected = hue_distance(pair[0].hue, pair[1].hue);
            assert!(expected <= 1.0 + 0.01, "jump from {} to {}", pair[0].hue, pair[1].hue);
            assert!(pair[0].hue_distance(&pair[1]) <= 1.0 + 0.01);
        }
    }
}
