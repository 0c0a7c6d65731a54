//! Models for the rectangular and polar forms of the Oklab color space.
//! <https://bottosson.github.io/posts/oklab/>

use crate::{
    color::Component,
    math::{almost_zero, normalize_hue, transform, transform_3x3, Transform},
    models::rgb::SrgbLinear,
};

/// Below this chroma a color is treated as achromatic and its hue is 0.
pub const ACHROMATIC_THRESHOLD: Component = 1.0e-5;

chromalens_macros::gen_model! {
    /// A color in the Oklab color space, in the rectangular orthogonal form.
    pub struct Oklab {
        /// The perceptual lightness, 0 for black and 1 for white.
        pub lightness: Component,
        /// The green-red axis.
        pub a: Component,
        /// The blue-yellow axis.
        pub b: Component,
    }
}

impl Oklab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form. Achromatic colors get a hue of 0 instead of an undefined one.
    pub fn to_polar(&self) -> OklchCoordinate {
        let chroma = self.a.hypot(self.b);
        let hue = if almost_zero(chroma, ACHROMATIC_THRESHOLD) {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        OklchCoordinate::new(self.lightness, chroma, hue)
    }
}

chromalens_macros::gen_model! {
    /// A color in the Oklab color space, in the cylindrical polar form
    /// (OKLCH).
    pub struct OklchCoordinate {
        /// The perceptual lightness in [0..1].
        pub lightness: Component,
        /// The chroma, 0 for grays. Colors inside the sRGB gamut stay below
        /// 0.33.
        pub chroma: Component,
        /// The hue angle in degrees, in [0..360).
        pub hue: Component,
    }
}

impl OklchCoordinate {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Oklab {
        let (sin, cos) = self.hue.to_radians().sin_cos();
        Oklab::new(self.lightness, self.chroma * cos, self.chroma * sin)
    }
}

impl From<SrgbLinear> for Oklab {
    fn from(value: SrgbLinear) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const SRGB_TO_LMS: Transform = transform_3x3(
            0.4122214708, 0.2119034982, 0.0883024619,
            0.5363325363, 0.6806995451, 0.2817188376,
            0.0514459929, 0.1073969566, 0.6299787005,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_OKLAB: Transform = transform_3x3(
             0.2104542553,  1.9779984951,  0.0259040371,
             0.7936177850, -2.4285922050,  0.7827717662,
            -0.0040720468,  0.4505937099, -0.8086757660,
        );

        let lms = transform(&SRGB_TO_LMS, value.to_components());
        let lms = lms.map(|v| v.cbrt());
        transform(&LMS_TO_OKLAB, lms).into()
    }
}

impl From<Oklab> for SrgbLinear {
    fn from(value: Oklab) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const OKLAB_TO_LMS: Transform = transform_3x3(
            1.0,           1.0,           1.0,
            0.3963377774, -0.1055613458, -0.0894841775,
            0.2158037573, -0.0638541728, -1.2914855480,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_SRGB: Transform = transform_3x3(
             4.0767416621, -1.2684380046, -0.0041960863,
            -3.3077115913,  2.6097574011, -0.7034186147,
             0.2309699292, -0.3413193965,  1.7076147010,
        );

        let lms = transform(&OKLAB_TO_LMS, value.to_components());
        let lms = lms.map(|v| v * v * v);
        transform(&LMS_TO_SRGB, lms).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn converting_to_polar_sets_hue_to_zero_for_small_a_b_values() {
        let polar = Oklab::new(0.5, 0.0, 0.0).to_polar();
        assert_eq!(polar.hue, 0.0);
        assert_eq!(polar.chroma, 0.0);

        let polar = Oklab::new(0.5, 1.0e-7, -3.0e-7).to_polar();
        assert_eq!(polar.hue, 0.0);
        assert!(!polar.hue.is_nan());
    }

    #[test]
    fn polar_hue_is_normalized() {
        // atan2 returns negative angles for negative b.
        let polar = Oklab::new(0.5, 0.0, -0.1).to_polar();
        assert_component_eq!(polar.chroma, 0.1);
        assert_component_eq!(polar.hue, 270.0);

        let polar = Oklab::new(0.5, -0.1, 0.0).to_polar();
        assert_component_eq!(polar.hue, 180.0);
    }

    #[test]
    fn polar_round_trip() {
        let lab = Oklab::new(0.6, -0.05, 0.12);
        let back = lab.to_polar().to_rectangular();
        assert_component_eq!(back.lightness, 0.6);
        assert_component_eq!(back.a, -0.05);
        assert_component_eq!(back.b, 0.12);
    }

    #[test]
    fn linear_srgb_white_is_oklab_white() {
        let white = Oklab::from(SrgbLinear::new(1.0, 1.0, 1.0));
        assert_component_eq!(white.lightness, 1.0);
        assert_component_eq!(white.a, 0.0);
        assert_component_eq!(white.b, 0.0);
    }

    #[test]
    fn oklab_round_trip_through_linear_srgb() {
        let source = SrgbLinear::new(0.7, 0.1, 0.3);
        let back = SrgbLinear::from(Oklab::from(source));
        assert_component_eq!(back.red, 0.7);
        assert_component_eq!(back.green, 0.1);
        assert_component_eq!(back.blue, 0.3);
    }
}
