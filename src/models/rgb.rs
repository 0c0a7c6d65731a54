//! Model a color in the sRGB and Display-P3 color spaces, either gamma
//! encoded or in linear light.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
};

/// Tags for how the components of a model are encoded.
pub mod encoding {
    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding {}

    /// Components are stored with the transfer function of the color space
    /// applied. This is what hex and `color()` notations hold.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity. Matrices only operate
    /// on these.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

/// Tags for the RGB color spaces and their transfer functions.
pub mod space {
    use crate::color::Components;

    /// This trait is used to identify tags that specify a color space.
    pub trait Space {}

    /// The transfer function between gamma encoded and linear light
    /// components of a color space.
    pub trait TransferFunction {
        /// Convert the components from linear light to gamma encoded.
        fn to_gamma_encoded(from: &Components) -> Components;

        /// Convert the components from gamma encoded to linear light.
        fn to_linear_light(from: &Components) -> Components;
    }

    /// Tag for the sRGB color space.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Srgb;

    impl Space for Srgb {}

    impl TransferFunction for Srgb {
        fn to_gamma_encoded(from: &Components) -> Components {
            from.map(|value| {
                let abs = value.abs();

                if abs > 0.0031308 {
                    value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
                } else {
                    12.92 * value
                }
            })
        }

        fn to_linear_light(from: &Components) -> Components {
            from.map(|value| {
                let abs = value.abs();

                if abs > 0.04045 {
                    value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
                } else {
                    value / 12.92
                }
            })
        }
    }

    /// Tag for the Display-P3 color space.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct DisplayP3;

    impl Space for DisplayP3 {}

    /// Display-P3 shares the sRGB transfer curve; only the primaries differ.
    impl TransferFunction for DisplayP3 {
        fn to_gamma_encoded(from: &Components) -> Components {
            Srgb::to_gamma_encoded(from)
        }

        fn to_linear_light(from: &Components) -> Components {
            Srgb::to_linear_light(from)
        }
    }
}

chromalens_macros::gen_model! {
    /// A color specified in an RGB color space.
    pub struct Rgb<S: space::Space, E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl<S: space::Space + space::TransferFunction> Rgb<S, encoding::GammaEncoded> {
    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> Rgb<S, encoding::LinearLight> {
        S::to_linear_light(&self.to_components()).into()
    }
}

impl<S: space::Space + space::TransferFunction> Rgb<S, encoding::LinearLight> {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Rgb<S, encoding::GammaEncoded> {
        S::to_gamma_encoded(&self.to_components()).into()
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<space::Srgb, encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<space::Srgb, encoding::LinearLight>;

/// Model for a color in the Display-P3 color space with gamma encoding.
pub type DisplayP3 = Rgb<space::DisplayP3, encoding::GammaEncoded>;

/// Model for a color in the Display-P3 color space without gamma encoding.
pub type DisplayP3Linear = Rgb<space::DisplayP3, encoding::LinearLight>;

impl From<SrgbLinear> for DisplayP3Linear {
    /// Both spaces share the D65 white point, so the sRGB to XYZ-D65 and
    /// XYZ-D65 to Display-P3 matrices fold into a single matrix.
    fn from(value: SrgbLinear) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const SRGB_TO_P3: Transform = transform_3x3(
            0.8224619687143623,  0.03319419885096158, 0.017082630721120033,
            0.17753803128563772, 0.9668058011490382,  0.07239744066396347,
            0.0,                 0.0,                 0.9105199286149166,
        );

        transform(&SRGB_TO_P3, value.to_components()).into()
    }
}

impl From<DisplayP3Linear> for SrgbLinear {
    fn from(value: DisplayP3Linear) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const P3_TO_SRGB: Transform = transform_3x3(
             1.2249401762805598,  -0.042056954709688114, -0.01963755459033443,
            -0.22494017628055993,  1.0420569547096883,   -0.0786360455506319,
             0.0,                  0.0,                   1.098273600140966,
        );

        transform(&P3_TO_SRGB, value.to_components()).into()
    }
}
