//! Models are structs that represent a color in a specified color space or
//! form. They represent a type safe way to convert between color spaces: a
//! matrix only accepts linear light components and a transfer function only
//! runs in the direction the encoding tag allows.

pub mod lab;
pub mod rgb;

pub use lab::{Oklab, OklchCoordinate, ACHROMATIC_THRESHOLD};
pub use rgb::{DisplayP3, DisplayP3Linear, Srgb, SrgbLinear};
