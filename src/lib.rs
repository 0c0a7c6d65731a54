//! chromalens converts colors written as hex or `rgb()`/`rgba()` into the
//! Display-P3 and OKLCH notations used by CSS.
//!
//! Input is parsed into a [`Color`], converted to a [`P3Coordinate`] or an
//! [`OklchCoordinate`] and rendered back into text:
//! ```rust
//! use chromalens::{convert, convert_all, ColorSpace};
//!
//! assert_eq!(convert("#ff0000", ColorSpace::Oklch).unwrap(), "oklch(0.628 0.258 29.2)");
//!
//! let all = convert_all("#0088ff").unwrap();
//! assert_eq!(all.hex, "#0088ff");
//! assert_eq!(all.p3, "color(display-p3 0.231 0.525 0.968)");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod format;
mod gamut;
mod math;
pub mod models;
mod oklch;
mod parse;


pub use color::{Color, ColorSpace, Component, Components};
pub use convert::{convert, convert_all, Conversions};
pub use error::{ConversionError, ParseError, UnknownColorSpace};
pub use format::Converted;
pub use gamut::{Channels, P3Coordinate, GAMUT_TOLERANCE};
pub use models::{Oklab, OklchCoordinate};
pub use parse::parse;
