//! spectra wraps a color value and keeps its RGB and HSV notations in sync
//! while its channels are read and changed.
//!
//! ```rust
//! use serde_json::json;
//!
//! let mut color = spectra::spectra(&json!({ "r": 0, "g": 0, "b": 255 }));
//! assert_eq!(color.hue()?, 240.0);
//!
//! color.set_red(255.0)?;
//! assert_eq!(color.hue()?, 300.0);
//! # Ok::<(), spectra::Error>(())
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod input;
mod math;
mod models;
mod normalize;
mod spectra;

#[cfg(test)]
mod test;

pub use color::{ColorValue, Component, ComponentDetails, Components, Flags, HasSpace, Space};
pub use error::{Error, Result};
pub use input::RgbInput;
pub use math::normalize_hue;
pub use models::{Hsv, Model, Rgb};
pub use normalize::{normalize, normalize_spec, ColorSpec, PartialColor};
pub use self::spectra::{spectra, Spectra};
