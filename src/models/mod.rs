//! Each notation is modeled with its own type. Conversions between them live
//! in [`crate::convert`].

use crate::color::{Components, HasSpace};

pub mod hsv;
pub mod rgb;

pub use hsv::Hsv;
pub use rgb::Rgb;

/// A trait implemented for color models that can be converted to and from
/// generic [`Components`]. Implemented by `gen_model!`.
pub trait Model: HasSpace + Copy {
    /// The three components of the model, in declaration order.
    fn components(&self) -> Components;

    /// Create the model from generic components.
    fn from_components(components: Components) -> Self;
}
