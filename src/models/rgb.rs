//! Model a color with red, green and blue channels.

use serde::{Deserialize, Serialize};

use crate::color::{Component, HasSpace, Space};

spectra_macros::gen_model! {
    /// A color specified with red, green and blue channels, each
    /// conventionally in `[0, 255]`.
    #[derive(Serialize, Deserialize)]
    pub struct Rgb {
        /// The red channel of the color.
        #[serde(rename = "r")]
        red: Component,
        /// The green channel of the color.
        #[serde(rename = "g")]
        green: Component,
        /// The blue channel of the color.
        #[serde(rename = "b")]
        blue: Component,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}
