//! Model a color with the HSV (hue, saturation, value) notation.

use serde::{Deserialize, Serialize};

use crate::color::{Component, HasSpace, Space};

spectra_macros::gen_model! {
    /// A color specified with the HSV notation.
    #[derive(Serialize, Deserialize)]
    pub struct Hsv {
        /// The hue in degrees, in `[0, 360)`.
        #[serde(rename = "h")]
        hue: Component,
        /// The saturation, in `[0, 1]`.
        #[serde(rename = "s")]
        saturation: Component,
        /// The value, in `[0, 1]`.
        #[serde(rename = "v")]
        value: Component,
    }
}

impl HasSpace for Hsv {
    const SPACE: Space = Space::Hsv;
}
