//! A [`ColorValue`] holds one color in both of the supported notations, RGB
//! and HSV, along with its alpha.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::models::{Hsv, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// The alpha used when none was specified.
pub const OPAQUE: Component = 1.0;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Flags to mark components that were missing from the input of a
    /// [`ColorValue`] and were filled in with a default.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the red channel was missing and defaulted to 0.
        const R_IS_NONE = 1 << 0;
        /// Set when the green channel was missing and defaulted to 0.
        const G_IS_NONE = 1 << 1;
        /// Set when the blue channel was missing and defaulted to 0.
        const B_IS_NONE = 1 << 2;
        /// Set when the alpha was missing and defaulted to 1.
        const ALPHA_IS_NONE = 1 << 3;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::empty()
    }
}

/// The notations a color can be specified in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Space {
    /// Red, green and blue channels, each in `[0, 255]`.
    #[default]
    Rgb = 0,
    /// Hue in `[0, 360)`, saturation and value in `[0, 1]`.
    Hsv = 1,
}

/// Implemented by models to tell which [`Space`] their components are in.
pub trait HasSpace {
    /// The notation of the model.
    const SPACE: Space;
}

/// A color with both its RGB and HSV notations populated.
///
/// The notation in `source` is authoritative, the other one is derived from
/// it. Use [`crate::normalize()`] to create one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    /// The color in RGB notation.
    pub rgb: Rgb,
    /// The color in HSV notation.
    pub hsv: Hsv,
    /// The alpha component of the color.
    #[serde(rename = "a")]
    pub alpha: Component,
    /// Holds any flags that might be enabled for this color.
    #[serde(skip)]
    pub flags: Flags,
    /// The notation that was last set.
    #[serde(skip)]
    pub source: Space,
}

impl ColorValue {
    /// Return the alpha component, or `None` if it was never specified.
    pub fn specified_alpha(&self) -> Option<Component> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }
}

/// A struct that holds details about a component passed into any of the
/// color inputs. Any components that can be passed implements a
/// `From<?> for ComponentDetails`.
#[derive(Clone, Copy, Debug)]
pub struct ComponentDetails {
    value: Component,
    is_none: bool,
}

impl ComponentDetails {
    /// Extract the value, or `missing` when the component is none, in which
    /// case the given flag is set.
    pub fn value_and_flag(
        &self,
        flags: &mut Flags,
        flag: Flags,
        missing: Component,
    ) -> Component {
        if self.is_none {
            *flags |= flag;
            missing
        } else {
            self.value
        }
    }

    /// Return the value, or `None` if the component was not specified.
    pub fn value(&self) -> Option<Component> {
        if self.is_none {
            None
        } else {
            Some(self.value)
        }
    }

    /// Return true if the component was not specified.
    pub fn is_none(&self) -> bool {
        self.is_none
    }
}

impl From<Component> for ComponentDetails {
    fn from(value: Component) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<Component>> for ComponentDetails {
    fn from(value: Option<Component>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 0.0,
                is_none: true,
            }
        }
    }
}
