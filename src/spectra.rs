//! [`Spectra`] wraps a single color and keeps its RGB and HSV notations in
//! sync while individual channels are read and changed.
//!
//! ```rust
//! use serde_json::json;
//! use spectra::Spectra;
//!
//! let mut color = Spectra::from_value(&json!({ "red": 255, "green": 0, "blue": 0 }));
//! color.set_green(255.0)?.set_blue(0.0)?;
//! assert_eq!(color.hue()?, 60.0);
//! # Ok::<(), spectra::Error>(())
//! ```

use serde_json::Value;

use crate::{
    color::{ColorValue, Component, ComponentDetails, Flags, Space},
    error::{Error, Result},
    input::RgbInput,
    math::normalize_hue,
    models::{Hsv, Rgb},
    normalize::{normalize, normalize_spec, ColorSpec, PartialColor},
};

/// Holds one normalized color, or nothing if it was created from input that
/// is not a color.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spectra {
    color: Option<ColorValue>,
}

impl Spectra {
    /// Create a wrapper around a color specified in either notation. The alpha
    /// can be a [`Component`] or an `Option<Component>`.
    pub fn new(spec: impl Into<ColorSpec>, alpha: impl Into<ComponentDetails>) -> Self {
        Self {
            color: Some(normalize_spec(spec, alpha)),
        }
    }

    /// Create a wrapper from an RGB-like JSON object, one that has an `r` or
    /// `red` key. Any other input results in a wrapper without a color, on
    /// which every accessor fails with [`Error::MissingColorValue`].
    pub fn from_value(value: &Value) -> Self {
        match Self::try_from_value(value) {
            Ok(spectra) => spectra,
            Err(err) => {
                log::warn!("{err}");
                Self::default()
            }
        }
    }

    /// Like [`Spectra::from_value`], but input that is not RGB-like is an
    /// error.
    pub fn try_from_value(value: &Value) -> Result<Self> {
        let rgb = RgbInput::from_value(value).ok_or_else(|| Error::invalid_input(value))?;
        let color = normalize(&PartialColor {
            rgb: Some(rgb),
            ..Default::default()
        })?;

        Ok(Self { color: Some(color) })
    }

    /// Return true if the wrapper holds a color.
    pub fn is_set(&self) -> bool {
        self.color.is_some()
    }

    /// The whole color value.
    pub fn color(&self) -> Result<&ColorValue> {
        self.color.as_ref().ok_or(Error::MissingColorValue)
    }

    /// Consume the wrapper and return its color value.
    pub fn into_color(self) -> Result<ColorValue> {
        self.color.ok_or(Error::MissingColorValue)
    }

    /// The color in RGB notation.
    pub fn rgb(&self) -> Result<Rgb> {
        Ok(self.color()?.rgb)
    }

    /// The color in HSV notation.
    pub fn hsv(&self) -> Result<Hsv> {
        Ok(self.color()?.hsv)
    }

    /// The red channel.
    pub fn red(&self) -> Result<Component> {
        Ok(self.color()?.rgb.red)
    }

    /// The green channel.
    pub fn green(&self) -> Result<Component> {
        Ok(self.color()?.rgb.green)
    }

    /// The blue channel.
    pub fn blue(&self) -> Result<Component> {
        Ok(self.color()?.rgb.blue)
    }

    /// The hue in degrees.
    pub fn hue(&self) -> Result<Component> {
        Ok(self.color()?.hsv.hue)
    }

    /// The saturation.
    pub fn saturation(&self) -> Result<Component> {
        Ok(self.color()?.hsv.saturation)
    }

    /// The value.
    pub fn value(&self) -> Result<Component> {
        Ok(self.color()?.hsv.value)
    }

    /// The alpha.
    pub fn alpha(&self) -> Result<Component> {
        Ok(self.color()?.alpha)
    }

    /// Set the red channel and derive the HSV notation from RGB.
    pub fn set_red(&mut self, red: Component) -> Result<&mut Self> {
        self.update(Space::Rgb, Flags::R_IS_NONE, |color| color.rgb.red = red)
    }

    /// Set the green channel and derive the HSV notation from RGB.
    pub fn set_green(&mut self, green: Component) -> Result<&mut Self> {
        self.update(Space::Rgb, Flags::G_IS_NONE, |color| color.rgb.green = green)
    }

    /// Set the blue channel and derive the HSV notation from RGB.
    pub fn set_blue(&mut self, blue: Component) -> Result<&mut Self> {
        self.update(Space::Rgb, Flags::B_IS_NONE, |color| color.rgb.blue = blue)
    }

    /// Set the hue, wrapped into `[0, 360)`, and derive the RGB notation from
    /// HSV.
    pub fn set_hue(&mut self, hue: Component) -> Result<&mut Self> {
        self.update(Space::Hsv, Flags::empty(), |color| {
            color.hsv.hue = normalize_hue(hue)
        })
    }

    /// Set the saturation and derive the RGB notation from HSV.
    pub fn set_saturation(&mut self, saturation: Component) -> Result<&mut Self> {
        self.update(Space::Hsv, Flags::empty(), |color| {
            color.hsv.saturation = saturation
        })
    }

    /// Set the value and derive the RGB notation from HSV.
    pub fn set_value(&mut self, value: Component) -> Result<&mut Self> {
        self.update(Space::Hsv, Flags::empty(), |color| color.hsv.value = value)
    }

    /// Set the alpha. Neither notation changes.
    pub fn set_alpha(&mut self, alpha: Component) -> Result<&mut Self> {
        let color = self.color.as_mut().ok_or(Error::MissingColorValue)?;
        color.alpha = alpha;
        color.flags.remove(Flags::ALPHA_IS_NONE);
        Ok(self)
    }

    /// Change one notation of the color, make it authoritative and derive the
    /// other one from it.
    fn update(
        &mut self,
        source: Space,
        specified: Flags,
        f: impl FnOnce(&mut ColorValue),
    ) -> Result<&mut Self> {
        let color = self.color.as_mut().ok_or(Error::MissingColorValue)?;

        f(color);
        color.source = source;
        color.flags.remove(specified);
        *color = color.normalized();

        Ok(self)
    }
}

impl From<ColorValue> for Spectra {
    fn from(value: ColorValue) -> Self {
        Self { color: Some(value) }
    }
}

impl TryFrom<&Value> for Spectra {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        Self::try_from_value(value)
    }
}

/// Wrap a JSON value in a [`Spectra`]. Shorthand for
/// [`Spectra::from_value`].
pub fn spectra(value: &Value) -> Spectra {
    Spectra::from_value(value)
}
