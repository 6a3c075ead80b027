//! Normalization fills in the notation of a color that was not specified, so
//! that a [`ColorValue`] always carries both RGB and HSV.
//!
//! ```rust
//! use spectra::{normalize, PartialColor, RgbInput};
//! let color = normalize(&PartialColor {
//!     rgb: Some(RgbInput::new(255.0, 0.0, 0.0)),
//!     ..Default::default()
//! })?;
//! assert_eq!(color.hsv.value, 1.0);
//! assert_eq!(color.alpha, 1.0);
//! # Ok::<(), spectra::Error>(())
//! ```

use serde_json::Value;

use crate::{
    color::{ColorValue, Component, ComponentDetails, Components, Flags, HasSpace, Space, OPAQUE},
    error::{Error, Result},
    input::{self, RgbInput},
    models::{Hsv, Model, Rgb},
};

/// A color specified in exactly one of the notations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorSpec {
    /// Specified with red, green and blue channels.
    Rgb(Rgb),
    /// Specified with hue, saturation and value.
    Hsv(Hsv),
}

impl ColorSpec {
    /// The notation the color was specified in.
    pub fn space(&self) -> Space {
        match self {
            ColorSpec::Rgb(_) => Rgb::SPACE,
            ColorSpec::Hsv(_) => Hsv::SPACE,
        }
    }

    /// The components of the color in its own notation.
    pub fn components(&self) -> Components {
        match self {
            ColorSpec::Rgb(rgb) => rgb.components(),
            ColorSpec::Hsv(hsv) => hsv.components(),
        }
    }
}

impl From<Rgb> for ColorSpec {
    fn from(value: Rgb) -> Self {
        ColorSpec::Rgb(value)
    }
}

impl From<Hsv> for ColorSpec {
    fn from(value: Hsv) -> Self {
        ColorSpec::Hsv(value)
    }
}

/// A color that might only have one of its notations, or none at all.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialColor {
    /// The RGB notation, with channel aliases still unresolved.
    pub rgb: Option<RgbInput>,
    /// The HSV notation.
    pub hsv: Option<Hsv>,
    /// The alpha component.
    pub alpha: Option<Component>,
}

impl PartialColor {
    /// Read a partial color shaped like a serialized [`ColorValue`], i.e.
    /// `{"rgb": {..}, "hsv": {..}, "a": ..}`. Keys that are not objects are
    /// ignored.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            rgb: object
                .get("rgb")
                .and_then(Value::as_object)
                .map(RgbInput::from_object),
            hsv: object
                .get("hsv")
                .and_then(Value::as_object)
                .map(input::hsv_from_object),
            alpha: input::component(object, "a"),
        }
    }
}

impl From<ColorSpec> for PartialColor {
    fn from(value: ColorSpec) -> Self {
        match value {
            ColorSpec::Rgb(rgb) => Self {
                rgb: Some(rgb.into()),
                ..Default::default()
            },
            ColorSpec::Hsv(hsv) => Self {
                hsv: Some(hsv),
                ..Default::default()
            },
        }
    }
}

/// Complete a partial color. RGB takes precedence when both notations are
/// present. Alpha defaults to 1.
pub fn normalize(partial: &PartialColor) -> Result<ColorValue> {
    let mut flags = Flags::empty();

    let spec = if let Some(rgb) = &partial.rgb {
        ColorSpec::Rgb(rgb.resolve(&mut flags))
    } else if let Some(hsv) = partial.hsv {
        ColorSpec::Hsv(hsv)
    } else {
        return Err(Error::IncompleteColorSpec);
    };

    Ok(derive(spec, partial.alpha, flags))
}

/// Complete a color specified in one notation. The alpha can be a
/// [`Component`] or an `Option<Component>`.
pub fn normalize_spec(
    spec: impl Into<ColorSpec>,
    alpha: impl Into<ComponentDetails>,
) -> ColorValue {
    derive(spec.into(), alpha.into().value(), Flags::empty())
}

fn derive(spec: ColorSpec, alpha: Option<Component>, mut flags: Flags) -> ColorValue {
    let alpha =
        ComponentDetails::from(alpha).value_and_flag(&mut flags, Flags::ALPHA_IS_NONE, OPAQUE);

    let (rgb, hsv) = match spec {
        ColorSpec::Rgb(rgb) => (rgb, rgb.to_hsv()),
        ColorSpec::Hsv(hsv) => (hsv.to_rgb(), hsv),
    };

    log::trace!(
        "normalized {:?} color: {:?} {:?} alpha {}",
        spec.space(),
        rgb,
        hsv,
        alpha
    );

    ColorValue {
        rgb,
        hsv,
        alpha,
        flags,
        source: spec.space(),
    }
}

impl ColorValue {
    /// The authoritative notation of this color.
    pub fn spec(&self) -> ColorSpec {
        match self.source {
            Space::Rgb => ColorSpec::Rgb(self.rgb),
            Space::Hsv => ColorSpec::Hsv(self.hsv),
        }
    }

    /// Derive the other notation again from the authoritative one. Alpha and
    /// flags are kept.
    pub fn normalized(&self) -> ColorValue {
        derive(self.spec(), Some(self.alpha), self.flags)
    }
}
