//! Loosely specified RGB input, where each channel may be given by its short
//! name (`r`, `g`, `b`) or its long name (`red`, `green`, `blue`) and any of
//! them may be missing.

use serde_json::{Map, Value};

use crate::{
    color::{Component, ComponentDetails, Flags},
    models::{Hsv, Rgb},
};

/// RGB channels as they were passed in, before the aliases are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RgbInput {
    /// The red channel under its short name.
    pub r: Option<Component>,
    /// The green channel under its short name.
    pub g: Option<Component>,
    /// The blue channel under its short name.
    pub b: Option<Component>,
    /// The red channel under its long name.
    pub red: Option<Component>,
    /// The green channel under its long name.
    pub green: Option<Component>,
    /// The blue channel under its long name.
    pub blue: Option<Component>,
}

impl RgbInput {
    /// Create an input with the short channel names set. Each channel can be
    /// a [`Component`] or an `Option<Component>`.
    pub fn new(
        r: impl Into<ComponentDetails>,
        g: impl Into<ComponentDetails>,
        b: impl Into<ComponentDetails>,
    ) -> Self {
        Self {
            r: r.into().value(),
            g: g.into().value(),
            b: b.into().value(),
            ..Default::default()
        }
    }

    /// Read the channels from a JSON value. Returns `None` unless the value
    /// is an object with an `r` or `red` key.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        if !object.contains_key("r") && !object.contains_key("red") {
            return None;
        }
        Some(Self::from_object(object))
    }

    /// Read whichever channels are present in a JSON object.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            r: component(object, "r"),
            g: component(object, "g"),
            b: component(object, "b"),
            red: component(object, "red"),
            green: component(object, "green"),
            blue: component(object, "blue"),
        }
    }

    /// Resolve the aliases into a complete [`Rgb`]. A long name wins over
    /// the short one. Missing channels are 0 and get flagged.
    pub fn resolve(&self, flags: &mut Flags) -> Rgb {
        let red = ComponentDetails::from(self.red.or(self.r));
        let green = ComponentDetails::from(self.green.or(self.g));
        let blue = ComponentDetails::from(self.blue.or(self.b));

        Rgb::new(
            red.value_and_flag(flags, Flags::R_IS_NONE, 0.0),
            green.value_and_flag(flags, Flags::G_IS_NONE, 0.0),
            blue.value_and_flag(flags, Flags::B_IS_NONE, 0.0),
        )
    }
}

impl From<Rgb> for RgbInput {
    fn from(value: Rgb) -> Self {
        Self::new(value.red, value.green, value.blue)
    }
}

/// Read HSV components from a JSON object, missing or non-numeric
/// components are 0.
pub fn hsv_from_object(object: &Map<String, Value>) -> Hsv {
    Hsv::new(
        component(object, "h").unwrap_or(0.0),
        component(object, "s").unwrap_or(0.0),
        component(object, "v").unwrap_or(0.0),
    )
}

/// Read a single component. Numbers are taken as is, numeric strings are
/// parsed and booleans count as 1 or 0. Anything else, including strings
/// that parse to NaN or infinity, is missing.
pub fn component(object: &Map<String, Value>, key: &str) -> Option<Component> {
    match object.get(key)? {
        Value::Number(number) => number
            .as_f64()
            .map(|n| n as Component)
            .filter(|v| v.is_finite()),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<Component>().ok().filter(|v| v.is_finite())
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
