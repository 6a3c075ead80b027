//! Conversions between the RGB and HSV notations.
//!
//! RGB channels are in `[0, 255]` in both directions. Hues are in degrees,
//! saturation and value in `[0, 1]`.
//!
//! ```rust
//! use spectra::{Hsv, Rgb};
//! let hsv = Rgb::new(0.0, 255.0, 0.0).to_hsv();
//! assert_eq!(hsv, Hsv::new(120.0, 1.0, 1.0));
//! assert_eq!(hsv.to_rgb(), Rgb::new(0.0, 255.0, 0.0));
//! ```

use crate::models::{Hsv, Rgb};

impl Rgb {
    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(&self.to_components()).into()
    }
}

impl Hsv {
    /// Convert this color to the RGB notation.
    pub fn to_rgb(&self) -> Rgb {
        util::hsv_to_rgb(&self.to_components()).into()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::normalize_hue,
    };

    /// The largest value of an RGB channel.
    const MAX_CHANNEL: Component = 255.0;

    /// Convert from RGB notation to HSV notation.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let Components(red, green, blue) = from.map(|c| c / MAX_CHANNEL);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let value = max;
        if value == 0.0 {
            return Components(0.0, 0.0, 0.0);
        }

        let saturation = delta / max;
        if saturation == 0.0 {
            return Components(0.0, 0.0, value);
        }

        let hue = 60.0
            * if max == red {
                (green - blue) / delta
            } else if max == green {
                2.0 + (blue - red) / delta
            } else {
                4.0 + (red - green) / delta
            };

        Components(normalize_hue(hue), saturation, value)
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;

        let chroma = saturation * value;
        let h_dash = hue / 60.0;
        let x = chroma * (1.0 - ((h_dash % 2.0) - 1.0).abs());

        let (red, green, blue) = if (0.0..1.0).contains(&h_dash) {
            (chroma, x, 0.0)
        } else if (1.0..2.0).contains(&h_dash) {
            (x, chroma, 0.0)
        } else if (2.0..3.0).contains(&h_dash) {
            (0.0, chroma, x)
        } else if (3.0..4.0).contains(&h_dash) {
            (0.0, x, chroma)
        } else if (4.0..5.0).contains(&h_dash) {
            (x, 0.0, chroma)
        } else if (5.0..=6.0).contains(&h_dash) {
            (chroma, 0.0, x)
        } else {
            // Out of range hues only keep the gray part.
            (0.0, 0.0, 0.0)
        };

        let min = value - chroma;

        Components(red + min, green + min, blue + min).map(|c| c * MAX_CHANNEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_channel_eq, assert_component_eq, color::Component};

    #[test]
    fn primaries_and_extremes_to_hsv() {
        #[rustfmt::skip]
        const TESTS: &[(Component, Component, Component, Component, Component, Component)] = &[
            (255.0,   0.0,   0.0,   0.0, 1.0, 1.0),
            (  0.0, 255.0,   0.0, 120.0, 1.0, 1.0),
            (  0.0,   0.0, 255.0, 240.0, 1.0, 1.0),
            (255.0, 255.0, 255.0,   0.0, 0.0, 1.0),
            (  0.0,   0.0,   0.0,   0.0, 0.0, 0.0),
            (255.0, 255.0,   0.0,  60.0, 1.0, 1.0),
            (  0.0, 255.0, 255.0, 180.0, 1.0, 1.0),
            (255.0,   0.0, 255.0, 300.0, 1.0, 1.0),
        ];

        for &(r, g, b, h, s, v) in TESTS {
            println!("rgb({r}, {g}, {b})");
            let hsv = Rgb::new(r, g, b).to_hsv();
            assert_channel_eq!(hsv.hue, h);
            assert_component_eq!(hsv.saturation, s);
            assert_component_eq!(hsv.value, v);
        }
    }

    #[test]
    fn chocolate() {
        let hsv = Rgb::new(210.0, 105.0, 30.0).to_hsv();
        assert_channel_eq!(hsv.hue, 25.0);
        assert_component_eq!(hsv.saturation, 0.857143);
        assert_component_eq!(hsv.value, 0.823529);

        let rgb = hsv.to_rgb();
        assert_channel_eq!(rgb.red, 210.0);
        assert_channel_eq!(rgb.green, 105.0);
        assert_channel_eq!(rgb.blue, 30.0);
    }

    #[test]
    fn negative_hue_is_wrapped() {
        // Red dominant with more blue than green lands below 0 before
        // wrapping.
        let hsv = Rgb::new(255.0, 0.0, 51.0).to_hsv();
        assert_channel_eq!(hsv.hue, 348.0);
    }

    #[test]
    fn barely_negative_hue_wraps_below_a_full_turn() {
        let hsv = Rgb::new(255.0, 0.0, 1.0e-5).to_hsv();
        assert!(hsv.hue >= 0.0);
        assert!(hsv.hue < 360.0);
    }

    #[test]
    fn hue_is_zero_without_saturation() {
        for gray in [1.0, 64.0, 128.0, 255.0] {
            let hsv = Rgb::new(gray, gray, gray).to_hsv();
            assert_eq!(hsv.hue, 0.0);
            assert_eq!(hsv.saturation, 0.0);
            assert_component_eq!(hsv.value, gray / 255.0);
        }
    }

    #[test]
    fn black_has_no_hue_or_saturation() {
        let hsv = Rgb::new(0.0, 0.0, 0.0).to_hsv();
        assert_eq!(hsv, Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn every_sector_to_rgb() {
        #[rustfmt::skip]
        const TESTS: &[(Component, Component, Component, Component)] = &[
            (  0.0, 255.0,   0.0,   0.0),
            ( 30.0, 255.0, 127.5,   0.0),
            ( 90.0, 127.5, 255.0,   0.0),
            (150.0,   0.0, 255.0, 127.5),
            (210.0,   0.0, 127.5, 255.0),
            (270.0, 127.5,   0.0, 255.0),
            (330.0, 255.0,   0.0, 127.5),
            (360.0, 255.0,   0.0,   0.0),
        ];

        for &(h, r, g, b) in TESTS {
            println!("hsv({h}, 1, 1)");
            let rgb = Hsv::new(h, 1.0, 1.0).to_rgb();
            assert_channel_eq!(rgb.red, r);
            assert_channel_eq!(rgb.green, g);
            assert_channel_eq!(rgb.blue, b);
        }
    }

    #[test]
    fn out_of_range_hue_keeps_only_gray() {
        for hue in [-10.0, 420.0, Component::NAN] {
            let rgb = Hsv::new(hue, 0.5, 0.8).to_rgb();
            assert_channel_eq!(rgb.red, 102.0);
            assert_channel_eq!(rgb.green, 102.0);
            assert_channel_eq!(rgb.blue, 102.0);
        }
    }

    #[test]
    fn hsv_to_rgb_inverts_rgb_to_hsv() {
        let steps = (0..=255).step_by(51).map(|c| c as Component);
        for r in steps.clone() {
            for g in steps.clone() {
                for b in steps.clone() {
                    let rgb = Rgb::new(r, g, b).to_hsv().to_rgb();
                    assert_channel_eq!(rgb.red, r);
                    assert_channel_eq!(rgb.green, g);
                    assert_channel_eq!(rgb.blue, b);
                }
            }
        }
    }
}
