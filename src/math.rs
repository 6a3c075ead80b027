//! Math utility functions.

use num_traits::{Float, NumCast};

/// Wrap a hue in degrees into `[0, 360)`. Non-finite hues are returned
/// unchanged.
pub fn normalize_hue<T: Float>(hue: T) -> T {
    if !hue.is_finite() {
        return hue;
    }

    let full = <T as NumCast>::from(360.0).unwrap_or_else(T::nan);
    let wrapped = hue % full;
    let wrapped = if wrapped < T::zero() {
        wrapped + full
    } else {
        wrapped
    };

    // Tiny negative hues round up to a full turn.
    if wrapped >= full {
        T::zero()
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_wraps_into_a_single_turn() {
        assert_eq!(normalize_hue(0.0_f32), 0.0);
        assert_eq!(normalize_hue(360.0_f32), 0.0);
        assert_eq!(normalize_hue(400.0_f64), 40.0);
        assert_eq!(normalize_hue(-30.0_f32), 330.0);
        assert_eq!(normalize_hue(-720.0_f64), 0.0);
        assert!(normalize_hue(f32::NAN).is_nan());
    }

    #[test]
    fn tiny_negative_hue_stays_below_a_full_turn() {
        assert_eq!(normalize_hue(-1.0e-6_f32), 0.0);
        assert!(normalize_hue(-1.0e-6_f64) < 360.0);
        assert!(normalize_hue(-1.0e-12_f64) < 360.0);
    }
}
