//! Level conversions.
//!
//! - [`gain_coefficient`] - the control-port gain law, with a hard mute floor
//! - [`db_to_linear`] / [`linear_to_db`] - plain conversions

use libm::{log10f, powf};

/// Gains at or below this level are a hard mute.
pub const MUTE_FLOOR_DB: f32 = -90.0;

/// Convert a control value in dB to the linear gain coefficient.
///
/// `10^(dB * 0.05)` above [`MUTE_FLOOR_DB`], `0.0` at or below it.
///
/// # Example
/// ```rust
/// use octaver_core::gain_coefficient;
///
/// assert_eq!(gain_coefficient(0.0), 1.0);
/// assert_eq!(gain_coefficient(-90.0), 0.0);
/// assert!((gain_coefficient(-20.0) - 0.1).abs() < 1e-6);
/// ```
#[inline]
pub fn gain_coefficient(db: f32) -> f32 {
    if db > MUTE_FLOOR_DB {
        db_to_linear(db)
    } else {
        0.0
    }
}

/// Convert decibels to linear gain, with no floor.
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    powf(10.0, db * 0.05)
}

/// Convert linear gain to decibels.
///
/// Non-positive input reports `-120.0` instead of `-inf`.
///
/// # Example
/// ```rust
/// use octaver_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert_eq!(linear_to_db(0.0), -120.0);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * log10f(linear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_at_zero_db() {
        assert_eq!(gain_coefficient(0.0), 1.0);
    }

    #[test]
    fn mute_at_floor() {
        assert_eq!(gain_coefficient(-90.0), 0.0);
        assert_eq!(gain_coefficient(-120.0), 0.0);
        assert_eq!(gain_coefficient(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn just_above_floor_is_tiny_but_nonzero() {
        let coef = gain_coefficient(-89.9);
        assert!(coef > 0.0 && coef < 1e-4, "got {coef}");
    }

    #[test]
    fn monotonic_above_floor() {
        let mut prev = gain_coefficient(-89.5);
        let mut db = -89.0;
        while db <= 24.0 {
            let curr = gain_coefficient(db);
            assert!(curr > prev, "not increasing at {db} dB: {prev} >= {curr}");
            prev = curr;
            db += 0.5;
        }
    }

    #[test]
    fn db_roundtrip() {
        let db = linear_to_db(db_to_linear(-6.0));
        assert!((db + 6.0).abs() < 1e-4, "got {db}");
    }
}
