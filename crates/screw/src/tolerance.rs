//! Numeric tolerance policy.
//!
//! Two independent knobs: [`adjust`] snaps floating-point noise to an exact
//! zero, [`round`] quantizes a coordinate for display or coarse comparison.

use screw_math::Scalar;

/// Magnitudes strictly below this are treated as exactly zero.
pub const ZERO_TOLERANCE: f64 = 1e-6;

/// Decimal digits kept by [`round`].
pub const ROUND_DIGITS: i32 = 3;

/// Snap `v` to zero when `|v| < ZERO_TOLERANCE`.
#[inline]
pub fn adjust<S: Scalar>(v: S) -> S {
    if v.abs().to_f64() < ZERO_TOLERANCE {
        S::ZERO
    } else {
        v
    }
}

/// Round `v` to [`ROUND_DIGITS`] decimal places.
#[inline]
pub fn round<S: Scalar>(v: S) -> S {
    let scale = S::from_f64(10f64.powi(ROUND_DIGITS));
    (v * scale).round() / scale
}
