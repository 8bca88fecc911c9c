//! Math helpers shared across the coordinate engine.
//!
//! The clamped inverse-trig functions implement the engine's domain-violation
//! policy: spherical-trigonometry intermediates can land marginally outside
//! [-1, 1] through round-off, and a single bad point must never halt a
//! rendering or tracking loop. Arguments inside the round-off band are
//! clamped silently; arguments further out are logged as diagnostics and
//! still clamped, so both functions are total.

/// Arguments within this distance beyond ±1 are treated as round-off, not a
/// real domain violation.
pub const ROUNDOFF_TOLERANCE: f64 = 1e-6;

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// `sin²(x/2)` — the haversine of `x`, numerically stable for small `x`.
#[inline]
pub fn haversine(x: f64) -> f64 {
    let s = libm::sin(x / 2.0);
    s * s
}

/// Whether an out-of-domain argument is within the round-off band.
#[inline]
fn is_roundoff(x: f64) -> bool {
    x.abs() <= 1.0 + ROUNDOFF_TOLERANCE
}

/// Arc-cosine clamped to a total function.
///
/// - `|x| <= 1`: ordinary `acos`.
/// - `1 < |x| <= 1 + ROUNDOFF_TOLERANCE`: round-off, silently clamped to the
///   nearest boundary (0 or π).
/// - beyond that: genuine domain violation — a warning is logged and the
///   clamped best-effort value is returned anyway.
pub fn clamped_acos(x: f64) -> f64 {
    if x >= 1.0 {
        if !is_roundoff(x) {
            log::warn!("acos argument {x} out of range; clamping to 0");
        }
        0.0
    } else if x <= -1.0 {
        if !is_roundoff(x) {
            log::warn!("acos argument {x} out of range; clamping to pi");
        }
        crate::constants::PI
    } else {
        libm::acos(x)
    }
}

/// Arc-sine clamped to a total function, with the same round-off policy as
/// [`clamped_acos`].
pub fn clamped_asin(x: f64) -> f64 {
    if x >= 1.0 {
        if !is_roundoff(x) {
            log::warn!("asin argument {x} out of range; clamping to pi/2");
        }
        crate::constants::HALF_PI
    } else if x <= -1.0 {
        if !is_roundoff(x) {
            log::warn!("asin argument {x} out of range; clamping to -pi/2");
        }
        -crate::constants::HALF_PI
    } else {
        libm::asin(x)
    }
}
