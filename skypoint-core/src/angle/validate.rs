//! Validation of angles for specific astronomical roles.
//!
//! Validation happens once, at the API boundary where a catalog position is
//! built. The transformation pipeline itself trusts its inputs and never
//! re-validates.

use super::core::Angle;
use crate::errors::{MathErrorKind, SkyError};

fn require_finite(angle: Angle, context: &str) -> Result<(), SkyError> {
    if !angle.radians().is_finite() {
        return Err(SkyError::math_error(
            context,
            MathErrorKind::NotFinite,
            "angle is NaN or infinite",
        ));
    }
    Ok(())
}

/// Validates a declination: finite and within [-90°, +90°].
pub fn validate_declination(angle: Angle) -> Result<Angle, SkyError> {
    require_finite(angle, "declination")?;
    let d = angle.degrees();
    if !(-90.0..=90.0).contains(&d) {
        return Err(SkyError::invalid_coordinate(
            "declination",
            &format!("{d} degrees is outside [-90, +90]"),
        ));
    }
    Ok(angle)
}

/// Validates a right ascension: finite, reduced to [0, 24h).
///
/// Unlike declination, right ascension is cyclic, so any finite value is
/// accepted and normalized.
pub fn validate_right_ascension(angle: Angle) -> Result<Angle, SkyError> {
    require_finite(angle, "right ascension")?;
    Ok(angle.normalized())
}
