//! Core angle type for the coordinate engine.
//!
//! [`Angle`] stores radians in an `f64` and exposes the degree, hour and
//! arcsecond views used throughout astronomy. Right ascension is an
//! hour-valued angle (24h = 360°); declination, altitude and latitude are
//! degree-valued. Nothing wraps implicitly: an angle keeps whatever value it
//! was built with until [`normalized`](Angle::normalized) or
//! [`wrapped`](Angle::wrapped) is asked for, so accumulated corrections of a
//! few milliarcseconds survive round-trips through any view exactly.
//!
//! # Quick start
//!
//! ```
//! use skypoint_core::Angle;
//!
//! let ra = Angle::from_hours(17.7067);
//! assert!((ra.degrees() - 265.6) < 0.01);
//!
//! // The paired sin/cos is the hot path of every transformation.
//! let (sin_ra, cos_ra) = ra.sin_cos();
//! assert!((sin_ra * sin_ra + cos_ra * cos_ra - 1.0).abs() < 1e-15);
//! ```

use crate::constants::{
    ARCSEC_PER_DEGREE, ARCSEC_TO_RAD, DEGREES_PER_HOUR, DEG_TO_RAD, HALF_PI, PI, RAD_TO_DEG,
};

/// An angular measurement stored as radians.
///
/// `Copy` by design: every transformation in the engine passes angles by
/// value, and an `Angle` is a single `f64`.
///
/// `Eq`/`Ord` are not implemented because `f64` can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle (0 radians).
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Pi radians (180 degrees).
    pub const PI: Self = Self { rad: PI };

    /// Pi/2 radians (90 degrees), the pole declination.
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// Creates an angle from radians. The only `const` constructor because
    /// radians are the internal representation.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    /// Creates an angle from hours (right-ascension convention, 1h = 15°).
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: h * DEGREES_PER_HOUR * DEG_TO_RAD,
        }
    }

    /// Creates an angle from arcseconds.
    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self {
            rad: arcsec * ARCSEC_TO_RAD,
        }
    }

    /// Returns the angle in radians (the internal representation).
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    /// Returns the angle in hours.
    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / DEGREES_PER_HOUR
    }

    /// Returns the angle in arcseconds.
    #[inline]
    pub fn arcseconds(self) -> f64 {
        self.degrees() * ARCSEC_PER_DEGREE
    }

    /// Returns the sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.rad.sin()
    }

    /// Returns the cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.rad.cos()
    }

    /// Returns both sine and cosine in one call.
    ///
    /// Every transformation needs both for each coordinate, so this is the
    /// performance-critical accessor of the whole engine.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    /// Returns the tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.rad.tan()
    }

    /// Returns the absolute value of the angle.
    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    /// Reduces the angle to [0, 2π) — [0, 360°), [0, 24h).
    ///
    /// This is the on-demand reduction for right ascension and azimuth; the
    /// stored value is never wrapped behind the caller's back.
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            rad: super::normalize::wrap_0_2pi(self.rad),
        }
    }

    /// Wraps the angle to [-π, +π) — shortest-arc representation for hour
    /// angles and longitude differences.
    #[inline]
    pub fn wrapped(self) -> Self {
        Self {
            rad: super::normalize::wrap_pm_pi(self.rad),
        }
    }

    /// Validates the angle as a declination in [-90°, +90°].
    ///
    /// # Errors
    ///
    /// Returns [`SkyError`](crate::SkyError) if the angle is not finite or
    /// lies beyond a pole.
    #[inline]
    pub fn validate_declination(self) -> Result<Self, crate::SkyError> {
        super::validate::validate_declination(self)
    }

    /// Validates the angle as a right ascension, reducing to [0, 24h).
    ///
    /// # Errors
    ///
    /// Returns [`SkyError`](crate::SkyError) if the angle is not finite.
    #[inline]
    pub fn validate_right_ascension(self) -> Result<Self, crate::SkyError> {
        super::validate::validate_right_ascension(self)
    }
}

/// Creates an angle from radians. Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}

/// Creates an angle from degrees. Shorthand for [`Angle::from_degrees`].
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}

/// Creates an angle from hours. Shorthand for [`Angle::from_hours`].
#[inline]
pub fn hours(v: f64) -> Angle {
    Angle::from_hours(v)
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}
