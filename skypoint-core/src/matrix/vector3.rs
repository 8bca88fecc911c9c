//! 3D Cartesian vectors for celestial coordinate math.
//!
//! Positions arrive as spherical coordinates (RA/Dec) but frame
//! transformations are cleanest in Cartesian form. The usual loop is
//! spherical → [`from_spherical`](Vector3::from_spherical) → rotate →
//! [`to_spherical`](Vector3::to_spherical) → spherical.

use crate::math::clamped_asin;

/// A 3D Cartesian vector.
///
/// Components are public for direct access:
/// - `x`: toward the vernal equinox (RA 0h, Dec 0°)
/// - `y`: RA 6h on the equator
/// - `z`: toward the north celestial pole
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Unit direction vector for spherical coordinates (radians).
    ///
    /// `lon` is RA-like (measured from +x toward +y), `lat` is Dec-like
    /// (elevation above the xy plane).
    #[inline]
    pub fn from_spherical(lon: f64, lat: f64) -> Self {
        let (sin_lon, cos_lon) = lon.sin_cos();
        let (sin_lat, cos_lat) = lat.sin_cos();
        Self {
            x: cos_lat * cos_lon,
            y: cos_lat * sin_lon,
            z: sin_lat,
        }
    }

    /// Recovers `(lon, lat)` in radians from a unit direction vector.
    ///
    /// `lon` comes back in (-π, π] via `atan2`; `lat` via a clamped arc-sine
    /// so that rotation round-off on the z component cannot produce NaN.
    #[inline]
    pub fn to_spherical(self) -> (f64, f64) {
        (self.y.atan2(self.x), clamped_asin(self.z))
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scales the vector to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`MathErrorKind::DegenerateVector`](crate::MathErrorKind) for
    /// a zero or near-zero vector, which has no direction.
    pub fn normalize(self) -> Result<Self, crate::SkyError> {
        let m = self.magnitude();
        if m < 1e-300 {
            return Err(crate::SkyError::math_error(
                "Vector3::normalize",
                crate::MathErrorKind::DegenerateVector,
                "cannot normalize a zero-length vector",
            ));
        }
        Ok(Self::new(self.x / m, self.y / m, self.z / m))
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Builds a vector from `[x, y, z]`.
    #[inline]
    pub fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}
