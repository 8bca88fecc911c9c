//! The [`SkyPoint`] type: a position on the celestial sphere.
//!
//! A point carries two equatorial coordinate pairs with distinct roles:
//!
//! - **catalog** (`ra0`, `dec0`): the position as cataloged, fixed at
//!   construction and changed only by [`set_catalog`](SkyPoint::set_catalog);
//! - **current** (`ra`, `dec`): the working position at whatever epoch the
//!   last transformation produced. Every reduction starts over from the
//!   catalog pair, so transformations never accumulate error across calls.
//!
//! A unit direction vector is kept in lockstep with the current pair; all
//! writes to the current position go through one internal setter so the two
//! representations cannot drift apart.
//!
//! Horizontal coordinates (altitude/azimuth) are observer- and
//! time-dependent, so they are `Option`s: `None` until an explicit
//! horizontal conversion, and meaningful only for the site and instant of
//! that conversion.

use skypoint_core::math::{clamped_asin, haversine};
use skypoint_core::{Angle, SkyResult, Vector3};

/// A position on the celestial sphere.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkyPoint {
    ra0: Angle,
    dec0: Angle,
    ra: Angle,
    dec: Angle,
    alt: Option<Angle>,
    az: Option<Angle>,
    dir: Vector3,
}

impl SkyPoint {
    /// Creates a point from catalog right ascension and declination.
    ///
    /// The right ascension is normalized into [0°, 360°); a declination
    /// outside [-90°, 90°] is rejected. The current position starts equal
    /// to the catalog position.
    pub fn new(ra: Angle, dec: Angle) -> SkyResult<Self> {
        let ra = ra.validate_right_ascension()?;
        let dec = dec.validate_declination()?;
        Ok(Self {
            ra0: ra,
            dec0: dec,
            ra,
            dec,
            alt: None,
            az: None,
            dir: Vector3::from_spherical(ra.radians(), dec.radians()),
        })
    }

    /// Creates a point from catalog RA in hours and Dec in degrees.
    pub fn from_hours_degrees(ra_hours: f64, dec_degrees: f64) -> SkyResult<Self> {
        Self::new(Angle::from_hours(ra_hours), Angle::from_degrees(dec_degrees))
    }

    /// Creates a point from catalog RA and Dec, both in degrees.
    pub fn from_degrees(ra_degrees: f64, dec_degrees: f64) -> SkyResult<Self> {
        Self::new(Angle::from_degrees(ra_degrees), Angle::from_degrees(dec_degrees))
    }

    /// Catalog right ascension.
    #[inline]
    pub fn ra0(&self) -> Angle {
        self.ra0
    }

    /// Catalog declination.
    #[inline]
    pub fn dec0(&self) -> Angle {
        self.dec0
    }

    /// Current right ascension.
    #[inline]
    pub fn ra(&self) -> Angle {
        self.ra
    }

    /// Current declination.
    #[inline]
    pub fn dec(&self) -> Angle {
        self.dec
    }

    /// Altitude from the last horizontal conversion, if any.
    #[inline]
    pub fn alt(&self) -> Option<Angle> {
        self.alt
    }

    /// Azimuth from the last horizontal conversion, if any.
    #[inline]
    pub fn az(&self) -> Option<Angle> {
        self.az
    }

    /// Unit direction vector of the current position.
    #[inline]
    pub fn unit_vector(&self) -> Vector3 {
        self.dir
    }

    /// Re-catalogs the point, replacing both the catalog and current
    /// positions and clearing any horizontal coordinates.
    pub fn set_catalog(&mut self, ra: Angle, dec: Angle) -> SkyResult<()> {
        let ra = ra.validate_right_ascension()?;
        let dec = dec.validate_declination()?;
        self.ra0 = ra;
        self.dec0 = dec;
        self.alt = None;
        self.az = None;
        self.set_current(ra, dec);
        Ok(())
    }

    /// Stores horizontal coordinates directly, e.g. for a point whose
    /// alt/az were measured rather than computed.
    pub fn set_horizontal(&mut self, alt: Angle, az: Angle) {
        self.alt = Some(alt);
        self.az = Some(az);
    }

    /// The single write path for the current position. Keeps the cached
    /// direction vector in sync.
    pub(crate) fn set_current(&mut self, ra: Angle, dec: Angle) {
        self.ra = ra;
        self.dec = dec;
        self.dir = Vector3::from_spherical(ra.radians(), dec.radians());
    }

    /// Sets the current position from a unit direction vector.
    pub(crate) fn set_current_from_vector(&mut self, v: Vector3) {
        let (lon, lat) = v.to_spherical();
        self.set_current(
            Angle::from_radians(lon).normalized(),
            Angle::from_radians(lat),
        );
    }

    /// Great-circle separation between the current positions of two points,
    /// via the haversine formula. Symmetric, and well conditioned for small
    /// separations where the spherical law of cosines loses precision.
    pub fn angular_distance_to(&self, other: &SkyPoint) -> Angle {
        let d_ra = (other.ra - self.ra).radians();
        let d_dec = (other.dec - self.dec).radians();
        let h = haversine(d_dec) + self.dec.cos() * other.dec.cos() * haversine(d_ra);
        Angle::from_radians((2.0 * clamped_asin(h.sqrt())).abs())
    }
}
