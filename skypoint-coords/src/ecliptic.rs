//! Equatorial ↔ ecliptic conversions.
//!
//! Both directions take the obliquity of the ecliptic explicitly, so the
//! caller decides whether mean or true obliquity applies. The conversions
//! relate coordinates of the same epoch; they perform no precession.
//!
//! The forward direction uses `tan(dec)` and the reverse uses
//! `sin(lat)/cos(lat)`, both of which blow up at the respective pole. The
//! engine's callers (the exact nutation path) stay away from the ecliptic
//! poles, matching the classical formulation.

use skypoint_core::math::clamped_asin;
use skypoint_core::Angle;

use crate::skypoint::SkyPoint;

impl SkyPoint {
    /// Ecliptic longitude and latitude of the current position, for the
    /// given obliquity.
    pub fn find_ecliptic(&self, obliquity: Angle) -> (Angle, Angle) {
        let (sin_ra, cos_ra) = self.ra().sin_cos();
        let (sin_dec, cos_dec) = self.dec().sin_cos();
        let (sin_ob, cos_ob) = obliquity.sin_cos();

        let tan_dec = sin_dec / cos_dec;
        let ec_long = Angle::from_radians(
            (sin_ra * cos_ob + tan_dec * sin_ob).atan2(cos_ra),
        )
        .normalized();
        let ec_lat =
            Angle::from_radians(clamped_asin(sin_dec * cos_ob - cos_dec * sin_ob * sin_ra));
        (ec_long, ec_lat)
    }

    /// Sets the current position from ecliptic longitude and latitude, for
    /// the given obliquity.
    pub fn set_from_ecliptic(&mut self, obliquity: Angle, ec_long: Angle, ec_lat: Angle) {
        let (sin_long, cos_long) = ec_long.sin_cos();
        let (sin_lat, cos_lat) = ec_lat.sin_cos();
        let (sin_ob, cos_ob) = obliquity.sin_cos();

        let sin_dec = sin_lat * cos_ob + cos_lat * sin_ob * sin_long;
        let y = sin_long * cos_ob - (sin_lat / cos_lat) * sin_ob;
        let ra = Angle::from_radians(y.atan2(cos_long)).normalized();
        self.set_current(ra, Angle::from_radians(clamped_asin(sin_dec)));
    }
}
