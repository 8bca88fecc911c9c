//! Equatorial (B1950) ↔ galactic conversions.
//!
//! The IAU 1958 galactic frame is defined against the B1950 equator: pole
//! at RA 192.25°, Dec +27.4°, with the ascending node of the galactic plane
//! at galactic longitude 33° (equivalently, position angle 123° from the
//! pole). Both directions here therefore expect and produce B1950
//! equatorial coordinates; J2000 callers convert through the FK4 routines
//! first.

use skypoint_core::math::clamped_asin;
use skypoint_core::Angle;

use crate::skypoint::SkyPoint;

/// B1950 right ascension of the north galactic pole, degrees.
const GALACTIC_POLE_RA_DEG: f64 = 192.25;
/// B1950 declination of the north galactic pole, degrees.
const GALACTIC_POLE_DEC_DEG: f64 = 27.4;
/// Galactic longitude offset fixing the zero point at the galactic center,
/// degrees.
const GALACTIC_LONG_OFFSET_DEG: f64 = 303.0;
/// Galactic longitude of the equatorial pole, degrees.
const GALACTIC_LONG_OF_POLE_DEG: f64 = 123.0;
/// Right-ascension offset for the inverse transformation, degrees.
const EQUATORIAL_RA_OFFSET_DEG: f64 = 12.25;

impl SkyPoint {
    /// Galactic longitude and latitude of the current (B1950) position.
    pub fn equatorial1950_to_galactic(&self) -> (Angle, Angle) {
        let (sin_pole_dec, cos_pole_dec) = Angle::from_degrees(GALACTIC_POLE_DEC_DEG).sin_cos();
        let (sin_d_ra, cos_d_ra) =
            Angle::from_degrees(GALACTIC_POLE_RA_DEG - self.ra().degrees()).sin_cos();
        let (sin_dec, cos_dec) = self.dec().sin_cos();
        let tan_dec = sin_dec / cos_dec;

        let gal_long = Angle::from_radians(
            Angle::from_degrees(GALACTIC_LONG_OFFSET_DEG).radians()
                - sin_d_ra.atan2(cos_d_ra * sin_pole_dec - tan_dec * cos_pole_dec),
        )
        .normalized();
        let gal_lat = Angle::from_radians(clamped_asin(
            sin_dec * sin_pole_dec + cos_dec * cos_pole_dec * cos_d_ra,
        ));
        (gal_long, gal_lat)
    }

    /// Sets the current position to the B1950 equatorial equivalent of the
    /// given galactic coordinates.
    pub fn galactic_to_equatorial1950(&mut self, gal_long: Angle, gal_lat: Angle) {
        let (sin_pole_dec, cos_pole_dec) = Angle::from_degrees(GALACTIC_POLE_DEC_DEG).sin_cos();
        let (sin_lat, cos_lat) = gal_lat.sin_cos();
        let tan_lat = sin_lat / cos_lat;
        let (sin_dl, cos_dl) =
            (gal_long - Angle::from_degrees(GALACTIC_LONG_OF_POLE_DEG)).sin_cos();

        let ra = Angle::from_radians(
            Angle::from_degrees(EQUATORIAL_RA_OFFSET_DEG).radians()
                + sin_dl.atan2(cos_dl * sin_pole_dec - tan_lat * cos_pole_dec),
        )
        .normalized();
        let dec = Angle::from_radians(clamped_asin(
            sin_lat * sin_pole_dec + cos_lat * cos_pole_dec * cos_dl,
        ));
        self.set_current(ra, dec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skypoint_core::test_helpers::assert_deg_close;

    #[test]
    fn test_galactic_pole_maps_to_latitude_90() {
        let p = SkyPoint::from_degrees(GALACTIC_POLE_RA_DEG, GALACTIC_POLE_DEC_DEG).unwrap();
        let (_, b) = p.equatorial1950_to_galactic();
        assert_deg_close(b.degrees(), 90.0, 1e-9, "pole latitude");
    }

    #[test]
    fn test_galactic_center() {
        // The galactic center (l = 0, b = 0) sits at B1950
        // RA 17h42.4m, Dec -28°55' by construction of the 1958 frame.
        let mut p = SkyPoint::from_degrees(0.0, 0.0).unwrap();
        p.galactic_to_equatorial1950(Angle::ZERO, Angle::ZERO);
        assert_deg_close(p.ra().degrees(), 265.610, 0.02, "RA of center");
        assert_deg_close(p.dec().degrees(), -28.917, 0.02, "Dec of center");
    }

    #[test]
    fn test_round_trip() {
        let p = SkyPoint::from_degrees(251.3, -42.7).unwrap();
        let (l, b) = p.equatorial1950_to_galactic();
        let mut q = SkyPoint::from_degrees(0.0, 0.0).unwrap();
        q.galactic_to_equatorial1950(l, b);
        assert_deg_close(q.ra().degrees(), 251.3, 1e-9, "RA");
        assert_deg_close(q.dec().degrees(), -42.7, 1e-9, "Dec");
    }

    #[test]
    fn test_round_trip_through_galactic_from_inverse() {
        let mut p = SkyPoint::from_degrees(0.0, 0.0).unwrap();
        p.galactic_to_equatorial1950(Angle::from_degrees(135.0), Angle::from_degrees(25.0));
        let (l, b) = p.equatorial1950_to_galactic();
        assert_deg_close(l.degrees(), 135.0, 1e-9, "l");
        assert_deg_close(b.degrees(), 25.0, 1e-9, "b");
    }
}
