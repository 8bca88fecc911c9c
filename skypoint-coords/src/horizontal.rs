//! Equatorial ↔ horizontal conversions.
//!
//! Both directions are parameterized by the observer's geodetic latitude and
//! the local sidereal time; the hour angle `H = LST - RA` links the two
//! frames. Azimuth follows the north-through-east convention: 0° at north,
//! 90° at east.
//!
//! The arc-cosine in each direction only recovers azimuth (or hour angle) up
//! to sign, so the quadrant is resolved from the sine of the hour angle
//! (respectively azimuth): an object west of the meridian has azimuth beyond
//! 180°, and an object in the eastern sky has a negative hour angle.

use skypoint_core::constants::TWOPI;
use skypoint_core::math::{clamped_acos, clamped_asin};
use skypoint_core::{Angle, SkyError, SkyResult};

use crate::skypoint::SkyPoint;

impl SkyPoint {
    /// Computes altitude and azimuth from the current equatorial position
    /// for the given local sidereal time and observer latitude, storing
    /// them on the point.
    pub fn equatorial_to_horizontal(&mut self, lst: Angle, latitude: Angle) {
        let hour_angle = (lst - self.ra()).wrapped();
        let (sin_ha, cos_ha) = hour_angle.sin_cos();
        let (sin_lat, cos_lat) = latitude.sin_cos();
        let (sin_dec, cos_dec) = self.dec().sin_cos();

        let sin_alt = sin_dec * sin_lat + cos_dec * cos_lat * cos_ha;
        let alt = clamped_asin(sin_alt);
        let cos_alt = alt.cos();

        // At the zenith cos_alt is 0 and azimuth is undefined; the clamp
        // below turns the resulting overflow into a pole-consistent value.
        if cos_alt.abs() < 1e-9 {
            log::warn!(
                "object within {:.1e} rad of the zenith; azimuth is ill-conditioned",
                cos_alt.abs()
            );
        }
        let arg = (sin_dec - sin_lat * sin_alt) / (cos_lat * cos_alt);
        let mut az = clamped_acos(arg);
        let west_of_meridian = sin_ha > 0.0;
        if west_of_meridian {
            az = TWOPI - az;
        }

        self.set_horizontal(Angle::from_radians(alt), Angle::from_radians(az));
    }

    /// Recovers the current equatorial position from stored altitude and
    /// azimuth, for the given local sidereal time and observer latitude.
    ///
    /// # Errors
    ///
    /// Returns [`SkyError::CalculationError`] when the point has no
    /// horizontal position, i.e. neither
    /// [`equatorial_to_horizontal`](SkyPoint::equatorial_to_horizontal) nor
    /// [`set_horizontal`](SkyPoint::set_horizontal) has run.
    pub fn horizontal_to_equatorial(&mut self, lst: Angle, latitude: Angle) -> SkyResult<()> {
        let (alt, az) = match (self.alt(), self.az()) {
            (Some(alt), Some(az)) => (alt, az),
            _ => {
                return Err(SkyError::calculation_error(
                    "horizontal_to_equatorial",
                    "no horizontal position set on this point",
                ))
            }
        };

        let (sin_alt, cos_alt) = alt.sin_cos();
        let (sin_az, cos_az) = az.sin_cos();
        let (sin_lat, cos_lat) = latitude.sin_cos();

        let sin_dec = sin_alt * sin_lat + cos_alt * cos_lat * cos_az;
        let dec = clamped_asin(sin_dec);
        let cos_dec = dec.cos();

        let arg = (sin_alt - sin_lat * sin_dec) / (cos_lat * cos_dec);
        let mut hour_angle = clamped_acos(arg);
        let eastern_sky = sin_az > 0.0;
        if eastern_sky {
            hour_angle = TWOPI - hour_angle;
        }

        let ra = (lst - Angle::from_radians(hour_angle)).normalized();
        self.set_current(ra, Angle::from_radians(dec));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skypoint_core::angle::deg;

    #[test]
    fn test_object_on_meridian_altitude() {
        // On the meridian (H = 0) altitude is 90° - |lat - dec|.
        let mut p = SkyPoint::from_degrees(120.0, 20.0).unwrap();
        p.equatorial_to_horizontal(deg(120.0), deg(50.0));
        let alt = p.alt().unwrap().degrees();
        assert!((alt - 60.0).abs() < 1e-10, "alt = {alt}");
    }

    #[test]
    fn test_pole_star_altitude_equals_latitude() {
        let mut p = SkyPoint::from_degrees(37.95, 89.26).unwrap();
        p.equatorial_to_horizontal(deg(200.0), deg(43.0));
        let alt = p.alt().unwrap().degrees();
        // Within a degree of the pole the altitude tracks the latitude.
        assert!((alt - 43.0).abs() < 1.0, "alt = {alt}");
        let az = p.az().unwrap().degrees();
        assert!(az < 2.0 || az > 358.0, "az = {az}");
    }

    #[test]
    fn test_setting_object_is_west() {
        // Positive hour angle: the object has crossed the meridian.
        let mut p = SkyPoint::from_degrees(100.0, 10.0).unwrap();
        p.equatorial_to_horizontal(deg(140.0), deg(40.0));
        let az = p.az().unwrap().degrees();
        assert!(az > 180.0, "az = {az}");
    }

    #[test]
    fn test_rising_object_is_east() {
        let mut p = SkyPoint::from_degrees(180.0, 10.0).unwrap();
        p.equatorial_to_horizontal(deg(140.0), deg(40.0));
        let az = p.az().unwrap().degrees();
        assert!(az < 180.0, "az = {az}");
    }

    #[test]
    fn test_round_trip() {
        let lst = deg(310.0);
        let lat = deg(-33.9);
        let mut p = SkyPoint::from_degrees(285.5, -47.3).unwrap();
        p.equatorial_to_horizontal(lst, lat);
        p.horizontal_to_equatorial(lst, lat).unwrap();
        assert!((p.ra().degrees() - 285.5).abs() < 1e-6);
        assert!((p.dec().degrees() + 47.3).abs() < 1e-6);
    }

    #[test]
    fn test_reverse_without_horizontal_errors() {
        let mut p = SkyPoint::from_degrees(10.0, 10.0).unwrap();
        assert!(p.horizontal_to_equatorial(deg(0.0), deg(45.0)).is_err());
    }

    #[test]
    fn test_zenith_does_not_panic() {
        // Object exactly at the zenith: dec == lat, H == 0.
        let mut p = SkyPoint::from_degrees(50.0, 35.0).unwrap();
        p.equatorial_to_horizontal(deg(50.0), deg(35.0));
        // sin_alt lands a ULP shy of 1, so asin recovers the zenith only to
        // about a microdegree.
        let alt = p.alt().unwrap().degrees();
        assert!((alt - 90.0).abs() < 1e-5);
        assert!(p.az().unwrap().degrees().is_finite());
    }
}
