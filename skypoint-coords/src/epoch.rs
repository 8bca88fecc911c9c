//! FK4 (B1950) ↔ FK5 (J2000) catalog conversions.
//!
//! FK4 positions are not related to FK5 by a pure rotation: FK4 catalog
//! places embed the elliptic terms of aberration (the E-terms), and the FK4
//! equinox drifts relative to FK5. The conversion therefore runs in three
//! legs through the 1984.0 crossover epoch, where the two systems were
//! formally joined:
//!
//! 1. remove or apply the E-terms at the B1950 end;
//! 2. precess B1950 ↔ 1984.0 with the Newcomb (FK4) matrices and
//!    1984.0 ↔ J2000 with the IAU 1976 (FK5) matrices;
//! 3. shift right ascension by the FK4–FK5 equinox correction at 1984.0.

use skypoint_core::{Angle, Vector3};

use crate::numbers::NumbersProvider;
use crate::skypoint::SkyPoint;

/// FK4 → FK5 equinox correction at 1984.0, seconds of time.
const EQUINOX_CORRECTION_SEC: f64 = 0.06390;

/// Julian Day of the 1984.0 crossover epoch.
pub const JD_1984: f64 = skypoint_core::constants::JD_1984;

impl SkyPoint {
    /// E-term corrections (ΔRA, ΔDec) for the current position.
    ///
    /// The FK4 elliptic aberration terms, about 0.34″, directed along the
    /// fixed perihelion of the 1950 orbit.
    pub fn eterms(&self) -> (Angle, Angle) {
        let (sin_dec, cos_dec) = self.dec().sin_cos();
        let (sin_e, cos_e) = Angle::from_hours(self.ra().hours() + 11.25).sin_cos();
        let d_ra = Angle::from_hours(0.0227 * sin_e / (3600.0 * cos_dec));
        let d_dec =
            Angle::from_degrees((0.341 * cos_e * sin_dec + 0.029 * cos_dec) / 3600.0);
        (d_ra, d_dec)
    }

    fn add_eterms(&mut self) {
        let (d_ra, d_dec) = self.eterms();
        self.set_current(self.ra() + d_ra, self.dec() + d_dec);
    }

    fn subtract_eterms(&mut self) {
        let (d_ra, d_dec) = self.eterms();
        self.set_current(self.ra() - d_ra, self.dec() - d_dec);
    }

    /// Converts the current position from FK4 B1950 to FK5 J2000.
    pub fn b1950_to_j2000(&mut self, provider: &impl NumbersProvider) {
        let num = provider.reduction_numbers(JD_1984);

        self.add_eterms();
        let v = num.p2b.apply_to_vector(self.unit_vector());
        let (lon, lat) = v.to_spherical();

        let ra = Angle::from_hours(
            Angle::from_radians(lon).normalized().hours() + EQUINOX_CORRECTION_SEC / 3600.0,
        );
        let s = Vector3::from_spherical(ra.radians(), lat);
        self.set_current_from_vector(num.p1.apply_to_vector(s));
    }

    /// Converts the current position from FK5 J2000 to FK4 B1950.
    pub fn j2000_to_b1950(&mut self, provider: &impl NumbersProvider) {
        let num = provider.reduction_numbers(JD_1984);

        let v = num.p2.apply_to_vector(self.unit_vector());
        let (lon, lat) = v.to_spherical();

        let ra = Angle::from_hours(
            Angle::from_radians(lon).normalized().hours() - EQUINOX_CORRECTION_SEC / 3600.0,
        );
        let s = Vector3::from_spherical(ra.radians(), lat);
        self.set_current_from_vector(num.p1b.apply_to_vector(s));
        self.subtract_eterms();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::StandardNumbers;
    use skypoint_core::test_helpers::assert_deg_close;

    #[test]
    fn test_eterm_magnitude() {
        // E-terms are a fraction-of-an-arcsecond effect everywhere off the
        // poles.
        for &(ra, dec) in &[(0.0, 0.0), (90.0, 40.0), (250.0, -65.0)] {
            let p = SkyPoint::from_degrees(ra, dec).unwrap();
            let (d_ra, d_dec) = p.eterms();
            assert!(d_ra.arcseconds().abs() < 2.0, "dRA at ({ra},{dec})");
            assert!(d_dec.arcseconds().abs() < 0.5, "dDec at ({ra},{dec})");
        }
    }

    #[test]
    fn test_b1950_to_j2000_shifts_about_half_degree() {
        // 50 years of precession moves equatorial positions by ~0.7°.
        let mut p = SkyPoint::from_degrees(150.0, 20.0).unwrap();
        p.b1950_to_j2000(&StandardNumbers);
        let d = SkyPoint::from_degrees(150.0, 20.0)
            .unwrap()
            .angular_distance_to(&p)
            .degrees();
        assert!(d > 0.3 && d < 1.0, "shift = {d} deg");
    }

    #[test]
    fn test_round_trip() {
        let mut p = SkyPoint::from_degrees(220.5, -35.2).unwrap();
        p.b1950_to_j2000(&StandardNumbers);
        p.j2000_to_b1950(&StandardNumbers);
        assert_deg_close(p.ra().degrees(), 220.5, 1e-4, "RA");
        assert_deg_close(p.dec().degrees(), -35.2, 1e-4, "Dec");
    }

    #[test]
    fn test_fk4_fk5_reference_star() {
        // FK4 position of α PsA (Fomalhaut), B1950: 22h54m53.6s, -29°53'16".
        // FK5 J2000: 22h57m39.0s, -29°37'20". Agreement to a few arcsec is
        // expected without proper motion.
        let mut p = SkyPoint::from_hours_degrees(22.914_889, -29.887_778).unwrap();
        p.b1950_to_j2000(&StandardNumbers);
        assert_deg_close(p.ra().hours() * 15.0, 22.960_833 * 15.0, 0.01, "RA");
        assert_deg_close(p.dec().degrees(), -29.622_222, 0.01, "Dec");
    }
}
