//! Apparent-place reduction: precession, nutation, aberration.
//!
//! Every entry point here restarts from the catalog position rather than
//! transforming the current one, so repeated reductions of the same point
//! are idempotent and never accumulate floating-point drift.
//!
//! Correction terms come from a [`NumbersProvider`]; the routines consume
//! whatever terms they are handed and make no assumptions about how those
//! were produced.

use skypoint_core::angle::clamp_dec;
use skypoint_core::constants::{B1950_JD, J2000_JD};
use skypoint_core::{Angle, Vector3};

use crate::numbers::{NumbersProvider, ReductionNumbers};
use crate::skypoint::SkyPoint;

/// Declination (degrees, absolute) beyond which nutation switches from the
/// first-order formula to the exact ecliptic detour. The first-order
/// formula carries a `tan(dec)` factor that degrades toward the poles.
pub const NUTATION_EXACT_DEC_DEG: f64 = 80.0;

impl SkyPoint {
    /// Precesses the catalog (J2000) position to the mean equator and
    /// equinox of the instant the numbers were computed for.
    pub fn precess(&mut self, num: &ReductionNumbers) {
        let s = Vector3::from_spherical(self.ra0().radians(), self.dec0().radians());
        self.set_current_from_vector(num.p2.apply_to_vector(s));
    }

    /// Applies nutation to the current position, selecting the fast or
    /// exact path by the default declination threshold.
    pub fn nutate(&mut self, num: &ReductionNumbers) {
        self.nutate_with_threshold(num, NUTATION_EXACT_DEC_DEG);
    }

    /// Applies nutation with an explicit declination threshold (degrees)
    /// for the switch to the exact path.
    pub fn nutate_with_threshold(&mut self, num: &ReductionNumbers, threshold_deg: f64) {
        if self.dec().degrees().abs() >= threshold_deg {
            self.nutate_exact(num);
        } else {
            self.nutate_fast(num);
        }
    }

    /// First-order nutation in RA/Dec. Fast, but the `tan(dec)` term makes
    /// it unusable near the celestial poles.
    pub fn nutate_fast(&mut self, num: &ReductionNumbers) {
        let (sin_ra, cos_ra) = self.ra().sin_cos();
        let (sin_dec, cos_dec) = self.dec().sin_cos();
        let (sin_ob, cos_ob) = num.obliquity.sin_cos();
        let tan_dec = sin_dec / cos_dec;

        let d_long = num.d_ec_long.degrees();
        let d_obliq = num.d_obliquity.degrees();
        let d_ra = d_long * (cos_ob + sin_ob * sin_ra * tan_dec) - d_obliq * cos_ra * tan_dec;
        let d_dec = d_long * sin_ob * cos_ra + d_obliq * sin_ra;

        let dec = Angle::from_degrees(self.dec().degrees() + d_dec);
        self.set_current(
            Angle::from_degrees(self.ra().degrees() + d_ra),
            Angle::from_radians(clamp_dec(dec.radians())),
        );
    }

    /// Exact nutation: converts to ecliptic coordinates with the mean
    /// obliquity, adds the nutation in longitude, and converts back with
    /// the true obliquity so the nutation in obliquity is applied too.
    /// Valid at any declination.
    pub fn nutate_exact(&mut self, num: &ReductionNumbers) {
        let (ec_long, ec_lat) = self.find_ecliptic(num.obliquity);
        self.set_from_ecliptic(
            num.obliquity + num.d_obliquity,
            ec_long + num.d_ec_long,
            ec_lat,
        );
    }

    /// Applies annual aberration to the current position using Ron-Vondrák
    /// style first-order terms: a circular-orbit contribution scaled by the
    /// aberration constant plus an elliptic correction scaled by the
    /// orbital eccentricity.
    pub fn aberrate(&mut self, num: &ReductionNumbers) {
        let k = num.const_aberr.degrees();
        let e = num.earth_eccentricity;

        let (sin_ra, cos_ra) = self.ra().sin_cos();
        let (sin_dec, cos_dec) = self.dec().sin_cos();
        let (sin_ob, cos_ob) = num.obliquity.sin_cos();
        let tan_ob = sin_ob / cos_ob;
        let (sin_l, cos_l) = num.sun_true_longitude.sin_cos();
        let (sin_p, cos_p) = num.earth_perihelion_longitude.sin_cos();

        let d_ra = -k * (cos_ra * cos_l * cos_ob + sin_ra * sin_l) / cos_dec
            + e * k * (cos_ra * cos_p * cos_ob + sin_ra * sin_p) / cos_dec;
        let d_dec = -k
            * (cos_l * cos_ob * (tan_ob * cos_dec - sin_ra * sin_dec) + cos_ra * sin_dec * sin_l)
            + e * k
                * (cos_p * cos_ob * (tan_ob * cos_dec - sin_ra * sin_dec)
                    + cos_ra * sin_dec * sin_p);

        // The series can push a near-pole declination past 90 degrees.
        let dec = Angle::from_degrees(self.dec().degrees() + d_dec);
        self.set_current(
            Angle::from_degrees(self.ra().degrees() + d_ra),
            Angle::from_radians(clamp_dec(dec.radians())),
        );
    }

    /// Full mean-to-apparent update for one instant: precession from the
    /// catalog position, then nutation, then aberration, all with the same
    /// correction terms.
    pub fn update_coords(&mut self, num: &ReductionNumbers) {
        self.precess(num);
        self.nutate(num);
        self.aberrate(num);
    }

    /// Precesses the catalog position from epoch `jd0` to epoch `jdf`.
    ///
    /// General epochs are routed through J2000: the epoch-`jd0` direction is
    /// carried to J2000 with one matrix pair, then to `jdf` with the other.
    /// The B1950 endpoints take the full FK4 conversion instead, including
    /// E-terms and the equinox zero-point correction, because FK4 is not a
    /// pure rotation away from FK5.
    pub fn precess_from_any_epoch(
        &mut self,
        jd0: f64,
        jdf: f64,
        provider: &impl NumbersProvider,
    ) {
        self.set_current(self.ra0(), self.dec0());
        if jd0 == jdf {
            return;
        }

        let mut jd0 = jd0;
        if jd0 == B1950_JD {
            self.b1950_to_j2000(provider);
            jd0 = J2000_JD;
        }
        if jd0 == jdf {
            return;
        }

        let v = self.unit_vector();
        let s = if jd0 != J2000_JD {
            provider.reduction_numbers(jd0).p1.apply_to_vector(v)
        } else {
            v
        };

        if jdf == B1950_JD {
            self.set_current_from_vector(s);
            self.j2000_to_b1950(provider);
            return;
        }

        self.set_current_from_vector(provider.reduction_numbers(jdf).p2.apply_to_vector(s));
    }

    /// Apparent place at `jdf` for a catalog position referred to `jd0`:
    /// precession between the epochs, then nutation and aberration at
    /// `jdf`. Restarts from the catalog position like every reduction.
    pub fn apparent_coord(&mut self, jd0: f64, jdf: f64, provider: &impl NumbersProvider) {
        self.precess_from_any_epoch(jd0, jdf, provider);
        let num = provider.reduction_numbers(jdf);
        self.nutate(&num);
        self.aberrate(&num);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::StandardNumbers;
    use skypoint_core::constants::DAYS_PER_JULIAN_CENTURY;
    use skypoint_core::test_helpers::assert_deg_close;

    const JD_2025: f64 = 2_460_676.5;

    #[test]
    fn test_precess_identity_at_j2000() {
        let num = StandardNumbers.reduction_numbers(J2000_JD);
        let mut p = SkyPoint::from_degrees(123.456, -34.5).unwrap();
        p.precess(&num);
        assert_deg_close(p.ra().degrees(), 123.456, 1e-10, "RA");
        assert_deg_close(p.dec().degrees(), -34.5, 1e-10, "Dec");
    }

    #[test]
    fn test_precession_rate_at_equinox() {
        // Star on the equator at the equinox: RA grows by the general
        // precession in RA (~1.28°/century), Dec by ~0.56°/century.
        let num = StandardNumbers.reduction_numbers(J2000_JD + DAYS_PER_JULIAN_CENTURY);
        let mut p = SkyPoint::from_degrees(0.0, 0.0).unwrap();
        p.precess(&num);
        assert_deg_close(p.ra().degrees(), 1.281, 0.01, "RA drift");
        assert_deg_close(p.dec().degrees(), 0.557, 0.01, "Dec drift");
    }

    #[test]
    fn test_nutation_is_arcsecond_scale() {
        let num = StandardNumbers.reduction_numbers(JD_2025);
        let mut p = SkyPoint::from_degrees(150.0, 25.0).unwrap();
        let before = p.clone();
        p.nutate(&num);
        let d = before.angular_distance_to(&p).arcseconds();
        assert!(d > 0.01 && d < 25.0, "nutation moved {d} arcsec");
    }

    #[test]
    fn test_nutation_fast_exact_agree_at_threshold() {
        let num = StandardNumbers.reduction_numbers(JD_2025);
        let mut fast = SkyPoint::from_degrees(63.0, NUTATION_EXACT_DEC_DEG).unwrap();
        let mut exact = fast.clone();
        fast.nutate_fast(&num);
        exact.nutate_exact(&num);
        let d = fast.angular_distance_to(&exact).arcseconds();
        assert!(d < 0.01, "paths disagree by {d} arcsec at the threshold");
    }

    #[test]
    fn test_nutation_exact_survives_pole() {
        let num = StandardNumbers.reduction_numbers(JD_2025);
        let mut p = SkyPoint::from_degrees(10.0, 89.9999).unwrap();
        p.nutate(&num);
        assert!(p.ra().degrees().is_finite());
        assert!(p.dec().degrees().is_finite());
        assert!(p.dec().degrees() <= 90.0 + 1e-9);
    }

    #[test]
    fn test_aberration_bounded_by_constant() {
        let num = StandardNumbers.reduction_numbers(JD_2025);
        for &(ra, dec) in &[(0.0, 0.0), (90.0, 45.0), (200.0, -60.0), (300.0, 75.0)] {
            let mut p = SkyPoint::from_degrees(ra, dec).unwrap();
            let before = p.clone();
            p.aberrate(&num);
            let d = before.angular_distance_to(&p).arcseconds();
            assert!(d < 21.0, "aberration {d} arcsec at ({ra},{dec})");
        }
    }

    #[test]
    fn test_aberrate_never_leaves_pole_range() {
        // A declination within an arcsecond of the pole plus a ~20 arcsec
        // aberration term must saturate at the pole, not pass it.
        let num = StandardNumbers.reduction_numbers(JD_2025);
        for ra in [0.0_f64, 90.0, 180.0, 270.0] {
            let mut p = SkyPoint::from_degrees(ra, 89.9999).unwrap();
            p.aberrate(&num);
            assert!(p.dec().degrees() <= 90.0, "dec = {} at RA {ra}", p.dec().degrees());
            let mut q = SkyPoint::from_degrees(ra, -89.9999).unwrap();
            q.aberrate(&num);
            assert!(q.dec().degrees() >= -90.0, "dec = {} at RA {ra}", q.dec().degrees());
        }
    }

    #[test]
    fn test_apparent_coord_is_idempotent() {
        let mut p = SkyPoint::from_hours_degrees(2.530_3, 89.264_1).unwrap();
        p.apparent_coord(J2000_JD, JD_2025, &StandardNumbers);
        let (ra1, dec1) = (p.ra(), p.dec());
        p.apparent_coord(J2000_JD, JD_2025, &StandardNumbers);
        assert_eq!(ra1, p.ra());
        assert_eq!(dec1, p.dec());
    }

    #[test]
    fn test_apparent_coord_same_epoch_still_nutates() {
        // Same source and target epoch: precession drops out but nutation
        // and aberration still apply.
        let mut p = SkyPoint::from_degrees(150.0, 25.0).unwrap();
        p.apparent_coord(J2000_JD, J2000_JD, &StandardNumbers);
        let catalog = SkyPoint::from_degrees(150.0, 25.0).unwrap();
        let d = catalog.angular_distance_to(&p).arcseconds();
        assert!(d > 0.1 && d < 40.0, "displacement {d} arcsec");
    }

    #[test]
    fn test_precess_from_any_epoch_round_trip() {
        let jd_mid = 2_455_000.5;
        let mut p = SkyPoint::from_degrees(201.3, -11.16).unwrap();
        p.precess_from_any_epoch(J2000_JD, jd_mid, &StandardNumbers);
        let mut back = SkyPoint::new(p.ra(), p.dec()).unwrap();
        back.precess_from_any_epoch(jd_mid, J2000_JD, &StandardNumbers);
        assert_deg_close(back.ra().degrees(), 201.3, 1e-9, "RA");
        assert_deg_close(back.dec().degrees(), -11.16, 1e-9, "Dec");
    }

    #[test]
    fn test_precess_theta_persei_meeus_21b() {
        // Meeus, example 21.b: θ Persei from J2000 to JDE 2462088.69.
        // Start values already carry the proper motion to 2028.0; expected
        // mean place of date is α = 41.5472°, δ = +49.3485°.
        let mut p = SkyPoint::from_degrees(41.054_063, 49.227_750).unwrap();
        p.precess_from_any_epoch(J2000_JD, 2_462_088.69, &StandardNumbers);
        assert_deg_close(p.ra().degrees(), 41.547, 0.01, "RA");
        assert_deg_close(p.dec().degrees(), 49.348, 0.01, "Dec");
    }
}
