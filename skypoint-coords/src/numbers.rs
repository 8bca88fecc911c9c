//! Per-instant correction terms for apparent-place reduction.
//!
//! [`ReductionNumbers`] is the data contract between the engine and whatever
//! computes time-dependent quantities: precession matrix pairs, nutation
//! deltas, the aberration inputs and Earth's velocity vector. The engine
//! treats the struct as opaque data — it never recomputes a term and never
//! caches one beyond a single transformation pass.
//!
//! The provider is injected through [`NumbersProvider`] rather than read from
//! any process-wide state, so tests can hand the engine synthetic terms.
//! [`StandardNumbers`] is the stock implementation, accurate to roughly an
//! arc-second over a few centuries around J2000:
//!
//! - precession: IAU 1976 equatorial angles ζ, z, θ (Lieske et al.), with
//!   the Newcomb angles referred to B1950 for the FK4 matrix pair;
//! - nutation: truncated series in Δψ / Δε (largest lunisolar terms);
//! - solar terms: Meeus, *Astronomical Algorithms*, ch. 25 (mean longitude,
//!   equation of center, eccentricity, perihelion);
//! - Earth velocity: classical low-precision analytic form, consistent with
//!   the 20.4958″ constant of aberration.

use skypoint_core::constants::{
    B1950_JD, DAYS_PER_JULIAN_CENTURY, DAYS_PER_TROPICAL_CENTURY, J2000_JD,
};
use skypoint_core::{Angle, RotationMatrix3, Vector3};

/// Constant of annual aberration, arcseconds.
pub const CONST_ABERR_ARCSEC: f64 = 20.4958;

/// Mean orbital speed of the Earth, km/s, matching the classical aberration
/// constant above.
const EARTH_ORBITAL_SPEED_KMS: f64 = 29.7859;

/// Correction terms for one instant.
///
/// All four matrices are proper rotations; each `p1*` is the transpose of
/// its `p2*` partner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReductionNumbers {
    /// The instant these terms describe, as a Julian Day.
    pub jd: f64,
    /// Precession: mean equator/equinox of `jd` → J2000.
    pub p1: RotationMatrix3,
    /// Precession: J2000 → mean equator/equinox of `jd`.
    pub p2: RotationMatrix3,
    /// Newcomb (FK4) precession: mean of `jd` → B1950.
    pub p1b: RotationMatrix3,
    /// Newcomb (FK4) precession: B1950 → mean of `jd`.
    pub p2b: RotationMatrix3,
    /// Mean obliquity of the ecliptic of date.
    pub obliquity: Angle,
    /// Nutation in ecliptic longitude (Δψ).
    pub d_ec_long: Angle,
    /// Nutation in obliquity (Δε).
    pub d_obliquity: Angle,
    /// Sun's true geometric longitude.
    pub sun_true_longitude: Angle,
    /// Longitude of the perihelion of Earth's orbit.
    pub earth_perihelion_longitude: Angle,
    /// Eccentricity of Earth's orbit.
    pub earth_eccentricity: f64,
    /// Constant of aberration (≈20.4958″).
    pub const_aberr: Angle,
    /// Earth's barycentric velocity, km/s, J2000 equatorial frame.
    pub v_earth: Vector3,
}

/// Source of [`ReductionNumbers`] for a requested instant.
///
/// Passed explicitly into every transformation that needs per-instant terms.
pub trait NumbersProvider {
    fn reduction_numbers(&self, jd: f64) -> ReductionNumbers;
}

/// Builds the equatorial precession matrix from the accumulated angles
/// ζ, z, θ (radians). The returned matrix carries a mean direction at the
/// reference epoch of the angles to the mean direction at the target epoch;
/// its transpose is the return trip.
fn precession_matrix(zeta: f64, z: f64, theta: f64) -> RotationMatrix3 {
    let (sz, cz) = zeta.sin_cos();
    let (szd, czd) = z.sin_cos();
    let (st, ct) = theta.sin_cos();
    RotationMatrix3::from_array([
        [cz * ct * czd - sz * szd, -sz * ct * czd - cz * szd, -st * czd],
        [cz * ct * szd + sz * czd, -sz * ct * szd + cz * czd, -st * szd],
        [cz * st, -sz * st, ct],
    ])
}

/// IAU 1976 precession angles (degrees) for `t` Julian centuries since
/// J2000.0: `(ζ, z, θ)`.
fn iau1976_angles(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    (
        0.640_616_1 * t + 0.000_083_9 * t2 + 0.000_005_0 * t3,
        0.640_616_1 * t + 0.000_304_1 * t2 + 0.000_005_1 * t3,
        0.556_753_0 * t - 0.000_118_5 * t2 - 0.000_011_6 * t3,
    )
}

/// Newcomb precession angles (degrees) for `t` tropical centuries since
/// B1950.0: `(ζ, z, θ)`. These serve the FK4 legs of the B1950 ↔ J2000
/// conversion.
fn newcomb_angles(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    (
        0.640_069_44 * t + 0.000_083_89 * t2 + 0.000_005_00 * t3,
        0.640_069_44 * t + 0.000_303_61 * t2 + 0.000_005_28 * t3,
        0.556_856_11 * t - 0.000_236_94 * t2 - 0.000_011_67 * t3,
    )
}

/// Stock analytic provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNumbers;

impl NumbersProvider for StandardNumbers {
    fn reduction_numbers(&self, jd: f64) -> ReductionNumbers {
        let t = (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
        let t2 = t * t;
        let t3 = t2 * t;

        // Mean obliquity, IAU 1976.
        let obliquity = Angle::from_degrees(
            23.439_291_11 - (46.8150 * t + 0.000_59 * t2 - 0.001_813 * t3) / 3600.0,
        );

        // Nutation: largest lunisolar terms, arcseconds.
        let omega = Angle::from_degrees(125.044_52 - 1934.136_261 * t);
        let l_sun = Angle::from_degrees(280.4665 + 36_000.7698 * t);
        let l_moon = Angle::from_degrees(218.3165 + 481_267.8813 * t);
        let (sin_om, cos_om) = omega.sin_cos();
        let (sin_2om, cos_2om) = (omega * 2.0).sin_cos();
        let (sin_2ls, cos_2ls) = (l_sun * 2.0).sin_cos();
        let (sin_2lm, cos_2lm) = (l_moon * 2.0).sin_cos();
        let d_ec_long = Angle::from_arcseconds(
            -17.2 * sin_om - 1.32 * sin_2ls - 0.23 * sin_2lm + 0.21 * sin_2om,
        );
        let d_obliquity = Angle::from_arcseconds(
            9.2 * cos_om + 0.57 * cos_2ls + 0.10 * cos_2lm - 0.09 * cos_2om,
        );

        // Solar terms, Meeus ch. 25.
        let l0 = 280.466_45 + 36_000.769_83 * t + 0.000_303_2 * t2;
        let m = Angle::from_degrees(
            357.529_10 + 35_999.050_30 * t - 0.000_155_9 * t2 - 0.000_000_48 * t3,
        );
        let center = (1.914_600 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
            + (0.019_993 - 0.000_101 * t) * (m * 2.0).sin()
            + 0.000_290 * (m * 3.0).sin();
        let sun_true_longitude = Angle::from_degrees(l0 + center).normalized();
        let earth_eccentricity = 0.016_708_617 - 0.000_042_037 * t - 0.000_000_123_6 * t2;
        let earth_perihelion_longitude =
            Angle::from_degrees(102.947_19 + 1.719_46 * t + 0.000_46 * t2);

        // Precession matrix pairs.
        let (zeta, z, theta) = iau1976_angles(t);
        let p2 = precession_matrix(
            zeta.to_radians(),
            z.to_radians(),
            theta.to_radians(),
        );
        let p1 = p2.transpose();

        let tb = (jd - B1950_JD) / DAYS_PER_TROPICAL_CENTURY;
        let (zeta_b, z_b, theta_b) = newcomb_angles(tb);
        let p2b = precession_matrix(
            zeta_b.to_radians(),
            z_b.to_radians(),
            theta_b.to_radians(),
        );
        let p1b = p2b.transpose();

        // Earth's velocity: classical low-precision form. The elliptic terms
        // carry the opposite sign to the solar-longitude terms, exactly as
        // in the closed-form aberration series, so velocity- and angle-based
        // aberration agree. Speed runs from V0(1-e) at aphelion to V0(1+e)
        // at perihelion.
        let (sin_lambda, cos_lambda) = sun_true_longitude.sin_cos();
        let (sin_peri, cos_peri) = earth_perihelion_longitude.sin_cos();
        let (sin_ob, cos_ob) = obliquity.sin_cos();
        let g = sin_lambda - earth_eccentricity * sin_peri;
        let f = cos_lambda - earth_eccentricity * cos_peri;
        let v_earth = Vector3::new(
            EARTH_ORBITAL_SPEED_KMS * g,
            -EARTH_ORBITAL_SPEED_KMS * f * cos_ob,
            -EARTH_ORBITAL_SPEED_KMS * f * sin_ob,
        );

        ReductionNumbers {
            jd,
            p1,
            p2,
            p1b,
            p2b,
            obliquity,
            d_ec_long,
            d_obliquity,
            sun_true_longitude,
            earth_perihelion_longitude,
            earth_eccentricity,
            const_aberr: Angle::from_arcseconds(CONST_ABERR_ARCSEC),
            v_earth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skypoint_core::test_helpers::assert_deg_close;

    fn numbers_at(jd: f64) -> ReductionNumbers {
        StandardNumbers.reduction_numbers(jd)
    }

    #[test]
    fn obliquity_at_j2000() {
        let num = numbers_at(J2000_JD);
        assert_deg_close(num.obliquity.degrees(), 23.439_291, 1e-5, "obliquity");
    }

    #[test]
    fn precession_is_identity_at_j2000() {
        let num = numbers_at(J2000_JD);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((num.p2.get(i, j) - expected).abs() < 1e-12, "({i},{j})");
            }
        }
    }

    #[test]
    fn newcomb_pair_is_identity_at_b1950() {
        let num = numbers_at(B1950_JD);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((num.p2b.get(i, j) - expected).abs() < 1e-12, "({i},{j})");
            }
        }
    }

    #[test]
    fn matrix_pairs_are_transposes() {
        let num = numbers_at(2_455_000.5);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(num.p1.get(i, j), num.p2.get(j, i));
                assert_eq!(num.p1b.get(i, j), num.p2b.get(j, i));
            }
        }
    }

    #[test]
    fn precession_matrices_are_orthogonal() {
        let num = numbers_at(2_469_807.5); // ~2050
        let product = num.p1 * num.p2;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((product.get(i, j) - expected).abs() < 1e-14, "({i},{j})");
            }
        }
    }

    #[test]
    fn precession_moves_equinox_star_forward() {
        // One century of precession: Δα ≈ +1.28°, Δδ ≈ +0.56° for a star at
        // the J2000 equinox (Δα = m, Δδ = n to first order).
        let num = numbers_at(J2000_JD + DAYS_PER_JULIAN_CENTURY);
        let v = num.p2.apply_to_vector(Vector3::new(1.0, 0.0, 0.0));
        let (ra, dec) = v.to_spherical();
        assert_deg_close(ra.to_degrees(), 1.281, 0.01, "RA after one century");
        assert_deg_close(dec.to_degrees(), 0.557, 0.01, "Dec after one century");
    }

    #[test]
    fn sun_longitude_meeus_example() {
        // Meeus, example 25.a: 1992 October 13.0 TD.
        let num = numbers_at(2_448_908.5);
        assert_deg_close(
            num.sun_true_longitude.degrees(),
            199.909_87,
            0.01,
            "sun true longitude",
        );
    }

    #[test]
    fn eccentricity_near_modern_value() {
        let num = numbers_at(J2000_JD);
        assert!((num.earth_eccentricity - 0.016_708_6).abs() < 1e-6);
    }

    #[test]
    fn nutation_within_physical_bounds() {
        for &jd in &[2_440_000.5, 2_451_545.0, 2_460_310.5] {
            let num = numbers_at(jd);
            assert!(num.d_ec_long.arcseconds().abs() < 20.0, "dpsi at {jd}");
            assert!(num.d_obliquity.arcseconds().abs() < 11.0, "deps at {jd}");
        }
    }

    #[test]
    fn earth_speed_is_orbital() {
        for &jd in &[2_451_545.0, 2_448_908.5, 2_460_310.5] {
            let v = numbers_at(jd).v_earth.magnitude();
            assert!((29.2..30.4).contains(&v), "|v_earth| = {v} at {jd}");
        }
    }

    #[test]
    fn earth_speed_peaks_at_perihelion() {
        // Perihelion 2025 Jan 4, aphelion 2025 Jul 3: speed swings between
        // V0(1+e) ≈ 30.28 and V0(1-e) ≈ 29.29 km/s.
        let perihelion = numbers_at(2_460_679.9).v_earth.magnitude();
        let aphelion = numbers_at(2_460_860.2).v_earth.magnitude();
        assert!(perihelion > 30.2, "perihelion speed {perihelion}");
        assert!(aphelion < 29.35, "aphelion speed {aphelion}");
    }

    #[test]
    fn aberration_constant() {
        let num = numbers_at(J2000_JD);
        assert!((num.const_aberr.arcseconds() - 20.4958).abs() < 1e-9);
    }
}
