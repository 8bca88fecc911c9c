//! Radial-velocity frame corrections.
//!
//! A measured radial velocity refers to some rest frame; these routines
//! ladder a velocity between the frames an observer cares about:
//!
//! ```text
//! LSR  ↔  heliocentric  ↔  geocentric  ↔  topocentric
//! ```
//!
//! Each rung projects a known velocity vector onto the line of sight and
//! adds or removes the component. The solar-motion and Earth-orbit vectors
//! are expressed in the J2000 frame, so the line of sight is the catalog
//! direction precessed to J2000; the observer's diurnal velocity is given
//! in the frame of date, so that rung uses the current direction as is.
//!
//! All projections are read-only: a velocity query never mutates the point
//! it is asked about. The directions are computed on a scratch copy.

use skypoint_core::constants::J2000_JD;
use skypoint_core::{Angle, Vector3};

use crate::numbers::NumbersProvider;
use crate::skypoint::SkyPoint;

/// B1900 right ascension of the standard solar apex, degrees.
const SOLAR_APEX_RA_DEG: f64 = 270.9592;
/// B1900 declination of the standard solar apex, degrees.
const SOLAR_APEX_DEC_DEG: f64 = 30.00467;
/// Standard solar motion relative to the LSR, km/s.
const SOLAR_APEX_SPEED_KMS: f64 = 20.0;

impl SkyPoint {
    /// Line-of-sight unit vector in the J2000 frame, for a catalog
    /// position referred to epoch `jd0`.
    fn j2000_direction(&self, jd0: f64, provider: &impl NumbersProvider) -> Vector3 {
        let mut scratch = self.clone();
        scratch.precess_from_any_epoch(jd0, J2000_JD, provider);
        scratch.unit_vector()
    }

    /// Projection of the Sun's LSR motion onto the line of sight, km/s.
    /// Positive when the Sun moves away from the source.
    pub fn v_r_sun(&self, jd0: f64, provider: &impl NumbersProvider) -> f64 {
        let apex = Vector3::from_spherical(
            Angle::from_degrees(SOLAR_APEX_RA_DEG).radians(),
            Angle::from_degrees(SOLAR_APEX_DEC_DEG).radians(),
        );
        SOLAR_APEX_SPEED_KMS * apex.dot(self.j2000_direction(jd0, provider))
    }

    /// Heliocentric radial velocity from an LSR radial velocity.
    pub fn v_heliocentric(&self, v_lsr: f64, jd0: f64, provider: &impl NumbersProvider) -> f64 {
        v_lsr - self.v_r_sun(jd0, provider)
    }

    /// LSR radial velocity from a heliocentric radial velocity.
    pub fn v_helio_to_v_lsr(
        &self,
        v_helio: f64,
        jd0: f64,
        provider: &impl NumbersProvider,
    ) -> f64 {
        v_helio + self.v_r_sun(jd0, provider)
    }

    /// Projection of the Earth's orbital velocity onto the line of sight,
    /// km/s, using the velocity vector from the provider's terms at `jd0`.
    pub fn v_r_earth(&self, jd0: f64, provider: &impl NumbersProvider) -> f64 {
        let num = provider.reduction_numbers(jd0);
        num.v_earth.dot(self.j2000_direction(jd0, provider))
    }

    /// Geocentric radial velocity from a heliocentric radial velocity.
    pub fn v_geocentric(&self, v_helio: f64, jd0: f64, provider: &impl NumbersProvider) -> f64 {
        v_helio - self.v_r_earth(jd0, provider)
    }

    /// Heliocentric radial velocity from a geocentric radial velocity.
    pub fn v_geo_to_v_helio(
        &self,
        v_geo: f64,
        jd0: f64,
        provider: &impl NumbersProvider,
    ) -> f64 {
        v_geo + self.v_r_earth(jd0, provider)
    }

    /// Projection of the observatory's velocity (km/s, equatorial frame of
    /// date) onto the current line of sight.
    pub fn v_r_site(&self, v_site: [f64; 3]) -> f64 {
        Vector3::from_array(v_site).dot(self.unit_vector())
    }

    /// Topocentric radial velocity from a geocentric radial velocity and
    /// the observatory velocity vector.
    pub fn v_topocentric(&self, v_geo: f64, v_site: [f64; 3]) -> f64 {
        v_geo - self.v_r_site(v_site)
    }

    /// Geocentric radial velocity from a topocentric radial velocity and
    /// the observatory velocity vector.
    pub fn v_topo_to_v_geo(&self, v_topo: f64, v_site: [f64; 3]) -> f64 {
        v_topo + self.v_r_site(v_site)
    }
}
