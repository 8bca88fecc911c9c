/// Julian Date of the J2000.0 epoch (2000 January 1, 12h TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the B1950.0 epoch (Besselian year 1950.0).
pub const B1950_JD: f64 = 2_433_282.4235;

/// Julian Date of 1984 January 1, 0h — the intermediate epoch used by the
/// FK4/FK5 (B1950 ↔ J2000) conversion.
pub const JD_1984: f64 = 2_445_700.5;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Length of a tropical century in days, used by the Newcomb (FK4)
/// precession angles which are referred to B1950.
pub const DAYS_PER_TROPICAL_CENTURY: f64 = 36_524.2199;

pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;
