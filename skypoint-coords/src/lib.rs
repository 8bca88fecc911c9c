//! Celestial coordinate engine: catalog positions to apparent places.
//!
//! The engine reduces cataloged equatorial coordinates to the apparent
//! place an observer sees — precession between epochs, nutation,
//! annual aberration — and converts between the equatorial, horizontal,
//! ecliptic and galactic frames, including the full FK4 (B1950) ↔ FK5
//! (J2000) catalog conversion with E-terms. Radial-velocity helpers move a
//! measured velocity between the LSR, heliocentric, geocentric and
//! topocentric rest frames.
//!
//! Everything revolves around two types:
//!
//! - [`SkyPoint`]: a position holding an immutable catalog coordinate pair
//!   and a mutable current pair; every reduction restarts from the catalog
//!   pair, so transformations are idempotent.
//! - [`ReductionNumbers`]: the per-instant correction terms (precession
//!   matrices, nutation deltas, aberration inputs, Earth velocity),
//!   produced by a [`NumbersProvider`]. [`StandardNumbers`] is the stock
//!   analytic implementation; tests or callers with better ephemerides can
//!   inject their own.
//!
//! # Example
//!
//! ```
//! use skypoint_coords::{SkyPoint, StandardNumbers};
//! use skypoint_core::constants::J2000_JD;
//!
//! // Regulus, J2000 catalog position.
//! let mut star = SkyPoint::from_hours_degrees(10.139_53, 11.967_2)?;
//!
//! // Apparent place for 2025 Jan 1.
//! star.apparent_coord(J2000_JD, 2_460_676.5, &StandardNumbers);
//! println!("apparent RA {} Dec {}", star.ra(), star.dec());
//! # Ok::<(), skypoint_core::SkyError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`skypoint`] | [`SkyPoint`], angular distance |
//! | [`numbers`] | [`ReductionNumbers`], [`NumbersProvider`], [`StandardNumbers`] |
//! | [`reduction`] | precession, nutation, aberration, apparent place |
//! | [`horizontal`] | equatorial ↔ horizontal |
//! | [`ecliptic`] | equatorial ↔ ecliptic |
//! | [`epoch`] | FK4 B1950 ↔ FK5 J2000, E-terms |
//! | [`galactic`] | equatorial ↔ galactic |
//! | [`velocity`] | radial-velocity frame ladder |

pub mod ecliptic;
pub mod epoch;
pub mod galactic;
pub mod horizontal;
pub mod numbers;
pub mod reduction;
pub mod skypoint;
pub mod velocity;

pub use numbers::{NumbersProvider, ReductionNumbers, StandardNumbers};
pub use reduction::NUTATION_EXACT_DEC_DEG;
pub use skypoint::SkyPoint;
