//! Primitives for celestial coordinate reduction.
//!
//! `skypoint-core` provides the building blocks the coordinate engine in
//! `skypoint-coords` is assembled from: the [`Angle`] type with its
//! degree/hour/radian views, angular-range normalization, 3D vectors and
//! rotation matrices, astronomical constants, and the clamped inverse-trig
//! helpers implementing the engine's domain-violation policy.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] type, normalization, role validation |
//! | [`matrix`] | [`Vector3`] and [`RotationMatrix3`] |
//! | [`math`] | `fmod`, haversine, clamped acos/asin |
//! | [`constants`] | J2000/B1950 epochs, unit conversions |
//! | [`errors`] | [`SkyError`] and [`SkyResult`] |
//!
//! # Design notes
//!
//! - **Radians internally**: all angular computation happens in radians;
//!   [`Angle`] converts at the edges.
//! - **Total trig**: [`math::clamped_acos`] and [`math::clamped_asin`] never
//!   panic or return NaN for out-of-domain arguments. Round-off-sized
//!   excursions are clamped silently; anything larger is logged through the
//!   `log` facade and clamped anyway.
//! - **No implicit state**: everything here is a plain value type.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;

pub use angle::Angle;
pub use errors::{MathErrorKind, SkyError, SkyResult};
pub use matrix::{RotationMatrix3, Vector3};

pub mod test_helpers;
