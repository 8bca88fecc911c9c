//! Angle type and angular-range utilities.

mod core;
pub mod normalize;
mod ops;
pub mod validate;

pub use self::core::{deg, hours, rad, Angle};
pub use normalize::{clamp_dec, wrap_0_2pi, wrap_pm_pi};
