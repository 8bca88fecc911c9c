//! 3D vectors and rotation matrices for frame transformations.

mod rotation_matrix;
mod vector3;

pub use rotation_matrix::RotationMatrix3;
pub use vector3::Vector3;
