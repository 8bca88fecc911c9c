//! 3×3 rotation matrices for reference-frame transformations.
//!
//! Precession is a pure rotation of the equatorial frame, so each epoch pair
//! is represented by a proper rotation matrix (orthogonal, determinant +1).
//! The inverse of such a matrix is its transpose — much cheaper than a
//! general inverse and numerically stable, which is why every matrix pair in
//! the engine (epoch→J2000 / J2000→epoch) is stored as a matrix and its
//! transpose.
//!
//! Storage is row-major `[[f64; 3]; 3]`; `apply_to_vector` computes the
//! ordinary matrix-column-vector product.

use super::vector3::Vector3;

/// A 3×3 rotation matrix.
///
/// Construction does not verify orthogonality; the factories in the
/// correction-term provider only ever build proper rotations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    /// The identity rotation.
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from row-major elements.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Element at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.elements[i][j]
    }

    /// The transpose — for a proper rotation, also the inverse.
    pub fn transpose(&self) -> Self {
        let e = &self.elements;
        Self {
            elements: [
                [e[0][0], e[1][0], e[2][0]],
                [e[0][1], e[1][1], e[2][1]],
                [e[0][2], e[1][2], e[2][2]],
            ],
        }
    }

    /// Matrix · column-vector product.
    pub fn apply_to_vector(&self, v: Vector3) -> Vector3 {
        let e = &self.elements;
        Vector3::new(
            e[0][0] * v.x + e[0][1] * v.y + e[0][2] * v.z,
            e[1][0] * v.x + e[1][1] * v.y + e[1][2] * v.z,
            e[2][0] * v.x + e[2][1] * v.y + e[2][2] * v.z,
        )
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = RotationMatrix3;

    /// Composition: `(a * b).apply(v) == a.apply(b.apply(v))`.
    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.elements[i][k] * rhs.elements[k][j]).sum();
            }
        }
        Self { elements: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rot_z(psi: f64) -> RotationMatrix3 {
        let (s, c) = psi.sin_cos();
        RotationMatrix3::from_array([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    #[test]
    fn test_identity_leaves_vector() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(RotationMatrix3::identity().apply_to_vector(v), v);
    }

    #[test]
    fn test_transpose_is_inverse() {
        let m = rot_z(0.37);
        let p = m * m.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((p.get(i, j) - expected).abs() < 1e-15, "({i},{j})");
            }
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vector3::new(0.3, -0.4, 0.5);
        let r = rot_z(1.1).apply_to_vector(v);
        assert!((r.magnitude() - v.magnitude()).abs() < 1e-15);
    }

    #[test]
    fn test_composition_order() {
        let a = rot_z(0.2);
        let b = rot_z(0.3);
        let v = Vector3::new(1.0, 0.0, 0.0);
        let combined = (a * b).apply_to_vector(v);
        let sequential = a.apply_to_vector(b.apply_to_vector(v));
        assert!((combined.x - sequential.x).abs() < 1e-15);
        assert!((combined.y - sequential.y).abs() < 1e-15);
    }
}
