//! Rigid transforms built from elementary rotations and translations.
//!
//! A [`Pose`] maps points from a local frame into the world frame. The upper
//! left 3x3 block is the rotation, the first three rows of the last column
//! are the translation.

use std::f64::consts::FRAC_PI_2;
use std::ops::Mul;

use glam::{DMat3, DMat4, DVec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A coordinate axis of a local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the column index of this axis in a rotation matrix.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Returns the unit vector along this axis.
    #[must_use]
    pub fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }
}

/// A 4x4 homogeneous rigid transform from a local frame to the world frame.
///
/// The rotation block is not checked for orthonormality; poses composed from
/// [`Pose::rotate_x`], [`Pose::rotate_y`], [`Pose::rotate_z`] and
/// [`Pose::translate`] stay rigid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pose(DMat4);

impl Pose {
    /// The identity transform.
    pub const IDENTITY: Self = Self(DMat4::IDENTITY);

    /// Wraps an arbitrary homogeneous matrix.
    #[must_use]
    pub fn from_matrix(matrix: DMat4) -> Self {
        Self(matrix)
    }

    /// Builds a pose from a rotation block and a translation.
    #[must_use]
    pub fn from_rotation_translation(rotation: DMat3, translation: DVec3) -> Self {
        Self(DMat4::from_cols(
            rotation.x_axis.extend(0.0),
            rotation.y_axis.extend(0.0),
            rotation.z_axis.extend(0.0),
            translation.extend(1.0),
        ))
    }

    /// Rotation about the x axis by `angle` radians (right-handed).
    #[must_use]
    pub fn rotate_x(angle: f64) -> Self {
        Self(DMat4::from_rotation_x(angle))
    }

    /// Rotation about the y axis by `angle` radians (right-handed).
    #[must_use]
    pub fn rotate_y(angle: f64) -> Self {
        Self(DMat4::from_rotation_y(angle))
    }

    /// Rotation about the z axis by `angle` radians (right-handed).
    #[must_use]
    pub fn rotate_z(angle: f64) -> Self {
        Self(DMat4::from_rotation_z(angle))
    }

    /// Pure translation by `offset`.
    #[must_use]
    pub fn translate(offset: DVec3) -> Self {
        Self(DMat4::from_translation(offset))
    }

    /// Returns `self * other`: `other` is applied first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Pose) -> Pose {
        Self(self.0 * other.0)
    }

    /// Returns the underlying homogeneous matrix.
    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        self.0
    }

    /// Returns the 3x3 rotation block.
    #[must_use]
    pub fn rotation(&self) -> DMat3 {
        DMat3::from_mat4(self.0)
    }

    /// Returns the translation, which is also the local origin in world space.
    #[must_use]
    pub fn translation(&self) -> DVec3 {
        self.0.w_axis.truncate()
    }

    /// Returns the world-space direction of a local axis.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> DVec3 {
        self.0.col(axis.index()).truncate()
    }

    /// Maps a local point into world space.
    #[must_use]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.rotation() * point + self.translation()
    }

    /// Rotates a local direction into world space (translation is ignored).
    #[must_use]
    pub fn transform_vector(&self, vector: DVec3) -> DVec3 {
        self.rotation() * vector
    }

    /// Returns true when the rotation block is orthonormal with determinant +1
    /// and the last row is `[0, 0, 0, 1]`, all within `tolerance`.
    #[must_use]
    pub fn is_rigid(&self, tolerance: f64) -> bool {
        let rotation = self.rotation();
        let orthonormal = (rotation.transpose() * rotation).abs_diff_eq(DMat3::IDENTITY, tolerance);
        let proper = (rotation.determinant() - 1.0).abs() <= tolerance;
        let last_row = self.0.row(3);
        let homogeneous = last_row.abs_diff_eq(glam::DVec4::W, tolerance);
        orthonormal && proper && homogeneous
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<DMat4> for Pose {
    fn from(matrix: DMat4) -> Self {
        Self(matrix)
    }
}

impl From<Pose> for DMat4 {
    fn from(pose: Pose) -> Self {
        pose.0
    }
}

impl Mul for Pose {
    type Output = Pose;

    fn mul(self, rhs: Pose) -> Pose {
        self.compose(&rhs)
    }
}

/// Draws a random rigid pose.
///
/// Six values are drawn uniformly from [-1, 1): the first three become
/// rotation angles about x, y and z scaled by pi/2, the last three a
/// translation scaled by 0.1. The result is
/// `translate * rotate_z * rotate_y * rotate_x`.
pub fn random_pose<R: Rng + ?Sized>(rng: &mut R) -> Pose {
    let r: [f64; 6] = std::array::from_fn(|_| rng.gen_range(-1.0..1.0));

    Pose::translate(DVec3::new(r[3], r[4], r[5]) * 0.1)
        * Pose::rotate_z(r[2] * FRAC_PI_2)
        * Pose::rotate_y(r[1] * FRAC_PI_2)
        * Pose::rotate_x(r[0] * FRAC_PI_2)
}
