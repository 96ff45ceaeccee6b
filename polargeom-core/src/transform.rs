//! Linear 3x3 transformations and the two-vector rotation+scale builder

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::point::Point;
use crate::tolerance::Tolerance;
use crate::vec3::{clamped_acos, stable_norm, try_unit, Mat3, UnitVec3, Vec3};

/// Skew-symmetric cross-product matrix `[v]x`, so that `skew(v) * w == v x w`
pub fn skew(v: &Vec3) -> Mat3 {
    Matrix3::new(
        0.0, -v.z, v.y, //
        v.z, 0.0, -v.x, //
        -v.y, v.x, 0.0,
    )
}

/// Rotation by `angle` radians about `axis` (Rodrigues' formula).
///
/// `R = cos(θ)·I + sin(θ)·[k]x + (1 − cos(θ))·k kᵀ`
pub fn rotation_about_axis(axis: &UnitVec3, angle: f64) -> Mat3 {
    let (sin, cos) = angle.sin_cos();
    let k = axis.into_inner();
    Mat3::identity() * cos + skew(&k) * sin + (k * k.transpose()) * (1.0 - cos)
}

/// Matrix that rotates `v1` onto the direction of `v2`, applied after the
/// axis-aligned scale `diag(|v2|/|v1|, |v1|/|v2|, 1)`.
///
/// The scale acts along the fixed X and Y axes, not along `v1` or `v2`, so
/// `T * v1` equals `v2` only when `v1` lies on the X axis.
pub fn transformation_matrix(v1: &Vec3, v2: &Vec3) -> Result<Mat3> {
    transformation_matrix_within(v1, v2, &Tolerance::default())
}

/// Like [`transformation_matrix`], with a custom parallel tolerance
pub fn transformation_matrix_within(v1: &Vec3, v2: &Vec3, tolerance: &Tolerance) -> Result<Mat3> {
    let v1_unit = try_unit(v1, "first vector")?.into_inner();
    let v2_unit = try_unit(v2, "second vector")?.into_inner();

    // Normalizing can round exact multiples apart, so the exact test runs on
    // the max-scaled inputs as well.
    let scaled_axis = (v1 / v1.amax()).cross(&(v2 / v2.amax()));
    let axis = v1_unit.cross(&v2_unit);
    let axis_length = axis.norm();
    if scaled_axis == Vec3::zeros() || tolerance.is_parallel(axis_length) {
        tracing::debug!("no rotation axis between {:?} and {:?}", v1, v2);
        return Err(Error::ParallelInput(format!(
            "vectors ({}, {}, {}) and ({}, {}, {}) are parallel",
            v1.x, v1.y, v1.z, v2.x, v2.y, v2.z
        )));
    }
    let axis = UnitVec3::new_unchecked(axis / axis_length);
    let theta = clamped_acos(v1_unit.dot(&v2_unit));
    tracing::trace!("rotation axis {:?}, angle {}", axis.into_inner(), theta);

    let rotation = rotation_about_axis(&axis, theta);

    let ratio = stable_norm(v2) / stable_norm(v1);
    if !ratio.is_finite() || ratio == 0.0 {
        tracing::debug!("length ratio {} between {:?} and {:?}", ratio, v1, v2);
        return Err(Error::NonFinite(format!(
            "length ratio {} is not representable",
            ratio
        )));
    }
    let scaling = Mat3::from_diagonal(&Vec3::new(ratio, 1.0 / ratio, 1.0));

    Ok(rotation * scaling)
}

/// A linear transformation of 3D space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTransform {
    pub matrix: Mat3,
}

impl LinearTransform {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Mat3::identity(),
        }
    }

    /// Create a rotation about `axis`
    pub fn rotation(axis: &UnitVec3, angle: f64) -> Self {
        Self {
            matrix: rotation_about_axis(axis, angle),
        }
    }

    /// Create a per-axis scaling transformation
    pub fn scaling(scale: Vec3) -> Self {
        Self {
            matrix: Mat3::from_diagonal(&scale),
        }
    }

    /// The rotation+scale taking `v1` towards `v2` (see [`transformation_matrix`])
    pub fn between(v1: &Vec3, v2: &Vec3) -> Result<Self> {
        Ok(Self {
            matrix: transformation_matrix(v1, v2)?,
        })
    }

    /// Apply the transformation to a vector
    pub fn transform_vector(&self, vector: &Vec3) -> Vec3 {
        self.matrix * vector
    }

    /// Apply the transformation to a point's position vector
    pub fn transform_point(&self, point: &Point) -> Point {
        Point::from(self.matrix * point.coords())
    }

    /// `self` applied after `other`
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Get the inverse transformation
    pub fn inverse(self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.matrix - Mat3::identity()).norm() < epsilon
    }
}

impl Default for LinearTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for LinearTransform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Mat3> for LinearTransform {
    fn from(matrix: Mat3) -> Self {
        Self { matrix }
    }
}
