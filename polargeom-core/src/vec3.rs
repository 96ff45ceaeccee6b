//! Vector primitives shared by the geometric types

use nalgebra::{Matrix3, Unit, Vector3};

use crate::error::{Error, Result};

/// A 3D vector with double precision components
pub type Vec3 = Vector3<f64>;

/// A 3x3 double precision matrix
pub type Mat3 = Matrix3<f64>;

/// A unit-length 3D vector
pub type UnitVec3 = Unit<Vector3<f64>>;

/// Build a vector from its three components
#[inline]
pub fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Check that every component is finite
pub fn ensure_finite(v: &Vec3, what: &str) -> Result<()> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        tracing::debug!("{} has non-finite components: {:?}", what, v);
        Err(Error::NonFinite(format!(
            "{} = ({}, {}, {})",
            what, v.x, v.y, v.z
        )))
    }
}

/// Euclidean length that neither overflows nor underflows for finite input
/// whose true length is representable
#[inline]
pub fn stable_norm(v: &Vec3) -> f64 {
    v.x.hypot(v.y).hypot(v.z)
}

/// Unit vector of a finite, non-zero `v`.
///
/// Dividing by the largest component first keeps the squares in range, and
/// makes exact multiples of one another normalize to identical vectors.
pub(crate) fn scaled_unit(v: &Vec3) -> UnitVec3 {
    Unit::new_normalize(v / v.amax())
}

/// Normalize `v`, failing when it is the zero vector.
///
/// Only an exactly zero vector is rejected; tiny vectors still normalize.
pub fn try_unit(v: &Vec3, what: &str) -> Result<UnitVec3> {
    ensure_finite(v, what)?;
    if v.amax() == 0.0 {
        tracing::debug!("{} has zero length", what);
        return Err(Error::DegenerateInput(format!("{} has zero length", what)));
    }
    Ok(scaled_unit(v))
}

/// Clamp a cosine into [-1, 1] before taking `acos`.
///
/// Products of unit vectors can overshoot by an ulp or two.
#[inline]
pub fn clamped_acos(cos: f64) -> f64 {
    cos.clamp(-1.0, 1.0).acos()
}
