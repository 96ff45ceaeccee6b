//! Planes in normal form and ray-plane intersection

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::point::Point;
use crate::tolerance::Tolerance;
use crate::vec3::{ensure_finite, try_unit, vec3, Vec3};
use crate::vector::BoundVector;

/// Denominators smaller than this are logged as numerically unstable
const UNSTABLE_DENOMINATOR: f64 = 1e-12;

/// A plane `A*x + B*y + C*z = D`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Plane {
    /// Create a plane from raw coefficients. The normal is not normalized.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// The plane through `point` perpendicular to `vector`'s direction.
    ///
    /// The resulting `(A, B, C)` is a unit normal. A zero direction cannot
    /// occur here since [`crate::Direction`] never holds one.
    pub fn from_vector_at_point(vector: &BoundVector, point: &Point) -> Self {
        let normal = vector.direction().unit();
        let d = normal.dot(&point.coords());
        Self::new(normal.x, normal.y, normal.z, d)
    }

    /// Normal vector `(A, B, C)`
    pub fn normal(&self) -> Vec3 {
        vec3(self.a, self.b, self.c)
    }

    /// `(A, B, C, D)`
    pub fn coefficients(&self) -> (f64, f64, f64, f64) {
        (self.a, self.b, self.c, self.d)
    }

    /// `[A, B, C, D]`
    pub fn equation(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// `A*x + B*y + C*z - D`; zero for points on the plane
    pub fn residual(&self, point: &Point) -> f64 {
        self.normal().dot(&point.coords()) - self.d
    }

    /// Where the line through `vector` meets the plane
    pub fn intersect_with_vector(&self, vector: &BoundVector) -> Result<Point> {
        self.intersect_with_vector_within(vector, &Tolerance::default())
    }

    /// Like [`Plane::intersect_with_vector`], with a custom parallel tolerance
    pub fn intersect_with_vector_within(
        &self,
        vector: &BoundVector,
        tolerance: &Tolerance,
    ) -> Result<Point> {
        let anchor = vector.anchor().coords();
        let direction = vector.to_cartesian();
        let normal = self.normal();

        let denominator = normal.dot(&direction);
        if tolerance.is_parallel(denominator) {
            tracing::debug!(
                "vector {:?} is parallel to plane {:?} (denominator {})",
                direction,
                self.equation(),
                denominator
            );
            return Err(Error::ParallelInput(format!(
                "vector ({}, {}, {}) is parallel to the plane",
                direction.x, direction.y, direction.z
            )));
        }
        if denominator.abs() < UNSTABLE_DENOMINATOR {
            tracing::warn!(
                "near-parallel plane intersection, denominator {}",
                denominator
            );
        }

        let t = (self.d - normal.dot(&anchor)) / denominator;
        if !t.is_finite() {
            // The denominator is non-zero but too small to place the hit.
            tracing::debug!(
                "intersection parameter {} for denominator {} is not representable",
                t,
                denominator
            );
            return Err(Error::ParallelInput(format!(
                "vector ({}, {}, {}) is too close to parallel to meet the plane",
                direction.x, direction.y, direction.z
            )));
        }
        let hit = anchor + direction * t;
        ensure_finite(&hit, "intersection point")?;
        Ok(Point::from(hit))
    }

    /// `base` moved by `length` along the unit normal of the plane.
    ///
    /// `D` plays no part; only the orientation of the plane is used.
    pub fn offset_point(&self, base: &Point, length: f64) -> Result<Point> {
        let normal = try_unit(&self.normal(), "plane normal")?;
        Ok(*base + normal.into_inner() * length)
    }
}

impl From<[f64; 4]> for Plane {
    fn from(abcd: [f64; 4]) -> Self {
        Plane::new(abcd[0], abcd[1], abcd[2], abcd[3])
    }
}

impl From<Plane> for [f64; 4] {
    fn from(plane: Plane) -> Self {
        plane.equation()
    }
}
