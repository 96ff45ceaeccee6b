//! Point type and related functionality

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::Result;
use crate::vec3::{stable_norm, vec3, Vec3};

/// A position in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Create a point from Cartesian coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Position vector of the point
    pub fn coords(&self) -> Vec3 {
        vec3(self.x, self.y, self.z)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Mirror this point through `anchor` (`2 * anchor - self`)
    pub fn reflect_on(&self, anchor: &Point) -> Point {
        Point::new(
            2.0 * anchor.x - self.x,
            2.0 * anchor.y - self.y,
            2.0 * anchor.z - self.z,
        )
    }

    /// Move the point `length` closer to the origin along its own direction.
    ///
    /// Fails for the origin itself, and when the point would land exactly
    /// on the origin. Overshooting carries the point through to the other side.
    pub fn shrink_by(&self, length: f64) -> Result<Point> {
        let from_origin = Direction::from_points(&Point::origin(), self)?;
        Ok(from_origin.shrink_by(length)?.as_point())
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        stable_norm(&(other.coords() - self.coords()))
    }
}

impl From<Vec3> for Point {
    fn from(v: Vec3) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Point {
    fn from(xyz: [f64; 3]) -> Self {
        Point::new(xyz[0], xyz[1], xyz[2])
    }
}

impl From<Point> for [f64; 3] {
    fn from(point: Point) -> Self {
        point.to_array()
    }
}

impl Add<Vec3> for Point {
    type Output = Point;

    fn add(self, rhs: Vec3) -> Point {
        Point::from(self.coords() + rhs)
    }
}

impl Sub for Point {
    type Output = Vec3;

    fn sub(self, rhs: Point) -> Vec3 {
        self.coords() - rhs.coords()
    }
}
