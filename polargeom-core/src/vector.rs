//! Bound vectors: a direction anchored at a point

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::Result;
use crate::point::Point;
use crate::vec3::Vec3;

/// A direction anchored at a start point, i.e. a ray or segment in space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundVector {
    direction: Direction,
    anchor: Point,
}

impl BoundVector {
    pub fn new(direction: Direction, anchor: Point) -> Self {
        Self { direction, anchor }
    }

    /// Vector from `start` to `end`, anchored at `start`
    pub fn from_points(start: &Point, end: &Point) -> Result<Self> {
        Ok(Self::new(Direction::from_points(start, end)?, *start))
    }

    /// Vector `(x, y, z)` anchored at the origin
    pub fn from_origin(x: f64, y: f64, z: f64) -> Result<Self> {
        Ok(Self::new(Direction::from_cartesian(x, y, z)?, Point::origin()))
    }

    /// Same anchor, direction shrunk by `length` (see [`Direction::shrink_by`])
    pub fn shrink_by(&self, length: f64) -> Result<Self> {
        Ok(Self::new(self.direction.shrink_by(length)?, self.anchor))
    }

    pub fn direction(&self) -> &Direction {
        &self.direction
    }

    pub fn anchor(&self) -> &Point {
        &self.anchor
    }

    pub fn start(&self) -> Point {
        self.anchor
    }

    pub fn end(&self) -> Point {
        self.anchor + self.direction.to_cartesian()
    }

    pub fn to_cartesian(&self) -> Vec3 {
        self.direction.to_cartesian()
    }

    /// Point at parameter `t` along the vector (`start` at 0, `end` at 1)
    pub fn point_at(&self, t: f64) -> Point {
        self.anchor + self.direction.to_cartesian() * t
    }
}
