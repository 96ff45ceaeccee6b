//! Core traits for polargeom

use crate::direction::Direction;
use crate::error::Result;
use crate::point::Point;
use crate::transform::LinearTransform;
use crate::vector::BoundVector;

/// Trait for objects that can be mapped through a linear transformation
pub trait Transformable: Sized {
    /// Apply a transformation, returning a new value
    fn transformed(&self, transform: &LinearTransform) -> Result<Self>;
}

/// Trait for objects with a single Cartesian position or extent
pub trait Coordinates {
    /// `[x, y, z]`
    fn xyz(&self) -> [f64; 3];
}

impl Transformable for Point {
    fn transformed(&self, transform: &LinearTransform) -> Result<Self> {
        Ok(transform.transform_point(self))
    }
}

impl Transformable for Direction {
    /// Fails when a singular transform collapses the direction to zero
    fn transformed(&self, transform: &LinearTransform) -> Result<Self> {
        Direction::try_from(transform.transform_vector(&self.to_cartesian()))
    }
}

impl Transformable for BoundVector {
    fn transformed(&self, transform: &LinearTransform) -> Result<Self> {
        Ok(BoundVector::new(
            self.direction().transformed(transform)?,
            self.anchor().transformed(transform)?,
        ))
    }
}

impl Coordinates for Point {
    fn xyz(&self) -> [f64; 3] {
        self.to_array()
    }
}

impl Coordinates for Direction {
    fn xyz(&self) -> [f64; 3] {
        self.to_array()
    }
}
