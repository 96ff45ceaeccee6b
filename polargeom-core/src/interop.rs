//! Conversions to glam types and approximate comparison support

use approx::{AbsDiffEq, RelativeEq};
use glam::{DVec3, DVec4};
use nalgebra::Vector4;

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::plane::Plane;
use crate::point::Point;

impl From<Point> for DVec3 {
    fn from(point: Point) -> Self {
        DVec3::new(point.x, point.y, point.z)
    }
}

impl From<DVec3> for Point {
    fn from(v: DVec3) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}

impl From<Direction> for DVec3 {
    fn from(direction: Direction) -> Self {
        DVec3::new(direction.x(), direction.y(), direction.z())
    }
}

impl TryFrom<DVec3> for Direction {
    type Error = Error;

    fn try_from(v: DVec3) -> Result<Self> {
        Direction::from_cartesian(v.x, v.y, v.z)
    }
}

impl From<Plane> for DVec4 {
    fn from(plane: Plane) -> Self {
        DVec4::new(plane.a, plane.b, plane.c, plane.d)
    }
}

impl From<DVec4> for Plane {
    fn from(v: DVec4) -> Self {
        Plane::new(v.x, v.y, v.z, v.w)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.coords().abs_diff_eq(&other.coords(), epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.coords()
            .relative_eq(&other.coords(), epsilon, max_relative)
    }
}

// Directions compare by their Cartesian triple; the polar cache follows it.
impl AbsDiffEq for Direction {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_cartesian()
            .abs_diff_eq(&other.to_cartesian(), epsilon)
    }
}

impl RelativeEq for Direction {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.to_cartesian()
            .relative_eq(&other.to_cartesian(), epsilon, max_relative)
    }
}

impl AbsDiffEq for Plane {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        Vector4::from(self.equation()).abs_diff_eq(&Vector4::from(other.equation()), epsilon)
    }
}

impl RelativeEq for Plane {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        Vector4::from(self.equation()).relative_eq(
            &Vector4::from(other.equation()),
            epsilon,
            max_relative,
        )
    }
}
