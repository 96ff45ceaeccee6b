//! Directions held in Cartesian form with a synchronized spherical-polar cache

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::point::Point;
use crate::vec3::{clamped_acos, ensure_finite, scaled_unit, stable_norm, vec3, UnitVec3, Vec3};

/// Spherical-polar coordinates (radians).
///
/// `inclination` is measured from the +Z axis, `azimuth` from +X towards +Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub r: f64,
    pub inclination: f64,
    pub azimuth: f64,
}

impl Polar {
    pub fn new(r: f64, inclination: f64, azimuth: f64) -> Self {
        Self {
            r,
            inclination,
            azimuth,
        }
    }

    /// Build polar coordinates from angles given in degrees
    pub fn from_degrees(r: f64, inclination_deg: f64, azimuth_deg: f64) -> Self {
        Self::new(r, inclination_deg.to_radians(), azimuth_deg.to_radians())
    }

    /// `[r, inclination, azimuth]`
    pub fn to_array(&self) -> [f64; 3] {
        [self.r, self.inclination, self.azimuth]
    }

    fn has_canonical_angles(&self) -> bool {
        (0.0..=PI).contains(&self.inclination) && self.azimuth > -PI && self.azimuth <= PI
    }

    fn to_cartesian(self) -> Vec3 {
        let (sin_i, cos_i) = self.inclination.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        vec3(
            self.r * sin_i * cos_a,
            self.r * sin_i * sin_a,
            self.r * cos_i,
        )
    }

    /// Polar form of a non-zero Cartesian vector
    fn of_cartesian(c: &Vec3) -> Self {
        let r = stable_norm(c);
        let mut azimuth = c.y.atan2(c.x);
        if azimuth == -PI {
            azimuth = PI;
        }
        Self::new(r, clamped_acos(c.z / r), azimuth)
    }
}

/// A non-zero 3D orientation with magnitude.
///
/// Only [`Direction::from_cartesian`] and [`Direction::from_polar`] create
/// values, so the Cartesian triple and the polar cache always agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct Direction {
    cartesian: Vec3,
    polar: Polar,
}

impl Direction {
    fn assemble(cartesian: Vec3, polar: Polar) -> Self {
        Self { cartesian, polar }
    }

    /// Create a direction from Cartesian components
    pub fn from_cartesian(x: f64, y: f64, z: f64) -> Result<Self> {
        let cartesian = vec3(x, y, z);
        ensure_finite(&cartesian, "direction")?;
        if x == 0.0 && y == 0.0 && z == 0.0 {
            tracing::debug!("rejected zero-length direction");
            return Err(Error::DegenerateInput(
                "direction must have non-zero length".to_string(),
            ));
        }
        let polar = Polar::of_cartesian(&cartesian);
        if !polar.r.is_finite() {
            tracing::debug!("direction {:?} has an overflowing length", cartesian);
            return Err(Error::NonFinite(format!(
                "direction ({}, {}, {}) has length {}",
                x, y, z, polar.r
            )));
        }
        Ok(Self::assemble(cartesian, polar))
    }

    /// Create a direction from radius, inclination and azimuth (radians)
    pub fn from_polar(r: f64, inclination: f64, azimuth: f64) -> Result<Self> {
        let polar = Polar::new(r, inclination, azimuth);
        ensure_finite(&vec3(r, inclination, azimuth), "polar coordinates")?;
        if r == 0.0 {
            tracing::debug!("rejected polar direction with zero radius");
            return Err(Error::DegenerateInput(
                "polar radius must be non-zero".to_string(),
            ));
        }
        if r < 0.0 {
            tracing::debug!("rejected polar direction with radius {}", r);
            return Err(Error::InvalidData(format!(
                "polar radius must be positive, got {}",
                r
            )));
        }

        let cartesian = polar.to_cartesian();
        if polar.has_canonical_angles() {
            return Ok(Self::assemble(cartesian, polar));
        }
        let canonical = Polar::of_cartesian(&cartesian);
        Ok(Self::assemble(cartesian, Polar { r, ..canonical }))
    }

    /// Direction from `start` to `end`
    pub fn from_points(start: &Point, end: &Point) -> Result<Self> {
        let d = end.coords() - start.coords();
        Self::from_cartesian(d.x, d.y, d.z)
    }

    pub fn to_cartesian(&self) -> Vec3 {
        self.cartesian
    }

    pub fn to_polar(&self) -> Polar {
        self.polar
    }

    /// `[x, y, z]`
    pub fn to_array(&self) -> [f64; 3] {
        [self.cartesian.x, self.cartesian.y, self.cartesian.z]
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.cartesian.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.cartesian.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.cartesian.z
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.polar.r
    }

    #[inline]
    pub fn inclination(&self) -> f64 {
        self.polar.inclination
    }

    #[inline]
    pub fn azimuth(&self) -> f64 {
        self.polar.azimuth
    }

    /// Unit vector along this direction
    pub fn unit(&self) -> UnitVec3 {
        scaled_unit(&self.cartesian)
    }

    /// Shorten the direction by `length`.
    ///
    /// Overshooting (`length > radius`) flips the direction and leaves a
    /// magnitude of `length - radius`. Shrinking to exactly zero fails.
    pub fn shrink_by(&self, length: f64) -> Result<Self> {
        if !length.is_finite() {
            tracing::debug!("rejected non-finite shrink length {}", length);
            return Err(Error::NonFinite(format!("shrink length {}", length)));
        }
        let d = self.polar.r;
        let ratio = (d - length) / d;
        if ratio == 0.0 {
            tracing::debug!("shrinking by {} collapses a direction of length {}", length, d);
            return Err(Error::DegenerateInput(format!(
                "shrinking by {} leaves a zero-length direction",
                length
            )));
        }
        let scaled = self.cartesian * ratio;
        Self::from_cartesian(scaled.x, scaled.y, scaled.z)
    }

    /// Endpoint of this direction drawn from the origin
    pub fn as_point(&self) -> Point {
        Point::from(self.cartesian)
    }
}

impl TryFrom<[f64; 3]> for Direction {
    type Error = Error;

    fn try_from(xyz: [f64; 3]) -> Result<Self> {
        Self::from_cartesian(xyz[0], xyz[1], xyz[2])
    }
}

impl TryFrom<Vec3> for Direction {
    type Error = Error;

    fn try_from(v: Vec3) -> Result<Self> {
        Self::from_cartesian(v.x, v.y, v.z)
    }
}

impl From<Direction> for [f64; 3] {
    fn from(direction: Direction) -> Self {
        direction.to_array()
    }
}

impl TryFrom<Polar> for Direction {
    type Error = Error;

    fn try_from(polar: Polar) -> Result<Self> {
        Self::from_polar(polar.r, polar.inclination, polar.azimuth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::prelude::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn random_directions(seed: u64, count: usize) -> Vec<Direction> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .filter_map(|_| {
                Direction::from_cartesian(
                    rng.gen_range(-100.0..100.0),
                    rng.gen_range(-100.0..100.0),
                    rng.gen_range(-100.0..100.0),
                )
                .ok()
            })
            .collect()
    }

    #[test]
    fn test_zero_direction_is_rejected() {
        let err = Direction::from_cartesian(0.0, 0.0, 0.0).unwrap_err();
        assert!(err.is_degenerate());

        let err = Direction::from_polar(0.0, 1.0, 1.0).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_negative_radius_is_rejected() {
        let err = Direction::from_polar(-1.0, 0.5, 0.5).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert!(matches!(
            Direction::from_cartesian(f64::INFINITY, 0.0, 0.0),
            Err(Error::NonFinite(_))
        ));
        assert!(matches!(
            Direction::from_polar(1.0, f64::NAN, 0.0),
            Err(Error::NonFinite(_))
        ));
    }

    #[test]
    fn test_huge_direction_keeps_its_length() {
        let d = Direction::from_cartesian(1e200, 0.0, 0.0).unwrap();
        assert_eq!(d.radius(), 1e200);
        assert_eq!(d.unit().into_inner(), vec3(1.0, 0.0, 0.0));
        let shrunk = d.shrink_by(1.0).unwrap();
        assert_relative_eq!(shrunk.radius(), 1e200, max_relative = 1e-15);

        let d = Direction::from_cartesian(3e200, 0.0, 4e200).unwrap();
        assert_relative_eq!(d.radius(), 5e200, max_relative = 1e-15);
        assert_relative_eq!(d.unit().into_inner(), vec3(0.6, 0.0, 0.8), epsilon = 1e-15);
    }

    #[test]
    fn test_overflowing_length_is_non_finite() {
        assert!(matches!(
            Direction::from_cartesian(f64::MAX, f64::MAX, 0.0),
            Err(Error::NonFinite(_))
        ));
    }

    #[test]
    fn test_tiny_direction_is_accepted() {
        let d = Direction::from_cartesian(1e-170, 0.0, 0.0).unwrap();
        assert_eq!(d.radius(), 1e-170);
        assert_eq!(d.unit().into_inner(), vec3(1.0, 0.0, 0.0));

        let d = Direction::from_polar(1e-200, FRAC_PI_2, 0.0).unwrap();
        assert_relative_eq!(d.radius(), d.to_cartesian().x, max_relative = 1e-15);
        let rebuilt = Direction::from_cartesian(d.x(), d.y(), d.z()).unwrap();
        assert_relative_eq!(rebuilt.radius(), 1e-200, max_relative = 1e-15);

        let json = serde_json::to_string(&d).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(back, d, epsilon = 0.0, max_relative = 1e-15);
        assert_eq!(d.shrink_by(0.0).unwrap().to_cartesian(), d.to_cartesian());
    }

    #[test]
    fn test_polar_equator_is_x_axis() {
        let d = Direction::from_polar(1.0, FRAC_PI_2, 0.0).unwrap();
        assert_abs_diff_eq!(d.to_cartesian(), vec3(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_cartesian_to_polar() {
        let d = Direction::from_cartesian(0.0, 0.0, 2.0).unwrap();
        let polar = d.to_polar();
        assert_relative_eq!(polar.r, 2.0);
        assert_eq!(polar.inclination, 0.0);
        assert_eq!(polar.azimuth, 0.0);

        let d = Direction::from_cartesian(1.0, 1.0, 0.0).unwrap();
        assert_relative_eq!(d.radius(), 2.0_f64.sqrt());
        assert_relative_eq!(d.inclination(), FRAC_PI_2);
        assert_relative_eq!(d.azimuth(), FRAC_PI_4);
    }

    #[test]
    fn test_negative_x_axis_azimuth_is_pi() {
        let d = Direction::from_cartesian(-1.0, -0.0, 0.0).unwrap();
        assert_eq!(d.azimuth(), PI);
    }

    #[test]
    fn test_round_trip_through_polar() {
        for d in random_directions(7, 500) {
            let p = d.to_polar();
            let back = Direction::from_polar(p.r, p.inclination, p.azimuth).unwrap();
            let original = d.to_cartesian();
            assert_relative_eq!(
                back.to_cartesian(),
                original,
                epsilon = 1e-9 * original.norm(),
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_radius_matches_norm() {
        for d in random_directions(11, 500) {
            assert_relative_eq!(d.radius(), d.to_cartesian().norm(), max_relative = 1e-12);
        }
        let d = Direction::from_polar(3.5, 2.0, -1.0).unwrap();
        assert_relative_eq!(d.radius(), d.to_cartesian().norm(), max_relative = 1e-12);
    }

    #[test]
    fn test_supplied_canonical_polar_is_kept() {
        let d = Direction::from_polar(2.0, 0.3, -2.5).unwrap();
        assert_eq!(d.to_polar(), Polar::new(2.0, 0.3, -2.5));
    }

    #[test]
    fn test_out_of_range_angles_are_canonicalized() {
        let d = Direction::from_polar(1.0, -FRAC_PI_4, 0.0).unwrap();
        let p = d.to_polar();
        assert_relative_eq!(p.inclination, FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(p.azimuth, PI, epsilon = 1e-12);

        let d = Direction::from_polar(1.0, FRAC_PI_2, 3.0 * PI).unwrap();
        assert_abs_diff_eq!(d.to_cartesian(), vec3(-1.0, 0.0, 0.0), epsilon = 1e-12);
        assert!(d.azimuth() > -PI && d.azimuth() <= PI);
    }

    #[test]
    fn test_degrees_must_be_converted() {
        // Feeding degrees straight into the radian API lands somewhere else.
        let raw = Direction::from_polar(1.0, 90.0, 0.0).unwrap();
        let converted = Direction::try_from(Polar::from_degrees(1.0, 90.0, 0.0)).unwrap();
        assert_abs_diff_eq!(converted.to_cartesian(), vec3(1.0, 0.0, 0.0), epsilon = 1e-12);
        assert!((raw.to_cartesian() - converted.to_cartesian()).norm() > 0.1);
    }

    #[test]
    fn test_shrink_by() {
        let d = Direction::from_cartesian(3.0, 4.0, 0.0).unwrap();
        let shrunk = d.shrink_by(2.0).unwrap();
        assert_relative_eq!(shrunk.to_cartesian(), vec3(1.8, 2.4, 0.0), epsilon = 1e-12);
        assert_relative_eq!(shrunk.radius(), 3.0, epsilon = 1e-12);
        // The original is untouched.
        assert_relative_eq!(d.radius(), 5.0);
    }

    #[test]
    fn test_shrink_to_zero_fails() {
        let d = Direction::from_cartesian(3.0, 4.0, 0.0).unwrap();
        assert!(d.shrink_by(5.0).unwrap_err().is_degenerate());
    }

    #[test]
    fn test_shrink_overshoot_flips() {
        let d = Direction::from_cartesian(3.0, 4.0, 0.0).unwrap();
        let flipped = d.shrink_by(7.0).unwrap();
        assert_relative_eq!(flipped.radius(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(flipped.to_cartesian(), vec3(-1.2, -1.6, 0.0), epsilon = 1e-12);
        assert_relative_eq!(flipped.unit().dot(&d.unit().into_inner()), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_shrink_grows() {
        let d = Direction::from_cartesian(0.0, 0.0, 1.0).unwrap();
        let grown = d.shrink_by(-1.0).unwrap();
        assert_relative_eq!(grown.to_cartesian(), vec3(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_from_points() {
        let start = Point::new(1.0, 1.0, 1.0);
        let end = Point::new(2.0, 3.0, 4.0);
        let d = Direction::from_points(&start, &end).unwrap();
        assert_eq!(d.to_array(), [1.0, 2.0, 3.0]);

        let err = Direction::from_points(&start, &start).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_serde_uses_cartesian_triple() {
        let d = Direction::from_cartesian(1.0, 2.0, 2.0).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "[1.0,2.0,2.0]");

        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);

        assert!(serde_json::from_str::<Direction>("[0.0,0.0,0.0]").is_err());
    }
}
