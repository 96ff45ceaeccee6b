//! Batch conversions between kernel values and plain coordinate data.
//!
//! Renderers and plotting front-ends only need flat `[x, y, z]` triples and
//! `[A, B, C, D]` plane rows; samplers hand back batches of polar triples.

use crate::direction::{Direction, Polar};
use crate::error::Result;
use crate::plane::Plane;
use crate::traits::Coordinates;

/// Cartesian triples of every item, in order
pub fn cartesian_triples<'a, T, I>(items: I) -> Vec<[f64; 3]>
where
    T: Coordinates + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Coordinates::xyz).collect()
}

/// `[r, inclination, azimuth]` of every direction, in order
pub fn polar_triples<'a, I>(directions: I) -> Vec<[f64; 3]>
where
    I: IntoIterator<Item = &'a Direction>,
{
    directions
        .into_iter()
        .map(|d| d.to_polar().to_array())
        .collect()
}

/// `[A, B, C, D]` of every plane, in order
pub fn plane_rows<'a, I>(planes: I) -> Vec<[f64; 4]>
where
    I: IntoIterator<Item = &'a Plane>,
{
    planes.into_iter().map(Plane::equation).collect()
}

/// Split triples into separate x, y and z columns
pub fn split_coordinates(triples: &[[f64; 3]]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut xs = Vec::with_capacity(triples.len());
    let mut ys = Vec::with_capacity(triples.len());
    let mut zs = Vec::with_capacity(triples.len());
    for [x, y, z] in triples {
        xs.push(*x);
        ys.push(*y);
        zs.push(*z);
    }
    (xs, ys, zs)
}

/// Build directions from a batch of polar coordinates (radians).
///
/// Stops at the first invalid entry.
pub fn directions_from_polar<I>(batch: I) -> Result<Vec<Direction>>
where
    I: IntoIterator<Item = Polar>,
{
    batch.into_iter().map(Direction::try_from).collect()
}
