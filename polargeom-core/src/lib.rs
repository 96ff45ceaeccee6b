//! Core geometric kernel for polargeom
//!
//! This crate provides directions held in both Cartesian and spherical-polar
//! form, points, bound vectors, planes in normal form with ray intersection,
//! and the rotation+scale matrix that carries one vector onto another.
//!
//! Every type is an immutable value: operations return new values and never
//! mutate in place, so all of them can be shared freely across threads.
//! Nothing here caches instances; a caller that pools directions or planes
//! must synchronize that pool itself.

pub mod error;
pub mod vec3;
pub mod direction;
pub mod point;
pub mod vector;
pub mod plane;
pub mod transform;
pub mod tolerance;
pub mod traits;
pub mod export;
pub mod interop;

pub use error::*;
pub use vec3::*;
pub use direction::*;
pub use point::*;
pub use vector::*;
pub use plane::*;
pub use transform::*;
pub use tolerance::*;
pub use traits::*;
pub use export::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix3, Unit, Vector3};
