//! Tolerance configuration for parallelism checks

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Magnitudes below which near-singular quantities are treated as parallel.
///
/// The default is exact: only a denominator (or rotation axis) that is
/// exactly zero counts as parallel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Plane-intersection denominators and rotation-axis lengths with an
    /// absolute value at or below this are reported as parallel
    pub parallel: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { parallel: 0.0 }
    }
}

impl Tolerance {
    /// Exact checks only
    pub fn exact() -> Self {
        Self::default()
    }

    /// Tolerance with a custom parallel threshold
    pub fn with_parallel(parallel: f64) -> Result<Self> {
        if !parallel.is_finite() || parallel < 0.0 {
            return Err(Error::InvalidData(format!(
                "parallel tolerance must be finite and non-negative, got {}",
                parallel
            )));
        }
        Ok(Self { parallel })
    }

    /// Whether a denominator or axis length of `magnitude` counts as parallel
    #[inline]
    pub fn is_parallel(&self, magnitude: f64) -> bool {
        magnitude.abs() <= self.parallel
    }
}
