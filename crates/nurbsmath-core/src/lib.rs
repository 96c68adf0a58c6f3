//! Numeric utilities for NURBS curve and surface evaluation.
//!
//! This crate provides the low-level numeric helpers a NURBS geometry
//! library is built on: conversions between cartesian and homogeneous
//! (weighted) point representations, binomial coefficients for derivative
//! and degree-elevation formulas, approximate floating-point equality, and
//! linear interval remapping.
//!
//! Everything here is a pure function: no state, no allocation beyond the
//! returned vectors, and no validation. "Invalid" inputs resolve through
//! defined fallback values or IEEE-754 float semantics (division by zero
//! propagates as infinity/NaN) rather than errors, so callers own the
//! preconditions.
//!
//! # Modules
//!
//! - [`homogeneous`]: Cartesian/homogeneous coordinate conversions
//! - [`numeric`]: Binomial coefficients, approximate equality, remapping
//! - [`types`]: Scalar trait and vector type aliases

pub mod homogeneous;
pub mod numeric;
pub mod types;

// Re-export commonly used items at the crate root
pub use homogeneous::{cartesian_to_homogeneous, homogeneous_to_cartesian, truncate_homogeneous};
pub use numeric::{binomial, close, close_eps, map_to_range};
pub use types::Scalar;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use nurbsmath_core::prelude::*;
///
/// let pt = nalgebra::Vector3::new(1.0, 2.0, 3.0);
/// let hpt = cartesian_to_homogeneous(&pt, 2.0);
/// assert_eq!(homogeneous_to_cartesian(&hpt), pt);
/// ```
pub mod prelude {
    pub use crate::homogeneous::{
        cartesian_to_homogeneous, homogeneous_to_cartesian, truncate_homogeneous,
    };
    pub use crate::numeric::{binomial, close, close_eps, map_to_range};
    pub use crate::types::{DVector, SVector, Scalar, Vector};
}
