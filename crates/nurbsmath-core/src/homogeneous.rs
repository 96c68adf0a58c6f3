//! Conversions between cartesian and homogeneous point representations.
//!
//! A homogeneous point in `n` dimensions carries its rational weight in the
//! last component; the corresponding cartesian point has `n - 1` components.
//! Control points of rational curves and surfaces are weighted into
//! homogeneous form before evaluation and divided back out afterwards.
//!
//! All functions here are generic over the vector dimension `D`, so they
//! accept both statically-sized vectors (`SVector<T, N>`, dimension
//! arithmetic checked at compile time) and dynamically-sized vectors
//! (`DVector<T>`, where the caller guarantees the dimension precondition).
//!
//! None of these functions validate their input: a zero weight propagates
//! through the perspective division as IEEE-754 infinity or NaN rather than
//! being rejected. Callers own the responsibility of passing meaningful
//! weights.

use crate::types::{Scalar, Vector};
use nalgebra::{allocator::Allocator, DefaultAllocator, DimAdd, DimDiff, DimSub, DimSum, U1};

/// Converts an n-dimensional point in homogeneous coordinates to an
/// (n-1)-dimensional point in cartesian coordinates by perspective division.
///
/// Each of the leading `n - 1` components is divided by the last component
/// (the weight). A zero weight yields infinities and NaNs per IEEE-754
/// division semantics; no check is performed.
///
/// For dynamically-sized vectors the input must have `n >= 2` components.
pub fn homogeneous_to_cartesian<T, D>(pt: &Vector<T, D>) -> Vector<T, DimDiff<D, U1>>
where
    T: Scalar,
    D: DimSub<U1>,
    DefaultAllocator: Allocator<D> + Allocator<DimDiff<D, U1>>,
{
    let w = pt[pt.len() - 1];
    let cart_dim = pt.shape_generic().0.sub(U1);
    Vector::from_fn_generic(cart_dim, U1, |i, _| pt[i] / w)
}

/// Converts an n-dimensional point in cartesian coordinates to an
/// (n+1)-dimensional point in homogeneous coordinates with weight `w`.
///
/// The leading `n` components are the cartesian components scaled by `w`;
/// the final component is `w` itself. A zero weight is valid and simply
/// produces the zero homogeneous point.
pub fn cartesian_to_homogeneous<T, D>(pt: &Vector<T, D>, w: T) -> Vector<T, DimSum<D, U1>>
where
    T: Scalar,
    D: DimAdd<U1>,
    DefaultAllocator: Allocator<D> + Allocator<DimSum<D, U1>>,
{
    let n = pt.len();
    let hom_dim = pt.shape_generic().0.add(U1);
    Vector::from_fn_generic(hom_dim, U1, |i, _| if i < n { pt[i] * w } else { w })
}

/// Converts an n-dimensional homogeneous point to an (n-1)-dimensional point
/// by truncating the last component, without perspective division.
///
/// The weight is discarded, not divided out: the result keeps the scaled
/// components as-is. Used where the homogeneous weight is not meaningful for
/// the cartesian interpretation, e.g. derivative vectors of weighted curves.
///
/// For dynamically-sized vectors the input must have `n >= 2` components.
pub fn truncate_homogeneous<T, D>(pt: &Vector<T, D>) -> Vector<T, DimDiff<D, U1>>
where
    T: Scalar,
    D: DimSub<U1>,
    DefaultAllocator: Allocator<D> + Allocator<DimDiff<D, U1>>,
{
    let cart_dim = pt.shape_generic().0.sub(U1);
    Vector::from_fn_generic(cart_dim, U1, |i, _| pt[i])
}
