//! Scalar helpers for curve and surface evaluation.
//!
//! Binomial coefficients for derivative and degree-elevation formulas,
//! approximate floating-point equality, and linear interval remapping.

use crate::types::Scalar;
use num_traits::Float;

/// Computes the binomial coefficient C(n, k) using the multiplicative
/// formula `prod_{i=1}^{k} (n + 1 - i) / i`.
///
/// The division is interleaved after each multiplication, which keeps every
/// intermediate value equal to a smaller binomial coefficient scaled by `i`
/// and avoids the overflow a multiply-all-then-divide-all evaluation would
/// hit well inside the representable range.
///
/// Returns `0` when `k > n` and `1` when `k == 0`. Coefficients beyond the
/// range of `u64` are subject to native unsigned overflow behavior.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let mut result = 1;
    for i in 1..=k {
        result *= n + 1 - i;
        result /= i;
    }
    result
}

/// Checks whether two scalars are within machine epsilon of each other.
///
/// Equivalent to [`close_eps`] with `T::EPSILON` as the threshold.
pub fn close<T: Scalar>(a: T, b: T) -> bool {
    close_eps(a, b, T::EPSILON)
}

/// Checks whether two scalars are closer than `eps`.
///
/// The comparison is a strict less-than: values exactly `eps` apart are not
/// considered close. NaN inputs compare as not close, following IEEE-754
/// ordering; infinities likewise never satisfy the comparison.
pub fn close_eps<T: Scalar>(a: T, b: T, eps: T) -> bool {
    <T as Float>::abs(a - b) < eps
}

/// Maps `val` from the interval `[old_min, old_max]` to the corresponding
/// position in `[new_min, new_max]`.
///
/// The transform is affine, not a clamp: values outside the old interval
/// extrapolate outside the new one. A zero-width old interval divides by
/// zero and propagates infinity or NaN per IEEE-754 semantics; no check is
/// performed.
pub fn map_to_range<T: Scalar>(val: T, old_min: T, old_max: T, new_min: T, new_max: T) -> T {
    let old_range = old_max - old_min;
    let new_range = new_max - new_min;
    ((val - old_min) * new_range) / old_range + new_min
}
