/* ************************************************************************ **
** This file is part of sqmat, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::traits::Semiring;
use crate::types::*;

use num_traits::Zero;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a fixed-size vector from a function on indices.
///
/// The length will be inferred solely from how it is used.
#[inline(always)]
pub fn from_fn<X, F, const N: usize>(f: F) -> Vector<X, N>
where F: FnMut(usize) -> X,
{ Vector::from_fn(f) }

/// Construct a zero vector (using type inference).
#[inline(always)]
pub fn zero<X: Semiring, const N: usize>() -> Vector<X, N>
{ Vector::ZERO }

impl<X, const N: usize> Vector<X, N> {
    /// Construct a fixed-size vector from a function on indices.
    ///
    /// This is also available as the free function `vee::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { Vector(std::array::from_fn(f)) }

    /// Read the first `N` elements of a buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer has fewer than `N` elements.
    #[inline]
    pub fn from_slice(slice: &[X]) -> Self
    where X: Copy,
    {
        assert!(slice.len() >= N, "buffer of length {} is too short for a {}d vector", slice.len(), N);
        Self::from_fn(|i| slice[i])
    }

    /// Map each scalar element of a vector.
    #[inline(always)]
    pub fn map<B, F>(self, f: F) -> Vector<B, N>
    where F: FnMut(X) -> B,
    { Vector(self.0.map(f)) }

    /// Unwrap into the backing array.
    #[inline(always)]
    pub fn into_array(self) -> [X; N]
    { self.0 }
}

impl<X: Semiring, const N: usize> Vector<X, N> {
    /// The zero vector.
    pub const ZERO: Self = Vector([X::ZERO; N]);

    /// Get a zero vector.
    ///
    /// This is also available as the free function `vee::zero`.
    #[inline(always)]
    pub fn zero() -> Self
    { Self::ZERO }

    /// Get a basis vector.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[inline]
    pub fn axis_unit(i: usize) -> Self {
        let mut v = Self::ZERO;
        *v.get_mut(i)
            .unwrap_or_else(|| panic!("Invalid axis for {}d vector: {}", N, i)) = X::ONE;
        v
    }

    /// Get the inner product of two vectors.
    #[inline]
    pub fn dot(&self, other: &Self) -> X
    { self.iter().zip(other).map(|(&a, &b)| a * b).sum() }

    // Used by the scalar operators of both vectors and matrices, which
    // accept scalars of any primitive type and so cannot go through `*=`.
    #[inline]
    pub(crate) fn scale_by(&mut self, scalar: X) {
        for x in &mut self.0 {
            *x *= scalar;
        }
    }

    #[inline]
    pub(crate) fn divide_by(&mut self, scalar: X) {
        for x in &mut self.0 {
            *x /= scalar;
        }
    }
}

impl<X: Semiring, const N: usize> Zero for Vector<X, N> {
    #[inline]
    fn zero() -> Self
    { Self::ZERO }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter().all(|x| x.is_zero()) }
}

// -------------------------- END PUBLIC API ---------------------------------
