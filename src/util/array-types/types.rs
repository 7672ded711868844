/* ************************************************************************ **
** This file is part of sqmat, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::fmt;

// ---------------------------------------------------------------------------

/// An N-dimensional vector with operations for linear algebra.
///
/// This is what a `Matrix` stores its rows as.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Vector<X, const N: usize>(pub [X; N]);

/// A dense NxN matrix, stored as N row vectors.
///
/// Elements are laid out contiguously in row-major order, so that the
/// flat index of `(row, col)` is `row * N + col`.
///
/// Equality is exact and elementwise.  Nothing in this type applies
/// a tolerance; see `sqmat-assert-close` for that.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Matrix<X, const N: usize> {
    // invariant: this is the only field, so that `Matrix<X, N>`,
    //            `[Vector<X, N>; N]` and `[[X; N]; N]` share a layout.
    pub(crate) rows: [Vector<X, N>; N],
}

/// A 2-dimensional vector.
pub type V2<X=f64> = Vector<X, 2>;
/// A 3-dimensional vector.
pub type V3<X=f64> = Vector<X, 3>;
/// A 4-dimensional vector.
pub type V4<X=f64> = Vector<X, 4>;

/// A square dense 2x2 matrix.
pub type M22<X=f64> = Matrix<X, 2>;
/// A square dense 3x3 matrix.
pub type M33<X=f64> = Matrix<X, 3>;
/// A square dense 4x4 matrix.
pub type M44<X=f64> = Matrix<X, 4>;

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

// ---------------------------------------------------------------------------
// Vectors behave generally like their backing array type.

impl<X, const N: usize> Deref for Vector<X, N> {
    type Target = [X; N];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<X, const N: usize> DerefMut for Vector<X, N> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

// Fix a paper cut not solved by Deref, which is that many methods
// take `I: IntoIterator`.
impl<'a, X, const N: usize> IntoIterator for &'a Vector<X, N> {
    type Item = &'a X;
    type IntoIter = Iter<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, X, const N: usize> IntoIterator for &'a mut Vector<X, N> {
    type Item = &'a mut X;
    type IntoIter = IterMut<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

impl<X, const N: usize> IntoIterator for Vector<X, N> {
    type Item = X;
    type IntoIter = std::array::IntoIter<X, N>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { IntoIterator::into_iter(self.0) }
}

// The matrix iterates over its scalars, not its rows.
impl<'a, X, const N: usize> IntoIterator for &'a Matrix<X, N> {
    type Item = &'a X;
    type IntoIter = Iter<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.iter() }
}

impl<'a, X, const N: usize> IntoIterator for &'a mut Matrix<X, N> {
    type Item = &'a mut X;
    type IntoIter = IterMut<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.iter_mut() }
}

// `Default` is not derived because `[X; N]: Default` only holds for small N.
//
// There is no such thing as an uninitialized matrix here; the default
// is whatever `X::default()` is, which is zero for every supported scalar.
impl<X: Default, const N: usize> Default for Vector<X, N> {
    #[inline]
    fn default() -> Self
    { Vector(std::array::from_fn(|_| X::default())) }
}

impl<X: Default, const N: usize> Default for Matrix<X, N> {
    #[inline]
    fn default() -> Self
    { Matrix { rows: std::array::from_fn(|_| Vector::default()) } }
}

// Forward the debug impl without a surrounding "Vector(...)", so that
// the output is the same as that of the nested arrays.
impl<X: fmt::Debug, const N: usize> fmt::Debug for Vector<X, N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl<X: fmt::Debug, const N: usize> fmt::Debug for Matrix<X, N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { f.debug_list().entries(self.rows.iter()).finish() }
}
