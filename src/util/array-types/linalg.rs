/* ************************************************************************ **
** This file is part of sqmat, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Matrix algebra that is more than elementwise.

use crate::traits::Semiring;
use crate::types::*;

/// The matrix product `a * b`.
///
/// This is what `Matrix *= Matrix` (and thus `Matrix * Matrix`) computes.
/// Each element is accumulated in index order, so results for floats
/// are deterministic but not necessarily associative.
#[inline]
pub fn mul<X: Semiring, const N: usize>(a: &Matrix<X, N>, b: &Matrix<X, N>) -> Matrix<X, N>
{ Matrix::from_fn(|r, c| (0..N).map(|k| a[(r, k)] * b[(k, c)]).sum()) }

/// The transpose.
#[inline]
pub fn transpose<X: Copy, const N: usize>(m: &Matrix<X, N>) -> Matrix<X, N>
{ Matrix::from_fn(|r, c| m[(c, r)]) }

impl<X: Copy, const N: usize> Matrix<X, N> {
    /// Get the transpose.
    #[inline(always)]
    pub fn t(&self) -> Self
    { transpose(self) }
}

impl<X: Semiring, const N: usize> Matrix<X, N> {
    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> X
    { (0..N).map(|i| self[(i, i)]).sum() }
}
