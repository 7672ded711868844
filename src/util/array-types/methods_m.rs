/* ************************************************************************ **
** This file is part of sqmat, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size square matrices, built from `Vector` rows.
//!
//! This library uses a row-based formalism; matrices are conceptually
//! understood to be containers of row-vectors.  Accessors that hand out
//! rows or columns do so by value; the only borrowed views are of the
//! scalars themselves.

use std::ops::{Index, IndexMut};

use crate::error::ShapeError;
use crate::traits::Semiring;
use crate::types::*;

use num_traits::{Zero, One};
use slice_of_array::prelude::*;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on indices.
///
/// The size of the matrix will be inferred solely from how it
/// is used.  There is also a static method form of this for
/// easily supplying a type hint. (e.g. `M44::from_fn`)
#[inline(always)]
pub fn from_fn<X, F, const N: usize>(f: F) -> Matrix<X, N>
where F: FnMut(usize, usize) -> X,
{ Matrix::from_fn(f) }

/// Construct a matrix from a 2D array (of rows).
#[inline(always)]
pub fn from_array<X, const N: usize>(arr: [[X; N]; N]) -> Matrix<X, N>
{ Matrix::from_array(arr) }

/// Construct an identity matrix (using type inference).
#[inline(always)]
pub fn eye<X: Semiring, const N: usize>() -> Matrix<X, N>
{ Matrix::IDENTITY }

/// Construct a zero matrix (using type inference).
#[inline(always)]
pub fn zero<X: Semiring, const N: usize>() -> Matrix<X, N>
{ Matrix::ZERO }

impl<X, const N: usize> Matrix<X, N> {
    pub const ROW_NUM: usize = N;
    pub const COL_NUM: usize = N;
    pub const ELEM_NUM: usize = N * N;

    /// The number of scalar elements.
    #[inline(always)]
    pub const fn size() -> usize
    { Self::ELEM_NUM }

    /// Construct a matrix from a function on indices.
    ///
    /// This is also available as the free function `mat::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { Matrix { rows: std::array::from_fn(|r| Vector::from_fn(|c| f(r, c))) } }

    /// Construct a matrix from a 2D array (of rows).
    #[inline(always)]
    pub fn from_array(arr: [[X; N]; N]) -> Self
    { Matrix { rows: arr.map(Vector) } }

    /// Construct a matrix from its row vectors.
    #[inline(always)]
    pub const fn from_rows(rows: [Vector<X, N>; N]) -> Self
    { Matrix { rows } }

    /// Read `N * N` values of a row-major buffer.
    ///
    /// Any values past the first `N * N` are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is too short.  See `try_from_slice` for a
    /// checked version.
    #[inline]
    pub fn from_slice(slice: &[X]) -> Self
    where X: Copy,
    {
        assert!(
            slice.len() >= N * N,
            "buffer of length {} is too short for a {}x{} matrix", slice.len(), N, N,
        );
        Self::from_fn(|r, c| slice[r * N + c])
    }

    /// Read `N * N` values of a row-major buffer, if there are enough.
    pub fn try_from_slice(slice: &[X]) -> Result<Self, ShapeError>
    where X: Copy,
    {
        let expected = N * N;
        if slice.len() < expected {
            return Err(ShapeError::BufferTooShort { len: slice.len(), expected });
        }
        if slice.len() > expected {
            debug!("ignoring {} trailing values after a {}x{} matrix", slice.len() - expected, N, N);
        }
        Ok(Self::from_slice(slice))
    }

    /// Read `N * N` consecutive row-major values starting at a pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `N * N` values of `X`,
    /// as for `std::slice::from_raw_parts`.
    #[inline]
    pub unsafe fn from_ptr(ptr: *const X) -> Self
    where X: Copy,
    { Self::from_slice(std::slice::from_raw_parts(ptr, N * N)) }

    /// Get a row.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline(always)]
    pub fn row(&self, index: usize) -> Vector<X, N>
    where X: Copy,
    { self.rows[index] }

    /// Replace a row.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline(always)]
    pub fn set_row(&mut self, index: usize, row: Vector<X, N>)
    { self.rows[index] = row; }

    /// Gather a column into a new vector.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn col(&self, index: usize) -> Vector<X, N>
    where X: Copy,
    { Vector::from_fn(|r| self.rows[r][index]) }

    /// Scatter a vector into a column.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn set_col(&mut self, index: usize, col: Vector<X, N>) {
        assert!(index < N, "column {} out of range for a {}x{} matrix", index, N, N);
        for (row, x) in self.rows.iter_mut().zip(col) {
            row[index] = x;
        }
    }

    /// Checked element access.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&X>
    { self.rows.get(row)?.get(col) }

    /// Checked mutable element access.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut X>
    { self.rows.get_mut(row)?.get_mut(col) }

    /// All `N * N` elements in row-major order.
    #[inline(always)]
    pub fn as_flat(&self) -> &[X] {
        let rows: &[[X; N]] = self.as_array();
        rows.flat()
    }

    /// All `N * N` elements in row-major order.
    #[inline(always)]
    pub fn as_flat_mut(&mut self) -> &mut [X] {
        let rows: &mut [[X; N]] = self.as_array_mut();
        rows.flat_mut()
    }

    /// Iterate over all elements in row-major order.
    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, X>
    { self.as_flat().iter() }

    /// Iterate mutably over all elements in row-major order.
    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, X>
    { self.as_flat_mut().iter_mut() }

    /// Map each scalar element of a matrix.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> Matrix<B, N>
    where F: FnMut(X) -> B,
    { Matrix { rows: self.rows.map(|row| row.map(&mut f)) } }
}

impl<X: Semiring, const N: usize> Matrix<X, N> {
    /// The matrix of all zeros.
    pub const ZERO: Self = Matrix { rows: [Vector::<X, N>::ZERO; N] };

    /// The matrix with ones on the diagonal and zeros elsewhere.
    pub const IDENTITY: Self = {
        let mut rows = [Vector::<X, N>::ZERO; N];
        let mut i = 0;
        while i < N {
            rows[i].0[i] = X::ONE;
            i += 1;
        }
        Matrix { rows }
    };

    /// Construct the zero matrix.
    ///
    /// This is also available as the free function `mat::zero`
    /// and the constant `Matrix::ZERO`.
    #[inline(always)]
    pub fn zero() -> Self
    { Self::ZERO }

    /// Construct the identity matrix.
    ///
    /// This is also available as the free function `mat::eye`
    /// and the constant `Matrix::IDENTITY`.
    #[inline(always)]
    pub fn identity() -> Self
    { Self::IDENTITY }
}

// Element-list constructors for the common sizes.  Arguments are in
// row-major reading order.
impl<X> Matrix<X, 2> {
    #[inline(always)]
    pub const fn new(
        m11: X, m12: X,
        m21: X, m22: X,
    ) -> Self {
        Matrix { rows: [
            Vector([m11, m12]),
            Vector([m21, m22]),
        ]}
    }
}

impl<X> Matrix<X, 3> {
    #[inline(always)]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m11: X, m12: X, m13: X,
        m21: X, m22: X, m23: X,
        m31: X, m32: X, m33: X,
    ) -> Self {
        Matrix { rows: [
            Vector([m11, m12, m13]),
            Vector([m21, m22, m23]),
            Vector([m31, m32, m33]),
        ]}
    }
}

impl<X> Matrix<X, 4> {
    #[inline(always)]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m11: X, m12: X, m13: X, m14: X,
        m21: X, m22: X, m23: X, m24: X,
        m31: X, m32: X, m33: X, m34: X,
        m41: X, m42: X, m43: X, m44: X,
    ) -> Self {
        Matrix { rows: [
            Vector([m11, m12, m13, m14]),
            Vector([m21, m22, m23, m24]),
            Vector([m31, m32, m33, m34]),
            Vector([m41, m42, m43, m44]),
        ]}
    }
}

// -------------------------- END PUBLIC API ---------------------------------

impl<X, const N: usize> Index<(usize, usize)> for Matrix<X, N> {
    type Output = X;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &X
    { &self.rows[row][col] }
}

impl<X, const N: usize> IndexMut<(usize, usize)> for Matrix<X, N> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut X
    { &mut self.rows[row][col] }
}

// flat, row-major
impl<X, const N: usize> Index<usize> for Matrix<X, N> {
    type Output = X;

    #[inline(always)]
    fn index(&self, index: usize) -> &X
    { &self.as_flat()[index] }
}

impl<X, const N: usize> IndexMut<usize> for Matrix<X, N> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut X
    { &mut self.as_flat_mut()[index] }
}

impl<X: Semiring, const N: usize> Zero for Matrix<X, N> {
    #[inline]
    fn zero() -> Self
    { Self::ZERO }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter().all(|x| x.is_zero()) }
}

impl<X: Semiring, const N: usize> One for Matrix<X, N> {
    #[inline]
    fn one() -> Self
    { Self::IDENTITY }
}
