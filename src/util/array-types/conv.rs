/* ************************************************************************ **
** This file is part of sqmat, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Conversions between the array types and plain arrays,
// and between array types of different scalar types.

use num_traits::AsPrimitive;

use crate::types::*;

// ---------------------------------------------------------------------------
// zero-cost views

impl<X, const N: usize> Matrix<X, N> {
    /// Borrow as a plain `&[[X; N]; N]` of rows.
    #[inline(always)]
    pub fn as_array(&self) -> &[[X; N]; N] {
        // SAFETY: `Vector` is `repr(transparent)` over `[X; N]`,
        //         so the two array types have identical layout.
        unsafe { &*(&self.rows as *const [Vector<X, N>; N] as *const [[X; N]; N]) }
    }

    /// Borrow as a plain `&mut [[X; N]; N]` of rows.
    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [[X; N]; N] {
        // SAFETY: see `as_array`
        unsafe { &mut *(&mut self.rows as *mut [Vector<X, N>; N] as *mut [[X; N]; N]) }
    }

    /// Unwrap into a plain `[[X; N]; N]` of rows.
    #[inline(always)]
    pub fn into_array(self) -> [[X; N]; N]
    { self.rows.map(Vector::into_array) }
}

impl<X, const N: usize> From<[X; N]> for Vector<X, N> {
    #[inline(always)]
    fn from(arr: [X; N]) -> Self
    { Vector(arr) }
}

impl<X, const N: usize> From<Vector<X, N>> for [X; N] {
    #[inline(always)]
    fn from(v: Vector<X, N>) -> Self
    { v.0 }
}

impl<X, const N: usize> From<[[X; N]; N]> for Matrix<X, N> {
    #[inline(always)]
    fn from(arr: [[X; N]; N]) -> Self
    { Matrix::from_array(arr) }
}

impl<X, const N: usize> From<Matrix<X, N>> for [[X; N]; N] {
    #[inline(always)]
    fn from(m: Matrix<X, N>) -> Self
    { m.into_array() }
}

// ---------------------------------------------------------------------------
// numeric conversion
//
// These use the semantics of `as`.  Narrowing conversions truncate or
// saturate exactly as `as` does; nothing here reports a loss of precision.

impl<X, const N: usize> Vector<X, N> {
    /// Convert each element to another scalar type, as if by `as`.
    #[inline]
    pub fn cast<Y>(self) -> Vector<Y, N>
    where X: AsPrimitive<Y>, Y: 'static + Copy,
    { self.map(|x| x.as_()) }
}

impl<X, const N: usize> Matrix<X, N> {
    /// Convert each element to another scalar type, as if by `as`.
    #[inline]
    pub fn cast<Y>(self) -> Matrix<Y, N>
    where X: AsPrimitive<Y>, Y: 'static + Copy,
    { self.map(|x| x.as_()) }

    /// Construct from a matrix of another scalar type, converting each
    /// element as if by `as`.
    ///
    /// This only reads `other` through its public element view.
    #[inline]
    pub fn cast_from<U>(other: &Matrix<U, N>) -> Self
    where U: AsPrimitive<X>, X: 'static + Copy,
    { Self::from_fn(|r, c| other[(r, c)].as_()) }

    /// Overwrite with the converted elements of a matrix of another scalar type.
    #[inline]
    pub fn assign_from<U>(&mut self, other: &Matrix<U, N>)
    where U: AsPrimitive<X>, X: 'static + Copy,
    { *self = Self::cast_from(other); }
}
