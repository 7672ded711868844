/* ************************************************************************ **
** This file is part of sqmat, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, Mul, Div, Neg};
use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};
use std::fmt;

use num_traits::AsPrimitive;

use crate::linalg;
use crate::traits::{Semiring, Ring};
use crate::types::*;

// ---------------------------------------------------------------------------
// container-container assign ops

// NOTE: Operator impls are deliberately between same-typed containers,
//       rather than e.g. M44<T> and M44<U> where T: Add<U>.
//       Use `Matrix::cast` or `Matrix::cast_from` to line the types up first.
gen_each!{
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_v_add_sub_assign!(
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector += vector
        impl<$($lt_b)* X: Semiring, const N: usize> AddAssign<$($ref_b)* Vector<X, N>> for Vector<X, N> {
            #[inline]
            fn add_assign(&mut self, other: $($ref_b)* Vector<X, N>) {
                for (a, &b) in self.iter_mut().zip(other.iter()) {
                    *a += b;
                }
            }
        }

        // vector -= vector
        impl<$($lt_b)* X: Semiring, const N: usize> SubAssign<$($ref_b)* Vector<X, N>> for Vector<X, N> {
            #[inline]
            fn sub_assign(&mut self, other: $($ref_b)* Vector<X, N>) {
                for (a, &b) in self.iter_mut().zip(other.iter()) {
                    *a -= b;
                }
            }
        }
    }
}

gen_each!{
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_m_add_sub_assign!(
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix += matrix
        impl<$($lt_b)* X: Semiring, const N: usize> AddAssign<$($ref_b)* Matrix<X, N>> for Matrix<X, N> {
            #[inline]
            fn add_assign(&mut self, other: $($ref_b)* Matrix<X, N>) {
                for (a, b) in self.rows.iter_mut().zip(&other.rows) {
                    *a += b;
                }
            }
        }

        // matrix -= matrix
        impl<$($lt_b)* X: Semiring, const N: usize> SubAssign<$($ref_b)* Matrix<X, N>> for Matrix<X, N> {
            #[inline]
            fn sub_assign(&mut self, other: $($ref_b)* Matrix<X, N>) {
                for (a, b) in self.rows.iter_mut().zip(&other.rows) {
                    *a -= b;
                }
            }
        }

        // matrix *= matrix
        impl<$($lt_b)* X: Semiring, const N: usize> MulAssign<$($ref_b)* Matrix<X, N>> for Matrix<X, N> {
            #[inline]
            fn mul_assign(&mut self, other: $($ref_b)* Matrix<X, N>)
            { *self = linalg::mul(self, &other); }
        }
    }
}

// ---------------------------------------------------------------------------
// scalar ops

// The scalar is converted to the element type once (as if by `as`),
// then applied to each element.
impl<X: Semiring, const N: usize> Matrix<X, N> {
    #[inline]
    pub(crate) fn scale_by(&mut self, scalar: X) {
        for row in &mut self.rows {
            row.scale_by(scalar);
        }
    }

    #[inline]
    pub(crate) fn divide_by(&mut self, scalar: X) {
        for row in &mut self.rows {
            row.divide_by(scalar);
        }
    }
}

gen_each!{
    @{Cn}
    // NOTE: these can't be written generically over the scalar type
    //       without overlapping `Matrix *= Matrix`, so there is one
    //       impl for each primitive.
    @{semiring}
    impl_scalar_ops!(
        {$Cn:ident}
        {$S:ty}
    ) => {
        // container *= scalar
        impl<X: Semiring, const N: usize> MulAssign<$S> for $Cn<X, N>
        where $S: AsPrimitive<X>,
        {
            #[inline]
            fn mul_assign(&mut self, scalar: $S)
            { self.scale_by(scalar.as_()); }
        }

        // container /= scalar
        impl<X: Semiring, const N: usize> DivAssign<$S> for $Cn<X, N>
        where $S: AsPrimitive<X>,
        {
            #[inline]
            fn div_assign(&mut self, scalar: $S)
            { self.divide_by(scalar.as_()); }
        }

        // scalar * container
        //
        // NOTE: the orphan rules prevent us from impl-ing this "for X",
        //       so only the same scalar type is supported on the left.
        impl<const N: usize> Mul<$Cn<$S, N>> for $S {
            type Output = $Cn<$S, N>;

            #[inline(always)]
            fn mul(self, other: $Cn<$S, N>) -> Self::Output
            { other * self }
        }
    }
}

// ---------------------------------------------------------------------------
// unary ops

gen_each!{
    @{Cn}
    impl_unops!(
        {$Cn:ident}
    ) => {
        // -container
        impl<X: Ring, const N: usize> Neg for $Cn<X, N> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output
            { self.map(|x| -x) }
        }

        impl<'a, X: Ring, const N: usize> Neg for &'a $Cn<X, N> {
            type Output = $Cn<X, N>;

            #[inline]
            fn neg(self) -> Self::Output
            { -*self }
        }
    }
}

// ---------------------------------------------------------------------------
// binary ops, derived from the assign ops

gen_each!{
    @{Cn}
    @{assign_ops}
    impl_binops_from_assign!(
        {$Cn:ident}
        {$Op:ident $op:ident $OpAssign:ident $op_assign:ident}
    ) => {
        impl<X, B, const N: usize> $Op<B> for $Cn<X, N>
        where Self: $OpAssign<B>,
        {
            type Output = Self;

            #[inline(always)]
            fn $op(mut self, other: B) -> Self::Output {
                $OpAssign::$op_assign(&mut self, other);
                self
            }
        }

        impl<'a, X, B, const N: usize> $Op<B> for &'a $Cn<X, N>
        where $Cn<X, N>: Copy + $OpAssign<B>,
        {
            type Output = $Cn<X, N>;

            #[inline(always)]
            fn $op(self, other: B) -> Self::Output {
                let mut out = *self;
                $OpAssign::$op_assign(&mut out, other);
                out
            }
        }
    }
}

// ---------------------------------------------------------------------------

// fmt traits apply the format to each element for convenience.
gen_each!{
    [ {Vector 0} {Matrix rows} ]
    [ {Display} {LowerExp} {UpperExp} ]
    impl_fmt!(
        {$Cn:ident $field:tt}
        {$Format:ident}
    ) => {
        impl<X: fmt::$Format, const N: usize> fmt::$Format for $Cn<X, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, x) in self.$field.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    fmt::$Format::fmt(x, f)?;
                }
                write!(f, "]")
            }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::types::*;
    use crate::mat;
    use pretty_assertions::assert_eq;

    fn a() -> M22<i32> { M22::<i32>::new(1, 2, 3, 4) }
    fn b() -> M22<i32> { M22::<i32>::new(10, 20, 30, 40) }

    #[test]
    fn add_sub() {
        let mut m = a();
        m += b();
        assert_eq!(m, M22::<i32>::new(11, 22, 33, 44));
        m -= &b();
        assert_eq!(m, a());

        assert_eq!(a() + b(), &a() + &b());
        assert_eq!(b() - a(), M22::<i32>::new(9, 18, 27, 36));
        assert_eq!(&b() - a(), b() - &a());

        assert_eq!(Vector([1, 2, 3]) + Vector([3, 2, 1]), Vector([4, 4, 4]));
        assert_eq!(Vector([1.5]) - &Vector([0.5]), Vector([1.0]));
    }

    #[test]
    fn unsigned_sub() {
        let a = M22::<u32>::new(5, 6, 7, 8);
        assert_eq!(a - M22::<u32>::new(1, 1, 1, 1), M22::<u32>::new(4, 5, 6, 7));
        assert_eq!(a - M22::<u32>::ZERO, a);
        assert_eq!(&a - &a, M22::<u32>::ZERO);

        let mut v = Vector([3u8, 9]);
        v -= Vector([3, 1]);
        assert_eq!(v, Vector([0, 8]));
    }

    #[test]
    fn neg() {
        assert_eq!(-a(), M22::<i32>::new(-1, -2, -3, -4));
        assert_eq!(-&a(), -a());
        assert_eq!(-Vector([0.5, -2.0]), Vector([-0.5, 2.0]));
        assert_eq!(a() + -a(), M22::<i32>::ZERO);
    }

    #[test]
    fn scalar_mul() {
        assert_eq!(a() * 3i32, M22::<i32>::new(3, 6, 9, 12));
        assert_eq!(3i32 * a(), a() * 3i32);
        assert_eq!(&a() * 2u8, M22::<i32>::new(2, 4, 6, 8));

        let mut v = Vector([1.0, -2.0]);
        v *= 2i64;
        assert_eq!(v, Vector([2.0, -4.0]));
        assert_eq!(0.5f64 * v, Vector([1.0, -2.0]));
    }

    #[test]
    fn scalar_is_converted_before_use() {
        // 2.9 becomes 2 before it ever touches an element
        assert_eq!(a() * 2.9f64, M22::<i32>::new(2, 4, 6, 8));
        assert_eq!(M22::<u8>::IDENTITY * 258u32, M22::<u8>::new(2, 0, 0, 2));
    }

    #[test]
    fn scalar_div() {
        assert_eq!(b() / 10i32, a());
        assert_eq!(M22::<i32>::new(5, 7, -9, 1) / 2i32, M22::<i32>::new(2, 3, -4, 0));
        assert_eq!(Vector([1.0, 2.0]) / 4u8, Vector([0.25, 0.5]));

        let mut m = M22::<f32>::IDENTITY;
        m /= 0.0f32;
        assert!(m[(0, 0)].is_infinite());
        assert!(m[(0, 1)].is_nan());
    }

    #[test]
    #[should_panic]
    fn integer_div_by_zero() {
        let _ = a() / 0i32;
    }

    #[test]
    fn matrix_mul() {
        let swap = M22::<i32>::new(0, 1, 1, 0);
        assert_eq!(a() * swap, M22::<i32>::new(2, 1, 4, 3));
        assert_eq!(&swap * &a(), M22::<i32>::new(3, 4, 1, 2));

        let mut m = a();
        m *= &M22::<i32>::IDENTITY;
        assert_eq!(m, a());
        m *= M22::<i32>::ZERO;
        assert_eq!(m, M22::<i32>::ZERO);
    }

    #[test]
    fn equality() {
        assert_eq!(a(), a());
        assert!(a() != b());
        let mut m = a();
        m[(1, 1)] += 1;
        assert!(m != a());
    }

    #[test]
    fn formatting() {
        let m = mat::from_array([[1.0, 0.0], [0.0, 1.0 / 3.0]]);
        assert_eq!(format!("{:.2}", m), "[[1.00, 0.00], [0.00, 0.33]]");
        assert_eq!(format!("{}", M22::<i32>::IDENTITY), "[[1, 0], [0, 1]]");
        assert_eq!(format!("{:e}", Vector([1500.0, 0.25])), "[1.5e3, 2.5e-1]");
        assert_eq!(format!("{:E}", Vector([0.5f32])), "[5E-1]");
    }
}
