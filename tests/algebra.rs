/* ************************************************************************ **
** This file is part of sqmat, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate sqmat_assert_close;

use sqmat::{M33, M44, mat};
use pretty_assertions::assert_eq;

mod shared;

#[test]
fn identity_law() {
    for m in shared::int_samples() {
        assert_eq!(m * M33::<i64>::IDENTITY, m);
        assert_eq!(M33::<i64>::IDENTITY * m, m);
    }
    for m in shared::float_samples() {
        // exact; every product has a single nonzero term
        assert_eq!(m * M44::<f64>::IDENTITY, m);
        assert_eq!(M44::<f64>::IDENTITY * m, m);
    }
}

#[test]
fn zero_law() {
    for m in shared::int_samples() {
        assert_eq!(m + M33::<i64>::ZERO, m);
        assert_eq!(m - M33::<i64>::ZERO, m);
    }
    for m in shared::uint_samples() {
        assert_eq!(m + M33::<u32>::ZERO, m);
        assert_eq!(m - M33::<u32>::ZERO, m);
    }
    for m in shared::float_samples() {
        assert_eq!(m + M44::<f64>::ZERO, m);
        assert_eq!(m - M44::<f64>::ZERO, m);
    }
}

#[test]
fn product_with_zero() {
    for m in shared::int_samples() {
        assert_eq!(m * M33::<i64>::ZERO, M33::<i64>::ZERO);
    }
    for m in shared::float_samples() {
        assert_eq!(m * M44::<f64>::ZERO, M44::<f64>::ZERO);
    }
}

#[test]
fn additive_inverse() {
    for m in shared::int_samples() {
        assert_eq!(m + -m, M33::<i64>::ZERO);
        assert_eq!(m - m, M33::<i64>::ZERO);
        assert_eq!(-(-m), m);
    }
    for m in shared::float_samples() {
        assert_eq!(m - m, M44::<f64>::ZERO);
        assert_eq!(-&m + m, M44::<f64>::ZERO);
    }
}

#[test]
fn addition_is_commutative_and_associative() {
    let ints = shared::int_samples();
    for &a in &ints {
        for &b in &ints {
            assert_eq!(a + b, b + a);
            for &c in &ints {
                assert_eq!((a + b) + c, a + (b + c));
            }
        }
    }

    let floats = shared::float_samples();
    for &a in &floats {
        for &b in &floats {
            assert_eq!(a + b, b + a);
            for &c in &floats {
                let left = (a + b) + c;
                let right = a + (b + c);
                assert_close!(abs=1e-9, left.as_flat(), right.as_flat());
            }
        }
    }
}

#[test]
fn scalar_distributes() {
    let ints = shared::int_samples();
    for &a in &ints {
        for &b in &ints {
            assert_eq!((a + b) * 3i64, a * 3i64 + b * 3i64);
            assert_eq!(-2i64 * (a - b), b * 2i64 - a * 2i64);
        }
    }

    let floats = shared::float_samples();
    for &a in &floats {
        for &b in &floats {
            let left = (a + b) * 0.3f64;
            let right = a * 0.3f64 + b * 0.3f64;
            assert_close!(abs=1e-9, left.as_flat(), right.as_flat());
        }
    }
}

#[test]
fn product_is_associative_for_integers() {
    let ints = shared::int_samples();
    for &a in &ints {
        for &b in &ints {
            for &c in &ints {
                assert_eq!((a * b) * c, a * (b * c));
            }
        }
    }
}

#[test]
fn flat_round_trip() {
    for m in shared::float_samples() {
        assert_eq!(M44::<f64>::from_slice(m.as_flat()), m);
        assert_eq!(M44::<f64>::try_from_slice(m.as_flat()), Ok(m));
        assert_eq!(mat::from_array(m.into_array()), m);
    }
}

#[test]
fn rows_and_columns_agree_with_elements() {
    for m in shared::int_samples() {
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.row(i)[j], m[(i, j)]);
                assert_eq!(m.col(j)[i], m[(i, j)]);
                assert_eq!(m[i * 3 + j], m[(i, j)]);
            }
        }
        assert_eq!(m.t().row(1), m.col(1));
    }
}

#[test]
fn equality() {
    for m in shared::int_samples() {
        assert!(m == m);
        assert!(!(m != m));

        let mut other = m;
        other[(2, 0)] += 1;
        assert!(other != m);
        assert!(!(other == m));
    }
}
