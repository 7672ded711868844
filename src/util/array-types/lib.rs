/* ************************************************************************ **
** This file is part of sqmat, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size vector and square matrix value types.
//!
//! `Matrix<X, N>` is an `N x N` matrix of primitive scalars stored inline
//! as `N` row vectors.  It is `Copy`, never allocates, and carries the
//! usual elementwise algebra plus matrix multiplication.

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate sqmat_assert_close;

#[macro_use]
mod macros;

mod traits;
pub use crate::traits::{Semiring, Ring};
#[doc(hidden)]
pub use crate::traits::internal;

mod types;
pub use crate::types::*;

mod error;
pub use crate::error::ShapeError;

// NOTE: These are really just for the free functions.
//       (methods are also defined in these modules, but are not affected by privacy)
pub mod methods_v;
pub mod methods_m;
pub use crate::methods_v as vee;
pub use crate::methods_m as mat;

pub mod linalg;

mod ops;
mod conv;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_laws_hold_within_tolerance() {
        let a = M33::<f64>::from_fn(|r, c| 0.1 * (r as f64) + 0.7 * (c as f64));
        let b = M33::<f64>::from_fn(|r, c| 1.3 / (1.0 + (r + c) as f64));
        let c = M33::<f64>::from_fn(|r, c| if r == c { 0.3 } else { -0.2 });

        assert_close!((a + b).into_array(), (b + a).into_array());
        assert_close!(((a + b) + c).into_array(), (a + (b + c)).into_array());
        assert_close!(((a + b) * 1.7f64).into_array(), (a * 1.7f64 + b * 1.7f64).into_array());
        assert_close!((a * M33::IDENTITY).into_array(), a.into_array());
    }
}
