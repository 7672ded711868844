/* ************************************************************************ **
** This file is part of sqmat, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Generic fixed-size square matrices for transform math.
//!
//! ```
//! use sqmat::{M44, Vector};
//!
//! let mut m = M44::<f64>::IDENTITY;
//! m[(1, 1)] = 2.0;
//! m.set_col(2, Vector([0.0, 0.0, 3.0, 0.0]));
//!
//! assert_eq!(m * M44::IDENTITY, m);
//! assert_eq!(m.col(2), Vector([0.0, 0.0, 3.0, 0.0]));
//! ```

// The contents of this crate actually live in sqmat-array-types, so that
// they can share its internal macros.
pub use sqmat_array_types::*;
