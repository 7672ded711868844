/* ************************************************************************ **
** This file is part of sqmat, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Each test binary uses a different subset of these.
#![allow(dead_code)]

use sqmat::{M33, M44};

pub fn init_logger() {
    // fails harmlessly if another test got here first
    let _ = env_logger::try_init();
}

/// `diag(1, 2, 3, 4)`, written out element by element.
pub fn diagonal_scenario() -> M44<f64> {
    M44::<f64>::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 2.0, 0.0, 0.0,
        0.0, 0.0, 3.0, 0.0,
        0.0, 0.0, 0.0, 4.0,
    )
}

pub fn uint_samples() -> Vec<M33<u32>> {
    vec![
        M33::<u32>::ZERO,
        M33::<u32>::IDENTITY,
        M33::<u32>::from_fn(|r, c| (7 * r + c) as u32),
    ]
}

pub fn int_samples() -> Vec<M33<i64>> {
    vec![
        M33::<i64>::ZERO,
        M33::<i64>::IDENTITY,
        M33::<i64>::from_fn(|r, c| (3 * r + c) as i64 - 4),
        M33::<i64>::new(
            7, -1, 0,
            2, 2, -9,
            0, 13, 5,
        ),
    ]
}

pub fn float_samples() -> Vec<M44<f64>> {
    vec![
        M44::<f64>::ZERO,
        M44::<f64>::IDENTITY,
        diagonal_scenario(),
        M44::<f64>::from_fn(|r, c| ((r * 4 + c) as f64).sin() * 1e3),
        M44::<f64>::from_fn(|r, c| 1.0 / (1.0 + r as f64 + 2.0 * c as f64)),
    ]
}
