/* ************************************************************************ **
** This file is part of sqmat, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

use self::internal::{PrimitiveSemiring, PrimitiveRing};

pub use self::semiring::Semiring;
mod semiring {
    use super::PrimitiveSemiring;

    /// Trait for scalars with addition, subtraction, multiplication, and
    /// (possibly truncating) division.
    ///
    /// Subtraction of unsigned integers overflows exactly as it does for the
    /// primitive itself.
    ///
    /// You get primitive floats and integers.
    /// That's all that this API is willing to commit to at the moment.
    /// This trait is sealed to avoid accidental commitments.
    pub trait Semiring: Sealed + PrimitiveSemiring { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use super::{Semiring, PrimitiveRing};

    /// Trait for scalars that are also closed under negation.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It doesn't include unsigned integers because a ring must be
    /// closed under negation.
    pub trait Ring: Semiring + Sealed + PrimitiveRing { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

// Generate the (trivial) impls of Ring and Semiring.
gen_each!{
    @{ring}
    for_each!({$T:ty}) => {
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    };
}

gen_each!{
    @{semiring}
    for_each!({$T:ty}) => {
        impl Semiring for $T { }
        impl semiring::Sealed for $T { }
    };
}

/// Capabilities that the sealed traits guarantee.
///
/// Generic code is written against `Semiring` and `Ring`; these only
/// exist so that those traits can promise the operators they need.
#[doc(hidden)]
pub mod internal {
    use std::fmt;
    use std::ops::{Add, Sub, Mul, Div, Neg};
    use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};
    use num_traits::{ConstZero, ConstOne};

    macro_rules! markers {
        ($( $name:ident[$($bound:tt)+]; )+)
        => {$(
            pub trait $name: $($bound)+ { }
            impl<T> $name for T where T: $($bound)+ { }
        )+};
    }

    markers!{
        SelfAdd[Sized + Add<Self, Output=Self> + AddAssign];
        SelfSub[Sized + Sub<Self, Output=Self> + SubAssign];
        SelfMul[Sized + Mul<Self, Output=Self> + MulAssign];
        SelfDiv[Sized + Div<Self, Output=Self> + DivAssign];
        SelfNeg[Sized + Neg<Output=Self>];
    }

    pub trait PrimitiveSemiring
        : 'static + Sized + Copy + Default
        + PartialEq + PartialOrd + fmt::Debug
        + SelfAdd + SelfSub + SelfMul + SelfDiv
        + ConstZero + ConstOne
        + std::iter::Sum
    { }

    gen_each!{
        @{semiring}
        for_each!({$T:ty}) => {
            impl PrimitiveSemiring for $T { }
        };
    }

    pub trait PrimitiveRing
        : PrimitiveSemiring
        + SelfNeg
    { }

    gen_each!{
        @{ring}
        for_each!({$T:ty}) => {
            impl PrimitiveRing for $T { }
        };
    }
}
