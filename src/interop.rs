//! Operand categories for mixed-type arithmetic.
//!
//! The traits here are sealed: they classify the closed set of types
//! that may appear opposite a [`Float128`] in an arithmetic expression,
//! and they gate the generic entry points so that a pair of foreign
//! operands with no `Float128` in it does not compile.

use crate::defs::Error;
use crate::defs::Sign;
use crate::num::Float128;
use num_bigint::BigInt;
use num_rational::BigRational;

mod private {
    pub trait Sealed {}
}

/// Machine numeric types interoperating with [`Float128`] by value:
/// the primitive integers and the native floating point types.
///
/// `f64` belongs to the set only with the `f64-interop` feature (on by
/// default).
pub trait NativeOperand: private::Sealed + Copy {
    /// Widens the value to quadruple precision with a single rounding.
    /// Exact for every type except `u128` and `i128` values wider than
    /// 113 bits.
    fn to_quad(self) -> Float128;

    /// Narrows a quadruple-precision value back to the native type with
    /// the saturating semantics of `as` casts: integers truncate toward
    /// zero and saturate, NaN becomes 0, floats round to nearest.
    fn from_quad_lossy(x: Float128) -> Self;
}

macro_rules! impl_native_signed {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl NativeOperand for $t {
            fn to_quad(self) -> Float128 {
                let v = self as i128;
                let sign = if v < 0 { Sign::Neg } else { Sign::Pos };
                Float128::encode(sign, v.unsigned_abs(), 0)
            }

            fn from_quad_lossy(x: Float128) -> Self {
                x.to_i128().clamp(<$t>::MIN as i128, <$t>::MAX as i128) as $t
            }
        }
    )*};
}

macro_rules! impl_native_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl NativeOperand for $t {
            fn to_quad(self) -> Float128 {
                Float128::encode(Sign::Pos, self as u128, 0)
            }

            fn from_quad_lossy(x: Float128) -> Self {
                x.to_u128().min(<$t>::MAX as u128) as $t
            }
        }
    )*};
}

impl_native_signed!(i8, i16, i32, i64, i128, isize);
impl_native_unsigned!(u8, u16, u32, u64, u128, usize);

impl private::Sealed for f32 {}

impl NativeOperand for f32 {
    fn to_quad(self) -> Float128 {
        Float128::from_f32(self)
    }

    fn from_quad_lossy(x: Float128) -> Self {
        x.to_f32()
    }
}

#[cfg(feature = "f64-interop")]
impl private::Sealed for f64 {}

#[cfg(feature = "f64-interop")]
impl NativeOperand for f64 {
    fn to_quad(self) -> Float128 {
        Float128::from_f64(self)
    }

    fn from_quad_lossy(x: Float128) -> Self {
        x.to_f64()
    }
}

/// Arbitrary precision types interoperating with [`Float128`] by
/// reference. Widening rounds once; narrowing is fallible because NaN
/// and infinities have no representation on this side.
pub trait BigOperand: private::Sealed + Sized {
    /// Rounds the value to the nearest quadruple-precision value.
    fn to_quad(&self) -> Float128;

    /// Converts a quadruple-precision value back.
    ///
    /// ## Errors
    ///
    /// NonFinite: the value is NaN or infinite.
    fn try_from_quad(x: Float128) -> Result<Self, Error>;
}

impl private::Sealed for BigInt {}

impl BigOperand for BigInt {
    fn to_quad(&self) -> Float128 {
        Float128::from_bigint(self)
    }

    fn try_from_quad(x: Float128) -> Result<Self, Error> {
        x.try_to_bigint()
    }
}

impl private::Sealed for BigRational {}

impl BigOperand for BigRational {
    fn to_quad(&self) -> Float128 {
        Float128::from_rational(self)
    }

    fn try_from_quad(x: Float128) -> Result<Self, Error> {
        x.try_to_rational()
    }
}

/// A pair of operand types a binary entry point such as [`crate::pow`]
/// accepts. At least one side is always [`Float128`]; a pair of two
/// foreign types is rejected at compile time:
///
/// ```compile_fail
/// use num_bigint::BigInt;
/// use num_rational::BigRational;
///
/// let n = BigInt::from(2);
/// let q = BigRational::from_integer(BigInt::from(3));
/// let _ = quadfloat::pow(n, q);
/// ```
pub trait OperandPair: private::Sealed {
    /// Promotes both operands to quadruple precision.
    fn promote_pair(self) -> (Float128, Float128);
}

impl private::Sealed for (Float128, Float128) {}

impl OperandPair for (Float128, Float128) {
    fn promote_pair(self) -> (Float128, Float128) {
        self
    }
}

macro_rules! impl_pair_native {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for (Float128, $t) {}

        impl OperandPair for (Float128, $t) {
            fn promote_pair(self) -> (Float128, Float128) {
                (self.0, self.1.to_quad())
            }
        }

        impl private::Sealed for ($t, Float128) {}

        impl OperandPair for ($t, Float128) {
            fn promote_pair(self) -> (Float128, Float128) {
                (self.0.to_quad(), self.1)
            }
        }
    )*};
}

impl_pair_native!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32);

#[cfg(feature = "f64-interop")]
impl_pair_native!(f64);

macro_rules! impl_pair_big {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for (Float128, $t) {}

        impl OperandPair for (Float128, $t) {
            fn promote_pair(self) -> (Float128, Float128) {
                (self.0, self.1.to_quad())
            }
        }

        impl private::Sealed for ($t, Float128) {}

        impl OperandPair for ($t, Float128) {
            fn promote_pair(self) -> (Float128, Float128) {
                (self.0.to_quad(), self.1)
            }
        }
    )*};
}

impl_pair_big!(BigInt, BigRational);
