//! Operators and traits of `Float128`, and the free function interface.
//!
//! Binary operators accept any combination of `Float128` with a native
//! operand or an arbitrary precision operand; the foreign side is
//! promoted to quadruple precision and the operation is carried out with
//! a single rounding. Compound assignment onto a foreign left side
//! narrows the result back into that type.

use crate::defs::Error;
use crate::interop::BigOperand;
use crate::interop::NativeOperand;
use crate::interop::OperandPair;
use crate::num::Float128;
use crate::ops::arith;
use crate::ops::sqrt as sqrt_ops;
use crate::{conv, strop};
use core::cmp::Ordering;
use core::fmt::Display;
use core::fmt::Formatter;
use core::iter::Product;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;
use num_bigint::BigInt;
use num_rational::BigRational;

/// Positive infinity.
pub const INF_POS: Float128 = Float128::INF_POS;

/// Negative infinity.
pub const INF_NEG: Float128 = Float128::INF_NEG;

/// Not a number.
pub const NAN: Float128 = Float128::NAN;

impl Add for Float128 {
    type Output = Float128;

    fn add(self, rhs: Float128) -> Float128 {
        arith::add(self, rhs)
    }
}

impl Sub for Float128 {
    type Output = Float128;

    fn sub(self, rhs: Float128) -> Float128 {
        arith::sub(self, rhs)
    }
}

impl Mul for Float128 {
    type Output = Float128;

    fn mul(self, rhs: Float128) -> Float128 {
        arith::mul(self, rhs)
    }
}

impl Div for Float128 {
    type Output = Float128;

    fn div(self, rhs: Float128) -> Float128 {
        arith::div(self, rhs)
    }
}

impl AddAssign for Float128 {
    fn add_assign(&mut self, rhs: Float128) {
        *self = arith::add(*self, rhs);
    }
}

impl SubAssign for Float128 {
    fn sub_assign(&mut self, rhs: Float128) {
        *self = arith::sub(*self, rhs);
    }
}

impl MulAssign for Float128 {
    fn mul_assign(&mut self, rhs: Float128) {
        *self = arith::mul(*self, rhs);
    }
}

impl DivAssign for Float128 {
    fn div_assign(&mut self, rhs: Float128) {
        *self = arith::div(*self, rhs);
    }
}

impl Neg for Float128 {
    type Output = Float128;

    fn neg(self) -> Float128 {
        arith::neg(self)
    }
}

impl Neg for &Float128 {
    type Output = Float128;

    fn neg(self) -> Float128 {
        arith::neg(*self)
    }
}

/// IEEE equality: NaN compares unequal to everything, zeros of both
/// signs compare equal.
impl PartialEq for Float128 {
    fn eq(&self, other: &Self) -> bool {
        arith::cmp(*self, *other) == Some(Ordering::Equal)
    }
}

/// IEEE ordering: `None` when either operand is NaN.
impl PartialOrd for Float128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        arith::cmp(*self, *other)
    }
}

macro_rules! native_binop {
    ($t:ty, $trait:ident, $meth:ident, $atrait:ident, $ameth:ident, $kernel:path) => {
        impl $trait<$t> for Float128 {
            type Output = Float128;

            fn $meth(self, rhs: $t) -> Float128 {
                $kernel(self, rhs.to_quad())
            }
        }

        impl $trait<Float128> for $t {
            type Output = Float128;

            fn $meth(self, rhs: Float128) -> Float128 {
                $kernel(self.to_quad(), rhs)
            }
        }

        impl $atrait<$t> for Float128 {
            fn $ameth(&mut self, rhs: $t) {
                *self = $kernel(*self, rhs.to_quad());
            }
        }

        // the result is narrowed back into the native left side
        impl $atrait<Float128> for $t {
            fn $ameth(&mut self, rhs: Float128) {
                *self = <$t as NativeOperand>::from_quad_lossy($kernel(self.to_quad(), rhs));
            }
        }
    };
}

macro_rules! native_operand {
    ($($t:ty),* $(,)?) => {$(
        native_binop!($t, Add, add, AddAssign, add_assign, arith::add);
        native_binop!($t, Sub, sub, SubAssign, sub_assign, arith::sub);
        native_binop!($t, Mul, mul, MulAssign, mul_assign, arith::mul);
        native_binop!($t, Div, div, DivAssign, div_assign, arith::div);

        impl PartialEq<$t> for Float128 {
            fn eq(&self, other: &$t) -> bool {
                arith::cmp(*self, other.to_quad()) == Some(Ordering::Equal)
            }
        }

        impl PartialEq<Float128> for $t {
            fn eq(&self, other: &Float128) -> bool {
                arith::cmp(self.to_quad(), *other) == Some(Ordering::Equal)
            }
        }

        impl PartialOrd<$t> for Float128 {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                arith::cmp(*self, other.to_quad())
            }
        }

        impl PartialOrd<Float128> for $t {
            fn partial_cmp(&self, other: &Float128) -> Option<Ordering> {
                arith::cmp(self.to_quad(), *other)
            }
        }

        impl From<$t> for Float128 {
            fn from(v: $t) -> Self {
                v.to_quad()
            }
        }
    )*};
}

native_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32);

#[cfg(feature = "f64-interop")]
native_operand!(f64);

macro_rules! big_binop {
    ($t:ty, $lossy:path, $trait:ident, $meth:ident, $atrait:ident, $ameth:ident, $kernel:path) => {
        impl $trait<&$t> for Float128 {
            type Output = Float128;

            fn $meth(self, rhs: &$t) -> Float128 {
                $kernel(self, rhs.to_quad())
            }
        }

        impl $trait<$t> for Float128 {
            type Output = Float128;

            fn $meth(self, rhs: $t) -> Float128 {
                $kernel(self, rhs.to_quad())
            }
        }

        impl $trait<Float128> for &$t {
            type Output = Float128;

            fn $meth(self, rhs: Float128) -> Float128 {
                $kernel(self.to_quad(), rhs)
            }
        }

        impl $trait<Float128> for $t {
            type Output = Float128;

            fn $meth(self, rhs: Float128) -> Float128 {
                $kernel(self.to_quad(), rhs)
            }
        }

        impl $atrait<&$t> for Float128 {
            fn $ameth(&mut self, rhs: &$t) {
                *self = $kernel(*self, rhs.to_quad());
            }
        }

        impl $atrait<$t> for Float128 {
            fn $ameth(&mut self, rhs: $t) {
                *self = $kernel(*self, rhs.to_quad());
            }
        }

        // the result is narrowed back into the arbitrary precision left
        // side; a non-finite result becomes 0
        impl $atrait<Float128> for $t {
            fn $ameth(&mut self, rhs: Float128) {
                *self = $lossy($kernel(self.to_quad(), rhs));
            }
        }
    };
}

macro_rules! big_operand {
    ($t:ty, $lossy:path) => {
        big_binop!($t, $lossy, Add, add, AddAssign, add_assign, arith::add);
        big_binop!($t, $lossy, Sub, sub, SubAssign, sub_assign, arith::sub);
        big_binop!($t, $lossy, Mul, mul, MulAssign, mul_assign, arith::mul);
        big_binop!($t, $lossy, Div, div, DivAssign, div_assign, arith::div);

        impl PartialEq<$t> for Float128 {
            fn eq(&self, other: &$t) -> bool {
                arith::cmp(*self, other.to_quad()) == Some(Ordering::Equal)
            }
        }

        impl PartialEq<Float128> for $t {
            fn eq(&self, other: &Float128) -> bool {
                arith::cmp(self.to_quad(), *other) == Some(Ordering::Equal)
            }
        }

        impl PartialOrd<$t> for Float128 {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                arith::cmp(*self, other.to_quad())
            }
        }

        impl PartialOrd<Float128> for $t {
            fn partial_cmp(&self, other: &Float128) -> Option<Ordering> {
                arith::cmp(self.to_quad(), *other)
            }
        }

        impl From<&$t> for Float128 {
            fn from(v: &$t) -> Self {
                v.to_quad()
            }
        }

        impl From<$t> for Float128 {
            fn from(v: $t) -> Self {
                v.to_quad()
            }
        }

        impl TryFrom<Float128> for $t {
            type Error = Error;

            fn try_from(x: Float128) -> Result<Self, Error> {
                <$t as BigOperand>::try_from_quad(x)
            }
        }
    };
}

big_operand!(BigInt, conv::bigint_lossy);
big_operand!(BigRational, conv::rational_lossy);

impl Default for Float128 {
    /// Positive zero.
    fn default() -> Self {
        Float128::ZERO
    }
}

impl Display for Float128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.pad(&strop::format_quad(*self))
    }
}

impl FromStr for Float128 {
    type Err = Error;

    /// Parses a decimal representation with a single rounding.
    ///
    /// ## Errors
    ///
    /// InvalidFormat: the input is not a valid representation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        strop::parse_quad(s)
    }
}

impl Sum for Float128 {
    fn sum<I: Iterator<Item = Float128>>(iter: I) -> Self {
        iter.fold(Float128::ZERO, arith::add)
    }
}

impl<'a> Sum<&'a Float128> for Float128 {
    fn sum<I: Iterator<Item = &'a Float128>>(iter: I) -> Self {
        iter.fold(Float128::ZERO, |acc, x| arith::add(acc, *x))
    }
}

impl Product for Float128 {
    fn product<I: Iterator<Item = Float128>>(iter: I) -> Self {
        iter.fold(Float128::ONE, arith::mul)
    }
}

impl<'a> Product<&'a Float128> for Float128 {
    fn product<I: Iterator<Item = &'a Float128>>(iter: I) -> Self {
        iter.fold(Float128::ONE, |acc, x| arith::mul(acc, *x))
    }
}

/// Total-order equality: NaN equals NaN, otherwise IEEE equality.
pub fn equal_to(x: Float128, y: Float128) -> bool {
    if !x.is_nan() && !y.is_nan() {
        arith::cmp(x, y) == Some(Ordering::Equal)
    } else {
        x.is_nan() && y.is_nan()
    }
}

/// Total-order less-than: NaN is greater than every other value, NaN is
/// not less than NaN.
pub fn lt(x: Float128, y: Float128) -> bool {
    if !x.is_nan() && !y.is_nan() {
        arith::cmp(x, y) == Some(Ordering::Less)
    } else {
        !x.is_nan()
    }
}

/// Total-order greater-than: NaN is greater than every other value, NaN
/// is not greater than NaN.
pub fn gt(x: Float128, y: Float128) -> bool {
    if !x.is_nan() && !y.is_nan() {
        arith::cmp(x, y) == Some(Ordering::Greater)
    } else {
        !y.is_nan()
    }
}

macro_rules! free_unary {
    ($(#[$meta:meta])* $name:ident, $meth:ident) => {
        $(#[$meta])*
        pub fn $name(mut x: Float128) -> Float128 {
            x.$meth();
            x
        }
    };
}

free_unary!(
    /// The absolute value. Negative zero becomes positive zero; NaN is
    /// returned with its sign bit untouched.
    abs,
    abs_mut
);
free_unary!(
    /// The nonnegative square root; NaN for negative arguments.
    sqrt,
    sqrt_mut
);
free_unary!(
    /// The real cube root.
    cbrt,
    cbrt_mut
);
free_unary!(
    /// The natural logarithm.
    ln,
    ln_mut
);
free_unary!(
    /// The base 2 logarithm; exact for powers of two.
    log2,
    log2_mut
);
free_unary!(
    /// The base 10 logarithm.
    log10,
    log10_mut
);
free_unary!(
    /// The exponential function.
    exp,
    exp_mut
);
free_unary!(
    /// The sine of an angle in radians.
    sin,
    sin_mut
);
free_unary!(
    /// The cosine of an angle in radians.
    cos,
    cos_mut
);

/// `x^y` for any admissible pair of operand types.
pub fn pow<T, U>(x: T, y: U) -> Float128
where
    (T, U): OperandPair,
{
    let (x, y) = (x, y).promote_pair();
    crate::ops::pow::pow(x, y)
}

/// `x * y + z` with a single rounding.
pub fn fma(x: Float128, y: Float128, z: Float128) -> Float128 {
    arith::fma(x, y, z)
}

/// `sqrt(x^2 + y^2)` without intermediate overflow or underflow.
pub fn hypot(x: Float128, y: Float128) -> Float128 {
    sqrt_ops::hypot(x, y)
}

/// Splits `x` into a significand in `[0.5, 1)` and a power of two.
pub fn frexp(x: Float128) -> (Float128, i32) {
    x.frexp()
}

/// `x * 2^n`.
pub fn scalbn(x: Float128, n: i32) -> Float128 {
    x.scalbn(n)
}

/// `x * 2^n` with a wide-range exponent.
pub fn scalbln(x: Float128, n: i64) -> Float128 {
    x.scalbln(n)
}

/// The integer part of `x`, truncated toward zero.
pub fn trunc(x: Float128) -> Float128 {
    x.trunc()
}

/// The raw sign bit, set for negative values, negative zero and negative
/// NaN.
pub fn signbit(x: Float128) -> bool {
    x.sign_bit()
}

/// The IEEE category of `x`.
pub fn classify(x: Float128) -> core::num::FpCategory {
    x.classify()
}
