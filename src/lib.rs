//! Quadfloat implements IEEE 754 quadruple-precision (binary128)
//! floating point numbers that interoperate exactly with arbitrary
//! precision integers and rationals.
//!
//! The central type is [`Float128`], a 128-bit value with 113 bits of
//! significand precision. Arithmetic, comparison and the elementary
//! functions are available through the usual operators and free
//! functions; mixed expressions with the primitive numeric types,
//! [`num_bigint::BigInt`] and [`num_rational::BigRational`] promote the
//! foreign operand to quadruple precision with a single rounding.
//!
//! ``` rust
//! use num_bigint::BigInt;
//! use quadfloat::Float128;
//!
//! let x: Float128 = "0.5".parse().unwrap();
//! let y = x + BigInt::from(2);
//!
//! assert_eq!(y.to_string(), "2.50000000000000000000000000000000000e+00");
//! assert_eq!(y.try_to_bigint().unwrap(), BigInt::from(2));
//! ```
//!
//! Conversions from `Float128` to the arbitrary precision types are
//! exact, and formatting emits 36 significant digits so that every value
//! survives a format-then-parse round trip unchanged.

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod conv;
mod defs;
mod ext;
mod interop;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Sign;
pub use crate::ext::INF_NEG;
pub use crate::ext::INF_POS;
pub use crate::ext::NAN;
pub use crate::interop::BigOperand;
pub use crate::interop::NativeOperand;
pub use crate::interop::OperandPair;
pub use crate::num::Float128;

pub use crate::defs::DECIMAL_DIGITS;
pub use crate::defs::EXPONENT_BIAS;
pub use crate::defs::EXPONENT_BIT_SIZE;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
pub use crate::defs::MANTISSA_BIT_SIZE;
pub use crate::defs::MANTISSA_HIGH_BIT_SIZE;
pub use crate::defs::MANTISSA_LOW_BIT_SIZE;
pub use crate::defs::SIGNIFICAND_BIT_SIZE;

pub use crate::ext::abs;
pub use crate::ext::cbrt;
pub use crate::ext::classify;
pub use crate::ext::cos;
pub use crate::ext::equal_to;
pub use crate::ext::exp;
pub use crate::ext::fma;
pub use crate::ext::frexp;
pub use crate::ext::gt;
pub use crate::ext::hypot;
pub use crate::ext::ln;
pub use crate::ext::log10;
pub use crate::ext::log2;
pub use crate::ext::lt;
pub use crate::ext::pow;
pub use crate::ext::scalbln;
pub use crate::ext::scalbn;
pub use crate::ext::signbit;
pub use crate::ext::sin;
pub use crate::ext::sqrt;
pub use crate::ext::trunc;
