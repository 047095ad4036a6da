//! Definitions.

use core::fmt::Display;

/// An unbiased binary exponent.
pub type Exponent = i32;

/// Number of bits in the significand, including the implicit leading bit
/// of normal numbers.
pub const SIGNIFICAND_BIT_SIZE: usize = 113;

/// Number of explicitly stored mantissa bits.
pub const MANTISSA_BIT_SIZE: usize = 112;

/// Number of bits in the high part of the stored mantissa.
pub const MANTISSA_HIGH_BIT_SIZE: usize = 48;

/// Number of bits in the low part of the stored mantissa.
pub const MANTISSA_LOW_BIT_SIZE: usize = 64;

/// Number of bits in the biased exponent field.
pub const EXPONENT_BIT_SIZE: usize = 15;

/// Exponent bias.
pub const EXPONENT_BIAS: Exponent = 16383;

/// Biased exponent value reserved for Inf and NaN.
pub const EXPONENT_BIASED_MAX: u32 = 0x7fff;

/// Minimum unbiased exponent of a normal number.
pub const EXPONENT_MIN: Exponent = -16382;

/// Maximum unbiased exponent of a normal number.
pub const EXPONENT_MAX: Exponent = 16383;

/// Unbiased exponent of the least significant bit of a subnormal number.
pub const SUBNORMAL_EXPONENT: Exponent = EXPONENT_MIN - MANTISSA_BIT_SIZE as Exponent;

/// Number of significant decimal digits guaranteeing a lossless
/// format-then-parse round trip.
pub const DECIMAL_DIGITS: usize = 36;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }
}

/// Possible errors.
#[derive(Debug, Clone)]
pub enum Error {
    /// Conversion of a NaN or infinite value to a type which cannot
    /// represent it. The payload names the target category.
    NonFinite(&'static str),

    /// The input string is not a valid number representation.
    /// The payload carries the offending input.
    InvalidFormat(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::NonFinite(target) => {
                write!(f, "cannot convert a non-finite value to {}", target)
            }
            Error::InvalidFormat(s) => {
                write!(f, "invalid number representation: \"{}\"", s)
            }
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NonFinite(l0), Self::NonFinite(r0)) => l0 == r0,
            (Self::InvalidFormat(l0), Self::InvalidFormat(r0)) => l0 == r0,
            _ => false,
        }
    }
}
