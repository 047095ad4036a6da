//! Float128 is an IEEE 754 quadruple-precision (binary128) value.

use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::EXPONENT_BIAS;
use crate::defs::EXPONENT_BIASED_MAX;
use crate::defs::MANTISSA_BIT_SIZE;
use crate::defs::MANTISSA_HIGH_BIT_SIZE;
use crate::defs::MANTISSA_LOW_BIT_SIZE;
use crate::defs::SUBNORMAL_EXPONENT;
use crate::ops;
use core::num::FpCategory;
use num_bigint::BigUint;

const SIGN_MASK: u128 = 1 << 127;
const MANTISSA_MASK: u128 = (1 << MANTISSA_BIT_SIZE) - 1;
const IMPLICIT_BIT: u128 = 1 << MANTISSA_BIT_SIZE;

/// A quadruple-precision floating point number.
///
/// The value is a single 128-bit IEEE 754 binary128 pattern: 1 sign bit,
/// 15 exponent bits (bias 16383), and 112 stored mantissa bits giving 113
/// bits of significand precision for normal numbers. Every `u128` pattern
/// is a legal encoding, and the default value is `+0`.
///
/// Values are immutable-by-value: copying produces an independent value
/// and no operation aliases another instance.
#[derive(Copy, Clone, Debug)]
pub struct Float128 {
    bits: u128,
}

impl Float128 {
    /// Positive zero.
    pub const ZERO: Self = Self::from_bits(0);

    /// Negative zero.
    pub const NEG_ZERO: Self = Self::from_bits(SIGN_MASK);

    /// The value 1.
    pub const ONE: Self = Self::from_bits(0x3fff << MANTISSA_BIT_SIZE);

    /// Positive infinity.
    pub const INF_POS: Self = Self::from_bits(0x7fff << MANTISSA_BIT_SIZE);

    /// Negative infinity.
    pub const INF_NEG: Self = Self::from_bits(SIGN_MASK | (0x7fff << MANTISSA_BIT_SIZE));

    /// A quiet NaN.
    pub const NAN: Self = Self::from_bits((0x7fff << MANTISSA_BIT_SIZE) | (1 << 111));

    /// The largest finite value, (2 - 2^-112) * 2^16383.
    pub const MAX: Self = Self::from_bits((0x7ffe << MANTISSA_BIT_SIZE) | MANTISSA_MASK);

    /// The smallest finite value, the negation of [`Float128::MAX`].
    pub const MIN: Self = Self::from_bits(SIGN_MASK | (0x7ffe << MANTISSA_BIT_SIZE) | MANTISSA_MASK);

    /// The smallest positive normal value, 2^-16382.
    pub const MIN_POSITIVE: Self = Self::from_bits(1 << MANTISSA_BIT_SIZE);

    /// The smallest positive subnormal value, 2^-16494.
    pub const DENORM_MIN: Self = Self::from_bits(1);

    /// The difference between 1 and the next larger representable value,
    /// 2^-112.
    pub const EPSILON: Self = Self::from_bits(0x3f8f << MANTISSA_BIT_SIZE);

    /// The constant pi, correctly rounded.
    pub const PI: Self = Self::from_bits(0x4000921fb54442d18469898cc51701b8);

    /// Euler's number e, correctly rounded.
    pub const E: Self = Self::from_bits(0x40005bf0a8b1457695355fb8ac404e7a);

    /// The square root of 2, correctly rounded.
    pub const SQRT_2: Self = Self::from_bits(0x3fff6a09e667f3bcc908b2fb1366ea95);

    /// Creates a value from its raw bit pattern.
    pub const fn from_bits(bits: u128) -> Self {
        Float128 { bits }
    }

    /// Returns the raw bit pattern.
    pub const fn to_bits(self) -> u128 {
        self.bits
    }

    /// Returns the raw sign bit. For NaN the stored bit is returned as is.
    pub fn sign_bit(self) -> bool {
        self.bits & SIGN_MASK != 0
    }

    /// Returns the 15-bit biased exponent field.
    pub fn biased_exponent(self) -> u32 {
        ((self.bits >> MANTISSA_BIT_SIZE) & EXPONENT_BIASED_MAX as u128) as u32
    }

    /// Returns the high 48 bits of the stored mantissa.
    pub fn mantissa_high(self) -> u64 {
        ((self.bits >> MANTISSA_LOW_BIT_SIZE) & ((1 << MANTISSA_HIGH_BIT_SIZE) - 1)) as u64
    }

    /// Returns the low 64 bits of the stored mantissa.
    pub fn mantissa_low(self) -> u64 {
        self.bits as u64
    }

    /// Returns the IEEE decomposition of the value: the sign (1 for a set
    /// sign bit), the biased exponent, and the high and low parts of the
    /// mantissa.
    pub fn ieee_parts(self) -> (u8, u16, u64, u64) {
        (
            self.sign_bit() as u8,
            self.biased_exponent() as u16,
            self.mantissa_high(),
            self.mantissa_low(),
        )
    }

    /// Reconstructs a value from the fields of [`Float128::ieee_parts`].
    /// Out-of-range field bits are masked off.
    pub fn from_ieee_parts(sign: u8, exponent: u16, mantissa_high: u64, mantissa_low: u64) -> Self {
        let bits = (((sign & 1) as u128) << 127)
            | (((exponent & EXPONENT_BIASED_MAX as u16) as u128) << MANTISSA_BIT_SIZE)
            | (((mantissa_high & ((1 << MANTISSA_HIGH_BIT_SIZE) - 1)) as u128)
                << MANTISSA_LOW_BIT_SIZE)
            | mantissa_low as u128;
        Self::from_bits(bits)
    }

    /// Categorizes the value by the standard binary128 rules.
    pub fn classify(self) -> FpCategory {
        let biased = self.biased_exponent();
        let mant = self.bits & MANTISSA_MASK;

        if biased == EXPONENT_BIASED_MAX {
            if mant == 0 {
                FpCategory::Infinite
            } else {
                FpCategory::Nan
            }
        } else if biased == 0 {
            if mant == 0 {
                FpCategory::Zero
            } else {
                FpCategory::Subnormal
            }
        } else {
            FpCategory::Normal
        }
    }

    /// Returns true if the value is NaN.
    pub fn is_nan(self) -> bool {
        self.classify() == FpCategory::Nan
    }

    /// Returns true if the value is positive or negative infinity.
    pub fn is_infinite(self) -> bool {
        self.classify() == FpCategory::Infinite
    }

    /// Returns true if the value is neither NaN nor infinite.
    pub fn is_finite(self) -> bool {
        matches!(
            self.classify(),
            FpCategory::Normal | FpCategory::Subnormal | FpCategory::Zero
        )
    }

    /// Returns true if the value is positive or negative zero.
    pub fn is_zero(self) -> bool {
        self.classify() == FpCategory::Zero
    }

    /// Returns true if the value is subnormal.
    pub fn is_subnormal(self) -> bool {
        self.classify() == FpCategory::Subnormal
    }

    /// Returns true if the sign bit is set. Alias of [`Float128::sign_bit`].
    pub fn is_sign_negative(self) -> bool {
        self.sign_bit()
    }

    pub(crate) fn sign(self) -> Sign {
        if self.sign_bit() {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Splits a finite value into sign, integral significand (113 bits at
    /// most) and the exponent of its least significant bit, so that the
    /// value equals `±sig * 2^e`. Zero yields a zero significand.
    pub(crate) fn finite_parts(self) -> (Sign, u128, i64) {
        debug_assert!(self.is_finite());

        let biased = self.biased_exponent() as i64;
        let mant = self.bits & MANTISSA_MASK;

        if biased == 0 {
            (self.sign(), mant, SUBNORMAL_EXPONENT as i64)
        } else {
            (
                self.sign(),
                mant | IMPLICIT_BIT,
                biased - (EXPONENT_BIAS as i64 + MANTISSA_BIT_SIZE as i64),
            )
        }
    }

    pub(crate) fn encode(sign: Sign, sig: u128, e: i64) -> Self {
        ops::round::round_to_quad(sign, BigUint::from(sig), e, false)
    }

    /// Creates a value from an f64. The conversion is exact.
    pub fn from_f64(f: f64) -> Self {
        let b = f.to_bits();
        let sign = if b >> 63 != 0 { Sign::Neg } else { Sign::Pos };
        let exp = ((b >> 52) & 0x7ff) as i64;
        let mant = b & ((1 << 52) - 1);

        if exp == 0x7ff {
            if mant == 0 {
                ops::round::signed_inf(sign)
            } else {
                Self::from_bits(ops::round::sign_bit(sign) | Self::NAN.bits)
            }
        } else if exp == 0 {
            if mant == 0 {
                ops::round::signed_zero(sign)
            } else {
                Self::encode(sign, mant as u128, -1074)
            }
        } else {
            Self::encode(sign, (1u128 << 52) | mant as u128, exp - 1023 - 52)
        }
    }

    /// Creates a value from an f32. The conversion is exact.
    pub fn from_f32(f: f32) -> Self {
        Self::from_f64(f as f64)
    }

    /// Converts the value to an f64, rounding to nearest and saturating to
    /// infinity when out of range.
    pub fn to_f64(self) -> f64 {
        match self.classify() {
            FpCategory::Nan => f64::NAN,
            FpCategory::Infinite => {
                if self.sign_bit() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }
            _ => {
                let (sign, sig, e) = self.finite_parts();
                f64::from_bits(ops::round::round_to_native(
                    sign.is_negative(),
                    sig,
                    e,
                    53,
                    -1022,
                    1023,
                    52,
                    11,
                ))
            }
        }
    }

    /// Converts the value to an f32, rounding to nearest and saturating to
    /// infinity when out of range. The value is narrowed in a single step,
    /// no intermediate f64 rounding takes place.
    pub fn to_f32(self) -> f32 {
        match self.classify() {
            FpCategory::Nan => f32::NAN,
            FpCategory::Infinite => {
                if self.sign_bit() {
                    f32::NEG_INFINITY
                } else {
                    f32::INFINITY
                }
            }
            _ => {
                let (sign, sig, e) = self.finite_parts();
                f32::from_bits(ops::round::round_to_native(
                    sign.is_negative(),
                    sig,
                    e,
                    24,
                    -126,
                    127,
                    23,
                    8,
                ) as u32)
            }
        }
    }

    /// Converts the value to a u128 by truncating toward zero. Negative
    /// values become 0, values beyond the range saturate, NaN becomes 0.
    pub fn to_u128(self) -> u128 {
        match self.classify() {
            FpCategory::Nan | FpCategory::Zero => 0,
            FpCategory::Infinite => {
                if self.sign_bit() {
                    0
                } else {
                    u128::MAX
                }
            }
            _ => {
                if self.sign_bit() {
                    return 0;
                }
                let (_, sig, e) = self.finite_parts();
                let nbits = (128 - sig.leading_zeros()) as i64;
                if e >= 0 {
                    if nbits + e > 128 {
                        u128::MAX
                    } else {
                        sig << e
                    }
                } else if -e >= 128 {
                    0
                } else {
                    sig >> -e
                }
            }
        }
    }

    /// Converts the value to an i128 by truncating toward zero, saturating
    /// at the range bounds. NaN becomes 0.
    pub fn to_i128(self) -> i128 {
        match self.classify() {
            FpCategory::Nan | FpCategory::Zero => 0,
            FpCategory::Infinite => {
                if self.sign_bit() {
                    i128::MIN
                } else {
                    i128::MAX
                }
            }
            _ => {
                let (sign, sig, e) = self.finite_parts();
                let nbits = (128 - sig.leading_zeros()) as i64;
                let mag: u128 = if e >= 0 {
                    if nbits + e > 128 {
                        u128::MAX
                    } else {
                        sig << e
                    }
                } else if -e >= 128 {
                    0
                } else {
                    sig >> -e
                };

                if sign.is_negative() {
                    if mag > i128::MIN.unsigned_abs() {
                        i128::MIN
                    } else {
                        mag.wrapping_neg() as i128
                    }
                } else if mag > i128::MAX as u128 {
                    i128::MAX
                } else {
                    mag as i128
                }
            }
        }
    }

    /// Returns the integer part of the value, truncating toward zero.
    /// NaN and infinities are returned unchanged.
    pub fn trunc(self) -> Self {
        match self.classify() {
            FpCategory::Nan | FpCategory::Infinite | FpCategory::Zero => self,
            FpCategory::Subnormal => ops::round::signed_zero(self.sign()),
            FpCategory::Normal => {
                let e = self.unbiased_exponent();
                if e < 0 {
                    ops::round::signed_zero(self.sign())
                } else if e >= MANTISSA_BIT_SIZE as i32 {
                    self
                } else {
                    let frac_bits = MANTISSA_BIT_SIZE as i32 - e;
                    Self::from_bits(self.bits & !((1u128 << frac_bits) - 1))
                }
            }
        }
    }

    pub(crate) fn is_integer(self) -> bool {
        self.is_finite() && self.trunc().bits == self.bits
    }

    /// Decomposes the value into a significand in `[0.5, 1)` and an
    /// exponent `n` so that `self == r * 2^n`. Zero returns `(self, 0)`.
    /// NaN and infinities are returned unchanged with an exponent of 0.
    pub fn frexp(self) -> (Self, i32) {
        match self.classify() {
            FpCategory::Nan | FpCategory::Infinite | FpCategory::Zero => (self, 0),
            _ => {
                let (sign, sig, e) = self.finite_parts();
                let nbits = (128 - sig.leading_zeros()) as i64;
                let exp = nbits + e;
                (Self::encode(sign, sig, -nbits), exp as i32)
            }
        }
    }

    /// Multiplies the value by `2^n`, rounding subnormal results and
    /// saturating to infinity on overflow.
    pub fn scalbn(self, n: i32) -> Self {
        self.scalbln(n as i64)
    }

    /// Multiplies the value by `2^n` with a wide-range exponent, rounding
    /// subnormal results and saturating to infinity on overflow.
    pub fn scalbln(self, n: i64) -> Self {
        if !self.is_finite() || self.is_zero() {
            return self;
        }
        let (sign, sig, e) = self.finite_parts();
        ops::round::round_to_quad(sign, BigUint::from(sig), e.saturating_add(n), false)
    }

    /// Replaces the value with its absolute value and returns a reference
    /// to `self`. Negative zero becomes positive zero; for NaN the value,
    /// sign bit included, is left untouched.
    pub fn abs_mut(&mut self) -> &mut Self {
        match self.classify() {
            FpCategory::Normal | FpCategory::Subnormal | FpCategory::Infinite => {
                self.bits &= !SIGN_MASK;
            }
            FpCategory::Zero => {
                self.bits = 0;
            }
            FpCategory::Nan => {}
        }
        self
    }

    /// Replaces the value with its nonnegative square root and returns a
    /// reference to `self`. The square root of a value below negative zero
    /// is NaN.
    pub fn sqrt_mut(&mut self) -> &mut Self {
        *self = ops::sqrt::sqrt(*self);
        self
    }

    /// Replaces the value with its real cube root and returns a reference
    /// to `self`.
    pub fn cbrt_mut(&mut self) -> &mut Self {
        *self = ops::sqrt::cbrt(*self);
        self
    }

    /// Replaces the value with its natural logarithm and returns a
    /// reference to `self`.
    pub fn ln_mut(&mut self) -> &mut Self {
        *self = ops::log::ln(*self);
        self
    }

    /// Replaces the value with its base 2 logarithm and returns a
    /// reference to `self`.
    pub fn log2_mut(&mut self) -> &mut Self {
        *self = ops::log::log2(*self);
        self
    }

    /// Replaces the value with its base 10 logarithm and returns a
    /// reference to `self`.
    pub fn log10_mut(&mut self) -> &mut Self {
        *self = ops::log::log10(*self);
        self
    }

    /// Replaces the value with `e` raised to the power of the value and
    /// returns a reference to `self`.
    pub fn exp_mut(&mut self) -> &mut Self {
        *self = ops::pow::exp(*self);
        self
    }

    /// Replaces the value with its sine (the value is an angle in radians)
    /// and returns a reference to `self`.
    pub fn sin_mut(&mut self) -> &mut Self {
        *self = ops::trig::sin(*self);
        self
    }

    /// Replaces the value with its cosine (the value is an angle in
    /// radians) and returns a reference to `self`.
    pub fn cos_mut(&mut self) -> &mut Self {
        *self = ops::trig::cos(*self);
        self
    }

    /// Returns the reciprocal of the value.
    pub fn recip(self) -> Self {
        ops::arith::div(Self::ONE, self)
    }

    /// Narrows the value to a native type with the saturating semantics
    /// of `as` casts. Never fails.
    pub fn to_native<T: crate::interop::NativeOperand>(self) -> T {
        T::from_quad_lossy(self)
    }

    pub(crate) fn unbiased_exponent(self) -> Exponent {
        self.biased_exponent() as Exponent - EXPONENT_BIAS
    }
}
