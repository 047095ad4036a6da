//! Conversions between `Float128` and arbitrary precision numbers.
//!
//! All conversions are exact: a finite quadruple-precision value always
//! has an exact rational representation, and conversions toward
//! `Float128` perform a single rounding with ties to even.

use crate::defs::Error;
use crate::num::Float128;
use crate::ops::round;
use num_bigint::BigInt;
use num_bigint::Sign as IntSign;
use num_rational::BigRational;
use num_traits::One;
use num_traits::Zero;

impl Float128 {
    /// Writes the integer part of the value into `rop`, truncating toward
    /// zero, and returns `true`. For NaN and infinities nothing is
    /// written and `false` is returned.
    pub fn write_bigint(&self, rop: &mut BigInt) -> bool {
        if !self.is_finite() {
            return false;
        }

        let (sign, sig, e) = self.finite_parts();

        let mag = if e >= 0 {
            BigInt::from(sig) << (e as u64)
        } else if -e >= 128 {
            BigInt::zero()
        } else {
            BigInt::from(sig >> (-e))
        };

        *rop = if sign.is_negative() { -mag } else { mag };
        true
    }

    /// Converts the value to an integer, truncating toward zero.
    ///
    /// ## Errors
    ///
    /// NonFinite: the value is NaN or infinite.
    pub fn try_to_bigint(&self) -> Result<BigInt, Error> {
        let mut rop = BigInt::zero();
        if self.write_bigint(&mut rop) {
            Ok(rop)
        } else {
            Err(Error::NonFinite("an integer"))
        }
    }

    /// Writes the exact rational representation of the value into `rop`
    /// in canonical form and returns `true`. For NaN and infinities
    /// nothing is written and `false` is returned.
    pub fn write_rational(&self, rop: &mut BigRational) -> bool {
        if !self.is_finite() {
            return false;
        }

        let (sign, sig, e) = self.finite_parts();

        let mut num = BigInt::from(sig);
        if sign.is_negative() {
            num = -num;
        }

        *rop = if e >= 0 {
            BigRational::from_integer(num << (e as u64))
        } else {
            // Ratio::new cancels the common power of two
            BigRational::new(num, BigInt::one() << ((-e) as u64))
        };
        true
    }

    /// Converts the value to its exact rational representation.
    ///
    /// ## Errors
    ///
    /// NonFinite: the value is NaN or infinite.
    pub fn try_to_rational(&self) -> Result<BigRational, Error> {
        let mut rop = BigRational::zero();
        if self.write_rational(&mut rop) {
            Ok(rop)
        } else {
            Err(Error::NonFinite("a rational"))
        }
    }

    /// Converts an integer to the nearest quadruple-precision value, ties
    /// to even. Values beyond the finite range become infinities.
    pub fn from_bigint(n: &BigInt) -> Self {
        let sign = if n.sign() == IntSign::Minus {
            crate::defs::Sign::Neg
        } else {
            crate::defs::Sign::Pos
        };

        round::round_to_quad(sign, n.magnitude().clone(), 0, false)
    }

    /// Converts a rational to the nearest quadruple-precision value, ties
    /// to even. Values beyond the finite range become infinities, values
    /// too small for the subnormal range flush to zero.
    pub fn from_rational(q: &BigRational) -> Self {
        let sign = if q.numer().sign() == IntSign::Minus {
            crate::defs::Sign::Neg
        } else {
            crate::defs::Sign::Pos
        };

        round::round_ratio(
            sign,
            q.numer().magnitude().clone(),
            q.denom().magnitude().clone(),
            0,
        )
    }
}

/// Narrowing used by compound assignment: a non-finite value becomes 0.
pub(crate) fn bigint_lossy(x: Float128) -> BigInt {
    let mut rop = BigInt::zero();
    x.write_bigint(&mut rop);
    rop
}

/// Narrowing used by compound assignment: a non-finite value becomes 0.
pub(crate) fn rational_lossy(x: Float128) -> BigRational {
    let mut rop = BigRational::zero();
    x.write_rational(&mut rop);
    rop
}
