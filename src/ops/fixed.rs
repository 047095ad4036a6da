//! Fixed point helpers for the elementary function kernels.
//!
//! A fixed point number is a `BigInt` holding `round(v * 2^w)` for some
//! scale `w` of fractional bits. The kernels compute with truncating
//! operations, so each operation loses less than one unit in the last
//! place of the scale.

use crate::defs::Sign;
use crate::num::Float128;
use crate::ops::round;
use num_bigint::BigInt;
use num_bigint::Sign as IntSign;
use num_traits::Zero;

/// Scale the kernels use for binary128 results. It leaves well over a
/// hundred guard bits below the 113-bit significand.
pub(crate) const WORK: u64 = 256;

pub(crate) fn one_fixed(w: u64) -> BigInt {
    BigInt::from(1) << w
}

pub(crate) fn fix_mul(a: &BigInt, b: &BigInt, w: u64) -> BigInt {
    (a * b) >> w
}

pub(crate) fn fix_div(a: &BigInt, b: &BigInt, w: u64) -> BigInt {
    (a << w) / b
}

/// Converts a finite value to fixed point at scale `w`, truncating the
/// bits below the scale.
pub(crate) fn to_fixed(x: Float128, w: u64) -> BigInt {
    debug_assert!(x.is_finite());

    let (sign, sig, e) = x.finite_parts();
    let shift = e + w as i64;

    let mut m = BigInt::from(sig);
    if shift >= 0 {
        m <<= shift as u64;
    } else {
        m >>= (-shift) as u64;
    }

    if sign.is_negative() {
        -m
    } else {
        m
    }
}

/// Rounds a fixed point number at scale `w` to the nearest binary128
/// value.
pub(crate) fn from_fixed(f: &BigInt, w: u64) -> Float128 {
    let sign = if f.sign() == IntSign::Minus {
        Sign::Neg
    } else {
        Sign::Pos
    };

    round::round_to_quad(sign, f.magnitude().clone(), -(w as i64), false)
}

/// The series `t + t^3/3 + t^5/5 + ...` for `|t| < 1` in fixed point at
/// scale `w`. Converges quickly for the small arguments the logarithm
/// kernel produces.
pub(crate) fn atanh_fixed(t: &BigInt, w: u64) -> BigInt {
    let t2 = fix_mul(t, t, w);
    let mut pw = t.clone();
    let mut sum = t.clone();
    let mut n = 1u64;

    loop {
        pw = fix_mul(&pw, &t2, w);
        if pw.is_zero() {
            break;
        }

        n += 2;
        let term = &pw / n;
        if term.is_zero() {
            break;
        }

        sum += term;
    }

    sum
}

#[cfg(test)]
mod tests {

    use super::*;
    use num_traits::ToPrimitive;

    #[test]
    fn test_to_fixed_from_fixed() {
        let x = Float128::from_f64(1.5);
        let f = to_fixed(x, WORK);
        assert_eq!(f, BigInt::from(3) << (WORK - 1));
        assert_eq!(from_fixed(&f, WORK).to_f64(), 1.5);

        let x = Float128::from_f64(-0.25);
        let f = to_fixed(x, WORK);
        assert_eq!(f, -(BigInt::from(1) << (WORK - 2)));
        assert_eq!(from_fixed(&f, WORK).to_f64(), -0.25);

        assert_eq!(to_fixed(Float128::ZERO, WORK), BigInt::from(0));
    }

    #[test]
    fn test_fix_mul_div() {
        let a = one_fixed(64) * 3u8;
        let b = one_fixed(64) / 2u8;
        assert_eq!(fix_mul(&a, &b, 64), one_fixed(64) * 3u8 / 2u8);
        assert_eq!(fix_div(&a, &b, 64), one_fixed(64) * 6u8);
    }

    #[test]
    fn test_atanh_small() {
        assert_eq!(atanh_fixed(&BigInt::from(0), WORK), BigInt::from(0));

        // atanh(1/3) = ln(2) / 2
        let t = one_fixed(WORK) / 3u8;
        let r = atanh_fixed(&t, WORK).to_f64().unwrap() / 2f64.powi(WORK as i32);
        assert!((r - 0.5f64 * core::f64::consts::LN_2).abs() < 1e-15);
    }
}
