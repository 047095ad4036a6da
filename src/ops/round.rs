//! Rounding of exact intermediate results to floating point formats.

use crate::defs::Sign;
use crate::defs::EXPONENT_BIAS;
use crate::defs::EXPONENT_MAX;
use crate::defs::MANTISSA_BIT_SIZE;
use crate::defs::SIGNIFICAND_BIT_SIZE;
use crate::defs::SUBNORMAL_EXPONENT;
use crate::num::Float128;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;
use num_traits::Zero;

/// Rounds `±m * 2^e` to the nearest binary128 value, ties to even.
/// `sticky` indicates that nonzero bits exist below the least significant
/// bit of `m`. Overflow saturates to infinity, underflow flushes to zero,
/// both keeping the sign.
pub(crate) fn round_to_quad(sign: Sign, m: BigUint, e: i64, sticky: bool) -> Float128 {
    if m.is_zero() {
        return signed_zero(sign);
    }

    let nbits = m.bits() as i64;
    let e_top = nbits - 1 + e;

    // exponent of the unit in the last place of the destination
    let mut q = (e_top - MANTISSA_BIT_SIZE as i64).max(SUBNORMAL_EXPONENT as i64);
    let shift = q - e;

    let mut kept;
    if shift > 0 {
        kept = &m >> (shift as u64);

        let round_bit = m.bit((shift - 1) as u64);
        let sticky = sticky
            || m.trailing_zeros().unwrap_or(0) < (shift - 1) as u64;

        if round_bit && (sticky || kept.is_odd()) {
            kept += 1u8;
        }
    } else {
        kept = m << ((-shift) as u64);
    }

    // the carry of rounding up can push the magnitude to 113 + 1 bits
    if kept.bits() as usize > SIGNIFICAND_BIT_SIZE {
        kept >>= 1u8;
        q += 1;
    }

    if kept.bits() as usize == SIGNIFICAND_BIT_SIZE {
        let e_res = MANTISSA_BIT_SIZE as i64 + q;

        if e_res > EXPONENT_MAX as i64 {
            return signed_inf(sign);
        }

        let biased = (e_res + EXPONENT_BIAS as i64) as u128;
        let mant = kept.to_u128().unwrap() & ((1u128 << MANTISSA_BIT_SIZE) - 1); // 113 bits fit u128

        Float128::from_bits(sign_bit(sign) | (biased << MANTISSA_BIT_SIZE) | mant)
    } else {
        // fewer than 113 bits can only remain at the bottom of the range
        debug_assert!(q == SUBNORMAL_EXPONENT as i64);

        Float128::from_bits(sign_bit(sign) | kept.to_u128().unwrap())
    }
}

/// Rounds `±(n / d) * 2^e` to the nearest binary128 value, ties to even.
/// The quotient is computed with two guard bits and a remainder check, so
/// a single rounding takes place.
pub(crate) fn round_ratio(sign: Sign, n: BigUint, d: BigUint, e: i64) -> Float128 {
    debug_assert!(!d.is_zero());

    if n.is_zero() {
        return signed_zero(sign);
    }

    let s = SIGNIFICAND_BIT_SIZE as i64 + 2 - (n.bits() as i64 - d.bits() as i64);

    let (quot, rem) = if s >= 0 {
        (n << (s as u64)).div_rem(&d)
    } else {
        n.div_rem(&(d << ((-s) as u64)))
    };

    round_to_quad(sign, quot, e - s, !rem.is_zero())
}

pub(crate) fn signed_zero(sign: Sign) -> Float128 {
    if sign.is_negative() {
        Float128::NEG_ZERO
    } else {
        Float128::ZERO
    }
}

pub(crate) fn signed_inf(sign: Sign) -> Float128 {
    if sign.is_negative() {
        Float128::INF_NEG
    } else {
        Float128::INF_POS
    }
}

pub(crate) fn sign_bit(sign: Sign) -> u128 {
    if sign.is_negative() {
        1u128 << 127
    } else {
        0
    }
}

/// Rounds `±sig * 2^e_lsb` (`sig` not wider than 113 bits) to a narrower
/// binary format described by its precision, normal exponent range, mantissa
/// width and exponent field width. Returns the raw bit pattern, sign bit
/// included. Used for narrowing to f64 and f32.
pub(crate) fn round_to_native(
    neg: bool,
    sig: u128,
    e_lsb: i64,
    prec: u32,
    emin: i32,
    emax: i32,
    mant_bits: u32,
    exp_bits: u32,
) -> u64 {
    let sbit = (neg as u64) << (mant_bits + exp_bits);

    if sig == 0 {
        return sbit;
    }

    let nbits = (128 - sig.leading_zeros()) as i64;
    let e_top = nbits - 1 + e_lsb;

    let q_sub = (emin - mant_bits as i32) as i64;
    let mut q = (e_top - (prec as i64 - 1)).max(q_sub);
    let shift = q - e_lsb;

    if shift >= 128 {
        // the whole significand is below the round bit
        return sbit;
    }

    let mut kept;
    if shift > 0 {
        kept = sig >> shift;
        let round_bit = (sig >> (shift - 1)) & 1 != 0;
        let sticky = if shift > 1 {
            sig & ((1u128 << (shift - 1)) - 1) != 0
        } else {
            false
        };
        if round_bit && (sticky || kept & 1 != 0) {
            kept += 1;
        }
    } else {
        kept = sig << (-shift);
    }

    let kb = 128 - kept.leading_zeros();
    if kb > prec {
        kept >>= 1;
        q += 1;
    }

    let kb = 128 - kept.leading_zeros();
    if kb == prec {
        let e_res = (prec as i64 - 1) + q;
        if e_res > emax as i64 {
            // infinity
            return sbit | (((1u64 << exp_bits) - 1) << mant_bits);
        }
        let biased = (e_res + emax as i64) as u64;
        sbit | (biased << mant_bits) | (kept as u64 & ((1u64 << mant_bits) - 1))
    } else {
        debug_assert!(q == q_sub);
        sbit | kept as u64
    }
}
