//! Exact arithmetic kernels.
//!
//! Finite operands are treated as exact signed integers scaled by a power
//! of two. Sums and products are formed without loss and rounded once, so
//! every result here is correctly rounded with ties to even.

use crate::defs::Sign;
use crate::num::Float128;
use crate::ops::round;
use core::cmp::Ordering;
use core::num::FpCategory;
use num_bigint::BigInt;
use num_bigint::Sign as IntSign;
use num_traits::Zero;

fn signed_sig(sign: Sign, sig: u128, shift: u64) -> BigInt {
    let m = BigInt::from(sig) << shift;
    if sign.is_negative() {
        -m
    } else {
        m
    }
}

fn round_signed(m: BigInt, e: i64) -> Float128 {
    if m.is_zero() {
        // an exact cancellation yields +0 in round-to-nearest
        return Float128::ZERO;
    }

    let sign = if m.sign() == IntSign::Minus {
        Sign::Neg
    } else {
        Sign::Pos
    };

    round::round_to_quad(sign, m.magnitude().clone(), e, false)
}

fn xor_sign(x: Float128, y: Float128) -> Sign {
    if x.sign_bit() != y.sign_bit() {
        Sign::Neg
    } else {
        Sign::Pos
    }
}

pub(crate) fn add(x: Float128, y: Float128) -> Float128 {
    use FpCategory::*;

    match (x.classify(), y.classify()) {
        (Nan, _) | (_, Nan) => Float128::NAN,
        (Infinite, Infinite) => {
            if x.sign_bit() == y.sign_bit() {
                x
            } else {
                Float128::NAN
            }
        }
        (Infinite, _) => x,
        (_, Infinite) => y,
        (Zero, Zero) => {
            if x.sign_bit() && y.sign_bit() {
                Float128::NEG_ZERO
            } else {
                Float128::ZERO
            }
        }
        _ => {
            let (sx, mx, ex) = x.finite_parts();
            let (sy, my, ey) = y.finite_parts();
            let e0 = ex.min(ey);

            let sum = signed_sig(sx, mx, (ex - e0) as u64) + signed_sig(sy, my, (ey - e0) as u64);

            round_signed(sum, e0)
        }
    }
}

pub(crate) fn sub(x: Float128, y: Float128) -> Float128 {
    add(x, neg(y))
}

pub(crate) fn neg(x: Float128) -> Float128 {
    Float128::from_bits(x.to_bits() ^ (1u128 << 127))
}

pub(crate) fn mul(x: Float128, y: Float128) -> Float128 {
    use FpCategory::*;

    let sign = xor_sign(x, y);

    match (x.classify(), y.classify()) {
        (Nan, _) | (_, Nan) => Float128::NAN,
        (Infinite, Zero) | (Zero, Infinite) => Float128::NAN,
        (Infinite, _) | (_, Infinite) => round::signed_inf(sign),
        (Zero, _) | (_, Zero) => round::signed_zero(sign),
        _ => {
            let (_, mx, ex) = x.finite_parts();
            let (_, my, ey) = y.finite_parts();

            round::round_to_quad(
                sign,
                num_bigint::BigUint::from(mx) * num_bigint::BigUint::from(my),
                ex + ey,
                false,
            )
        }
    }
}

pub(crate) fn div(x: Float128, y: Float128) -> Float128 {
    use FpCategory::*;

    let sign = xor_sign(x, y);

    match (x.classify(), y.classify()) {
        (Nan, _) | (_, Nan) => Float128::NAN,
        (Infinite, Infinite) | (Zero, Zero) => Float128::NAN,
        (Infinite, _) => round::signed_inf(sign),
        (_, Infinite) => round::signed_zero(sign),
        (Zero, _) => round::signed_zero(sign),
        (_, Zero) => round::signed_inf(sign),
        _ => {
            let (_, mx, ex) = x.finite_parts();
            let (_, my, ey) = y.finite_parts();

            round::round_ratio(
                sign,
                num_bigint::BigUint::from(mx),
                num_bigint::BigUint::from(my),
                ex - ey,
            )
        }
    }
}

/// Fused multiply-add, `x * y + z` with a single rounding.
pub(crate) fn fma(x: Float128, y: Float128, z: Float128) -> Float128 {
    use FpCategory::*;

    if x.is_nan() || y.is_nan() || z.is_nan() {
        return Float128::NAN;
    }

    let psign = xor_sign(x, y);

    match (x.classify(), y.classify()) {
        (Infinite, Zero) | (Zero, Infinite) => return Float128::NAN,
        (Infinite, _) | (_, Infinite) => return add(round::signed_inf(psign), z),
        _ => {}
    }

    if z.is_infinite() {
        return z;
    }

    let (_, mx, ex) = x.finite_parts();
    let (_, my, ey) = y.finite_parts();
    let (sz, mz, ez) = z.finite_parts();

    if mx == 0 || my == 0 {
        if mz == 0 {
            // zero product added to zero keeps the sign only when both agree
            return if psign.is_negative() && sz.is_negative() {
                Float128::NEG_ZERO
            } else {
                Float128::ZERO
            };
        }
        return z;
    }

    let ep = ex + ey;
    let e0 = ep.min(ez);

    let mut prod = BigInt::from(mx) * BigInt::from(my) << ((ep - e0) as u64);
    if psign.is_negative() {
        prod = -prod;
    }

    let sum = prod + signed_sig(sz, mz, (ez - e0) as u64);

    round_signed(sum, e0)
}

/// IEEE comparison: `None` when either operand is NaN, zeros of both signs
/// compare equal.
pub(crate) fn cmp(x: Float128, y: Float128) -> Option<Ordering> {
    if x.is_nan() || y.is_nan() {
        return None;
    }

    if x.is_zero() && y.is_zero() {
        return Some(Ordering::Equal);
    }

    // map the sign-magnitude encoding onto a monotone unsigned key
    let key = |v: Float128| {
        let b = v.to_bits();
        if b >> 127 != 0 {
            !b
        } else {
            b | (1u128 << 127)
        }
    };

    Some(key(x).cmp(&key(y)))
}
