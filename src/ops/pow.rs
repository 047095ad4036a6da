//! Exponential and power kernels.
//!
//! `exp` reduces the argument by the nearest multiple of `ln(2)`, sums the
//! Taylor series on the small remainder in fixed point, and restores the
//! power of two through the final rounding. `pow` evaluates `exp(y ln x)`
//! at a raised scale after the special cases of IEEE `pow` are dealt with.

use crate::defs::Sign;
use crate::num::Float128;
use crate::ops::arith;
use crate::ops::consts;
use crate::ops::fixed;
use crate::ops::fixed::WORK;
use crate::ops::log;
use crate::ops::round;
use core::cmp::Ordering;
use core::num::FpCategory;
use num_bigint::BigInt;
use num_bigint::Sign as IntSign;
use num_traits::ToPrimitive;
use num_traits::Zero;

/// `exp(z)` for a fixed point `z` at scale `w`. Saturates to infinity or
/// flushes to zero when the result leaves the binary128 range.
fn exp_reduce(z: BigInt, w: u64) -> Float128 {
    let ln2 = consts::ln2_fixed(w);

    // nearest integer multiple of ln(2)
    let k = num_integer::Integer::div_floor(&(&z * 2u8 + &ln2), &(&ln2 * 2u8));

    let k = match k.to_i64() {
        Some(v) if (-16600..=16500).contains(&v) => v,
        Some(v) => {
            return if v > 0 {
                Float128::INF_POS
            } else {
                Float128::ZERO
            }
        }
        None => {
            return if k.sign() == IntSign::Minus {
                Float128::ZERO
            } else {
                Float128::INF_POS
            }
        }
    };

    // |r| <= ln(2) / 2
    let r = z - &ln2 * k;

    let one = fixed::one_fixed(w);
    let mut term = one.clone();
    let mut sum = one;
    let mut n = 1u64;

    loop {
        term = fixed::fix_mul(&term, &r, w) / n;
        if term.is_zero() {
            break;
        }

        sum += &term;
        n += 1;
    }

    round::round_to_quad(Sign::Pos, sum.magnitude().clone(), k - w as i64, false)
}

pub(crate) fn exp(x: Float128) -> Float128 {
    match x.classify() {
        FpCategory::Nan => Float128::NAN,
        FpCategory::Zero => Float128::ONE,
        FpCategory::Infinite => {
            if x.sign_bit() {
                Float128::ZERO
            } else {
                Float128::INF_POS
            }
        }
        _ => exp_reduce(fixed::to_fixed(x, WORK), WORK),
    }
}

fn is_odd_integer(y: Float128) -> bool {
    debug_assert!(y.is_integer() && !y.is_zero());

    let (_, sig, e) = y.finite_parts();
    if e > 0 {
        false
    } else {
        (sig >> (-e)) & 1 == 1
    }
}

/// `x^y` with the special cases of IEEE 754 `pow`.
pub(crate) fn pow(x: Float128, y: Float128) -> Float128 {
    // anything to the power 0 is 1, and 1 to any power is 1, NaN included
    if y.is_zero() || x.to_bits() == Float128::ONE.to_bits() {
        return Float128::ONE;
    }

    if x.is_nan() || y.is_nan() {
        return Float128::NAN;
    }

    let y_int = y.is_integer();
    let y_odd = y_int && is_odd_integer(y);

    if y.is_infinite() {
        let mut ax = x;
        ax.abs_mut();
        return match arith::cmp(ax, Float128::ONE) {
            Some(Ordering::Less) => {
                if y.sign_bit() {
                    Float128::INF_POS
                } else {
                    Float128::ZERO
                }
            }
            Some(Ordering::Greater) => {
                if y.sign_bit() {
                    Float128::ZERO
                } else {
                    Float128::INF_POS
                }
            }
            _ => Float128::ONE, // x == -1
        };
    }

    if x.is_zero() {
        return match (y.sign_bit(), y_odd) {
            (true, true) => round::signed_inf(x.sign()),
            (true, false) => Float128::INF_POS,
            (false, true) => x,
            (false, false) => Float128::ZERO,
        };
    }

    if x.is_infinite() {
        let negate = x.sign_bit() && y_odd;
        let r = if y.sign_bit() {
            Float128::ZERO
        } else {
            Float128::INF_POS
        };
        return if negate { arith::neg(r) } else { r };
    }

    // finite nonzero x, finite nonzero y
    if x.sign_bit() && !y_int {
        return Float128::NAN;
    }

    let mut ax = x;
    ax.abs_mut();
    let negate = x.sign_bit() && y_odd;

    let r = if ax.to_bits() == Float128::ONE.to_bits() {
        Float128::ONE
    } else {
        // the raised scale keeps y * ln(x) accurate when ln(x) is tiny
        let w = WORK + 128;
        let z = fixed::fix_mul(&fixed::to_fixed(y, w), &log::ln_fixed(ax, w), w);
        exp_reduce(z, w)
    };

    if negate {
        arith::neg(r)
    } else {
        r
    }
}
