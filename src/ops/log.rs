//! Logarithm kernels.
//!
//! `ln` splits the argument into `m * 2^t` with `m` in `[1, 2)`, computes
//! `ln(m)` with the atanh series and adds `t * ln(2)` in fixed point.
//! Results are faithfully rounded; `log2` of an exact power of two is
//! exact.

use crate::num::Float128;
use crate::ops::consts;
use crate::ops::fixed;
use crate::ops::fixed::WORK;
use core::num::FpCategory;
use num_bigint::BigInt;

/// Common domain handling for the logarithm family.
fn log_special(x: Float128) -> Option<Float128> {
    match x.classify() {
        FpCategory::Nan => Some(Float128::NAN),
        FpCategory::Zero => Some(Float128::INF_NEG),
        FpCategory::Infinite => {
            if x.sign_bit() {
                Some(Float128::NAN)
            } else {
                Some(Float128::INF_POS)
            }
        }
        _ => {
            if x.sign_bit() {
                Some(Float128::NAN)
            } else {
                None
            }
        }
    }
}

/// `ln(x)` in fixed point at scale `w` for a positive finite `x`.
pub(crate) fn ln_fixed(x: Float128, w: u64) -> BigInt {
    debug_assert!(x.is_finite() && !x.is_zero() && !x.sign_bit());

    let (_, sig, e) = x.finite_parts();
    let nbits = (128 - sig.leading_zeros()) as i64;

    // x = m * 2^t, m in [1, 2)
    let t = nbits - 1 + e;
    let shift = w as i64 - (nbits - 1);
    let m = if shift >= 0 {
        BigInt::from(sig) << (shift as u64)
    } else {
        BigInt::from(sig) >> ((-shift) as u64)
    };

    // ln(m) = 2 atanh((m - 1) / (m + 1))
    let one = fixed::one_fixed(w);
    let u = fixed::fix_div(&(&m - &one), &(&m + &one), w);
    let lnm = fixed::atanh_fixed(&u, w) << 1u8;

    lnm + consts::ln2_fixed(w) * t
}

pub(crate) fn ln(x: Float128) -> Float128 {
    if let Some(r) = log_special(x) {
        return r;
    }

    fixed::from_fixed(&ln_fixed(x, WORK), WORK)
}

pub(crate) fn log2(x: Float128) -> Float128 {
    if let Some(r) = log_special(x) {
        return r;
    }

    let l = fixed::fix_div(&ln_fixed(x, WORK), &consts::ln2_fixed(WORK), WORK);
    fixed::from_fixed(&l, WORK)
}

pub(crate) fn log10(x: Float128) -> Float128 {
    if let Some(r) = log_special(x) {
        return r;
    }

    let l = fixed::fix_div(&ln_fixed(x, WORK), &consts::ln10_fixed(WORK), WORK);
    fixed::from_fixed(&l, WORK)
}
