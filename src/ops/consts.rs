//! Cached fixed point constants.
//!
//! The kernels ask for pi, ln(2) and ln(10) at varying scales. Each
//! constant is computed once at the largest scale requested so far and
//! shifted down for smaller requests.

use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_traits::One;
use num_traits::Zero;
use std::sync::Mutex;

const GUARD: u64 = 64;

lazy_static! {
    static ref PI: Mutex<(u64, BigInt)> = Mutex::new((0, BigInt::zero()));
    static ref LN_2: Mutex<(u64, BigInt)> = Mutex::new((0, BigInt::zero()));
    static ref LN_10: Mutex<(u64, BigInt)> = Mutex::new((0, BigInt::zero()));
}

fn cached(cache: &Mutex<(u64, BigInt)>, w: u64, compute: fn(u64) -> BigInt) -> BigInt {
    let mut guard = cache.lock().unwrap();

    if guard.0 < w {
        *guard = (w, compute(w + GUARD) >> GUARD);
    }

    &guard.1 >> (guard.0 - w)
}

/// Returns pi at `w` fractional bits.
pub(crate) fn pi_fixed(w: u64) -> BigInt {
    // Machin: pi = 16 atan(1/5) - 4 atan(1/239)
    cached(&PI, w, |p| {
        (atan_recip(5, p) << 4u8) - (atan_recip(239, p) << 2u8)
    })
}

/// Returns ln(2) at `w` fractional bits.
pub(crate) fn ln2_fixed(w: u64) -> BigInt {
    // ln(2) = 2 atanh(1/3)
    cached(&LN_2, w, |p| atanh_recip(3, p) << 1u8)
}

/// Returns ln(10) at `w` fractional bits.
pub(crate) fn ln10_fixed(w: u64) -> BigInt {
    // ln(10) = 3 ln(2) + 2 atanh(1/9)
    cached(&LN_10, w, |p| {
        atanh_recip(3, p) * 6u8 + atanh_recip(9, p) * 2u8
    })
}

/// `atan(1/q)` at `p` fractional bits for a small integer `q`.
fn atan_recip(q: u64, p: u64) -> BigInt {
    let q2 = q * q;
    let mut pw = (BigInt::one() << p) / q;
    let mut sum = BigInt::zero();
    let mut n = 1u64;
    let mut neg = false;

    while !pw.is_zero() {
        let term = &pw / n;
        if neg {
            sum -= term;
        } else {
            sum += term;
        }

        pw = pw / q2;
        n += 2;
        neg = !neg;
    }

    sum
}

/// `atanh(1/q)` at `p` fractional bits for a small integer `q`.
fn atanh_recip(q: u64, p: u64) -> BigInt {
    let q2 = q * q;
    let mut pw = (BigInt::one() << p) / q;
    let mut sum = BigInt::zero();
    let mut n = 1u64;

    while !pw.is_zero() {
        sum += &pw / n;
        pw = pw / q2;
        n += 2;
    }

    sum
}

#[cfg(test)]
mod tests {

    use super::*;
    use num_traits::ToPrimitive;

    fn as_f64(x: &BigInt, w: u64) -> f64 {
        x.to_f64().unwrap() / 2f64.powi(w as i32)
    }

    #[test]
    fn test_constants_match_f64() {
        assert!((as_f64(&pi_fixed(128), 128) - core::f64::consts::PI).abs() < 1e-15);
        assert!((as_f64(&ln2_fixed(128), 128) - core::f64::consts::LN_2).abs() < 1e-15);
        assert!((as_f64(&ln10_fixed(128), 128) - core::f64::consts::LN_10).abs() < 1e-15);
    }

    #[test]
    fn test_cache_downshift_consistent() {
        let hi = pi_fixed(320);
        let lo = pi_fixed(64);
        assert_eq!(&hi >> 256u32, lo);
    }
}
