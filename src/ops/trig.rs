//! Sine and cosine kernels.
//!
//! The argument is reduced by the nearest multiple of pi/2 at a scale
//! widened to absorb the cancellation, then the Taylor series of the
//! quadrant function is summed on the small remainder.

use crate::num::Float128;
use crate::ops::consts;
use crate::ops::fixed;
use crate::ops::fixed::WORK;
use core::num::FpCategory;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use num_traits::Zero;

/// Reduces a finite `x` by the nearest multiple of pi/2 and returns the
/// remainder at scale `WORK` together with the quadrant number.
fn reduce(x: Float128) -> (BigInt, i64) {
    let (_, sig, e) = x.finite_parts();
    let nbits = (128 - sig.leading_zeros()) as i64;
    let e_top = nbits - 1 + e;

    // extra bits lost to cancellation when x is large
    let p = WORK + e_top.max(0) as u64 + 2;

    // pi/2 at scale p
    let halfpi = consts::pi_fixed(p - 1);

    let z = fixed::to_fixed(x, p);
    let n = num_integer::Integer::div_floor(&(&z * 2u8 + &halfpi), &(&halfpi * 2u8));

    let r = (z - &halfpi * &n) >> (p - WORK);
    let quadrant = num_integer::Integer::mod_floor(&n, &BigInt::from(4u8))
        .to_i64()
        .unwrap_or(0);

    (r, quadrant)
}

/// `sin(r)` for `|r| <= pi/4` in fixed point at scale `WORK`.
fn sin_series(r: &BigInt) -> BigInt {
    let r2 = fixed::fix_mul(r, r, WORK);
    let mut term = r.clone();
    let mut sum = r.clone();
    let mut n = 1u64;

    loop {
        term = -(fixed::fix_mul(&term, &r2, WORK) / ((2 * n) * (2 * n + 1)));
        if term.is_zero() {
            break;
        }

        sum += &term;
        n += 1;
    }

    sum
}

/// `cos(r)` for `|r| <= pi/4` in fixed point at scale `WORK`.
fn cos_series(r: &BigInt) -> BigInt {
    let r2 = fixed::fix_mul(r, r, WORK);
    let mut term = fixed::one_fixed(WORK);
    let mut sum = term.clone();
    let mut n = 1u64;

    loop {
        term = -(fixed::fix_mul(&term, &r2, WORK) / ((2 * n - 1) * (2 * n)));
        if term.is_zero() {
            break;
        }

        sum += &term;
        n += 1;
    }

    sum
}

pub(crate) fn sin(x: Float128) -> Float128 {
    match x.classify() {
        FpCategory::Nan | FpCategory::Infinite => Float128::NAN,
        FpCategory::Zero => x,
        _ => {
            // below this point sin(x) rounds to x itself
            if small_arg(x) {
                return x;
            }

            let (r, quadrant) = reduce(x);
            let s = match quadrant {
                0 => sin_series(&r),
                1 => cos_series(&r),
                2 => -sin_series(&r),
                _ => -cos_series(&r),
            };

            fixed::from_fixed(&s, WORK)
        }
    }
}

pub(crate) fn cos(x: Float128) -> Float128 {
    match x.classify() {
        FpCategory::Nan | FpCategory::Infinite => Float128::NAN,
        FpCategory::Zero => Float128::ONE,
        _ => {
            // below this point cos(x) rounds to 1
            if small_arg(x) {
                return Float128::ONE;
            }

            let (r, quadrant) = reduce(x);
            let s = match quadrant {
                0 => cos_series(&r),
                1 => -sin_series(&r),
                2 => -cos_series(&r),
                _ => sin_series(&r),
            };

            fixed::from_fixed(&s, WORK)
        }
    }
}

fn small_arg(x: Float128) -> bool {
    let (_, sig, e) = x.finite_parts();
    let nbits = (128 - sig.leading_zeros()) as i64;
    nbits - 1 + e < -115
}

#[cfg(test)]
mod tests {

    use super::*;

    fn q(f: f64) -> Float128 {
        Float128::from_f64(f)
    }

    #[test]
    fn test_trig_specials() {
        assert!(sin(Float128::NAN).is_nan());
        assert!(sin(Float128::INF_POS).is_nan());
        assert!(cos(Float128::INF_NEG).is_nan());

        assert_eq!(sin(Float128::ZERO).to_bits(), 0);
        assert_eq!(
            sin(Float128::NEG_ZERO).to_bits(),
            Float128::NEG_ZERO.to_bits()
        );
        assert_eq!(cos(Float128::ZERO).to_bits(), Float128::ONE.to_bits());
        assert_eq!(cos(Float128::NEG_ZERO).to_bits(), Float128::ONE.to_bits());
    }

    #[test]
    fn test_small_arguments() {
        let tiny = Float128::ONE.scalbn(-200);
        assert_eq!(sin(tiny).to_bits(), tiny.to_bits());
        assert_eq!(cos(tiny).to_bits(), Float128::ONE.to_bits());

        let tiny = Float128::DENORM_MIN;
        assert_eq!(sin(tiny).to_bits(), tiny.to_bits());
    }

    #[test]
    fn test_trig_values() {
        assert!((sin(q(1.0)).to_f64() - 1f64.sin()).abs() < 1e-16);
        assert!((cos(q(1.0)).to_f64() - 1f64.cos()).abs() < 1e-16);
        assert!((sin(q(-1.0)).to_f64() + 1f64.sin()).abs() < 1e-16);

        // quadrant mapping
        assert!((sin(q(2.0)).to_f64() - 2f64.sin()).abs() < 1e-16);
        assert!((sin(q(4.0)).to_f64() - 4f64.sin()).abs() < 1e-16);
        assert!((sin(q(6.0)).to_f64() - 6f64.sin()).abs() < 1e-16);
        assert!((cos(q(2.0)).to_f64() - 2f64.cos()).abs() < 1e-16);
        assert!((cos(q(4.0)).to_f64() - 4f64.cos()).abs() < 1e-16);
        assert!((cos(q(6.0)).to_f64() - 6f64.cos()).abs() < 1e-16);
    }

    #[test]
    fn test_large_argument_reduction() {
        // sin and cos remain bounded and consistent far from the origin
        let x = q(1e15);
        let s = sin(x).to_f64();
        let c = cos(x).to_f64();
        assert!((s * s + c * c - 1.0).abs() < 1e-15);
        assert!((s - 1e15f64.sin()).abs() < 1e-15);
    }

    #[test]
    fn test_sin_pi_is_tiny() {
        // sin(PI) is the representation error of PI, about 8.7e-35
        let s = sin(Float128::PI);
        assert!(!s.is_nan());
        let mut a = s;
        a.abs_mut();
        assert!(crate::ops::arith::cmp(a, Float128::ONE.scalbn(-110)).unwrap() == core::cmp::Ordering::Less);
        // PI rounds below pi, so the sine just past it is still positive
        assert!(!s.sign_bit());
    }
}
