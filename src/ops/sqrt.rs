//! Root kernels.
//!
//! Roots are taken of the exact integer significand widened far enough
//! that the floor root carries the round bit and the remainder supplies
//! the sticky bit, which makes the results correctly rounded.

use crate::defs::Sign;
use crate::num::Float128;
use crate::ops::round;
use core::num::FpCategory;
use num_bigint::BigUint;
use num_integer::Roots;

pub(crate) fn sqrt(x: Float128) -> Float128 {
    match x.classify() {
        FpCategory::Nan => Float128::NAN,
        FpCategory::Zero => x,
        FpCategory::Infinite => {
            if x.sign_bit() {
                Float128::NAN
            } else {
                x
            }
        }
        _ => {
            if x.sign_bit() {
                return Float128::NAN;
            }

            let (_, sig, e) = x.finite_parts();
            sqrt_exact(BigUint::from(sig), e)
        }
    }
}

/// Square root of the exact value `m * 2^e`.
pub(crate) fn sqrt_exact(m: BigUint, e: i64) -> Float128 {
    // widen so the floor root keeps at least 113 + 2 bits, and keep the
    // residual exponent even
    let k = 240 + e.rem_euclid(2);

    let n = m << (k as u64);
    let r = n.sqrt();
    let sticky = &r * &r != n;

    round::round_to_quad(Sign::Pos, r, (e - k) / 2, sticky)
}

pub(crate) fn cbrt(x: Float128) -> Float128 {
    match x.classify() {
        FpCategory::Nan => Float128::NAN,
        FpCategory::Zero | FpCategory::Infinite => x,
        _ => {
            let (sign, sig, e) = x.finite_parts();

            let k = 360 + e.rem_euclid(3);

            let n = BigUint::from(sig) << (k as u64);
            let r = n.cbrt();
            let sticky = &r * &r * &r != n;

            round::round_to_quad(sign, r, (e - k) / 3, sticky)
        }
    }
}

/// `sqrt(x^2 + y^2)` without intermediate overflow or underflow. An
/// infinite operand dominates even a NaN in the other position.
pub(crate) fn hypot(x: Float128, y: Float128) -> Float128 {
    if x.is_infinite() || y.is_infinite() {
        return Float128::INF_POS;
    }

    if x.is_nan() || y.is_nan() {
        return Float128::NAN;
    }

    if x.is_zero() {
        let mut r = y;
        r.abs_mut();
        return r;
    }
    if y.is_zero() {
        let mut r = x;
        r.abs_mut();
        return r;
    }

    let (_, mx, ex) = x.finite_parts();
    let (_, my, ey) = y.finite_parts();

    // exact x^2 + y^2 as an integer scaled by 2^e0
    let e0 = (2 * ex).min(2 * ey);
    let s = (BigUint::from(mx) * BigUint::from(mx) << ((2 * ex - e0) as u64))
        + (BigUint::from(my) * BigUint::from(my) << ((2 * ey - e0) as u64));

    sqrt_exact(s, e0)
}

#[cfg(test)]
mod tests {

    use super::*;

    fn q(f: f64) -> Float128 {
        Float128::from_f64(f)
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(q(4.0)).to_f64(), 2.0);
        assert_eq!(sqrt(q(2.25)).to_f64(), 1.5);
        assert_eq!(sqrt(Float128::ZERO).to_bits(), 0);
        assert_eq!(
            sqrt(Float128::NEG_ZERO).to_bits(),
            Float128::NEG_ZERO.to_bits()
        );
        assert!(sqrt(q(-1.0)).is_nan());
        assert!(sqrt(Float128::INF_NEG).is_nan());
        assert_eq!(sqrt(Float128::INF_POS).to_bits(), Float128::INF_POS.to_bits());

        // sqrt(2) is correctly rounded
        assert_eq!(sqrt(q(2.0)).to_bits(), Float128::SQRT_2.to_bits());

        // an even power of two stays exact deep in the subnormal range
        let x = Float128::ONE.scalbn(-16480);
        assert_eq!(sqrt(x).to_bits(), Float128::ONE.scalbn(-8240).to_bits());
    }

    #[test]
    fn test_cbrt() {
        assert_eq!(cbrt(q(27.0)).to_f64(), 3.0);
        assert_eq!(cbrt(q(-27.0)).to_f64(), -3.0);
        assert_eq!(cbrt(q(0.125)).to_f64(), 0.5);
        assert_eq!(cbrt(Float128::ZERO).to_bits(), 0);
        assert_eq!(
            cbrt(Float128::NEG_ZERO).to_bits(),
            Float128::NEG_ZERO.to_bits()
        );
        assert_eq!(cbrt(Float128::INF_NEG).to_bits(), Float128::INF_NEG.to_bits());
        assert!(cbrt(Float128::NAN).is_nan());
    }

    #[test]
    fn test_hypot() {
        assert_eq!(hypot(q(3.0), q(4.0)).to_f64(), 5.0);
        assert_eq!(hypot(q(-3.0), q(4.0)).to_f64(), 5.0);
        assert_eq!(hypot(q(5.0), Float128::ZERO).to_f64(), 5.0);
        assert_eq!(hypot(Float128::NEG_ZERO, Float128::NEG_ZERO).to_bits(), 0);

        // infinity wins over NaN
        assert_eq!(
            hypot(Float128::INF_NEG, Float128::NAN).to_bits(),
            Float128::INF_POS.to_bits()
        );
        assert!(hypot(Float128::NAN, q(1.0)).is_nan());

        // no overflow for large operands
        let big = Float128::MAX.scalbn(-1);
        assert!(hypot(big, big).is_finite());
    }
}
