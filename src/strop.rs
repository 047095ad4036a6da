//! String representation of quadruple-precision values.
//!
//! Parsing is correctly rounded: the literal is taken as an exact
//! rational and rounded once, ties to even. Formatting emits 36
//! significant digits in scientific notation, enough for any value to
//! survive a format-then-parse round trip unchanged.

use crate::defs::Error;
use crate::defs::Sign;
use crate::defs::DECIMAL_DIGITS;
use crate::num::Float128;
use crate::ops::round;
use crate::parser;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::pow::pow;
use num_traits::One;
use num_traits::Zero;

// decimal exponents at which a literal is out of the binary128 range
// regardless of its digits
const DEC_EXP_INF: i64 = 4940;
const DEC_EXP_ZERO: i64 = -4980;

/// Parses a decimal representation into the nearest binary128 value.
///
/// ## Errors
///
/// InvalidFormat: the input is not a valid representation; the error
/// carries the full input.
pub(crate) fn parse_quad(s: &str) -> Result<Float128, Error> {
    let p = parser::parse(s).ok_or_else(|| Error::InvalidFormat(s.to_owned()))?;

    if p.nan {
        let mut bits = Float128::NAN.to_bits();
        if p.sign.is_negative() {
            bits |= 1 << 127;
        }
        return Ok(Float128::from_bits(bits));
    }

    if p.inf {
        return Ok(round::signed_inf(p.sign));
    }

    if p.digits.is_empty() {
        return Ok(round::signed_zero(p.sign));
    }

    // the decimal exponent of the leading digit bounds the magnitude
    let e_hi = p.exponent.saturating_add(p.digits.len() as i64 - 1);
    if e_hi > DEC_EXP_INF {
        return Ok(round::signed_inf(p.sign));
    }
    if e_hi < DEC_EXP_ZERO {
        return Ok(round::signed_zero(p.sign));
    }

    let mut d = BigUint::zero();
    for &dig in &p.digits {
        d = d * 10u8 + dig;
    }

    let x = if p.exponent >= 0 {
        round::round_to_quad(
            p.sign,
            d * pow(BigUint::from(10u8), p.exponent as usize),
            0,
            false,
        )
    } else {
        round::round_ratio(p.sign, d, pow(BigUint::from(10u8), (-p.exponent) as usize), 0)
    };

    Ok(x)
}

/// Formats a value with 36 significant digits as `d.ddd...e±xx`.
pub(crate) fn format_quad(x: Float128) -> String {
    if x.is_nan() {
        return "nan".to_owned();
    }

    let prefix = if x.sign_bit() { "-" } else { "" };

    if x.is_infinite() {
        return format!("{}inf", prefix);
    }

    if x.is_zero() {
        return format!("{}0.{}e+00", prefix, "0".repeat(DECIMAL_DIGITS - 1));
    }

    let (_, sig, e) = x.finite_parts();
    let nbits = (128 - sig.leading_zeros()) as i64;
    let e_top = nbits - 1 + e;

    let lo = pow(BigUint::from(10u8), DECIMAL_DIGITS - 1);
    let hi = &lo * 10u8;

    // f64 estimate of the decimal exponent, corrected below
    let mut d10 = (e_top as f64 * core::f64::consts::LOG10_2).floor() as i64;

    let q = loop {
        let q = scaled_digits(sig, e, d10 - (DECIMAL_DIGITS as i64 - 1));
        if q >= hi {
            d10 += 1;
        } else if q < lo {
            d10 -= 1;
        } else {
            break q;
        }
    };

    let digits = q.to_string();
    let (esign, eabs) = if d10 < 0 { ('-', -d10) } else { ('+', d10) };

    format!(
        "{}{}.{}e{}{:02}",
        prefix,
        &digits[..1],
        &digits[1..],
        esign,
        eabs
    )
}

/// `round(sig * 2^e * 10^-scale)` with ties to even.
fn scaled_digits(sig: u128, e: i64, scale: i64) -> BigUint {
    let mut num = BigUint::from(sig);
    let mut den = BigUint::one();

    if e >= 0 {
        num <<= e as u64;
    } else {
        den <<= (-e) as u64;
    }

    if scale >= 0 {
        den *= pow(BigUint::from(10u8), scale as usize);
    } else {
        num *= pow(BigUint::from(10u8), (-scale) as usize);
    }

    let (q, r) = num.div_rem(&den);
    let twice = r << 1u8;

    if twice > den || (twice == den && q.is_odd()) {
        q + 1u8
    } else {
        q
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn q(f: f64) -> Float128 {
        Float128::from_f64(f)
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_quad("1").unwrap().to_bits(), Float128::ONE.to_bits());
        assert_eq!(parse_quad("-2.5").unwrap().to_f64(), -2.5);
        assert_eq!(parse_quad("1e3").unwrap().to_f64(), 1000.0);
        assert_eq!(parse_quad("0.0").unwrap().to_bits(), 0);
        assert_eq!(
            parse_quad("-0").unwrap().to_bits(),
            Float128::NEG_ZERO.to_bits()
        );
    }

    #[test]
    fn test_parse_specials() {
        assert!(parse_quad("nan").unwrap().is_nan());

        let x = parse_quad("-NaN").unwrap();
        assert!(x.is_nan());
        assert!(x.sign_bit());

        assert_eq!(
            parse_quad("inf").unwrap().to_bits(),
            Float128::INF_POS.to_bits()
        );
        assert_eq!(
            parse_quad("-Infinity").unwrap().to_bits(),
            Float128::INF_NEG.to_bits()
        );
    }

    #[test]
    fn test_parse_correctly_rounded() {
        // 0.1 rounds to the binary128 value nearest to 1/10
        let x = parse_quad("0.1").unwrap();
        let r = num_rational::BigRational::new(1.into(), 10.into());
        assert_eq!(x.to_bits(), Float128::from_rational(&r).to_bits());

        // many digits still round once
        let x = parse_quad("3.14159265358979323846264338327950288419716939937510").unwrap();
        assert_eq!(x.to_bits(), Float128::PI.to_bits());
    }

    #[test]
    fn test_parse_range_clamps() {
        assert!(parse_quad("1e5000").unwrap().is_infinite());
        assert_eq!(parse_quad("-1e5000").unwrap().to_bits(), Float128::INF_NEG.to_bits());
        assert_eq!(parse_quad("1e-5000").unwrap().to_bits(), 0);
        assert_eq!(
            parse_quad("-1e-5000").unwrap().to_bits(),
            Float128::NEG_ZERO.to_bits()
        );
        assert!(parse_quad("1e99999999999999999999").unwrap().is_infinite());
    }

    #[test]
    fn test_parse_errors() {
        let e = parse_quad("-1234 ").unwrap_err();
        assert_eq!(e, Error::InvalidFormat("-1234 ".to_owned()));
        assert!(parse_quad("").is_err());
        assert!(parse_quad("12a").is_err());
    }

    #[test]
    fn test_format_simple() {
        assert_eq!(
            format_quad(Float128::ONE),
            "1.00000000000000000000000000000000000e+00"
        );
        assert_eq!(
            format_quad(q(-0.5)),
            "-5.00000000000000000000000000000000000e-01"
        );
        assert_eq!(format_quad(Float128::NAN), "nan");
        assert_eq!(format_quad(Float128::INF_POS), "inf");
        assert_eq!(format_quad(Float128::INF_NEG), "-inf");
        assert_eq!(
            format_quad(Float128::ZERO),
            "0.00000000000000000000000000000000000e+00"
        );
        assert_eq!(
            format_quad(Float128::NEG_ZERO),
            "-0.00000000000000000000000000000000000e+00"
        );
    }

    #[test]
    fn test_format_pi() {
        assert_eq!(
            format_quad(Float128::PI),
            "3.14159265358979323846264338327950280e+00"
        );
    }

    #[test]
    fn test_format_extremes() {
        let s = format_quad(Float128::MAX);
        assert!(s.starts_with("1.18973149535723176508575932662800702e+4932"));

        let s = format_quad(Float128::DENORM_MIN);
        assert!(s.ends_with("e-4966"));
    }

    #[test]
    fn test_round_trip() {
        use rand::random;

        for _ in 0..500 {
            let x = Float128::from_bits(random::<u128>());
            if x.is_nan() {
                continue;
            }
            let s = format_quad(x);
            assert_eq!(parse_quad(&s).unwrap().to_bits(), x.to_bits(), "{}", s);
        }
    }
}
