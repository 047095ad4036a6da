//! Parser of decimal number representations.
//!
//! Accepted forms: optional leading whitespace, an optional sign, then
//! either a decimal literal with an optional fraction and an optional
//! exponent part, or one of the special words `inf`, `infinity`, `nan`
//! (case-insensitive). Nothing may follow the number, trailing
//! whitespace included.

use crate::defs::Sign;

#[derive(Debug)]
pub(crate) struct ParsedNumber {
    pub(crate) sign: Sign,
    pub(crate) nan: bool,
    pub(crate) inf: bool,

    /// Significant decimal digits, leading and trailing zeros stripped.
    /// Empty when the value is zero.
    pub(crate) digits: Vec<u8>,

    /// Power of ten of the last digit, saturating at the i64 range.
    pub(crate) exponent: i64,
}

/// Parses `s`. Returns `None` when `s` is not a valid representation.
pub(crate) fn parse(s: &str) -> Option<ParsedNumber> {
    let b = s.as_bytes();
    let mut i = 0;

    while i < b.len() && b[i].is_ascii_whitespace() {
        i += 1;
    }

    let mut sign = Sign::Pos;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        if b[i] == b'-' {
            sign = Sign::Neg;
        }
        i += 1;
    }

    let rest = &s[i..];
    if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
        return Some(special(sign, false));
    }
    if rest.eq_ignore_ascii_case("nan") {
        return Some(special(sign, true));
    }

    let mut digits = Vec::new();
    let mut int_digits = 0usize;

    while i < b.len() && b[i].is_ascii_digit() {
        digits.push(b[i] - b'0');
        int_digits += 1;
        i += 1;
    }

    let mut frac_digits = 0usize;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            digits.push(b[i] - b'0');
            frac_digits += 1;
            i += 1;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    let mut exponent = 0i64;
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;

        let mut exp_sign = 1i64;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            if b[i] == b'-' {
                exp_sign = -1;
            }
            i += 1;
        }

        if i >= b.len() || !b[i].is_ascii_digit() {
            return None;
        }

        while i < b.len() && b[i].is_ascii_digit() {
            exponent = exponent
                .saturating_mul(10)
                .saturating_add(exp_sign * (b[i] - b'0') as i64);
            i += 1;
        }
    }

    if i != b.len() {
        return None;
    }

    exponent = exponent.saturating_sub(frac_digits as i64);

    // normalize: the digit vector carries significant digits only
    let leading = digits.iter().take_while(|&&d| d == 0).count();
    digits.drain(..leading);
    while let Some(&0) = digits.last() {
        digits.pop();
        exponent = exponent.saturating_add(1);
    }

    Some(ParsedNumber {
        sign,
        nan: false,
        inf: false,
        digits,
        exponent,
    })
}

fn special(sign: Sign, nan: bool) -> ParsedNumber {
    ParsedNumber {
        sign,
        nan,
        inf: !nan,
        digits: Vec::new(),
        exponent: 0,
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_parse_plain() {
        let p = parse("123").unwrap();
        assert_eq!(p.sign, Sign::Pos);
        assert_eq!(p.digits, vec![1, 2, 3]);
        assert_eq!(p.exponent, 0);
        assert!(!p.nan && !p.inf);

        let p = parse("-12.75").unwrap();
        assert_eq!(p.sign, Sign::Neg);
        assert_eq!(p.digits, vec![1, 2, 7, 5]);
        assert_eq!(p.exponent, -2);

        let p = parse("+.5").unwrap();
        assert_eq!(p.digits, vec![5]);
        assert_eq!(p.exponent, -1);

        let p = parse("42.").unwrap();
        assert_eq!(p.digits, vec![4, 2]);
        assert_eq!(p.exponent, 0);
    }

    #[test]
    fn test_parse_exponent() {
        let p = parse("1.5e3").unwrap();
        assert_eq!(p.digits, vec![1, 5]);
        assert_eq!(p.exponent, 2);

        let p = parse("25E-4").unwrap();
        assert_eq!(p.digits, vec![2, 5]);
        assert_eq!(p.exponent, -4);

        // a huge literal exponent saturates instead of wrapping
        let p = parse("1e99999999999999999999").unwrap();
        assert_eq!(p.exponent, i64::MAX);
    }

    #[test]
    fn test_parse_normalization() {
        let p = parse("007.250e1").unwrap();
        assert_eq!(p.digits, vec![7, 2, 5]);
        assert_eq!(p.exponent, -1);

        // all zeros means the value zero
        let p = parse("-000.000").unwrap();
        assert!(p.digits.is_empty());
        assert_eq!(p.sign, Sign::Neg);
    }

    #[test]
    fn test_parse_specials() {
        let p = parse("inf").unwrap();
        assert!(p.inf && !p.nan);

        let p = parse("-Infinity").unwrap();
        assert!(p.inf);
        assert_eq!(p.sign, Sign::Neg);

        let p = parse("NaN").unwrap();
        assert!(p.nan);

        let p = parse("  -nan").unwrap();
        assert!(p.nan);
        assert_eq!(p.sign, Sign::Neg);
    }

    #[test]
    fn test_parse_rejects() {
        assert!(parse("").is_none());
        assert!(parse("   ").is_none());
        assert!(parse("+").is_none());
        assert!(parse(".").is_none());
        assert!(parse("e5").is_none());
        assert!(parse("1.5e").is_none());
        assert!(parse("1.5e+").is_none());
        assert!(parse("1,5").is_none());
        assert!(parse("0x1p3").is_none());
        assert!(parse("inf inity").is_none());
        assert!(parse("nanx").is_none());

        // trailing characters are rejected, whitespace included
        assert!(parse("-1234 ").is_none());
        assert!(parse("1.0\n").is_none());
    }

    #[test]
    fn test_parse_leading_whitespace() {
        let p = parse(" \t 10").unwrap();
        assert_eq!(p.digits, vec![1]);
        assert_eq!(p.exponent, 1);
    }
}
