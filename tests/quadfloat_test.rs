//! End to end tests of the public interface.

use num_bigint::BigInt;
use num_rational::BigRational;
use quadfloat::{abs, equal_to, frexp, gt, lt, pow, sin, sqrt, Error, Float128};

fn parse(s: &str) -> Float128 {
    s.parse().unwrap()
}

#[test]
fn parse_compute_format() {
    let x = parse("1.234");
    let s = sin(x);

    // reference value of sin(1.234) to 36 digits
    let reference = parse("0.943818209374633704861751006156827573");
    let err = abs(s - reference);
    assert!(lt(err, parse("1e-34")));

    // the printed value parses back to the identical bits
    let printed = s.to_string();
    assert_eq!(parse(&printed).to_bits(), s.to_bits());
}

#[test]
fn big_integer_interop() {
    // a 16501-bit integer is out of the binary128 range
    let n = BigInt::from(1) << 16500u32;
    assert_eq!(Float128::from_bigint(&n).to_bits(), quadfloat::INF_POS.to_bits());
    assert_eq!(
        Float128::from_bigint(&(-n)).to_bits(),
        quadfloat::INF_NEG.to_bits()
    );

    // mixed expressions promote the integer side
    let n = BigInt::from(7);
    let x = parse("0.5") * &n;
    assert_eq!(x, parse("3.5"));
    assert!(x < BigInt::from(4));

    // compound assignment narrows back into the integer, truncating
    let mut n = BigInt::from(10);
    n += parse("2.75");
    assert_eq!(n, BigInt::from(12));

    // a non-finite result narrows to zero
    let mut n = BigInt::from(10);
    n *= quadfloat::INF_POS;
    assert_eq!(n, BigInt::from(0));
}

#[test]
fn big_rational_interop() {
    let half = BigRational::new(BigInt::from(1), BigInt::from(2));

    let x = Float128::from_rational(&half);
    assert_eq!(x, parse("0.5"));
    assert_eq!(x.try_to_rational().unwrap(), half);

    // every finite value has an exact rational representation
    let x = parse("0.1");
    let r = x.try_to_rational().unwrap();
    assert_eq!(Float128::from_rational(&r).to_bits(), x.to_bits());

    let mut r = half;
    r += parse("0.25");
    assert_eq!(r, BigRational::new(BigInt::from(3), BigInt::from(4)));
}

#[test]
fn conversion_failures() {
    let err = quadfloat::NAN.try_to_bigint().unwrap_err();
    assert_eq!(err, Error::NonFinite("an integer"));
    assert_eq!(
        err.to_string(),
        "cannot convert a non-finite value to an integer"
    );

    assert_eq!(
        quadfloat::INF_NEG.try_to_rational().unwrap_err(),
        Error::NonFinite("a rational")
    );

    // the non-throwing forms leave the output untouched on failure
    let mut n = BigInt::from(99);
    assert!(!quadfloat::NAN.write_bigint(&mut n));
    assert_eq!(n, BigInt::from(99));

    let mut r = BigRational::new(BigInt::from(2), BigInt::from(3));
    assert!(!quadfloat::INF_POS.write_rational(&mut r));
    assert_eq!(r, BigRational::new(BigInt::from(2), BigInt::from(3)));
}

#[test]
fn parse_rejects_trailing_input() {
    let err = "-1234 ".parse::<Float128>().unwrap_err();
    assert_eq!(err, Error::InvalidFormat("-1234 ".to_owned()));
    assert_eq!(err.to_string(), "invalid number representation: \"-1234 \"");

    assert!("".parse::<Float128>().is_err());
    assert!("1.2.3".parse::<Float128>().is_err());
}

#[test]
fn frexp_and_scalb() {
    let (r, e) = frexp(parse("16"));
    assert_eq!(r, parse("0.5"));
    assert_eq!(e, 5);

    let (r, e) = frexp(Float128::ZERO);
    assert_eq!(r.to_bits(), 0);
    assert_eq!(e, 0);

    let (r, _) = frexp(quadfloat::INF_NEG);
    assert_eq!(r.to_bits(), quadfloat::INF_NEG.to_bits());

    let (r, _) = frexp(quadfloat::NAN);
    assert!(r.is_nan());

    assert_eq!(quadfloat::scalbn(r0_5(), 3), parse("4"));
    assert_eq!(quadfloat::scalbln(Float128::ONE, -16494).to_bits(), 1);
}

fn r0_5() -> Float128 {
    parse("0.5")
}

#[test]
fn total_order_predicates_handle_nan() {
    let nan = quadfloat::NAN;
    let one = Float128::ONE;

    assert!(equal_to(nan, nan));
    assert!(!equal_to(nan, one));
    assert!(lt(one, nan));
    assert!(!lt(nan, nan));
    assert!(gt(nan, one));
    assert!(!gt(nan, nan));

    // the predicates give a total order usable for sorting
    let mut v = [nan, one, quadfloat::INF_NEG, Float128::NEG_ZERO];
    v.sort_by(|a, b| {
        if equal_to(*a, *b) {
            core::cmp::Ordering::Equal
        } else if lt(*a, *b) {
            core::cmp::Ordering::Less
        } else {
            core::cmp::Ordering::Greater
        }
    });
    assert_eq!(v[0].to_bits(), quadfloat::INF_NEG.to_bits());
    assert!(v[3].is_nan());
}

#[test]
fn format_parse_round_trip_random() {
    use rand::random;

    for _ in 0..1000 {
        let x = Float128::from_bits(random::<u128>());
        if x.is_nan() {
            continue;
        }
        let s = x.to_string();
        assert_eq!(parse(&s).to_bits(), x.to_bits(), "{}", s);
    }
}

#[test]
fn arithmetic_against_rationals() {
    use rand::random;

    // binary operations agree with exact rational arithmetic
    for _ in 0..200 {
        let a = Float128::from_f64(f64::from_bits(random::<u64>() % (1u64 << 62)));
        let b = Float128::from_f64(f64::from_bits(random::<u64>() % (1u64 << 62)));
        if !a.is_finite() || !b.is_finite() || b.is_zero() {
            continue;
        }

        let ra = a.try_to_rational().unwrap();
        let rb = b.try_to_rational().unwrap();

        assert_eq!(a + b, Float128::from_rational(&(&ra + &rb)));
        assert_eq!(a - b, Float128::from_rational(&(&ra - &rb)));
        assert_eq!(a * b, Float128::from_rational(&(&ra * &rb)));
        assert_eq!(a / b, Float128::from_rational(&(&ra / &rb)));
    }
}

#[test]
fn pow_dispatch() {
    assert_eq!(pow(parse("2"), 10i32), parse("1024"));
    assert_eq!(pow(3u8, parse("2")), parse("9"));
    assert_eq!(pow(BigInt::from(2), parse("-1")), parse("0.5"));
    assert_eq!(
        pow(parse("4"), BigRational::new(BigInt::from(1), BigInt::from(2))),
        parse("2")
    );
    assert_eq!(sqrt(parse("4")), parse("2"));
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let x = parse("-1.25e-10");
    let s = serde_json::to_string(&x).unwrap();
    let y: Float128 = serde_json::from_str(&s).unwrap();
    assert_eq!(x.to_bits(), y.to_bits());

    let z: Float128 = serde_json::from_str("3").unwrap();
    assert_eq!(z, parse("3"));
}
