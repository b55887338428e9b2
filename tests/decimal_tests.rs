use core::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use num_traits::{Bounded, FromPrimitive, ToPrimitive, Zero};
use wide_decimal::{Decimal, Error, ErrorKind, Int128, RoundingMode};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// Parsing

#[test]
fn it_parses_positive_int_string() {
    let a = dec("233");
    assert!(a.is_sign_positive());
    assert_eq!(a.scale(), 0);
    assert_eq!("233", a.to_string());
}

#[test]
fn it_parses_negative_int_string() {
    let a = dec("-233");
    assert!(a.is_sign_negative());
    assert_eq!(a.scale(), 0);
    assert_eq!("-233", a.to_string());
}

#[test]
fn it_parses_positive_float_string() {
    let a = dec("233.323223");
    assert!(a.is_sign_positive());
    assert_eq!(a.scale(), 6);
    assert_eq!("233.323223", a.to_string());
}

#[test]
fn it_parses_negative_float_string() {
    let a = dec("-233.43343");
    assert!(a.is_sign_negative());
    assert_eq!(a.scale(), 5);
    assert_eq!("-233.43343", a.to_string());
}

#[test]
fn it_parses_tiny_and_huge_values() {
    assert_eq!(dec("0.0000000000000000000000000001"), Decimal::MIN_POSITIVE);
    assert_eq!(dec("79228162514264337593543950335"), Decimal::MAX);
    assert_eq!(dec("-79228162514264337593543950335"), Decimal::MIN);
}

#[test]
fn it_normalizes_parsed_values() {
    let a = dec("123.4500");
    assert_eq!(a.scale(), 2);
    assert_eq!(a.decimal_places_count(), 2);
    assert_eq!(a.to_string(), "123.45");
    assert_eq!(a.normalize().to_bits(), a.to_bits());
}

#[test]
fn it_fails_to_parse_garbage() {
    assert_eq!(Decimal::from_str(""), Err(Error::from("Invalid decimal: empty")));
    assert_eq!(Decimal::from_str("-"), Err(Error::from("Invalid decimal: no digits found")));
    assert_eq!(Decimal::from_str("1.2.3"), Err(Error::from("Invalid decimal: two decimal points")));
    assert_eq!(Decimal::from_str("12a"), Err(Error::from("Invalid decimal: unknown character")));
    assert_eq!(Decimal::from_str("1e5").unwrap_err().kind(), ErrorKind::InvalidFormat);
    assert_eq!(Decimal::parse_opt(" 1"), None);
    assert_eq!(Decimal::parse_opt("1"), Some(Decimal::ONE));
}

#[test]
fn it_round_trips_through_display() {
    let values = [
        "0",
        "1",
        "-1",
        "0.5",
        "3.1415926535897932384626433832",
        "-0.0000000000000000000000000001",
        "79228162514264337593543950335",
        "-7.9228162514264337593543950335",
    ];
    for value in values {
        assert_eq!(dec(value).to_string(), value);
        assert_eq!(dec(&dec(value).to_string()), dec(value));
    }
}

// Construction

#[test]
fn it_creates_a_new_decimal() {
    assert_eq!(Decimal::new(3141, 3).to_string(), "3.141");
    assert_eq!(Decimal::new(-50, 1).to_string(), "-5");
    assert_eq!(Decimal::try_new(1, 29), Err(Error::ScaleExceedsMaximumPrecision(29)));
}

#[test]
#[should_panic(expected = "Scale exceeds maximum precision: 29 > 28")]
fn it_panics_on_an_oversized_scale() {
    let _ = Decimal::new(1, 29);
}

#[test]
fn it_round_trips_raw_bits() {
    let value = Decimal::from_bits([1, 0, 0, 0x8000_0000 | (2 << 16)]).unwrap();
    assert_eq!(value.to_string(), "-0.01");
    assert_eq!(value.to_bits(), [1, 0, 0, 0x8002_0000]);
    assert_eq!(value.flags(), 0x8002_0000);
    assert_eq!(value.mantissa_limbs(), [1, 0, 0]);
    assert_eq!(
        Decimal::from_bits([1, 0, 0, 1]),
        Err(Error::from("Invalid decimal: reserved flag bits are set"))
    );
    assert_eq!(Decimal::from_bits([1, 0, 0, 30 << 16]), Err(Error::ScaleExceedsMaximumPrecision(30)));
}

#[test]
fn it_serializes_to_little_endian_bytes() {
    let value = Decimal::new(-1, 2);
    assert_eq!(
        value.serialize(),
        [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x00, 0x00, 0x02, 0x80]
    );
    assert_eq!(Decimal::deserialize(value.serialize()), value);
}

#[test]
fn it_converts_from_int128() {
    let max = Int128::from_str("79228162514264337593543950335").unwrap();
    assert_eq!(Decimal::try_from(max).unwrap(), Decimal::MAX);
    assert_eq!(Decimal::try_from(-max).unwrap(), Decimal::MIN);

    let too_big = Int128::from_str("79228162514264337593543950336").unwrap();
    assert_eq!(Decimal::try_from(too_big), Err(Error::ExceedsMaximumPossibleValue));
    assert_eq!(Decimal::try_from(-too_big), Err(Error::LessThanMinimumPossibleValue));
    assert_eq!(Decimal::try_from(Int128::MIN).unwrap_err().kind(), ErrorKind::Overflow);
}

#[test]
fn it_converts_to_int128_by_truncation() {
    assert_eq!(Int128::from(dec("12.99")), Int128::from(12));
    assert_eq!(Int128::from(dec("-12.99")), Int128::from(-12));
    assert_eq!(Int128::from(Decimal::MAX).to_string(), "79228162514264337593543950335");
}

#[test]
fn it_converts_from_floats() {
    assert_eq!(Decimal::from(380.4f64).to_string(), "380.4");
    assert_eq!(Decimal::from(0.1f32).to_string(), "0.1");
    assert_eq!(Decimal::from(-2.5f64).to_string(), "-2.5");
    assert_eq!(Decimal::from(f64::NAN), Decimal::ZERO);
    assert_eq!(Decimal::from(f64::INFINITY), Decimal::ZERO);
    assert_eq!(Decimal::from(1e-30f64), Decimal::ZERO);
    assert_eq!(Decimal::from(1e29f64), Decimal::ZERO);
    assert_eq!(Decimal::from_f64(1e29f64), None);
    assert_eq!(Decimal::from_f64(0.25), Some(dec("0.25")));
}

#[test]
fn it_converts_to_primitives() {
    assert_eq!(dec("0.1").to_f64(), Some(0.1));
    assert_eq!(dec("-380.4").to_f64(), Some(-380.4));
    assert_eq!(dec("12.7").to_i64(), Some(12));
    assert_eq!(dec("-12.7").to_u64(), None);
    assert_eq!(Decimal::MAX.to_i64(), None);
    assert_eq!(Decimal::MAX.to_i128(), Some(79228162514264337593543950335));
    assert_eq!(Decimal::from_i128(-79228162514264337593543950336), None);
    assert_eq!(Decimal::from_u128(1 << 96), None);
}

#[test]
fn it_exposes_num_traits_bounds() {
    assert_eq!(<Decimal as Bounded>::max_value(), Decimal::MAX);
    assert_eq!(<Decimal as Bounded>::min_value(), Decimal::MIN);
    assert!(<Decimal as Zero>::zero().is_zero());
    assert_eq!(Decimal::default(), Decimal::ZERO);
}

// Addition

#[test]
fn it_adds_decimals() {
    let tests = [
        ("2", "3", "5"),
        ("2454495034", "3451204593", "5905699627"),
        ("24544.95034", ".3451204593", "24545.2954604593"),
        (".1", ".1", "0.2"),
        ("-2", "3", "1"),
        ("2", "-3", "-1"),
        ("-1.5", "1.5", "0"),
    ];
    for &(a, b, expected) in &tests {
        let mut sum = dec(a) + dec(b);
        assert_eq!(sum.to_string(), expected, "{} + {}", a, b);
        sum -= dec(b);
        assert_eq!(sum, dec(a), "{} + {} - {}", a, b, b);
    }
}

#[test]
fn it_adds_exactly() {
    assert_eq!(dec("0.1") + dec("0.2"), dec("0.3"));
    assert_eq!((dec("0.1") + dec("0.2")).to_string(), "0.3");
}

#[test]
fn it_rounds_a_sum_that_needs_more_digits() {
    assert_eq!(
        (dec("79228162514264337593543950330") + dec("0.6")).to_string(),
        "79228162514264337593543950331"
    );
}

#[test]
fn it_rounds_sums_of_far_apart_scales_once() {
    let tests = [
        ("79228162514264337593543950330", "0.4999999999", "79228162514264337593543950330"),
        ("79228162514264337593543950334", "0.5", "79228162514264337593543950335"),
        ("79228162514264337593543950335", "-0.5", "79228162514264337593543950335"),
        (
            "-79228162514264337593543950335",
            "0.4999999999999999999999999999",
            "-79228162514264337593543950335",
        ),
        (
            "7922816251426433759354395033.5",
            "0.0000000000000000000000000001",
            "7922816251426433759354395033.5",
        ),
    ];
    for &(a, b, expected) in &tests {
        assert_eq!((dec(a) + dec(b)).to_string(), expected, "{} + {}", a, b);
    }

    let tests = [
        ("79228162514264337593543950330", "0.4999999999", "79228162514264337593543950330"),
        ("79228162514264337593543950330", "0.5000000001", "79228162514264337593543950329"),
        (
            "0.0000000000000000000000000001",
            "79228162514264337593543950334",
            "-79228162514264337593543950334",
        ),
    ];
    for &(a, b, expected) in &tests {
        assert_eq!((dec(a) - dec(b)).to_string(), expected, "{} - {}", a, b);
    }
}

#[test]
#[should_panic(expected = "Addition overflowed")]
fn it_panics_when_addition_overflows() {
    let _ = Decimal::MAX + Decimal::ONE;
}

#[test]
#[should_panic(expected = "Subtraction overflowed")]
fn it_panics_when_subtraction_overflows() {
    let _ = Decimal::MIN - Decimal::ONE;
}

// Multiplication

#[test]
fn it_multiplies_decimals() {
    let tests = [
        ("2", "3", "6"),
        ("2454495034", "3451204593", "8470964534836491162"),
        ("24544.95034", ".3451204593", "8470.964534836491162"),
        (".1", ".1", "0.01"),
        ("0", "1.001", "0"),
        ("2", "-3", "-6"),
        ("-2", "-3", "6"),
    ];
    for &(a, b, expected) in &tests {
        assert_eq!((dec(a) * dec(b)).to_string(), expected, "{} * {}", a, b);
    }
}

#[test]
fn it_rounds_the_scale_of_a_product() {
    let a = dec("0.1234567890123456789012345678");
    assert_eq!((a * a).to_string(), "0.0152415787532388367504953515");
    assert!((dec("0.0000000000000001") * dec("0.0000000000000001")).is_zero());
}

#[test]
fn it_rounds_a_product_once() {
    let tests = [
        ("-7.9228162514264337593543950335", "-7.9228162514264337593543950335", "62.77101735386680763835789423"),
        ("3.3333333333333333333333333333", "3", "10"),
        ("0.5", "0.0000000000000000000000000001", "0.0000000000000000000000000001"),
        ("0.4", "0.0000000000000000000000000001", "0"),
        ("1.5", "0.0000000000000000000000000001", "0.0000000000000000000000000002"),
    ];
    for &(a, b, expected) in &tests {
        assert_eq!((dec(a) * dec(b)).to_string(), expected, "{} * {}", a, b);
    }
}

#[test]
#[should_panic(expected = "Multiplication overflowed")]
fn it_panics_when_multiplication_overflows() {
    let _ = Decimal::MAX * Decimal::TWO;
}

// Division

#[test]
fn it_divides_decimals() {
    let tests = [
        ("6", "3", "2"),
        ("10", "2", "5"),
        ("2.2", "1.1", "2"),
        ("-2.2", "-1.1", "2"),
        ("12.88", "5.6", "2.3"),
        ("1", "3", "0.3333333333333333333333333333"),
        ("2", "3", "0.6666666666666666666666666667"),
        ("-1", "3", "-0.3333333333333333333333333333"),
    ];
    for &(a, b, expected) in &tests {
        assert_eq!((dec(a) / dec(b)).to_string(), expected, "{} / {}", a, b);
    }
}

#[test]
fn it_stays_within_one_unit_after_multiplying_back() {
    let third = Decimal::ONE / dec("3");
    let back = third * dec("3");
    assert!((back - Decimal::ONE).abs() <= Decimal::MIN_POSITIVE);

    let value = dec("12.345");
    assert_eq!(value * dec("7") / dec("7"), value);
}

#[test]
#[should_panic(expected = "Division by zero")]
fn it_panics_when_dividing_by_zero() {
    let _ = dec("5") / Decimal::ZERO;
}

#[test]
#[should_panic(expected = "Division overflowed")]
fn it_panics_when_division_overflows() {
    let _ = Decimal::MAX / dec("0.1");
}

// Checked and fallible arithmetic

#[test]
fn it_reports_overflow_without_panicking() {
    assert_eq!(Decimal::MAX.checked_add(Decimal::ONE), None);
    assert_eq!(Decimal::MIN.checked_sub(Decimal::ONE), None);
    assert_eq!(Decimal::MAX.checked_mul(Decimal::TWO), None);
    assert_eq!(Decimal::ONE.checked_div(Decimal::ZERO), None);
    assert_eq!(Decimal::ONE.checked_add(Decimal::ONE), Some(Decimal::TWO));

    assert_eq!(Decimal::MAX.try_add(Decimal::ONE), Err(Error::ExceedsMaximumPossibleValue));
    assert_eq!(Decimal::MIN.try_sub(Decimal::ONE), Err(Error::LessThanMinimumPossibleValue));
    assert_eq!(Decimal::MIN.try_mul(Decimal::TWO), Err(Error::LessThanMinimumPossibleValue));
    assert_eq!(dec("5").try_div(Decimal::ZERO), Err(Error::DivisionByZero));
    assert_eq!(dec("5").try_div(Decimal::ZERO).unwrap_err().kind(), ErrorKind::Overflow);
    assert_eq!(dec("5").try_div(dec("2")), Ok(dec("2.5")));
}

#[test]
fn it_sums_and_multiplies_iterators() {
    let values = [dec("0.1"), dec("0.2"), dec("0.3")];
    assert_eq!(values.iter().sum::<Decimal>(), dec("0.6"));
    assert_eq!(values.iter().copied().sum::<Decimal>(), dec("0.6"));
    assert_eq!(values.iter().product::<Decimal>(), dec("0.006"));
    assert_eq!(Vec::<Decimal>::new().into_iter().product::<Decimal>(), Decimal::ONE);
}

// Rounding

#[test]
fn it_uses_bankers_rounding_by_default() {
    assert_eq!(dec("2.5").round(), dec("2"));
    assert_eq!(dec("3.5").round(), dec("4"));
    assert_eq!(dec("-2.5").round(), dec("-2"));
    assert_eq!(dec("6.5").round_dp(0), dec("6"));
    assert_eq!(dec("1.2345").round_dp(3), dec("1.234"));
    assert_eq!(dec("1.2355").round_dp(3), dec("1.236"));
}

#[test]
fn it_rounds_with_each_mode() {
    let tests = [
        ("2.5", 0, RoundingMode::ToNearestTiesAway, "3"),
        ("-2.5", 0, RoundingMode::ToNearestTiesAway, "-3"),
        ("2.49", 0, RoundingMode::ToNearestTiesAway, "2"),
        ("1.99", 0, RoundingMode::ToZero, "1"),
        ("-1.99", 0, RoundingMode::ToZero, "-1"),
        ("1.01", 0, RoundingMode::ToPositiveInfinity, "2"),
        ("-1.99", 0, RoundingMode::ToPositiveInfinity, "-1"),
        ("1.99", 0, RoundingMode::ToNegativeInfinity, "1"),
        ("-1.01", 0, RoundingMode::ToNegativeInfinity, "-2"),
        ("3.4395", 2, RoundingMode::ToPositiveInfinity, "3.44"),
        ("3.4395", 2, RoundingMode::ToNegativeInfinity, "3.43"),
        ("3.4395", 3, RoundingMode::ToNearest, "3.44"),
        ("1.5", 4, RoundingMode::ToZero, "1.5"),
    ];
    for &(value, dp, mode, expected) in &tests {
        assert_eq!(
            dec(value).round_dp_with_mode(dp, mode).to_string(),
            expected,
            "{} to {} places with {:?}",
            value,
            dp,
            mode
        );
    }
    assert_eq!(RoundingMode::default(), RoundingMode::ToNearest);
}

#[test]
fn it_normalizes_when_rounding_to_a_wider_scale() {
    let padded = Decimal::from_parts(1500, 0, 0, false, 3);
    for rounded in [padded.round_dp(5), padded.round_dp(3), padded.trunc().round_dp(0)] {
        assert_eq!(rounded.to_string(), rounded.normalize().to_string());
    }
    assert_eq!(padded.round_dp(5).to_bits(), dec("1.5").to_bits());
    assert_eq!(padded.round_dp(3).scale(), 1);
    assert_eq!(Decimal::from_parts(100, 0, 0, true, 2).round().to_bits(), Decimal::NEGATIVE_ONE.to_bits());
}

#[test]
fn it_truncates_floors_and_ceils() {
    assert_eq!(dec("1.5").trunc(), dec("1"));
    assert_eq!(dec("-1.5").trunc(), dec("-1"));
    assert_eq!(dec("1.5").floor(), dec("1"));
    assert_eq!(dec("-1.5").floor(), dec("-2"));
    assert_eq!(dec("1.5").ceil(), dec("2"));
    assert_eq!(dec("-1.5").ceil(), dec("-1"));
    assert_eq!(dec("-0.5").ceil().to_string(), "0");
    assert_eq!(dec("7").floor(), dec("7"));
}

// Formatting

#[test]
fn it_formats_with_precision() {
    assert_eq!(format!("{:.2}", dec("1.5")), "1.50");
    assert_eq!(format!("{:.2}", dec("1.2345")), "1.23");
    assert_eq!(format!("{:.0}", dec("2.5")), "2");
    assert_eq!(format!("{:.3}", dec("-7")), "-7.000");
}

#[test]
fn it_formats_with_width_and_sign() {
    assert_eq!(format!("{:>8}", dec("1.5")), "     1.5");
    assert_eq!(format!("{:<8}|", dec("-1.5")), "-1.5    |");
    assert_eq!(format!("{:+}", dec("1.5")), "+1.5");
    assert_eq!(format!("{:?}", dec("-0.25")), "-0.25");
}

#[test]
fn it_hides_the_sign_of_zero() {
    let negative_zero = Decimal::from_parts(0, 0, 0, true, 2);
    assert_eq!(negative_zero.to_string(), "0");
    assert_eq!(-Decimal::ZERO, Decimal::ZERO);
    assert!((-Decimal::ZERO).is_sign_positive());
}

// Comparison and hashing

#[test]
fn it_compares_across_scales() {
    assert_eq!(dec("1.0").cmp(&dec("1")), Ordering::Equal);
    assert_eq!(dec("1.01").cmp(&dec("1.1")), Ordering::Less);
    assert_eq!(dec("-1.01").cmp(&dec("-1.1")), Ordering::Greater);
    assert_eq!(Decimal::from_parts(0, 0, 0, true, 0), Decimal::ZERO);
    assert!(Decimal::MIN < Decimal::MAX);
    assert_eq!(dec("3").max(dec("2.99")), dec("3"));
}

#[test]
fn it_compares_against_other_numbers() {
    assert!(dec("2.5") > 2i32);
    assert!(dec("2.0") == 2u64);
    assert!(dec("0.1") == 0.1f64);
    assert!(dec("1.5") < 1.6f32);
    assert!(3i8 > dec("2.99"));
    assert!(dec("-1") < Int128::ZERO);
    assert!(Int128::from(12) == dec("12.0"));
    assert!(Int128::from(12) < dec("12.0000000000000000000000001"));
    assert!(dec("1") != f64::NAN);
    assert_eq!(dec("1").partial_cmp(&f64::NAN), None);
}

#[test]
fn it_hashes_equal_values_the_same() {
    let mut set = HashSet::new();
    set.insert(Decimal::from_parts(10, 0, 0, false, 1));
    set.insert(dec("1"));
    set.insert(dec("1.000"));
    set.insert(Decimal::from_parts(0, 0, 0, true, 0));
    set.insert(Decimal::ZERO);
    assert_eq!(set.len(), 2);
}

// Square roots

#[test]
fn it_takes_exact_square_roots() {
    assert_eq!(dec("2.25").sqrt().unwrap(), dec("1.5"));
    assert_eq!(dec("0").sqrt().unwrap(), Decimal::ZERO);
    assert_eq!(dec("1").sqrt().unwrap(), Decimal::ONE);
    assert_eq!(Int128::from(144).sqrt().unwrap(), Decimal::from(12));
}

#[test]
fn it_approximates_square_roots() {
    let root = Int128::from(150).sqrt().unwrap();
    assert!(root > dec("12.24"));
    assert!(root < dec("12.25"));

    let root = dec("2").sqrt().unwrap();
    assert_eq!(root.round_dp(20).to_string(), "1.4142135623730950488");
}

#[test]
fn it_rejects_negative_square_roots() {
    let err = dec("-4").sqrt().unwrap_err();
    assert_eq!(err, Error::NegativeSquareRoot);
    assert_eq!(err.kind(), ErrorKind::Domain);
    assert_eq!(err.to_string(), "Square root of a negative number");
}
