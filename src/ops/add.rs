use crate::ops::common::{reduce_to_u96, scale_up, Buf24, CalculationResult};
use crate::Decimal;
use core::cmp::Ordering;

pub(crate) fn add_impl(d1: &Decimal, d2: &Decimal) -> CalculationResult {
    add_sub_internal(d1, d2, false)
}

pub(crate) fn sub_impl(d1: &Decimal, d2: &Decimal) -> CalculationResult {
    add_sub_internal(d1, d2, true)
}

fn add_sub_internal(d1: &Decimal, d2: &Decimal, subtract: bool) -> CalculationResult {
    if d2.is_zero() {
        return CalculationResult::Ok(d1.normalize());
    }
    if d1.is_zero() {
        let result = d2.normalize();
        return CalculationResult::Ok(if subtract { -result } else { result });
    }

    let left_negative = d1.is_sign_negative();
    let right_negative = d2.is_sign_negative() ^ subtract;
    let (left, right) = (d1.unsigned_mantissa(), d2.unsigned_mantissa());
    let (low, high) = if d1.scale() <= d2.scale() {
        ((left, d1.scale(), left_negative), (right, d2.scale(), right_negative))
    } else {
        ((right, d2.scale(), right_negative), (left, d1.scale(), left_negative))
    };
    let ((low, low_scale, low_negative), (high, high_scale, high_negative)) = (low, high);

    let (low, low_scale) = scale_up(low, low_scale, high_scale);
    let reduced = if low_scale == high_scale {
        // The mantissas are unsigned, so opposite signs subtract the smaller magnitude from
        // the larger one and take the larger one's sign.
        let (magnitude, negative) = if low_negative == high_negative {
            (low + high, low_negative)
        } else {
            match low.cmp(&high) {
                Ordering::Less => (high - low, high_negative),
                _ => (low - high, low_negative),
            }
        };
        reduce_to_u96(magnitude, high_scale, false).map(|reduced| (reduced, negative))
    } else {
        // The rest of the scale gap is closed in 192 bits. The upscaled operand already
        // dwarfs the other one, so it decides the sign.
        let mut buffer = Buf24::new(&low);
        for _ in low_scale..high_scale {
            buffer.mul_by_u32(10);
        }
        if low_negative == high_negative {
            buffer.add_int128(&high);
        } else {
            buffer.sub_int128(&high);
        }
        buffer
            .reduce_to_int128(high_scale)
            .and_then(|(magnitude, scale, round_up)| reduce_to_u96(magnitude, scale, round_up))
            .map(|reduced| (reduced, low_negative))
    };

    match reduced {
        Some(((mantissa, scale), negative)) => {
            CalculationResult::Ok(Decimal::from_unsigned_mantissa(mantissa, scale, negative).normalize())
        }
        None => CalculationResult::Overflow,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    fn add(a: &str, b: &str) -> CalculationResult {
        add_impl(&Decimal::from_str(a).unwrap(), &Decimal::from_str(b).unwrap())
    }

    #[test]
    fn it_adds_across_scales() {
        let tests = [
            ("2", "3", "5"),
            ("2454495034", "3451204593", "5905699627"),
            ("24544.95034", ".3451204593", "24545.2954604593"),
            (".1", ".1", "0.2"),
            (".10", ".1", "0.2"),
            ("-2", "3", "1"),
            ("2", "-3", "-1"),
            ("-1.5", "1.5", "0"),
            ("0.1", "0.2", "0.3"),
            ("79228162514264337593543950334", "1", "79228162514264337593543950335"),
        ];
        for &(a, b, expected) in &tests {
            match add(a, b) {
                CalculationResult::Ok(result) => assert_eq!(result.to_string(), expected, "{} + {}", a, b),
                other => panic!("{} + {} failed with {:?}", a, b, other),
            }
        }
    }

    #[test]
    fn it_reports_overflow() {
        assert!(matches!(
            add("79228162514264337593543950335", "1"),
            CalculationResult::Overflow
        ));
        assert!(matches!(
            add("-79228162514264337593543950335", "-1"),
            CalculationResult::Overflow
        ));
    }

    #[test]
    fn it_rounds_when_the_sum_needs_scale_reduction() {
        // 29 significant digits do not fit once the fraction is added
        match add("79228162514264337593543950330", "0.6") {
            CalculationResult::Ok(result) => assert_eq!(result.to_string(), "79228162514264337593543950331"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn it_rounds_once_when_the_scales_are_far_apart() {
        let tests = [
            ("79228162514264337593543950330", "0.4999999999", "79228162514264337593543950330"),
            ("79228162514264337593543950330", "-0.4999999999", "79228162514264337593543950330"),
            ("79228162514264337593543950330", "-0.5000000001", "79228162514264337593543950329"),
            ("79228162514264337593543950330", "0.5", "79228162514264337593543950331"),
            ("-79228162514264337593543950330", "-0.4999999999", "-79228162514264337593543950330"),
            ("0.4999999999", "79228162514264337593543950330", "79228162514264337593543950330"),
            ("7922816251426433759354395033", "0.04999999999", "7922816251426433759354395033"),
        ];
        for &(a, b, expected) in &tests {
            match add(a, b) {
                CalculationResult::Ok(result) => assert_eq!(result.to_string(), expected, "{} + {}", a, b),
                other => panic!("{} + {} failed with {:?}", a, b, other),
            }
        }
    }
}
