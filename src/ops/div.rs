use crate::constants::{DECIMAL_DIVISION_EXTRA_PRECISION, MAX_SCALE_U32, SCALE_UP_LIMIT};
use crate::int128::Int128;
use crate::ops::common::{fits_u96, pow10, reduce_to_u96, CalculationResult};
use crate::Decimal;
use core::cmp::Ordering;

pub(crate) fn div_impl(dividend: &Decimal, divisor: &Decimal) -> CalculationResult {
    if divisor.is_zero() {
        return CalculationResult::DivByZero;
    }
    if dividend.is_zero() {
        return CalculationResult::Ok(Decimal::ZERO);
    }

    let negative = dividend.is_sign_negative() ^ divisor.is_sign_negative();
    let (dividend_scale, divisor_scale) = (dividend.scale(), divisor.scale());
    let target = (dividend_scale.max(divisor_scale) + DECIMAL_DIVISION_EXTRA_PRECISION).min(MAX_SCALE_U32);
    let divisor = divisor.unsigned_mantissa();

    // Scale the dividend up so that the quotient lands on the target scale. The working
    // range caps how far it can go.
    let wanted = target + divisor_scale - dividend_scale;
    let mut working = dividend.unsigned_mantissa();
    let mut steps = 0;
    while steps < wanted && working <= SCALE_UP_LIMIT {
        working *= Int128::TEN;
        steps += 1;
    }
    let (mut quotient, mut remainder) = working.div_rem(divisor);
    let mut scale = dividend_scale as i32 + steps as i32 - divisor_scale as i32;

    // Carry on digit by digit from the remainder while the quotient has room.
    while scale < target as i32 && quotient <= SCALE_UP_LIMIT {
        let (digit, rest) = (remainder * Int128::TEN).div_rem(divisor);
        quotient = quotient * Int128::TEN + digit;
        remainder = rest;
        scale += 1;
    }

    // Half up on the remainder, unless further digits are going to be dropped anyway.
    let round_up = fits_u96(&quotient) && (remainder + remainder).cmp(&divisor) != Ordering::Less;

    if scale < 0 {
        // The operands are too far apart for the quotient to have a fractional part
        let quotient = if round_up { quotient + Int128::ONE } else { quotient };
        let exponent = (-scale) as u32;
        if exponent > 28 || quotient.bit_length() + pow10(exponent).bit_length() > 127 {
            return CalculationResult::Overflow;
        }
        let quotient = quotient * pow10(exponent);
        if !fits_u96(&quotient) {
            return CalculationResult::Overflow;
        }
        return CalculationResult::Ok(Decimal::from_unsigned_mantissa(quotient, 0, negative).normalize());
    }

    match reduce_to_u96(quotient, scale as u32, round_up) {
        Some((mantissa, scale)) => {
            CalculationResult::Ok(Decimal::from_unsigned_mantissa(mantissa, scale, negative).normalize())
        }
        None => CalculationResult::Overflow,
    }
}
