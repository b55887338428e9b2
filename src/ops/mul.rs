use crate::constants::MAX_SCALE_U32;
use crate::ops::common::{reduce_to_u96, Buf24, CalculationResult};
use crate::{Decimal, Int128};

pub(crate) fn mul_impl(d1: &Decimal, d2: &Decimal) -> CalculationResult {
    if d1.is_zero() || d2.is_zero() {
        return CalculationResult::Ok(Decimal::ZERO);
    }

    let negative = d1.is_sign_negative() ^ d2.is_sign_negative();
    let (left, right) = (d1.unsigned_mantissa(), d2.unsigned_mantissa());
    let scale = d1.scale() + d2.scale();

    let (mut product, mut scale, mut round_up) = if left.bit_length() + right.bit_length() <= 127 {
        (left * right, scale, false)
    } else {
        // The product may need up to 192 bits. Shed digits until it fits the working range.
        match Buf24::product(&left, &right).reduce_to_int128(scale) {
            Some(reduced) => reduced,
            None => return CalculationResult::Overflow,
        }
    };

    // Digits below the maximum scale are shed without rounding; only the last one shed
    // decides, so the product is rounded once.
    while scale > MAX_SCALE_U32 {
        let (quotient, remainder) = product.div_rem(Int128::TEN);
        product = quotient;
        round_up = remainder.low() >= 5;
        scale -= 1;
    }

    match reduce_to_u96(product, scale, round_up) {
        Some((mantissa, scale)) => {
            CalculationResult::Ok(Decimal::from_unsigned_mantissa(mantissa, scale, negative).normalize())
        }
        None => CalculationResult::Overflow,
    }
}
