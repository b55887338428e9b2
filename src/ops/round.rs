use crate::int128::Int128;
use crate::ops::common::pow10;
use crate::RoundingMode;
use core::cmp::Ordering;

/// Removes the lowest `digits` decimal digits from a non-negative mantissa, rounding the
/// retained part according to `mode`. `negative` is the sign of the value the mantissa
/// belongs to, needed by the directed modes.
pub(crate) fn round_mantissa(mantissa: Int128, digits: u32, negative: bool, mode: RoundingMode) -> Int128 {
    if digits == 0 {
        return mantissa;
    }
    let (quotient, remainder) = mantissa.div_rem(pow10(digits));
    if remainder.is_zero() {
        return quotient;
    }

    // Comparing the whole remainder against half covers both the rounding digit and any
    // non-zero digits below it.
    let half = pow10(digits - 1) * Int128::from(5);
    let away_from_zero = match mode {
        RoundingMode::ToNearest => match remainder.cmp(&half) {
            Ordering::Greater => true,
            Ordering::Equal => quotient.low() & 1 == 1,
            Ordering::Less => false,
        },
        RoundingMode::ToNearestTiesAway => remainder >= half,
        RoundingMode::ToZero => false,
        RoundingMode::ToPositiveInfinity => !negative,
        RoundingMode::ToNegativeInfinity => negative,
    };

    if away_from_zero {
        quotient + Int128::ONE
    } else {
        quotient
    }
}
