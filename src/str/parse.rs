use crate::{
    constants::{INT128_MAX_DIGITS, INT128_MIN_DIGITS, MAX_PARSE_DIGITS, MAX_SCALE_U32, POWERS_10},
    error::{tail_error, Error},
    int128::Int128,
    ops::common::fits_u96,
    Decimal,
};

// Digits gathered into a native word before they are folded into the mantissa.
const BATCH_DIGITS: usize = 9;

/// Accumulates decimal digits into a mantissa, a native word at a time.
struct DigitAccumulator {
    mantissa: Int128,
    batch: u32,
    batch_len: usize,
}

impl DigitAccumulator {
    const fn new() -> Self {
        DigitAccumulator {
            mantissa: Int128::ZERO,
            batch: 0,
            batch_len: 0,
        }
    }

    #[inline]
    fn push(&mut self, digit: u8) {
        self.batch = self.batch * 10 + digit as u32;
        self.batch_len += 1;
        if self.batch_len == BATCH_DIGITS {
            self.flush();
        }
    }

    #[inline]
    fn flush(&mut self) {
        if self.batch_len > 0 {
            self.mantissa = self.mantissa * Int128::from(POWERS_10[self.batch_len]) + Int128::from(self.batch);
            self.batch = 0;
            self.batch_len = 0;
        }
    }

    fn is_zero(&self) -> bool {
        self.mantissa.is_zero() && self.batch == 0
    }

    fn finish(mut self) -> Int128 {
        self.flush();
        self.mantissa
    }
}

/// Parses a plain decimal literal: an optional sign, digits and at most one decimal point.
///
/// Digits beyond the 29th significant one are dropped, as are fractional digits beyond
/// the 28th. A mantissa that still exceeds 96 bits loses digits from its least
/// significant end, fractional digits first.
pub(crate) fn parse_decimal(value: &str) -> Result<Decimal, Error> {
    let bytes = value.as_bytes();
    let (negative, rest) = match bytes {
        [] => return tail_error("Invalid decimal: empty"),
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, bytes),
    };

    let mut digits = DigitAccumulator::new();
    let mut scale = 0u32;
    let mut significant = 0u32;
    let mut point = false;
    let mut has_digits = false;
    for &b in rest {
        match b {
            b'0'..=b'9' => {
                has_digits = true;
                let digit = b - b'0';
                if !point {
                    // Leading zeros are not significant
                    if digit == 0 && digits.is_zero() {
                        continue;
                    }
                    if significant < MAX_PARSE_DIGITS {
                        digits.push(digit);
                        significant += 1;
                    }
                } else if scale < MAX_SCALE_U32 && significant < MAX_PARSE_DIGITS {
                    digits.push(digit);
                    scale += 1;
                    if !digits.is_zero() {
                        significant += 1;
                    }
                }
            }
            b'.' if !point => point = true,
            b'.' => return tail_error("Invalid decimal: two decimal points"),
            _ => return tail_error("Invalid decimal: unknown character"),
        }
    }
    if !has_digits {
        return tail_error("Invalid decimal: no digits found");
    }

    let mut mantissa = digits.finish();
    while !fits_u96(&mantissa) {
        mantissa = mantissa.div_rem(Int128::TEN).0;
        scale = scale.saturating_sub(1);
    }
    Ok(Decimal::from_unsigned_mantissa(mantissa, scale, negative).normalize())
}

/// Parses an optional sign followed by decimal digits. Magnitudes outside the 128 bit
/// range are rejected, the minimum value itself included.
pub(crate) fn parse_int128(value: &str) -> Result<Int128, Error> {
    let bytes = value.as_bytes();
    let (negative, digits) = match bytes {
        [] => return tail_error("Invalid integer: empty"),
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() {
        return tail_error("Invalid integer: no digits found");
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return tail_error("Invalid integer: unknown character");
    }

    let start = digits.iter().position(|b| *b != b'0').unwrap_or(digits.len());
    let significant = &digits[start..];
    let limit = if negative { INT128_MIN_DIGITS } else { INT128_MAX_DIGITS }.as_bytes();
    if significant.len() > limit.len() || (significant.len() == limit.len() && significant > limit) {
        return tail_error("Invalid integer: out of range");
    }

    // Negative values accumulate downwards so the minimum never needs a positive form
    let mut result = Int128::ZERO;
    for b in significant {
        let digit = Int128::from(b - b'0');
        result = if negative {
            result * Int128::TEN - digit
        } else {
            result * Int128::TEN + digit
        };
    }
    Ok(result)
}
