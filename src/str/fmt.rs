use crate::{
    constants::{BIG_POWERS_10, MAX_INT128_STR_BUFFER_SIZE, MAX_SCALE, MAX_STR_BUFFER_SIZE},
    int128::Int128,
    Decimal,
};

use arrayvec::{ArrayString, ArrayVec};

// Digits of a native word chunk when a magnitude still has a high word.
const CHUNK_DIGITS: usize = 19;

/// Pushes the decimal digits of an unsigned magnitude, least significant first. Nothing is
/// pushed for zero.
fn push_digits<const N: usize>(magnitude: Int128, chars: &mut ArrayVec<char, N>) {
    let chunk = Int128::from(BIG_POWERS_10[CHUNK_DIGITS - 1]);
    let mut working = magnitude;
    while working.high() != 0 {
        let (quotient, remainder) = working.unsigned_div_rem(chunk);
        let mut low = remainder.low();
        for _ in 0..CHUNK_DIGITS {
            chars.push(char::from(b'0' + (low % 10) as u8));
            low /= 10;
        }
        working = quotient;
    }
    // Native division from here on
    let mut low = working.low();
    while low != 0 {
        chars.push(char::from(b'0' + (low % 10) as u8));
        low /= 10;
    }
}

/// The digits of the magnitude of `value`, without a sign.
pub(crate) fn int128_to_str(value: &Int128) -> ArrayString<MAX_INT128_STR_BUFFER_SIZE> {
    let mut chars = ArrayVec::<_, MAX_INT128_STR_BUFFER_SIZE>::new();
    push_digits(value.unsigned_abs(), &mut chars);
    let mut rep = ArrayString::new();
    if chars.is_empty() {
        rep.push('0');
    }
    for c in chars.iter().rev() {
        rep.push(*c);
    }
    rep
}

// impl that doesn't allocate for serialization purposes.
pub(crate) fn to_str_internal(
    value: &Decimal,
    append_sign: bool,
    precision: Option<usize>,
) -> (ArrayString<MAX_STR_BUFFER_SIZE>, Option<usize>) {
    // Get the scale - where we need to put the decimal point. Zero renders as "0" whatever
    // its stored scale.
    let scale = if value.is_zero() { 0 } else { value.scale() as usize };

    // Convert to a string and manipulate that (neg at front, inject decimal)
    let mut chars = ArrayVec::<_, MAX_STR_BUFFER_SIZE>::new();
    push_digits(value.unsigned_mantissa(), &mut chars);
    while scale > chars.len() {
        chars.push('0');
    }

    let (prec, additional) = match precision {
        Some(prec) => {
            let max: usize = MAX_SCALE.into();
            if prec > max {
                (max, Some(prec - max))
            } else {
                (prec, None)
            }
        }
        None => (scale, None),
    };

    let len = chars.len();
    let whole_len = len - scale;
    let mut rep = ArrayString::new();
    // Append the negative sign if necessary while also keeping track of the length of an "empty" string representation
    let empty_len = if append_sign && value.is_sign_negative() && !value.is_zero() {
        rep.push('-');
        1
    } else {
        0
    };
    for i in 0..whole_len + prec {
        if i == len - scale {
            if i == 0 {
                rep.push('0');
            }
            rep.push('.');
        }

        if i >= len {
            rep.push('0');
        } else {
            let c = chars[len - i - 1];
            rep.push(c);
        }
    }

    // corner case for when we truncated everything in a low fractional
    if rep.len() == empty_len {
        rep.push('0');
    }

    (rep, additional)
}
