use crate::constants::{INT128_POWERS_10, SCALE_UP_LIMIT, U96_MAX};
use crate::{int128::Int128, Decimal};
use core::cmp::Ordering;

#[derive(Debug)]
pub(crate) enum CalculationResult {
    Ok(Decimal),
    Overflow,
    DivByZero,
}

/// 10^exp for exp in 0..=38.
#[inline]
pub(crate) fn pow10(exp: u32) -> Int128 {
    INT128_POWERS_10[exp as usize]
}

/// Whether a non-negative working mantissa fits in 96 bits.
#[inline]
pub(crate) fn fits_u96(value: &Int128) -> bool {
    value.cmp_unsigned(&U96_MAX) != Ordering::Greater
}

/// Reduces a non-negative working mantissa to 96 bits by giving up scale one digit at a
/// time. The last discarded digit decides the rounding, half up; `round_up` carries a
/// pending round from an earlier reduction. Returns `None` once no scale is left to give.
pub(crate) fn reduce_to_u96(mut mantissa: Int128, mut scale: u32, mut round_up: bool) -> Option<(Int128, u32)> {
    loop {
        while !fits_u96(&mantissa) {
            if scale == 0 {
                return None;
            }
            let (quotient, remainder) = mantissa.div_rem(Int128::TEN);
            mantissa = quotient;
            round_up = remainder.low() >= 5;
            scale -= 1;
        }
        if !round_up {
            return Some((mantissa, scale));
        }
        mantissa += Int128::ONE;
        round_up = false;
    }
}

/// Multiplies a non-negative mantissa by ten until it reaches `target` scale or would
/// leave the working range. Returns the mantissa and the scale it got to.
pub(crate) fn scale_up(mut mantissa: Int128, mut scale: u32, target: u32) -> (Int128, u32) {
    while scale < target && mantissa <= SCALE_UP_LIMIT {
        mantissa *= Int128::TEN;
        scale += 1;
    }
    (mantissa, scale)
}

/// Six 32 bit limbs, wide enough for the full product of two 96 bit mantissas.
pub(crate) struct Buf24 {
    pub data: [u32; 6],
}

impl Buf24 {
    pub fn new(value: &Int128) -> Self {
        let bits = value.to_bits();
        Buf24 {
            data: [bits[0], bits[1], bits[2], bits[3], 0, 0],
        }
    }

    pub fn product(left: &Int128, right: &Int128) -> Self {
        let a = left.to_bits();
        let b = right.to_bits();
        let mut data = [0u32; 6];
        for i in 0..3 {
            let mut carry = 0u64;
            for j in 0..3 {
                let t = a[i] as u64 * b[j] as u64 + data[i + j] as u64 + carry;
                data[i + j] = t as u32;
                carry = t >> 32;
            }
            data[i + 3] = carry as u32;
        }
        Buf24 { data }
    }

    /// Multiplies in place. The caller keeps the product within 192 bits.
    pub fn mul_by_u32(&mut self, factor: u32) {
        let mut carry = 0u64;
        for limb in self.data.iter_mut() {
            let t = *limb as u64 * factor as u64 + carry;
            *limb = t as u32;
            carry = t >> 32;
        }
    }

    pub fn add_int128(&mut self, value: &Int128) {
        let bits = value.to_bits();
        let mut carry = 0u64;
        for (i, limb) in self.data.iter_mut().enumerate() {
            let t = *limb as u64 + bits.get(i).copied().unwrap_or(0) as u64 + carry;
            *limb = t as u32;
            carry = t >> 32;
        }
    }

    /// Subtracts in place. The caller guarantees `value` is not larger than the buffer.
    pub fn sub_int128(&mut self, value: &Int128) {
        let bits = value.to_bits();
        let mut borrow = 0i64;
        for (i, limb) in self.data.iter_mut().enumerate() {
            let t = *limb as i64 - bits.get(i).copied().unwrap_or(0) as i64 - borrow;
            *limb = t as u32;
            borrow = (t < 0) as i64;
        }
    }

    /// Sheds decimal digits until the value fits a non-negative `Int128`, truncating.
    /// Also returns whether the last shed digit calls for a half-up round, or `None` if
    /// no scale is left to give.
    pub fn reduce_to_int128(mut self, mut scale: u32) -> Option<(Int128, u32, bool)> {
        let mut round_up = false;
        while !self.fits_int128() {
            if scale == 0 {
                return None;
            }
            round_up = self.div_by_u32(10) >= 5;
            scale -= 1;
        }
        Some((self.to_int128(), scale, round_up))
    }

    /// Divides in place, returning the remainder.
    pub fn div_by_u32(&mut self, divisor: u32) -> u32 {
        let mut remainder = 0u64;
        for limb in self.data.iter_mut().rev() {
            let temp = (remainder << 32) | *limb as u64;
            *limb = (temp / divisor as u64) as u32;
            remainder = temp % divisor as u64;
        }
        remainder as u32
    }

    /// Whether the value is below 2^127 and so fits a non-negative `Int128`.
    pub const fn fits_int128(&self) -> bool {
        self.data[5] == 0 && self.data[4] == 0 && self.data[3] >> 31 == 0
    }

    pub const fn to_int128(&self) -> Int128 {
        Int128::from_words(
            ((self.data[1] as u64) << 32) | self.data[0] as u64,
            ((self.data[3] as u64) << 32) | self.data[2] as u64,
        )
    }
}
