use super::WideWord;
use core::cmp::Ordering;

/// Backend storing the value in a single machine `i128`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NativeWord(i128);

impl NativeWord {
    pub(crate) const fn new(low: u64, high: u64) -> Self {
        NativeWord((((high as u128) << 64) | low as u128) as i128)
    }
}

impl WideWord for NativeWord {
    const ZERO: Self = NativeWord(0);

    #[cfg(test)]
    #[inline]
    fn from_words(low: u64, high: u64) -> Self {
        Self::new(low, high)
    }

    #[inline]
    fn low(self) -> u64 {
        self.0 as u64
    }

    #[inline]
    fn high(self) -> u64 {
        (self.0 >> 64) as u64
    }

    #[inline]
    fn wrapping_add(self, other: Self) -> Self {
        NativeWord(self.0.wrapping_add(other.0))
    }

    #[inline]
    fn wrapping_sub(self, other: Self) -> Self {
        NativeWord(self.0.wrapping_sub(other.0))
    }

    #[inline]
    fn wrapping_mul(self, other: Self) -> Self {
        NativeWord(self.0.wrapping_mul(other.0))
    }

    #[inline]
    fn cmp_signed(self, other: Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    #[inline]
    fn cmp_unsigned(self, other: Self) -> Ordering {
        (self.0 as u128).cmp(&(other.0 as u128))
    }

    #[inline]
    fn div_rem_unsigned(self, divisor: Self) -> (Self, Self) {
        let (a, b) = (self.0 as u128, divisor.0 as u128);
        (NativeWord((a / b) as i128), NativeWord((a % b) as i128))
    }

    #[inline]
    fn leading_zeros(self) -> u32 {
        (self.0 as u128).leading_zeros()
    }

    #[inline]
    fn shl(self, bits: u32) -> Self {
        NativeWord(((self.0 as u128) << bits) as i128)
    }

    #[inline]
    fn shr(self, bits: u32) -> Self {
        NativeWord(((self.0 as u128) >> bits) as i128)
    }
}
