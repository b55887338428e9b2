use super::WideWord;
use crate::constants::U32_MASK;
use core::cmp::Ordering;

const HALF_BASE: u64 = 1 << 32;

/// Backend storing the value as two 64 bit words, for targets without native 128 bit
/// arithmetic. Every operation is built from 64 bit (and for multiplication 32 bit)
/// primitives.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SplitWord {
    low: u64,
    high: u64,
}

impl SplitWord {
    pub(crate) const fn new(low: u64, high: u64) -> Self {
        SplitWord { low, high }
    }
}

impl WideWord for SplitWord {
    const ZERO: Self = SplitWord { low: 0, high: 0 };

    #[cfg(test)]
    #[inline]
    fn from_words(low: u64, high: u64) -> Self {
        Self::new(low, high)
    }

    #[inline]
    fn low(self) -> u64 {
        self.low
    }

    #[inline]
    fn high(self) -> u64 {
        self.high
    }

    #[inline]
    fn wrapping_add(self, other: Self) -> Self {
        let (low, carry) = self.low.overflowing_add(other.low);
        let high = self.high.wrapping_add(other.high).wrapping_add(carry as u64);
        SplitWord { low, high }
    }

    #[inline]
    fn wrapping_sub(self, other: Self) -> Self {
        let (low, borrow) = self.low.overflowing_sub(other.low);
        let high = self.high.wrapping_sub(other.high).wrapping_sub(borrow as u64);
        SplitWord { low, high }
    }

    fn wrapping_mul(self, other: Self) -> Self {
        // Full 64x64 -> 128 product of the low words out of four 32x32 -> 64 products.
        let (a1, a0) = (self.low >> 32, self.low & U32_MASK);
        let (b1, b0) = (other.low >> 32, other.low & U32_MASK);
        let p00 = a0 * b0;
        let p01 = a0 * b1;
        let p10 = a1 * b0;
        let p11 = a1 * b1;
        let mid = (p00 >> 32) + (p01 & U32_MASK) + (p10 & U32_MASK);
        let low = (p00 & U32_MASK) | (mid << 32);
        let high = p11 + (p01 >> 32) + (p10 >> 32) + (mid >> 32);

        // The high x high product only affects bits above 128.
        let cross = self
            .high
            .wrapping_mul(other.low)
            .wrapping_add(self.low.wrapping_mul(other.high));
        SplitWord {
            low,
            high: high.wrapping_add(cross),
        }
    }

    #[inline]
    fn cmp_signed(self, other: Self) -> Ordering {
        (self.high as i64)
            .cmp(&(other.high as i64))
            .then(self.low.cmp(&other.low))
    }

    #[inline]
    fn cmp_unsigned(self, other: Self) -> Ordering {
        self.high.cmp(&other.high).then(self.low.cmp(&other.low))
    }

    fn div_rem_unsigned(self, divisor: Self) -> (Self, Self) {
        if divisor.high == 0 {
            let d = divisor.low;
            if self.high == 0 {
                return (SplitWord::new(self.low / d, 0), SplitWord::new(self.low % d, 0));
            }
            // One word at a time: the high word first, then the remainder and the low word.
            let q_hi = self.high / d;
            let r = self.high % d;
            let (q_lo, rem) = div_128_by_64(r, self.low, d);
            return (SplitWord::new(q_lo, q_hi), SplitWord::new(rem, 0));
        }

        if self.cmp_unsigned(divisor) == Ordering::Less {
            return (Self::ZERO, self);
        }

        // Binary long division. The divisor has a high word so the quotient fits in 64 bits.
        let shift = divisor.leading_zeros() - self.leading_zeros();
        let mut den = divisor.shl(shift);
        let mut rem = self;
        let mut quotient = 0u64;
        for _ in 0..=shift {
            quotient <<= 1;
            if rem.cmp_unsigned(den) != Ordering::Less {
                rem = rem.wrapping_sub(den);
                quotient |= 1;
            }
            den = den.shr(1);
        }
        (SplitWord::new(quotient, 0), rem)
    }

    #[inline]
    fn leading_zeros(self) -> u32 {
        if self.high == 0 {
            64 + self.low.leading_zeros()
        } else {
            self.high.leading_zeros()
        }
    }

    fn shl(self, bits: u32) -> Self {
        match bits {
            0 => self,
            1..=63 => SplitWord {
                low: self.low << bits,
                high: (self.high << bits) | (self.low >> (64 - bits)),
            },
            64..=127 => SplitWord {
                low: 0,
                high: self.low << (bits - 64),
            },
            _ => Self::ZERO,
        }
    }

    fn shr(self, bits: u32) -> Self {
        match bits {
            0 => self,
            1..=63 => SplitWord {
                low: (self.low >> bits) | (self.high << (64 - bits)),
                high: self.high >> bits,
            },
            64..=127 => SplitWord {
                low: self.high >> (bits - 64),
                high: 0,
            },
            _ => Self::ZERO,
        }
    }
}

/// Divides the two word value `hi:lo` by `d`, returning the quotient and remainder.
/// Requires `hi < d` so that the quotient fits in a single word.
///
/// The divisor is normalized so its top bit is set and the division proceeds in two
/// 32 bit digits, estimating each digit from the leading halves and correcting the
/// estimate at most twice.
fn div_128_by_64(hi: u64, lo: u64, d: u64) -> (u64, u64) {
    let s = d.leading_zeros();
    let d = d << s;
    let dn1 = d >> 32;
    let dn0 = d & U32_MASK;

    let un32 = if s == 0 { hi } else { (hi << s) | (lo >> (64 - s)) };
    let un10 = lo << s;
    let un1 = un10 >> 32;
    let un0 = un10 & U32_MASK;

    let mut q1 = un32 / dn1;
    let mut rhat = un32 - q1 * dn1;
    while q1 >= HALF_BASE || q1 * dn0 > (rhat << 32) + un1 {
        q1 -= 1;
        rhat += dn1;
        if rhat >= HALF_BASE {
            break;
        }
    }

    let un21 = (un32 << 32).wrapping_add(un1).wrapping_sub(q1.wrapping_mul(d));

    let mut q0 = un21 / dn1;
    rhat = un21 - q0 * dn1;
    while q0 >= HALF_BASE || q0 * dn0 > (rhat << 32) + un0 {
        q0 -= 1;
        rhat += dn1;
        if rhat >= HALF_BASE {
            break;
        }
    }

    let rem = (un21 << 32).wrapping_add(un0).wrapping_sub(q0.wrapping_mul(d)) >> s;
    ((q1 << 32) | q0, rem)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_divides_two_words_by_one() {
        // 2^64 * 3 + 5 divided by 7
        let (q, r) = div_128_by_64(3, 5, 7);
        let expected = ((3u128 << 64) + 5) / 7;
        assert_eq!(q as u128, expected);
        assert_eq!(r as u128, ((3u128 << 64) + 5) % 7);
    }

    #[test]
    fn it_divides_with_a_normalized_divisor() {
        let d = u64::MAX - 12;
        let (q, r) = div_128_by_64(d - 1, u64::MAX, d);
        let n = ((d as u128 - 1) << 64) | u64::MAX as u128;
        assert_eq!(q as u128, n / d as u128);
        assert_eq!(r as u128, n % d as u128);
    }

    #[test]
    fn it_divides_by_a_wide_divisor() {
        let n = SplitWord::new(0x1234_5678_9ABC_DEF0, 0x0FED_CBA9_8765_4321);
        let d = SplitWord::new(0xFFFF_0000_FFFF_0000, 0x3);
        let (q, r) = n.div_rem_unsigned(d);
        let nn = (0x0FED_CBA9_8765_4321u128 << 64) | 0x1234_5678_9ABC_DEF0;
        let dd = (0x3u128 << 64) | 0xFFFF_0000_FFFF_0000;
        assert_eq!(((q.high as u128) << 64) | q.low as u128, nn / dd);
        assert_eq!(((r.high as u128) << 64) | r.low as u128, nn % dd);
    }

    #[test]
    fn it_carries_between_words() {
        let a = SplitWord::new(u64::MAX, 0);
        let b = SplitWord::new(1, 0);
        let sum = a.wrapping_add(b);
        assert_eq!((sum.low, sum.high), (0, 1));
        let diff = sum.wrapping_sub(b);
        assert_eq!((diff.low, diff.high), (u64::MAX, 0));
    }

    #[test]
    fn it_multiplies_across_words() {
        let a = SplitWord::new(u64::MAX, 0);
        let product = a.wrapping_mul(a);
        let expected = (u64::MAX as u128) * (u64::MAX as u128);
        assert_eq!(product.low, expected as u64);
        assert_eq!(product.high, (expected >> 64) as u64);
    }
}
