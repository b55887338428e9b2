use super::{split_f64, Int128};
use crate::{constants::U96_MAX, Decimal};
use core::cmp::Ordering;

/// Exact ordering of an `Int128` against another numeric type.
pub(crate) trait ExactInt128Cmp: Copy {
    /// Orders `value` relative to `self`. `None` when the two are unordered (NaN).
    fn cmp_int128(&self, value: &Int128) -> Option<Ordering>;
}

macro_rules! impl_exact_cmp_lossless {
    ($($t:ty),*) => {
        $(
            impl ExactInt128Cmp for $t {
                #[inline]
                fn cmp_int128(&self, value: &Int128) -> Option<Ordering> {
                    Some(value.cmp(&Int128::from(*self)))
                }
            }
        )*
    };
}

impl_exact_cmp_lossless!(i8, i16, i32, i64, isize, i128, u8, u16, u32, u64, usize);

impl ExactInt128Cmp for u128 {
    fn cmp_int128(&self, value: &Int128) -> Option<Ordering> {
        // Negative values, and every Int128 when the operand is above Int128::MAX, are less.
        if value.is_negative() || *self >> 127 != 0 {
            return Some(Ordering::Less);
        }
        Some(value.cmp(&Int128::from_words(*self as u64, (*self >> 64) as u64)))
    }
}

impl ExactInt128Cmp for f64 {
    fn cmp_int128(&self, value: &Int128) -> Option<Ordering> {
        if self.is_nan() {
            return None;
        }
        if self.is_infinite() {
            return Some(if *self > 0.0 { Ordering::Less } else { Ordering::Greater });
        }
        match split_f64(*self) {
            Some((int, has_fraction)) => Some(value.cmp(&int).then(if !has_fraction {
                Ordering::Equal
            } else if *self > 0.0 {
                Ordering::Less
            } else {
                Ordering::Greater
            })),
            None if *self > 0.0 => Some(Ordering::Less),
            None => Some(Ordering::Greater),
        }
    }
}

impl ExactInt128Cmp for f32 {
    #[inline]
    fn cmp_int128(&self, value: &Int128) -> Option<Ordering> {
        (*self as f64).cmp_int128(value)
    }
}

impl ExactInt128Cmp for Decimal {
    fn cmp_int128(&self, value: &Int128) -> Option<Ordering> {
        // Anything beyond the decimal range is ordered by its sign alone.
        if value.unsigned_abs().cmp_unsigned(&U96_MAX) == Ordering::Greater {
            return Some(if value.is_negative() { Ordering::Less } else { Ordering::Greater });
        }
        let magnitude = value.unsigned_abs();
        let as_decimal = Decimal::from_unsigned_mantissa(magnitude, 0, value.is_negative());
        Some(as_decimal.cmp(self))
    }
}

macro_rules! impl_int128_cmp {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for Int128 {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    other.cmp_int128(self) == Some(Ordering::Equal)
                }
            }

            impl PartialEq<Int128> for $t {
                #[inline]
                fn eq(&self, other: &Int128) -> bool {
                    self.cmp_int128(other) == Some(Ordering::Equal)
                }
            }

            impl PartialOrd<$t> for Int128 {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    other.cmp_int128(self)
                }
            }

            impl PartialOrd<Int128> for $t {
                #[inline]
                fn partial_cmp(&self, other: &Int128) -> Option<Ordering> {
                    self.cmp_int128(other).map(Ordering::reverse)
                }
            }
        )*
    };
}

impl_int128_cmp!(i8, i16, i32, i64, isize, i128, u8, u16, u32, u64, usize, u128, f32, f64, Decimal);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negative_values_are_less_than_unsigned() {
        let minus_one = Int128::from(-1);
        assert!(minus_one < 0u64);
        assert!(minus_one != u64::MAX);
        assert!(minus_one < u128::MAX);
        assert!(Int128::MIN < 0u8);
        assert!(Int128::MAX < u128::MAX);
    }

    #[test]
    fn it_compares_floats_exactly() {
        let two = Int128::from(2);
        assert!(two < 2.5f64);
        assert!(two > 1.9999f64);
        assert!(two == 2.0f64);
        assert!(Int128::from(-2) > -2.5f64);
        assert!(Int128::from(-3) < -2.5f64);
        assert!(Int128::MAX < f64::INFINITY);
        assert!(Int128::MIN > f64::NEG_INFINITY);
        assert!(Int128::MAX < 1e39f64);
        assert!(Int128::MIN > -1e39f64);
    }

    #[test]
    fn nan_is_unordered() {
        let zero = Int128::ZERO;
        assert!(!(zero < f64::NAN));
        assert!(!(zero <= f64::NAN));
        assert!(!(zero > f64::NAN));
        assert!(!(zero >= f64::NAN));
        assert!(!(zero == f64::NAN));
        assert!(zero != f64::NAN);
        assert_eq!(f32::NAN.partial_cmp(&zero), None);
    }
}
