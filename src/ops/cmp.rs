use crate::constants::U96_MAX;
use crate::int128::{ExactInt128Cmp, Int128};
use crate::Decimal;
use core::cmp::Ordering;

pub(crate) fn cmp_impl(d1: &Decimal, d2: &Decimal) -> Ordering {
    // Zero is always positive zero for ordering purposes
    match (d1.is_zero(), d2.is_zero()) {
        (true, true) => return Ordering::Equal,
        (true, false) => {
            return if d2.is_sign_negative() {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        (false, true) => {
            return if d1.is_sign_negative() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        (false, false) => {}
    }

    let negative = d1.is_sign_negative();
    if negative != d2.is_sign_negative() {
        return if negative { Ordering::Less } else { Ordering::Greater };
    }

    let ordering = cmp_magnitude(d1, d2);
    if negative {
        ordering.reverse()
    } else {
        ordering
    }
}

fn cmp_magnitude(d1: &Decimal, d2: &Decimal) -> Ordering {
    let (left, left_scale) = (d1.unsigned_mantissa(), d1.scale());
    let (right, right_scale) = (d2.unsigned_mantissa(), d2.scale());
    match left_scale.cmp(&right_scale) {
        Ordering::Equal => left.cmp(&right),
        Ordering::Less => cmp_scaled_up(left, right_scale - left_scale, right),
        Ordering::Greater => cmp_scaled_up(right, left_scale - right_scale, left).reverse(),
    }
}

// Compares `value * 10^digits` against a 96 bit `other`. Once the scaled value leaves
// 96 bits it must be the larger.
fn cmp_scaled_up(mut value: Int128, digits: u32, other: Int128) -> Ordering {
    for _ in 0..digits {
        value *= Int128::TEN;
        if value > U96_MAX {
            return Ordering::Greater;
        }
    }
    value.cmp(&other)
}

/// Exact ordering of a `Decimal` against another numeric type.
pub(crate) trait ExactDecimalCmp: Copy {
    /// Orders `value` relative to `self`. `None` when the two are unordered (NaN).
    fn cmp_decimal(&self, value: &Decimal) -> Option<Ordering>;
}

macro_rules! impl_exact_cmp_integer {
    ($($t:ty),*) => {
        $(
            impl ExactDecimalCmp for $t {
                #[inline]
                fn cmp_decimal(&self, value: &Decimal) -> Option<Ordering> {
                    Some(value.cmp(&Decimal::from(*self)))
                }
            }
        )*
    };
}

impl_exact_cmp_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ExactDecimalCmp for i128 {
    fn cmp_decimal(&self, value: &Decimal) -> Option<Ordering> {
        value.cmp_int128(&Int128::from(*self)).map(Ordering::reverse)
    }
}

impl ExactDecimalCmp for u128 {
    fn cmp_decimal(&self, value: &Decimal) -> Option<Ordering> {
        if *self >> 127 != 0 {
            return Some(Ordering::Less);
        }
        (*self as i128).cmp_decimal(value)
    }
}

// 2^96, the first magnitude a decimal cannot hold.
const DECIMAL_RANGE_F64: f64 = 79228162514264337593543950336.0;

macro_rules! impl_exact_cmp_float {
    ($($t:ty),*) => {
        $(
            impl ExactDecimalCmp for $t {
                fn cmp_decimal(&self, value: &Decimal) -> Option<Ordering> {
                    if self.is_nan() {
                        return None;
                    }
                    let wide = *self as f64;
                    if wide >= DECIMAL_RANGE_F64 {
                        return Some(Ordering::Less);
                    }
                    if wide <= -DECIMAL_RANGE_F64 {
                        return Some(Ordering::Greater);
                    }
                    let converted = Decimal::from(*self);
                    // Magnitudes below 10^-29 convert to zero but still sit on one side of it
                    if converted.is_zero() && value.is_zero() && wide != 0.0 {
                        return Some(if wide > 0.0 { Ordering::Less } else { Ordering::Greater });
                    }
                    Some(value.cmp(&converted))
                }
            }
        )*
    };
}

impl_exact_cmp_float!(f32, f64);

macro_rules! impl_decimal_cmp {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for Decimal {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    other.cmp_decimal(self) == Some(Ordering::Equal)
                }
            }

            impl PartialEq<Decimal> for $t {
                #[inline]
                fn eq(&self, other: &Decimal) -> bool {
                    self.cmp_decimal(other) == Some(Ordering::Equal)
                }
            }

            impl PartialOrd<$t> for Decimal {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    other.cmp_decimal(self)
                }
            }

            impl PartialOrd<Decimal> for $t {
                #[inline]
                fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
                    self.cmp_decimal(other).map(Ordering::reverse)
                }
            }
        )*
    };
}

impl_decimal_cmp!(i8, i16, i32, i64, isize, i128, u8, u16, u32, u64, usize, u128, f32, f64);
