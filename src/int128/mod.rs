//! A 128 bit two's complement integer.
//!
//! The value is stored by one of two interchangeable backends. By default it is a native
//! `i128`; with the `portable-int128` feature it is a pair of 64 bit words and every
//! operation is composed from 64 bit arithmetic. Both produce identical results.

mod cmp;
#[cfg_attr(feature = "portable-int128", allow(dead_code))]
mod native;
#[cfg_attr(not(feature = "portable-int128"), allow(dead_code))]
mod portable;

use crate::{constants::MAX_INT128_STR_BUFFER_SIZE, Decimal, Error};
use arrayvec::ArrayString;
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
    str::FromStr,
};
use num_traits::{Bounded, FromPrimitive, One, ToPrimitive, Zero};

pub(crate) use cmp::ExactInt128Cmp;

#[cfg(not(feature = "portable-int128"))]
type Repr = native::NativeWord;
#[cfg(feature = "portable-int128")]
type Repr = portable::SplitWord;

/// The primitive operations a 128 bit storage backend provides. Everything signed is
/// built on top of these once, in `Int128`.
pub(crate) trait WideWord: Copy {
    const ZERO: Self;

    #[cfg(test)]
    fn from_words(low: u64, high: u64) -> Self;
    fn low(self) -> u64;
    fn high(self) -> u64;
    fn wrapping_add(self, other: Self) -> Self;
    fn wrapping_sub(self, other: Self) -> Self;
    fn wrapping_mul(self, other: Self) -> Self;
    fn cmp_signed(self, other: Self) -> Ordering;
    fn cmp_unsigned(self, other: Self) -> Ordering;
    /// Treats both values as unsigned. `divisor` must be non-zero.
    fn div_rem_unsigned(self, divisor: Self) -> (Self, Self);
    fn leading_zeros(self) -> u32;
    /// Logical shifts, `bits` must be below 128.
    fn shl(self, bits: u32) -> Self;
    fn shr(self, bits: u32) -> Self;

    #[inline]
    fn wrapping_neg(self) -> Self {
        Self::ZERO.wrapping_sub(self)
    }
}

/// `Int128` is a signed 128 bit integer with two's complement wraparound semantics.
///
/// Addition, subtraction, multiplication and negation wrap silently. Division and
/// remainder truncate toward zero and panic when the divisor is zero; use
/// [`Int128::checked_div`] or [`Int128::try_div`] to handle that case.
///
/// ```
/// use wide_decimal::Int128;
///
/// let a: Int128 = "20000000000000000000000000000000000000".parse().unwrap();
/// let b = Int128::from(1416666666666666665u64);
/// assert_eq!((a / b).to_string(), "14117647058823529428");
/// ```
#[derive(Clone, Copy)]
pub struct Int128(Repr);

impl Int128 {
    /// The value 0.
    pub const ZERO: Int128 = Int128::from_words(0, 0);
    /// The value 1.
    pub const ONE: Int128 = Int128::from_words(1, 0);
    /// The smallest value, -2^127.
    pub const MIN: Int128 = Int128::from_words(0, 1 << 63);
    /// The largest value, 2^127 - 1.
    pub const MAX: Int128 = Int128::from_words(u64::MAX, u64::MAX >> 1);

    pub(crate) const TEN: Int128 = Int128::from_words(10, 0);

    /// Builds a value from its low and high 64 bit words.
    ///
    /// ```
    /// use wide_decimal::Int128;
    ///
    /// assert_eq!(Int128::from_words(0, 1).to_string(), "18446744073709551616");
    /// assert_eq!(Int128::from_words(u64::MAX, u64::MAX), Int128::from(-1));
    /// ```
    #[must_use]
    pub const fn from_words(low: u64, high: u64) -> Int128 {
        Int128(Repr::new(low, high))
    }

    /// The least significant 64 bits.
    #[inline]
    pub fn low(&self) -> u64 {
        self.0.low()
    }

    /// The most significant 64 bits, including the sign bit.
    #[inline]
    pub fn high(&self) -> u64 {
        self.0.high()
    }

    /// The value as four 32 bit words, least significant first.
    #[must_use]
    pub fn to_bits(&self) -> [u32; 4] {
        let (low, high) = (self.low(), self.high());
        [low as u32, (low >> 32) as u32, high as u32, (high >> 32) as u32]
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        (self.high() as i64) < 0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.low() == 0 && self.high() == 0
    }

    /// The absolute value. `Int128::MIN.abs()` wraps to `Int128::MIN`.
    #[must_use]
    pub fn abs(&self) -> Int128 {
        if self.is_negative() {
            -*self
        } else {
            *self
        }
    }

    /// Returns -1, 0 or 1 depending on the sign of the value.
    #[must_use]
    pub fn signum(&self) -> Int128 {
        if self.is_negative() {
            -Int128::ONE
        } else if self.is_zero() {
            Int128::ZERO
        } else {
            Int128::ONE
        }
    }

    /// Checked division. Returns `None` if `other == 0`. `Int128::MIN / -1` wraps.
    #[must_use]
    pub fn checked_div(self, other: Int128) -> Option<Int128> {
        if other.is_zero() {
            None
        } else {
            Some(self.div_rem(other).0)
        }
    }

    /// Checked remainder. Returns `None` if `other == 0`.
    #[must_use]
    pub fn checked_rem(self, other: Int128) -> Option<Int128> {
        if other.is_zero() {
            None
        } else {
            Some(self.div_rem(other).1)
        }
    }

    /// Division reporting a zero divisor as [`Error::DivisionByZero`].
    pub fn try_div(self, other: Int128) -> Result<Int128, Error> {
        self.checked_div(other).ok_or(Error::DivisionByZero)
    }

    /// Remainder reporting a zero divisor as [`Error::DivisionByZero`].
    pub fn try_rem(self, other: Int128) -> Result<Int128, Error> {
        self.checked_rem(other).ok_or(Error::DivisionByZero)
    }

    /// Parses a decimal literal, returning `None` rather than an error on failure.
    ///
    /// ```
    /// use wide_decimal::Int128;
    ///
    /// assert_eq!(Int128::parse_opt("-42"), Some(Int128::from(-42)));
    /// assert_eq!(Int128::parse_opt("4.2"), None);
    /// ```
    #[must_use]
    pub fn parse_opt(s: &str) -> Option<Int128> {
        crate::str::parse_int128(s).ok()
    }

    /// Truncated signed division. The divisor must be non-zero.
    pub(crate) fn div_rem(self, other: Int128) -> (Int128, Int128) {
        let (negative_lhs, negative_rhs) = (self.is_negative(), other.is_negative());
        let (q, r) = self.unsigned_abs().0.div_rem_unsigned(other.unsigned_abs().0);
        let q = if negative_lhs != negative_rhs { q.wrapping_neg() } else { q };
        let r = if negative_lhs { r.wrapping_neg() } else { r };
        (Int128(q), Int128(r))
    }

    /// Division treating both bit patterns as unsigned. The divisor must be non-zero.
    #[inline]
    pub(crate) fn unsigned_div_rem(self, other: Int128) -> (Int128, Int128) {
        let (q, r) = self.0.div_rem_unsigned(other.0);
        (Int128(q), Int128(r))
    }

    /// The magnitude as an unsigned bit pattern; `MIN` maps to 2^127.
    #[inline]
    pub(crate) fn unsigned_abs(self) -> Int128 {
        if self.is_negative() {
            Int128(self.0.wrapping_neg())
        } else {
            self
        }
    }

    /// Number of significant bits of the unsigned bit pattern.
    #[inline]
    pub(crate) fn bit_length(&self) -> u32 {
        128 - self.0.leading_zeros()
    }

    #[inline]
    pub(crate) fn shl(self, bits: u32) -> Int128 {
        Int128(self.0.shl(bits))
    }

    #[inline]
    pub(crate) fn shr(self, bits: u32) -> Int128 {
        Int128(self.0.shr(bits))
    }

    #[inline]
    pub(crate) fn cmp_unsigned(&self, other: &Int128) -> Ordering {
        self.0.cmp_unsigned(other.0)
    }
}

impl Default for Int128 {
    fn default() -> Self {
        Int128::ZERO
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Int128 {
                #[inline]
                fn from(t: $t) -> Self {
                    let value = t as i64;
                    Int128::from_words(value as u64, if value < 0 { u64::MAX } else { 0 })
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Int128 {
                #[inline]
                fn from(t: $t) -> Self {
                    Int128::from_words(t as u64, 0)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<i128> for Int128 {
    #[inline]
    fn from(value: i128) -> Self {
        Int128::from_words(value as u64, (value >> 64) as u64)
    }
}

impl From<Int128> for i128 {
    #[inline]
    fn from(value: Int128) -> Self {
        (((value.high() as u128) << 64) | value.low() as u128) as i128
    }
}

/// Splits a finite float into its integer part, truncated toward zero, and whether a
/// non-zero fraction was discarded. Returns `None` when the integer part does not fit.
pub(crate) fn split_f64(value: f64) -> Option<(Int128, bool)> {
    let bits = value.to_bits();
    let negative = bits >> 63 != 0;
    let exponent = ((bits >> 52) & 0x7FF) as i32;
    let fraction = bits & ((1 << 52) - 1);
    if exponent == 0 {
        // Zero or subnormal
        return Some((Int128::ZERO, fraction != 0));
    }
    let mantissa = fraction | (1 << 52);
    let shift = exponent - 1075;
    let (magnitude, has_fraction) = if shift >= 0 {
        // 53 significant bits shifted left must stay below bit 127
        if shift + 53 > 127 {
            if negative && shift + 53 == 128 && fraction == 0 {
                return Some((Int128::MIN, false));
            }
            return None;
        }
        (Int128::from(mantissa).shl(shift as u32), false)
    } else {
        let shift = -shift as u32;
        if shift >= 53 {
            (Int128::ZERO, true)
        } else {
            (Int128::from(mantissa >> shift), mantissa & ((1 << shift) - 1) != 0)
        }
    };
    Some((if negative { -magnitude } else { magnitude }, has_fraction))
}

impl From<f64> for Int128 {
    /// Truncates toward zero. NaN and infinities become zero, out of range values saturate.
    fn from(value: f64) -> Self {
        if !value.is_finite() {
            return Int128::ZERO;
        }
        match split_f64(value) {
            Some((int, _)) => int,
            None if value < 0.0 => Int128::MIN,
            None => Int128::MAX,
        }
    }
}

impl From<f32> for Int128 {
    fn from(value: f32) -> Self {
        Int128::from(value as f64)
    }
}

impl From<Decimal> for Int128 {
    /// The integer part of the decimal, truncated toward zero.
    fn from(value: Decimal) -> Self {
        Int128::from(&value)
    }
}

impl<'a> From<&'a Decimal> for Int128 {
    fn from(value: &'a Decimal) -> Self {
        let mantissa = value.unsigned_mantissa();
        let int = if value.scale() == 0 {
            mantissa
        } else {
            mantissa.div_rem(crate::ops::common::pow10(value.scale())).0
        };
        if value.is_sign_negative() {
            -int
        } else {
            int
        }
    }
}

impl PartialEq for Int128 {
    #[inline]
    fn eq(&self, other: &Int128) -> bool {
        self.low() == other.low() && self.high() == other.high()
    }
}

impl Eq for Int128 {}

impl PartialOrd for Int128 {
    #[inline]
    fn partial_cmp(&self, other: &Int128) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Int128 {
    #[inline]
    fn cmp(&self, other: &Int128) -> Ordering {
        self.0.cmp_signed(other.0)
    }
}

impl Hash for Int128 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.low().hash(state);
        self.high().hash(state);
    }
}

impl Neg for Int128 {
    type Output = Int128;

    #[inline]
    fn neg(self) -> Int128 {
        Int128(self.0.wrapping_neg())
    }
}

impl<'a> Neg for &'a Int128 {
    type Output = Int128;

    #[inline]
    fn neg(self) -> Int128 {
        Int128(self.0.wrapping_neg())
    }
}

impl<'a, 'b> Add<&'b Int128> for &'a Int128 {
    type Output = Int128;

    #[inline]
    fn add(self, other: &Int128) -> Int128 {
        Int128(self.0.wrapping_add(other.0))
    }
}

impl<'a, 'b> Sub<&'b Int128> for &'a Int128 {
    type Output = Int128;

    #[inline]
    fn sub(self, other: &Int128) -> Int128 {
        Int128(self.0.wrapping_sub(other.0))
    }
}

impl<'a, 'b> Mul<&'b Int128> for &'a Int128 {
    type Output = Int128;

    #[inline]
    fn mul(self, other: &Int128) -> Int128 {
        Int128(self.0.wrapping_mul(other.0))
    }
}

impl<'a, 'b> Div<&'b Int128> for &'a Int128 {
    type Output = Int128;

    fn div(self, other: &Int128) -> Int128 {
        match self.checked_div(*other) {
            Some(quotient) => quotient,
            None => panic!("Division by zero"),
        }
    }
}

impl<'a, 'b> Rem<&'b Int128> for &'a Int128 {
    type Output = Int128;

    fn rem(self, other: &Int128) -> Int128 {
        match self.checked_rem(*other) {
            Some(remainder) => remainder,
            None => panic!("Division by zero"),
        }
    }
}

forward_all_binop!(impl Add for Int128, add);
forward_all_binop!(impl Sub for Int128, sub);
forward_all_binop!(impl Mul for Int128, mul);
forward_all_binop!(impl Div for Int128, div);
forward_all_binop!(impl Rem for Int128, rem);
forward_assign_op!(impl AddAssign for Int128, add_assign, add);
forward_assign_op!(impl SubAssign for Int128, sub_assign, sub);
forward_assign_op!(impl MulAssign for Int128, mul_assign, mul);
forward_assign_op!(impl DivAssign for Int128, div_assign, div);
forward_assign_op!(impl RemAssign for Int128, rem_assign, rem);

impl Sum for Int128 {
    fn sum<I: Iterator<Item = Int128>>(iter: I) -> Self {
        iter.fold(Int128::ZERO, |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Int128> for Int128 {
    fn sum<I: Iterator<Item = &'a Int128>>(iter: I) -> Self {
        iter.fold(Int128::ZERO, |acc, v| acc + v)
    }
}

impl Product for Int128 {
    fn product<I: Iterator<Item = Int128>>(iter: I) -> Self {
        iter.fold(Int128::ONE, |acc, v| acc * v)
    }
}

impl FromStr for Int128 {
    type Err = Error;

    fn from_str(value: &str) -> Result<Int128, Self::Err> {
        crate::str::parse_int128(value)
    }
}

impl fmt::Display for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = crate::str::int128_to_str(self);
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl fmt::Debug for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Zero for Int128 {
    fn zero() -> Int128 {
        Int128::ZERO
    }

    fn is_zero(&self) -> bool {
        Int128::is_zero(self)
    }
}

impl One for Int128 {
    fn one() -> Int128 {
        Int128::ONE
    }
}

impl Bounded for Int128 {
    fn min_value() -> Int128 {
        Int128::MIN
    }

    fn max_value() -> Int128 {
        Int128::MAX
    }
}

impl FromPrimitive for Int128 {
    fn from_i64(n: i64) -> Option<Int128> {
        Some(Int128::from(n))
    }

    fn from_u64(n: u64) -> Option<Int128> {
        Some(Int128::from(n))
    }

    fn from_i128(n: i128) -> Option<Int128> {
        Some(Int128::from(n))
    }

    fn from_u128(n: u128) -> Option<Int128> {
        if n >> 127 == 0 {
            Some(Int128::from_words(n as u64, (n >> 64) as u64))
        } else {
            None
        }
    }

    fn from_f64(n: f64) -> Option<Int128> {
        if n.is_finite() {
            split_f64(n).map(|(int, _)| int)
        } else {
            None
        }
    }
}

impl ToPrimitive for Int128 {
    fn to_i64(&self) -> Option<i64> {
        let low = self.low() as i64;
        let sign_extension = if low < 0 { u64::MAX } else { 0 };
        if self.high() == sign_extension {
            Some(low)
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        if self.high() == 0 {
            Some(self.low())
        } else {
            None
        }
    }

    fn to_i128(&self) -> Option<i128> {
        Some(i128::from(*self))
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_negative() {
            None
        } else {
            Some(i128::from(*self) as u128)
        }
    }

    fn to_f64(&self) -> Option<f64> {
        // Route through the exact decimal rendering so the result is correctly rounded.
        let mut buffer = ArrayString::<MAX_INT128_STR_BUFFER_SIZE>::new();
        if self.is_negative() {
            buffer.push('-');
        }
        buffer.push_str(&crate::str::int128_to_str(self));
        buffer.parse::<f64>().ok()
    }
}
