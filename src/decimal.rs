use crate::constants::{
    MAX_SCALE, MAX_SCALE_U32, MAX_STR_BUFFER_SIZE, SCALE_MASK, SCALE_SHIFT, SIGN_MASK, U96_MAX,
};
use crate::error::Error;
use crate::int128::Int128;
use crate::ops::{self, round::round_mantissa, CalculationResult};

use arrayvec::ArrayString;
use core::{
    cmp::Ordering,
    convert::TryFrom,
    fmt,
    fmt::Write,
    hash::{Hash, Hasher},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use num_traits::{Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, One, ToPrimitive, Zero};

// 2^96 as a float. Floats at or beyond this magnitude cannot be represented.
const FLOAT_RANGE: f64 = 79228162514264337593543950336.0;
// Floats below 10^-29 have no digit inside the maximum scale.
const FLOAT_EPSILON: f64 = 1e-29;

/// The rounding applied when a decimal loses digits.
///
/// ```
/// use wide_decimal::{Decimal, RoundingMode};
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("2.5").unwrap();
/// assert_eq!(value.round_dp_with_mode(0, RoundingMode::ToNearest).to_string(), "2");
/// assert_eq!(value.round_dp_with_mode(0, RoundingMode::ToNearestTiesAway).to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to the nearest value, ties go to the even neighbour. Also known as
    /// banker's rounding: 2.5 -> 2, 3.5 -> 4, -2.5 -> -2.
    #[default]
    ToNearest,
    /// Round to the nearest value, ties go away from zero: 2.5 -> 3, -2.5 -> -3.
    ToNearestTiesAway,
    /// Truncate: 2.9 -> 2, -2.9 -> -2.
    ToZero,
    /// Round up toward positive infinity: 2.1 -> 3, -2.9 -> -2.
    ToPositiveInfinity,
    /// Round down toward negative infinity: 2.9 -> 2, -2.1 -> -3.
    ToNegativeInfinity,
}

/// `Decimal` represents a 128 bit representation of a fixed-precision decimal number.
/// The finite set of values of type `Decimal` are of the form m / 10<sup>e</sup>,
/// where m is an integer such that -2<sup>96</sup> < m < 2<sup>96</sup>, and e is an integer
/// between 0 and 28 inclusive.
///
/// Every operation that produces a `Decimal` returns it in normalized form: trailing
/// zeros of the fraction are removed, so `1.50 * 1` is stored as `1.5`.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "c-repr", repr(C))]
#[cfg_attr(feature = "borsh", derive(borsh::BorshSerialize))]
pub struct Decimal {
    // Bits 0-15: unused
    // Bits 16-23: Contains "e", a value between 0-28 that indicates the scale
    // Bits 24-30: unused
    // Bit 31: the sign of the Decimal value, 0 meaning positive and 1 meaning negative.
    flags: u32,
    // The lo, mid, hi, and flags fields contain the representation of the
    // Decimal value as a 96-bit integer.
    hi: u32,
    lo: u32,
    mid: u32,
}

#[inline]
const fn flags(neg: bool, scale: u32) -> u32 {
    (scale << SCALE_SHIFT) | ((neg as u32) << 31)
}

impl Decimal {
    /// The smallest value that can be represented by this decimal type.
    ///
    /// # Examples
    ///
    /// Basic usage:
    /// ```
    /// # use wide_decimal::Decimal;
    /// assert_eq!(Decimal::MIN.to_string(), "-79228162514264337593543950335");
    /// ```
    pub const MIN: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, true, 0);
    /// The largest value that can be represented by this decimal type.
    ///
    /// # Examples
    ///
    /// Basic usage:
    /// ```
    /// # use wide_decimal::Decimal;
    /// assert_eq!(Decimal::MAX.to_string(), "79228162514264337593543950335");
    /// ```
    pub const MAX: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, 0);
    /// A constant representing 0.
    pub const ZERO: Decimal = Decimal::from_parts(0, 0, 0, false, 0);
    /// A constant representing 1.
    pub const ONE: Decimal = Decimal::from_parts(1, 0, 0, false, 0);
    /// A constant representing -1.
    pub const NEGATIVE_ONE: Decimal = Decimal::from_parts(1, 0, 0, true, 0);
    /// A constant representing 2.
    pub const TWO: Decimal = Decimal::from_parts(2, 0, 0, false, 0);
    /// A constant representing 10.
    pub const TEN: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
    /// The smallest positive value, 10<sup>-28</sup>.
    pub const MIN_POSITIVE: Decimal = Decimal::from_parts(1, 0, 0, false, MAX_SCALE_U32);
    /// The maximum supported scale value.
    pub const MAX_SCALE: u32 = MAX_SCALE as u32;

    /// Returns a `Decimal` with a 64 bit `m` representation and corresponding `e` scale.
    ///
    /// # Arguments
    ///
    /// * `num` - An i64 that represents the `m` portion of the decimal number
    /// * `scale` - A u32 representing the `e` portion of the decimal number.
    ///
    /// # Panics
    ///
    /// This function panics if `scale` is > 28.
    ///
    /// # Example
    ///
    /// ```
    /// # use wide_decimal::Decimal;
    /// let pi = Decimal::new(3141, 3);
    /// assert_eq!(pi.to_string(), "3.141");
    /// // Trailing zeros are dropped
    /// assert_eq!(Decimal::new(1500, 3).to_string(), "1.5");
    /// ```
    #[must_use]
    pub fn new(num: i64, scale: u32) -> Decimal {
        match Self::try_new(num, scale) {
            Err(e) => panic!("{}", e),
            Ok(d) => d,
        }
    }

    /// Checked version of [`Decimal::new`]. Will return an error instead of panicking at
    /// run-time.
    ///
    /// # Example
    ///
    /// ```
    /// # use wide_decimal::Decimal;
    /// let max = Decimal::try_new(i64::MAX, u32::MAX);
    /// assert!(max.is_err());
    /// ```
    pub fn try_new(num: i64, scale: u32) -> Result<Decimal, Error> {
        if scale > MAX_SCALE_U32 {
            return Err(Error::ScaleExceedsMaximumPrecision(scale));
        }
        let magnitude = num.unsigned_abs();
        Ok(Decimal::from_parts(magnitude as u32, (magnitude >> 32) as u32, 0, num < 0, scale).normalize())
    }

    /// Returns a `Decimal` using the instance's raw representation. The value is not
    /// normalized and a scale above 28 wraps around.
    ///
    /// # Arguments
    ///
    /// * `lo` - The low 32 bits of a 96-bit integer.
    /// * `mid` - The middle 32 bits of a 96-bit integer.
    /// * `hi` - The high 32 bits of a 96-bit integer.
    /// * `negative` - `true` to indicate a negative number.
    /// * `scale` - A power of 10 ranging from 0 to 28.
    ///
    /// # Example
    ///
    /// ```
    /// # use wide_decimal::Decimal;
    /// let pi = Decimal::from_parts(1102470952, 185874565, 1703060790, false, 28);
    /// assert_eq!(pi.to_string(), "3.1415926535897932384626433832");
    /// ```
    #[must_use]
    pub const fn from_parts(lo: u32, mid: u32, hi: u32, negative: bool, scale: u32) -> Decimal {
        Decimal {
            lo,
            mid,
            hi,
            flags: flags(negative, scale % (MAX_SCALE_U32 + 1)),
        }
    }

    /// Builds a `Decimal` from the four words produced by [`Decimal::to_bits`], rejecting
    /// set reserved bits and out of range scales.
    ///
    /// ```
    /// # use wide_decimal::Decimal;
    /// let value = Decimal::new(-12345, 2);
    /// assert_eq!(Decimal::from_bits(value.to_bits()).unwrap(), value);
    /// assert!(Decimal::from_bits([1, 0, 0, 29 << 16]).is_err());
    /// ```
    pub fn from_bits(bits: [u32; 4]) -> Result<Decimal, Error> {
        let flags = bits[3];
        if flags & !(SIGN_MASK | SCALE_MASK) != 0 {
            return Err(Error::from("Invalid decimal: reserved flag bits are set"));
        }
        let scale = (flags & SCALE_MASK) >> SCALE_SHIFT;
        if scale > MAX_SCALE_U32 {
            return Err(Error::ScaleExceedsMaximumPrecision(scale));
        }
        Ok(Decimal {
            lo: bits[0],
            mid: bits[1],
            hi: bits[2],
            flags,
        })
    }

    /// The raw representation as `[lo, mid, hi, flags]`. Flags hold the scale in bits
    /// 16 to 23 and the sign in bit 31.
    #[must_use]
    pub const fn to_bits(&self) -> [u32; 4] {
        [self.lo, self.mid, self.hi, self.flags]
    }

    /// Returns the scale of the decimal number, otherwise known as `e`.
    ///
    /// # Example
    ///
    /// ```
    /// # use wide_decimal::Decimal;
    /// let num = Decimal::new(1234, 3);
    /// assert_eq!(num.scale(), 3u32);
    /// ```
    #[inline]
    #[must_use]
    pub const fn scale(&self) -> u32 {
        (self.flags & SCALE_MASK) >> SCALE_SHIFT
    }

    /// Returns the raw flags word.
    #[inline]
    #[must_use]
    pub const fn flags(&self) -> u32 {
        self.flags
    }

    /// The mantissa as `[lo, mid, hi]`.
    #[inline]
    #[must_use]
    pub const fn mantissa_limbs(&self) -> [u32; 3] {
        [self.lo, self.mid, self.hi]
    }

    /// The magnitude of the mantissa, ignoring sign and scale.
    ///
    /// ```
    /// # use wide_decimal::{Decimal, Int128};
    /// assert_eq!(Decimal::new(-1234, 2).unsigned_mantissa(), Int128::from(1234));
    /// ```
    #[inline]
    #[must_use]
    pub fn unsigned_mantissa(&self) -> Int128 {
        Int128::from_words(((self.mid as u64) << 32) | self.lo as u64, self.hi as u64)
    }

    /// Returns `true` if the sign bit of the decimal is negative.
    #[inline(always)]
    #[must_use]
    pub const fn is_sign_negative(&self) -> bool {
        self.flags & SIGN_MASK > 0
    }

    /// Returns `true` if the sign bit of the decimal is positive.
    #[inline(always)]
    #[must_use]
    pub const fn is_sign_positive(&self) -> bool {
        self.flags & SIGN_MASK == 0
    }

    /// Returns `true` if this Decimal number is equivalent to zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.lo | self.mid | self.hi == 0
    }

    /// Returns the absolute value.
    #[must_use]
    pub const fn abs(&self) -> Decimal {
        Decimal {
            flags: self.flags & !SIGN_MASK,
            ..*self
        }
    }

    /// Strips any trailing zero's from a Decimal and converts -0 to 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use wide_decimal::Decimal;
    /// let number = Decimal::from_parts(32000, 0, 0, false, 2);
    /// assert_eq!(number.to_string(), "320.00");
    /// assert_eq!(number.normalize().to_string(), "320");
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Decimal {
        if self.is_zero() {
            return Decimal::ZERO;
        }
        let mut scale = self.scale();
        if scale == 0 {
            return *self;
        }
        let mut mantissa = self.unsigned_mantissa();
        while scale > 0 {
            let (quotient, remainder) = mantissa.div_rem(Int128::TEN);
            if !remainder.is_zero() {
                break;
            }
            mantissa = quotient;
            scale -= 1;
        }
        Decimal::from_unsigned_mantissa(mantissa, scale, self.is_sign_negative())
    }

    /// The number of significant fractional digits: the scale, less any trailing zeros.
    ///
    /// ```
    /// # use wide_decimal::Decimal;
    /// assert_eq!(Decimal::from_parts(1234500, 0, 0, false, 4).decimal_places_count(), 2);
    /// ```
    #[must_use]
    pub fn decimal_places_count(&self) -> u32 {
        self.normalize().scale()
    }

    /// Returns a new `Decimal` integral with no fractional portion.
    /// This is a true truncation whereby no rounding is performed.
    ///
    /// # Example
    ///
    /// ```
    /// # use wide_decimal::Decimal;
    /// let pi = Decimal::new(3141, 3);
    /// assert_eq!(pi.trunc(), Decimal::new(3, 0));
    /// ```
    #[must_use]
    pub fn trunc(&self) -> Decimal {
        self.round_dp_with_mode(0, RoundingMode::ToZero)
    }

    /// Returns the largest integer less than or equal to a number.
    #[must_use]
    pub fn floor(&self) -> Decimal {
        self.round_dp_with_mode(0, RoundingMode::ToNegativeInfinity)
    }

    /// Returns the smallest integer greater than or equal to a number.
    #[must_use]
    pub fn ceil(&self) -> Decimal {
        self.round_dp_with_mode(0, RoundingMode::ToPositiveInfinity)
    }

    /// Returns a new `Decimal` number with no fractional portion (i.e. an integer).
    /// Rounding currently follows "Bankers Rounding" rules. e.g. 6.5 -> 6, 7.5 -> 8
    #[must_use]
    pub fn round(&self) -> Decimal {
        self.round_dp(0)
    }

    /// Returns a new `Decimal` number with the specified number of decimal points for fractional
    /// portion, using banker's rounding.
    ///
    /// # Example
    ///
    /// ```
    /// # use wide_decimal::Decimal;
    /// # use std::str::FromStr;
    /// let pi = Decimal::from_str("3.1415926535897932384626433832").unwrap();
    /// assert_eq!(pi.round_dp(2).to_string(), "3.14");
    /// ```
    #[must_use]
    pub fn round_dp(&self, dp: u32) -> Decimal {
        self.round_dp_with_mode(dp, RoundingMode::ToNearest)
    }

    /// Returns a new `Decimal` number with the specified number of decimal points for
    /// fractional portion, rounded according to `mode`. The result is always normalized;
    /// if `dp` is at least the current scale only trailing zeros are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// # use wide_decimal::{Decimal, RoundingMode};
    /// # use std::str::FromStr;
    /// let tax = Decimal::from_str("3.4395").unwrap();
    /// assert_eq!(tax.round_dp_with_mode(2, RoundingMode::ToPositiveInfinity).to_string(), "3.44");
    /// ```
    #[must_use]
    pub fn round_dp_with_mode(&self, dp: u32, mode: RoundingMode) -> Decimal {
        let scale = self.scale();
        if dp >= scale {
            return self.normalize();
        }
        let negative = self.is_sign_negative();
        let mantissa = round_mantissa(self.unsigned_mantissa(), scale - dp, negative, mode);
        Decimal::from_unsigned_mantissa(mantissa, dp, negative).normalize()
    }

    /// Checked addition. Computes `self + other`, returning `None` if overflow occurred.
    #[inline(always)]
    #[must_use]
    pub fn checked_add(self, other: Decimal) -> Option<Decimal> {
        match ops::add_impl(&self, &other) {
            CalculationResult::Ok(result) => Some(result),
            _ => None,
        }
    }

    /// Checked subtraction. Computes `self - other`, returning `None` if overflow occurred.
    #[inline(always)]
    #[must_use]
    pub fn checked_sub(self, other: Decimal) -> Option<Decimal> {
        match ops::sub_impl(&self, &other) {
            CalculationResult::Ok(result) => Some(result),
            _ => None,
        }
    }

    /// Checked multiplication. Computes `self * other`, returning `None` if overflow occurred.
    #[inline]
    #[must_use]
    pub fn checked_mul(self, other: Decimal) -> Option<Decimal> {
        match ops::mul_impl(&self, &other) {
            CalculationResult::Ok(result) => Some(result),
            _ => None,
        }
    }

    /// Checked division. Computes `self / other`, returning `None` if `other == 0.0` or the
    /// division results in overflow.
    #[inline]
    #[must_use]
    pub fn checked_div(self, other: Decimal) -> Option<Decimal> {
        match ops::div_impl(&self, &other) {
            CalculationResult::Ok(quot) => Some(quot),
            _ => None,
        }
    }

    /// Addition reporting overflow as an error.
    pub fn try_add(self, other: Decimal) -> Result<Decimal, Error> {
        into_result(ops::add_impl(&self, &other), self.is_sign_negative())
    }

    /// Subtraction reporting overflow as an error.
    pub fn try_sub(self, other: Decimal) -> Result<Decimal, Error> {
        into_result(ops::sub_impl(&self, &other), self.is_sign_negative())
    }

    /// Multiplication reporting overflow as an error.
    pub fn try_mul(self, other: Decimal) -> Result<Decimal, Error> {
        let negative = self.is_sign_negative() ^ other.is_sign_negative();
        into_result(ops::mul_impl(&self, &other), negative)
    }

    /// Division reporting overflow and division by zero as errors.
    ///
    /// ```
    /// # use wide_decimal::{Decimal, Error};
    /// assert_eq!(Decimal::ONE.try_div(Decimal::ZERO), Err(Error::DivisionByZero));
    /// ```
    pub fn try_div(self, other: Decimal) -> Result<Decimal, Error> {
        let negative = self.is_sign_negative() ^ other.is_sign_negative();
        into_result(ops::div_impl(&self, &other), negative)
    }

    /// Parses a decimal literal, returning `None` rather than an error on failure.
    #[must_use]
    pub fn parse_opt(s: &str) -> Option<Decimal> {
        crate::str::parse_decimal(s).ok()
    }

    /// Returns a serialized version of the decimal number: the little endian bytes of
    /// `lo`, `mid`, `hi` and `flags`.
    ///
    /// # Example
    ///
    /// ```
    /// # use wide_decimal::Decimal;
    /// let value = Decimal::new(-1, 2);
    /// assert_eq!(Decimal::deserialize(value.serialize()), value);
    /// ```
    #[must_use]
    pub const fn serialize(&self) -> [u8; 16] {
        let lo = self.lo.to_le_bytes();
        let mid = self.mid.to_le_bytes();
        let hi = self.hi.to_le_bytes();
        let flags = self.flags.to_le_bytes();
        [
            lo[0], lo[1], lo[2], lo[3], mid[0], mid[1], mid[2], mid[3], hi[0], hi[1], hi[2], hi[3], flags[0],
            flags[1], flags[2], flags[3],
        ]
    }

    /// Deserializes the given bytes into a decimal number. Reserved flag bits are
    /// ignored and an out of range scale wraps as in [`Decimal::from_parts`].
    #[must_use]
    pub const fn deserialize(bytes: [u8; 16]) -> Decimal {
        let flags = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
        Decimal::from_parts(
            u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            flags & SIGN_MASK != 0,
            (flags & SCALE_MASK) >> SCALE_SHIFT,
        )
    }

    /// Packs a non-negative working mantissa below 2^96. A zero mantissa is always positive.
    #[inline]
    pub(crate) fn from_unsigned_mantissa(mantissa: Int128, scale: u32, negative: bool) -> Decimal {
        let low = mantissa.low();
        Decimal::from_parts(
            low as u32,
            (low >> 32) as u32,
            mantissa.high() as u32,
            negative && !mantissa.is_zero(),
            scale,
        )
    }

    fn from_float<F: fmt::Display>(value: F, magnitude: f64) -> Decimal {
        if magnitude.is_nan() || magnitude == 0.0 {
            return Decimal::ZERO;
        }
        let magnitude = if magnitude < 0.0 { -magnitude } else { magnitude };
        if magnitude >= FLOAT_RANGE || magnitude < FLOAT_EPSILON {
            return Decimal::ZERO;
        }
        // Display renders the shortest digit string that round trips, never in exponent form.
        let mut buffer = ArrayString::<MAX_STR_BUFFER_SIZE>::new();
        if write!(buffer, "{}", value).is_err() {
            return Decimal::ZERO;
        }
        crate::str::parse_decimal(&buffer).unwrap_or(Decimal::ZERO)
    }
}

fn into_result(result: CalculationResult, negative: bool) -> Result<Decimal, Error> {
    match result {
        CalculationResult::Ok(value) => Ok(value),
        CalculationResult::Overflow if negative => Err(Error::LessThanMinimumPossibleValue),
        CalculationResult::Overflow => Err(Error::ExceedsMaximumPossibleValue),
        CalculationResult::DivByZero => Err(Error::DivisionByZero),
    }
}

impl Default for Decimal {
    /// Returns the default value for a `Decimal` (equivalent to `Decimal::ZERO`). [Read more]
    ///
    /// [Read more]: core::default::Default#tymethod.default
    #[inline]
    fn default() -> Self {
        Decimal::ZERO
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                #[inline]
                fn from(t: $t) -> Self {
                    let value = t as i64;
                    let magnitude = value.unsigned_abs();
                    Decimal::from_parts(magnitude as u32, (magnitude >> 32) as u32, 0, value < 0, 0)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                #[inline]
                fn from(t: $t) -> Self {
                    let value = t as u64;
                    Decimal::from_parts(value as u32, (value >> 32) as u32, 0, false, 0)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Decimal {
    /// Converts through the float's shortest round trip decimal rendering, so `380.4f64`
    /// becomes exactly `380.4`. NaN, infinities, magnitudes of 2^96 or more and magnitudes
    /// below 10^-29 become zero.
    fn from(value: f64) -> Self {
        if value.is_infinite() {
            return Decimal::ZERO;
        }
        Decimal::from_float(value, value)
    }
}

impl From<f32> for Decimal {
    /// Converts through the float's shortest round trip decimal rendering, so `0.1f32`
    /// becomes exactly `0.1`.
    fn from(value: f32) -> Self {
        if value.is_infinite() {
            return Decimal::ZERO;
        }
        Decimal::from_float(value, value as f64)
    }
}

impl TryFrom<Int128> for Decimal {
    type Error = Error;

    /// The absolute value becomes the mantissa; magnitudes above 2^96 - 1 do not fit.
    fn try_from(value: Int128) -> Result<Self, Self::Error> {
        if value == Int128::MIN {
            return Err(Error::LessThanMinimumPossibleValue);
        }
        let negative = value.is_negative();
        let magnitude = value.abs();
        if magnitude > U96_MAX {
            return Err(if negative {
                Error::LessThanMinimumPossibleValue
            } else {
                Error::ExceedsMaximumPossibleValue
            });
        }
        Ok(Decimal::from_unsigned_mantissa(magnitude, 0, negative))
    }
}

impl Zero for Decimal {
    fn zero() -> Decimal {
        Decimal::ZERO
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

impl One for Decimal {
    fn one() -> Decimal {
        Decimal::ONE
    }
}

impl Bounded for Decimal {
    fn min_value() -> Decimal {
        Decimal::MIN
    }

    fn max_value() -> Decimal {
        Decimal::MAX
    }
}

impl FromPrimitive for Decimal {
    fn from_i32(n: i32) -> Option<Decimal> {
        Some(Decimal::from(n))
    }

    fn from_i64(n: i64) -> Option<Decimal> {
        Some(Decimal::from(n))
    }

    fn from_i128(n: i128) -> Option<Decimal> {
        Decimal::try_from(Int128::from(n)).ok()
    }

    fn from_u32(n: u32) -> Option<Decimal> {
        Some(Decimal::from(n))
    }

    fn from_u64(n: u64) -> Option<Decimal> {
        Some(Decimal::from(n))
    }

    fn from_u128(n: u128) -> Option<Decimal> {
        if n >> 96 != 0 {
            return None;
        }
        Some(Decimal::from_parts(n as u32, (n >> 32) as u32, (n >> 64) as u32, false, 0))
    }

    fn from_f32(n: f32) -> Option<Decimal> {
        if !n.is_finite() || (n as f64) >= FLOAT_RANGE || (n as f64) <= -FLOAT_RANGE {
            return None;
        }
        Some(Decimal::from(n))
    }

    fn from_f64(n: f64) -> Option<Decimal> {
        if !n.is_finite() || n >= FLOAT_RANGE || n <= -FLOAT_RANGE {
            return None;
        }
        Some(Decimal::from(n))
    }
}

impl ToPrimitive for Decimal {
    fn to_i64(&self) -> Option<i64> {
        Int128::from(self).to_i64()
    }

    fn to_i128(&self) -> Option<i128> {
        Some(i128::from(Int128::from(self)))
    }

    fn to_u64(&self) -> Option<u64> {
        let int = Int128::from(self);
        if int.is_negative() {
            return None;
        }
        int.to_u64()
    }

    fn to_u128(&self) -> Option<u128> {
        Int128::from(self).to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        // The exact decimal rendering parses to the correctly rounded float
        let (rep, _) = crate::str::to_str_internal(self, true, None);
        rep.parse::<f64>().ok()
    }
}

impl CheckedAdd for Decimal {
    #[inline]
    fn checked_add(&self, v: &Decimal) -> Option<Decimal> {
        Decimal::checked_add(*self, *v)
    }
}

impl CheckedSub for Decimal {
    #[inline]
    fn checked_sub(&self, v: &Decimal) -> Option<Decimal> {
        Decimal::checked_sub(*self, *v)
    }
}

impl CheckedMul for Decimal {
    #[inline]
    fn checked_mul(&self, v: &Decimal) -> Option<Decimal> {
        Decimal::checked_mul(*self, *v)
    }
}

impl CheckedDiv for Decimal {
    #[inline]
    fn checked_div(&self, v: &Decimal) -> Option<Decimal> {
        Decimal::checked_div(*self, *v)
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(value: &str) -> Result<Decimal, Self::Err> {
        crate::str::parse_decimal(value)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        // A precision below the scale rounds first, banker's style
        let value = match f.precision() {
            Some(precision) if precision < self.scale() as usize => self.round_dp(precision as u32),
            _ => *self,
        };
        let (rep, additional) = crate::str::to_str_internal(&value, false, f.precision());
        let non_negative = value.is_sign_positive() || value.is_zero();
        if let Some(additional) = additional {
            let value = [rep.as_str(), "0".repeat(additional).as_str()].concat();
            f.pad_integral(non_negative, "", value.as_str())
        } else {
            f.pad_integral(non_negative, "", rep.as_str())
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fmt::Display::fmt(self, f)
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        -&self
    }
}

impl<'a> Neg for &'a Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        if self.is_zero() {
            return Decimal::ZERO;
        }
        Decimal {
            flags: self.flags ^ SIGN_MASK,
            ..*self
        }
    }
}

impl<'a, 'b> Add<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline(always)]
    fn add(self, other: &Decimal) -> Decimal {
        match ops::add_impl(self, other) {
            CalculationResult::Ok(sum) => sum,
            _ => panic!("Addition overflowed"),
        }
    }
}

impl<'a, 'b> Sub<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline(always)]
    fn sub(self, other: &Decimal) -> Decimal {
        match ops::sub_impl(self, other) {
            CalculationResult::Ok(difference) => difference,
            _ => panic!("Subtraction overflowed"),
        }
    }
}

impl<'a, 'b> Mul<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, other: &Decimal) -> Decimal {
        match ops::mul_impl(self, other) {
            CalculationResult::Ok(product) => product,
            _ => panic!("Multiplication overflowed"),
        }
    }
}

impl<'a, 'b> Div<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    fn div(self, other: &Decimal) -> Decimal {
        match ops::div_impl(self, other) {
            CalculationResult::Ok(quot) => quot,
            CalculationResult::Overflow => panic!("Division overflowed"),
            CalculationResult::DivByZero => panic!("Division by zero"),
        }
    }
}

forward_all_binop!(impl Add for Decimal, add);
forward_all_binop!(impl Sub for Decimal, sub);
forward_all_binop!(impl Mul for Decimal, mul);
forward_all_binop!(impl Div for Decimal, div);
forward_assign_op!(impl AddAssign for Decimal, add_assign, add);
forward_assign_op!(impl SubAssign for Decimal, sub_assign, sub);
forward_assign_op!(impl MulAssign for Decimal, mul_assign, mul);
forward_assign_op!(impl DivAssign for Decimal, div_assign, div);

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Decimal) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal values share a normalized form
        let n = self.normalize();
        n.lo.hash(state);
        n.mid.hash(state);
        n.hi.hash(state);
        n.flags.hash(state);
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Decimal) -> Ordering {
        ops::cmp_impl(self, other)
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::ZERO, |sum, value| sum + value)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::ZERO, |sum, value| sum + value)
    }
}

impl Product for Decimal {
    fn product<I: Iterator<Item = Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::ONE, |product, value| product * value)
    }
}

impl<'a> Product<&'a Decimal> for Decimal {
    fn product<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::ONE, |product, value| product * value)
    }
}
