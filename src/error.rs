use crate::constants::MAX_SCALE_U32;
use alloc::string::String;
use core::fmt;

/// Error type for the library.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A string could not be parsed into a number.
    InvalidFormat(String),
    /// The divisor of a division or remainder was zero.
    DivisionByZero,
    /// The result is greater than the largest representable value.
    ExceedsMaximumPossibleValue,
    /// The result is less than the smallest representable value.
    LessThanMinimumPossibleValue,
    /// A scale larger than 28 was requested.
    ScaleExceedsMaximumPrecision(u32),
    /// The square root of a negative number was requested.
    NegativeSquareRoot,
}

/// The broad category an [`Error`] falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed textual input.
    InvalidFormat,
    /// A result that cannot be represented, including division by zero.
    Overflow,
    /// An input outside of the operation's mathematical domain.
    Domain,
}

impl Error {
    /// Returns the category of this error.
    ///
    /// ```
    /// use wide_decimal::{Decimal, ErrorKind};
    ///
    /// let err = Decimal::ONE.try_div(Decimal::ZERO).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Overflow);
    /// ```
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
            Self::DivisionByZero
            | Self::ExceedsMaximumPossibleValue
            | Self::LessThanMinimumPossibleValue
            | Self::ScaleExceedsMaximumPrecision(_) => ErrorKind::Overflow,
            Self::NegativeSquareRoot => ErrorKind::Domain,
        }
    }
}

impl<S> From<S> for Error
where
    S: Into<String>,
{
    #[inline]
    fn from(from: S) -> Self {
        Self::InvalidFormat(from.into())
    }
}

#[cold]
pub(crate) fn tail_error<T>(from: &'static str) -> Result<T, Error> {
    Err(from.into())
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidFormat(ref err) => f.pad(err),
            Self::DivisionByZero => f.pad("Division by zero"),
            Self::ExceedsMaximumPossibleValue => {
                f.pad("Number exceeds maximum value that can be represented")
            }
            Self::LessThanMinimumPossibleValue => {
                f.pad("Number less than minimum value that can be represented")
            }
            Self::ScaleExceedsMaximumPrecision(ref scale) => {
                write!(f, "Scale exceeds maximum precision: {} > {}", scale, MAX_SCALE_U32)
            }
            Self::NegativeSquareRoot => f.pad("Square root of a negative number"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_scale_error() {
        assert_eq!(
            Error::ScaleExceedsMaximumPrecision(30).to_string(),
            "Scale exceeds maximum precision: 30 > 28"
        );
    }

    #[test]
    fn string_errors_are_format_errors() {
        let err = Error::from("Invalid decimal: empty");
        assert_eq!(err, Error::InvalidFormat("Invalid decimal: empty".to_string()));
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(Error::NegativeSquareRoot.kind(), ErrorKind::Domain);
        assert_eq!(Error::DivisionByZero.kind(), ErrorKind::Overflow);
    }
}
