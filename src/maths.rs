use crate::constants::{DECIMAL_SQRT_EPSILON_SCALE, DECIMAL_SQRT_MAX_ITERATIONS, INT128_ISQRT_MAX_ITERATIONS};
use crate::{Decimal, Error, Int128};
use core::convert::TryFrom;

const SQRT_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, DECIMAL_SQRT_EPSILON_SCALE);

impl Int128 {
    /// The integer square root, `floor(sqrt(self))`.
    ///
    /// # Example
    ///
    /// ```
    /// # use wide_decimal::Int128;
    /// assert_eq!(Int128::from(150).isqrt().unwrap(), Int128::from(12));
    /// assert!(Int128::from(-1).isqrt().is_err());
    /// ```
    pub fn isqrt(&self) -> Result<Int128, Error> {
        if self.is_negative() {
            return Err(Error::NegativeSquareRoot);
        }
        if *self <= Int128::ONE {
            return Ok(*self);
        }

        // Heron's method from a power of two at or above the root, descending until the
        // estimate stops shrinking.
        let mut estimate = Int128::ONE.shl((self.bit_length() + 1) / 2);
        for _ in 0..INT128_ISQRT_MAX_ITERATIONS {
            let next = (estimate + self.div_rem(estimate).0).shr(1);
            if next >= estimate {
                break;
            }
            estimate = next;
        }
        Ok(estimate)
    }

    /// The square root as a `Decimal`. Perfect squares are exact.
    ///
    /// # Example
    ///
    /// ```
    /// # use wide_decimal::{Decimal, Int128};
    /// assert_eq!(Int128::from(144).sqrt().unwrap(), Decimal::from(12));
    /// let root = Int128::from(150).sqrt().unwrap();
    /// assert!(root > Decimal::new(1224, 2) && root < Decimal::new(1225, 2));
    /// ```
    pub fn sqrt(&self) -> Result<Decimal, Error> {
        let root = self.isqrt()?;
        let remainder = *self - root * root;
        if remainder.is_zero() {
            return Decimal::try_from(root);
        }
        if let Ok(value) = Decimal::try_from(*self) {
            return value.sqrt();
        }

        // Too wide for a decimal. Solve sqrt(n) = r + f for the fraction, where
        // f = (n - r^2) / (2r + f). The iteration contracts by roughly 2^-48 per step.
        let twice_root = Decimal::try_from(root + root)?;
        let remainder = Decimal::try_from(remainder)?;
        let mut fraction = Decimal::ZERO;
        for _ in 0..DECIMAL_SQRT_MAX_ITERATIONS {
            let next = remainder.try_div(twice_root.try_add(fraction)?)?;
            if next == fraction {
                break;
            }
            fraction = next;
        }
        Decimal::try_from(root)?.try_add(fraction)
    }
}

impl Decimal {
    /// The square root. Perfect squares are exact, everything else is accurate to
    /// within a couple of units in the last of 28 decimal places.
    ///
    /// # Example
    ///
    /// ```
    /// # use wide_decimal::Decimal;
    /// # use std::str::FromStr;
    /// let value = Decimal::from_str("2.25").unwrap();
    /// assert_eq!(value.sqrt().unwrap(), Decimal::from_str("1.5").unwrap());
    /// assert!(Decimal::NEGATIVE_ONE.sqrt().is_err());
    /// ```
    pub fn sqrt(&self) -> Result<Decimal, Error> {
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }
        if self.is_sign_negative() {
            return Err(Error::NegativeSquareRoot);
        }
        if *self == Decimal::ONE {
            return Ok(Decimal::ONE);
        }

        let scale = self.scale();
        if scale % 2 == 0 {
            let mantissa = self.unsigned_mantissa();
            let root = mantissa.isqrt()?;
            if root * root == mantissa {
                return Ok(Decimal::from_unsigned_mantissa(root, scale / 2, false).normalize());
            }
        }

        // Newton-Raphson
        let mut current = initial_estimate(self);
        let mut previous = Decimal::ZERO;
        for _ in 0..DECIMAL_SQRT_MAX_ITERATIONS {
            let next = current.try_add(self.try_div(current)?)?.try_div(Decimal::TWO)?;
            if next == current || (next - current).abs() < SQRT_EPSILON || next == previous {
                return Ok(next);
            }
            previous = current;
            current = next;
        }
        Ok(current)
    }
}

#[cfg(feature = "std")]
fn initial_estimate(value: &Decimal) -> Decimal {
    use num_traits::ToPrimitive;
    let seed = value.to_f64().map(|f| Decimal::from(f.sqrt())).unwrap_or(Decimal::ZERO);
    if seed.is_zero() {
        Decimal::ONE
    } else {
        seed
    }
}

#[cfg(not(feature = "std"))]
fn initial_estimate(value: &Decimal) -> Decimal {
    let seed = Int128::from(value)
        .isqrt()
        .ok()
        .and_then(|root| Decimal::try_from(root).ok())
        .unwrap_or(Decimal::ZERO);
    if seed.is_zero() {
        Decimal::ONE
    } else {
        seed
    }
}
