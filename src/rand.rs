use crate::{constants::U96_MAX, Decimal, Int128};
use rand::{
    distributions::{
        uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler},
        Distribution, Standard,
    },
    Rng, RngCore,
};

impl Distribution<Decimal> for Standard {
    fn sample<R>(&self, rng: &mut R) -> Decimal
    where
        R: Rng + ?Sized,
    {
        Decimal::from_parts(
            rng.next_u32(),
            rng.next_u32(),
            rng.next_u32(),
            rng.gen(),
            rng.gen_range(0..=Decimal::MAX_SCALE),
        )
        .normalize()
    }
}

impl Distribution<Int128> for Standard {
    fn sample<R>(&self, rng: &mut R) -> Int128
    where
        R: Rng + ?Sized,
    {
        Int128::from_words(rng.next_u64(), rng.next_u64())
    }
}

impl SampleUniform for Decimal {
    type Sampler = DecimalSampler;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecimalSampler {
    mantissa_sampler: UniformInt<i128>,
    scale: u32,
}

impl UniformSampler for DecimalSampler {
    type X = Decimal;

    /// Creates a new sampler that will yield random decimal objects between `low` and `high`.
    ///
    /// Mantissas are drawn at the larger of the two scales, so every decimal at that scale
    /// within the range can be produced.
    ///
    /// # Example
    ///
    /// ```
    /// # use rand::Rng;
    /// # use wide_decimal::Decimal;
    /// let mut rng = rand::rngs::OsRng;
    /// let random = rng.gen_range(Decimal::new(100, 2)..Decimal::new(200, 2));
    /// assert!(random >= Decimal::ONE);
    /// assert!(random < Decimal::TWO);
    /// ```
    #[inline]
    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high, scale) = sync_scales(*low.borrow(), *high.borrow());
        Self {
            mantissa_sampler: UniformInt::new(low, high),
            scale,
        }
    }

    /// Creates a new sampler that will yield random decimal objects between `low` and `high`
    /// inclusive.
    ///
    /// # Example
    ///
    /// ```
    /// # use rand::Rng;
    /// # use wide_decimal::Decimal;
    /// let mut rng = rand::rngs::OsRng;
    /// let random = rng.gen_range(Decimal::new(100, 2)..=Decimal::new(200, 2));
    /// assert!(random >= Decimal::ONE);
    /// assert!(random <= Decimal::TWO);
    /// ```
    #[inline]
    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high, scale) = sync_scales(*low.borrow(), *high.borrow());

        // Return our sampler, which contains an underlying i128 sampler so we
        // outsource the actual randomness implementation.
        Self {
            mantissa_sampler: UniformInt::new_inclusive(low, high),
            scale,
        }
    }

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        let mantissa = self.mantissa_sampler.sample(rng);
        let magnitude = Int128::from(mantissa.abs());
        Decimal::from_unsigned_mantissa(magnitude, self.scale, mantissa < 0).normalize()
    }
}

fn signed_mantissa(value: &Decimal) -> i128 {
    let magnitude = i128::from(value.unsigned_mantissa());
    if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

// The mantissa of `value` expressed at a higher `scale`, if it still fits 96 bits.
fn mantissa_at(value: &Decimal, scale: u32) -> Option<i128> {
    let limit = i128::from(U96_MAX);
    let mut mantissa = signed_mantissa(value);
    for _ in value.scale()..scale {
        mantissa = mantissa.checked_mul(10).filter(|m| m.abs() <= limit)?;
    }
    Some(mantissa)
}

/// Returns the mantissas of both values at a shared scale, along with that scale.
///
/// If the values have wildly different scales the lower scale one may not rescale far
/// enough. In that case the shared scale is lowered and the finer value rounded to it,
/// accepting some precision loss.
fn sync_scales(a: Decimal, b: Decimal) -> (i128, i128, u32) {
    let mut scale = a.scale().max(b.scale());
    loop {
        let (left, right) = (a.round_dp(scale), b.round_dp(scale));
        if let (Some(low), Some(high)) = (mantissa_at(&left, scale), mantissa_at(&right, scale)) {
            return (low, high, scale);
        }
        if scale == 0 {
            // Integers always fit at scale zero
            return (signed_mantissa(&left), signed_mantissa(&right), 0);
        }
        scale -= 1;
    }
}
