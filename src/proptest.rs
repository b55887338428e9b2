use crate::{Decimal, Int128};

use proptest::arbitrary::{Arbitrary, StrategyFor};
use proptest::prelude::*;
use proptest::strategy::{FilterMap, Map};

impl Arbitrary for Decimal {
    type Parameters = ();
    type Strategy = FilterMap<StrategyFor<(u32, u32, u32, bool, u8)>, fn((u32, u32, u32, bool, u8)) -> Option<Self>>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        // Three mantissa limbs, a sign and a scale; scales above 28 are rejected
        any::<(u32, u32, u32, bool, u8)>().prop_filter_map(
            "scale must be at most 28",
            |(lo, mid, hi, negative, scale)| {
                if scale <= 28 {
                    Some(Decimal::from_parts(lo, mid, hi, negative, scale as u32).normalize())
                } else {
                    None
                }
            },
        )
    }
}

impl Arbitrary for Int128 {
    type Parameters = ();
    type Strategy = Map<StrategyFor<(u64, u64)>, fn((u64, u64)) -> Self>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        any::<(u64, u64)>().prop_map(|(low, high)| Int128::from_words(low, high))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::string::ToString;
    use core::str::FromStr;

    proptest! {
        #[test]
        fn arbitrary_decimals_are_normalized(value in any::<Decimal>()) {
            prop_assert!(value.scale() <= Decimal::MAX_SCALE);
            prop_assert_eq!(value.normalize().to_bits(), value.to_bits());
        }

        #[test]
        fn arbitrary_int128_values_print_and_parse(value in any::<Int128>()) {
            prop_assert_eq!(Int128::from_str(&value.to_string()).unwrap(), value);
        }
    }
}
