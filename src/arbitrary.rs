use crate::{constants::MAX_SCALE_U32, Decimal, Int128};
use arbitrary::{Arbitrary, Result, Unstructured};

impl<'a> Arbitrary<'a> for Decimal {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let (lo, mid, hi, negative, scale) = <(u32, u32, u32, bool, u32)>::arbitrary(u)?;
        Ok(Decimal::from_parts(lo, mid, hi, negative, scale % (MAX_SCALE_U32 + 1)).normalize())
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <(u32, u32, u32, bool, u32)>::size_hint(depth)
    }
}

impl<'a> Arbitrary<'a> for Int128 {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let (low, high) = <(u64, u64)>::arbitrary(u)?;
        Ok(Int128::from_words(low, high))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <(u64, u64)>::size_hint(depth)
    }
}
