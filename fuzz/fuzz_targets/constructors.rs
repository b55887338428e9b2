#![no_main]

use core::str::FromStr;
use wide_decimal::{Decimal, Int128};

#[derive(Debug, arbitrary::Arbitrary)]
struct Data<'a> {
    generic_str: &'a str,

    bits: [u32; 4],

    float: f64,

    try_new_num: i64,
    try_new_scale: u32,
}

libfuzzer_sys::fuzz_target!(|data: Data<'_>| {
    let _ = serde_json::from_str::<Decimal>(data.generic_str);

    // Anything that parses must survive its own rendering.
    if let Ok(value) = Decimal::from_str(data.generic_str) {
        assert_eq!(Decimal::from_str(&value.to_string()), Ok(value));
    }
    if let Ok(value) = Int128::from_str(data.generic_str) {
        assert_eq!(Int128::from_str(&value.to_string()), Ok(value));
    }

    let _ = Decimal::from_bits(data.bits);

    let _ = Decimal::from(data.float);
    let _ = Int128::from(data.float);

    let _ = Decimal::try_new(data.try_new_num, data.try_new_scale);
});
