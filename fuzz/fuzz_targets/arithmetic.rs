#![no_main]

use wide_decimal::{Decimal, Int128, RoundingMode};

#[derive(Debug, arbitrary::Arbitrary)]
struct Data {
    a: Decimal,
    b: Decimal,
    x: Int128,
    y: Int128,
    dp: u32,
}

libfuzzer_sys::fuzz_target!(|data: Data| {
    // Checked arithmetic must never panic, and must agree with the exact ordering.
    if let Some(sum) = data.a.checked_add(data.b) {
        if data.b > Decimal::ZERO {
            assert!(sum >= data.a);
        }
    }
    let _ = data.a.checked_sub(data.b);
    let _ = data.a.checked_mul(data.b);
    let _ = data.a.checked_div(data.b);
    let _ = data.a.sqrt();
    let _ = data.a.round_dp_with_mode(data.dp % 30, RoundingMode::ToNearestTiesAway);

    let _ = data.x * data.y + data.x - data.y;
    if let Some(quotient) = data.x.checked_div(data.y) {
        let remainder = data.x % data.y;
        assert_eq!(quotient * data.y + remainder, data.x);
    }
    let _ = data.x.sqrt();
    let _ = data.x == data.a;
});
