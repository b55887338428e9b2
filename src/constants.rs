use crate::int128::Int128;

// Sign mask for the flags field. A value of zero in this bit indicates a
// positive Decimal value, and a value of one in this bit indicates a
// negative Decimal value.
pub const SIGN_MASK: u32 = 0x8000_0000;

// Scale mask for the flags field. This byte in the flags field contains
// the power of 10 to divide the Decimal value by. The scale byte must
// contain a value between 0 and 28 inclusive.
pub const SCALE_MASK: u32 = 0x00FF_0000;
pub const U32_MASK: u64 = u32::MAX as _;

// Number of bits scale is shifted by.
pub const SCALE_SHIFT: u32 = 16;

// The maximum string buffer size used for serialization purposes. 29 digits, a decimal
// point, 28 digits of padding and a sign.
pub const MAX_STR_BUFFER_SIZE: usize = 64;

// The maximum supported scale
pub const MAX_SCALE: u8 = 28;
pub const MAX_SCALE_U32: u32 = MAX_SCALE as u32;

// The maximum number of significant digits accepted by the parser. Enough for any
// 96 bit mantissa so that every Decimal round trips through its own string form.
pub const MAX_PARSE_DIGITS: u32 = 29;

// Largest 96 bit mantissa
pub const U96_MAX: Int128 = Int128::from_words(u64::MAX, u32::MAX as u64);
// Mantissas at or below this bound can be multiplied by ten and still leave room for
// one further addition of a 96 bit value.
pub const SCALE_UP_LIMIT: Int128 = Int128::from_words(0x6666_6666_6666_6666, 0x0666_6666_6666_6666);

// Decimal magnitudes of the Int128 limits, used for range checking while parsing.
pub const INT128_MAX_DIGITS: &str = "170141183460469231731687303715884105727";
pub const INT128_MIN_DIGITS: &str = "170141183460469231731687303715884105728";
// The longest Int128 string: the minimum value with its sign.
pub const MAX_INT128_STR_BUFFER_SIZE: usize = 40;

// Number of additional fractional digits a quotient carries beyond the operands' own scale.
// Combined with the scale cap this yields the full 28 digits for every division.
pub const DECIMAL_DIVISION_EXTRA_PRECISION: u32 = 28;
// Newton iteration for a decimal square root stops once successive estimates are this
// close (10^-27).
pub const DECIMAL_SQRT_EPSILON_SCALE: u32 = 27;
pub const DECIMAL_SQRT_MAX_ITERATIONS: usize = 100;
// Heron iteration converges in well under this many steps for 127 bit inputs.
pub const INT128_ISQRT_MAX_ITERATIONS: usize = 128;

// Fast access for 10^n where n is 0-9
pub const POWERS_10: [u32; 10] = [
    1, 10, 100, 1000, 10000, 100000, 1000000, 10000000, 100000000, 1000000000,
];
// Fast access for 10^n where n is 1-19
pub const BIG_POWERS_10: [u64; 19] = [
    10,
    100,
    1000,
    10000,
    100000,
    1000000,
    10000000,
    100000000,
    1000000000,
    10000000000,
    100000000000,
    1000000000000,
    10000000000000,
    100000000000000,
    1000000000000000,
    10000000000000000,
    100000000000000000,
    1000000000000000000,
    10000000000000000000,
];

// 10^n for n in 0..=38, every power of ten an Int128 can hold.
pub const INT128_POWERS_10: [Int128; 39] = int128_powers_10();

const fn int128_powers_10() -> [Int128; 39] {
    let mut table = [Int128::ZERO; 39];
    let mut value: u128 = 1;
    let mut i = 0;
    while i < 39 {
        table[i] = Int128::from_words(value as u64, (value >> 64) as u64);
        value = value.wrapping_mul(10);
        i += 1;
    }
    table
}
