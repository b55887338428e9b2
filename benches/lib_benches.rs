use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::str::FromStr;
use wide_decimal::{Decimal, Int128, RoundingMode};

const BASE: &str = "2.01";
const INPUTS: [&str; 7] = [
    "1",
    "2",
    "100",
    "0.01",
    "-0.5",
    "3.1415926535897932384626433832",
    "-3.1415926535897932384626433832",
];

macro_rules! bench_decimal_op {
    ($name:ident, $op:tt) => {
        fn $name(c: &mut Criterion) {
            let x = Decimal::from_str(BASE).unwrap();
            let mut group = c.benchmark_group(stringify!($name));
            for input in INPUTS {
                let y = Decimal::from_str(input).unwrap();
                group.bench_with_input(BenchmarkId::from_parameter(input), &y, |b, y| {
                    b.iter(|| black_box(x) $op black_box(*y))
                });
            }
            group.finish();
        }
    };
}

bench_decimal_op!(decimal_add, +);
bench_decimal_op!(decimal_sub, -);
bench_decimal_op!(decimal_mul, *);
bench_decimal_op!(decimal_div, /);

fn decimal_sum_10k(c: &mut Criterion) {
    let values: Vec<Decimal> = (0..10_000).map(Decimal::from).collect();
    c.bench_function("decimal_sum_10k", |b| b.iter(|| black_box(&values).iter().sum::<Decimal>()));
}

fn decimal_text(c: &mut Criterion) {
    let text = "-79228.162514264337593543950335";
    let value = Decimal::from_str(text).unwrap();
    c.bench_function("decimal_parse", |b| b.iter(|| Decimal::from_str(black_box(text))));
    c.bench_function("decimal_to_string", |b| b.iter(|| black_box(value).to_string()));
}

fn decimal_round_and_sqrt(c: &mut Criterion) {
    let value = Decimal::from_str("3.1415926535897932384626433832").unwrap();
    c.bench_function("decimal_round_dp", |b| {
        b.iter(|| black_box(value).round_dp_with_mode(black_box(10), RoundingMode::ToNearest))
    });
    c.bench_function("decimal_sqrt", |b| b.iter(|| black_box(value).sqrt()));
}

fn int128_ops(c: &mut Criterion) {
    let a = Int128::from_str("20000000000000000000000000000000000000").unwrap();
    let b = Int128::from(1416666666666666665u64);
    let wide = Int128::from_str("-1234567890123456789012345678901").unwrap();
    c.bench_function("int128_mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    c.bench_function("int128_div_by_word", |bench| bench.iter(|| black_box(a) / black_box(b)));
    c.bench_function("int128_div_wide", |bench| bench.iter(|| black_box(a) / black_box(wide)));
    c.bench_function("int128_to_string", |bench| bench.iter(|| black_box(wide).to_string()));
    c.bench_function("int128_isqrt", |bench| bench.iter(|| black_box(a).isqrt()));
}

criterion_group!(
    benches,
    decimal_add,
    decimal_sub,
    decimal_mul,
    decimal_div,
    decimal_sum_10k,
    decimal_text,
    decimal_round_and_sqrt,
    int128_ops
);
criterion_main!(benches);
