//! Benchmark for the LZ78 dictionary coder.

fn get_large_array(items: usize) -> Vec<u8> {
    let mut input = Vec::new();
    let mut v = 0;
    for i in 0..items {
        v += 3;
        input.push((i ^ v) as u8);
    }
    input
}

fn encode_large_buffer() {
    let input = get_large_array(1_000_000);
    let codes = encode_codes(&input);
    black_box(codes.len());
}

fn round_trip_small_buffer() {
    let input = get_large_array(1_000);
    let codes = encode_codes(&input);
    let decoded = decode_codes(&codes).unwrap();
    black_box(decoded.len());
}

use arbcompress::lz::{decode_codes, encode_codes};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("round_trip_small_buffer", |b| {
        b.iter(round_trip_small_buffer)
    });
    c.bench_function("encode_large_buffer", |b| b.iter(encode_large_buffer));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
