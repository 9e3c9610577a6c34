//! Benchmark for the block transform and the two inverse algorithms.

fn get_block(items: usize) -> Vec<u8> {
    let mut input = Vec::new();
    let mut v = 0_usize;
    for i in 0..items {
        v += 3;
        let x = (i ^ v) as u8;
        input.push(if is_sentinel(x) { b'.' } else { x });
    }
    input
}

fn forward_large_block() {
    let input = get_block(1 << 18);
    black_box(forward_transform(&input).unwrap());
}

fn forward_uniform_block() {
    let input = vec![b'a'; 1 << 18];
    black_box(forward_transform(&input).unwrap());
}

fn inverse_lf() {
    let transformed = forward_transform(&get_block(256)).unwrap();
    black_box(inverse_transform(&transformed).unwrap());
}

fn inverse_naive() {
    let transformed = forward_transform(&get_block(256)).unwrap();
    black_box(inverse_transform_naive(&transformed).unwrap());
}

use arbcompress::bwt::{
    forward_transform, inverse_transform, inverse_transform_naive,
    is_sentinel,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("forward_large_block", |b| b.iter(forward_large_block));
    c.bench_function("forward_uniform_block", |b| {
        b.iter(forward_uniform_block)
    });
    c.bench_function("inverse_lf", |b| b.iter(inverse_lf));
    c.bench_function("inverse_naive", |b| b.iter(inverse_naive));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
