//! Benchmarks for tensor creation, the elementwise engine and statistics.
//!
//! Run with:
//! ```bash
//! cargo bench --bench tensor_operations
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use toco_core::{elementwise, ActivationKind, BinaryOp, Tensor};

fn shapes() -> Vec<(&'static str, Vec<usize>)> {
    vec![
        ("small_2d", vec![100, 100]),
        ("medium_2d", vec![1000, 1000]),
        ("small_3d", vec![50, 50, 50]),
        ("medium_3d", vec![100, 100, 100]),
    ]
}

/// Benchmark zeros and ones creation
fn bench_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("creation");

    for (name, shape) in shapes() {
        let total: usize = shape.iter().product();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::new("zeros", name), &shape, |b, shape| {
            b.iter(|| black_box(Tensor::<f64>::zeros(black_box(shape)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("ones", name), &shape, |b, shape| {
            b.iter(|| black_box(Tensor::<f32>::ones(black_box(shape)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark binary elementwise operations into a destination
fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");

    for (name, shape) in shapes() {
        let total: usize = shape.iter().product();
        let a = Tensor::<f64>::full(&shape, 1.5).unwrap();
        let b = Tensor::<f64>::full(&shape, 2.5).unwrap();
        let mut destination = Tensor::<f64>::zeros(&shape).unwrap();
        group.throughput(Throughput::Elements(total as u64));

        for op in [BinaryOp::Add, BinaryOp::Multiply, BinaryOp::Divide] {
            group.bench_with_input(BenchmarkId::new(op.name(), name), &op, |bencher, &op| {
                bencher.iter(|| elementwise::apply(&a, &b, &mut destination, op).unwrap());
            });
        }

        let ints = Tensor::<i32>::full(&shape, 7).unwrap();
        let divisors = Tensor::<i32>::full(&shape, 3).unwrap();
        let mut int_destination = Tensor::<i32>::zeros(&shape).unwrap();
        group.bench_with_input(BenchmarkId::new("divide_i32", name), &shape, |bencher, _| {
            bencher.iter(|| elementwise::divide(&ints, &divisors, &mut int_destination).unwrap());
        });
    }

    group.finish();
}

/// Benchmark single-tensor statistics and activations
fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    let shape = [500, 500];
    let tensor = Tensor::from_vec((0..250_000).map(|i| (i % 97) as f64).collect(), &shape).unwrap();
    group.throughput(Throughput::Elements(tensor.len() as u64));

    group.bench_function("mean", |b| b.iter(|| black_box(tensor.mean())));
    group.bench_function("standard_deviation", |b| {
        b.iter(|| black_box(tensor.standard_deviation()))
    });
    group.bench_function("arg_max", |b| b.iter(|| black_box(tensor.arg_max())));

    for kind in [ActivationKind::ReLU, ActivationKind::Sigmoid, ActivationKind::Tanh] {
        group.bench_with_input(BenchmarkId::new("activate", kind), &kind, |b, &kind| {
            b.iter(|| {
                let mut t = tensor.clone();
                t.activate(kind, 0.0);
                black_box(t)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_creation, bench_elementwise, bench_statistics);

criterion_main!(benches);
