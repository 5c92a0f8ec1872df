use arith::{Calculator, Operation};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_binary_ops(c: &mut Criterion) {
    let calc = Calculator::new();

    c.bench_function("add", |b| {
        b.iter(|| calc.add(black_box(1.5), black_box(2.5)))
    });

    c.bench_function("divide", |b| {
        b.iter(|| calc.divide(black_box(1.5), black_box(2.5)))
    });

    c.bench_function("power", |b| {
        b.iter(|| calc.power(black_box(1.5), black_box(2.5)))
    });
}

fn bench_unary_ops(c: &mut Criterion) {
    let calc = Calculator::new();

    c.bench_function("square_root", |b| {
        b.iter(|| calc.square_root(black_box(2.0)))
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let calc = Calculator::new();
    let operands = [1.5, 2.5];

    c.bench_function("evaluate_add", |b| {
        b.iter(|| calc.evaluate(black_box(Operation::Add), black_box(&operands)))
    });
}

criterion_group!(benches, bench_binary_ops, bench_unary_ops, bench_dispatch);
criterion_main!(benches);
