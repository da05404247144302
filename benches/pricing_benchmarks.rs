//! Criterion benchmarks for the three pricing methods.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use europricer::{
    BinomialTreeModel, BlackScholesModel, MonteCarloModel, OptionContract, OptionKind,
    PricingModel,
};

fn contract() -> OptionContract {
    OptionContract::new(100.0, 100.0, 30, 0.05, 0.2).unwrap()
}

fn bench_analytic(c: &mut Criterion) {
    let contract = contract();
    let model = BlackScholesModel::new(&contract).unwrap();
    c.bench_function("analytic_call", |b| {
        b.iter(|| black_box(model.price(OptionKind::Call)))
    });
}

fn bench_lattice(c: &mut Criterion) {
    let contract = contract();
    let mut group = c.benchmark_group("lattice_call");
    for steps in [50, 200, 1000] {
        let model = BinomialTreeModel::new(&contract, steps).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(steps), &model, |b, m| {
            b.iter(|| black_box(m.price(OptionKind::Call)))
        });
    }
    group.finish();
}

fn bench_simulation(c: &mut Criterion) {
    let contract = contract();
    let mut group = c.benchmark_group("simulation_generate_and_price");
    group.sample_size(20);
    for n_paths in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(n_paths),
            &n_paths,
            |b, &n| {
                b.iter(|| {
                    let model = MonteCarloModel::new(&contract, n, 11).unwrap();
                    black_box(model.price(OptionKind::Call))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_analytic, bench_lattice, bench_simulation);
criterion_main!(benches);
