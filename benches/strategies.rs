use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dynamic_orientation::generator::{EndpointSampler, Generator};
use dynamic_orientation::intervals::convert_instance;
use dynamic_orientation::solver::solve_instance;
use dynamic_orientation::strategies::{orient_by_brodal, orient_by_kowalik};
use rand::{Rng, SeedableRng};

fn bench_strategies(c: &mut Criterion) {
    let mut g = c.benchmark_group("Strategies");
    let mut rng = rand::rngs::StdRng::seed_from_u64(4815162342);
    for len in [100usize, 250, 500] {
        g.throughput(criterion::Throughput::Elements(len as u64));
        let input_str = format!("V 25 L {len}");
        let seed = rng.gen();
        let opi = Generator::from_seed(25, 1, 0.8, 0.05, EndpointSampler::Uniform, seed)
            .generate_instance(len);
        g.bench_with_input(BenchmarkId::new("kowalik", &input_str), &opi, |b, opi| {
            b.iter(|| black_box(orient_by_kowalik(black_box(opi))))
        });
        g.bench_with_input(BenchmarkId::new("brodal", &input_str), &opi, |b, opi| {
            b.iter(|| black_box(orient_by_brodal(black_box(opi), 3)))
        });
        g.bench_with_input(BenchmarkId::new("amc", &input_str), &opi, |b, opi| {
            b.iter(|| {
                let mut ipi = convert_instance(black_box(opi));
                black_box(solve_instance(&mut ipi))
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
