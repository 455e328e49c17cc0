use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use genfit::{
    breeding::{BreedStrategy, OrdinaryStrategy},
    evolution::EvolutionOptions,
    gene::PolygonGene,
    genome::Genome,
    population::Candidate,
    rng::RandomNumberGenerator,
};

fn parents(genome_size: usize, rng: &mut RandomNumberGenerator) -> Vec<Candidate<PolygonGene>> {
    (0..30)
        .map(|i| Candidate::new(Genome::random(genome_size, &(), rng), i as f64))
        .collect()
}

fn bench_ordinary(c: &mut Criterion) {
    let strategy = OrdinaryStrategy::default();
    let mut rng = RandomNumberGenerator::from_seed(1);

    let mut group = c.benchmark_group("ordinary_breeding");
    for size in [10, 100, 300, 1000].iter() {
        let population = parents(*size, &mut rng);
        let options = EvolutionOptions::builder().genome_size(*size).build();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let result = strategy.breed(
                    black_box(&population),
                    black_box(&options),
                    &(),
                    &mut rng,
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ordinary);
criterion_main!(benches);
