use genfit::{
    error::Result,
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel},
    gene::{CharacterBounds, TextGene},
    genome::Genome,
    population::Population,
    text::{evolve_text, SquaredCodeDistance},
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_two_letter_target() {
    init_tracing();

    let options = EvolutionOptions::builder()
        .population_size(4)
        .genes_to_mutate(1)
        .max_generations(Some(100_000))
        .seed(2024)
        .build();

    let result = evolve_text("AB", &options).unwrap();

    assert_eq!(result.best.genome.to_string(), "AB");
    assert_eq!(result.best.score, 0.0);
    assert!(result.generations < 100_000);
}

#[test]
fn test_same_seed_same_trajectory() {
    init_tracing();

    let options = EvolutionOptions::builder()
        .population_size(8)
        .genome_size(5)
        .num_offspring(4)
        .genes_to_mutate(2)
        .max_generations(Some(150))
        .seed(99)
        .log_level(LogLevel::Verbose)
        .build();

    let trajectory = || {
        let launcher: EvolutionLauncher<TextGene, _> =
            EvolutionLauncher::new(SquaredCodeDistance::new("hello"));
        let mut scores = Vec::new();
        let mut observer = |_: usize, population: &Population<TextGene>| {
            scores.push(population.best().map(|c| c.score));
        };
        let result = launcher.run(&options, &mut observer).unwrap();
        (scores, result)
    };

    let (first_scores, first) = trajectory();
    let (second_scores, second) = trajectory();

    assert_eq!(first_scores, second_scores);
    assert_eq!(first, second);
}

#[test]
fn test_custom_character_bounds() {
    let bounds = CharacterBounds::new('a', 'z', 3).unwrap();
    let oracle = |genome: &Genome<TextGene>| -> Result<f64> {
        Ok(genome
            .genes()
            .iter()
            .map(|gene| (gene.0 as i64 - 'q' as i64).abs() as f64)
            .sum())
    };

    let options = EvolutionOptions::builder()
        .population_size(10)
        .genome_size(4)
        .genes_to_mutate(1)
        .max_generations(Some(5_000))
        .seed(5)
        .build();

    let launcher: EvolutionLauncher<TextGene, _> =
        EvolutionLauncher::new(oracle).with_gene_params(bounds);
    let mut observer = |_: usize, population: &Population<TextGene>| {
        assert!(population.iter().all(|c| c.genome.in_bounds(&bounds)));
    };
    let result = launcher.run(&options, &mut observer).unwrap();

    assert_eq!(result.best.genome.to_string(), "qqqq");
}
