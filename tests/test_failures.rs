use std::sync::atomic::{AtomicUsize, Ordering};

use genfit::{
    error::{GeneticError, Result, Stage},
    evolution::{EvolutionLauncher, EvolutionOptions},
    gene::{PolygonGene, TextGene},
    genome::Genome,
    population::Population,
    text::SquaredCodeDistance,
};

#[test]
fn test_single_gene_genome_is_rejected() {
    let launcher: EvolutionLauncher<TextGene, _> =
        EvolutionLauncher::new(SquaredCodeDistance::new("A"));
    let options = EvolutionOptions::builder()
        .population_size(4)
        .genome_size(1)
        .genes_to_mutate(1)
        .seed(1)
        .build();

    match launcher.evolve(&options) {
        Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Genome size")),
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_failing_oracle_aborts_before_first_generation() {
    let calls = AtomicUsize::new(0);
    let oracle = |_: &Genome<PolygonGene>| -> Result<f64> {
        calls.fetch_add(1, Ordering::SeqCst);
        Err(GeneticError::FitnessCalculation("renderer unavailable".to_string()))
    };
    let launcher: EvolutionLauncher<PolygonGene, _> = EvolutionLauncher::new(oracle);
    let options = EvolutionOptions::builder()
        .population_size(6)
        .genome_size(8)
        .genes_to_mutate(2)
        .seed(2)
        .build();

    let mut observed = 0;
    let mut observer = |_: usize, _: &Population<PolygonGene>| observed += 1;

    match launcher.run(&options, &mut observer) {
        Err(GeneticError::Oracle {
            stage,
            generation,
            slot,
            candidate,
            source,
        }) => {
            assert_eq!(stage, Stage::Initialization);
            assert_eq!(generation, 0);
            assert_eq!(slot, 0);
            // the failing genome is carried for reproduction
            assert!(candidate.contains("PolygonGene"));
            assert!(matches!(*source, GeneticError::FitnessCalculation(_)));
        }
        other => panic!("Expected Oracle error, got {:?}", other),
    }

    assert_eq!(observed, 0);
    // every initial candidate was attempted before the run gave up
    assert_eq!(calls.load(Ordering::SeqCst), 6);
}

#[test]
fn test_oracle_rejecting_target_length() {
    // the target is longer than the configured genome
    let launcher: EvolutionLauncher<TextGene, _> =
        EvolutionLauncher::new(SquaredCodeDistance::new("abcdef"));
    let options = EvolutionOptions::builder()
        .population_size(3)
        .genome_size(4)
        .genes_to_mutate(1)
        .seed(3)
        .build();

    let err = launcher.evolve(&options).unwrap_err();
    assert!(err.to_string().contains("initialization"));
}
