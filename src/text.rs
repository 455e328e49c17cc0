//! # Text evolution
//!
//! Ready-made pieces for evolving a string toward a known target: the
//! squared character-code distance oracle and a one-call driver.
//!
//! ## Example
//!
//! ```rust
//! use genfit::{evolution::EvolutionOptions, text::evolve_text};
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(10)
//!     .genes_to_mutate(1)
//!     .seed(3)
//!     .build();
//!
//! let result = evolve_text("Hi", &options).unwrap();
//! assert_eq!(result.best.genome.to_string(), "Hi");
//! assert_eq!(result.best.score, 0.0);
//! ```

use crate::{
    error::{GeneticError, Result},
    evolution::{
        EvolutionLauncher, EvolutionOptions, EvolutionResult, FitnessThreshold, Oracle,
        ProgressLogger,
    },
    gene::{CharacterBounds, TextGene},
    genome::Genome,
};

/// Sum over positions of the squared difference between character codes.
///
/// A score of `0.0` means the candidate equals the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquaredCodeDistance {
    target: Vec<char>,
}

impl SquaredCodeDistance {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.chars().collect(),
        }
    }

    pub fn target_len(&self) -> usize {
        self.target.len()
    }
}

impl Oracle<TextGene> for SquaredCodeDistance {
    fn score(&self, genome: &Genome<TextGene>) -> Result<f64> {
        if genome.len() != self.target.len() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Candidate has {} characters, target has {}",
                genome.len(),
                self.target.len()
            )));
        }

        Ok(genome
            .genes()
            .iter()
            .zip(&self.target)
            .map(|(gene, &want)| {
                let diff = gene.0 as i64 - want as i64;
                (diff * diff) as f64
            })
            .sum())
    }
}

/// Evolves printable ASCII strings until one equals `target`.
///
/// The genome size of `options` is replaced by the length of `target`.
/// Progress is logged through `tracing` every 1000 generations.
///
/// # Errors
///
/// Returns a `GeneticError::Configuration` error if `target` contains a
/// character outside the printable ASCII range, plus any error of
/// `EvolutionLauncher::run`.
pub fn evolve_text(target: &str, options: &EvolutionOptions) -> Result<EvolutionResult<TextGene>> {
    let bounds = CharacterBounds::default();
    if let Some(c) = target.chars().find(|&c| !bounds.contains(c)) {
        return Err(GeneticError::Configuration(format!(
            "Target character {:?} is outside {:?}..={:?}",
            c,
            bounds.lo(),
            bounds.hi()
        )));
    }

    let oracle = SquaredCodeDistance::new(target);
    let mut options = options.clone();
    options.set_genome_size(oracle.target_len());

    let launcher: EvolutionLauncher<TextGene, _> = EvolutionLauncher::new(oracle)
        .with_goal(FitnessThreshold(0.0))
        .with_gene_params(bounds);

    launcher.run(&options, &mut ProgressLogger::default())
}
