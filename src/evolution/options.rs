//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the run parameters of the genetic
//! algorithm: population size, genome size, offspring per generation,
//! mutation settings, generation cap, random seed and logging level.
//!
//! ## Example
//!
//! ```rust
//! use genfit::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(30, 300, 2, 0.2, 5, Some(100_000));
//! assert!(custom_options.validate().is_ok());
//!
//! // Or use the builder
//! let options = EvolutionOptions::builder()
//!     .population_size(4)
//!     .genome_size(2)
//!     .genes_to_mutate(1)
//!     .max_generations(None)
//!     .seed(7)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert_eq!(options.get_max_generations(), None);
//! ```
//!
//! ## Fields
//!
//! - `population_size`: Number of candidates kept after each generation.
//! - `genome_size`: Number of genes in every genome. Must be at least 2.
//! - `num_offspring`: Number of offspring bred concurrently per generation.
//! - `mutation_power`: Magnitude of per-field perturbations.
//! - `genes_to_mutate`: Distinct genes mutated per offspring.
//! - `max_generations`: Generation cap, or `None` to run until the goal is reached.
//! - `seed`: Run seed, or `None` to draw one from system entropy.
//! - `log_level`: How much the evolution loop reports through `tracing`.

use crate::error::{GeneticError, Result};

/// How much the evolution loop reports through `tracing`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Every candidate of every generation at `debug` level, plus `Minimal` output.
    Verbose,
    /// Generation index and best score at `info` level.
    Minimal,
    /// Nothing per generation.
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    genome_size: usize,
    num_offspring: usize,
    mutation_power: f64,
    genes_to_mutate: usize,
    max_generations: Option<usize>,
    seed: Option<u64>,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(
        population_size: usize,
        genome_size: usize,
        num_offspring: usize,
        mutation_power: f64,
        genes_to_mutate: usize,
        max_generations: Option<usize>,
    ) -> Self {
        Self {
            population_size,
            genome_size,
            num_offspring,
            mutation_power,
            genes_to_mutate,
            max_generations,
            seed: None,
            log_level: LogLevel::None,
        }
    }

    /// Checks every parameter, reporting the first offending value.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if:
    /// - the population size is zero
    /// - the genome has fewer than 2 genes (crossover needs a range to draw from)
    /// - the number of offspring is zero
    /// - the number of genes to mutate is zero or exceeds the genome size
    /// - the mutation power is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.genome_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Genome size must be at least 2 (got {})",
                self.genome_size
            )));
        }

        if self.num_offspring == 0 {
            return Err(GeneticError::Configuration(
                "Number of offspring cannot be zero".to_string(),
            ));
        }

        if self.genes_to_mutate == 0 || self.genes_to_mutate > self.genome_size {
            return Err(GeneticError::Configuration(format!(
                "Genes to mutate must be between 1 and the genome size {} (got {})",
                self.genome_size, self.genes_to_mutate
            )));
        }

        if !self.mutation_power.is_finite() || self.mutation_power < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Mutation power must be a finite, non-negative number (got {})",
                self.mutation_power
            )));
        }

        Ok(())
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_genome_size(&self) -> usize {
        self.genome_size
    }

    pub fn get_num_offspring(&self) -> usize {
        self.num_offspring
    }

    pub fn get_mutation_power(&self) -> f64 {
        self.mutation_power
    }

    pub fn get_genes_to_mutate(&self) -> usize {
        self.genes_to_mutate
    }

    pub fn get_max_generations(&self) -> Option<usize> {
        self.max_generations
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_genome_size(&mut self, genome_size: usize) {
        self.genome_size = genome_size;
    }

    pub fn set_num_offspring(&mut self, num_offspring: usize) {
        self.num_offspring = num_offspring;
    }

    pub fn set_mutation_power(&mut self, mutation_power: f64) {
        self.mutation_power = mutation_power;
    }

    pub fn set_genes_to_mutate(&mut self, genes_to_mutate: usize) {
        self.genes_to_mutate = genes_to_mutate;
    }

    pub fn set_max_generations(&mut self, max_generations: Option<usize>) {
        self.max_generations = max_generations;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 30,
            genome_size: 300,
            num_offspring: 2,
            mutation_power: 0.2,
            genes_to_mutate: 5,
            max_generations: Some(100_000),
            seed: None,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset parameters fall back to `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    genome_size: Option<usize>,
    num_offspring: Option<usize>,
    mutation_power: Option<f64>,
    genes_to_mutate: Option<usize>,
    max_generations: Option<Option<usize>>,
    seed: Option<u64>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn genome_size(mut self, value: usize) -> Self {
        self.genome_size = Some(value);
        self
    }

    pub fn num_offspring(mut self, value: usize) -> Self {
        self.num_offspring = Some(value);
        self
    }

    pub fn mutation_power(mut self, value: f64) -> Self {
        self.mutation_power = Some(value);
        self
    }

    pub fn genes_to_mutate(mut self, value: usize) -> Self {
        self.genes_to_mutate = Some(value);
        self
    }

    /// Sets the generation cap. `None` runs until the goal is reached.
    pub fn max_generations(mut self, value: Option<usize>) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            genome_size: self.genome_size.unwrap_or(defaults.genome_size),
            num_offspring: self.num_offspring.unwrap_or(defaults.num_offspring),
            mutation_power: self.mutation_power.unwrap_or(defaults.mutation_power),
            genes_to_mutate: self.genes_to_mutate.unwrap_or(defaults.genes_to_mutate),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            seed: self.seed.or(defaults.seed),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_configuration_error(options: EvolutionOptions, needle: &str) {
        match options.validate() {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains(needle), "{:?} does not mention {:?}", msg, needle)
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(EvolutionOptions::default().validate().is_ok());
        assert!(EvolutionOptions::builder().build().validate().is_ok());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let base = || EvolutionOptions::builder().genome_size(10).genes_to_mutate(2);

        expect_configuration_error(base().population_size(0).build(), "Population size");
        expect_configuration_error(base().genome_size(1).genes_to_mutate(1).build(), "(got 1)");
        expect_configuration_error(base().num_offspring(0).build(), "offspring");
        expect_configuration_error(base().genes_to_mutate(0).build(), "Genes to mutate");
        expect_configuration_error(base().genes_to_mutate(11).build(), "(got 11)");
        expect_configuration_error(base().mutation_power(-0.1).build(), "Mutation power");
        expect_configuration_error(base().mutation_power(f64::NAN).build(), "Mutation power");
    }

    #[test]
    fn test_setters() {
        let mut options = EvolutionOptions::default();
        options.set_max_generations(None);
        options.set_seed(Some(3));
        options.set_log_level(LogLevel::Verbose);
        options.set_population_size(8);

        assert_eq!(options.get_max_generations(), None);
        assert_eq!(options.get_seed(), Some(3));
        assert_eq!(*options.get_log_level(), LogLevel::Verbose);
        assert_eq!(options.get_population_size(), 8);
    }
}
