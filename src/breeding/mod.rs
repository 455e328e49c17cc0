//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines how one offspring genome is produced from
//! the current, best-first population. The evolution launcher calls it once
//! per offspring slot, concurrently, each call with the slot's own random
//! number generator.
pub mod ordinary;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, gene::Gene, genome::Genome,
    population::Candidate, rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces a single unscored child from a read-only population snapshot.
pub trait BreedStrategy<G: Gene>
where
    Self: Debug + Send + Sync,
{
    /// Breeds one child.
    ///
    /// ## Parameters
    ///
    /// - `population`: The current population, sorted ascending by score.
    /// - `options`: Run parameters (mutation power, genes to mutate, ...).
    /// - `params`: Per-run gene parameters.
    /// - `rng`: The random number generator owned by this offspring slot.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The population is empty
    /// - The parents cannot be recombined
    /// - The mutation settings do not fit the genome
    fn breed(
        &self,
        population: &[Candidate<G>],
        options: &EvolutionOptions,
        params: &G::Params,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Genome<G>>;
}

pub use ordinary::OrdinaryStrategy;
