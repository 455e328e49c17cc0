use std::fmt::Debug;

use crate::error::Result;
use crate::gene::Gene;
use crate::population::Candidate;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// Selection strategies pick one parent out of a population that has already
/// been sorted best-first. They are called concurrently from every offspring
/// task, each with that task's own random number generator.
///
/// # Examples
///
/// ```
/// use genfit::gene::TextGene;
/// use genfit::genome::Genome;
/// use genfit::population::Candidate;
/// use genfit::rng::RandomNumberGenerator;
/// use genfit::selection::{EliteSelection, SelectionStrategy};
///
/// let population = vec![
///     Candidate::new(Genome::<TextGene>::from_text("ab"), 0.0),
///     Candidate::new(Genome::from_text("ac"), 1.0),
///     Candidate::new(Genome::from_text("zz"), 9.0),
/// ];
/// let mut rng = RandomNumberGenerator::from_seed(3);
///
/// let parent = EliteSelection.select(&population, &mut rng).unwrap();
/// assert!(population.contains(parent));
/// ```
pub trait SelectionStrategy<G>: Debug + Send + Sync
where
    G: Gene,
{
    /// Selects one candidate from a best-first population.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if `population` is empty.
    fn select<'a>(
        &self,
        population: &'a [Candidate<G>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Candidate<G>>;
}
