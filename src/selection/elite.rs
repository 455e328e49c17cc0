use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::population::Candidate;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Rank-biased selection that favours the front of a sorted population.
///
/// The index is drawn as `u1 * u2 * len` for two independent uniforms in
/// `[0, 1)`. The product is skewed toward zero, so candidates near the front
/// (the fittest, once the population is sorted ascending) are picked far more
/// often than those at the back. Only rank matters; the size of the fitness
/// gap between candidates has no effect.
///
/// # Examples
///
/// ```
/// use genfit::gene::TextGene;
/// use genfit::genome::Genome;
/// use genfit::population::Candidate;
/// use genfit::rng::RandomNumberGenerator;
/// use genfit::selection::EliteSelection;
///
/// let population: Vec<Candidate<TextGene>> = (0..10)
///     .map(|i| Candidate::new(Genome::from_text("xy"), i as f64))
///     .collect();
/// let mut rng = RandomNumberGenerator::from_seed(8);
///
/// let index = EliteSelection.select_index(population.len(), &mut rng);
/// assert!(index < population.len());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EliteSelection;

impl EliteSelection {
    pub fn new() -> Self {
        Self
    }

    /// Draws an index in `0..len`. `len` must be non-zero.
    pub fn select_index(&self, len: usize, rng: &mut RandomNumberGenerator) -> usize {
        let draws = rng.fetch_uniform(0.0, 1.0, 2);
        let product: f64 = draws.iter().product();
        ((product * len as f64) as usize).min(len.saturating_sub(1))
    }
}

impl<G> SelectionStrategy<G> for EliteSelection
where
    G: Gene,
{
    fn select<'a>(
        &self,
        population: &'a [Candidate<G>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Candidate<G>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        Ok(&population[self.select_index(population.len(), rng)])
    }
}
