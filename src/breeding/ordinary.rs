//! # OrdinaryStrategy
//!
//! The `OrdinaryStrategy` picks two parents with a selection strategy, swaps a
//! contiguous gene segment of the second into a copy of the first, and
//! mutates the result.
use std::fmt::Debug;

use super::BreedStrategy;
use crate::{
    error::Result,
    evolution::options::EvolutionOptions,
    gene::Gene,
    genome::Genome,
    population::Candidate,
    rng::RandomNumberGenerator,
    selection::{EliteSelection, SelectionStrategy},
};

/// # OrdinaryStrategy
///
/// Select twice, cross over, mutate. Parents may be the same candidate.
#[derive(Debug, Clone)]
pub struct OrdinaryStrategy<S = EliteSelection> {
    selection: S,
}

impl OrdinaryStrategy<EliteSelection> {
    /// Creates a new `OrdinaryStrategy` using elite selection.
    pub fn new() -> Self {
        Self {
            selection: EliteSelection,
        }
    }
}

impl<S> OrdinaryStrategy<S> {
    /// Creates a new `OrdinaryStrategy` with a custom selection strategy.
    pub fn with_selection(selection: S) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }
}

impl Default for OrdinaryStrategy<EliteSelection> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, S> BreedStrategy<G> for OrdinaryStrategy<S>
where
    G: Gene,
    S: SelectionStrategy<G>,
{
    fn breed(
        &self,
        population: &[Candidate<G>],
        options: &EvolutionOptions,
        params: &G::Params,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Genome<G>> {
        let mother = self.selection.select(population, rng)?;
        let father = self.selection.select(population, rng)?;

        let mut child = mother.genome.crossover(&father.genome, rng)?;
        child.mutate(
            options.get_genes_to_mutate(),
            options.get_mutation_power(),
            params,
            rng,
        )?;

        Ok(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::GeneticError,
        gene::{CharacterBounds, TextGene},
    };

    fn population(texts: &[&str]) -> Vec<Candidate<TextGene>> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Candidate::new(Genome::from_text(text), i as f64))
            .collect()
    }

    #[test]
    fn test_breed() {
        let mut rng = RandomNumberGenerator::from_seed(51);
        let options = EvolutionOptions::builder()
            .genome_size(4)
            .genes_to_mutate(1)
            .build();
        let bounds = CharacterBounds::default();
        let parents = population(&["aaaa", "bbbb", "cccc"]);
        let strategy = OrdinaryStrategy::default();

        for _ in 0..200 {
            let child = strategy.breed(&parents, &options, &bounds, &mut rng).unwrap();
            assert_eq!(child.len(), 4);
            assert!(child.in_bounds(&bounds));
        }
    }

    #[test]
    fn test_breed_empty_parents() {
        let mut rng = RandomNumberGenerator::from_seed(52);
        let options = EvolutionOptions::default();
        let strategy = OrdinaryStrategy::default();
        let parents: Vec<Candidate<TextGene>> = Vec::new();

        let result = strategy.breed(&parents, &options, &CharacterBounds::default(), &mut rng);
        match result {
            Err(GeneticError::EmptyPopulation) => (),
            _ => panic!("Expected EmptyPopulation error"),
        }
    }
}
