use crate::{
    breeding::{BreedStrategy, OrdinaryStrategy},
    error::{GeneticError, Result},
    gene::Gene,
};

use super::{
    goal::{FitnessThreshold, Goal},
    oracle::Oracle,
    EvolutionLauncher,
};

/// Step-by-step construction of an `EvolutionLauncher`.
///
/// The oracle, the breeding strategy and the goal are required. Gene
/// parameters fall back to `G::Params::default()`.
#[derive(Debug, Clone)]
pub struct EvolutionLauncherBuilder<G, O, B = OrdinaryStrategy, T = FitnessThreshold>
where
    G: Gene,
{
    oracle: Option<O>,
    breed_strategy: Option<B>,
    goal: Option<T>,
    params: Option<G::Params>,
}

impl<G, O, B, T> EvolutionLauncherBuilder<G, O, B, T>
where
    G: Gene,
    O: Oracle<G>,
    B: BreedStrategy<G>,
    T: Goal,
{
    pub fn new() -> Self {
        Self {
            oracle: None,
            breed_strategy: None,
            goal: None,
            params: None,
        }
    }

    pub fn with_oracle(mut self, oracle: O) -> Self {
        self.oracle = Some(oracle);
        self
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_goal(mut self, goal: T) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn with_gene_params(mut self, params: G::Params) -> Self {
        self.params = Some(params);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<G, O, B, T>> {
        let oracle = self
            .oracle
            .ok_or_else(|| GeneticError::Configuration("Oracle not specified".to_string()))?;

        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GeneticError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let goal = self
            .goal
            .ok_or_else(|| GeneticError::Configuration("Goal not specified".to_string()))?;

        Ok(EvolutionLauncher::from_parts(
            oracle,
            breed_strategy,
            goal,
            self.params.unwrap_or_default(),
        ))
    }
}

impl<G, O, B, T> Default for EvolutionLauncherBuilder<G, O, B, T>
where
    G: Gene,
    O: Oracle<G>,
    B: BreedStrategy<G>,
    T: Goal,
{
    fn default() -> Self {
        Self::new()
    }
}
