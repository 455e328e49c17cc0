use rayon::prelude::*;
use tracing::{debug, error, info, info_span};

use super::{
    goal::{FitnessThreshold, Goal},
    observer::{NoopObserver, Observer},
    options::{EvolutionOptions, LogLevel},
    oracle::Oracle,
};
use crate::{
    breeding::{BreedStrategy, OrdinaryStrategy},
    error::{GeneticError, OptionExt, Result, Stage},
    gene::Gene,
    genome::Genome,
    population::{Candidate, Population},
    rng::RandomNumberGenerator,
};

/// The outcome of a run: the best candidate and how many generations it took.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<G: Gene> {
    /// The lowest-scoring candidate of the final population.
    pub best: Candidate<G>,
    /// Number of generations executed after the initial population.
    pub generations: usize,
}

/// Runs the generational loop with a breeding strategy, an oracle and a goal.
///
/// # Example
///
/// ```rust
/// use genfit::{
///     error::Result,
///     evolution::{EvolutionLauncher, EvolutionOptions},
///     gene::TextGene,
///     genome::Genome,
/// };
///
/// let target: Vec<char> = "hi".chars().collect();
/// let oracle = move |genome: &Genome<TextGene>| -> Result<f64> {
///     Ok(genome
///         .genes()
///         .iter()
///         .zip(&target)
///         .map(|(gene, want)| (gene.0 as i64 - *want as i64).pow(2) as f64)
///         .sum())
/// };
///
/// let options = EvolutionOptions::builder()
///     .population_size(8)
///     .genome_size(2)
///     .genes_to_mutate(1)
///     .max_generations(Some(50))
///     .seed(1)
///     .build();
///
/// let launcher: EvolutionLauncher<TextGene, _> = EvolutionLauncher::new(oracle);
/// let result = launcher.evolve(&options).unwrap();
/// assert!(result.generations <= 50);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<G, O, B = OrdinaryStrategy, T = FitnessThreshold>
where
    G: Gene,
{
    oracle: O,
    strategy: B,
    goal: T,
    params: G::Params,
}

impl<G, O> EvolutionLauncher<G, O, OrdinaryStrategy, FitnessThreshold>
where
    G: Gene,
    O: Oracle<G>,
{
    /// Creates a launcher with the ordinary breeding strategy, a goal of
    /// `score <= 0.0` and default gene parameters.
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            strategy: OrdinaryStrategy::default(),
            goal: FitnessThreshold::default(),
            params: G::Params::default(),
        }
    }
}

impl<G, O, B, T> EvolutionLauncher<G, O, B, T>
where
    G: Gene,
    O: Oracle<G>,
    B: BreedStrategy<G>,
    T: Goal,
{
    pub fn from_parts(oracle: O, strategy: B, goal: T, params: G::Params) -> Self {
        Self {
            oracle,
            strategy,
            goal,
            params,
        }
    }

    pub fn with_gene_params(mut self, params: G::Params) -> Self {
        self.params = params;
        self
    }

    pub fn with_goal<T2: Goal>(self, goal: T2) -> EvolutionLauncher<G, O, B, T2> {
        EvolutionLauncher {
            oracle: self.oracle,
            strategy: self.strategy,
            goal,
            params: self.params,
        }
    }

    pub fn with_breed_strategy<B2: BreedStrategy<G>>(
        self,
        strategy: B2,
    ) -> EvolutionLauncher<G, O, B2, T> {
        EvolutionLauncher {
            oracle: self.oracle,
            strategy,
            goal: self.goal,
            params: self.params,
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn gene_params(&self) -> &G::Params {
        &self.params
    }

    /// Runs the algorithm without an observer.
    pub fn evolve(&self, options: &EvolutionOptions) -> Result<EvolutionResult<G>> {
        self.run(options, &mut NoopObserver)
    }

    /// Evolves a random population until the goal is reached or the
    /// generation cap is hit.
    ///
    /// Each generation sorts the population best-first, truncates it to the
    /// configured size, checks the stop conditions, then breeds and scores
    /// `num_offspring` children concurrently and appends them. The observer
    /// sees the population after generation 0 (the scored initial
    /// population) and after every completed generation.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail validation
    /// - The oracle fails, or returns a non-finite score, for any candidate
    /// - Breeding fails for any offspring slot
    ///
    /// No partial result is returned on error.
    pub fn run<Obs>(
        &self,
        options: &EvolutionOptions,
        observer: &mut Obs,
    ) -> Result<EvolutionResult<G>>
    where
        Obs: Observer<G> + ?Sized,
    {
        options.validate()?;

        let seed = options
            .get_seed()
            .unwrap_or_else(RandomNumberGenerator::entropy_seed);
        let span = info_span!("evolve", seed);
        let _guard = span.enter();

        debug!(
            population_size = options.get_population_size(),
            genome_size = options.get_genome_size(),
            num_offspring = options.get_num_offspring(),
            mutation_power = options.get_mutation_power(),
            genes_to_mutate = options.get_genes_to_mutate(),
            max_generations = ?options.get_max_generations(),
            "starting evolution"
        );

        let mut population = self.initialize(options, seed)?;
        observer.observe(0, &population);

        let mut generation = 0;
        loop {
            population.sort();
            population.truncate(options.get_population_size());

            let best_score = population
                .candidates()
                .first()
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?
                .score;
            self.log_generation(options, generation, &population);

            if self.goal.is_reached(best_score) {
                info!(generation, best_score, "goal reached");
                break;
            }

            if options
                .get_max_generations()
                .is_some_and(|max| generation >= max)
            {
                info!(generation, best_score, "generation cap reached");
                break;
            }

            let offspring = self.produce_offspring(&population, options, seed, generation)?;
            population.extend(offspring);

            generation += 1;
            observer.observe(generation, &population);
        }

        let best = population
            .into_candidates()
            .into_iter()
            .next()
            .ok_or_else_genetic(|| {
                GeneticError::Evolution("Evolution finished with an empty population".to_string())
            })?;

        Ok(EvolutionResult {
            best,
            generations: generation,
        })
    }

    /// Builds and scores the initial population.
    ///
    /// Genomes are drawn sequentially from the run stream; scoring runs in parallel.
    fn initialize(&self, options: &EvolutionOptions, seed: u64) -> Result<Population<G>> {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let genomes: Vec<Genome<G>> = (0..options.get_population_size())
            .map(|_| Genome::random(options.get_genome_size(), &self.params, &mut rng))
            .collect();

        let results: Vec<Result<Candidate<G>>> = genomes
            .into_par_iter()
            .enumerate()
            .map(|(slot, genome)| -> Result<Candidate<G>> {
                let score = self.evaluate(&genome, Stage::Initialization, 0, slot)?;
                Ok(Candidate::new(genome, score))
            })
            .collect();

        Ok(Population::new(Self::gather(results)?))
    }

    /// Breeds and scores one generation of offspring (fork-join).
    ///
    /// Every slot gets its own random stream derived from the run seed, the
    /// generation and the slot, and only reads `population`. Results come back
    /// in slot order regardless of which task finishes first.
    fn produce_offspring(
        &self,
        population: &Population<G>,
        options: &EvolutionOptions,
        seed: u64,
        generation: usize,
    ) -> Result<Vec<Candidate<G>>> {
        let parents = population.candidates();

        let results: Vec<Result<Candidate<G>>> = (0..options.get_num_offspring())
            .into_par_iter()
            .map(|slot| -> Result<Candidate<G>> {
                let mut rng = RandomNumberGenerator::for_task(seed, generation, slot);
                let genome = self
                    .strategy
                    .breed(parents, options, &self.params, &mut rng)?;
                let score = self.evaluate(&genome, Stage::Evaluation, generation, slot)?;
                Ok(Candidate::new(genome, score))
            })
            .collect();

        Self::gather(results)
    }

    fn evaluate(
        &self,
        genome: &Genome<G>,
        stage: Stage,
        generation: usize,
        slot: usize,
    ) -> Result<f64> {
        let score = self
            .oracle
            .score(genome)
            .map_err(|e| {
                GeneticError::oracle(stage, generation, slot, format!("{:?}", genome), e)
            })?;

        if !score.is_finite() {
            return Err(GeneticError::oracle(
                stage,
                generation,
                slot,
                format!("{:?}", genome),
                GeneticError::InvalidNumericValue(format!(
                    "Non-finite fitness score encountered: {}",
                    score
                )),
            ));
        }

        Ok(score)
    }

    /// Keeps every candidate if all slots succeeded. Otherwise logs each
    /// failure and returns the one from the lowest slot.
    fn gather(results: Vec<Result<Candidate<G>>>) -> Result<Vec<Candidate<G>>> {
        let mut candidates = Vec::with_capacity(results.len());
        let mut first_error = None;

        for result in results {
            match result {
                Ok(candidate) => candidates.push(candidate),
                Err(e) => {
                    error!(error = %e, "candidate discarded");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(candidates),
        }
    }

    fn log_generation(
        &self,
        options: &EvolutionOptions,
        generation: usize,
        population: &Population<G>,
    ) {
        let best_score = population.candidates().first().map(|c| c.score);

        match options.get_log_level() {
            LogLevel::Minimal => info!(generation, best_score = ?best_score, "generation"),
            LogLevel::Verbose => {
                info!(generation, best_score = ?best_score, "generation");
                for (rank, candidate) in population.iter().enumerate() {
                    debug!(
                        generation,
                        rank,
                        score = candidate.score,
                        genome = ?candidate.genome,
                        "candidate"
                    );
                }
            }
            LogLevel::None => {}
        }
    }
}
