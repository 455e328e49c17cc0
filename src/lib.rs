//! # genfit
//!
//! A small generational genetic-algorithm engine. Candidates are fixed-length
//! genomes of typed genes, scored by a caller-supplied oracle where lower is
//! better. Each generation keeps the best candidates, breeds offspring from
//! elite-biased parents with segment crossover and field mutation, and scores
//! them in parallel on the rayon thread pool.
//!
//! Two gene kinds ship with the crate: `PolygonGene` for image approximation
//! and `TextGene` for string matching.

pub mod breeding;
pub mod caching;
pub mod error;
pub mod evolution;
pub mod gene;
pub mod genome;
pub mod population;
pub mod rng;
pub mod selection;
pub mod text;

// Re-export commonly used types for convenience
pub use breeding::{BreedStrategy, OrdinaryStrategy};
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{
    EvolutionLauncher, EvolutionOptions, EvolutionResult, FitnessThreshold, Goal, LogLevel,
    Observer, Oracle,
};
pub use gene::{CharacterBounds, Gene, PolygonGene, TextGene};
pub use genome::Genome;
pub use population::{Candidate, Population};
pub use selection::{EliteSelection, SelectionStrategy};
