//! # Observers
//!
//! An observer is called by the coordinating thread once after the initial
//! population is scored (generation 0) and once after every completed
//! generation. It only sees the population; nothing it does feeds back into
//! the run. Typical uses are progress reporting and exporting snapshots of
//! the current best candidate.

use tracing::info;

use crate::{gene::Gene, population::Population};

/// Per-generation callback.
///
/// Any `FnMut(usize, &Population<G>)` closure is an observer.
pub trait Observer<G: Gene> {
    fn observe(&mut self, generation: usize, population: &Population<G>);
}

impl<G, F> Observer<G> for F
where
    G: Gene,
    F: FnMut(usize, &Population<G>),
{
    fn observe(&mut self, generation: usize, population: &Population<G>) {
        self(generation, population)
    }
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<G: Gene> Observer<G> for NoopObserver {
    fn observe(&mut self, _generation: usize, _population: &Population<G>) {}
}

/// Logs the best score every `every` generations.
#[derive(Debug, Clone, Copy)]
pub struct ProgressLogger {
    every: usize,
}

impl ProgressLogger {
    /// Creates a logger reporting every `every` generations (at least every generation).
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }

    pub fn every(&self) -> usize {
        self.every
    }
}

impl Default for ProgressLogger {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl<G: Gene> Observer<G> for ProgressLogger {
    fn observe(&mut self, generation: usize, population: &Population<G>) {
        if generation % self.every != 0 {
            return;
        }

        if let Some(best) = population.best() {
            info!(generation, best_score = best.score, "progress");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        gene::TextGene,
        genome::Genome,
        population::{Candidate, Population},
    };

    #[test]
    fn test_closure_observer() {
        let population = Population::new(vec![Candidate::new(
            Genome::<TextGene>::from_text("ab"),
            2.0,
        )]);
        let mut seen = Vec::new();
        let mut observer = |generation: usize, population: &Population<TextGene>| {
            seen.push((generation, population.len()));
        };

        observer.observe(0, &population);
        observer.observe(1, &population);

        assert_eq!(seen, vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn test_progress_logger_interval() {
        assert_eq!(ProgressLogger::new(0).every(), 1);
        assert_eq!(ProgressLogger::default().every(), 1000);

        let population: Population<TextGene> = Population::new(Vec::new());
        let mut logger = ProgressLogger::new(10);
        logger.observe(20, &population);
    }
}
