//! # Population
//!
//! Scored candidates and the bookkeeping the generational loop performs on
//! them: a stable fitness-ascending sort, truncation back to the configured
//! size, and lookup of the best candidate.

use std::cmp::Ordering;

use crate::{gene::Gene, genome::Genome};

/// A genome together with its fitness score. Lower scores are better.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<G: Gene> {
    pub genome: Genome<G>,
    pub score: f64,
}

impl<G: Gene> Candidate<G> {
    pub fn new(genome: Genome<G>, score: f64) -> Self {
        Self { genome, score }
    }

    fn cmp_score(&self, other: &Self) -> Ordering {
        self.score.total_cmp(&other.score)
    }
}

/// Ordered collection of candidates.
///
/// Between generations the population may hold more candidates than the
/// configured maximum; [`Population::sort`] followed by
/// [`Population::truncate`] restores the bound and puts the best candidate in
/// slot 0.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Population<G: Gene> {
    candidates: Vec<Candidate<G>>,
}

impl<G: Gene> Population<G> {
    pub fn new(candidates: Vec<Candidate<G>>) -> Self {
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[Candidate<G>] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate<G>> {
        self.candidates.iter()
    }

    /// Sorts ascending by score. Ties keep their current order.
    pub fn sort(&mut self) {
        self.candidates.sort_by(Candidate::cmp_score);
    }

    /// Drops every candidate past `max_size`.
    pub fn truncate(&mut self, max_size: usize) {
        self.candidates.truncate(max_size);
    }

    /// Appends freshly scored offspring.
    pub fn extend<I>(&mut self, offspring: I)
    where
        I: IntoIterator<Item = Candidate<G>>,
    {
        self.candidates.extend(offspring);
    }

    /// Returns the lowest-scoring candidate, whether or not the population is sorted.
    pub fn best(&self) -> Option<&Candidate<G>> {
        self.candidates.iter().min_by(|a, b| a.cmp_score(b))
    }

    pub fn into_candidates(self) -> Vec<Candidate<G>> {
        self.candidates
    }
}

impl<'a, G: Gene> IntoIterator for &'a Population<G> {
    type Item = &'a Candidate<G>;
    type IntoIter = std::slice::Iter<'a, Candidate<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
