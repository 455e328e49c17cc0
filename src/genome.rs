//! # Genome
//!
//! A `Genome` is the fixed-length, ordered sequence of genes that makes up one
//! candidate solution. It provides the two variation operators of the
//! algorithm:
//!
//! ### `crossover(&self, other, rng)`
//!
//! Copies one contiguous block of genes from `other` into a copy of `self`.
//!
//! ### `mutate(&mut self, genes_to_mutate, power, params, rng)`
//!
//! Mutates `genes_to_mutate` distinct gene positions, each through
//! [`Gene::mutate`], which changes exactly one field of the gene.
//!
//! ## Example
//!
//! ```rust
//! use genfit::gene::{CharacterBounds, TextGene};
//! use genfit::genome::Genome;
//! use genfit::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(5);
//! let mother = Genome::from_text("aaaaaa");
//! let father = Genome::from_text("bbbbbb");
//!
//! let mut child = mother.crossover(&father, &mut rng).unwrap();
//! assert_eq!(child.len(), 6);
//!
//! child.mutate(2, 0.1, &CharacterBounds::default(), &mut rng).unwrap();
//! ```

use std::fmt;

use crate::{
    error::{GeneticError, Result},
    gene::{Gene, TextGene},
    rng::RandomNumberGenerator,
};

/// Ordered sequence of genes belonging to one candidate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Genome<G: Gene> {
    genes: Vec<G>,
}

impl<G: Gene> Genome<G> {
    pub fn from_genes(genes: Vec<G>) -> Self {
        Self { genes }
    }

    /// Creates a genome of `length` random genes.
    pub fn random(length: usize, params: &G::Params, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            genes: (0..length).map(|_| G::random(params, rng)).collect(),
        }
    }

    pub fn genes(&self) -> &[G] {
        &self.genes
    }

    pub fn into_genes(self) -> Vec<G> {
        self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns true if every gene lies within its bounds.
    pub fn in_bounds(&self, params: &G::Params) -> bool {
        self.genes.iter().all(|gene| gene.in_bounds(params))
    }

    /// Combines `self` with `other` by swapping in one contiguous segment.
    ///
    /// A range `[lo, hi)` is drawn with `lo` in `[0, len - 1)` and `hi` in
    /// `[lo, len)`. The child takes genes from `other` inside the range and
    /// from `self` everywhere else. The segment may be empty.
    ///
    /// # Errors
    ///
    /// - `GeneticError::Breeding` if the parents differ in length.
    /// - `GeneticError::Configuration` if the genome has fewer than two genes,
    ///   in which case no range can be drawn.
    pub fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Result<Self> {
        let length = self.genes.len();
        if other.genes.len() != length {
            return Err(GeneticError::Breeding(format!(
                "Parent genomes differ in length: {} vs {}",
                length,
                other.genes.len()
            )));
        }

        if length < 2 {
            return Err(GeneticError::Configuration(format!(
                "Crossover needs a genome of at least 2 genes (got {})",
                length
            )));
        }

        let lo = rng.gen_range(0..length - 1);
        let hi = lo + rng.gen_range(0..length - lo);

        let genes = self
            .genes
            .iter()
            .zip(&other.genes)
            .enumerate()
            .map(|(i, (own, theirs))| {
                if (lo..hi).contains(&i) {
                    theirs.clone()
                } else {
                    own.clone()
                }
            })
            .collect();

        Ok(Self { genes })
    }

    /// Mutates `genes_to_mutate` distinct positions, each by one field.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if `genes_to_mutate`
    /// exceeds the genome length.
    pub fn mutate(
        &mut self,
        genes_to_mutate: usize,
        power: f64,
        params: &G::Params,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if genes_to_mutate > self.genes.len() {
            return Err(GeneticError::Configuration(format!(
                "Cannot mutate {} genes of a genome with {}",
                genes_to_mutate,
                self.genes.len()
            )));
        }

        for index in rng.distinct_indices(self.genes.len(), genes_to_mutate) {
            self.genes[index].mutate(power, params, rng);
        }

        Ok(())
    }
}

impl Genome<TextGene> {
    /// Builds a text genome holding the characters of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_genes(text.chars().map(TextGene).collect())
    }
}

impl fmt::Display for Genome<TextGene> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.genes.iter().try_for_each(|gene| write!(f, "{}", gene))
    }
}
