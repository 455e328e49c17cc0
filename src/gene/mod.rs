//! # Gene Trait
//!
//! A gene is the smallest independently mutable unit of a genome. Genes expose
//! their attributes through [`FieldMut`], which lets the default
//! [`Gene::mutate`] pick one field uniformly and apply that field kind's
//! perturbation rule, leaving every other field untouched.
//!
//! ## Example
//!
//! ```rust
//! use genfit::gene::{FieldMut, Gene};
//! use genfit::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Grey {
//!     level: u8,
//!     opacity: f64,
//! }
//!
//! impl Gene for Grey {
//!     type Params = ();
//!     const FIELD_COUNT: usize = 2;
//!
//!     fn random(_params: &(), rng: &mut RandomNumberGenerator) -> Self {
//!         Self { level: rng.gen_range(0..=255), opacity: rng.uniform() }
//!     }
//!
//!     fn field_mut(&mut self, index: usize, _params: &()) -> Option<FieldMut<'_>> {
//!         match index {
//!             0 => Some(FieldMut::Discrete(&mut self.level)),
//!             1 => Some(FieldMut::Continuous(&mut self.opacity)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn in_bounds(&self, _params: &()) -> bool {
//!         (0.0..=1.0).contains(&self.opacity)
//!     }
//! }
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let mut gene = Grey::random(&(), &mut rng);
//! gene.mutate(0.3, &(), &mut rng);
//! assert!(gene.in_bounds(&()));
//! ```
pub mod field;
pub mod polygon;
pub mod text;

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

pub use field::{CharacterBounds, FieldMut, MAX_MUTATION_ATTEMPTS};
pub use polygon::PolygonGene;
pub use text::TextGene;

/// Trait for the building blocks of a genome.
///
/// Types implementing this trait must be `Clone`, `Debug`, `PartialEq`, `Send`
/// and `Sync` so genomes can be copied into offspring on rayon workers and
/// compared in tests.
pub trait Gene: Clone + Debug + PartialEq + Send + Sync {
    /// Per-run parameters shared by every gene of this kind (e.g. a character range).
    type Params: Debug + Clone + Default + Send + Sync;

    /// Number of independently mutable fields.
    const FIELD_COUNT: usize;

    /// Creates a gene with every field drawn at random within its bounds.
    fn random(params: &Self::Params, rng: &mut RandomNumberGenerator) -> Self;

    /// Returns the field at `index`, or `None` if `index >= FIELD_COUNT`.
    fn field_mut(&mut self, index: usize, params: &Self::Params) -> Option<FieldMut<'_>>;

    /// Returns true if every field lies within its declared bounds.
    fn in_bounds(&self, params: &Self::Params) -> bool;

    /// Perturbs exactly one field, chosen uniformly among the gene's fields.
    fn mutate(&mut self, power: f64, params: &Self::Params, rng: &mut RandomNumberGenerator) {
        if Self::FIELD_COUNT == 0 {
            return;
        }

        let index = rng.gen_range(0..Self::FIELD_COUNT);
        if let Some(field) = self.field_mut(index, params) {
            field.perturb(power, rng);
        }
    }
}
