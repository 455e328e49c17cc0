use std::fmt;

use super::{CharacterBounds, FieldMut, Gene};
use crate::rng::RandomNumberGenerator;

/// A single character of an evolving string.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextGene(pub char);

impl Gene for TextGene {
    type Params = CharacterBounds;
    const FIELD_COUNT: usize = 1;

    fn random(params: &CharacterBounds, rng: &mut RandomNumberGenerator) -> Self {
        Self(params.random(rng))
    }

    fn field_mut(&mut self, index: usize, params: &CharacterBounds) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::Character(&mut self.0, *params)),
            _ => None,
        }
    }

    fn in_bounds(&self, params: &CharacterBounds) -> bool {
        params.contains(self.0)
    }
}

impl fmt::Display for TextGene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
